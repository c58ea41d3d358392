//! Static gallery generation.
//!
//! The template is plain HTML with a single `{{MOVIES}}` marker; generation
//! is one substring replacement, nothing more.

use crate::models::movie::Collection;
use crate::{Error, Result};
use std::path::Path;

/// Marker token replaced by the rendered movie grid.
pub const MOVIE_GRID_MARKER: &str = "{{MOVIES}}";

/// Render one `<li>` fragment per movie, in collection order.
pub fn render_movie_grid(collection: &Collection) -> String {
    let mut html = String::new();
    for (title, entry) in collection.iter() {
        let year = entry
            .year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "N/A".to_string());
        html.push_str(&format!(
            r#"
        <li>
            <div class="movie">
                <img class="movie-poster" src="{}" alt="Poster">
                <div class="movie-title">{}</div>
                <div class="movie-year">{}</div>
            </div>
        </li>
"#,
            entry.poster, title, year
        ));
    }
    html
}

/// Substitute the movie grid into the template and write the result.
///
/// Fails without writing anything when the template is missing; overwrites
/// any existing output file otherwise.
pub fn generate_website(
    collection: &Collection,
    template_path: &Path,
    output_path: &Path,
) -> Result<()> {
    if !template_path.exists() {
        return Err(Error::TemplateNotFound(
            template_path.display().to_string(),
        ));
    }

    let template = std::fs::read_to_string(template_path)?;
    let page = template.replace(MOVIE_GRID_MARKER, &render_movie_grid(collection));
    std::fs::write(output_path, page)?;
    Ok(())
}
