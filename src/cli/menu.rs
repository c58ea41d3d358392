//! Interactive menu loop.
//!
//! Every command failure is reported and drops back to the menu; nothing
//! here ends the process except choice 0 or a closed stdin.

use crate::cli::commands::{add, delete, list, stats, update, website};
use crate::models::config::Config;
use crate::services::omdb::OmdbClient;
use crate::storage::MovieStorage;
use crate::Result;
use colored::Colorize;
use std::io::Write;

/// Run the menu loop until the user exits.
pub async fn run(storage: &dyn MovieStorage, config: &Config) -> Result<()> {
    let client = OmdbClient::new(config.omdb.clone());

    loop {
        print_menu();
        let Some(choice) = prompt("Enter your choice: ")? else {
            println!("Exiting the app.");
            return Ok(());
        };

        let outcome = match choice.as_str() {
            "0" => {
                println!("Exiting the app.");
                return Ok(());
            }
            "1" => list::list_movies(storage),
            "2" => {
                let Some(title) = prompt("Enter the movie title: ")? else {
                    return Ok(());
                };
                add::add_movie(storage, &client, &title).await
            }
            "3" => {
                let Some(title) = prompt("Enter the title of the movie to delete: ")? else {
                    return Ok(());
                };
                delete::delete_movie(storage, &title)
            }
            "4" => {
                let Some(title) = prompt("Enter the title of the movie to update: ")? else {
                    return Ok(());
                };
                let Some(rating) = prompt("Enter the new rating: ")? else {
                    return Ok(());
                };
                update::update_rating(storage, &title, &rating)
            }
            "5" => stats::show_stats(storage),
            "9" => website::generate_website(storage, &config.website),
            _ => {
                println!("{}", "Invalid choice. Try again.".yellow());
                Ok(())
            }
        };

        if let Err(e) = outcome {
            println!("{} {}", "Error:".red().bold(), e);
        }
    }
}

fn print_menu() {
    println!();
    println!("{}", "--- Movie Shelf Menu ---".bold().cyan());
    println!("0. Exit");
    println!("1. List movies");
    println!("2. Add movie (fetch data from OMDb)");
    println!("3. Delete movie");
    println!("4. Update movie rating");
    println!("5. Show movie stats");
    println!("9. Generate website");
}

/// Print a prompt and read one trimmed line from stdin.
///
/// Returns `None` on EOF so the caller can exit the loop like choice 0
/// instead of surfacing an error or spinning forever.
fn prompt(message: &str) -> Result<Option<String>> {
    print!("{}", message);
    std::io::stdout().flush()?;

    let mut line = String::new();
    let bytes = std::io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
