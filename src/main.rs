use std::io::{self, BufRead, Write};
use std::time::Duration;

use clap::{Parser, Subcommand};
use log::{debug, error};

use recipe_finder::{render, FinderError, RecipeFinder};

/// recipe-finder - find recipes from the ingredients you have
#[derive(Parser)]
#[command(name = "recipe-finder")]
#[command(about = "Find recipes from the ingredients you already have", long_about = None)]
#[command(version)]
struct Cli {
    /// Spoonacular API key (demo recipes are used without one)
    #[arg(long, global = true, env = "SPOONACULAR_API_KEY")]
    api_key: Option<String>,

    /// Use the built-in demo recipes even if an API key is configured
    #[arg(long, global = true)]
    demo: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search recipes for a list of ingredients
    Search {
        /// Ingredients to search with (up to 10)
        #[arg(required = true)]
        ingredients: Vec<String>,
    },
    /// Show the full recipe for an id
    Details {
        /// Recipe id
        id: u64,
    },
    /// Build an ingredient list and browse results interactively
    Interactive,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let cli = Cli::parse();
    let mut finder = build_finder(&cli)?;
    debug!("Using {} recipe source", finder.source_name());

    match cli.command {
        Commands::Search { ref ingredients } => {
            for ingredient in ingredients {
                if let Err(e) = finder.add_ingredient(ingredient) {
                    notice(&format!("{}: {}", ingredient.trim(), e));
                }
            }
            let results = finder.search().await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(results)?);
            } else {
                println!("{}", render::results(results));
            }
        }
        Commands::Details { id } => {
            let detail = finder.details_by_id(id).await?;
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&detail)?);
            } else {
                println!("{}", render::detail(&detail));
            }
        }
        Commands::Interactive => interactive(&mut finder).await?,
    }

    Ok(())
}

fn build_finder(cli: &Cli) -> Result<RecipeFinder, FinderError> {
    let mut builder = RecipeFinder::builder();
    if cli.demo {
        return builder.demo().build();
    }
    if let Some(key) = &cli.api_key {
        builder = builder.api_key(key);
    }
    if let Some(secs) = cli.timeout {
        builder = builder.timeout(Duration::from_secs(secs));
    }
    builder.build()
}

/// Transient, non-fatal message for the user
fn notice(message: &str) {
    eprintln!("! {}", message);
}

const HELP: &str = "Commands:
  add <ingredient>     add an ingredient
  remove <ingredient>  remove an ingredient
  list                 show the ingredient list
  search               search recipes for the list
  show <n>             show result number n
  help                 show this help
  quit                 exit";

async fn interactive(finder: &mut RecipeFinder) -> Result<(), Box<dyn std::error::Error>> {
    println!("Using {} recipes. Type 'help' for commands.", finder.source_name());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let (command, argument) = match line.trim().split_once(' ') {
            Some((command, argument)) => (command, argument.trim()),
            None => (line.trim(), ""),
        };

        match command {
            "" => {}
            "add" => match finder.add_ingredient(argument) {
                Ok(()) => println!("{}", render::ingredient_tags(finder.ingredients())),
                Err(e) => notice(&e.to_string()),
            },
            "remove" => {
                finder.remove_ingredient(argument);
                println!("{}", render::ingredient_tags(finder.ingredients()));
            }
            "list" => println!("{}", render::ingredient_tags(finder.ingredients())),
            "search" => match finder.search().await {
                Ok(results) => println!("{}", render::results(results)),
                Err(FinderError::NoIngredients) => notice(&FinderError::NoIngredients.to_string()),
                Err(e) => {
                    error!("Error fetching recipes: {}", e);
                    notice("Failed to load recipes. Please try again.");
                }
            },
            "show" => match argument.parse::<usize>() {
                Ok(n) if n > 0 => match finder.details(n - 1).await {
                    Ok(detail) => println!("{}", render::detail(&detail)),
                    Err(FinderError::UnknownResult(_)) => notice("No such result"),
                    Err(e) => {
                        error!("Error fetching recipe details: {}", e);
                        notice("Failed to load recipe details");
                    }
                },
                _ => notice("Usage: show <n>"),
            },
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => notice(&format!("Unknown command '{}'", other)),
        }
    }

    Ok(())
}
