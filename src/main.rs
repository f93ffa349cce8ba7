use clap::{Parser, Subcommand};
use std::env;
use swapi_navigator::commands::*;
use swapi_navigator::core::{
    error::{NavigatorError, Result},
    print_error, print_unknown_category,
};

#[derive(Parser)]
#[command(name = "swapi-navigator")]
#[command(about = "Browse Star Wars characters, planets and starships from SWAPI")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// SWAPI base URL (overrides config and SWAPI_BASE_URL)
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive browser (default)
    Browse,
    /// Print one page of a category
    List {
        /// characters, planets or starships (or c, p, s)
        category: String,
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
    /// Search a whole category by name
    Search {
        /// characters, planets or starships (or c, p, s)
        category: String,
        /// Case-insensitive name fragment
        #[arg(required = true)]
        term: Vec<String>,
    },
    /// Show the details of one item of a page
    Show {
        /// characters, planets or starships (or c, p, s)
        category: String,
        /// Item number as printed by `list`
        index: usize,
        /// Page number
        #[arg(long, default_value_t = 1)]
        page: u32,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    let base_url = cli.base_url;
    let result = match cli.command.unwrap_or(Commands::Browse) {
        Commands::Browse => execute_browse(base_url),
        Commands::List { category, page } => execute_list(base_url, &category, page),
        Commands::Search { category, term } => execute_search(base_url, &category, &term),
        Commands::Show {
            category,
            index,
            page,
        } => execute_show(base_url, &category, index, page),
    };

    if let Err(e) = result {
        match e {
            NavigatorError::UnknownCategory { input } => print_unknown_category(&input),
            // Already shown in the error panel
            e if e.is_fetch_failure() => {}
            e => print_error(&e.to_string()),
        }
        std::process::exit(1);
    }

    Ok(())
}
