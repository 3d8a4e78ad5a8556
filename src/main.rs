//! # chat-markup
//!
//! Command-line front end for the chat message formatting pipeline.
//!
//! ## Features
//! - Format a message from an argument, a file, or stdin
//! - JSON segments, hinted text, or visible text output
//! - Markup detection
//! - Shell completions

mod cli;
mod run;

use clap::Parser;
use dotenv::dotenv;

use cli::{Args, Commands};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    run::init_logger(&args);

    match &args.command {
        Some(Commands::Completions { shell }) => {
            run::print_completions(*shell);
            return Ok(());
        }
        Some(Commands::Detect) => return run::run_detect(&args),
        None => {}
    }

    // Print a user-friendly message; exit uses Display not Debug
    let config = chat_markup::core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });

    run::run_format(&args, &config)
}
