//! Run modes: logger init, message formatting, detection, completions.

use std::fs;
use std::io::{self, Write};

use chat_markup::core::app;
use chat_markup::core::config::Config;
use chat_markup::text::{Formatter, is_markup};
use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::{self, Args, OutputMode};

/// Initialize env_logger on stderr so stdout stays clean for output.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .target(env_logger::Target::Stderr)
        .try_init();
    log::debug!("{} {}", app::NAME, app::VERSION);
}

/// Message from `--file`, `--message`, or stdin (when the message is `-` or absent).
fn read_message(args: &Args) -> io::Result<String> {
    if let Some(path) = &args.file {
        return fs::read_to_string(path);
    }
    match args.message.as_deref() {
        None | Some("-") => io::read_to_string(io::stdin()),
        Some(message) => Ok(message.to_string()),
    }
}

/// Format the message and print it in the requested output mode.
pub fn run_format(args: &Args, config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let message = read_message(args)?;
    let width = args.width.map(usize::from).unwrap_or(config.wrap_width);
    let result = Formatter::new(width).format(message.as_str());

    let rendered = match args.output {
        OutputMode::Json => serde_json::to_string_pretty(&result)?,
        OutputMode::Hinted => result.to_hinted(),
        OutputMode::Text => result.visible_text(),
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered)?;
    stdout.flush()?;
    Ok(())
}

/// Print `markup` or `plain` for the message.
pub fn run_detect(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let message = read_message(args)?;
    let verdict = if is_markup(message.trim()) {
        "markup"
    } else {
        "plain"
    };
    println!("{}", verdict);
    Ok(())
}

/// Write a completion script for `shell` to stdout.
pub fn print_completions(shell: Shell) {
    let mut cmd = Args::command();
    cli::generate(shell, &mut cmd, app::NAME, &mut io::stdout());
}
