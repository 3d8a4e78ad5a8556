//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  chat-markup -m \"plain **bold** plain\"      Print styled segments as JSON
  chat-markup -m - -o hinted < message.md     Read stdin, print hinted text
  chat-markup -f reply.md -o text             Print visible text only
  chat-markup -w 20 -m \"a long plain line\"    Wrap plain text at 20 columns
  chat-markup detect -m \"# Heading\"          Print 'markup' or 'plain'
  chat-markup completions bash                Generate bash completions
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Format chat messages with lightweight markup into styled segments",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Message text to format
    #[arg(
        short = 'm',
        long,
        global = true,
        help = "Message text (use '-' or omit to read from stdin)"
    )]
    pub message: Option<String>,

    /// Read the message from a file
    #[arg(short = 'f', long, global = true, conflicts_with = "message")]
    pub file: Option<PathBuf>,

    /// Output representation
    #[arg(short = 'o', long, value_enum, default_value_t = OutputMode::Json)]
    pub output: OutputMode,

    /// Wrap width for plain messages (overrides CHAT_MARKUP_WRAP_WIDTH)
    #[arg(short = 'w', long, value_parser = clap::value_parser!(u16).range(1..))]
    pub width: Option<u16>,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Formatting result as JSON (segments or wrapped text)
    Json,
    /// Single string with *bold*, _italic_ and "code" hints
    Hinted,
    /// Visible text only, styles dropped
    Text,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Report whether the message contains markup
    Detect,
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }
}
