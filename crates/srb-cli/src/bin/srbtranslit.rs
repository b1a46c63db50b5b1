use std::process;

use clap::{Parser, Subcommand};

use srb_cli::commands::convert_ops::{self, Direction};
use srb_cli::commands::{data_ops, explain_ops};
use srb_cli::{logging, CliError};

#[derive(Parser)]
#[command(name = "srbtranslit", about = "Serbian Cyrillic/Latin transliterator")]
struct Cli {
    /// Linguistic data TOML to use instead of the embedded tables
    #[arg(long, global = true)]
    data: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Latin to Cyrillic; foreign words are left as they are
    Cyrillic {
        /// Text to convert (reads stdin line by line when omitted)
        text: Option<String>,
    },
    /// Cyrillic to Latin
    Latin {
        /// Text to convert (reads stdin line by line when omitted)
        text: Option<String>,
    },
    /// Cyrillic or Latin to Latin without diacritics
    Ascii {
        /// Text to convert (reads stdin line by line when omitted)
        text: Option<String>,
    },
    /// Show the per-word decisions of a Latin to Cyrillic conversion
    Explain {
        /// Latin text to explain
        text: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Inspect linguistic data files
    Data {
        #[command(subcommand)]
        command: DataCommand,
    },
}

#[derive(Subcommand)]
enum DataCommand {
    /// Print the embedded data TOML
    Export,
    /// Parse a data TOML file and print its table sizes
    Validate {
        /// Data TOML file
        file: String,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn run(cli: Cli) -> Result<(), CliError> {
    if let Some(path) = cli.data.as_deref() {
        data_ops::load_custom_data(path)?;
    }

    match cli.command {
        Command::Cyrillic { text } => convert_ops::convert_cmd(Direction::Cyrillic, text.as_deref()),
        Command::Latin { text } => convert_ops::convert_cmd(Direction::Latin, text.as_deref()),
        Command::Ascii { text } => convert_ops::convert_cmd(Direction::Ascii, text.as_deref()),
        Command::Explain { text, json } => explain_ops::explain_cmd(&text, json),
        Command::Data { command } => match command {
            DataCommand::Export => data_ops::data_export(),
            DataCommand::Validate { file, json } => data_ops::validate_cmd(&file, json),
        },
    }
}

fn main() {
    logging::init_logging();
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
