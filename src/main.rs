use anyhow::Result;
use clap::{Parser, Subcommand};

use semantic_version::cli::{run_command, Command};
use semantic_version::{config, logging, ui, VersionBump};

#[derive(Parser)]
#[command(
    name = "semantic-version",
    version,
    about = "Parse, validate, compare and bump semantic versions"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long, global = true, help = "Log diagnostics to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that each argument is a valid semantic version
    Validate {
        #[arg(required = true)]
        versions: Vec<String>,
    },

    /// Compare two versions by precedence and print -1, 0 or 1
    Compare { left: String, right: String },

    /// Print the next major, minor or patch release
    Bump {
        #[arg(value_parser = parse_bump)]
        part: VersionBump,
        version: String,
    },

    /// Print the arguments ordered by precedence
    Sort {
        #[arg(short, long, help = "Highest precedence first")]
        descending: bool,

        #[arg(required = true)]
        versions: Vec<String>,
    },

    /// Show the components of a version
    Inspect { version: String },
}

fn parse_bump(value: &str) -> Result<VersionBump, String> {
    value.parse()
}

impl From<Commands> for Command {
    fn from(command: Commands) -> Self {
        match command {
            Commands::Validate { versions } => Command::Validate { versions },
            Commands::Compare { left, right } => Command::Compare { left, right },
            Commands::Bump { part, version } => Command::Bump { part, version },
            Commands::Sort {
                descending,
                versions,
            } => Command::Sort {
                versions,
                descending: descending.then_some(true),
            },
            Commands::Inspect { version } => Command::Inspect { version },
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load configuration
    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {:#}", e));
            std::process::exit(2);
        }
    };

    ui::set_color(config.display.color);

    if let Err(e) = logging::init_logging(&config.log, args.verbose, config.display.color) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(2);
    }

    let command = Command::from(args.command);
    match run_command(&command, &config) {
        Ok(outcome) => {
            ui::display_outcome(&outcome);
            if !outcome.success {
                std::process::exit(1);
            }
        }
        Err(e) => {
            ui::display_error(&format!("{:#}", e));
            std::process::exit(1);
        }
    }

    Ok(())
}
