//! CLI definitions and entry point

use std::path::PathBuf;

use clap::Parser;

use super::commands;
use next_review::config::{ConfigFile, Overrides, Settings};
use next_review::output::OutputMode;

/// next-review - Start your next gerrit code review without any hassle
#[derive(Parser, Debug)]
#[command(
    name = "next-review",
    version,
    about = "Start your next gerrit code review without any hassle",
    long_about = "Query gerrit for the code reviews that need attention,\n\
                  rank them, and print the one to review next.\n\n\
                  Older reviews that are ready for human eyes come first;\n\
                  reviews with failing CI sink to the bottom of the list."
)]
pub struct Cli {
    /// Path to configuration file (default: ~/.config/next-review/config.toml)
    #[arg(short = 'f', long, value_name = "PATH")]
    pub config_file: Option<PathBuf>,

    /// Config section to use when multiple gerrit servers are configured
    #[arg(short = 's', long, value_name = "SECTION")]
    pub config_section: Option<String>,

    /// SSH hostname for gerrit
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// SSH port for gerrit
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// Your SSH username for gerrit
    #[arg(short = 'u', long)]
    pub username: Option<String>,

    /// List recommended code reviews in order of descending priority
    #[arg(short = 'l', long)]
    pub list: bool,

    /// File containing review URLs to skip, one per line
    #[arg(long, value_name = "PATH")]
    pub ignore_file: Option<PathBuf>,

    /// Output in JSON format (machine-readable)
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Projects to include when checking reviews
    #[arg(value_name = "PROJECT")]
    pub projects: Vec<String>,
}

/// Run the CLI
///
/// Returns the count of remaining actionable reviews; `main` forwards it as
/// the process exit status.
pub fn run() -> anyhow::Result<u8> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let config_path = cli.config_file.unwrap_or_else(ConfigFile::default_path);
    let file = ConfigFile::load(&config_path)?;
    let settings = Settings::resolve(
        &file,
        cli.config_section.as_deref(),
        Overrides {
            host: cli.host,
            port: cli.port,
            username: cli.username,
            projects: cli.projects,
        },
    );

    commands::review(&settings, cli.list, cli.ignore_file.as_deref(), output_mode)
}
