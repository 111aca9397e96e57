use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "taxocode",
    version,
    about = "Taxocode - derive short unique codes for genus/species name pairs and write them back out.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Input file of comma/newline separated genus and species names.
    /// Defaults to 'GenusSpecies.csv' when omitted. Only one path is accepted.
    #[arg(value_name = "PATH")]
    pub inputs: Vec<PathBuf>,

    /// Write the coded table here instead of next to the input.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S output.path=codes.csv
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
