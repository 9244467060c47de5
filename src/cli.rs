//! Command-line interface implementation for nfogen.
//! Provides argument parsing using clap's derive API.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line arguments structure for nfogen.
#[derive(Parser, Debug)]
#[command(author, version, about = "nfogen: scriptable NFO and forum description generator", long_about = None)]
pub struct Args {
    /// Enable verbose logging output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate an NFO or description from a variable context file
    Generate(GenerateArgs),

    /// Manage template files
    #[command(subcommand)]
    Template(FileCommand),

    /// Manage artwork files
    #[command(subcommand)]
    Artwork(FileCommand),

    /// Manage configuration
    Config(ConfigArgs),
}

#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
    /// Path to the variable context file (JSON or YAML), as produced by
    /// external metadata tooling
    #[arg(value_name = "CONTEXT")]
    pub context: PathBuf,

    /// Template name from the template directory, or a direct file path
    #[arg(short, long)]
    pub template: String,

    /// Artwork name or file path to wrap around the rendered output
    #[arg(short, long)]
    pub artwork: Option<String>,

    /// Render the description (BBCode) variant of the template
    #[arg(short, long)]
    pub description: bool,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Additional KEY=VALUE variables; these override context file entries
    #[arg(long = "var", value_name = "KEY=VALUE")]
    pub vars: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum FileCommand {
    /// List all available files
    List,

    /// Delete a file
    Delete {
        /// Name of the file to delete
        name: String,

        /// Target the description (BBCode) template variant
        #[arg(short, long)]
        description: bool,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(clap::Args, Debug)]
pub struct ConfigArgs {
    /// Configuration key, dotted for nested values (e.g. generate.artwork)
    pub key: Option<String>,

    /// Value to set; omit to print the current value
    pub value: Option<String>,

    /// Unset/remove the configuration value
    #[arg(long)]
    pub unset: bool,

    /// List all set configuration values
    #[arg(long)]
    pub list: bool,
}

/// Parses command line arguments and returns the Args structure.
pub fn get_args() -> Args {
    Args::parse()
}
