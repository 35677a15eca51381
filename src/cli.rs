//! Command-line interface implementation for Lathe.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments structure for Lathe.
#[derive(Parser, Debug)]
#[command(author, version, about = "Lathe: boilerplate generator for new network services", long_about = None)]
pub struct Args {
    /// Project path: absolute, "account/project", "domain/account/project",
    /// or a bare name (created under the current directory).
    /// Omitted means the current directory itself.
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Workspace root under which shorthand paths are resolved
    /// (overrides the LATHE_WORKSPACE environment variable)
    #[arg(short, long)]
    pub workspace: Option<PathBuf>,

    /// Hosting domain assumed for "account/project" shorthand
    /// (overrides the LATHE_DOMAIN environment variable)
    #[arg(short, long)]
    pub domain: Option<String>,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Returns
/// * `Args` - Parsed command line arguments
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => e.exit(),
    }
}
