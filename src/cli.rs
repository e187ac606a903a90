//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;

/// Explore US bikeshare trip records interactively
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Directory containing the city CSV files
    #[arg(long, default_value = ".")]
    pub data_dir: PathBuf,
}
