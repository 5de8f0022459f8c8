//! csv2parammap - Parameter Table to Parameter Map Converter
//!
//! Turns a comma-separated parameter table into a parameter-map JSON document.
//!
//! # Usage
//!
//! ```bash
//! csv2parammap parameters.csv parameter_map.json
//! RUST_LOG=debug csv2parammap parameters.csv parameter_map.json
//! ```

use std::path::PathBuf;

use clap::Parser;
use parammap_core::{convert_file, error::Result};
use tracing_subscriber::EnvFilter;

/// Parameter table to parameter map converter
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the parameter table (.csv)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path of the parameter map to write (.json)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_tracing();

    convert_file(&args.input, &args.output)?;

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (warnings only by default).
fn initialize_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
