use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "encodeflow")]
#[command(author, version, about = "Elemental Conductor job assembly and status tool")]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build the Conductor job for a transcode request and print it as JSON
    Assemble {
        /// JSON file holding the transcode request
        #[arg(short, long, required = true)]
        request: PathBuf,

        /// Job identifier used to derive the output location
        #[arg(short, long, required = true)]
        job_id: String,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Print the formats and destinations supported by the provider
    Capabilities,

    /// Map a raw Conductor job status to its canonical status
    Status {
        /// Status string reported by the cluster (e.g. "running")
        status: String,
    },

    /// Validate configuration file
    Validate {
        /// Config file to validate (uses default if not specified)
        config: Option<PathBuf>,
    },

    /// Display version information
    Version,
}
