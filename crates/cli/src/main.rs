use clap::{Parser, Subcommand};
use poi_metadata_cli::commands::{cuisine, encode, inspect, verify};
use poi_metadata_cli::telemetry;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "poimeta")]
#[command(about = "Inspect and build encoded point-of-interest metadata records", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a record blob and list its entries
    Inspect {
        path: PathBuf,

        /// Print the record as a JSON object instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Encode a JSON object of kind names to values into a record blob
    Encode {
        input: PathBuf,

        #[arg(long, short)]
        out: PathBuf,
    },
    /// Strictly decode a record blob and print its fingerprint
    Verify {
        path: PathBuf,
    },
    /// Show normalized forms and display keys of an OSM cuisine tag
    Cuisine {
        tag: String,
    },
}

fn main() -> anyhow::Result<()> {
    telemetry::init_telemetry();

    let cli = Cli::parse();

    match cli.command {
        Commands::Inspect { path, json } => inspect::run(&path, json),
        Commands::Encode { input, out } => encode::run(&input, &out),
        Commands::Verify { path } => verify::run(&path),
        Commands::Cuisine { tag } => cuisine::run(&tag),
    }
}
