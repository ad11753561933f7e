use crate::types::OutputFormat;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "placekeep")]
#[command(about = "Record and browse your favorite places", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data directory holding places.db (defaults to the platform data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, value_enum, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the data directory and the place database
    Init,

    Place {
        #[command(subcommand)]
        command: PlaceCommand,
    },
}

#[derive(Subcommand)]
pub enum PlaceCommand {
    /// Save a new place
    Add {
        #[arg(long)]
        title: String,

        /// URI of the photo to associate; stored as-is, never resolved
        #[arg(long)]
        image: String,

        /// Human-readable address for the coordinate
        #[arg(long)]
        address: String,

        #[arg(long, allow_hyphen_values = true)]
        lat: f64,

        #[arg(long, allow_hyphen_values = true)]
        lng: f64,
    },

    /// List every saved place
    List,

    /// Show one place by id
    Show { id: i64 },
}
