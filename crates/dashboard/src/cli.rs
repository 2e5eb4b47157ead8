//! Command-line definition

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "fleet-dashboard")]
#[command(version)]
#[command(about = "Explore OEMs, dealers, reviews and vehicle comparisons from the fleet store")]
pub struct Cli {
    /// Config file (defaults to $CONFIG_PATH or ./config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Store file, overriding the configured path
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List cities that have OEMs
    Cities,

    /// List vehicle types
    Types,

    /// List vehicle models
    Models,

    /// OEMs located in a city
    Oems {
        #[arg(long)]
        city: String,
    },

    /// Dealer listings of a vehicle type within budget
    Vehicles {
        #[arg(long = "type")]
        vehicle_type: String,

        /// Budget ceiling in lakhs, within the configured slider range
        #[arg(long)]
        budget: Option<f64>,
    },

    /// Reviews of a model with the average rating
    Reviews {
        #[arg(long)]
        model: String,
    },

    /// Side-by-side listings of several models
    Compare {
        /// Model to include; repeat for each model
        #[arg(long = "model")]
        models: Vec<String>,
    },

    /// Fleet-wide counts and mean prices
    Analytics,

    /// Every dashboard section at once
    Overview(OverviewArgs),

    /// Create the demo store at the configured path
    Seed {
        /// Replace an existing store file
        #[arg(long)]
        force: bool,
    },
}

/// Sidebar selections for the overview. Unset values fall back to the first
/// available option, or to the configured default budget.
#[derive(Args, Debug, Clone, Default)]
pub struct OverviewArgs {
    #[arg(long)]
    pub city: Option<String>,

    #[arg(long = "type")]
    pub vehicle_type: Option<String>,

    #[arg(long)]
    pub budget: Option<f64>,

    /// Model whose reviews are shown
    #[arg(long)]
    pub model: Option<String>,

    /// Model to compare; repeat for each model
    #[arg(long = "compare")]
    pub compare: Vec<String>,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}
