use clap::{Args, Parser, Subcommand};

use crate::domain::model::{ColorCategory, GarmentCategory};

#[derive(Debug, Clone, Parser)]
#[command(name = "wardrobe")]
#[command(about = "Weather-aware outfit recommendations from your own wardrobe")]
pub struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "wardrobe.toml")]
    pub config: String,

    /// Override the wardrobe CSV path from the config
    #[arg(long)]
    pub store: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Show which temperature band a temperature falls into
    Band {
        #[arg(allow_hyphen_values = true)]
        temperature: f64,
    },

    /// Recommend outfits for a temperature or a city's current weather
    Recommend(RecommendArgs),

    /// Infer category, color and temperature range from a photo
    Analyze {
        image: String,

        /// Add the analyzed garment to the wardrobe under this name
        #[arg(long)]
        add_as: Option<String>,
    },

    /// Manage wardrobe items
    #[command(subcommand)]
    Wardrobe(WardrobeCommand),

    /// Wardrobe statistics and temperature coverage
    Summary,
}

#[derive(Debug, Clone, Args)]
pub struct RecommendArgs {
    /// Temperature in °C (defaults to recommend.default_temperature)
    #[arg(short, long, allow_hyphen_values = true)]
    pub temperature: Option<f64>,

    /// Use this city's live temperature when it can be fetched
    #[arg(long)]
    pub city: Option<String>,

    #[arg(short, long)]
    pub style: Option<String>,

    /// Number of outfits (defaults to recommend.default_count)
    #[arg(short = 'n', long)]
    pub count: Option<usize>,

    /// Seed for reproducible picks
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum WardrobeCommand {
    /// List garments, newest first
    List {
        #[arg(long)]
        category: Option<GarmentCategory>,
    },

    /// Add a garment
    Add {
        name: String,

        #[arg(long)]
        category: GarmentCategory,

        #[arg(long)]
        color: Option<ColorCategory>,

        #[arg(long)]
        style: Option<String>,

        #[arg(long, allow_hyphen_values = true, default_value = "0")]
        temp_min: i32,

        #[arg(long, allow_hyphen_values = true, default_value = "40")]
        temp_max: i32,

        #[arg(long)]
        image: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a garment by id
    Remove { id: u64 },
}
