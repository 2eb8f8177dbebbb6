use std::path::PathBuf;

use clap::{Parser, Subcommand};
use mapscale_core::ZoomRange;

#[derive(Parser)]
#[command(name = "mapscale", about = "Resolve map zoom levels into scale-denominator ranges")]
pub struct Cli {
    /// Path to config file
    #[arg(long)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the scale and medial scale of each zoom level
    Levels {
        /// Gridset identifier (defaults to the configured gridset)
        #[arg(long)]
        gridset: Option<String>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        from: i32,
        /// Last level to print (defaults to the finest defined level)
        #[arg(long, allow_negative_numbers = true)]
        to: Option<i32>,
    },

    /// Resolve zoom ranges such as `(1,2)` into scale-denominator bounds
    Resolve {
        #[arg(long)]
        gridset: Option<String>,
        /// Zoom range, repeatable: `(min,max)`, `min,max` or a single level
        #[arg(long, required = true, allow_hyphen_values = true)]
        zoom: Vec<ZoomRange>,
        /// Also report whether each range applies at this scale denominator
        #[arg(long)]
        scale: Option<f64>,
        #[arg(long)]
        json: bool,
    },

    /// Check that a list of scale denominators forms a valid zoom context
    Validate {
        #[arg(long, required = true, value_delimiter = ',', allow_hyphen_values = true)]
        scales: Vec<f64>,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        initial: i32,
    },

    /// List configured and built-in gridsets
    Gridsets,
}
