use clap::Parser;
use traffic_counter_core::models::{DEFAULT_TOP_LIMIT, DEFAULT_WINDOW_SIZE};

/// Analyse automated half-hour traffic counts
#[derive(Parser, Debug)]
#[command(name = "traffic-counter", version)]
#[command(about = "Analyse automated half-hour traffic counts")]
pub struct Cli {
    /// Path to the traffic data file (use - for stdin)
    #[arg(value_name = "DATA_FILE")]
    pub input: String,

    /// Number of busiest half hours to list
    #[arg(long, default_value_t = DEFAULT_TOP_LIMIT)]
    pub top: usize,

    /// Quiet window length in consecutive half hours
    #[arg(long, default_value_t = DEFAULT_WINDOW_SIZE)]
    pub window: usize,

    /// Output format: json, text
    #[arg(long, default_value = "text")]
    pub output_format: String,

    /// Enable verbose (debug) logging
    #[arg(short, long)]
    pub verbose: bool,
}
