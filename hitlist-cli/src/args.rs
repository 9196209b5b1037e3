use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `hitlist`.
#[derive(Parser, Debug)]
#[command(name = "hitlist")]
#[command(about = "Scrape the Billboard Hot 100 and enrich it with Wikipedia summaries and YouTube videos")]
#[command(version)]
pub struct Args {
    /// Number of songs to process
    #[arg(short = 'n', long, default_value_t = 10, value_parser = clap::value_parser!(u16).range(1..=50))]
    pub count: u16,

    /// CSV file the processed table is written to
    #[arg(short, long, default_value = "music_data.csv")]
    pub out: PathBuf,

    /// Display the table without writing the CSV file
    #[arg(long)]
    pub no_export: bool,

    /// Write logs to this file (truncated) instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Use the offline mock connector instead of the live services
    #[arg(long, env = "HITLIST_USE_MOCK", value_parser = clap::builder::BoolishValueParser::new())]
    pub mock: bool,

    /// Chart served by the mock connector
    #[arg(long, hide = true, value_enum, default_value_t = MockChartArg::Fixture, env = "HITLIST_MOCK_CHART")]
    pub mock_chart: MockChartArg,

    /// Number of songs enriched concurrently (output order is unaffected)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..=16))]
    pub max_in_flight: u16,

    /// Timeout for each remote call, in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout_secs: u64,

    /// YouTube Data API key (falls back to GOOGLE_API_KEY)
    #[arg(long, env = "YOUTUBE_API_KEY", hide_env_values = true)]
    pub youtube_key: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum MockChartArg {
    Fixture,
    Empty,
    Unreachable,
}
