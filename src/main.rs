use campus_hub::core::config;
use campus_hub::tui;
use clap::Parser;
use log::warn;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;

#[derive(Parser)]
#[command(name = "campus-hub", about = "Campus Hub — events, lost & found, queues, and routes")]
struct Args {
    /// Queue feed refresh period in seconds
    #[arg(long)]
    tick_seconds: Option<u64>,

    /// Seed for the queue feed's random sequence
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();

    // Initialize file logger - writes to campus-hub.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("campus-hub.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        warn!("Falling back to default config: {e}");
        config::CampusConfig::default()
    });
    let resolved = config::resolve(&file_config, args.tick_seconds, args.seed);

    log::info!(
        "Campus Hub starting up (campus: {}, tick: {}s)",
        resolved.campus_name,
        resolved.tick_seconds
    );

    tui::run(resolved)
}
