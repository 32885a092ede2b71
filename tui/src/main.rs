mod args;
mod cli;

use args::Args;
use log::{error, info};
use simple_logger::SimpleLogger;
use std::{io, process};

fn main() {
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    SimpleLogger::new()
        .with_level(args.log_level)
        .env()
        .init()
        .unwrap_or_else(|e| eprintln!("Cannot set up logging: {}", e));
    info!("Starting lifegrid v{}", env!("CARGO_PKG_VERSION"));

    let stdout = io::stdout();
    if let Err(e) = cli::run(args, &mut stdout.lock()) {
        error!("{}", e);
        process::exit(1);
    }
}
