// src/main.rs
use anyhow::Result;
use clap::Parser;

use voicepitch::cli::{self, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp(None)
        .init();

    cli::run(&args)
}
