//! CLI entry point.
//!
//! Usage: `cargo run -- [--endpoint <URL>] [--file <transactions.csv>] [--strict-amounts]`

use std::process;

use clap::Parser;

use batch_transfer::Config;

#[tokio::main]
async fn main() {
    let config = Config::parse();
    batch_transfer::logging::init();

    if let Err(e) = batch_transfer::run(&config, std::io::stdout()).await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
