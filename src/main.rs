use clap::Parser;
use kanji_mix::Cli;
use std::error::Error;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    kanji_mix::run(Cli::parse()).await
}
