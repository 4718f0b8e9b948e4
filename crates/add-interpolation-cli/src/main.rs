//! add-interpolation: turn a C# string literal into an interpolated string.

mod cli;
mod config;
mod error;
mod output;
mod run;

use clap::Parser;
use cli::Args;
use config::Config;
use miette::Result;
use run::Outcome;

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load(&args)?;

    match run::run(config).await? {
        Outcome::Applied => Ok(()),
        Outcome::NotApplicable { reason } => {
            eprintln!("No string literal at the given position: {}", reason);
            std::process::exit(2);
        }
    }
}
