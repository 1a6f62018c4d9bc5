use anyhow::{Context, Result};
use atm::{config::Config, logging, roster::Roster, run::run};
use clap::Parser;
use std::fs::File;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = Config::parse();
    logging::init(config.log_level);

    match try_main(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{:#}", err);
            ExitCode::FAILURE
        }
    }
}

fn try_main(config: &Config) -> Result<()> {
    let roster = load_roster(config)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(roster, stdin.lock(), stdout.lock()).context("ATM session ended before exit")?;

    Ok(())
}

fn load_roster(config: &Config) -> Result<Roster> {
    let path = match &config.roster {
        Some(path) => path,
        None => return Ok(Roster::demo()),
    };

    let file = File::open(path)
        .with_context(|| format!("failed to open roster {}", path.display()))?;
    let roster = Roster::from_csv(file)
        .with_context(|| format!("failed to load roster {}", path.display()))?;

    tracing::info!(path = %path.display(), users = roster.len(), "roster loaded");
    Ok(roster)
}
