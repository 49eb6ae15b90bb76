use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod args;
mod datong;
mod deck;
mod french;
use self::args::Args;
use self::datong::{cli_main, replay_main, GameConfig};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(args.log_filter()))
        .context("invalid log filter")?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    args.apply(&mut config);

    match &args.replay {
        Some(path) => replay_main(path, &config, args.upto),
        None => cli_main(&config, args.log_file.as_deref()),
    }
}
