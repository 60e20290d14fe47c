mod cli;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use phub_domain::config::AppConfig;
use phub_kernel::config::load_config;
use phub_logger::{Logger, parse_level};
use phub_session::{Session, run};
use std::fs::File;
use std::io::{self, BufReader};
use tracing::info;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config: AppConfig =
        load_config(cli.config.as_deref()).context("Critical: Configuration is malformed")?;
    cli.apply(&mut config);

    let _log = init_logger(&config)?;

    let mut session = Session::new(config.lot).context("Configured parking lot is unusable")?;

    let summary = match &cli.file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Cannot open command file {}", path.display()))?;
            run(&mut session, BufReader::new(file), io::stdout().lock())?
        },
        None => run(&mut session, io::stdin().lock(), io::stdout().lock())?,
    };

    info!(commands = summary.commands, exited = summary.exited, "Bye");
    Ok(())
}

fn init_logger(config: &AppConfig) -> anyhow::Result<Logger> {
    let logging = &config.logging;
    let mut builder = Logger::builder()
        .name(env!("CARGO_BIN_NAME"))
        .level(parse_level(&logging.level)?)
        .json(logging.json)
        .max_files(logging.max_files);

    if let Some(directory) = &logging.directory {
        builder = builder.directory(directory);
    }

    Ok(builder.init()?)
}
