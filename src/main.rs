use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser;
use env_logger::Env;
use log::debug;

use crate::config::Config;
use crate::controller::{Command, Context};
use crate::store::{FileBackend, Repository};

mod common;
mod config;
mod controller;
mod expense;
mod report;
mod settings;
mod store;
mod util;
mod view;
mod wallet;

#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
#[clap(propagate_version = true)]
struct Cli {
    /// Config file path, defaults to <config dir>/expensedb/config.toml
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Whose expenses to work on, overrides `user` from the config
    #[arg(short, long, global = true)]
    user: Option<String>,

    #[command(subcommand)]
    command: Command,
}

fn run(cli: Cli) -> anyhow::Result<String> {
    let config = match cli.config.or_else(Config::default_path) {
        Some(path) => Config::load_from_file(&path).context("Unable to load config")?,
        None => Config::default(),
    };
    debug!("{:?}", config);

    let ctx = Context {
        user: cli.user.unwrap_or(config.user),
        recent_count: config.recent_count,
        default_period: config.default_period,
        today: util::today(),
    };
    debug!("Using data in {} for user {}", config.data_dir.display(), ctx.user);

    let mut repo = Repository::new(FileBackend::new(&config.data_dir));
    controller::run_command(&mut repo, &ctx, cli.command)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli: Cli = Cli::parse();
    match run(cli) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
