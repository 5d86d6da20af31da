use std::process::ExitCode;

use clap::Parser;
use stockroom::{
    InventoryStore, StoreOptions,
    persistence::{LoadOptions, SaveMode},
};
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod output;

use cli::{Cli, Commands};

fn main() -> ExitCode {
    // Logs go to stderr so JSON on stdout stays parseable
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("stockroom=info")),
        )
        .init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let options = StoreOptions {
        load: if cli.lenient {
            LoadOptions::lenient()
        } else {
            LoadOptions::default()
        },
        save_mode: if cli.atomic_save {
            SaveMode::Atomic
        } else {
            SaveMode::Truncate
        },
    };
    let mut store = InventoryStore::open(&cli.file, options)?;
    let format = cli.format;

    match &cli.command {
        Commands::List(args) => commands::inventory::list(&store, args, format),
        Commands::Show(args) => commands::inventory::show(&store, args, format),
        Commands::Find(args) => commands::inventory::find(&store, args, format),
        Commands::NextSku => commands::inventory::next_sku(&store, format),
        Commands::Check => commands::inventory::check(&store, format),
        Commands::Add(args) => commands::add::run(&mut store, args, format),
        Commands::Edit(args) => commands::edit::run(&mut store, args, format),
    }
}
