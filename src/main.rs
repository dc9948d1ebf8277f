use clap::Parser;
use gamedeck::catalog::{CatalogStore, HttpCatalogClient};
use gamedeck::cli::{run_command, Cli, Command};
use gamedeck::config::Config;
use gamedeck::logging::{init_cli_tracing, init_ui_tracing};
use std::process;

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let interactive = matches!(cli.command, None | Some(Command::Tui));
    if interactive {
        init_ui_tracing();
    } else {
        init_cli_tracing();
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    }
    .with_base_url(cli.api_url)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let client = HttpCatalogClient::new(&config.api)?;
    tracing::info!(url = %client.collection_url(), "Using catalog service");
    let store = CatalogStore::new(client);

    match cli.command {
        None | Some(Command::Tui) => {
            gamedeck::ui::run(&config.ui, store, runtime.handle())?;
        }
        Some(command) => {
            let mut stdout = std::io::stdout().lock();
            runtime.block_on(run_command(command, &store, &mut stdout))?;
        }
    }
    Ok(())
}
