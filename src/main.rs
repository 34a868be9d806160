mod app;
mod cli;
mod http;
mod server;
mod ui;

#[cfg(test)]
mod test_support;

use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use iced::Task;
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use cli::{Cli, Command};
use ui::style;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match cli.command {
        Command::View { address } => launch(address),
        Command::Run { host, port } => {
            let bound = server::spawn_background(SocketAddr::new(host, port))
                .context("failed to start the demo API")?;
            launch(cli::window_address(bound))
        }
        Command::Serve { host, port } => serve(SocketAddr::new(host, port)),
    }
}

fn init_tracing(verbose: bool) -> anyhow::Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .context("invalid log filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
    Ok(())
}

fn launch(address: String) -> anyhow::Result<()> {
    iced::application("Snaptail", app::update, app::view)
        .theme(|_| style::app_theme())
        .window_size((960.0, 680.0))
        .run_with(move || (App::new(address.clone()), Task::none()))
        .context("failed to run the window")
}

fn serve(addr: SocketAddr) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start the async runtime")?;

    runtime.block_on(async move {
        let server = server::bind(addr).await?;
        server
            .serve_until(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("shutting down");
            })
            .await?;
        Ok::<(), anyhow::Error>(())
    })
}
