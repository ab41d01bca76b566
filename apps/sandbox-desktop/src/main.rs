mod app;
mod bootstrap;
mod config;
mod ui;

use anyhow::Result;
use clap::Parser;
use config::{Cli, SandboxConfig};
use tracing_subscriber::EnvFilter;
use winit::event_loop::{ControlFlow, EventLoop};

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = SandboxConfig::from_cli(&cli)?;
    tracing::info!("sandbox-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = app::SandboxApp::new(config);
    event_loop.run_app(&mut app)?;

    app.finish()
}
