use clap::Parser;
use minidns::{bootstrap, output};
use minidns_application::AuthoritativeEngine;
use minidns_domain::config::CliOverrides;
use minidns_infrastructure::{server, UdpEndpoint};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "minidns-authoritative")]
#[command(version)]
#[command(about = "Authoritative name server for the minidns hierarchy")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (host:port)
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        authoritative_addr: cli.bind.clone(),
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting minidns authoritative server v{}", env!("CARGO_PKG_VERSION"));

    let table = bootstrap::build_table(&config, true)?;
    println!("{}", output::render_table(&table.snapshot()));

    let addr = config.server.authoritative()?;
    let endpoint = UdpEndpoint::bind(addr, config.server.recv_timeout()).await?;
    info!(%addr, zone_records = table.len(), "Authoritative server listening");

    let engine = AuthoritativeEngine::new(Arc::clone(&table));
    let view = Arc::clone(&table);

    tokio::select! {
        result = server::run_authoritative(&endpoint, &engine, move || {
            println!("{}", output::render_table(&view.snapshot()));
        }) => {
            if let Err(e) = result {
                error!(error = %e, "Fatal transport fault");
                std::process::exit(1);
            }
        }
        _ = tokio::signal::ctrl_c() => {
            info!("Interrupt received, shutting down");
        }
    }
    Ok(())
}
