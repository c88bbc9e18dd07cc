use clap::Parser;
use minidns::{bootstrap, output};
use minidns_application::RecursiveEngine;
use minidns_domain::config::CliOverrides;
use minidns_infrastructure::{server, UdpEndpoint, UdpForwarder};
use std::sync::Arc;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "minidns-resolver")]
#[command(version)]
#[command(about = "Recursive local resolver for the minidns hierarchy")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Listen address (host:port)
    #[arg(short = 'b', long)]
    bind: Option<String>,

    /// Authoritative server address (host:port)
    #[arg(short = 'u', long)]
    upstream: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        resolver_addr: cli.bind.clone(),
        authoritative_addr: cli.upstream.clone(),
        log_level: cli.log_level.clone(),
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting minidns local resolver v{}", env!("CARGO_PKG_VERSION"));

    // The resolver starts with an empty cache; everything it holds is
    // dynamic and subject to the sweep.
    let table = bootstrap::build_table(&config, false)?;

    let addr = config.server.resolver()?;
    let upstream = config.server.authoritative()?;
    let endpoint = UdpEndpoint::bind(addr, config.server.recv_timeout()).await?;
    info!(%addr, %upstream, "Local resolver listening");

    let forwarder = Arc::new(UdpForwarder::new(upstream, config.server.recv_timeout()));
    let engine = RecursiveEngine::new(Arc::clone(&table), forwarder);
    let view = Arc::clone(&table);

    tokio::select! {
        result = server::run_resolver(&endpoint, &engine, move || {
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
