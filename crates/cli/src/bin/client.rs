use clap::Parser;
use minidns::{bootstrap, output};
use minidns_application::{ClientEngine, ResolveOutcome};
use minidns_domain::config::CliOverrides;
use minidns_domain::{DomainError, RecordType};
use minidns_infrastructure::UdpForwarder;
use std::io::Write;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "minidns-client")]
#[command(version)]
#[command(about = "Interactive lookup client for the minidns hierarchy")]
struct Cli {
    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Local resolver address (host:port)
    #[arg(short = 'r', long)]
    resolver: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let overrides = CliOverrides {
        resolver_addr: cli.resolver.clone(),
        log_level: cli.log_level.clone(),
        ..Default::default()
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);

    info!("Starting minidns client v{}", env!("CARGO_PKG_VERSION"));

    let table = bootstrap::build_table(&config, false)?;
    let resolver_addr = config.server.resolver()?;
    let forwarder = Arc::new(UdpForwarder::new(resolver_addr, config.server.recv_timeout()));
    let engine = ClientEngine::new(Arc::clone(&table), forwarder);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("Enter the hostname (or type 'quit' to exit) ");
        std::io::stdout().flush()?;

        let line = tokio::select! {
            line = lines.next_line() => line?,
            _ = tokio::signal::ctrl_c() => {
                println!();
                info!("Interrupt received, exiting");
                break;
            }
        };
        let Some(line) = line else { break };
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if input.eq_ignore_ascii_case("quit") {
            break;
        }

        // Either "hostname" or "hostname TYPE"; the type defaults to A.
        let mut parts = input.split_whitespace();
        let hostname = parts.next().unwrap_or_default();
        let qtype = match parts.next().map(str::parse::<RecordType>) {
            Some(Ok(rtype)) => Some(rtype),
            Some(Err(e)) => {
                println!("{e}");
                continue;
            }
            None => None,
        };

        match engine.resolve(hostname, qtype).await {
            Ok(ResolveOutcome::CacheHit(record)) => {
                println!("{} {} -> {} (cached)", record.name, record.rtype, record.result);
            }
            Ok(ResolveOutcome::Answered(record)) => {
                println!("{} {} -> {}", record.name, record.rtype, record.result);
            }
            Ok(ResolveOutcome::NotFound) => {
                println!("Record not found");
            }
            Err(e @ DomainError::TransportFault(_)) => {
                error!(error = %e, "Fatal transport fault");
                std::process::exit(1);
            }
            Err(e) => {
                // A garbled reply is dropped; the request can simply
                // be retried.
                println!("{e}");
                continue;
            }
        }

        println!("{}", output::render_table(&table.snapshot()));
    }
    Ok(())
}
