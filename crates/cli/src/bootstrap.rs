use minidns_application::RrTable;
use minidns_domain::config::{CliOverrides, Config};
use minidns_jobs::TtlSweepJob;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub fn load_config(path: Option<&str>, overrides: CliOverrides) -> anyhow::Result<Config> {
    Ok(Config::load(path, overrides)?)
}

/// RUST_LOG wins over the configured level when set.
pub fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Builds a role's record table and starts its eviction sweep.
///
/// Every role gets the sweep, seeded or not; it runs until the
/// process exits.
pub fn build_table(config: &Config, seed_zone: bool) -> anyhow::Result<Arc<RrTable>> {
    let table = Arc::new(RrTable::new());
    if seed_zone {
        for record in &config.zone {
            table.insert(
                &record.name,
                record.parsed_type()?,
                &record.result,
                record.ttl,
                true,
            );
        }
    }
    Arc::new(TtlSweepJob::new(Arc::clone(&table)).with_interval(config.server.sweep_interval()))
        .start();
    Ok(table)
}
