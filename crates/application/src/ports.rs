use async_trait::async_trait;
use minidns_domain::{DnsMessage, DomainError};

/// Port for the single upstream hop of a role.
///
/// Sends one query and waits for exactly one reply. Receive timeouts
/// are retried inside the implementation; any error it returns is a
/// fatal transport fault or a malformed reply.
#[async_trait]
pub trait Forwarder: Send + Sync {
    async fn forward(&self, query: &DnsMessage) -> Result<DnsMessage, DomainError>;
}
