use crate::udp::UdpEndpoint;
use async_trait::async_trait;
use minidns_application::ports::Forwarder;
use minidns_domain::{DnsMessage, DomainError};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{debug, warn};

/// One-hop upstream forwarder over UDP.
///
/// Each forward uses a fresh ephemeral socket so the reply cannot be
/// confused with traffic on the role's listening socket, and waits
/// for exactly one reply (timeouts retried inside the endpoint).
pub struct UdpForwarder {
    upstream: SocketAddr,
    recv_timeout: Duration,
}

impl UdpForwarder {
    pub fn new(upstream: SocketAddr, recv_timeout: Duration) -> Self {
        Self {
            upstream,
            recv_timeout,
        }
    }
}

#[async_trait]
impl Forwarder for UdpForwarder {
    async fn forward(&self, query: &DnsMessage) -> Result<DnsMessage, DomainError> {
        let endpoint = UdpEndpoint::ephemeral(self.recv_timeout).await?;
        endpoint.send(&query.encode(), self.upstream).await?;
        debug!(upstream = %self.upstream, name = %query.question.name, "Query forwarded");

        let (line, from) = endpoint.recv().await?;
        if from != self.upstream {
            warn!(expected = %self.upstream, received_from = %from, "Reply from unexpected source");
        }
        DnsMessage::decode(&line)
    }
}
