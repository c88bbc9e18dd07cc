//! Serve loops for the two server roles.
//!
//! Each loop receives, decodes, hands the query to its engine and
//! replies to the sender. Malformed or non-query datagrams are logged
//! and dropped; a transport fault ends the loop and is fatal to the
//! role. `on_handled` runs after every answered query so the binaries
//! can dump their table without the loop knowing how.

use crate::udp::UdpEndpoint;
use minidns_application::{AuthoritativeEngine, RecursiveEngine};
use minidns_domain::{DnsMessage, DomainError, Flag};
use std::net::SocketAddr;
use tracing::{info, warn};

pub async fn run_authoritative<F>(
    endpoint: &UdpEndpoint,
    engine: &AuthoritativeEngine,
    on_handled: F,
) -> Result<(), DomainError>
where
    F: Fn(),
{
    loop {
        let Some((query, peer)) = recv_query(endpoint).await? else {
            continue;
        };
        let response = engine.handle_query(&query);
        endpoint.send(&response.encode(), peer).await?;
        on_handled();
    }
}

pub async fn run_resolver<F>(
    endpoint: &UdpEndpoint,
    engine: &RecursiveEngine,
    on_handled: F,
) -> Result<(), DomainError>
where
    F: Fn(),
{
    loop {
        let Some((query, peer)) = recv_query(endpoint).await? else {
            continue;
        };
        match engine.handle_query(&query).await {
            Ok(response) => {
                endpoint.send(&response.encode(), peer).await?;
                on_handled();
            }
            // A garbled upstream reply is dropped like any other
            // malformed datagram; the client's own timeout loop keeps
            // it waiting.
            Err(DomainError::MalformedMessage(reason)) => {
                warn!(%peer, reason, "Dropping malformed upstream reply");
            }
            Err(e) => return Err(e),
        }
    }
}

/// Receives and decodes the next well-formed query, logging and
/// dropping everything else.
async fn recv_query(
    endpoint: &UdpEndpoint,
) -> Result<Option<(DnsMessage, SocketAddr)>, DomainError> {
    let (line, peer) = endpoint.recv().await?;
    let message = match DnsMessage::decode(&line) {
        Ok(message) => message,
        Err(e) => {
            warn!(%peer, error = %e, "Dropping malformed datagram");
            return Ok(None);
        }
    };
    if message.flag != Flag::Query {
        warn!(%peer, "Dropping non-query message");
        return Ok(None);
    }
    info!(
        %peer,
        transaction_id = message.transaction_id,
        name = %message.question.name,
        "Query received"
    );
    Ok(Some((message, peer)))
}
