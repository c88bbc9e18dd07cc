//! Connectionless datagram transport shared by all roles.
//!
//! One UTF-8 message line per datagram. The receive primitive wraps
//! every blocking receive in a short timeout and silently retries on
//! elapse: the timeout exists so the eviction sweep and an interrupt
//! can interleave with blocking I/O, it is never a failure signal.
//! Any other socket error is a fatal `TransportFault`.

use minidns_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::trace;

/// Largest datagram any role sends.
const MAX_DATAGRAM_SIZE: usize = 4096;

pub struct UdpEndpoint {
    socket: UdpSocket,
    recv_timeout: Duration,
}

impl UdpEndpoint {
    /// Binds a server-role endpoint to a fixed address.
    pub async fn bind(addr: SocketAddr, recv_timeout: Duration) -> Result<Self, DomainError> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| DomainError::TransportFault(format!("failed to bind {addr}: {e}")))?;
        Ok(Self {
            socket,
            recv_timeout,
        })
    }

    /// Binds a querying-side endpoint to an OS-assigned loopback port.
    pub async fn ephemeral(recv_timeout: Duration) -> Result<Self, DomainError> {
        let addr: SocketAddr = ([127, 0, 0, 1], 0).into();
        Self::bind(addr, recv_timeout).await
    }

    pub fn local_addr(&self) -> Result<SocketAddr, DomainError> {
        self.socket
            .local_addr()
            .map_err(|e| DomainError::TransportFault(format!("no local address: {e}")))
    }

    pub async fn send(&self, line: &str, peer: SocketAddr) -> Result<(), DomainError> {
        self.socket
            .send_to(line.as_bytes(), peer)
            .await
            .map_err(|e| DomainError::TransportFault(format!("send to {peer} failed: {e}")))?;
        trace!(%peer, len = line.len(), "Datagram sent");
        Ok(())
    }

    /// Receives one datagram, retrying timeouts indefinitely.
    pub async fn recv(&self) -> Result<(String, SocketAddr), DomainError> {
        let mut buf = [0u8; MAX_DATAGRAM_SIZE];
        loop {
            match tokio::time::timeout(self.recv_timeout, self.socket.recv_from(&mut buf)).await {
                // Timeout: wake up and listen again.
                Err(_elapsed) => continue,
                Ok(Ok((len, from))) => {
                    trace!(%from, len, "Datagram received");
                    let line = String::from_utf8_lossy(&buf[..len]).into_owned();
                    return Ok((line, from));
                }
                Ok(Err(e)) => {
                    return Err(DomainError::TransportFault(format!("receive failed: {e}")))
                }
            }
        }
    }
}
