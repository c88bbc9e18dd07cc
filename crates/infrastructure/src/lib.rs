//! minidns Infrastructure Layer
//!
//! The UDP datagram primitive, the upstream forwarder built on it,
//! and the serve loops for the two server roles.
pub mod forwarder;
pub mod server;
pub mod udp;

pub use forwarder::UdpForwarder;
pub use udp::UdpEndpoint;
