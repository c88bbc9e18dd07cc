//! minidns Application Layer
//!
//! The record table and the three per-role resolution engines. The
//! upstream hop is a port (`Forwarder`) so engines stay testable
//! without sockets.
pub mod engine;
pub mod ports;
pub mod rr_table;

pub use engine::{AuthoritativeEngine, ClientEngine, RecursiveEngine, ResolveOutcome};
pub use ports::Forwarder;
pub use rr_table::RrTable;
