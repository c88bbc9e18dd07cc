pub mod authoritative;
pub mod client;
pub mod recursive;

pub use authoritative::AuthoritativeEngine;
pub use client::{ClientEngine, ResolveOutcome};
pub use recursive::RecursiveEngine;
