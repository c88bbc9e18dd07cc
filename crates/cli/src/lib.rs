//! Shared bootstrap and human-facing output for the three role
//! binaries.
pub mod bootstrap;
pub mod output;
