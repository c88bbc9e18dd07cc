pub mod ttl_sweep;

pub use ttl_sweep::TtlSweepJob;
