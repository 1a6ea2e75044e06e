pub mod client;
pub mod core;
pub mod stealth;
pub mod sweep;

// --- Primary exports ---
pub use client::{ApiClient, SweepError};
pub use core::config::SweepConfig;
pub use core::types;
pub use sweep::{resolve_token, run_sweep, SweepReport};
