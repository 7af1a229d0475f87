//! Health monitoring for provider instances
//!
//! # Module Structure
//!
//! - `types` - Health status and check results
//! - `checker` - Timeout-bounded probes of capability instances
//! - `monitor` - Background monitor task and sweeps
//! - `tests` - Test suite for health monitoring

pub mod checker;
pub mod monitor;
pub mod types;

pub use checker::check_instance;
pub use monitor::{HealthMonitor, SweepSummary};
pub use types::{HealthCheckResult, ProviderHealth};
