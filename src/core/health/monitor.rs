//! Health monitor implementation
//!
//! The monitor is a single background task that probes every materialized
//! capability instance on a fixed interval, independent of request traffic.

use super::checker::check_registration;
use crate::config::HealthMonitorConfig;
use crate::core::registry::RegistryState;
use futures::future::join_all;
use parking_lot::Mutex;
use std::sync::Weak;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

/// Outcome of one monitor sweep
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Registrations probed
    pub checked: usize,
    /// Registrations found unhealthy
    pub unhealthy: usize,
}

/// Health monitor for live provider instances
pub struct HealthMonitor {
    config: HealthMonitorConfig,
    task: Mutex<Option<JoinHandle<()>>>,
}

impl HealthMonitor {
    /// Create a new health monitor
    pub fn new(config: HealthMonitorConfig) -> Self {
        Self {
            config,
            task: Mutex::new(None),
        }
    }

    pub fn config(&self) -> &HealthMonitorConfig {
        &self.config
    }

    /// Whether the background task is running
    pub fn is_running(&self) -> bool {
        self.task
            .lock()
            .as_ref()
            .is_some_and(|task| !task.is_finished())
    }

    /// Start the background task
    ///
    /// Does nothing when monitoring is disabled, already running, or there is no
    /// tokio runtime to spawn on. The task only holds a weak reference to the
    /// registry state and exits once the registry is gone.
    pub(crate) fn start(&self, state: Weak<RegistryState>) -> bool {
        if !self.config.enabled {
            debug!("Health monitoring disabled, health is checked on resolution only");
            return false;
        }

        let handle = match tokio::runtime::Handle::try_current() {
            Ok(handle) => handle,
            Err(_) => {
                warn!("No tokio runtime available, background health monitoring not started");
                return false;
            }
        };

        let mut task = self.task.lock();
        if task.is_some() {
            return false;
        }

        let check_interval = self.config.interval();
        info!(
            "Starting health monitor (interval: {}ms, timeout: {}ms)",
            self.config.interval_ms, self.config.check_timeout_ms
        );

        *task = Some(handle.spawn(async move {
            let mut interval = tokio::time::interval(check_interval);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            // The first tick completes immediately
            interval.tick().await;

            loop {
                interval.tick().await;

                let Some(state) = state.upgrade() else {
                    break;
                };
                if state.is_closed() {
                    break;
                }

                let summary = run_sweep(&state).await;
                debug!(
                    "Health sweep complete: {} checked, {} unhealthy",
                    summary.checked, summary.unhealthy
                );
            }

            debug!("Health monitor task exiting");
        }));

        true
    }

    /// Stop the background task and wait for it to wind down
    ///
    /// The task is aborted, so this never waits on in-flight provider checks.
    pub async fn stop(&self) {
        let task = self.task.lock().take();
        if let Some(task) = task {
            info!("Stopping health monitor");
            task.abort();
            let _ = task.await;
        }
    }

    /// Abort the background task without waiting
    pub(crate) fn abort(&self) {
        if let Some(task) = self.task.lock().take() {
            task.abort();
        }
    }
}

impl Drop for HealthMonitor {
    fn drop(&mut self) {
        self.abort();
    }
}

/// Probe every registration that has at least one live instance
///
/// Registrations are checked concurrently. Results that arrive after the
/// registry has shut down are discarded by [`RegistryState::record_health`].
pub(crate) async fn run_sweep(state: &RegistryState) -> SweepSummary {
    let targets: Vec<_> = state
        .store
        .snapshot()
        .into_iter()
        .filter(|registration| registration.has_live_instances())
        .collect();

    let timeout = state.check_timeout();
    let results = join_all(targets.iter().map(|registration| async move {
        (registration, check_registration(registration, timeout).await)
    }))
    .await;

    let mut summary = SweepSummary::default();
    for (registration, result) in results {
        let Some(result) = result else {
            continue;
        };
        summary.checked += 1;
        if !result.healthy {
            summary.unhealthy += 1;
        }
        state.record_health(registration, &result);
    }

    summary
}
