//! Registry lifecycle

use super::registry::ProviderRegistry;
use tracing::info;

impl ProviderRegistry {
    /// Shut the registry down
    ///
    /// Stops the health monitor, disposes every live instance and clears all
    /// registrations and cached resolutions. Health checks still in flight are
    /// not awaited; their results are discarded. Calling this again is a no-op.
    pub async fn shutdown(&self) {
        if self.state.close() {
            return;
        }

        info!("Shutting down provider registry");
        self.monitor.stop().await;

        let registrations = self.state.store.drain();
        let disposed: usize = registrations
            .iter()
            .map(|registration| registration.dispose())
            .sum();
        self.state.resolver.cache().clear();

        info!(
            "Provider registry shutdown complete ({} provider(s), {} instance(s) disposed)",
            registrations.len(),
            disposed
        );
    }

    pub fn is_shut_down(&self) -> bool {
        self.state.is_closed()
    }

    /// Whether the background health monitor is running
    pub fn is_monitoring(&self) -> bool {
        self.monitor.is_running()
    }
}

impl Drop for ProviderRegistry {
    fn drop(&mut self) {
        self.monitor.abort();
        if !self.state.close() {
            for registration in self.state.store.drain() {
                registration.dispose();
            }
        }
    }
}
