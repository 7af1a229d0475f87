//! Health checking
//!
//! Runs capability health probes bounded by a timeout. Every failure mode
//! (error, timeout, panic) becomes an unhealthy result; nothing propagates.

use super::types::HealthCheckResult;
use crate::core::providers::ProviderError;
use crate::core::registry::ProviderRegistration;
use crate::core::traits::CapabilityProvider;
use futures::FutureExt;
use futures::future::join_all;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, warn};

/// Probe a single capability instance
pub async fn check_instance(
    provider_id: &str,
    instance: &Arc<dyn CapabilityProvider>,
    timeout: Duration,
) -> HealthCheckResult {
    let start_time = Instant::now();
    let probe = AssertUnwindSafe(instance.health_check()).catch_unwind();

    let result = match tokio::time::timeout(timeout, probe).await {
        Ok(Ok(Ok(()))) => HealthCheckResult::healthy(elapsed_ms(start_time)),
        Ok(Ok(Err(error))) => HealthCheckResult::unhealthy(error.to_string(), elapsed_ms(start_time)),
        Ok(Err(_)) => HealthCheckResult::unhealthy(
            ProviderError::health_check(provider_id, "health check panicked").to_string(),
            elapsed_ms(start_time),
        ),
        Err(_) => HealthCheckResult::unhealthy(
            ProviderError::timeout(provider_id, timeout.as_millis() as u64).to_string(),
            elapsed_ms(start_time),
        ),
    };

    if result.healthy {
        debug!(
            "Health check for {} passed in {}ms",
            provider_id, result.response_time_ms
        );
    } else {
        warn!(
            "Health check for {} failed: {}",
            provider_id,
            result.error.as_deref().unwrap_or("unknown error")
        );
    }

    result
}

/// Probe every live instance of a registration concurrently
///
/// Returns `None` when the registration has nothing materialized; providers
/// are never instantiated just to be checked.
pub(crate) async fn check_registration(
    registration: &ProviderRegistration,
    timeout: Duration,
) -> Option<HealthCheckResult> {
    let instances = registration.live_instances();
    if instances.is_empty() {
        return None;
    }

    let results = join_all(
        instances
            .iter()
            .map(|(_, instance)| check_instance(registration.id(), instance, timeout)),
    )
    .await;

    HealthCheckResult::combine(results)
}

fn elapsed_ms(start_time: Instant) -> u64 {
    start_time.elapsed().as_millis() as u64
}
