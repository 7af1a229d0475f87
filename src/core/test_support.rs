//! Scriptable capability instances shared by unit tests

use crate::core::providers::{CapabilityFactory, ProviderError, factory};
use crate::core::traits::CapabilityProvider;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ProbeMode {
    Respond,
    Hang,
    Panic,
}

struct FakeState {
    name: String,
    healthy: AtomicBool,
    mode: Mutex<ProbeMode>,
    checks: AtomicUsize,
    constructed: AtomicUsize,
    disposed: AtomicUsize,
}

/// Test-side control over every instance a factory produces
#[derive(Clone)]
pub(crate) struct FakeHandle(Arc<FakeState>);

impl FakeHandle {
    pub(crate) fn new(name: &str) -> Self {
        Self(Arc::new(FakeState {
            name: name.to_string(),
            healthy: AtomicBool::new(true),
            mode: Mutex::new(ProbeMode::Respond),
            checks: AtomicUsize::new(0),
            constructed: AtomicUsize::new(0),
            disposed: AtomicUsize::new(0),
        }))
    }

    pub(crate) fn set_healthy(&self, healthy: bool) {
        self.0.healthy.store(healthy, Ordering::SeqCst);
    }

    pub(crate) fn set_mode(&self, mode: ProbeMode) {
        *self.0.mode.lock() = mode;
    }

    pub(crate) fn checks(&self) -> usize {
        self.0.checks.load(Ordering::SeqCst)
    }

    pub(crate) fn constructed(&self) -> usize {
        self.0.constructed.load(Ordering::SeqCst)
    }

    pub(crate) fn disposed(&self) -> usize {
        self.0.disposed.load(Ordering::SeqCst)
    }

    pub(crate) fn factory(&self) -> CapabilityFactory {
        let handle = self.clone();
        factory(move |_| {
            handle.0.constructed.fetch_add(1, Ordering::SeqCst);
            Ok(Arc::new(FakeProvider {
                handle: handle.clone(),
            }) as Arc<dyn CapabilityProvider>)
        })
    }
}

pub(crate) struct FakeProvider {
    handle: FakeHandle,
}

impl FakeProvider {
    pub(crate) fn name(&self) -> &str {
        &self.handle.0.name
    }
}

#[async_trait]
impl CapabilityProvider for FakeProvider {
    async fn health_check(&self) -> Result<(), ProviderError> {
        let state = &self.handle.0;
        state.checks.fetch_add(1, Ordering::SeqCst);

        let mode = *state.mode.lock();
        match mode {
            ProbeMode::Respond => {}
            ProbeMode::Hang => std::future::pending::<()>().await,
            ProbeMode::Panic => panic!("probe exploded"),
        }

        if state.healthy.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(ProviderError::unavailable(&state.name, "backend down"))
        }
    }

    fn dispose(&self) {
        self.handle.0.disposed.fetch_add(1, Ordering::SeqCst);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// A factory that always fails to construct
pub(crate) fn failing_factory(provider: &str) -> CapabilityFactory {
    let provider = provider.to_string();
    factory(move |_| Err(ProviderError::construction(&provider, "METADATA", "missing api key")))
}
