//! Lazily-initialized model handles.
//!
//! One handle per model kind. The load-check/load/commit sequence runs under
//! an async mutex so concurrent first requests serialize instead of racing,
//! and a failed or timed-out load leaves the handle `Unloaded` so the next
//! request can retry.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use geomark_core::error::{GeomarkError, Result};
use tokio::sync::Mutex;

use crate::ports::ModelBackend;

/// The two inference backends this service drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Boundary,
    LandUse,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Boundary => "boundary",
            ModelKind::LandUse => "land_use",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Load state of a model handle. The transition is one-directional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    Unloaded,
    Loaded,
}

/// Process-wide handle to one lazily-loaded model.
pub struct ModelHandle {
    kind: ModelKind,
    state: Mutex<ModelState>,
    backend: Arc<dyn ModelBackend>,
    load_timeout: Duration,
}

impl ModelHandle {
    pub fn new(kind: ModelKind, backend: Arc<dyn ModelBackend>, load_timeout: Duration) -> Self {
        Self {
            kind,
            state: Mutex::new(ModelState::Unloaded),
            backend,
            load_timeout,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// Load the model if it is not loaded yet. Idempotent; safe under
    /// concurrent first use. `Loaded` is committed only after the backend
    /// load succeeds within the timeout.
    pub async fn ensure_loaded(&self) -> Result<()> {
        let mut state = self.state.lock().await;
        if *state == ModelState::Loaded {
            return Ok(());
        }

        match tokio::time::timeout(self.load_timeout, self.backend.load(self.kind)).await {
            Ok(Ok(())) => {
                *state = ModelState::Loaded;
                Ok(())
            }
            Ok(Err(e)) => Err(GeomarkError::ModelUnavailable {
                kind: self.kind.to_string(),
                reason: e.to_string(),
            }),
            Err(_) => Err(GeomarkError::ModelUnavailable {
                kind: self.kind.to_string(),
                reason: format!("load timed out after {:?}", self.load_timeout),
            }),
        }
    }

    pub async fn is_loaded(&self) -> bool {
        *self.state.lock().await == ModelState::Loaded
    }
}
