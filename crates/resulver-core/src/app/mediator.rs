//! Mediator - Request を登録済み Handler に振り分ける
//!
//! The registry is frozen once the mediator is built, so dispatch never
//! locks. Cloning a `Mediator` shares the same registry and counters.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::error::MediatorError;
use crate::observability::{DispatchCounts, DispatchStats};
use crate::outcome::{Failure, Outcome};
use crate::result::ResultRequest;
use crate::typed::request::request_name;
use crate::typed::{Request, TypedRegistry};

#[derive(Clone)]
pub struct Mediator {
    inner: Arc<Inner>,
}

struct Inner {
    registry: TypedRegistry,
    stats: DispatchStats,
}

impl Mediator {
    pub(crate) fn new(registry: TypedRegistry) -> Self {
        Self {
            inner: Arc::new(Inner {
                registry,
                stats: DispatchStats::default(),
            }),
        }
    }

    pub fn registry(&self) -> &TypedRegistry {
        &self.inner.registry
    }

    /// `succeeded + failed` covers result requests only, whichever entry point
    /// sent them; plain requests only move `dispatched`.
    pub fn counts(&self) -> DispatchCounts {
        self.inner.stats.snapshot()
    }

    /// Routes `request` to its handler and returns the handler's response.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, MediatorError> {
        let name = request_name::<R>();
        let Some(handler) = self.inner.registry.get::<R>() else {
            self.inner.stats.record_missing();
            warn!(request_type = name, "No handler registered");
            return Err(MediatorError::HandlerNotFound(name));
        };

        self.inner.stats.record_dispatched();
        debug!(request_type = name, "Dispatching request");

        let response = handler.handle_any(Box::new(request)).await?;
        let response = response
            .downcast::<R::Response>()
            .map(|response| *response)
            .map_err(|_| MediatorError::ResponseTypeMismatch { request: name })?;
        if let Some(success) = R::succeeded(&response) {
            self.inner.stats.record_outcome(success);
        }
        Ok(response)
    }

    /// Result-style entry point: mediator errors come back as a `Failure`, so
    /// the caller handles a single failure channel.
    pub async fn send_result<R: ResultRequest>(&self, request: R) -> Outcome<R::Content> {
        let name = request_name::<R>();
        match self.send(request).await {
            Ok(outcome) => {
                if let Err(failure) = &outcome {
                    debug!(request_type = name, error = %failure, "Request failed");
                }
                outcome
            }
            Err(err) => Err(Failure::from(err)),
        }
    }
}

impl std::fmt::Debug for Mediator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mediator")
            .field("registered_types", &self.inner.registry.registered_types())
            .field("counts", &self.counts())
            .finish()
    }
}
