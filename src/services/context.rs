//! Execution context the notification is created in.

use chrono::Utc;
use url::{Origin, Url};

/// Kind of global object the caller runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalScope {
    Window,
    DedicatedWorker,
    SharedWorker,
    ServiceWorker,
}

/// Provides origin, base URL and wall clock for notification creation.
pub trait ExecutionContext: Send + Sync {
    fn global_scope(&self) -> GlobalScope;

    fn origin(&self) -> Origin;

    /// Base URL relative notification URLs resolve against.
    fn api_base_url(&self) -> Url;

    /// Milliseconds since the Unix epoch, with sub-millisecond precision.
    fn current_wall_time(&self) -> f64;
}

/// Context of a document or worker loaded from a URL, using the system clock.
#[derive(Debug, Clone)]
pub struct DocumentContext {
    base_url: Url,
    scope: GlobalScope,
}

impl DocumentContext {
    pub fn window(base_url: Url) -> Self {
        Self {
            base_url,
            scope: GlobalScope::Window,
        }
    }

    pub fn with_scope(base_url: Url, scope: GlobalScope) -> Self {
        Self { base_url, scope }
    }
}

impl ExecutionContext for DocumentContext {
    fn global_scope(&self) -> GlobalScope {
        self.scope
    }

    fn origin(&self) -> Origin {
        self.base_url.origin()
    }

    fn api_base_url(&self) -> Url {
        self.base_url.clone()
    }

    fn current_wall_time(&self) -> f64 {
        Utc::now().timestamp_micros() as f64 / 1000.0
    }
}
