//! Host capability hooks
//!
//! The host automation tool is duck-typed from the logger's point of view:
//! all it must expose is a logging callback and an error constructor whose
//! instances behave like errors. `HostHandle` carries those two hooks, both
//! swappable after construction — the adapter reads them at call time, so
//! host-side reconfiguration after wrap is honored.

use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

/// The host's logging callback.
pub type LogHook = Arc<dyn Fn(&str) + Send + Sync>;

/// The host's error constructor. The boxed return type is what makes its
/// instances error-compatible; no further runtime check is needed.
pub type ErrorCtor =
    Arc<dyn Fn(String) -> Box<dyn std::error::Error + Send + Sync + 'static> + Send + Sync>;

/// Handle to a host object. Hooks are optional until set; wrap-time
/// validation turns an absent hook into a `MissingCapability` error naming
/// the field.
#[derive(Default)]
pub struct HostHandle {
    log_hook: RwLock<Option<LogHook>>,
    error_ctor: RwLock<Option<ErrorCtor>>,
}

impl HostHandle {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_log_hook(self, hook: LogHook) -> Self {
        *self.log_hook.write() = Some(hook);
        self
    }

    #[must_use]
    pub fn with_error_ctor(self, ctor: ErrorCtor) -> Self {
        *self.error_ctor.write() = Some(ctor);
        self
    }

    /// Replace the logging callback. Wrapped loggers pick the new hook up
    /// on their next call.
    pub fn set_log_hook(&self, hook: LogHook) {
        *self.log_hook.write() = Some(hook);
    }

    /// Replace the error constructor.
    pub fn set_error_ctor(&self, ctor: ErrorCtor) {
        *self.error_ctor.write() = Some(ctor);
    }

    pub fn log_hook(&self) -> Option<LogHook> {
        self.log_hook.read().clone()
    }

    pub fn error_ctor(&self) -> Option<ErrorCtor> {
        self.error_ctor.read().clone()
    }
}

impl fmt::Debug for HostHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostHandle")
            .field("log_hook", &self.log_hook.read().is_some())
            .field("error_ctor", &self.error_ctor.read().is_some())
            .finish()
    }
}
