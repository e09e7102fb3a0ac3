use std::sync::Mutex;

pub use log::Level;

/// Log target used by [`LogSink`].
pub const LOG_TARGET: &str = "esi::scoring";

/// A single message emitted while evaluating a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub level: Level,
    pub message: String,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: Level::Info,
            message: message.into(),
        }
    }
}

/// Receiver for evaluator diagnostics.
///
/// The evaluator never returns an error to its caller; validation failures
/// and exclusions are reported here instead.
pub trait DiagnosticSink: Send + Sync {
    fn emit(&self, diagnostic: &Diagnostic);
}

/// Forwards diagnostics to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        log::log!(target: LOG_TARGET, diagnostic.level, "{}", diagnostic.message);
    }
}

/// Discards every diagnostic.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn emit(&self, _diagnostic: &Diagnostic) {}
}

/// Collects diagnostics in memory until drained.
#[derive(Debug, Default)]
pub struct BufferedSink {
    buffer: Mutex<Vec<Diagnostic>>,
}

impl BufferedSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return all collected diagnostics and clear the buffer.
    pub fn drain(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Diagnostic>> {
        // A poisoned lock still guards a valid Vec
        self.buffer.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl DiagnosticSink for BufferedSink {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.lock().push(diagnostic.clone());
    }
}

/// Prefixes every message with a label before handing it on.
pub(crate) struct Labelled<'a> {
    pub label: &'a str,
    pub inner: &'a dyn DiagnosticSink,
}

impl DiagnosticSink for Labelled<'_> {
    fn emit(&self, diagnostic: &Diagnostic) {
        self.inner.emit(&Diagnostic {
            level: diagnostic.level,
            message: format!("{}: {}", self.label, diagnostic.message),
        });
    }
}
