use std::sync::{Arc, Mutex};

use accessors_rs::Accessors;

/// Severity of a diagnostic reported through a [`Messager`][].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Kind {
    Note,
    Warning,
    Error,
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Kind::Note => write!(f, "note"),
            Kind::Warning => write!(f, "warning"),
            Kind::Error => write!(f, "error"),
        }
    }
}

/// Channel through which a processor reports back to the host toolchain.
///
/// The host owns the sink; processors borrow it from
/// [`ProcessingEnv`](crate::env::ProcessingEnv). An environment may be shared
/// for the duration of an invocation, so implementations must be usable from
/// multiple threads.
pub trait Messager: Send + Sync {
    /// Report `text` at the given severity.
    fn message(&self, kind: Kind, text: &str);

    fn note(&self, text: &str) {
        self.message(Kind::Note, text);
    }

    fn warning(&self, text: &str) {
        self.message(Kind::Warning, text);
    }

    fn error(&self, text: &str) {
        self.message(Kind::Error, text);
    }
}

/// Messager that writes `kind: text` lines to stderr, the sink processor
/// executables run with. An optional prefix names the processor.
#[derive(Debug, Default)]
pub struct StderrMessager {
    prefix: Option<String>,
}

impl StderrMessager {
    pub fn new() -> Self {
        Self { prefix: None }
    }

    /// A messager that announces itself, e.g. `[builder processor]`.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: Some(prefix.into()),
        }
    }
}

impl Messager for StderrMessager {
    fn message(&self, kind: Kind, text: &str) {
        match &self.prefix {
            Some(prefix) => eprintln!("{prefix}: {kind}: {text}"),
            None => eprintln!("{kind}: {text}"),
        }
    }
}

/// One recorded diagnostic.
#[derive(Accessors, Clone, Debug, PartialEq, Eq)]
#[accessors(get)]
pub struct Diagnostic {
    pub(crate) kind: Kind,
    pub(crate) text: String,
}

/// Messager that keeps diagnostics in memory.
///
/// Clones share storage: hand one clone to a
/// [`ProcessingEnv`](crate::env::ProcessingEnv) and inspect the other
/// afterwards. This is the sink to use in tests and in hosts that embed a
/// processor.
#[derive(Clone, Debug, Default)]
pub struct RecordingMessager {
    records: Arc<Mutex<Vec<Diagnostic>>>,
}

impl RecordingMessager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain and return everything recorded so far.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.records.lock().unwrap())
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<Diagnostic> {
        self.records.lock().unwrap().clone()
    }
}

impl Messager for RecordingMessager {
    fn message(&self, kind: Kind, text: &str) {
        self.records.lock().unwrap().push(Diagnostic {
            kind,
            text: text.to_string(),
        });
    }
}
