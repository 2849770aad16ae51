//! Where load-time warnings and failures are reported.
//!
//! Loading never decides how problems are presented; it hands a severity and
//! a human-readable message to a [`DiagnosticsSink`] and carries on (advisory)
//! or returns the error (fatal).

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};

use thiserror::Error;
use tracing::{error, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Severity::Warning => "warning",
            Severity::Error => "error",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
}

/// A non-fatal problem found while loading.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Advisory {
    #[error("Included audio asset not found: {path}")]
    AssetMissing { path: String },
}

impl Advisory {
    pub fn severity(&self) -> Severity {
        match self {
            Advisory::AssetMissing { .. } => Severity::Warning,
        }
    }
}

/// Receives diagnostics. Implementations must tolerate concurrent calls.
pub trait DiagnosticsSink: Send + Sync {
    fn report(&self, severity: Severity, message: &str);

    fn advise(&self, advisory: &Advisory) {
        self.report(advisory.severity(), &advisory.to_string());
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for &S {
    fn report(&self, severity: Severity, message: &str) {
        (**self).report(severity, message)
    }
}

impl<S: DiagnosticsSink + ?Sized> DiagnosticsSink for Arc<S> {
    fn report(&self, severity: Severity, message: &str) {
        (**self).report(severity, message)
    }
}

/// Sends every diagnostic to both sinks.
impl<A: DiagnosticsSink, B: DiagnosticsSink> DiagnosticsSink for (A, B) {
    fn report(&self, severity: Severity, message: &str) {
        self.0.report(severity, message);
        self.1.report(severity, message);
    }
}

/// Forwards diagnostics to `tracing` events.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticsSink for TracingSink {
    fn report(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Warning => warn!("{message}"),
            Severity::Error => error!("{message}"),
        }
    }
}

/// Keeps every diagnostic in memory, in arrival order.
#[derive(Debug, Default)]
pub struct CollectingSink {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn with_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.entries()
            .into_iter()
            .filter(|entry| entry.severity == severity)
            .collect()
    }

    pub fn warnings(&self) -> Vec<Diagnostic> {
        self.with_severity(Severity::Warning)
    }

    pub fn errors(&self) -> Vec<Diagnostic> {
        self.with_severity(Severity::Error)
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .filter(|entry| entry.severity == severity)
            .count()
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }
}

impl DiagnosticsSink for CollectingSink {
    fn report(&self, severity: Severity, message: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(Diagnostic {
                severity,
                message: message.to_string(),
            });
    }
}
