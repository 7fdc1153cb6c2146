//! In-memory diagnostics for non-fatal failures.
//!
//! Nothing in the calculator is fatal: malformed input coerces to zero and
//! persistence failures degrade to defaults. What remains worth keeping is
//! a bounded trail of what went wrong, so the service holds the last 100
//! entries in a ring buffer. It is constructed explicitly and passed by
//! reference to whatever needs it; there is no hidden global. In
//! development mode every entry is mirrored to `tracing`.

use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Maximum number of retained entries; older entries are evicted first.
pub const MAX_ENTRIES: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DiagnosticLevel {
    Error,
    Warning,
    Info,
}

impl DiagnosticLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosticEntry {
    pub level: DiagnosticLevel,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Structured detail attached at the call site, e.g. the store key and
    /// the parse error that triggered the entry.
    pub context: Option<serde_json::Value>,
}

/// Bounded diagnostic log for one application session.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: VecDeque<DiagnosticEntry>,
    dev_mode: bool,
}

impl Diagnostics {
    pub fn new(dev_mode: bool) -> Self {
        Self {
            entries: VecDeque::with_capacity(MAX_ENTRIES),
            dev_mode,
        }
    }

    pub fn log(
        &mut self,
        level: DiagnosticLevel,
        message: impl Into<String>,
        context: Option<serde_json::Value>,
    ) {
        let message = message.into();

        if self.dev_mode {
            let rendered = match &context {
                Some(context) => format!("{message} {context}"),
                None => message.clone(),
            };
            match level {
                DiagnosticLevel::Error => tracing::error!("{rendered}"),
                DiagnosticLevel::Warning => tracing::warn!("{rendered}"),
                DiagnosticLevel::Info => tracing::info!("{rendered}"),
            }
        }

        if self.entries.len() == MAX_ENTRIES {
            self.entries.pop_front();
        }
        self.entries.push_back(DiagnosticEntry {
            level,
            message,
            timestamp: Utc::now(),
            context,
        });
    }

    pub fn error(
        &mut self,
        message: impl Into<String>,
    ) {
        self.log(DiagnosticLevel::Error, message, None);
    }

    pub fn error_with(
        &mut self,
        message: impl Into<String>,
        context: serde_json::Value,
    ) {
        self.log(DiagnosticLevel::Error, message, Some(context));
    }

    pub fn warning(
        &mut self,
        message: impl Into<String>,
    ) {
        self.log(DiagnosticLevel::Warning, message, None);
    }

    pub fn warning_with(
        &mut self,
        message: impl Into<String>,
        context: serde_json::Value,
    ) {
        self.log(DiagnosticLevel::Warning, message, Some(context));
    }

    pub fn info(
        &mut self,
        message: impl Into<String>,
    ) {
        self.log(DiagnosticLevel::Info, message, None);
    }

    pub fn entries(&self) -> impl Iterator<Item = &DiagnosticEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
