//! Shared result type for "flag > environment > default" resolution.

use std::fmt;

/// Where a rejected value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSource {
    Flag,
    Environment,
}

impl fmt::Display for ValueSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValueSource::Flag => f.write_str("command-line"),
            ValueSource::Environment => f.write_str("configured"),
        }
    }
}

/// A value that was rejected during resolution. Never fatal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionWarning {
    /// What was being selected, e.g. "language" or "LLM provider".
    pub kind: &'static str,
    pub source: ValueSource,
    pub value: String,
    /// What resolution did instead.
    pub fallback: String,
}

impl fmt::Display for SelectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unsupported {} {} '{}'. {}.",
            self.source, self.kind, self.value, self.fallback
        )
    }
}

/// The outcome of a resolution plus any warnings produced along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<T> {
    pub value: T,
    pub warnings: Vec<SelectionWarning>,
}

impl<T> Resolved<T> {
    pub fn new(value: T, warnings: Vec<SelectionWarning>) -> Self {
        Self { value, warnings }
    }
}

/// Treat `None`, empty, and whitespace-only inputs alike.
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
