//! Common error infrastructure for wilds-core.
//!
//! Domain-specific errors ([`PoolError`](crate::pool::PoolError),
//! [`GraphError`](crate::graph::GraphError)) are defined next to the
//! structures they validate; this module holds the shared classification
//! machinery they implement.

/// Severity level of an error, used for categorization and handling policy.
///
/// Every error in this crate is raised during table construction; queries
/// themselves are total. Severity tells the caller whether the failure is a
/// content-authoring mistake or something worse.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid authored data - reject the content, nothing is corrupted.
    ///
    /// Examples: zero link weight, non-ascending chain thresholds
    Validation,

    /// Unrecoverable error - a construction invariant could not be upheld.
    ///
    /// Example: total link weight overflowing the cumulative counter
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error means construction cannot be retried.
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::Fatal)
    }
}

/// Common trait for all wilds-core errors.
///
/// Provides a uniform interface for error classification across the crate.
/// Error enums derive `thiserror::Error` for Display and implement this
/// trait for severity and stable code lookup.
pub trait WildsError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Useful for categorization, metrics, and testing. Default
    /// implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
