//! Error types for matcher configuration
//!
//! Lookups never fail: a missing match is reported as `None`. The only errors
//! are configuration mistakes, which are detected before any pattern is
//! registered.

use std::fmt;

/// Errors raised while building a [`Matcher`](crate::Matcher)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatcherError {
    /// The explicit index token is empty or contains a slash
    InvalidIndexSegment { token: String },

    /// A marker character cannot be a slash
    InvalidMarker { marker: char },

    /// The dynamic prefix and splat marker are the same character
    ConflictingMarkers { marker: char },
}

impl fmt::Display for MatcherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatcherError::InvalidIndexSegment { token } => {
                write!(
                    f,
                    "Invalid explicit index segment '{}': must be non-empty and contain no '/'",
                    token
                )
            }
            MatcherError::InvalidMarker { marker } => {
                write!(f, "Invalid segment marker '{}'", marker)
            }
            MatcherError::ConflictingMarkers { marker } => {
                write!(
                    f,
                    "Dynamic prefix and splat marker are both '{}'",
                    marker
                )
            }
        }
    }
}

impl std::error::Error for MatcherError {}

// ============================================================================
// Tests
// ============================================================================
