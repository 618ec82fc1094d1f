//! Logging abstraction layer
//!
//! Registration reports at `debug`/`warn` (duplicate patterns, ignored
//! trailing slashes); lookups only emit `trace`. The macros dispatch to
//! either the `log` or the `tracing` crate.
//!
//! # Features
//!
//! - `log` (default) - Uses the standard `log` crate
//! - `tracing` - Uses the `tracing` crate for structured logging
//!
//! Choose one feature at compile time. They are mutually exclusive.
//!
//! # Usage
//!
//! ```ignore
//! use route_trie::{debug_log, trace_log, warn_log};
//!
//! debug_log!("Registering pattern '{}'", pattern);
//! warn_log!("Pattern '{}' is already registered; overwriting", pattern);
//! trace_log!("Best match for '{}' is '{}'", path, pattern);
//! ```

/// Trace-level logging
///
/// Per-lookup detail; hot path only.
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
        #[cfg(feature = "log")]
        ::log::trace!($($arg)*);
    };
}

/// Debug-level logging
///
/// Registration-time detail.
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
        #[cfg(feature = "log")]
        ::log::debug!($($arg)*);
    };
}

/// Warn-level logging
///
/// Non-fatal registration problems.
#[macro_export]
macro_rules! warn_log {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::warn!($($arg)*);
        #[cfg(feature = "log")]
        ::log::warn!($($arg)*);
    };
}
