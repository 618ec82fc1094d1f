//! # Route Trie
//!
//! A segment-trie route pattern matcher with two query modes:
//!
//! - **Best match** - the single most specific pattern for a path (flat
//!   routing, e.g. API endpoints)
//! - **Nested matches** - the whole root-to-leaf chain of layout patterns for
//!   a path (hierarchical UI routing)
//!
//! Patterns are made of static segments (`users`), dynamic parameters
//! (`:id`), a trailing splat (`*`) and index segments (a trailing slash, or an
//! explicit token such as `_index`).
//!
//! # Quick Start
//!
//! ```
//! use route_trie::Matcher;
//!
//! let mut matcher = Matcher::default();
//! matcher.register_pattern("/api/:version/users/:id");
//! matcher.register_pattern("/files/*");
//!
//! let m = matcher.find_best_match("/api/v2/users/123").unwrap();
//! assert_eq!(m.params.get("version"), Some(&"v2".to_string()));
//! assert_eq!(m.params.get_as::<u32>("id"), Some(123));
//! assert!(m.splat_values.is_empty());
//!
//! let m = matcher.find_best_match("/files/a/b/c.txt").unwrap();
//! assert_eq!(m.splat_values, vec!["a", "b", "c.txt"]);
//! ```
//!
//! # Nested Routes
//!
//! ```
//! use route_trie::{Matcher, MatcherConfig};
//!
//! let mut matcher = Matcher::new(MatcherConfig::new().explicit_index_segment("_index"))?;
//! for pattern in ["", "/dashboard", "/dashboard/:tab", "/dashboard/:tab/_index"] {
//!     matcher.register_pattern(pattern);
//! }
//!
//! let nested = matcher.find_nested_matches("/dashboard/reports").unwrap();
//! let chain: Vec<_> = nested.matches.iter().map(|m| m.original_pattern()).collect();
//! assert_eq!(chain, vec!["", "/dashboard", "/dashboard/:tab", "/dashboard/:tab/_index"]);
//! assert_eq!(nested.params.get("tab"), Some(&"reports".to_string()));
//! # Ok::<(), route_trie::MatcherError>(())
//! ```
//!
//! # Lifecycle
//!
//! Register every pattern once at startup, then share the matcher read-only.
//! Lookups take `&self`, hold no per-request state and can run from any
//! number of threads.
//!
//! # Feature Flags
//!
//! - `log` (default) - Uses the standard `log` crate for logging
//! - `tracing` - Uses the `tracing` crate for structured logging (mutually exclusive with `log`)
//! - `cache` (default) - LRU caching wrapper around lookups

#![cfg_attr(docsrs, feature(doc_cfg))]
// Lints are configured in Cargo.toml [lints] section

// Logging abstraction
pub mod logging;

// Cache (optional)
#[cfg(feature = "cache")]
pub mod cache;

// Core matching modules
pub mod config;
pub mod error;
pub mod matcher;
pub mod nested;
pub mod params;
pub mod pattern;
pub mod segment;

mod trie;

// Re-export main types for convenient access
#[cfg(feature = "cache")]
pub use cache::{CacheStats, CachedMatcher, MatchCache};
pub use config::MatcherConfig;
pub use error::MatcherError;
pub use matcher::Matcher;
pub use nested::NestedMatches;
pub use params::Params;
pub use pattern::RegisteredPattern;
pub use segment::{parse_segments, Segment, SegmentKind};

use std::sync::Arc;

/// A pattern matched against a path.
///
/// Contains the registered pattern along with the parameters and splat
/// values recovered from the path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    /// The matched pattern
    pub pattern: Arc<RegisteredPattern>,
    /// Extracted route parameters (e.g., `:id` -> "123")
    pub params: Params,
    /// Path segments captured by a trailing splat
    pub splat_values: Vec<String>,
    /// Specificity score of the pattern
    pub score: u32,
}

impl Match {
    pub(crate) fn from_static(pattern: &Arc<RegisteredPattern>) -> Self {
        Self {
            pattern: Arc::clone(pattern),
            params: Params::new(),
            splat_values: Vec::new(),
            score: pattern.specificity(),
        }
    }

    /// The canonical pattern text
    pub fn normalized_pattern(&self) -> &str {
        self.pattern.normalized_pattern()
    }

    /// The pattern text as registered
    pub fn original_pattern(&self) -> &str {
        self.pattern.original_pattern()
    }
}
