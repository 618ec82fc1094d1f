//! Matcher configuration

use crate::error::MatcherError;

/// Surface syntax and diagnostics settings for a [`Matcher`](crate::Matcher).
///
/// # Example
///
/// ```
/// use route_trie::MatcherConfig;
///
/// let config = MatcherConfig::new()
///     .explicit_index_segment("_index")
///     .quiet(true);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.explicit_index_segment.as_deref(), Some("_index"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Prefix marking a dynamic parameter segment (default `:`)
    pub dynamic_param_prefix: char,
    /// Character forming a splat segment (default `*`)
    pub splat_segment: char,
    /// Literal token denoting an index segment. When `None`, a trailing
    /// slash denotes an index.
    pub explicit_index_segment: Option<String>,
    /// Suppress registration warnings
    pub quiet: bool,
}

impl MatcherConfig {
    /// Create a config with the default markers
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dynamic parameter prefix
    pub fn dynamic_param_prefix(mut self, prefix: char) -> Self {
        self.dynamic_param_prefix = prefix;
        self
    }

    /// Set the splat marker
    pub fn splat_segment(mut self, splat: char) -> Self {
        self.splat_segment = splat;
        self
    }

    /// Use an explicit token (e.g. `_index`) instead of a trailing slash
    pub fn explicit_index_segment(mut self, token: impl Into<String>) -> Self {
        self.explicit_index_segment = Some(token.into());
        self
    }

    /// Suppress registration warnings
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    /// Check the configuration for programmer mistakes
    pub fn validate(&self) -> Result<(), MatcherError> {
        for marker in [self.dynamic_param_prefix, self.splat_segment] {
            if marker == '/' {
                return Err(MatcherError::InvalidMarker { marker });
            }
        }

        if self.dynamic_param_prefix == self.splat_segment {
            return Err(MatcherError::ConflictingMarkers {
                marker: self.splat_segment,
            });
        }

        if let Some(token) = &self.explicit_index_segment {
            if token.is_empty() || token.contains('/') {
                return Err(MatcherError::InvalidIndexSegment {
                    token: token.clone(),
                });
            }
        }

        Ok(())
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            dynamic_param_prefix: ':',
            splat_segment: '*',
            explicit_index_segment: None,
            quiet: false,
        }
    }
}
