//! Pattern registry and best-match resolution
//!
//! Pure-static patterns live in a flat table for exact lookups. Every other
//! pattern is inserted into the segment trie. Registration happens once at
//! startup; afterwards the matcher is only read, so lookups can run from any
//! number of threads through a shared reference.
//!
//! Ranking is by specificity score: each static segment adds more than a
//! dynamic one and a splat adds nothing. Ties go to whichever candidate the
//! depth-first search meets first (static branch, then parameters, then splat).

use crate::config::MatcherConfig;
use crate::error::MatcherError;
use crate::params::Params;
use crate::pattern::{normalize, RegisteredPattern};
use crate::segment::{parse_segments, SegmentKind};
use crate::trie::TrieNode;
use crate::{debug_log, trace_log, warn_log, Match};
use std::collections::HashMap;
use std::sync::Arc;

/// Route pattern matcher
///
/// # Example
///
/// ```
/// use route_trie::Matcher;
///
/// let mut matcher = Matcher::default();
/// matcher.register_pattern("/users");
/// matcher.register_pattern("/users/:id");
/// matcher.register_pattern("/files/*");
///
/// let m = matcher.find_best_match("/users/42").unwrap();
/// assert_eq!(m.normalized_pattern(), "/users/:id");
/// assert_eq!(m.params.get("id"), Some(&"42".to_string()));
///
/// let m = matcher.find_best_match("/files/a/b").unwrap();
/// assert_eq!(m.splat_values, vec!["a", "b"]);
///
/// assert!(matcher.find_best_match("/nope").is_none());
/// ```
#[derive(Debug)]
pub struct Matcher {
    config: MatcherConfig,
    static_patterns: HashMap<String, Arc<RegisteredPattern>>,
    dynamic_patterns: HashMap<String, Arc<RegisteredPattern>>,
    pub(crate) root: TrieNode,
}

impl Matcher {
    /// Create a matcher, rejecting an invalid configuration
    pub fn new(config: MatcherConfig) -> Result<Self, MatcherError> {
        config.validate()?;
        Ok(Self {
            config,
            static_patterns: HashMap::new(),
            dynamic_patterns: HashMap::new(),
            root: TrieNode::new(),
        })
    }

    /// The configuration this matcher was built with
    pub fn config(&self) -> &MatcherConfig {
        &self.config
    }

    /// Normalize a raw pattern without registering it
    pub fn normalize_pattern(&self, raw: &str) -> RegisteredPattern {
        normalize(raw, &self.config)
    }

    /// Register a pattern.
    ///
    /// Registering a pattern whose normalized form is already known replaces
    /// the previous owner and logs a warning unless the matcher is quiet. The
    /// normalized form is the identity across both the static table and the
    /// trie: a literal `/users/:id` registered under a custom parameter prefix
    /// replaces a dynamic `/users/:id`, and the other way round.
    pub fn register_pattern(&mut self, raw: &str) -> Arc<RegisteredPattern> {
        let pattern = Arc::new(self.normalize_pattern(raw));
        let normalized = pattern.normalized_pattern().to_string();

        let previous = if pattern.is_static() {
            debug_log!("Registering static pattern '{}'", normalized);
            let displaced = self.dynamic_patterns.remove(&normalized);
            if let Some(displaced) = &displaced {
                self.root.remove(displaced);
            }
            self.static_patterns
                .insert(normalized.clone(), Arc::clone(&pattern))
                .or(displaced)
        } else {
            debug_log!(
                "Registering pattern '{}' (score {})",
                normalized,
                pattern.specificity()
            );
            let displaced = self.static_patterns.remove(&normalized);
            self.root.insert(Arc::clone(&pattern));
            self.dynamic_patterns
                .insert(normalized.clone(), Arc::clone(&pattern))
                .or(displaced)
        };

        if let Some(previous) = previous {
            if !self.config.quiet {
                warn_log!(
                    "Pattern '{}' (from '{}') is already registered from '{}'; overwriting",
                    normalized,
                    raw,
                    previous.original_pattern()
                );
            }
        }

        pattern
    }

    /// Look up a registered pattern by its normalized form
    pub fn get(&self, normalized: &str) -> Option<&Arc<RegisteredPattern>> {
        self.static_patterns
            .get(normalized)
            .or_else(|| self.dynamic_patterns.get(normalized))
    }

    /// Iterate over every registered pattern
    pub fn patterns(&self) -> impl Iterator<Item = &Arc<RegisteredPattern>> {
        self.static_patterns
            .values()
            .chain(self.dynamic_patterns.values())
    }

    /// Number of registered patterns
    pub fn len(&self) -> usize {
        self.static_patterns.len() + self.dynamic_patterns.len()
    }

    /// Whether no pattern is registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn static_pattern(&self, path: &str) -> Option<&Arc<RegisteredPattern>> {
        self.static_patterns.get(path)
    }

    /// Find the single most specific pattern matching `path`.
    pub fn find_best_match(&self, path: &str) -> Option<Match> {
        if let Some(pattern) = self.static_pattern(path) {
            trace_log!("Static hit for '{}'", path);
            return Some(Match::from_static(pattern));
        }

        // A request with a trailing slash still satisfies the slashless pattern
        if let Some(stripped) = path.strip_suffix('/') {
            if let Some(pattern) = self.static_pattern(stripped) {
                trace_log!("Static hit for '{}' without trailing slash", path);
                return Some(Match::from_static(pattern));
            }
        }

        let segments = parse_segments(path);
        let mut best = None;
        search_best(
            &self.root,
            &segments,
            0,
            path.ends_with('/'),
            &mut best,
        );

        let node = best?;
        let pattern = node.pattern()?;
        trace_log!(
            "Best match for '{}' is '{}' (score {})",
            path,
            pattern.normalized_pattern(),
            node.score()
        );

        Some(Match {
            pattern: Arc::clone(pattern),
            params: bind_params(pattern, &segments),
            splat_values: splat_values(pattern, &segments),
            score: node.score(),
        })
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self {
            config: MatcherConfig::default(),
            static_patterns: HashMap::new(),
            dynamic_patterns: HashMap::new(),
            root: TrieNode::new(),
        }
    }
}

fn search_best<'t>(
    node: &'t TrieNode,
    segments: &[&str],
    depth: usize,
    trailing_slash: bool,
    best: &mut Option<&'t TrieNode>,
) {
    if node.pattern().is_some() {
        let exact = depth == segments.len();
        let before_trailing_slash = trailing_slash && depth + 1 == segments.len();
        if exact || before_trailing_slash {
            consider(node, best);
        }
    }

    let Some(segment) = segments.get(depth) else {
        return;
    };

    if let Some(child) = node.static_child(segment) {
        search_best(child, segments, depth + 1, trailing_slash, best);
    }

    // A parameter never binds an empty segment
    if !segment.is_empty() {
        for (_, child) in node.param_children() {
            search_best(child, segments, depth + 1, trailing_slash, best);
        }
    }

    // The splat swallows everything left, so there is nothing to descend into
    if let Some(splat) = node.splat_child() {
        if splat.pattern().is_some() {
            consider(splat, best);
        }
    }
}

fn consider<'t>(candidate: &'t TrieNode, best: &mut Option<&'t TrieNode>) {
    if best.map_or(true, |current| candidate.score() > current.score()) {
        *best = Some(candidate);
    }
}

/// Replay the pattern's segments against the path to recover parameters.
pub(crate) fn bind_params(pattern: &RegisteredPattern, segments: &[&str]) -> Params {
    let mut params = Params::new();
    if pattern.dynamic_param_count() == 0 {
        return params;
    }

    for (segment, value) in pattern.segments().iter().zip(segments) {
        if let Some(name) = segment.param_name() {
            params.insert(name.to_string(), (*value).to_string());
        }
    }
    params
}

/// Every path segment from the splat position onward.
pub(crate) fn splat_values(pattern: &RegisteredPattern, segments: &[&str]) -> Vec<String> {
    if pattern.last_segment_kind() != Some(SegmentKind::Splat) {
        return Vec::new();
    }

    let start = pattern.segment_len() - 1;
    segments
        .get(start..)
        .map(|rest| rest.iter().map(|s| (*s).to_string()).collect())
        .unwrap_or_default()
}
