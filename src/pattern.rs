//! Pattern normalization
//!
//! A raw pattern is split into segments, each segment is classified, and the
//! canonical segment texts are joined back into the normalized pattern. The
//! normalized form is the identity of a pattern: two raw patterns with the
//! same normalized form are the same route.
//!
//! Index-ness is always represented internally as a trailing empty segment
//! (a normalized pattern ending in `/`), whatever surface syntax is configured.

use crate::config::MatcherConfig;
use crate::segment::{parse_segments, Segment, SegmentKind};
use crate::warn_log;

/// A pattern after normalization, with flags derived from its segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisteredPattern {
    original: String,
    normalized: String,
    segments: Vec<Segment>,
    dynamic_param_count: usize,
}

impl RegisteredPattern {
    /// The pattern text as it was registered
    pub fn original_pattern(&self) -> &str {
        &self.original
    }

    /// The canonical pattern text
    pub fn normalized_pattern(&self) -> &str {
        &self.normalized
    }

    /// Classified segments, root to leaf
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Number of segments
    pub fn segment_len(&self) -> usize {
        self.segments.len()
    }

    /// Kind of the last segment, `None` for the empty pattern
    pub fn last_segment_kind(&self) -> Option<SegmentKind> {
        self.segments.last().map(Segment::kind)
    }

    /// Whether the pattern ends in an index segment
    pub fn is_index(&self) -> bool {
        self.last_segment_kind() == Some(SegmentKind::Index)
    }

    /// Whether the pattern ends in a splat below the root (e.g. `/files/*`)
    pub fn is_non_root_splat(&self) -> bool {
        self.segments.len() > 1 && self.last_segment_kind() == Some(SegmentKind::Splat)
    }

    /// Whether this is the universal catch-all `/*`
    pub fn is_catch_all(&self) -> bool {
        matches!(self.segments.as_slice(), [Segment::Splat])
    }

    /// Whether the pattern has no dynamic or splat segment
    pub fn is_static(&self) -> bool {
        self.segments
            .iter()
            .all(|s| matches!(s, Segment::Static(_) | Segment::Index))
    }

    /// Number of dynamic parameter segments
    pub fn dynamic_param_count(&self) -> usize {
        self.dynamic_param_count
    }

    /// Total specificity score of the pattern
    pub fn specificity(&self) -> u32 {
        self.segments.iter().map(Segment::weight).sum()
    }
}

/// Normalize `raw` under `config`.
pub(crate) fn normalize(raw: &str, config: &MatcherConfig) -> RegisteredPattern {
    let index_token = config.explicit_index_segment.as_deref();

    let mut working = raw;
    if index_token.is_some() && working.ends_with('/') {
        if !config.quiet {
            warn_log!(
                "Pattern '{}' has a trailing slash, which is ignored when an explicit index segment is configured",
                raw
            );
        }
        working = working.trim_end_matches('/');
    }

    let raw_segments = parse_segments(working);
    let last = raw_segments.len().saturating_sub(1);

    let segments: Vec<Segment> = raw_segments
        .iter()
        .enumerate()
        .map(|(i, raw_segment)| match index_token {
            Some(token) if i == last && *raw_segment == token => Segment::Index,
            _ => Segment::classify(
                raw_segment,
                config.dynamic_param_prefix,
                config.splat_segment,
            ),
        })
        .collect();

    let normalized = if segments.is_empty() {
        String::new()
    } else {
        let joined: Vec<_> = segments.iter().map(Segment::canonical).collect();
        format!("/{}", joined.join("/"))
    };

    let dynamic_param_count = segments
        .iter()
        .filter(|s| s.kind() == SegmentKind::Dynamic)
        .count();

    RegisteredPattern {
        original: raw.to_string(),
        normalized,
        segments,
        dynamic_param_count,
    }
}
