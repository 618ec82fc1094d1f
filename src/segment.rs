//! Path tokenization and segment classification
//!
//! Paths and patterns are both split on the ASCII slash. Only the slash is
//! structurally significant, so tokenization works directly on the raw text
//! and borrows from it.

use std::borrow::Cow;

/// Specificity added by a static (or index) segment.
pub(crate) const STATIC_WEIGHT: u32 = 2;
/// Specificity added by a dynamic segment.
pub(crate) const DYNAMIC_WEIGHT: u32 = 1;

/// Split a path into its ordered segments.
///
/// - `""` yields no segments
/// - `"/"` yields a single empty segment (the root index)
/// - the leading slash is dropped and repeated slashes collapse
/// - a trailing slash appends one empty segment, marking an index at that depth
///
/// # Example
///
/// ```
/// use route_trie::parse_segments;
///
/// assert!(parse_segments("").is_empty());
/// assert_eq!(parse_segments("/"), vec![""]);
/// assert_eq!(parse_segments("/users//42"), vec!["users", "42"]);
/// assert_eq!(parse_segments("/users/"), vec!["users", ""]);
/// ```
pub fn parse_segments(path: &str) -> Vec<&str> {
    if path.is_empty() {
        return Vec::new();
    }
    if path == "/" {
        return vec![""];
    }

    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if path.ends_with('/') {
        segments.push("");
    }
    segments
}

/// Discriminant of a [`Segment`], used for flags and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// Literal text
    Static,
    /// Named single-segment parameter
    Dynamic,
    /// Zero-or-more trailing segments
    Splat,
    /// End-of-parent marker
    Index,
}

/// A single classified pattern segment
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Literal text that must match exactly
    Static(String),
    /// Parameter capturing one path segment, holding the parameter name
    Dynamic(String),
    /// Wildcard capturing every remaining path segment
    Splat,
    /// Index marker; never consumes a path segment itself
    Index,
}

impl Segment {
    /// Classify a raw pattern segment using the given marker characters.
    ///
    /// An empty segment is an index, a segment consisting of exactly the splat
    /// marker is a splat, and a segment starting with the dynamic prefix
    /// followed by a name is dynamic. Everything else is static.
    pub fn classify(raw: &str, dynamic_prefix: char, splat: char) -> Self {
        if raw.is_empty() {
            return Segment::Index;
        }

        let mut chars = raw.chars();
        if chars.next() == Some(splat) && chars.as_str().is_empty() {
            return Segment::Splat;
        }

        match raw.strip_prefix(dynamic_prefix) {
            Some(name) if !name.is_empty() => Segment::Dynamic(name.to_string()),
            _ => Segment::Static(raw.to_string()),
        }
    }

    /// The kind of this segment
    pub fn kind(&self) -> SegmentKind {
        match self {
            Segment::Static(_) => SegmentKind::Static,
            Segment::Dynamic(_) => SegmentKind::Dynamic,
            Segment::Splat => SegmentKind::Splat,
            Segment::Index => SegmentKind::Index,
        }
    }

    /// Canonical text: `:name` for parameters, `*` for splats, `""` for index.
    pub fn canonical(&self) -> Cow<'_, str> {
        match self {
            Segment::Static(text) => Cow::Borrowed(text),
            Segment::Dynamic(name) => Cow::Owned(format!(":{}", name)),
            Segment::Splat => Cow::Borrowed("*"),
            Segment::Index => Cow::Borrowed(""),
        }
    }

    /// Parameter name if this is a dynamic segment
    pub fn param_name(&self) -> Option<&str> {
        match self {
            Segment::Dynamic(name) => Some(name),
            _ => None,
        }
    }

    /// Specificity contributed by this segment. Splats contribute nothing.
    pub(crate) fn weight(&self) -> u32 {
        match self {
            Segment::Static(_) | Segment::Index => STATIC_WEIGHT,
            Segment::Dynamic(_) => DYNAMIC_WEIGHT,
            Segment::Splat => 0,
        }
    }
}
