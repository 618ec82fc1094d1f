//! Nested route resolution
//!
//! Hierarchical layouts need every pattern along the path, not just the
//! deepest one. For `/dashboard/customers/123` with layouts registered at
//! `""`, `/dashboard`, `/dashboard/customers` and `/dashboard/customers/:id`,
//! all four are returned root to leaf.
//!
//! Candidates come from two places: every static prefix of the path, and a
//! depth-first walk of the trie that collects every pattern consistent with
//! the literal path. The collected set is then pruned so competing leaves
//! (catch-all, shallower index or splat, dynamic versus splat at the same
//! depth) resolve to a single chain.

use crate::matcher::Matcher;
use crate::params::Params;
use crate::pattern::RegisteredPattern;
use crate::segment::{parse_segments, SegmentKind};
use crate::trie::TrieNode;
use crate::{trace_log, Match};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Ancestor chain resolved for a path
///
/// `params` and `splat_values` are those of the deepest match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NestedMatches {
    /// Parameters of the leaf match
    pub params: Params,
    /// Splat values of the leaf match
    pub splat_values: Vec<String>,
    /// Matches ordered root to leaf
    pub matches: Vec<Match>,
}

impl NestedMatches {
    /// The deepest match
    pub fn leaf(&self) -> Option<&Match> {
        self.matches.last()
    }

    /// Number of matches in the chain
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Whether the chain is empty
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Normalized patterns of the chain, root to leaf
    pub fn patterns(&self) -> impl Iterator<Item = &str> {
        self.matches.iter().map(Match::normalized_pattern)
    }
}

type Collected<'m> = BTreeMap<&'m str, Match>;

impl Matcher {
    /// Find the whole chain of patterns matching `path`, root to leaf.
    ///
    /// # Example
    ///
    /// ```
    /// use route_trie::Matcher;
    ///
    /// let mut matcher = Matcher::default();
    /// for pattern in ["", "/users", "/users/:id", "/users/:id/"] {
    ///     matcher.register_pattern(pattern);
    /// }
    ///
    /// let nested = matcher.find_nested_matches("/users/7").unwrap();
    /// let chain: Vec<_> = nested.patterns().collect();
    /// assert_eq!(chain, vec!["", "/users", "/users/:id", "/users/:id/"]);
    /// assert_eq!(nested.params.get("id"), Some(&"7".to_string()));
    /// ```
    pub fn find_nested_matches(&self, path: &str) -> Option<NestedMatches> {
        let segments = parse_segments(path);
        let mut collected = Collected::new();

        if let Some(layout) = self.static_pattern("") {
            collect_static(&mut collected, layout);
        }

        if path.is_empty() || path == "/" {
            if let Some(index) = self.static_pattern("/") {
                collect_static(&mut collected, index);
            }
            // The catch-all needs a segment to swallow, so `""` never reaches it
            if !segments.is_empty() {
                if let Some(catch_all) = self.root.splat_child() {
                    let rest = segments.iter().map(|s| (*s).to_string()).collect();
                    collect_node(&mut collected, catch_all, Params::new(), rest);
                }
            }
        } else {
            let mut prefix = String::with_capacity(path.len() + 1);
            let mut full_static = false;

            for (i, segment) in segments.iter().enumerate() {
                prefix.push('/');
                prefix.push_str(segment);
                if let Some(pattern) = self.static_pattern(&prefix) {
                    collect_static(&mut collected, pattern);
                    full_static = i + 1 == segments.len();
                }
            }

            if !prefix.ends_with('/') {
                prefix.push('/');
                if let Some(index) = self.static_pattern(&prefix) {
                    collect_static(&mut collected, index);
                }
            }

            if !full_static {
                let mut params = Params::new();
                collect_trie(&self.root, &segments, 0, &mut params, &mut collected);
            }
        }

        let mut matches: Vec<Match> = collected.into_values().collect();
        prune(&mut matches, segments.len());

        // Index matches close the chain; everything else goes by depth
        matches.sort_by_key(|m| (m.pattern.is_index(), m.pattern.segment_len()));

        trace_log!(
            "Nested matches for '{}': {:?}",
            path,
            matches
                .iter()
                .map(Match::normalized_pattern)
                .collect::<Vec<_>>()
        );

        let leaf = matches.last()?;
        Some(NestedMatches {
            params: leaf.params.clone(),
            splat_values: leaf.splat_values.clone(),
            matches,
        })
    }
}

fn collect_static<'m>(collected: &mut Collected<'m>, pattern: &'m Arc<RegisteredPattern>) {
    collected.insert(pattern.normalized_pattern(), Match::from_static(pattern));
}

fn collect_node<'m>(
    collected: &mut Collected<'m>,
    node: &'m TrieNode,
    params: Params,
    splat_values: Vec<String>,
) {
    if let Some(pattern) = node.pattern() {
        collected.insert(
            pattern.normalized_pattern(),
            Match {
                pattern: Arc::clone(pattern),
                params,
                splat_values,
                score: node.score(),
            },
        );
    }
}

fn collect_trie<'m>(
    node: &'m TrieNode,
    segments: &[&str],
    depth: usize,
    params: &mut Params,
    collected: &mut Collected<'m>,
) {
    collect_node(collected, node, params.clone(), Vec::new());

    // The trailing-slash variant of a pattern ending exactly here
    if depth == segments.len() && node.pattern().is_some() {
        if let Some(index) = node.index_child() {
            collect_node(collected, index, params.clone(), Vec::new());
        }
    }

    let Some(segment) = segments.get(depth) else {
        return;
    };

    if let Some(child) = node.static_child(segment) {
        collect_trie(child, segments, depth + 1, params, collected);
    }

    if !segment.is_empty() {
        for (name, child) in node.param_children() {
            let shadowed = params.insert(name.to_string(), (*segment).to_string());
            collect_trie(child, segments, depth + 1, params, collected);
            match shadowed {
                Some(value) => params.insert(name.to_string(), value),
                None => params.remove(name),
            };
        }
    }

    if let Some(splat) = node.splat_child() {
        let rest = segments[depth..].iter().map(|s| (*s).to_string()).collect();
        collect_node(collected, splat, params.clone(), rest);
    }
}

/// Resolve competing candidates down to one ancestor chain.
fn prune(matches: &mut Vec<Match>, real_segment_len: usize) {
    // The catch-all only survives alone
    if matches.len() > 1 {
        matches.retain(|m| !m.pattern.is_catch_all());
    }
    if matches.len() < 2 {
        return;
    }

    let longest = matches
        .iter()
        .map(|m| m.pattern.segment_len())
        .max()
        .unwrap_or(0);
    let at_longest = |m: &Match| m.pattern.segment_len() == longest;

    // Shallower index and splat patterns are subsumed by deeper matches
    matches.retain(|m| at_longest(m) || !(m.pattern.is_index() || m.pattern.is_non_root_splat()));

    if matches.iter().any(|m| at_longest(m) && !m.pattern.is_index()) {
        matches.retain(|m| !(at_longest(m) && m.pattern.is_index()));
    }

    let ends_with = |kind: SegmentKind| {
        matches
            .iter()
            .any(|m| at_longest(m) && m.pattern.last_segment_kind() == Some(kind))
    };
    if ends_with(SegmentKind::Dynamic) && ends_with(SegmentKind::Splat) {
        // Extra path segments beyond the dynamic pattern need the splat
        let losing = if real_segment_len == longest {
            SegmentKind::Splat
        } else {
            SegmentKind::Dynamic
        };
        matches.retain(|m| !(at_longest(m) && m.pattern.last_segment_kind() == Some(losing)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatcherConfig;

    fn matcher(patterns: &[&str]) -> Matcher {
        let mut matcher = Matcher::default();
        for pattern in patterns {
            matcher.register_pattern(pattern);
        }
        matcher
    }

    fn chain(matcher: &Matcher, path: &str) -> Vec<String> {
        matcher
            .find_nested_matches(path)
            .map(|n| n.patterns().map(str::to_string).collect())
            .unwrap_or_default()
    }

    #[test]
    fn test_root_layout_and_index() {
        let m = matcher(&["", "/", "/about"]);
        assert_eq!(chain(&m, "/"), vec!["", "/"]);
        assert_eq!(chain(&m, ""), vec!["", "/"]);
        assert_eq!(chain(&m, "/about"), vec!["", "/about"]);
    }

    #[test]
    fn test_root_with_only_index() {
        let m = matcher(&["/"]);
        assert_eq!(chain(&m, "/"), vec!["/"]);
        assert!(m.find_nested_matches("/about").is_none());
    }

    #[test]
    fn test_root_catch_all_alone() {
        let m = matcher(&["/*"]);
        let nested = m.find_nested_matches("/").unwrap();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested.splat_values, vec![""]);
        assert_eq!(
            m.find_best_match("/").unwrap().splat_values,
            nested.splat_values
        );

        assert!(m.find_nested_matches("").is_none());
        assert!(m.find_best_match("").is_none());

        let m = matcher(&["/", "/*"]);
        assert_eq!(chain(&m, "/"), vec!["/"]);
    }

    #[test]
    fn test_static_index_for_path_without_slash() {
        let m = matcher(&["", "/users", "/users/"]);
        assert_eq!(chain(&m, "/users"), vec!["", "/users", "/users/"]);
        assert_eq!(chain(&m, "/users/"), vec!["", "/users", "/users/"]);
    }

    #[test]
    fn test_unrelated_indexes_not_collected() {
        let m = matcher(&["", "/", "/users", "/users/", "/users/:id"]);
        assert_eq!(chain(&m, "/users/5"), vec!["", "/users", "/users/:id"]);
    }

    #[test]
    fn test_dynamic_ancestor_chain() {
        let m = matcher(&["/:org", "/:org/projects", "/:org/projects/:project"]);
        let nested = m.find_nested_matches("/acme/projects/web").unwrap();
        assert_eq!(
            nested.patterns().collect::<Vec<_>>(),
            vec!["/:org", "/:org/projects", "/:org/projects/:project"]
        );
        assert_eq!(nested.params.get("org"), Some(&"acme".to_string()));
        assert_eq!(nested.params.get("project"), Some(&"web".to_string()));

        // Ancestors only see the bindings that exist at their depth
        assert!(nested.matches[0].params.get("project").is_none());
        assert_eq!(
            nested.matches[0].params.get("org"),
            Some(&"acme".to_string())
        );
    }

    #[test]
    fn test_sibling_branches_do_not_leak_params() {
        let m = matcher(&["/:a/x", "/:b/y"]);
        let nested = m.find_nested_matches("/v/y").unwrap();
        assert_eq!(nested.len(), 1);
        assert_eq!(nested.params.get("b"), Some(&"v".to_string()));
        assert!(!nested.params.contains("a"));
    }

    #[test]
    fn test_dynamic_vs_splat_at_same_depth() {
        let m = matcher(&["/files", "/files/:id", "/files/*"]);

        let exact = m.find_nested_matches("/files/a").unwrap();
        assert_eq!(
            exact.patterns().collect::<Vec<_>>(),
            vec!["/files", "/files/:id"]
        );

        let deeper = m.find_nested_matches("/files/a/b").unwrap();
        assert_eq!(
            deeper.patterns().collect::<Vec<_>>(),
            vec!["/files", "/files/*"]
        );
        assert_eq!(deeper.splat_values, vec!["a", "b"]);
    }

    #[test]
    fn test_shallow_splat_subsumed() {
        let m = matcher(&["/docs/*", "/docs/:section/:page"]);
        let nested = m.find_nested_matches("/docs/guide/intro").unwrap();
        assert_eq!(
            nested.patterns().collect::<Vec<_>>(),
            vec!["/docs/:section/:page"]
        );
    }

    #[test]
    fn test_catch_all_demoted() {
        let m = matcher(&["/*", "/users/:id"]);
        assert_eq!(chain(&m, "/users/3"), vec!["/users/:id"]);

        let nested = m.find_nested_matches("/nothing/here").unwrap();
        assert_eq!(nested.patterns().collect::<Vec<_>>(), vec!["/*"]);
        assert_eq!(nested.splat_values, vec!["nothing", "here"]);
    }

    #[test]
    fn test_dynamic_index_sibling() {
        let mut m = Matcher::new(MatcherConfig::new().explicit_index_segment("_index")).unwrap();
        m.register_pattern("/posts/:slug");
        m.register_pattern("/posts/:slug/_index");

        let nested = m.find_nested_matches("/posts/hello").unwrap();
        assert_eq!(
            nested.patterns().collect::<Vec<_>>(),
            vec!["/posts/:slug", "/posts/:slug/"]
        );
        assert_eq!(nested.leaf().unwrap().original_pattern(), "/posts/:slug/_index");
        assert_eq!(nested.params.get("slug"), Some(&"hello".to_string()));
    }

    #[test]
    fn test_orphan_index_not_collected() {
        let m = matcher(&["", "/users/:id/"]);
        assert_eq!(chain(&m, "/users/5"), vec![""]);
        assert!(m.find_best_match("/users/5").is_none());

        let nested = m.find_nested_matches("/users/5/").unwrap();
        assert_eq!(nested.patterns().collect::<Vec<_>>(), vec!["", "/users/:id/"]);
        assert_eq!(nested.params.get("id"), Some(&"5".to_string()));
    }

    #[test]
    fn test_not_found() {
        let m = matcher(&["/users", "/users/:id"]);
        assert!(m.find_nested_matches("/posts").is_none());
        assert!(m.find_nested_matches("/").is_none());
    }
}
