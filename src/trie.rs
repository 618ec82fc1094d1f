//! Segment trie holding every non-static pattern
//!
//! Static children are keyed by their literal text (the index segment is the
//! static child keyed by `""`). Parameter children live in a short list, one
//! per distinct parameter name, and a node has at most one splat child.
//! Terminal nodes carry the owning pattern and its precomputed score.

use crate::pattern::RegisteredPattern;
use crate::segment::Segment;
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    pattern: Option<Arc<RegisteredPattern>>,
    score: u32,
    static_children: HashMap<String, TrieNode>,
    param_children: Vec<(String, TrieNode)>,
    splat_child: Option<Box<TrieNode>>,
}

impl TrieNode {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Insert `pattern`, returning the previous owner of its terminal node.
    pub(crate) fn insert(
        &mut self,
        pattern: Arc<RegisteredPattern>,
    ) -> Option<Arc<RegisteredPattern>> {
        let mut node = self;
        let mut score = 0;

        for segment in pattern.segments() {
            score += segment.weight();
            node = node.child_or_insert(segment);
        }

        node.score = score;
        node.pattern.replace(pattern)
    }

    /// Detach `pattern` from its terminal node, returning it if it was the owner.
    pub(crate) fn remove(
        &mut self,
        pattern: &RegisteredPattern,
    ) -> Option<Arc<RegisteredPattern>> {
        let mut node = self;
        for segment in pattern.segments() {
            node = node.child_mut(segment)?;
        }

        let owned = node
            .pattern
            .as_ref()
            .is_some_and(|owner| owner.normalized_pattern() == pattern.normalized_pattern());
        if !owned {
            return None;
        }
        node.score = 0;
        node.pattern.take()
    }

    fn child_mut(&mut self, segment: &Segment) -> Option<&mut TrieNode> {
        match segment {
            Segment::Static(text) => self.static_children.get_mut(text.as_str()),
            Segment::Index => self.static_children.get_mut(""),
            Segment::Dynamic(name) => self
                .param_children
                .iter_mut()
                .find(|(n, _)| n == name)
                .map(|(_, child)| child),
            Segment::Splat => self.splat_child.as_deref_mut(),
        }
    }

    fn child_or_insert(&mut self, segment: &Segment) -> &mut TrieNode {
        match segment {
            Segment::Static(text) => self.static_children.entry(text.clone()).or_default(),
            Segment::Index => self.static_children.entry(String::new()).or_default(),
            Segment::Dynamic(name) => {
                let position = self.param_children.iter().position(|(n, _)| n == name);
                let index = match position {
                    Some(index) => index,
                    None => {
                        self.param_children.push((name.clone(), TrieNode::new()));
                        self.param_children.len() - 1
                    }
                };
                &mut self.param_children[index].1
            }
            Segment::Splat => &mut **self.splat_child.get_or_insert_with(Box::default),
        }
    }

    pub(crate) fn pattern(&self) -> Option<&Arc<RegisteredPattern>> {
        self.pattern.as_ref()
    }

    pub(crate) fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn static_child(&self, text: &str) -> Option<&TrieNode> {
        self.static_children.get(text)
    }

    /// Index child, only when it terminates a pattern
    pub(crate) fn index_child(&self) -> Option<&TrieNode> {
        self.static_child("").filter(|child| child.pattern.is_some())
    }

    pub(crate) fn param_children(&self) -> impl Iterator<Item = (&str, &TrieNode)> {
        self.param_children
            .iter()
            .map(|(name, child)| (name.as_str(), child))
    }

    pub(crate) fn splat_child(&self) -> Option<&TrieNode> {
        self.splat_child.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MatcherConfig;
    use crate::pattern::normalize;

    fn pattern(raw: &str) -> Arc<RegisteredPattern> {
        Arc::new(normalize(raw, &MatcherConfig::default()))
    }

    #[test]
    fn test_insert_builds_path() {
        let mut root = TrieNode::new();
        assert!(root.insert(pattern("/users/:id")).is_none());

        let users = root.static_child("users").unwrap();
        assert!(users.pattern().is_none());

        let (name, id) = users.param_children().next().unwrap();
        assert_eq!(name, "id");
        assert_eq!(id.pattern().unwrap().normalized_pattern(), "/users/:id");
        assert_eq!(id.score(), 3);
    }

    #[test]
    fn test_shared_prefixes_share_nodes() {
        let mut root = TrieNode::new();
        root.insert(pattern("/users/:id"));
        root.insert(pattern("/users/:id/posts/:post"));
        root.insert(pattern("/users/:slug"));

        let users = root.static_child("users").unwrap();
        assert_eq!(users.param_children().count(), 2);
    }

    #[test]
    fn test_reinsert_returns_previous_owner() {
        let mut root = TrieNode::new();
        root.insert(pattern("/files/*"));
        let previous = root.insert(pattern("/files/*"));
        assert_eq!(previous.unwrap().normalized_pattern(), "/files/*");

        let files = root.static_child("files").unwrap();
        let splat = files.splat_child().unwrap();
        assert_eq!(splat.score(), 2);
    }

    #[test]
    fn test_remove_clears_terminal() {
        let mut root = TrieNode::new();
        root.insert(pattern("/users/:id"));
        root.insert(pattern("/users/:id/posts"));

        let removed = root.remove(&pattern("/users/:id")).unwrap();
        assert_eq!(removed.normalized_pattern(), "/users/:id");
        assert!(root.remove(&pattern("/users/:id")).is_none());
        assert!(root.remove(&pattern("/users/:slug")).is_none());

        let users = root.static_child("users").unwrap();
        let (_, id) = users.param_children().next().unwrap();
        assert!(id.pattern().is_none());
        assert!(id.static_child("posts").unwrap().pattern().is_some());
    }

    #[test]
    fn test_index_child() {
        let mut root = TrieNode::new();
        root.insert(pattern("/users/:id/"));

        let users = root.static_child("users").unwrap();
        let (_, id) = users.param_children().next().unwrap();
        assert!(id.pattern().is_none());

        let index = id.index_child().unwrap();
        assert_eq!(index.pattern().unwrap().normalized_pattern(), "/users/:id/");
        assert_eq!(index.score(), 5);
    }
}
