//! Route parameter mapping
//!
//! Parameters are recovered from the path segments bound by dynamic pattern
//! segments (like `:id`).

use std::collections::HashMap;

/// Route parameters extracted from path segments
///
/// # Example
///
/// ```
/// use route_trie::Params;
///
/// // Route pattern: /users/:id
/// // Matched path: /users/123
/// let mut params = Params::new();
/// params.insert("id".to_string(), "123".to_string());
///
/// assert_eq!(params.get("id"), Some(&"123".to_string()));
/// assert_eq!(params.get_as::<i32>("id"), Some(123));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    params: HashMap<String, String>,
}

impl Params {
    /// Create new empty params
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a parameter value as a string
    pub fn get(&self, key: &str) -> Option<&String> {
        self.params.get(key)
    }

    /// Get a parameter and parse it as a specific type
    ///
    /// Returns `None` if the parameter doesn't exist or cannot be parsed.
    pub fn get_as<T>(&self, key: &str) -> Option<T>
    where
        T: std::str::FromStr,
    {
        self.params.get(key)?.parse().ok()
    }

    /// Insert a parameter, returning the value it replaced
    pub fn insert(&mut self, key: String, value: String) -> Option<String> {
        self.params.insert(key, value)
    }

    /// Remove a parameter
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.params.remove(key)
    }

    /// Check if parameter exists
    pub fn contains(&self, key: &str) -> bool {
        self.params.contains_key(key)
    }

    /// Iterate over all parameters
    pub fn iter(&self) -> impl Iterator<Item = (&String, &String)> {
        self.params.iter()
    }

    /// Check if parameters are empty
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Get number of parameters
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Consume into the underlying map
    pub fn into_inner(self) -> HashMap<String, String> {
        self.params
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
