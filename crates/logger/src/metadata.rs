//! Structured metadata attached to log calls

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Mapping from key to arbitrary JSON value.
///
/// Merging follows the "defaults" rule: a key is only ever filled in when it
/// is absent, so the first assignment of a key wins.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Metadata(Map<String, Value>);

impl Metadata {
    /// Create empty metadata
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Build metadata from any JSON value.
    ///
    /// Objects keep their keys and arrays are keyed by index (`"0"`, `"1"`, ...).
    /// Scalars and `null` yield empty metadata.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self(map),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| (index.to_string(), item))
                .collect(),
            _ => Self::new(),
        }
    }

    /// Whether a JSON value carries keys that [`from_value`](Self::from_value) keeps
    pub const fn is_keyed(value: &Value) -> bool {
        matches!(value, Value::Object(_) | Value::Array(_))
    }

    /// Builder-style insert, overwriting any existing value
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a value, overwriting any existing one
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the key is present (a `null` value counts as present)
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Iterate over entries
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether there are no keys
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fill in every key of `source` that is absent here.
    pub fn merge(&mut self, source: &Self) -> &mut Self {
        for (key, value) in &source.0 {
            if !self.0.contains_key(key) {
                self.0.insert(key.clone(), value.clone());
            }
        }
        self
    }

    /// Consume `self`, filling gaps from each source in order.
    #[must_use]
    pub fn merged<'a>(mut self, sources: impl IntoIterator<Item = &'a Self>) -> Self {
        for source in sources {
            self.merge(source);
        }
        self
    }

    /// Convert into a JSON object value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Object(self.0)
    }
}

impl From<Map<String, Value>> for Metadata {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> From<[(K, V); N]> for Metadata {
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Metadata {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }
}

impl<'a> IntoIterator for &'a Metadata {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
