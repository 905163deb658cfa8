/*
[INPUT]:  Wire names and already-formatted string values
[OUTPUT]: Sorted, de-duplicated parameter set
[POS]:    Params layer - the shape every request is built from
[UPDATE]: When callers need new ways to inspect or combine parameter sets
*/

use std::collections::BTreeMap;
use std::collections::btree_map;

use super::value::WireValue;

/// Marshalled request parameters, keyed by wire name.
///
/// Iteration is always in ascending lexicographic key order, which is the
/// order the signature is computed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParamSet {
    entries: BTreeMap<String, String>,
}

impl ParamSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a raw key/value pair, replacing any previous value for `key`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Insert a typed field, skipping it when it holds its zero value.
    pub fn push_field<V>(&mut self, wire_name: &str, value: &V)
    where
        V: WireValue + ?Sized,
    {
        if value.is_unset() {
            return;
        }
        self.entries.insert(wire_name.to_string(), value.to_wire());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.entries.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate pairs in sorted key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.entries
    }
}

impl From<BTreeMap<String, String>> for ParamSet {
    fn from(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }
}

impl<K, V> FromIterator<(K, V)> for ParamSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let entries = iter
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self { entries }
    }
}

impl<K, V> Extend<(K, V)> for ParamSet
where
    K: Into<String>,
    V: Into<String>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.entries.insert(key.into(), value.into());
        }
    }
}

impl IntoIterator for ParamSet {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
