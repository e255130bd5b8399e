//! Route parameters.
//!
//! - [`Params`]: values extracted from a request path by dispatch
//! - [`ParamSource`]: anything `path_for` can look placeholder values up in

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap},
    fmt::Display,
    hash::{BuildHasher, Hash},
};

/// Placeholder values extracted from a matched path, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, String)>,
}

impl Params {
    /// Create an empty parameter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a parameter. A later value for the same name shadows earlier ones.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Number of extracted parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True for static matches.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in placeholder order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Params {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A source of placeholder values for reverse routing.
///
/// Implemented for the common map and pair-list shapes; values only need
/// to be [`Display`].
///
/// ```rust
/// use crossway_core::ParamSource;
///
/// assert_eq!([("id", 42)].param("id"), Some("42".to_string()));
/// assert_eq!(().param("id"), None);
/// ```
pub trait ParamSource {
    /// Returns the rendered value for `name`, if present.
    fn param(&self, name: &str) -> Option<String>;
}

impl ParamSource for () {
    fn param(&self, _name: &str) -> Option<String> {
        None
    }
}

impl ParamSource for Params {
    fn param(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_owned)
    }
}

impl<K, V, S> ParamSource for HashMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    V: Display,
    S: BuildHasher,
{
    fn param(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<K, V> ParamSource for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: Display,
{
    fn param(&self, name: &str) -> Option<String> {
        self.get(name).map(ToString::to_string)
    }
}

impl<K: AsRef<str>, V: Display> ParamSource for [(K, V)] {
    fn param(&self, name: &str) -> Option<String> {
        self.iter()
            .rev()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v.to_string())
    }
}

impl<K: AsRef<str>, V: Display, const N: usize> ParamSource for [(K, V); N] {
    fn param(&self, name: &str) -> Option<String> {
        self.as_slice().param(name)
    }
}

impl<K: AsRef<str>, V: Display> ParamSource for Vec<(K, V)> {
    fn param(&self, name: &str) -> Option<String> {
        self.as_slice().param(name)
    }
}

impl<P: ParamSource + ?Sized> ParamSource for &P {
    fn param(&self, name: &str) -> Option<String> {
        (**self).param(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_lookup() {
        let mut params = Params::new();
        params.push("id", "42");
        params.push("tab", "posts");

        assert_eq!(params.get("id"), Some("42"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
        assert_eq!(
            params.iter().collect::<Vec<_>>(),
            vec![("id", "42"), ("tab", "posts")]
        );
    }

    #[test]
    fn test_sources() {
        let map: HashMap<String, u32> = HashMap::from([("id".to_string(), 7)]);
        let tree = BTreeMap::from([("slug", "intro")]);
        let pairs = vec![("a", 1), ("a", 2)];

        assert_eq!(map.param("id"), Some("7".to_string()));
        assert_eq!(tree.param("slug"), Some("intro".to_string()));
        assert_eq!(pairs.param("a"), Some("2".to_string()));
        assert_eq!(pairs.param("b"), None);
    }
}
