//! Morphological feature mapping with stable insertion order

use std::fmt;

/// Ordered `name -> value` mapping of a token's morphological features
///
/// Iteration order is insertion order. Treebanks list features in a
/// meaningful (usually alphabetical) order and the serialized feature
/// string must reproduce it, so a hash map is not an option here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Features(Vec<(String, String)>);

impl Features {
    /// Create an empty feature mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of features
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the token carries no features
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Look up a feature value by name
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Insert a feature
    ///
    /// An existing name keeps its position and has its value replaced;
    /// a new name is appended.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Copy of this mapping with one extra feature set
    ///
    /// Same placement rules as [`Features::insert`]; `self` is untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use udtriples_domain::Features;
    ///
    /// let feats: Features = [("Case", "Gen")].into_iter().collect();
    /// let extended = feats.with_appended("UPOS", "NOUN");
    ///
    /// assert_eq!(feats.len(), 1);
    /// assert_eq!(extended.to_string(), "Case=Gen;UPOS=NOUN");
    /// ```
    pub fn with_appended(&self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let mut copy = self.clone();
        copy.insert(name, value);
        copy
    }

    /// Iterate over `(name, value)` pairs in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Features
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut features = Features::new();
        for (name, value) in iter {
            features.insert(name, value);
        }
        features
    }
}

/// Renders the `key=value;key=value` form used in triples
impl fmt::Display for Features {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (name, value)) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str(";")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        Ok(())
    }
}
