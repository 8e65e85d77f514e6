//! Resolved axis value list.

use std::collections::HashSet;

use serde::{Deserialize, Deserializer, Serialize};

/// The ordered value list of one axis for one build-configuration cycle.
///
/// Invariants: every value is non-empty, values are unique, and order
/// matches first occurrence in the raw value string. Produced fresh on
/// every resolution call; never shared across builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ResolvedValues(Vec<String>);

// Deserialization routes through `from_tokens` so the uniqueness and
// non-emptiness invariants hold for lists read back from the host.
impl<'de> Deserialize<'de> for ResolvedValues {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let tokens = Vec::<String>::deserialize(deserializer)?;
        Ok(Self::from_tokens(tokens))
    }
}

impl ResolvedValues {
    /// Collects tokens preserving first-occurrence order.
    ///
    /// Exact duplicates are dropped on second and later occurrence; empty
    /// tokens are dropped. The `HashSet` guards membership only; order
    /// comes from the output vector, never from hash iteration.
    pub fn from_tokens<I>(tokens: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut seen = HashSet::new();
        let mut values = Vec::new();

        for token in tokens {
            if token.is_empty() {
                continue;
            }
            if seen.insert(token.clone()) {
                values.push(token);
            }
        }

        Self(values)
    }

    /// Number of values, which for a single-axis matrix is the run count.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl IntoIterator for ResolvedValues {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResolvedValues {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
