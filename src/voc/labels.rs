//! Label allow-lists and label occurrence counts.

use serde::{Deserialize, Serialize};
use std::collections::btree_map::{self, BTreeMap};
use std::collections::BTreeSet;

/// Optional set of label names to keep while parsing.
///
/// An empty filter keeps every label.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelFilter {
    names: BTreeSet<String>,
}

impl LabelFilter {
    /// A filter that keeps every label.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether an object with this label should be kept.
    pub fn allows(&self, name: &str) -> bool {
        self.names.is_empty() || self.names.contains(name)
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for LabelFilter {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Number of objects seen per label.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LabelCounts {
    counts: BTreeMap<String, usize>,
}

impl LabelCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `name`, inserting it at 1 if unseen.
    pub fn increment(&mut self, name: &str) {
        self.add(name, 1);
    }

    /// Add `count` occurrences of `name`.
    pub fn add(&mut self, name: &str, count: usize) {
        match self.counts.get_mut(name) {
            Some(existing) => *existing += count,
            None => {
                self.counts.insert(name.to_string(), count);
            }
        }
    }

    /// Sum another set of counts into this one, label by label.
    pub fn merge(&mut self, other: &LabelCounts) {
        for (name, count) in &other.counts {
            self.add(name, *count);
        }
    }

    /// Count for `name`, or `None` if the label was never seen.
    pub fn get(&self, name: &str) -> Option<usize> {
        self.counts.get(name).copied()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Labels and counts in label order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, usize> {
        self.counts.iter()
    }
}

impl<'a> IntoIterator for &'a LabelCounts {
    type Item = (&'a String, &'a usize);
    type IntoIter = btree_map::Iter<'a, String, usize>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
