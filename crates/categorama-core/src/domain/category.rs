//! Category Entity
//!
//! A category is one prompt in the round ("Things in a kitchen", ...).
//! Lists are ordered; the front of the list is what gets played.

use std::collections::HashSet;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{DomainError, DomainResult};
use super::random::random_category_id;

/// A single labeled entry in the prompt list
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    /// Stored documents call this field `Category`
    #[serde(rename = "Category", alias = "label")]
    pub label: String,
}

impl Category {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Ordered, mutable list of categories
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryList(Vec<Category>);

impl CategoryList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Category> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Category] {
        &self.0
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.0.iter().any(|c| c.id == id)
    }

    /// The first `count` categories, i.e. the ones played this round
    pub fn visible(&self, count: usize) -> &[Category] {
        &self.0[..count.min(self.0.len())]
    }

    /// Insert a new category at the front.
    ///
    /// The label is trimmed and must not be empty. The generated id is
    /// redrawn until it differs from every id already in the list.
    pub fn prepend<R: Rng + ?Sized>(&mut self, label: &str, rng: &mut R) -> DomainResult<&Category> {
        let label = label.trim();
        if label.is_empty() {
            return Err(DomainError::InvalidInput("category label is empty".to_string()));
        }

        let mut id = random_category_id(rng);
        while self.contains_id(&id) {
            id = random_category_id(rng);
        }

        self.0.insert(0, Category::new(id, label));
        Ok(&self.0[0])
    }

    /// Remove every entry with this id. Returns whether anything was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c.id != id);
        self.0.len() != before
    }

    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }

    /// Equal as sets of `{id, label}` pairs, ignoring order
    pub fn same_entries(&self, other: &CategoryList) -> bool {
        let a: HashSet<&Category> = self.0.iter().collect();
        let b: HashSet<&Category> = other.0.iter().collect();
        a == b
    }
}

impl From<Vec<Category>> for CategoryList {
    fn from(categories: Vec<Category>) -> Self {
        Self(categories)
    }
}

impl FromIterator<Category> for CategoryList {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a CategoryList {
    type Item = &'a Category;
    type IntoIter = std::slice::Iter<'a, Category>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
