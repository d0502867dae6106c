//! Stored document shape
//!
//! Every list, built-in or shared, is stored as `{ categories: [...] }`.

use serde::{Deserialize, Serialize};

use crate::domain::CategoryList;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryDocument {
    pub categories: CategoryList,
}

impl CategoryDocument {
    pub fn new(categories: CategoryList) -> Self {
        Self { categories }
    }
}

impl From<CategoryList> for CategoryDocument {
    fn from(categories: CategoryList) -> Self {
        Self { categories }
    }
}
