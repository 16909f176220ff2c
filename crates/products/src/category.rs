//! Product categories.
//!
//! A category is a value object identified by its normalized name: surrounding
//! whitespace trimmed, first character upper-cased, the rest lower-cased
//! (`"  fOOD "` becomes `"Food"`). `CategoryCache` hands out one shared instance per
//! normalized name.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use warehouse_core::{DomainError, DomainResult, ValueObject};

/// Case-normalized category label.
///
/// Equality, hashing, ordering and `Display` all use the normalized name, so a
/// category obtained from a [`CategoryCache`] and one built with
/// [`Category::parse`] are interchangeable.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Category(Arc<str>);

impl Category {
    /// Build a category without going through a cache.
    pub fn parse(name: &str) -> DomainResult<Self> {
        let normalized = normalize(name)?;
        Ok(Self(Arc::from(normalized)))
    }

    /// The normalized name (e.g. `"Food"`).
    pub fn name(&self) -> &str {
        &self.0
    }

    /// True if both handles point at the same cached instance.
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Category {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Category> for String {
    fn from(value: Category) -> Self {
        value.0.to_string()
    }
}

fn normalize(name: &str) -> DomainResult<String> {
    let trimmed = name.trim();
    let mut chars = trimmed.chars();
    let Some(first) = chars.next() else {
        return Err(DomainError::invalid_argument("Category name can't be blank"));
    };

    let mut normalized: String = first.to_uppercase().collect();
    normalized.push_str(&chars.as_str().to_lowercase());
    Ok(normalized)
}

/// Flyweight cache of categories keyed by normalized name.
///
/// Owned by whoever needs deduplication (usually the catalog context); there is no
/// process-global instance. Entries live as long as the cache.
#[derive(Debug, Default)]
pub struct CategoryCache {
    entries: HashMap<String, Category>,
}

impl CategoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the canonical category for `name`, creating it on first use.
    pub fn of(&mut self, name: &str) -> DomainResult<Category> {
        let normalized = normalize(name)?;
        let category = self
            .entries
            .entry(normalized)
            .or_insert_with_key(|key| {
                tracing::debug!(category = %key, "category cached");
                Category(Arc::from(key.as_str()))
            })
            .clone();
        Ok(category)
    }

    /// True if a category with the same normalized name has been handed out.
    pub fn contains(&self, name: &str) -> bool {
        normalize(name)
            .map(|normalized| self.entries.contains_key(&normalized))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
