//! ID types for items and catalog entries.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Global counter for item instance IDs.
static ITEM_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for an owned item instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(u64);

impl ItemId {
    /// Creates a new unique item ID.
    #[must_use]
    pub fn new() -> Self {
        Self(ITEM_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Creates an item ID from a raw value (for deserialization).
    #[must_use]
    pub const fn from_raw(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Null/invalid item ID.
    pub const NULL: Self = Self(0);

    /// Checks if this is a valid (non-null) item ID.
    #[must_use]
    pub const fn is_valid(self) -> bool {
        self.0 != 0
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

/// Identifier of the catalog item an instance was created from.
///
/// Catalog IDs are slugs of the display name, e.g. `"broken-dagger"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BaseItemId(String);

impl BaseItemId {
    /// Wraps an existing slug.
    #[must_use]
    pub fn new(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Derives the slug from a display name.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        let slug = name
            .split_whitespace()
            .map(str::to_lowercase)
            .collect::<Vec<_>>()
            .join("-");
        Self(slug)
    }

    /// Returns the slug.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BaseItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_item_id() {
        assert!(!ItemId::NULL.is_valid());
        assert_eq!(ItemId::from_raw(42).raw(), 42);
    }

    #[test]
    fn test_base_item_serializes_as_string() {
        let id = BaseItemId::from_name("Sharpened Knife");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"sharpened-knife\"");
    }
}
