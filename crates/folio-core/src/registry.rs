//! Tag-to-shape resolution
//!
//! The association between an item type tag and its record shape is fixed
//! at compile time by the `ItemType` variants; the table below only gives
//! it string-keyed lookup. It is populated once behind `lazy_static`'s
//! initialization barrier and is read-only afterwards, so concurrent
//! lookups take no lock.

use std::collections::HashMap;

use lazy_static::lazy_static;

use crate::error::ItemError;
use crate::item_type::ItemType;

lazy_static! {
    static ref TAG_TABLE: HashMap<&'static str, ItemType> = {
        let mut table = HashMap::with_capacity(ItemType::ALL.len());
        for item_type in ItemType::ALL {
            if table.insert(item_type.tag(), item_type).is_some() {
                // Two shapes claiming one tag is a build defect; abort
                // startup rather than silently pick one.
                panic!("duplicate item type tag registered: '{}'", item_type.tag());
            }
        }
        table
    };
}

/// Resolve an item type tag to its shape discriminant.
pub fn resolve(tag: &str) -> Result<ItemType, ItemError> {
    TAG_TABLE
        .get(tag)
        .copied()
        .ok_or_else(|| ItemError::UnknownItemType(tag.to_string()))
}

/// The registered item type tags, in vocabulary order.
pub fn tags() -> Vec<&'static str> {
    ItemType::ALL.iter().map(|item_type| item_type.tag()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_vocabulary_tag_resolves() {
        for item_type in ItemType::ALL {
            let resolved = resolve(item_type.tag()).unwrap();
            assert_eq!(resolved, item_type);
        }
    }

    #[test]
    fn unknown_tag_is_rejected_with_the_offending_tag() {
        let err = resolve("not_a_real_type").unwrap_err();
        match err {
            ItemError::UnknownItemType(tag) => assert_eq!(tag, "not_a_real_type"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn resolution_is_case_sensitive() {
        assert!(resolve("Book").is_err());
        assert!(resolve("journalArticle").is_err());
    }

    #[test]
    fn tags_are_unique_and_complete() {
        let tags = tags();
        assert_eq!(tags.len(), ItemType::ALL.len());
        let unique: std::collections::HashSet<_> = tags.iter().collect();
        assert_eq!(unique.len(), tags.len());
    }
}
