//! Grouping of emoji records by category.

use crate::models::category::{Category, CATEGORIES};
use crate::models::{Codepoint, Emoji, GenderMarker};
use std::collections::HashSet;

/// Emoji records bucketed by category, in tab order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiGroups {
    groups: Vec<Vec<Emoji>>,
    dropped: usize,
}

impl EmojiGroups {
    /// Groups records in a single pass, preserving insertion order per category.
    ///
    /// Records naming a category outside [`CATEGORIES`] are dropped.
    pub fn group(emojis: impl IntoIterator<Item = Emoji>) -> Self {
        let mut groups = vec![Vec::new(); CATEGORIES.len()];
        let mut dropped = 0;

        for emoji in emojis {
            match Category::index_of(&emoji.category) {
                Some(index) => groups[index].push(emoji),
                None => {
                    tracing::debug!(
                        "Dropping emoji {} with unknown category '{}'",
                        emoji.id,
                        emoji.category
                    );
                    dropped += 1;
                }
            }
        }

        Self { groups, dropped }
    }

    /// Records of one category, in source order. Empty for unknown ids.
    pub fn get(&self, category_id: &str) -> &[Emoji] {
        Category::index_of(category_id).map_or(&[], |index| &self.groups[index])
    }

    /// Categories paired with their records, in tab order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static Category, &[Emoji])> {
        CATEGORIES
            .iter()
            .zip(self.groups.iter().map(Vec::as_slice))
    }

    /// All grouped records: category order first, then source order.
    pub fn emojis(&self) -> impl Iterator<Item = &Emoji> {
        self.groups.iter().flatten()
    }

    /// Number of grouped records.
    pub fn len(&self) -> usize {
        self.groups.iter().map(Vec::len).sum()
    }

    /// Returns true if no record was grouped.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of records dropped for naming an unknown category.
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Base identities of all explicitly gendered records.
    pub fn gendered_bases(&self) -> HashSet<Codepoint> {
        self.emojis()
            .filter(|emoji| matches!(emoji.gender, GenderMarker::Gendered(_)))
            .map(Emoji::base_identity)
            .collect()
    }
}
