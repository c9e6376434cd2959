use crate::geometry::FULL_TURN;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemTitle(String);

crate::impl_string_newtype!(ItemTitle);

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct ItemDetail(String);

crate::impl_string_newtype!(ItemDetail);

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub title: ItemTitle,
    pub detail: ItemDetail,
    pub icon: Option<PathBuf>,
}

impl Item {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: ItemTitle::new(title),
            detail: ItemDetail::new(detail),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<PathBuf>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

/// The items travelling around the circle, in orbit order.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemSet {
    items: Vec<Item>,
}

impl ItemSet {
    /// Returns `None` for an empty list, which has no meaningful spacing.
    pub fn new(items: Vec<Item>) -> Option<Self> {
        (!items.is_empty()).then_some(Self { items })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Angle the load-in has to reach before item `index` starts moving.
    pub fn stagger_offset(&self, index: usize) -> f64 {
        index as f64 * (FULL_TURN / self.items.len() as f64)
    }

    pub fn stagger_offsets(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        (0..self.items.len()).map(|i| (i, self.stagger_offset(i)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> ItemSet {
        ItemSet::new(
            (0..n)
                .map(|i| Item::new(format!("Item {i}"), "detail"))
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(ItemSet::new(Vec::new()).is_none());
    }

    #[test]
    fn test_four_items_quarter_the_circle() {
        let offsets: Vec<f64> = items(4).stagger_offsets().map(|(_, o)| o).collect();
        assert_eq!(offsets, vec![0.0, 90.0, 180.0, 270.0]);
    }

    #[test]
    fn test_offsets_are_distinct_and_within_a_turn() {
        for n in 1..=13 {
            let set = items(n);
            let offsets: Vec<f64> = set.stagger_offsets().map(|(_, o)| o).collect();
            assert_eq!(offsets.len(), n);
            assert_eq!(offsets[0], 0.0);
            assert!(offsets.iter().all(|o| (0.0..FULL_TURN).contains(o)));
            assert!(offsets.windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_item_text_newtypes() {
        let item = Item::new("Design", "We draw things").with_icon("/tmp/design.png");
        assert_eq!(item.title.as_str(), "Design");
        assert_eq!(item.detail.to_string(), "We draw things");
        assert_eq!(item.icon, Some(PathBuf::from("/tmp/design.png")));
    }
}
