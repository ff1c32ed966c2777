use serde::{Deserialize, Serialize};

use gilded_rose_core::{DomainError, DomainResult};

use crate::category::Category;
use crate::rules::EXPIRY_BORDER;

/// Lowest quality any item may have.
pub const MIN_QUALITY: i32 = 0;
/// Highest quality a non-legendary item may reach.
pub const MAX_QUALITY: i32 = 50;
/// Fixed quality of legendary items.
pub const LEGENDARY_QUALITY: i32 = 80;

/// A stock item: a name, days left to sell it, and its current quality.
///
/// `sell_in` goes negative once the item has expired and keeps counting down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    name: String,
    sell_in: i32,
    quality: i32,
}

impl Item {
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sell_in(&self) -> i32 {
        self.sell_in
    }

    pub fn quality(&self) -> i32 {
        self.quality
    }

    /// Category derived from the name. Not stored.
    pub fn category(&self) -> Category {
        Category::classify(&self.name)
    }

    pub fn is_expired(&self) -> bool {
        self.sell_in <= EXPIRY_BORDER
    }

    /// Check an item coming from outside the engine (file, fixture, ...).
    ///
    /// Stricter than the engine's own precondition, which only rejects
    /// negative quality.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        if self.quality < MIN_QUALITY {
            return Err(DomainError::validation(format!(
                "{}: quality {} is negative",
                self.name, self.quality
            )));
        }
        match self.category() {
            Category::Legendary if self.quality != LEGENDARY_QUALITY => {
                Err(DomainError::validation(format!(
                    "{}: legendary quality must be {LEGENDARY_QUALITY}, got {}",
                    self.name, self.quality
                )))
            }
            Category::Legendary => Ok(()),
            _ if self.quality > MAX_QUALITY => Err(DomainError::validation(format!(
                "{}: quality {} exceeds {MAX_QUALITY}",
                self.name, self.quality
            ))),
            _ => Ok(()),
        }
    }

    pub(crate) fn set_quality(&mut self, quality: i32) {
        self.quality = quality;
    }

    /// Wraps at `i32::MIN` instead of panicking.
    pub(crate) fn decrement_sell_in(&mut self) {
        self.sell_in = self.sell_in.wrapping_sub(1);
    }
}

impl core::fmt::Display for Item {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::{AGED_BRIE, SULFURAS};

    #[test]
    fn serializes_with_camel_case_keys() {
        let item = Item::new("Aged Brie", 2, 0);
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Aged Brie", "sellIn": 2, "quality": 0 })
        );

        let back: Item = serde_json::from_value(json).unwrap();
        assert_eq!(back, item);
    }

    #[test]
    fn display_matches_inventory_listing_format() {
        let item = Item::new("Elixir of the Mongoose", 5, 7);
        assert_eq!(item.to_string(), "Elixir of the Mongoose, 5, 7");
    }

    #[test]
    fn expiry_starts_at_zero_days() {
        assert!(!Item::new("x", 1, 10).is_expired());
        assert!(Item::new("x", 0, 10).is_expired());
        assert!(Item::new("x", -3, 10).is_expired());
    }

    #[test]
    fn sell_in_wraps_instead_of_overflowing() {
        let mut item = Item::new("Vest", i32::MIN, 10);
        item.decrement_sell_in();
        assert_eq!(item.sell_in(), i32::MAX);
    }

    #[test]
    fn validate_accepts_sample_shapes() {
        assert!(Item::new("+5 Dexterity Vest", 10, 20).validate().is_ok());
        assert!(Item::new(SULFURAS, 0, 80).validate().is_ok());
        assert!(Item::new(AGED_BRIE, -4, 50).validate().is_ok());
    }

    #[test]
    fn validate_rejects_empty_name() {
        let err = Item::new("   ", 1, 1).validate().unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn validate_rejects_out_of_range_quality() {
        assert!(Item::new("Vest", 1, -1).validate().is_err());
        assert!(Item::new("Vest", 1, 51).validate().is_err());
        assert!(Item::new(SULFURAS, 0, 50).validate().is_err());
    }
}
