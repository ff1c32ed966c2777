//! Item categories, derived from item names.

use gilded_rose_core::ValueObject;

pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
pub const AGED_BRIE: &str = "Aged Brie";
pub const BACKSTAGE_PASSES: &str = "Backstage passes to a TAFKAL80ETC concert";
/// Substring marking a conjured item.
pub const CONJURED_MARKER: &str = "Conjured";

/// Aging category of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Never ages, quality pinned at 80.
    Legendary,
    /// Improves with age.
    AgedBrie,
    /// Improves up to the concert, worthless after it.
    BackstagePass,
    /// Degrades twice as fast as a normal item.
    Conjured,
    Normal,
}

impl Category {
    /// Classify an item name.
    ///
    /// The three special names match exactly; "Conjured" matches anywhere in
    /// the name. None of the exact names contain the marker, so the order of
    /// the checks below never changes the outcome.
    pub fn classify(name: &str) -> Self {
        match name {
            SULFURAS => Category::Legendary,
            AGED_BRIE => Category::AgedBrie,
            BACKSTAGE_PASSES => Category::BackstagePass,
            _ if name.contains(CONJURED_MARKER) => Category::Conjured,
            _ => Category::Normal,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Legendary => "legendary",
            Category::AgedBrie => "aged_brie",
            Category::BackstagePass => "backstage_pass",
            Category::Conjured => "conjured",
            Category::Normal => "normal",
        }
    }

    /// Whether items of this category ever change.
    pub fn ages(self) -> bool {
        self != Category::Legendary
    }
}

impl ValueObject for Category {}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn special_names_match_exactly() {
        assert_eq!(Category::classify(SULFURAS), Category::Legendary);
        assert_eq!(Category::classify(AGED_BRIE), Category::AgedBrie);
        assert_eq!(Category::classify(BACKSTAGE_PASSES), Category::BackstagePass);

        assert_eq!(Category::classify("aged brie"), Category::Normal);
        assert_eq!(Category::classify("Aged Brie "), Category::Normal);
        assert_eq!(
            Category::classify("Backstage passes to a Metallica concert"),
            Category::Normal
        );
    }

    #[test]
    fn conjured_matches_as_substring() {
        assert_eq!(Category::classify("Conjured Mana Cake"), Category::Conjured);
        assert_eq!(Category::classify("Freshly Conjured"), Category::Conjured);
        assert_eq!(Category::classify("conjured mana cake"), Category::Normal);
    }

    #[test]
    fn conjured_variant_of_special_name_is_conjured() {
        assert_eq!(Category::classify("Conjured Aged Brie"), Category::Conjured);
        assert_eq!(
            Category::classify("Conjured Sulfuras, Hand of Ragnaros"),
            Category::Conjured
        );
    }

    #[test]
    fn anything_else_is_normal() {
        assert_eq!(Category::classify("+5 Dexterity Vest"), Category::Normal);
        assert_eq!(Category::classify(""), Category::Normal);
    }

    #[test]
    fn only_legendary_items_stand_still() {
        assert!(!Category::Legendary.ages());
        assert!(Category::Normal.ages());
        assert!(Category::BackstagePass.ages());
    }
}
