//! The standard six-item sample inventory.

use crate::category::{AGED_BRIE, BACKSTAGE_PASSES, SULFURAS};
use crate::item::Item;

/// A fresh copy of the sample inventory, one item per category plus a
/// second normal item.
pub fn sample_items() -> Vec<Item> {
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, 80),
        Item::new(BACKSTAGE_PASSES, 15, 20),
        Item::new("Conjured Mana Cake", 3, 6),
    ]
}
