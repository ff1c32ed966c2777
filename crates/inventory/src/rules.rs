//! Daily aging rules.
//!
//! Each rule is gated on a single category and is a no-op for every other
//! item. The rules run in the fixed order of [`QUALITY_RULES`], followed by
//! [`advance_sell_in`].

use crate::category::Category;
use crate::item::{Item, MAX_QUALITY, MIN_QUALITY};

/// Items are past their sell-by date once `sell_in` reaches this value.
pub const EXPIRY_BORDER: i32 = 0;
/// Backstage passes gain an extra point inside this many days.
pub const PASS_BONUS_WINDOW: i32 = 10;
/// Backstage passes gain two extra points inside this many days.
pub const PASS_DOUBLE_BONUS_WINDOW: i32 = 5;

/// A category-gated quality rule.
pub type QualityRule = fn(Category, &mut Item);

/// Quality rules in evaluation order. A later rule sees the result of an
/// earlier one for the same item.
pub const QUALITY_RULES: [(&str, QualityRule); 4] = [
    ("aged_brie", age_brie),
    ("backstage_pass", age_backstage_pass),
    ("normal", degrade_normal),
    ("conjured", degrade_conjured),
];

/// `amount`, doubled once `sell_in` is at or below `border`.
fn rate(item: &Item, amount: i32, border: i32) -> i32 {
    if item.sell_in() <= border {
        2 * amount
    } else {
        amount
    }
}

/// Aged Brie improves by 1 a day, 2 once expired, and stops at 50.
pub fn age_brie(category: Category, item: &mut Item) {
    if category != Category::AgedBrie {
        return;
    }
    let quality = item.quality();
    if quality >= MAX_QUALITY {
        return;
    }
    let next = (quality + rate(item, 1, EXPIRY_BORDER)).min(MAX_QUALITY);
    item.set_quality(next);
}

/// Backstage passes improve faster as the concert nears and drop to 0 after it.
pub fn age_backstage_pass(category: Category, item: &mut Item) {
    if category != Category::BackstagePass {
        return;
    }
    let mut quality = item.quality() + 1;
    if item.sell_in() <= PASS_BONUS_WINDOW && quality < MAX_QUALITY - 1 {
        quality += rate(item, 1, PASS_DOUBLE_BONUS_WINDOW);
    }
    quality = quality.min(MAX_QUALITY);
    if item.is_expired() {
        quality = MIN_QUALITY;
    }
    item.set_quality(quality);
}

/// Normal items lose 1 a day, 2 once expired, never below 0.
pub fn degrade_normal(category: Category, item: &mut Item) {
    if category != Category::Normal {
        return;
    }
    degrade(item, 1);
}

/// Conjured items degrade twice as fast as normal items.
pub fn degrade_conjured(category: Category, item: &mut Item) {
    if category != Category::Conjured {
        return;
    }
    degrade(item, 2);
}

fn degrade(item: &mut Item, amount: i32) {
    let quality = item.quality();
    if quality <= MIN_QUALITY {
        return;
    }
    let next = (quality - rate(item, amount, EXPIRY_BORDER)).max(MIN_QUALITY);
    item.set_quality(next);
}

/// Every item but a legendary one gets one day closer to (or further past) expiry.
pub fn advance_sell_in(category: Category, item: &mut Item) {
    if category.ages() {
        item.decrement_sell_in();
    }
}
