//! Quality engine: advances items by one simulated day.

use gilded_rose_core::{DomainError, DomainResult};

use crate::item::{Item, MIN_QUALITY};
use crate::rules::{QUALITY_RULES, advance_sell_in};

/// Advance a single item by one day.
///
/// Fails without touching the item if its quality is already negative.
pub fn update_item(item: &mut Item) -> DomainResult<()> {
    if item.quality() < MIN_QUALITY {
        tracing::warn!(item = item.name(), quality = item.quality(), "quality out of range");
        return Err(DomainError::invariant(format!(
            "{}: quality {} is below {MIN_QUALITY}",
            item.name(),
            item.quality()
        )));
    }

    let category = item.category();
    let before = (item.sell_in(), item.quality());

    for (rule, apply) in QUALITY_RULES {
        let quality = item.quality();
        apply(category, item);
        if item.quality() != quality {
            tracing::trace!(rule, from = quality, to = item.quality(), "quality rule applied");
        }
    }
    advance_sell_in(category, item);

    tracing::debug!(
        item = item.name(),
        %category,
        sell_in.before = before.0,
        sell_in.after = item.sell_in(),
        quality.before = before.1,
        quality.after = item.quality(),
        "item aged"
    );
    Ok(())
}

/// Advance every item by one day, in order.
///
/// Fail-fast, not transactional: on error, items before the offending one
/// have already been updated and items after it are untouched.
pub fn update_quality(items: &mut [Item]) -> DomainResult<()> {
    items.iter_mut().try_for_each(update_item)
}
