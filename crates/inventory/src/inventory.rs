use gilded_rose_core::DomainResult;

use crate::engine::update_quality;
use crate::item::Item;

/// An owned inventory together with the number of days simulated so far.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Inventory {
    items: Vec<Item>,
    day: u32,
}

impl Inventory {
    pub fn new(items: Vec<Item>) -> Self {
        Self { items, day: 0 }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }

    /// Days fully simulated. A failed day is not counted.
    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn qualities(&self) -> Vec<i32> {
        self.items.iter().map(Item::quality).collect()
    }

    pub fn advance_day(&mut self) -> DomainResult<()> {
        update_quality(&mut self.items)?;
        self.day += 1;
        tracing::info!(day = self.day, items = self.items.len(), "day advanced");
        Ok(())
    }

    /// Advance `days` days, stopping at the first error.
    pub fn advance_days(&mut self, days: u32) -> DomainResult<()> {
        for _ in 0..days {
            self.advance_day()?;
        }
        Ok(())
    }
}

impl From<Vec<Item>> for Inventory {
    fn from(items: Vec<Item>) -> Self {
        Self::new(items)
    }
}
