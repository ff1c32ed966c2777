//! Inventory domain module: the daily quality engine.
//!
//! This crate contains business rules for item aging, implemented purely as
//! deterministic domain logic (no IO, no storage).

pub mod category;
pub mod engine;
pub mod inventory;
pub mod item;
pub mod rules;
pub mod sample;

pub use category::Category;
pub use engine::{update_item, update_quality};
pub use inventory::Inventory;
pub use item::{Item, LEGENDARY_QUALITY, MAX_QUALITY, MIN_QUALITY};
pub use sample::sample_items;
