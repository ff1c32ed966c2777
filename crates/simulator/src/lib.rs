//! `gilded-rose-simulator` — drives the quality engine over a configured inventory.

pub mod config;
pub mod run;

pub use config::SimulatorConfig;
pub use run::{load_items, parse_items, render_items, simulate};
