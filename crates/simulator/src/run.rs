use std::path::Path;

use anyhow::Context;

use gilded_rose_inventory::{Inventory, Item, sample_items};

use crate::config::SimulatorConfig;

/// Parse and validate a JSON array of items.
pub fn parse_items(json: &str) -> anyhow::Result<Vec<Item>> {
    let items: Vec<Item> = serde_json::from_str(json).context("invalid inventory JSON")?;
    for (index, item) in items.iter().enumerate() {
        item.validate()
            .with_context(|| format!("invalid item at index {index}"))?;
    }
    Ok(items)
}

pub fn load_items(path: &Path) -> anyhow::Result<Vec<Item>> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read inventory {}", path.display()))?;
    parse_items(&json).with_context(|| format!("failed to load inventory {}", path.display()))
}

/// Load the configured inventory and advance it `config.days` days.
pub fn simulate(config: &SimulatorConfig) -> anyhow::Result<Inventory> {
    let items = match &config.inventory_path {
        Some(path) => load_items(path)?,
        None => sample_items(),
    };
    tracing::info!(items = items.len(), days = config.days, "starting simulation");

    let mut inventory = Inventory::new(items);
    inventory
        .advance_days(config.days)
        .with_context(|| format!("simulation stopped on day {}", inventory.day() + 1))?;
    Ok(inventory)
}

/// Render items as the JSON the simulator prints.
pub fn render_items(items: &[Item]) -> anyhow::Result<String> {
    serde_json::to_string_pretty(items).context("failed to serialize inventory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_items_reads_camel_case() {
        let items = parse_items(r#"[{"name": "Aged Brie", "sellIn": 2, "quality": 0}]"#).unwrap();
        assert_eq!(items, vec![Item::new("Aged Brie", 2, 0)]);
    }

    #[test]
    fn parse_items_rejects_invalid_items() {
        let err = parse_items(r#"[{"name": "Vest", "sellIn": 2, "quality": 60}]"#).unwrap_err();
        assert!(format!("{err:#}").contains("index 0"));
    }

    #[test]
    fn parse_items_rejects_malformed_json() {
        assert!(parse_items(r#"[{"name": "Vest"}]"#).is_err());
        assert!(parse_items("not json").is_err());
    }

    #[test]
    fn simulates_sample_inventory_by_default() {
        let config = SimulatorConfig {
            days: 15,
            inventory_path: None,
        };
        let inventory = simulate(&config).unwrap();
        assert_eq!(inventory.day(), 15);
        assert_eq!(inventory.qualities(), vec![0, 28, 0, 80, 50, 0]);
    }

    #[test]
    fn render_items_round_trips_through_parse() {
        let rendered = render_items(&sample_items()).unwrap();
        assert_eq!(parse_items(&rendered).unwrap(), sample_items());
    }
}
