//! Simulator configuration, read from the environment.

use std::path::PathBuf;

use anyhow::Context;

pub const DAYS_VAR: &str = "GILDED_ROSE_DAYS";
pub const INVENTORY_VAR: &str = "GILDED_ROSE_INVENTORY";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulatorConfig {
    /// Days to simulate.
    pub days: u32,
    /// JSON inventory to load; the sample inventory when `None`.
    pub inventory_path: Option<PathBuf>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            days: 1,
            inventory_path: None,
        }
    }
}

impl SimulatorConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (used by tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let mut config = Self::default();

        if let Some(raw) = lookup(DAYS_VAR) {
            config.days = raw
                .trim()
                .parse()
                .with_context(|| format!("{DAYS_VAR} must be a non-negative integer, got {raw:?}"))?;
        }

        config.inventory_path = lookup(INVENTORY_VAR)
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(config)
    }
}
