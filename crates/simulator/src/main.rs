use gilded_rose_simulator::{SimulatorConfig, render_items, simulate};

fn main() -> anyhow::Result<()> {
    gilded_rose_observability::init();

    let config = SimulatorConfig::from_env()?;
    let inventory = simulate(&config)?;

    tracing::info!(day = inventory.day(), "simulation finished");
    println!("{}", render_items(inventory.items())?);
    Ok(())
}
