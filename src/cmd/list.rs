//! `slotboard list` — show every slot's current configuration.
//!
//! Reads the global record, the priority order, and each catalog slot in
//! order. Missing records are shown as such, never auto-created — creation
//! belongs to `init` only.

use console::style;

use crate::catalog::STANDARD_CATALOG;
use crate::cli::StoreArgs;
use crate::error::SlotboardError;
use crate::model::{slot_path, GlobalConfig, PriorityConfig, SlotConfig, GLOBAL_PATH, PRIORITY_PATH};

pub async fn execute(args: &StoreArgs) -> Result<(), SlotboardError> {
    let store = super::resolve_store(args).await?;

    let global: Option<GlobalConfig> = store
        .read(GLOBAL_PATH)
        .await?
        .map(|value| super::decode(GLOBAL_PATH, value))
        .transpose()?;
    let priority: Option<PriorityConfig> = store
        .read(PRIORITY_PATH)
        .await?
        .map(|value| super::decode(PRIORITY_PATH, value))
        .transpose()?;

    match global {
        Some(config) => println!(
            "Global ads:  {}",
            if config.ads_enabled {
                style("enabled").green()
            } else {
                style("DISABLED").red().bold()
            }
        ),
        None => println!("Global ads:  {}", style("missing").yellow()),
    }
    match priority {
        Some(config) => println!("Priority:    {}", config.order.join(" > ")),
        None => println!("Priority:    {}", style("missing").yellow()),
    }
    println!();

    let header = format!(
        "{:<32} {:<13} {:<9} {}",
        "SLOT", "TYPE", "ENABLED", "ADMOB ID"
    );
    println!("{}", style(header).bold());
    for entry in STANDARD_CATALOG {
        let path = slot_path(entry.id);
        let config: Option<SlotConfig> = store
            .read(&path)
            .await?
            .map(|value| super::decode(&path, value))
            .transpose()?;

        match config {
            Some(slot) => println!(
                "{:<32} {:<13} {:<9} {}",
                entry.id,
                entry.category,
                if slot.enabled { "yes" } else { "no" },
                slot.admob_id
            ),
            None => println!(
                "{:<32} {:<13} {}",
                entry.id,
                entry.category,
                style("missing").yellow()
            ),
        }
    }
    Ok(())
}
