//! `slotboard delete` — remove a slot record from the store.
//!
//! Only catalog slots can be addressed, so the global and priority records
//! cannot be deleted from here. The next `init` pass recreates the slot with
//! its category defaults.

use console::style;

use crate::catalog::{self, STANDARD_CATALOG};
use crate::cli::SlotTargetArgs;
use crate::error::SlotboardError;
use crate::model::slot_path;

pub async fn execute(args: &SlotTargetArgs) -> Result<(), SlotboardError> {
    let entry =
        catalog::find(STANDARD_CATALOG, &args.slot).ok_or_else(|| SlotboardError::UnknownSlot {
            id: args.slot.clone(),
        })?;

    let store = super::resolve_store(&args.store).await?;
    let path = slot_path(entry.id);

    store.delete(&path).await?;
    tracing::info!(slot = entry.id, "slot record deleted");

    println!(
        "{} deleted {path} (run 'slotboard init' to restore defaults)",
        style("\u{2713}").green()
    );
    Ok(())
}
