//! `slotboard show` — print one slot record as JSON.

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

    match store.read(&path).await? {
        Some(value) => {
            let pretty =
                serde_json::to_string_pretty(&value).map_err(|e| SlotboardError::Decode {
                    path: path.clone(),
                    source: Box::new(e),
                })?;
            println!("{pretty}");
        }
        None => {
            println!(
                "Slot '{}' has no record at {path}. Run 'slotboard init' to create it.",
                entry.id
            );
        }
    }
    Ok(())
}
