//! `slotboard set` — replace a slot's configuration.
//!
//! Always writes the full four-field record. Omitted flags fall back to the
//! current stored value, or to the category default when the record does not
//! exist yet. Identifier strings are whitespace-trimmed; no further
//! validation is applied.

use console::style;

use crate::catalog::{self, STANDARD_CATALOG};
use crate::cli::SetArgs;
use crate::error::SlotboardError;
use crate::model::{slot_path, SlotConfig};

pub async fn execute(args: &SetArgs) -> Result<(), SlotboardError> {
    let entry =
        catalog::find(STANDARD_CATALOG, &args.slot).ok_or_else(|| SlotboardError::UnknownSlot {
            id: args.slot.clone(),
        })?;

    let store = super::resolve_store(&args.store).await?;
    let path = slot_path(entry.id);

    let current: SlotConfig = match store.read(&path).await? {
        Some(value) => super::decode(&path, value)?,
        None => SlotConfig::defaults_for(entry.category),
    };

    let config = SlotConfig {
        enabled: args.enabled.unwrap_or(current.enabled),
        admob_id: field(args.admob_id.as_deref(), current.admob_id),
        adx_id: field(args.adx_id.as_deref(), current.adx_id),
        facebook_id: field(args.facebook_id.as_deref(), current.facebook_id),
    };

    store.write(&path, &super::encode(&path, &config)?).await?;
    tracing::info!(slot = entry.id, enabled = config.enabled, "slot config replaced");

    println!(
        "{} {} updated ({}, admob {})",
        style("\u{2713}").green(),
        entry.id,
        if config.enabled { "enabled" } else { "disabled" },
        config.admob_id
    );
    Ok(())
}

fn field(override_value: Option<&str>, current: String) -> String {
    match override_value {
        Some(value) => value.trim().to_string(),
        None => current,
    }
}
