//! `slotboard status` — connectivity probe and record coverage report.
//!
//! Checks the store is reachable, then walks the expected paths (global,
//! priority, every catalog slot) and reports which exist. Also prints the
//! coarse structure probe verdict the way `init` would see it.

use console::style;

use crate::catalog::STANDARD_CATALOG;
use crate::cli::StatusArgs;
use crate::error::SlotboardError;
use crate::model::{slot_path, GLOBAL_PATH, PRIORITY_PATH};
use crate::reconcile::Reconciler;

pub async fn execute(args: &StatusArgs) -> Result<(), SlotboardError> {
    let store = super::resolve_store(&args.store).await?;
    let backend = store.name();
    let reconciler = Reconciler::new(store.clone(), STANDARD_CATALOG);

    reconciler.check_connection().await?;
    println!("{} store reachable ({backend})", style("\u{2713}").green());

    let initialized = reconciler.structure_exists().await;

    let expected: Vec<String> = [GLOBAL_PATH.to_string(), PRIORITY_PATH.to_string()]
        .into_iter()
        .chain(STANDARD_CATALOG.iter().map(|entry| slot_path(entry.id)))
        .collect();

    let mut missing = Vec::new();
    for path in &expected {
        if !store.exists(path).await? {
            missing.push(path.as_str());
        }
    }

    println!(
        "  initialized:  {}",
        if initialized { "yes" } else { "no" }
    );
    println!(
        "  records:      {}/{} present",
        expected.len() - missing.len(),
        expected.len()
    );
    if !missing.is_empty() {
        println!("  missing:");
        for path in &missing {
            println!("    {} {path}", style("\u{2717}").red());
        }
        println!("\n  Run 'slotboard init' to create the missing records.");
    }
    Ok(())
}
