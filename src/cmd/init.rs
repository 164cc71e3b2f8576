//! `slotboard init` — create missing config records, or reset all of them.
//!
//! Runs one reconciliation pass. The coarse structure probe only decides the
//! wording of the result line (first-time initialization vs reconciliation);
//! the pass itself is the same either way.

use console::style;

use crate::catalog::STANDARD_CATALOG;
use crate::cli::InitArgs;
use crate::error::SlotboardError;
use crate::reconcile::Reconciler;

pub async fn execute(args: &InitArgs) -> Result<(), SlotboardError> {
    let store = super::resolve_store(&args.store).await?;
    let backend = store.name();
    let reconciler = Reconciler::new(store, STANDARD_CATALOG);

    let first_time = !reconciler.structure_exists().await;
    if first_time {
        tracing::info!(backend, "no existing config structure, creating from scratch");
    } else if args.force {
        tracing::info!(backend, "force mode: resetting all records to defaults");
    } else {
        tracing::info!(backend, "reconciling existing config structure");
    }

    let report = reconciler.reconcile(args.force).await?;

    let verb = if first_time { "initialized" } else { "reconciled" };
    println!(
        "{} ads_config {verb} (created {}, updated {})",
        style("\u{2713}").green(),
        report.created,
        report.updated
    );
    if report.created == 0 && report.updated == 0 {
        println!("  Everything was already in place.");
    }
    Ok(())
}
