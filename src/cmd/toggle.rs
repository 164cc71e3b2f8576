//! `slotboard toggle` — global ad serving kill switch.
//!
//! With an explicit `on`/`off` argument, sets that state. With none, reads
//! the current value and flips it. A missing global record is treated as the
//! default (enabled) before flipping.

use console::style;

use crate::cli::{OnOff, ToggleArgs};
use crate::error::SlotboardError;
use crate::model::{GlobalConfig, GLOBAL_PATH};

pub async fn execute(args: &ToggleArgs) -> Result<(), SlotboardError> {
    let store = super::resolve_store(&args.store).await?;

    let current: GlobalConfig = match store.read(GLOBAL_PATH).await? {
        Some(value) => super::decode(GLOBAL_PATH, value)?,
        None => GlobalConfig::default(),
    };

    let ads_enabled = match args.state {
        Some(state) => state.as_bool(),
        None => !current.ads_enabled,
    };

    let config = GlobalConfig { ads_enabled };
    store
        .write(GLOBAL_PATH, &super::encode(GLOBAL_PATH, &config)?)
        .await?;
    tracing::info!(ads_enabled, "global ads flag written");

    if ads_enabled {
        println!("{} global ad serving is ON", style("\u{2713}").green());
    } else {
        println!("{} global ad serving is OFF", style("\u{26a0}").yellow());
    }
    Ok(())
}
