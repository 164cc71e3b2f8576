//! Subcommand dispatch and execution.
//!
//! The [`dispatch`] function initializes logging, then routes the parsed CLI
//! to the appropriate subcommand handler. Each handler lives in its own
//! submodule and talks to the store through [`resolve_store`].

pub mod delete;
pub mod init;
pub mod list;
pub mod set;
pub mod show;
pub mod status;
pub mod toggle;

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::cli::{Cli, Commands, StoreArgs};
use crate::error::SlotboardError;
use crate::logging;
use crate::store::Store;

pub async fn dispatch(cli: Cli) -> Result<(), SlotboardError> {
    let format = logging::resolve_format(cli.pretty, cli.json);
    logging::init(&cli.log_level, format);

    match cli.command {
        Some(Commands::Init(ref args)) => init::execute(args).await,
        Some(Commands::Status(ref args)) => status::execute(args).await,
        Some(Commands::List(ref args)) => list::execute(args).await,
        Some(Commands::Show(ref args)) => show::execute(args).await,
        Some(Commands::Set(ref args)) => set::execute(args).await,
        Some(Commands::Toggle(ref args)) => toggle::execute(args).await,
        Some(Commands::Delete(ref args)) => delete::execute(args).await,
        None => {
            print_welcome();
            Ok(())
        }
    }
}

/// Pick the store backend from the connection flags. Redis wins when its URL
/// is given; otherwise the Realtime Database URL is required.
pub async fn resolve_store(args: &StoreArgs) -> Result<Arc<dyn Store>, SlotboardError> {
    #[cfg(feature = "redis")]
    if let Some(ref url) = args.redis_url {
        let store = crate::store::redis_store::RedisStore::new(url).await?;
        return Ok(Arc::new(store));
    }

    match args.database_url {
        Some(ref url) => {
            let store = crate::store::rtdb::RtdbStore::new(url, args.auth_token.as_deref())?;
            Ok(Arc::new(store))
        }
        None => Err(SlotboardError::Configuration {
            hint: "No database URL provided.".into(),
        }),
    }
}

pub(crate) fn decode<T: DeserializeOwned>(path: &str, value: Value) -> Result<T, SlotboardError> {
    serde_json::from_value(value).map_err(|e| SlotboardError::Decode {
        path: path.to_string(),
        source: Box::new(e),
    })
}

pub(crate) fn encode<T: Serialize>(path: &str, payload: &T) -> Result<Value, SlotboardError> {
    serde_json::to_value(payload).map_err(|e| SlotboardError::Decode {
        path: path.to_string(),
        source: Box::new(e),
    })
}

fn print_welcome() {
    let version = env!("CARGO_PKG_VERSION");
    println!(
        "\n  slotboard v{version} \u{2014} ad slot configuration console\n\n  \
         No command provided. To get started:\n\n    \
         slotboard init                    Create the default ads_config tree\n    \
         slotboard status                  Check connectivity and record coverage\n    \
         slotboard list                    Show every slot's current config\n    \
         slotboard --help                  See all commands and options\n"
    );
}
