//! Command-line interface definitions using clap derive macros.
//!
//! Contains the top-level [`Cli`] parser, the [`Commands`] enum for
//! subcommands, and their associated argument structs. Store connection and
//! logging flags have environment variable equivalents for scripted use.

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "slotboard",
    version,
    about = "Ad slot configuration console",
    propagate_version = true,
    after_help = "\x1b[1mQuick start:\x1b[0m\n  \
        export SLOTBOARD_DATABASE_URL=https://<project>-default-rtdb.firebaseio.com\n  \
        slotboard init                       Create the default ads_config tree\n  \
        slotboard list                       Show every slot's current config\n  \
        slotboard toggle off                 Kill all ad serving globally"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // -- Logging --
    /// Log level
    #[arg(short, long, env = "LOG_LEVEL", default_value = "info", global = true)]
    pub log_level: LogLevel,

    /// Force pretty (human-readable) log output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Force JSON log output (overrides TTY detection)
    #[arg(long, global = true, conflicts_with = "pretty")]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create missing config records (or reset everything with --force)
    Init(InitArgs),

    /// Report store connectivity and which records exist
    Status(StatusArgs),

    /// Show every slot's current configuration
    List(StoreArgs),

    /// Print one slot record as JSON
    Show(SlotTargetArgs),

    /// Replace a slot's configuration
    Set(SetArgs),

    /// Turn global ad serving on or off
    Toggle(ToggleArgs),

    /// Delete a slot record (the next init recreates it with defaults)
    Delete(SlotTargetArgs),
}

/// Store connection flags, shared by every subcommand that touches the store.
#[derive(Args)]
pub struct StoreArgs {
    /// Realtime Database URL (https://<project>-default-rtdb.firebaseio.com)
    #[arg(short, long, env = "SLOTBOARD_DATABASE_URL", help_heading = "Store")]
    pub database_url: Option<String>,

    /// Auth token appended to Realtime Database REST requests
    #[arg(long, env = "SLOTBOARD_AUTH_TOKEN", help_heading = "Store")]
    pub auth_token: Option<String>,

    /// Redis connection URL (uses Redis instead of the Realtime Database)
    #[cfg(feature = "redis")]
    #[arg(long, env = "REDIS_URL", help_heading = "Store")]
    pub redis_url: Option<String>,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        slotboard init             Create whatever is missing\n  \
        slotboard init --force     Reset every record to category defaults")]
pub struct InitArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Overwrite existing records with defaults, discarding operator edits
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct StatusArgs {
    #[command(flatten)]
    pub store: StoreArgs,
}

/// A subcommand addressing a single slot.
#[derive(Args)]
pub struct SlotTargetArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Slot identifier (e.g. banner_home)
    pub slot: String,
}

#[derive(Args)]
#[command(after_help = "\x1b[1mExamples:\x1b[0m\n  \
        slotboard set banner_home --enabled false\n  \
        slotboard set rewarded_booster --admob-id ca-app-pub-.../123 --adx-id ca-app-pub-.../123\n\n  \
        Omitted fields keep their current stored value (or the category\n  \
        default when the record does not exist yet).")]
pub struct SetArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Slot identifier (e.g. banner_home)
    pub slot: String,

    /// Whether this slot serves ads
    #[arg(long)]
    pub enabled: Option<bool>,

    /// AdMob ad unit ID
    #[arg(long)]
    pub admob_id: Option<String>,

    /// Ad Exchange ad unit ID
    #[arg(long)]
    pub adx_id: Option<String>,

    /// Facebook Audience Network placement ID
    #[arg(long)]
    pub facebook_id: Option<String>,
}

#[derive(Args)]
pub struct ToggleArgs {
    #[command(flatten)]
    pub store: StoreArgs,

    /// Explicit state; omit to flip the current value
    pub state: Option<OnOff>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OnOff {
    On,
    Off,
}

impl OnOff {
    #[must_use]
    pub const fn as_bool(self) -> bool {
        matches!(self, Self::On)
    }
}

#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl LogLevel {
    #[must_use]
    pub const fn to_tracing_level(&self) -> tracing::Level {
        match self {
            Self::Trace => tracing::Level::TRACE,
            Self::Debug => tracing::Level::DEBUG,
            Self::Info => tracing::Level::INFO,
            Self::Warn => tracing::Level::WARN,
            Self::Error => tracing::Level::ERROR,
        }
    }
}
