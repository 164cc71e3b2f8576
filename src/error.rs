//! Unified error types for Slotboard.
//!
//! [`SlotboardError`] uses `thiserror` for `Display` and `Error` derives.
//! Store backends classify failures into structured variants at the boundary
//! where the raw transport error is visible (`Configuration`,
//! `PermissionDenied`, `Connection`, `Store`), so callers never inspect
//! message text. Error messages include contextual hints to guide the
//! operator toward a fix; none of these failures is retried automatically.

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SlotboardError {
    /// The store endpoint still holds placeholder or missing credentials.
    #[error(
        "Store endpoint is not configured.\n\n  {hint}\n  \
         Set --database-url (or SLOTBOARD_DATABASE_URL) to your project's \
         Realtime Database URL."
    )]
    Configuration { hint: String },

    /// The store rejected the operation under its access rules.
    #[error(
        "Permission denied at '{path}'.\n\n  \
         Check the database security rules: the 'ads_config' tree needs \
         read/write access for this client."
    )]
    PermissionDenied { path: String },

    /// Network or transport failure reaching the store.
    #[error(
        "Store connection failed: {source}\n\n  \
         Check your network connection and that the database URL is \
         reachable, then retry."
    )]
    Connection {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Any other store failure; the raw underlying message is surfaced.
    #[error("Store error ({backend}): {source}")]
    Store {
        backend: &'static str,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Invalid database URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Unknown slot '{id}'. Run 'slotboard list' to see the catalog.")]
    UnknownSlot { id: String },

    /// A stored record did not deserialize into the expected shape.
    #[error("Malformed record at '{path}': {source}")]
    Decode {
        path: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

impl SlotboardError {
    /// Short machine-readable tag for the taxonomy bucket, used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Configuration { .. } => "configuration",
            Self::PermissionDenied { .. } => "permission_denied",
            Self::Connection { .. } => "connection",
            Self::Store { .. } => "store",
            Self::InvalidUrl { .. } => "invalid_url",
            Self::UnknownSlot { .. } => "unknown_slot",
            Self::Decode { .. } => "decode",
            Self::Io(_) => "io",
        }
    }
}
