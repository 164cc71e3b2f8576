//! Slotboard is an operator console for ad slot configuration records.
//!
//! The records live in a remote hosted key-value store (Firebase Realtime
//! Database by default) under the `ads_config/` tree: one global kill switch,
//! one provider priority list, and one record per slot in a fixed catalog of
//! ad placements. Slotboard guarantees that tree exists (creating missing
//! records lazily, or force-resetting everything to category defaults) and
//! offers per-record edit, toggle, and delete operations.
//!
//! # Architecture
//!
//! - [`cli`] -- Command-line argument parsing with clap derive macros.
//! - [`cmd`] -- Subcommand dispatch and execution (init, status, list, show,
//!   set, toggle, delete).
//! - [`catalog`] -- The compiled-in slot catalog: identifiers, categories, and
//!   category default ad unit IDs.
//! - [`model`] -- Persisted record types and the `ads_config/` path scheme.
//! - [`store`] -- The [`Store`](store::Store) trait and its backends (Realtime
//!   Database REST, in-memory, optional Redis).
//! - [`reconcile`] -- The idempotent reconciliation pass that creates missing
//!   records, and the coarse structure-existence probe.
//! - [`error`] -- Unified error types using `thiserror`.
//! - [`logging`] -- Structured tracing setup with JSON and pretty-print output.
//!
//! # Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `redis` | Redis store backend |

// Binary crate — public functions are internal, not consumed by external users.
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod cli;
pub mod cmd;
pub mod error;
pub mod logging;
pub mod model;
pub mod reconcile;
pub mod store;
