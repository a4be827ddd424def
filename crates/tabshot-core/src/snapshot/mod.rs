//! Snapshot file lifecycle
//!
//! ## Responsibilities
//!
//! - Stream projected rows into a newly created `.jsonl` file (`writer`)
//! - Walk an existing snapshot line-by-line against fresh rows and reconcile
//!   the total count (`compare`)
//!
//! ## Non-Responsibilities
//!
//! - Path derivation (handled by `path`)
//! - The compare-vs-update decision and configuration (handled by
//!   `snapshotter`)

pub(crate) mod compare;
pub(crate) mod writer;
