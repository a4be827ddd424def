//! tabshot-core - Snapshot assertions for tabular query results
//!
//! This crate provides the snapshot lifecycle engine:
//! - Deterministic snapshot path derivation from hierarchical test identities
//! - Canonical JSON Lines serialization of projected rows
//! - `save`: stream query rows into a `.jsonl` baseline
//! - `assert`: re-run the query and compare row-by-row against the baseline,
//!   reconciling the total row count
//!
//! Query execution is abstracted behind the [`RowSource`] capability and
//! failure surfacing behind the [`Reporter`] capability, so the engine stays
//! independent of the data-access layer and the host test framework. A
//! rusqlite-backed row source lives in the `tabshot-sqlite` crate.

pub mod errors;
pub mod logging;
pub mod path;
pub mod report;
pub mod serialize;
pub mod snapshotter;
pub mod source;

mod snapshot;

// Re-export commonly used types
pub use errors::{Result, SnapError};
pub use path::{snapshot_path, DEFAULT_SNAPSHOT_DIR};
pub use report::{json_equivalent, BufferedReporter, Failure, Reporter};
pub use serialize::serialize_row;
pub use snapshotter::Snapshotter;
pub use source::{RowIter, RowSource, VecSource};
