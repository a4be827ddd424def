//! Snapshot controller
//!
//! Holds the engine configuration and exposes the two public operations,
//! `save` and `assert`.

use crate::errors::io_error;
use crate::path::{snapshot_path, DEFAULT_SNAPSHOT_DIR};
use crate::report::Reporter;
use crate::snapshot::compare::compare_snapshot;
use crate::snapshot::writer::write_snapshot;
use crate::source::RowSource;
use std::fs::File;
use std::io::ErrorKind;
use std::path::PathBuf;

/// Snapshot-assertion engine
///
/// Configuration is owned per instance and set through consuming fluent
/// setters before use; an instance affects only operations invoked through
/// it. Operations are synchronous and single-threaded, run to completion or
/// to the first hard failure, and hold their file handle and row iterator
/// only for the duration of one call.
///
/// ```no_run
/// use tabshot_core::{BufferedReporter, Snapshotter, VecSource};
/// use serde::Serialize;
///
/// #[derive(Serialize, Clone)]
/// struct Item { code: String, price: i64 }
///
/// let shot = Snapshotter::new().snapshot_dir("tests/snapshots");
/// let mut reporter = BufferedReporter::new();
/// let mut source = VecSource::new(vec![Item { code: "D42".into(), price: 100 }]);
/// shot.assert(&mut reporter, "items/ordered", &mut source, "code ASC");
/// assert!(reporter.is_clean(), "{:?}", reporter.failures());
/// ```
#[derive(Debug, Clone)]
pub struct Snapshotter {
    snapshot_dir: PathBuf,
    force_update: bool,
}

impl Snapshotter {
    pub fn new() -> Self {
        Self {
            snapshot_dir: PathBuf::from(DEFAULT_SNAPSHOT_DIR),
            force_update: false,
        }
    }

    /// Override the snapshot directory (defaults to `./.snapshot`)
    pub fn snapshot_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.snapshot_dir = dir.into();
        self
    }

    /// Make `assert` regenerate the snapshot instead of comparing
    pub fn force_update(mut self, force: bool) -> Self {
        self.force_update = force;
        self
    }

    /// Save a snapshot: write the row source's output as a JSON Lines file
    ///
    /// Truncates any previous snapshot for `test_name`. Row order in the file
    /// is exactly the source's emission order under `ordering`. Hard failures
    /// are reported through the reporter and yield `false`; rows processed
    /// before the failure are already on disk (save is idempotent and
    /// re-runnable, so no rollback is attempted).
    pub fn save<S: RowSource>(
        &self,
        reporter: &mut dyn Reporter,
        test_name: &str,
        source: &mut S,
        ordering: &str,
    ) -> bool {
        let path = snapshot_path(&self.snapshot_dir, test_name);
        match write_snapshot(&path, source, ordering) {
            Ok(_) => true,
            Err(err) => {
                tracing::error!(
                    path = %path.display(),
                    code = err.code(),
                    error = %err,
                    "Snapshot save failed"
                );
                reporter.fail(&err.to_string());
                false
            }
        }
    }

    /// Assert that the snapshot and the row source's current output are equal
    ///
    /// When the snapshot file is missing, or the force-update flag is set,
    /// this delegates entirely to [`save`](Self::save) and regenerates the
    /// baseline. Otherwise every snapshot line is compared structurally
    /// against the corresponding fresh row and the total row count is
    /// reconciled; all mismatches are reported, not just the first.
    ///
    /// The boolean reflects hard failures only. Content and count mismatches
    /// are soft: they are recorded through the reporter for the host test
    /// framework to surface and leave the result `true`.
    pub fn assert<S: RowSource>(
        &self,
        reporter: &mut dyn Reporter,
        test_name: &str,
        source: &mut S,
        ordering: &str,
    ) -> bool {
        if self.force_update {
            return self.save(reporter, test_name, source, ordering);
        }

        let path = snapshot_path(&self.snapshot_dir, test_name);
        let file = match File::open(&path) {
            Ok(file) => file,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return self.save(reporter, test_name, source, ordering);
            }
            Err(err) => {
                let err = io_error("open_snapshot", err);
                tracing::error!(
                    path = %path.display(),
                    code = err.code(),
                    error = %err,
                    "Snapshot open failed"
                );
                reporter.fail(&err.to_string());
                return false;
            }
        };

        match compare_snapshot(file, &path, source, ordering, reporter) {
            Ok(()) => true,
            Err(err) => {
                tracing::error!(
                    path = %path.display(),
                    code = err.code(),
                    error = %err,
                    "Snapshot assert failed"
                );
                reporter.fail(&err.to_string());
                false
            }
        }
    }
}

impl Default for Snapshotter {
    fn default() -> Self {
        Self::new()
    }
}
