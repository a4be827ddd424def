//! Snapshot comparator
//!
//! Walks an existing snapshot line-by-line in lock-step with freshly queried
//! rows. Every differing line is reported; nothing short-circuits. After the
//! lines are exhausted the row source's independent total count is reconciled
//! against the line count.

use crate::errors::{io_error, Result};
use crate::report::Reporter;
use crate::serialize::serialize_row;
use crate::source::RowSource;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Compare a snapshot file against a live row source
///
/// For snapshot line *i*, the next row is pulled from the scan, serialized,
/// and asserted structurally equal to the stored text via the reporter,
/// labeled with `path:i`. A row source that runs out before the lines do
/// yields an empty actual text for each remaining line — never JSON-equal, so
/// each uncovered line surfaces as a content mismatch while the line counter
/// keeps advancing. The trailing count assertion always runs and is the
/// authoritative signal for extra or missing rows.
///
/// Returns `Ok` even when mismatches were reported; `Err` only for hard I/O,
/// query, or serialization failures.
pub(crate) fn compare_snapshot<S: RowSource>(
    file: File,
    path: &Path,
    source: &mut S,
    ordering: &str,
    reporter: &mut dyn Reporter,
) -> Result<()> {
    let reader = BufReader::new(file);
    let mut lines = 0u64;

    {
        let mut rows = source.scan(ordering)?;
        for stored in reader.lines() {
            let expected = stored.map_err(|e| io_error("read_snapshot_line", e))?;
            lines += 1;
            let actual = match rows.next() {
                Some(row) => serialize_row(&row?)?,
                None => String::new(),
            };
            reporter.json_eq(
                &expected,
                &actual,
                &format!("snapshot diff at {}:{}", path.display(), lines),
            );
        }
    }

    let count = source.count()?;
    reporter.count_eq(
        lines as usize,
        count as usize,
        &format!("row count at {}:{}", path.display(), lines),
    );

    tracing::debug!(
        path = %path.display(),
        lines,
        count,
        "Compared snapshot"
    );

    Ok(())
}
