//! Snapshot writer
//!
//! Streams serialized rows from a row source into a freshly created snapshot
//! file, one JSON object per line.

use crate::errors::{io_error, Result};
use crate::serialize::serialize_row;
use crate::source::RowSource;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write a snapshot file from a row source
///
/// Creates the snapshot directory recursively, executes the scan with the
/// caller's ordering, truncates any previous file at `path`, and appends one
/// serialized line plus `\n` per row in emission order. The buffer is flushed
/// explicitly and the handle released by scope on every exit path. Rows
/// written before a failure stay on disk — the file is only ever rewritten
/// whole by the next save.
///
/// Returns the number of rows written.
pub(crate) fn write_snapshot<S: RowSource>(
    path: &Path,
    source: &mut S,
    ordering: &str,
) -> Result<u64> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_snapshot_dir", e))?;
    }

    let mut rows = source.scan(ordering)?;

    let file = File::create(path).map_err(|e| io_error("create_snapshot_file", e))?;
    let mut writer = BufWriter::new(file);

    let mut written = 0u64;
    for row in &mut rows {
        let line = serialize_row(&row?)?;
        writer
            .write_all(line.as_bytes())
            .map_err(|e| io_error("write_snapshot_line", e))?;
        writer
            .write_all(b"\n")
            .map_err(|e| io_error("write_snapshot_line", e))?;
        written += 1;
    }

    writer.flush().map_err(|e| io_error("flush_snapshot", e))?;

    tracing::debug!(
        path = %path.display(),
        rows = written,
        "Wrote snapshot"
    );

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::VecSource;
    use serde::Serialize;
    use tempfile::TempDir;

    #[derive(Serialize, Clone)]
    struct Row {
        id: u32,
    }

    #[test]
    fn test_write_creates_missing_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deep.jsonl");
        let mut source = VecSource::new(vec![Row { id: 1 }]);

        let written = write_snapshot(&path, &mut source, "").unwrap();

        assert_eq!(written, 1);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"id\":1}\n");
    }

    #[test]
    fn test_write_truncates_previous_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("snap.jsonl");
        let mut old = VecSource::new(vec![Row { id: 1 }, Row { id: 2 }]);
        let mut new = VecSource::new(vec![Row { id: 9 }]);

        write_snapshot(&path, &mut old, "").unwrap();
        write_snapshot(&path, &mut new, "").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{\"id\":9}\n");
    }

    #[test]
    fn test_empty_source_writes_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.jsonl");
        let mut source = VecSource::new(Vec::<Row>::new());

        let written = write_snapshot(&path, &mut source, "").unwrap();

        assert_eq!(written, 0);
        assert_eq!(fs::read_to_string(&path).unwrap(), "");
    }
}
