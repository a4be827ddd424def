//! Snapshot path resolution
//!
//! Derives a deterministic filesystem path from a test identity and the
//! configured snapshot directory.

use std::path::{Path, PathBuf};

/// Directory used when no override is configured
pub const DEFAULT_SNAPSHOT_DIR: &str = "./.snapshot";

/// Resolve the snapshot file path for a test identity
///
/// Produces `<dir>/<sanitized identity>.jsonl`. The first `/` in the
/// identity — the join point between a parent test and its nested sub-test —
/// is replaced with `__`, so sibling sub-tests sharing a parent prefix map to
/// distinct files. Same identity and directory always resolve to the same
/// path.
pub fn snapshot_path(dir: &Path, test_name: &str) -> PathBuf {
    dir.join(format!("{}.jsonl", test_name.replacen('/', "__", 1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_identity() {
        let path = snapshot_path(Path::new(DEFAULT_SNAPSHOT_DIR), "prices");
        assert_eq!(path, Path::new("./.snapshot/prices.jsonl"));
    }

    #[test]
    fn test_nested_identity_uses_double_underscore() {
        let path = snapshot_path(Path::new("/tmp/snaps"), "Parent/Child");
        assert_eq!(path, Path::new("/tmp/snaps/Parent__Child.jsonl"));
    }

    #[test]
    fn test_sibling_identities_do_not_collide() {
        let dir = Path::new("/tmp/snaps");
        assert_ne!(
            snapshot_path(dir, "Parent/Child"),
            snapshot_path(dir, "Parent/Other")
        );
    }

    #[test]
    fn test_only_first_separator_is_replaced() {
        let path = snapshot_path(Path::new("d"), "a/b/c");
        assert_eq!(path, Path::new("d/a__b/c.jsonl"));
    }

    #[test]
    fn test_deterministic() {
        let dir = Path::new("d");
        assert_eq!(snapshot_path(dir, "x/y"), snapshot_path(dir, "x/y"));
    }
}
