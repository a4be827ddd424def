//! Row source capability
//!
//! Abstraction over "run this query, return these rows in this shape and
//! order". The engine is generic over the projection shape: whatever the
//! source materializes per row is what gets serialized and compared, and the
//! shape is fixed at compile time through the `Row` associated type.

use crate::errors::Result;
use serde::Serialize;

/// Fallible, forward-only row iterator tied to one scan
pub type RowIter<'a, R> = Box<dyn Iterator<Item = Result<R>> + 'a>;

/// A queryable source of projected rows
///
/// One `scan` corresponds to one query execution. The returned sequence is
/// finite and consumed exactly once per operation; emission order is the
/// order rows end up in the snapshot file, so callers must supply a
/// deterministic `ordering` expression — the engine never sorts.
pub trait RowSource {
    /// Projection shape persisted and compared for this source
    type Row: Serialize;

    /// Execute the query with the given ordering, yielding projected rows
    ///
    /// Each row is materialized fresh; a row-level failure surfaces as an
    /// `Err` item and aborts the enclosing operation.
    fn scan(&mut self, ordering: &str) -> Result<RowIter<'_, Self::Row>>;

    /// Total matched-row count, obtained independently of any iteration
    fn count(&mut self) -> Result<u64>;
}

/// In-memory row source
///
/// Yields its rows in insertion order; the ordering expression is ignored.
/// Serves as the reference implementation and as a fixture for engine tests.
#[derive(Debug, Clone)]
pub struct VecSource<R> {
    rows: Vec<R>,
}

impl<R> VecSource<R> {
    pub fn new(rows: Vec<R>) -> Self {
        Self { rows }
    }
}

impl<R: Serialize + Clone> RowSource for VecSource<R> {
    type Row = R;

    fn scan(&mut self, _ordering: &str) -> Result<RowIter<'_, R>> {
        Ok(Box::new(self.rows.clone().into_iter().map(Ok)))
    }

    fn count(&mut self) -> Result<u64> {
        Ok(self.rows.len() as u64)
    }
}
