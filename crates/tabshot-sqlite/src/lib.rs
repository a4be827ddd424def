//! tabshot-sqlite - SQLite row source for the tabshot engine
//!
//! Bridges a rusqlite connection to the [`RowSource`] capability: one scan is
//! one SELECT with the caller's ORDER BY expression spliced on, and the total
//! count comes from an independent COUNT query, never from iteration.

use rusqlite::Connection;
use serde::Serialize;
use std::marker::PhantomData;
use tabshot_core::errors::query_error;
use tabshot_core::{Result, RowIter, RowSource};

/// Row source backed by a SQLite query
///
/// The projection shape is fixed by the `map` function, which builds a fresh
/// `R` from each scanned row — the same mapper-function shape rusqlite's
/// `query_map` expects. Mapped rows are materialized when the statement runs
/// (a prepared statement cannot outlive its scan), so the iterator handed to
/// the engine owns its data.
pub struct SqlSource<'conn, R, F> {
    conn: &'conn Connection,
    select_sql: String,
    count_sql: String,
    map: F,
    _row: PhantomData<R>,
}

impl<'conn, R, F> SqlSource<'conn, R, F>
where
    R: Serialize,
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<R>,
{
    /// Source over a whole table with a projected column list
    ///
    /// Builds `SELECT <columns> FROM <table>` and `SELECT COUNT(*) FROM
    /// <table>`. Only the listed columns are scanned; `map` materializes them
    /// into the projection shape.
    pub fn table(conn: &'conn Connection, table: &str, columns: &[&str], map: F) -> Self {
        Self {
            conn,
            select_sql: format!("SELECT {} FROM {}", columns.join(", "), table),
            count_sql: format!("SELECT COUNT(*) FROM {}", table),
            map,
            _row: PhantomData,
        }
    }

    /// Source over an arbitrary SELECT (joins, filters)
    ///
    /// `select_sql` must not carry its own ORDER BY — the ordering expression
    /// passed to `save`/`assert` is appended at scan time. `count_sql` must
    /// return a single integer and agree with `select_sql`'s row set.
    pub fn query(
        conn: &'conn Connection,
        select_sql: impl Into<String>,
        count_sql: impl Into<String>,
        map: F,
    ) -> Self {
        Self {
            conn,
            select_sql: select_sql.into(),
            count_sql: count_sql.into(),
            map,
            _row: PhantomData,
        }
    }

    fn scan_sql(&self, ordering: &str) -> String {
        if ordering.is_empty() {
            self.select_sql.clone()
        } else {
            format!("{} ORDER BY {}", self.select_sql, ordering)
        }
    }
}

impl<R, F> RowSource for SqlSource<'_, R, F>
where
    R: Serialize,
    F: FnMut(&rusqlite::Row<'_>) -> rusqlite::Result<R>,
{
    type Row = R;

    fn scan(&mut self, ordering: &str) -> Result<RowIter<'_, R>> {
        let sql = self.scan_sql(ordering);
        let conn = self.conn;
        let mut stmt = conn
            .prepare(&sql)
            .map_err(|e| query_error("prepare_scan", e.to_string()))?;
        let rows: Vec<Result<R>> = stmt
            .query_map([], &mut self.map)
            .map_err(|e| query_error("execute_scan", e.to_string()))?
            .map(|row| row.map_err(|e| query_error("scan_row", e.to_string())))
            .collect();

        tracing::debug!(sql = %sql, rows = rows.len(), "Scanned rows");

        Ok(Box::new(rows.into_iter()))
    }

    fn count(&mut self) -> Result<u64> {
        let count: i64 = self
            .conn
            .query_row(&self.count_sql, [], |row| row.get(0))
            .map_err(|e| query_error("count_rows", e.to_string()))?;
        Ok(count as u64)
    }
}
