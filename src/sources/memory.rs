//! In-memory row source.
//!
//! [`MemoryRows`] holds ordered headers plus positional rows of
//! [`serde_json::Value`]s. Useful as a test fixture and for feeding
//! already-materialized data through a
//! [`StructScanner`](crate::scan::StructScanner).

use std::collections::VecDeque;

use serde_json::Value;

use crate::error::{MemoryResult, MemorySourceError};
use crate::record::ScanTarget;
use crate::source::RowSource;
use crate::value::assign;

/// An in-memory row source with an explicit cursor.
///
/// Call [`advance`](MemoryRows::advance) to move onto the next row before
/// scanning; scanning without a current row is an error.
///
/// Correspondence is strictly positional: target *i* receives value *i*.
/// When a column with no matching field sits in the *middle* of the header
/// list, every later target shifts left and receives the wrong column's
/// value. Only a suffix of unmatched columns drops cleanly; keep headers
/// aligned with the record's tags (or tag every leading column) when
/// scanning through a [`StructScanner`](crate::scan::StructScanner).
#[derive(Debug)]
pub struct MemoryRows {
    headers: Vec<String>,
    rows: VecDeque<Vec<Value>>,
    current: Option<Vec<Value>>,
}

impl MemoryRows {
    /// Build a source from ordered headers and positional rows.
    pub fn new<H, S>(headers: H, rows: Vec<Vec<Value>>) -> Self
    where
        H: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows.into(),
            current: None,
        }
    }

    /// Move the cursor onto the next row. Returns `false` when exhausted.
    pub fn advance(&mut self) -> bool {
        self.current = self.rows.pop_front();
        self.current.is_some()
    }

    /// Rows not yet visited by [`advance`](MemoryRows::advance).
    pub fn rows_remaining(&self) -> usize {
        self.rows.len()
    }
}

impl RowSource for MemoryRows {
    type Error = MemorySourceError;

    fn columns(&mut self) -> MemoryResult<Vec<String>> {
        Ok(self.headers.clone())
    }

    fn scan(&mut self, targets: &mut [ScanTarget<'_>]) -> MemoryResult<()> {
        let row = self.current.as_ref().ok_or(MemorySourceError::NoRow)?;
        if targets.len() > row.len() {
            return Err(MemorySourceError::RowWidth {
                requested: targets.len(),
                actual: row.len(),
            });
        }
        for (i, target) in targets.iter_mut().enumerate() {
            assign(target, &row[i]).map_err(|source| MemorySourceError::Assign {
                column: self
                    .headers
                    .get(i)
                    .cloned()
                    .unwrap_or_else(|| i.to_string()),
                source,
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::StructScanner;
    use serde_json::json;

    #[derive(Default)]
    struct Entity {
        id: i64,
        name: String,
        description: String,
    }

    crate::tag_mapped! {
        Entity {
            id => "id",
            name => "name",
            description => "description",
        }
    }

    fn sample() -> MemoryRows {
        MemoryRows::new(
            ["id", "name", "description"],
            vec![
                vec![json!(1), json!("Alice"), json!("first")],
                vec![json!(2), json!("Bob"), json!("second")],
            ],
        )
    }

    #[test]
    fn test_scan_populates_record() {
        let mut scanner = StructScanner::new(sample());
        assert!(scanner.source_mut().advance());

        let mut e = Entity::default();
        scanner.scan(&mut e).unwrap();
        assert_eq!(e.id, 1);
        assert_eq!(e.name, "Alice");
        assert_eq!(e.description, "first");
    }

    #[test]
    fn test_scan_across_rows() {
        let mut scanner = StructScanner::new(sample());
        let mut rows = Vec::new();
        while scanner.source_mut().advance() {
            let mut e = Entity::default();
            scanner.scan(&mut e).unwrap();
            rows.push(e);
        }
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].name, "Bob");
    }

    #[test]
    fn test_scan_without_advance_is_error() {
        let mut scanner = StructScanner::new(sample());
        let mut e = Entity::default();
        let err = scanner.scan(&mut e).unwrap_err();
        assert!(matches!(err, MemorySourceError::NoRow));
    }

    #[test]
    fn test_advance_past_end() {
        let mut rows = sample();
        assert!(rows.advance());
        assert!(rows.advance());
        assert!(!rows.advance());
        assert_eq!(rows.rows_remaining(), 0);
    }

    #[test]
    fn test_type_mismatch_names_column() {
        let mut scanner = StructScanner::new(MemoryRows::new(
            ["id", "name", "description"],
            vec![vec![json!("not a number"), json!("x"), json!("y")]],
        ));
        scanner.source_mut().advance();

        let mut e = Entity::default();
        let err = scanner.scan(&mut e).unwrap_err();
        match err {
            MemorySourceError::Assign { column, .. } => assert_eq!(column, "id"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_narrow_row_is_error() {
        let mut scanner = StructScanner::new(MemoryRows::new(
            ["id", "name", "description"],
            vec![vec![json!(1)]],
        ));
        scanner.source_mut().advance();

        let mut e = Entity::default();
        let err = scanner.scan(&mut e).unwrap_err();
        assert!(matches!(
            err,
            MemorySourceError::RowWidth {
                requested: 3,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_unmatched_middle_column_shifts_later_targets() {
        #[derive(Default)]
        struct Slim {
            id: i64,
            name: String,
        }
        crate::tag_mapped! {
            Slim {
                id => "id",
                name => "name",
            }
        }

        // "amount" has no matching field, so only two targets are
        // requested and the second one positionally receives the amount
        // cell, not the name cell. The positional contract makes middle
        // gaps misalign; only trailing unmatched columns drop cleanly.
        let mut scanner = StructScanner::new(MemoryRows::new(
            ["id", "amount", "name"],
            vec![vec![json!(1), json!("99"), json!("Alice")]],
        ));
        scanner.source_mut().advance();

        let mut s = Slim::default();
        scanner.scan(&mut s).unwrap();
        assert_eq!(s.id, 1);
        assert_eq!(s.name, "99");
    }

    #[test]
    fn test_extra_columns_skipped_but_positional() {
        // "amount" has no matching field; only three targets are requested
        // and they correspond to the first three values positionally.
        let mut scanner = StructScanner::new(MemoryRows::new(
            ["id", "name", "description", "amount"],
            vec![vec![json!(5), json!("Eve"), json!("fifth"), json!(99)]],
        ));
        scanner.source_mut().advance();

        let mut e = Entity::default();
        scanner.scan(&mut e).unwrap();
        assert_eq!(e.id, 5);
        assert_eq!(e.description, "fifth");
    }
}
