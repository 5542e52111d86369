//! The scan orchestrator: one row, one destination record.

use crate::record::TagMapped;
use crate::resolve::FieldSet;
use crate::source::RowSource;

/// Drives one full scan of one row into one destination record.
///
/// Wraps a [`RowSource`] and, per [`scan`](StructScanner::scan) call, joins
/// the source's ordered column names against the record's declared mapping
/// tags, then hands the matched field targets to the source for population.
#[derive(Debug)]
pub struct StructScanner<S> {
    src: S,
}

impl<S: RowSource> StructScanner<S> {
    /// Wrap a row source.
    pub fn new(src: S) -> Self {
        Self { src }
    }

    /// Mutable access to the wrapped source, e.g. to advance its cursor.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.src
    }

    /// Unwrap the scanner, returning the source.
    pub fn into_inner(self) -> S {
        self.src
    }

    /// Populate `record` from the source's current row.
    ///
    /// Lists the row's columns, resolves each against `record`'s mapping
    /// tags in column order, and passes the matched targets to the source's
    /// scan operation. Columns without a matching field are silently
    /// dropped; matched targets keep column order. The source's scan runs
    /// exactly once per call, even with zero targets, unless column listing
    /// fails, in which case it does not run at all.
    ///
    /// Errors from either source operation are returned unchanged.
    pub fn scan<R: TagMapped>(&mut self, record: &mut R) -> Result<(), S::Error> {
        let columns = self.src.columns()?;
        let mut fields = FieldSet::new(record);
        let mut targets = Vec::new();
        for column in &columns {
            match fields.locate(column) {
                Some(target) => targets.push(target),
                // No field with tag matching the column name, ignore and
                // proceed to the next column.
                None => continue,
            }
        }
        self.src.scan(&mut targets)
    }
}
