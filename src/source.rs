//! The data-source capability consumed by the scan orchestrator.

use crate::record::ScanTarget;

/// One row's worth of retrieval capability.
///
/// A row source knows the ordered column names of its current row and can
/// populate a list of writable targets from that row's values. How rows come
/// to exist (cursors, queries, files) is the source's own business.
///
/// Positional correspondence is the contract: target *i* receives the value
/// of column *i*. The orchestrator may request fewer targets than the row
/// has physical columns; unmapped trailing columns are simply never
/// requested.
///
/// Concurrent use of one source from multiple scans is governed by the
/// source's own synchronization; this crate adds none.
pub trait RowSource {
    /// The source's error type. Failures cross the orchestrator untouched.
    type Error;

    /// Ordered column names of the current row.
    ///
    /// Must be callable before any scan in the current row cycle; a failure
    /// here aborts the row entirely.
    fn columns(&mut self) -> Result<Vec<String>, Self::Error>;

    /// Populate each target, in order, from the corresponding positional
    /// value of the current row.
    fn scan(&mut self, targets: &mut [ScanTarget<'_>]) -> Result<(), Self::Error>;
}

impl<S: RowSource + ?Sized> RowSource for &mut S {
    type Error = S::Error;

    fn columns(&mut self) -> Result<Vec<String>, Self::Error> {
        (**self).columns()
    }

    fn scan(&mut self, targets: &mut [ScanTarget<'_>]) -> Result<(), Self::Error> {
        (**self).scan(targets)
    }
}
