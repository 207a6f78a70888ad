//! The `OutputWriter` trait implemented by backend writers.

use crate::{MoveRow, OutputResult, RoundRow};

/// Backend-agnostic result sink.
///
/// From the observer's perspective all methods are infallible — errors are
/// stored internally and retrieved with
/// [`MontyOutputObserver::take_error`][crate::MontyOutputObserver::take_error].
pub trait OutputWriter {
    /// Write a whole crossing plan, one row per move.
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()>;

    /// Write one Monte Carlo round row.
    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
