//! `MontyOutputObserver<W>` — bridges `MontyObserver` to an `OutputWriter`.

use pz_monty::{MontyObserver, RoundOutcome, WinTally};

use crate::row::RoundRow;
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`MontyObserver`] that writes one [`RoundRow`] per round to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After `sim.run()` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct MontyOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> MontyOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `sim.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> MontyObserver for MontyOutputObserver<W> {
    fn on_round(&mut self, round: u64, _outcome: &RoundOutcome, tally: &WinTally) {
        let row = RoundRow {
            round:       round + 1,
            stick_cum:   tally.stick_wins,
            switch_cum:  tally.switch_wins,
            stick_rate:  tally.stick_rate(),
            switch_rate: tally.switch_rate(),
        };
        let result = self.writer.write_round(&row);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _tally: &WinTally) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
