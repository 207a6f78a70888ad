//! CSV output backend.
//!
//! Writes up to two files in the configured output directory:
//! - `crossing_plan.csv`
//! - `cumulative_wins.csv`
//!
//! Each file is created lazily on its first write, so a run that only
//! produces one kind of output leaves only that file behind.

use std::fs::File;
use std::path::{Path, PathBuf};

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{MoveRow, OutputError, OutputResult, RoundRow};

const PLAN_FILE: &str = "crossing_plan.csv";
const WINS_FILE: &str = "cumulative_wins.csv";

/// Writes demo results to per-kind CSV files.
pub struct CsvWriter {
    dir:      PathBuf,
    moves:    Option<Writer<File>>,
    rounds:   Option<Writer<File>>,
    finished: bool,
}

impl CsvWriter {
    /// Target `dir` for output.  No file is created until the first write.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        Ok(Self {
            dir:      dir.to_path_buf(),
            moves:    None,
            rounds:   None,
            finished: false,
        })
    }

    fn open<'a, const N: usize>(
        slot: &'a mut Option<Writer<File>>,
        path: PathBuf,
        header: [&str; N],
    ) -> OutputResult<&'a mut Writer<File>> {
        if slot.is_none() {
            let mut writer = Writer::from_path(path)?;
            writer.write_record(header)?;
            *slot = Some(writer);
        }
        match slot {
            Some(writer) => Ok(writer),
            // Unreachable: the slot was populated just above.
            None => Err(OutputError::Io(std::io::Error::other(
                "csv writer not initialized",
            ))),
        }
    }
}

impl OutputWriter for CsvWriter {
    fn write_moves(&mut self, rows: &[MoveRow]) -> OutputResult<()> {
        let writer = Self::open(
            &mut self.moves,
            self.dir.join(PLAN_FILE),
            ["step", "kind", "lead", "partner", "cost", "elapsed"],
        )?;
        for row in rows {
            writer.write_record(&[
                row.step.to_string(),
                row.kind.to_string(),
                row.lead.clone(),
                row.partner.clone(),
                row.cost.to_string(),
                row.elapsed.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_round(&mut self, row: &RoundRow) -> OutputResult<()> {
        let writer = Self::open(
            &mut self.rounds,
            self.dir.join(WINS_FILE),
            ["round", "stick_cum", "switch_cum", "stick_rate", "switch_rate"],
        )?;
        writer.write_record(&[
            row.round.to_string(),
            row.stick_cum.to_string(),
            row.switch_cum.to_string(),
            format!("{:.6}", row.stick_rate),
            format!("{:.6}", row.switch_rate),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        if let Some(writer) = self.moves.as_mut() {
            writer.flush()?;
        }
        if let Some(writer) = self.rounds.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}
