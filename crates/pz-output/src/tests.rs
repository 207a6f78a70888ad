//! Integration tests for pz-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{MoveRow, RoundRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn move_row(step: usize) -> MoveRow {
        MoveRow {
            step,
            kind:    if step % 2 == 1 { "cross" } else { "return" },
            lead:    "a".to_string(),
            partner: if step % 2 == 1 { "b".to_string() } else { String::new() },
            cost:    2,
            elapsed: 2 * step as u64,
        }
    }

    fn round_row(round: u64) -> RoundRow {
        RoundRow {
            round,
            stick_cum:   round / 3,
            switch_cum:  round - round / 3,
            stick_rate:  (round / 3) as f64 / round as f64,
            switch_rate: (round - round / 3) as f64 / round as f64,
        }
    }

    #[test]
    fn files_created_lazily_on_first_write() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        assert!(!dir.path().join("crossing_plan.csv").exists());
        assert!(!dir.path().join("cumulative_wins.csv").exists());

        w.write_moves(&[move_row(1)]).unwrap();
        assert!(dir.path().join("crossing_plan.csv").exists());
        // Only the file that was written to exists.
        assert!(!dir.path().join("cumulative_wins.csv").exists());

        w.write_round(&round_row(1)).unwrap();
        assert!(dir.path().join("cumulative_wins.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_moves(&[move_row(1)]).unwrap();
        w.write_round(&round_row(1)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("crossing_plan.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["step", "kind", "lead", "partner", "cost", "elapsed"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("cumulative_wins.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["round", "stick_cum", "switch_cum", "stick_rate", "switch_rate"]);
    }

    #[test]
    fn csv_moves_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_moves(&[move_row(1), move_row(2), move_row(3)]).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("crossing_plan.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 3);
        assert_eq!(&rows[0][1], "cross");
        assert_eq!(&rows[1][1], "return");
        assert_eq!(&rows[1][3], ""); // returns have no partner
        assert_eq!(&rows[2][5], "6"); // elapsed
    }

    #[test]
    fn csv_rounds_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_round(&round_row(9)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("cumulative_wins.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "9");
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[0][2], "6");
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

#[cfg(test)]
mod plan_rows {
    use pz_bridge::{load_roster_reader, Planner};

    use crate::row::plan_rows;

    #[test]
    fn classic_plan_rows() {
        let roster =
            load_roster_reader(std::io::Cursor::new(b"label,time\nb,2\na,1\nc,7\nd,10\n".as_slice()))
                .unwrap();
        let plan = Planner::solve(&roster);
        let rows = plan_rows(&plan, &roster);

        assert_eq!(rows.len(), 5);
        assert_eq!(rows[0].kind, "cross");
        assert_eq!((rows[0].lead.as_str(), rows[0].partner.as_str()), ("a", "b"));
        assert_eq!(rows[1].kind, "return");
        assert_eq!(rows[1].partner, "");
        assert_eq!(rows[2].cost, 10);
        // Running clock: 2, 3, 13, 15, 17.
        let elapsed: Vec<u64> = rows.iter().map(|r| r.elapsed).collect();
        assert_eq!(elapsed, vec![2, 3, 13, 15, 17]);
        assert_eq!(rows.last().unwrap().elapsed, plan.total.0);
    }
}

#[cfg(test)]
mod observer {
    use tempfile::TempDir;

    use pz_monty::{MontyConfig, MontySim};

    use crate::csv::CsvWriter;
    use crate::observer::MontyOutputObserver;

    #[test]
    fn writes_one_row_per_round() {
        let dir = TempDir::new().unwrap();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = MontyOutputObserver::new(writer);

        let tally = MontySim::new(MontyConfig { rounds: 50, seed: 42 })
            .unwrap()
            .run(&mut obs);
        assert!(obs.take_error().is_none());

        let mut rdr = csv::Reader::from_path(dir.path().join("cumulative_wins.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 50);
        // Last row carries the final cumulative totals.
        assert_eq!(rows[49][1].parse::<u64>().unwrap(), tally.stick_wins);
        assert_eq!(rows[49][2].parse::<u64>().unwrap(), tally.switch_wins);
    }
}
