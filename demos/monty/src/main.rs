//! monty-demo — Monte Carlo simulation of the Monty Hall problem.
//!
//! You pick one of three doors; the host opens another door revealing a
//! goat and offers you the chance to switch to the remaining closed door.
//! Sticking wins 1/3 of the time, switching 2/3.  This demo simulates both
//! strategies against the same prize placements and writes the cumulative
//! win series (the data behind the classic convergence chart) as CSV.

use std::path::Path;

use anyhow::Result;

use pz_monty::{
    CumulativeWins, MontyConfig, MontyObserver, MontySim, RoundOutcome, WinTally,
};
use pz_output::{CsvWriter, MontyOutputObserver, OutputWriter};

// ── Constants ─────────────────────────────────────────────────────────────────

const ROUNDS: u64 = 1_000;
const SEED:   u64 = 42;

/// Round counts at which the convergence table samples the running rates.
const CHECKPOINTS: [u64; 4] = [10, 100, 500, 1_000];

// ── Observer wrapper: CSV rows + in-memory series ─────────────────────────────

struct TeeObserver<W: OutputWriter> {
    csv:    MontyOutputObserver<W>,
    series: CumulativeWins,
}

impl<W: OutputWriter> MontyObserver for TeeObserver<W> {
    fn on_round(&mut self, round: u64, outcome: &RoundOutcome, tally: &WinTally) {
        self.csv.on_round(round, outcome, tally);
        self.series.on_round(round, outcome, tally);
    }

    fn on_sim_end(&mut self, tally: &WinTally) {
        self.csv.on_sim_end(tally);
        self.series.on_sim_end(tally);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== monty-demo — Monty Hall ===");
    println!("Rounds: {ROUNDS}  |  Seed: {SEED}");
    println!();

    // 1. Build the simulation.
    let config = MontyConfig { rounds: ROUNDS, seed: SEED };
    let mut sim = MontySim::new(config)?;

    // 2. Set up output: CSV rows plus the in-memory convergence series.
    std::fs::create_dir_all("output/monty")?;
    let writer = CsvWriter::new(Path::new("output/monty"))?;
    let mut obs = TeeObserver {
        csv:    MontyOutputObserver::new(writer),
        series: CumulativeWins::with_capacity(ROUNDS),
    };

    // 3. Run.
    let tally = sim.run(&mut obs);
    if let Some(e) = obs.csv.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Final tally against the analytic probabilities.
    println!("{:<12} {:>8} {:>10} {:>10}", "Strategy", "Wins", "Rate", "Analytic");
    println!("{}", "-".repeat(44));
    println!(
        "{:<12} {:>8} {:>10.4} {:>10.4}",
        "stick",
        tally.stick_wins,
        tally.stick_rate(),
        1.0 / 3.0,
    );
    println!(
        "{:<12} {:>8} {:>10.4} {:>10.4}",
        "switch",
        tally.switch_wins,
        tally.switch_rate(),
        2.0 / 3.0,
    );
    println!();

    // 5. Convergence table (law of large numbers).
    println!("Running switch rate:");
    for &n in &CHECKPOINTS {
        if n <= obs.series.len() as u64 {
            let (_, switch_rate) = obs.series.rates_at(n as usize - 1);
            println!("  after {:>5} rounds: {:.4}", n, switch_rate);
        }
    }
    println!();
    println!("Wrote output/monty/cumulative_wins.csv ({} rows)", obs.series.len());

    Ok(())
}
