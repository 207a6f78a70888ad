//! bridge-demo — the classic four-friends bridge-and-torch puzzle.
//!
//! Four friends (a, b, c, d) must cross a bridge at night.  At most two can
//! cross at a time, they share one torch, and a pair walks at the pace of
//! its slower member.  Individual times: a=1, b=2, c=7, d=10.  The greedy
//! planner finds the 17-minute schedule.

use std::io::Cursor;
use std::path::Path;

use anyhow::Result;

use pz_bridge::{load_roster_reader, Move, Plan, Planner, Roster};
use pz_core::CrossTime;
use pz_output::{plan_rows, CsvWriter, OutputWriter};

// ── Roster CSV ────────────────────────────────────────────────────────────────

// Deliberately out of order: the roster sorts by time, with file order
// breaking ties.
const ROSTER_CSV: &str = "\
label,time\n\
b,2\n\
a,1\n\
c,7\n\
d,10\n\
";

// ── Rendering ─────────────────────────────────────────────────────────────────

fn describe(mv: &Move, roster: &Roster) -> String {
    match *mv {
        Move::Cross(lead, Some(p)) => {
            format!("{} and {} cross", roster.label(lead), roster.label(p))
        }
        Move::Cross(lead, None) => format!("{} crosses alone", roster.label(lead)),
        Move::Return(id) => format!("{} returns with the torch", roster.label(id)),
    }
}

fn side_listing(roster: &Roster, ids: impl IntoIterator<Item = pz_core::TravelerId>) -> String {
    let labels: Vec<&str> = ids.into_iter().map(|id| roster.label(id)).collect();
    format!("[{}]", labels.join(", "))
}

fn print_progress(roster: &Roster, plan: &Plan) -> Result<()> {
    let summary = plan.replay(roster)?;

    println!(
        "Initial state:  start {}  destination []  elapsed 0min",
        side_listing(roster, roster.ids()),
    );

    let mut elapsed = CrossTime::ZERO;
    for (i, mv) in plan.moves().iter().enumerate() {
        let cost = mv.cost(roster);
        elapsed += cost;
        println!(
            "  {:>2}. {:<28} +{:<6} elapsed {}",
            i + 1,
            describe(mv, roster),
            cost.to_string(),
            elapsed,
        );
    }

    println!(
        "Final state:    start []  destination {}  elapsed {}",
        side_listing(roster, summary.banks.destination().iter().copied()),
        summary.total,
    );
    Ok(())
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== bridge-demo — bridge and torch ===");
    println!();

    // 1. Load and validate the roster.
    let roster = load_roster_reader(Cursor::new(ROSTER_CSV))?;
    println!("Travelers ({}, fastest first):", roster.len());
    for t in roster.travelers() {
        println!("  {:<4} {}", t.label, t.time);
    }
    println!();

    // 2. Plan the crossing.
    let plan = Planner::solve(&roster);

    // 3. Print the schedule with a running stopwatch.
    print_progress(&roster, &plan)?;
    println!();
    println!("Total crossing time: {}", plan.total);

    // 4. Write the plan as CSV.
    std::fs::create_dir_all("output/bridge")?;
    let mut writer = CsvWriter::new(Path::new("output/bridge"))?;
    writer.write_moves(&plan_rows(&plan, &roster))?;
    writer.finish()?;
    println!("Wrote output/bridge/crossing_plan.csv ({} rows)", plan.len());

    Ok(())
}
