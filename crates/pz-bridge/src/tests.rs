//! Unit tests for pz-bridge.

use pz_core::{CrossTime, TravelerId};

use crate::{Bank, BankState, Move, Plan, PlanError, Planner, Roster, Traveler};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(label: &str, time: u64) -> Traveler {
    Traveler::new(label, CrossTime(time))
}

/// The classic four-friends puzzle: a=1, b=2, c=7, d=10 (given out of order).
fn classic_roster() -> Roster {
    Roster::new(vec![t("b", 2), t("a", 1), t("c", 7), t("d", 10)]).unwrap()
}

fn labels(roster: &Roster, plan: &Plan) -> Vec<String> {
    plan.moves()
        .iter()
        .map(|mv| match *mv {
            Move::Cross(lead, Some(p)) => {
                format!("cross({},{})", roster.label(lead), roster.label(p))
            }
            Move::Cross(lead, None) => format!("cross({})", roster.label(lead)),
            Move::Return(id) => format!("return({})", roster.label(id)),
        })
        .collect()
}

// ── Roster ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod roster {
    use super::*;

    #[test]
    fn sorts_ascending_by_time() {
        let roster = classic_roster();
        let times: Vec<u64> = roster.travelers().iter().map(|tr| tr.time.0).collect();
        assert_eq!(times, vec![1, 2, 7, 10]);
        assert_eq!(roster.label(TravelerId(0)), "a");
        assert_eq!(roster.label(TravelerId(3)), "d");
    }

    #[test]
    fn equal_times_keep_input_order() {
        let roster = Roster::new(vec![t("x", 5), t("y", 5), t("z", 1)]).unwrap();
        // z is fastest; x and y tie and keep their input order.
        assert_eq!(roster.label(TravelerId(0)), "z");
        assert_eq!(roster.label(TravelerId(1)), "x");
        assert_eq!(roster.label(TravelerId(2)), "y");
    }

    #[test]
    fn fastest_pair_is_first_two() {
        let roster = classic_roster();
        let (f1, f2) = roster.fastest_pair();
        assert_eq!(roster.label(f1), "a");
        assert_eq!(roster.label(f2), "b");
    }

    #[test]
    fn rejects_single_traveler() {
        let err = Roster::new(vec![t("a", 1)]).unwrap_err();
        assert!(matches!(err, PlanError::TooFewTravelers(1)));
    }

    #[test]
    fn rejects_empty_input() {
        let err = Roster::new(vec![]).unwrap_err();
        assert!(matches!(err, PlanError::TooFewTravelers(0)));
    }

    #[test]
    fn rejects_zero_time() {
        let err = Roster::new(vec![t("a", 1), t("b", 0)]).unwrap_err();
        assert!(matches!(err, PlanError::NonPositiveTime(ref l) if l == "b"));
    }

    #[test]
    fn rejects_duplicate_label() {
        let err = Roster::new(vec![t("a", 1), t("b", 2), t("a", 3)]).unwrap_err();
        assert!(matches!(err, PlanError::DuplicateLabel(ref l) if l == "a"));
    }
}

// ── BankState ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod bank {
    use super::*;

    #[test]
    fn everyone_starts_on_start() {
        let roster = classic_roster();
        let banks = BankState::new(&roster);
        assert_eq!(banks.start().len(), 4);
        assert!(banks.destination().is_empty());
        assert!(!banks.is_complete());
        assert_eq!(banks.bank_of(TravelerId(0)), Bank::Start);
    }

    #[test]
    fn send_over_and_back() {
        let roster = classic_roster();
        let mut banks = BankState::new(&roster);
        let id = TravelerId(2);

        assert!(banks.send_over(id));
        assert!(banks.on_destination(id));
        assert!(!banks.on_start(id));

        assert!(banks.send_back(id));
        assert!(banks.on_start(id));
    }

    #[test]
    fn moves_from_wrong_bank_are_rejected() {
        let roster = classic_roster();
        let mut banks = BankState::new(&roster);
        // Not across yet, so it cannot come back.
        assert!(!banks.send_back(TravelerId(0)));
        // Cross once; crossing again from start must fail.
        assert!(banks.send_over(TravelerId(0)));
        assert!(!banks.send_over(TravelerId(0)));
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use super::*;

    #[test]
    fn classic_four_travelers() {
        // Expected: cross(a,b)=2, return(a)=1, cross(c,d)=10, return(b)=2,
        // cross(a,b)=2 → total 17.
        let roster = classic_roster();
        let plan = Planner::solve(&roster);

        assert_eq!(plan.total, CrossTime(17));
        assert_eq!(
            labels(&roster, &plan),
            vec!["cross(a,b)", "return(a)", "cross(c,d)", "return(b)", "cross(a,b)"],
        );
    }

    #[test]
    fn two_travelers_single_cross() {
        let roster = Roster::new(vec![t("a", 1), t("b", 2)]).unwrap();
        let plan = Planner::solve(&roster);

        assert_eq!(plan.total, CrossTime(2));
        assert_eq!(labels(&roster, &plan), vec!["cross(a,b)"]);
    }

    #[test]
    fn three_travelers() {
        // cross(a,b)=2, return(a)=1, cross(a,c)=3 → total 6.
        let roster = Roster::new(vec![t("b", 2), t("a", 1), t("c", 3)]).unwrap();
        let plan = Planner::solve(&roster);

        assert_eq!(plan.total, CrossTime(6));
        assert_eq!(
            labels(&roster, &plan),
            vec!["cross(a,b)", "return(a)", "cross(a,c)"],
        );
    }

    #[test]
    fn six_travelers_complete() {
        let roster = Roster::new(vec![
            t("a", 1),
            t("b", 3),
            t("c", 4),
            t("d", 6),
            t("e", 8),
            t("f", 9),
        ])
        .unwrap();
        let plan = Planner::solve(&roster);

        let summary = plan.replay(&roster).unwrap();
        assert!(summary.banks.is_complete());
        assert_eq!(summary.banks.destination().len(), 6);
        assert_eq!(summary.total, plan.total);
    }

    #[test]
    fn known_suboptimal_input_still_completes() {
        // {1,4,5,6}: heuristic gives 19, the true optimum is 17.  The
        // clustering rule is documented as intentionally non-optimal.
        let roster = Roster::new(vec![t("a", 1), t("b", 4), t("c", 5), t("d", 6)]).unwrap();
        let plan = Planner::solve(&roster);

        assert_eq!(plan.total, CrossTime(19));
        assert!(plan.replay(&roster).unwrap().banks.is_complete());
    }

    #[test]
    fn deterministic_across_runs() {
        let roster = classic_roster();
        let first = Planner::solve(&roster);
        let second = Planner::solve(&roster);
        assert_eq!(first, second);
    }

    #[test]
    fn moves_alternate_starting_and_ending_with_cross() {
        let roster = classic_roster();
        let plan = Planner::solve(&roster);

        for (i, mv) in plan.moves().iter().enumerate() {
            assert_eq!(mv.is_cross(), i % 2 == 0, "move {i} breaks alternation");
        }
        assert!(plan.moves().last().unwrap().is_cross());
    }

    #[test]
    fn total_matches_sum_of_move_costs() {
        let roster = classic_roster();
        let plan = Planner::solve(&roster);
        let recomputed: CrossTime = plan.moves().iter().map(|mv| mv.cost(&roster)).sum();
        assert_eq!(recomputed, plan.total);
    }

    #[test]
    fn tied_sums_pick_first_pair_in_id_order() {
        // After the couriers (1,1) shuttle, the remaining pairs {5,5,5}
        // all tie on combined time; the lowest-id pair must be chosen.
        let roster = Roster::new(vec![
            t("a", 1),
            t("b", 1),
            t("c", 5),
            t("d", 5),
            t("e", 5),
        ])
        .unwrap();
        let plan = Planner::solve(&roster);

        assert!(plan.replay(&roster).unwrap().banks.is_complete());
        // Second cross is the first tied pair: (c,d).
        assert_eq!(labels(&roster, &plan)[2], "cross(c,d)");
    }

    #[test]
    fn large_times_accumulate_without_overflow() {
        // Three travelers at 3 000 000 000 each: the stopwatch passes
        // u32::MAX on the second move and ends at 9 000 000 000.
        let big = 3_000_000_000;
        let roster = Roster::new(vec![t("a", big), t("b", big), t("c", big)]).unwrap();
        let plan = Planner::solve(&roster);

        assert_eq!(plan.total, CrossTime(9_000_000_000));
        assert!(plan.replay(&roster).unwrap().banks.is_complete());
    }
}

// ── Plan replay ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod replay {
    use super::*;

    #[test]
    fn replay_agrees_with_planner() {
        let roster = classic_roster();
        let plan = Planner::solve(&roster);
        let summary = plan.replay(&roster).unwrap();

        assert_eq!(summary.total, CrossTime(17));
        assert!(summary.banks.is_complete());
        assert_eq!(summary.banks.destination().len(), roster.len());
    }

    #[test]
    fn rejects_plan_starting_with_return() {
        let roster = classic_roster();
        let plan = Plan::new(vec![Move::Return(TravelerId(0))], CrossTime(1));
        let err = plan.replay(&roster).unwrap_err();
        assert!(matches!(err, PlanError::Replay { step: 0, .. }));
    }

    #[test]
    fn rejects_double_cross_without_return() {
        let roster = classic_roster();
        let plan = Plan::new(
            vec![
                Move::cross_pair(TravelerId(0), TravelerId(1)),
                Move::cross_pair(TravelerId(2), TravelerId(3)),
            ],
            CrossTime(12),
        );
        let err = plan.replay(&roster).unwrap_err();
        assert!(matches!(err, PlanError::Replay { step: 1, .. }));
    }

    #[test]
    fn rejects_crossing_from_far_bank() {
        let roster = classic_roster();
        let plan = Plan::new(
            vec![
                Move::cross_pair(TravelerId(0), TravelerId(1)),
                Move::Return(TravelerId(0)),
                // TravelerId(1) is already across; crossing again is illegal.
                Move::cross_pair(TravelerId(0), TravelerId(1)),
                Move::Return(TravelerId(0)),
            ],
            CrossTime::ZERO,
        );
        let err = plan.replay(&roster).unwrap_err();
        assert!(matches!(err, PlanError::Replay { step: 2, .. }));
    }

    #[test]
    fn rejects_pair_of_same_traveler() {
        let roster = classic_roster();
        let plan = Plan::new(
            vec![Move::Cross(TravelerId(0), Some(TravelerId(0)))],
            CrossTime(1),
        );
        let err = plan.replay(&roster).unwrap_err();
        assert!(matches!(err, PlanError::Replay { step: 0, .. }));
    }

    #[test]
    fn solo_cross_is_replayable() {
        let roster = classic_roster();
        let plan = Plan::new(vec![Move::Cross(TravelerId(3), None)], CrossTime(10));
        let summary = plan.replay(&roster).unwrap();
        assert_eq!(summary.total, CrossTime(10));
        assert!(!summary.banks.is_complete());
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use crate::load_roster_reader;

    use super::*;

    const CSV: &[u8] = b"\
label,time\n\
b,2\n\
a,1\n\
c,7\n\
d,10\n\
";

    #[test]
    fn loads_and_sorts() {
        let roster = load_roster_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(roster.len(), 4);
        assert_eq!(roster.label(TravelerId(0)), "a");
        assert_eq!(roster.time(TravelerId(3)), CrossTime(10));
    }

    #[test]
    fn loaded_roster_solves_to_seventeen() {
        let roster = load_roster_reader(Cursor::new(CSV)).unwrap();
        assert_eq!(Planner::solve(&roster).total, CrossTime(17));
    }

    #[test]
    fn invalid_time_errors() {
        let bad = b"label,time\na,one\nb,2\n";
        let result = load_roster_reader(Cursor::new(bad.as_slice()));
        assert!(matches!(result, Err(PlanError::Parse(_))));
    }

    #[test]
    fn zero_time_rejected_by_roster_rules() {
        let bad = b"label,time\na,0\nb,2\n";
        let result = load_roster_reader(Cursor::new(bad.as_slice()));
        assert!(matches!(result, Err(PlanError::NonPositiveTime(_))));
    }

    #[test]
    fn lone_row_rejected() {
        let bad = b"label,time\na,1\n";
        let result = load_roster_reader(Cursor::new(bad.as_slice()));
        assert!(matches!(result, Err(PlanError::TooFewTravelers(1))));
    }
}

// ── Serde round-trips ─────────────────────────────────────────────────────────

#[cfg(feature = "serde")]
mod serde_roster {
    use super::*;

    #[test]
    fn roundtrip_preserves_order() {
        let roster = classic_roster();
        let json = serde_json::to_string(&roster).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(back.label(TravelerId(0)), "a");
        assert_eq!(back.time(TravelerId(3)), CrossTime(10));
    }

    #[test]
    fn deserialize_revalidates() {
        // A decoded roster passes through the same gate as a constructed one.
        let lone = r#"{"travelers":[{"label":"a","time":1}]}"#;
        assert!(serde_json::from_str::<Roster>(lone).is_err());

        let zero = r#"{"travelers":[{"label":"a","time":1},{"label":"b","time":0}]}"#;
        assert!(serde_json::from_str::<Roster>(zero).is_err());

        let dup = r#"{"travelers":[{"label":"a","time":1},{"label":"a","time":2}]}"#;
        assert!(serde_json::from_str::<Roster>(dup).is_err());
    }

    #[test]
    fn deserialize_sorts_by_time() {
        let unsorted = r#"{"travelers":[{"label":"d","time":10},{"label":"a","time":1}]}"#;
        let roster: Roster = serde_json::from_str(unsorted).unwrap();
        assert_eq!(roster.label(TravelerId(0)), "a");
    }
}
