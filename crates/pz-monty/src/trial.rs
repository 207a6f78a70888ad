//! One Monty Hall round.

use pz_core::{DoorId, TrialRng};

/// Number of doors in the classic game.
pub const DOOR_COUNT: u8 = 3;

/// Everything that happened in one round, for both strategies at once.
///
/// Invariant: `stick_won != switch_won` — the switch target is the only
/// closed door besides the first pick, so exactly one strategy wins every
/// round.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundOutcome {
    /// Where the prize was placed.
    pub prize:       DoorId,
    /// The player's initial pick.
    pub first_pick:  DoorId,
    /// The goat door the host opened (never the pick, never the prize).
    pub opened:      DoorId,
    /// The remaining closed door — where a switching player ends up.
    pub switched_to: DoorId,
    pub stick_won:   bool,
    pub switch_won:  bool,
}

/// Play one round: place the prize, pick, open a goat door, resolve both
/// strategies.
///
/// The host's choice matters only when the first pick *is* the prize door
/// (two goat doors to choose from); it is uniform over the candidates either
/// way so the sampled sequence is well defined.
pub fn play_round(rng: &mut TrialRng) -> RoundOutcome {
    let prize = DoorId(rng.gen_range(0..DOOR_COUNT));
    let first_pick = DoorId(rng.gen_range(0..DOOR_COUNT));

    // Doors the host may open: neither the player's pick nor the prize.
    let mut candidates = [DoorId::INVALID; 2];
    let mut n = 0;
    for d in 0..DOOR_COUNT {
        let door = DoorId(d);
        if door != first_pick && door != prize {
            candidates[n] = door;
            n += 1;
        }
    }
    let opened = candidates[rng.gen_range(0..n)];

    // The three door indices sum to 0+1+2; the remaining closed door is the
    // one that is neither picked nor opened.
    let switched_to = DoorId(3 - first_pick.0 - opened.0);

    RoundOutcome {
        prize,
        first_pick,
        opened,
        switched_to,
        stick_won: first_pick == prize,
        switch_won: switched_to == prize,
    }
}
