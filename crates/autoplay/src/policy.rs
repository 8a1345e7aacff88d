use crate::AutoplayError;
use janken_core::{resolve, HandDef, Outcome, RngState};
use serde::{Deserialize, Serialize};

/// How the simulated player picks a hand slot.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Policy {
    /// Always the first slot.
    First,
    /// Uniformly random slot.
    Random,
    /// Best expected result against the visible computer hands.
    Counter,
}

impl Policy {
    pub const ALL: [Policy; 3] = [Policy::First, Policy::Random, Policy::Counter];

    pub fn from_name(name: &str) -> Result<Self, AutoplayError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "first" => Ok(Self::First),
            "random" => Ok(Self::Random),
            "counter" => Ok(Self::Counter),
            other => Err(AutoplayError::UnknownPolicy(other.to_string())),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::First => "first",
            Self::Random => "random",
            Self::Counter => "counter",
        }
    }

    pub fn choose(self, player: &[HandDef], computer: &[HandDef], rng: &mut RngState) -> usize {
        match self {
            Self::First => 0,
            Self::Random => rng.pick_index(player.len()).unwrap_or(0),
            Self::Counter => best_counter(player, computer),
        }
    }
}

/// Sum over computer slots of win 2, draw 1, lose 0. The computer picks its
/// slot uniformly, so this ranks slots by expected result.
pub fn slot_value(hand: &HandDef, computer: &[HandDef]) -> u32 {
    computer
        .iter()
        .map(|opponent| match resolve(hand, opponent) {
            Outcome::Win => 2,
            Outcome::Draw => 1,
            Outcome::Lose => 0,
        })
        .sum()
}

fn best_counter(player: &[HandDef], computer: &[HandDef]) -> usize {
    let mut best = 0;
    let mut best_value = 0;
    for (idx, hand) in player.iter().enumerate() {
        let value = slot_value(hand, computer);
        if idx == 0 || value > best_value {
            best = idx;
            best_value = value;
        }
    }
    best
}
