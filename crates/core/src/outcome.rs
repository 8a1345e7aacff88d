use crate::HandDef;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Lose,
    Draw,
}

impl Outcome {
    /// The same round seen from the other side of the table.
    pub fn flipped(self) -> Self {
        match self {
            Outcome::Win => Outcome::Lose,
            Outcome::Lose => Outcome::Win,
            Outcome::Draw => Outcome::Draw,
        }
    }
}

/// Resolves one round from the player's point of view.
///
/// Identical hands and the neutralizer always draw. Otherwise the janken
/// cycle decides, then level breaks ties within the same base type, and
/// everything else is a loss.
pub fn resolve(player: &HandDef, computer: &HandDef) -> Outcome {
    if player.id == computer.id || player.is_neutralizer() || computer.is_neutralizer() {
        return Outcome::Draw;
    }
    if player.kind.beats(computer.kind) {
        return Outcome::Win;
    }
    if player.kind == computer.kind && player.level > computer.level {
        return Outcome::Win;
    }
    Outcome::Lose
}
