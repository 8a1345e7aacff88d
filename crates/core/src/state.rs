use crate::Outcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Phase {
    AwaitingSelection,
    ShowingResult,
    GameOver,
}

/// What a round reports. `Reset` replaces the draw that hits the draw limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RoundOutcome {
    Win,
    Lose,
    Draw,
    Reset,
}

impl RoundOutcome {
    /// Only a plain draw keeps the computer's hands for the next round.
    pub fn redraws(self) -> bool {
        !matches!(self, RoundOutcome::Draw)
    }

    pub fn awards_win(self) -> bool {
        matches!(self, RoundOutcome::Win | RoundOutcome::Reset)
    }
}

impl From<Outcome> for RoundOutcome {
    fn from(value: Outcome) -> Self {
        match value {
            Outcome::Win => RoundOutcome::Win,
            Outcome::Lose => RoundOutcome::Lose,
            Outcome::Draw => RoundOutcome::Draw,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameState {
    pub life: u32,
    pub win_count: u32,
    pub draw_count: u32,
    pub rounds: u32,
    pub phase: Phase,
}

impl GameState {
    pub fn new(life: u32) -> Self {
        Self {
            life,
            win_count: 0,
            draw_count: 0,
            rounds: 0,
            phase: Phase::AwaitingSelection,
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Applies a resolved outcome to the counters and returns what the round
    /// reports, converting the `draw_limit`-th consecutive draw into a reset.
    pub fn apply(&mut self, outcome: Outcome, draw_limit: u32) -> RoundOutcome {
        self.rounds = self.rounds.saturating_add(1);
        match outcome {
            Outcome::Win => {
                self.win_count = self.win_count.saturating_add(1);
                self.draw_count = 0;
                RoundOutcome::Win
            }
            Outcome::Lose => {
                self.life = self.life.saturating_sub(1);
                self.draw_count = 0;
                RoundOutcome::Lose
            }
            Outcome::Draw => {
                self.draw_count += 1;
                if self.draw_count >= draw_limit {
                    self.win_count = self.win_count.saturating_add(1);
                    self.draw_count = 0;
                    RoundOutcome::Reset
                } else {
                    RoundOutcome::Draw
                }
            }
        }
    }
}
