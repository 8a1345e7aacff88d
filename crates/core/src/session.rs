use crate::{
    Catalog, CatalogError, ConfigError, DrawError, GameConfig, GameState, HandDef, Phase,
    RngState, RoundOutcome,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

mod round;
mod setup;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("invalid hand selection {index} (have {len})")]
    InvalidSelection { index: usize, len: usize },
    #[error("invalid phase: {0:?}")]
    InvalidPhase(Phase),
    #[error("expected {expected} starting hands, got {got}")]
    InvalidHandCount { expected: usize, got: usize },
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("draw error: {0}")]
    Draw(#[from] DrawError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// One resolved round, kept until the front-end acknowledges it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundResult {
    pub round: u32,
    pub player_index: usize,
    pub computer_index: usize,
    pub player_hand: HandDef,
    pub computer_hand: HandDef,
    pub outcome: RoundOutcome,
    pub draw_count: u32,
}

/// Read-only snapshot handed to the presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionView {
    pub player_hands: Vec<HandDef>,
    pub computer_hands: Vec<HandDef>,
    pub life: u32,
    pub win_count: u32,
    pub draw_count: u32,
    pub last_result: Option<RoundResult>,
    pub game_over: bool,
    pub portrait: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player,
    Computer,
}

#[derive(Debug)]
pub struct Session {
    pub config: GameConfig,
    pub catalog: Catalog,
    pub rng: RngState,
    pub player_hands: Vec<HandDef>,
    pub computer_hands: Vec<HandDef>,
    pub state: GameState,
    pub last_result: Option<RoundResult>,
    pub portrait: Option<String>,
    initial_hands: Vec<HandDef>,
}

impl Session {
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_over()
    }

    pub fn score(&self) -> u32 {
        self.state.win_count
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            player_hands: self.player_hands.clone(),
            computer_hands: self.computer_hands.clone(),
            life: self.state.life,
            win_count: self.state.win_count,
            draw_count: self.state.draw_count,
            last_result: self.last_result.clone(),
            game_over: self.is_game_over(),
            portrait: self.portrait.clone(),
        }
    }

    pub fn hands(&self, side: Side) -> &[HandDef] {
        match side {
            Side::Player => &self.player_hands,
            Side::Computer => &self.computer_hands,
        }
    }

    pub fn describe(&self, side: Side, index: usize) -> Result<&str, SessionError> {
        let hands = self.hands(side);
        hands
            .get(index)
            .map(|hand| hand.description.as_str())
            .ok_or(SessionError::InvalidSelection {
                index,
                len: hands.len(),
            })
    }
}
