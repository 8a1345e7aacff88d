use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("hand_slots must be at least 1")]
    NoHandSlots,
    #[error("starting_life must be at least 1")]
    NoLife,
    #[error("draw_limit must be at least 1")]
    NoDrawLimit,
    #[error("neutralizer_floor {floor} exceeds base weight {base}")]
    FloorAboveBase { floor: u32, base: u32 },
}

/// Linear weight ramp `clamp(step * (wins - offset), 0, cap)`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeightCurve {
    pub step: u32,
    pub offset: u32,
    pub cap: u32,
}

impl WeightCurve {
    pub fn weight(&self, win_count: u32) -> u32 {
        let raw = i64::from(self.step) * (i64::from(win_count) - i64::from(self.offset));
        clamp(raw, 0, i64::from(self.cap)) as u32
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct WeightRule {
    pub base: u32,
    pub neutralizer_floor: u32,
    pub mid: WeightCurve,
    pub big: WeightCurve,
}

impl Default for WeightRule {
    fn default() -> Self {
        Self {
            base: 100,
            neutralizer_floor: 15,
            mid: WeightCurve {
                step: 30,
                offset: 2,
                cap: 150,
            },
            big: WeightCurve {
                step: 60,
                offset: 10,
                cap: 200,
            },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    pub starting_life: u32,
    pub hand_slots: usize,
    pub draw_limit: u32,
    #[serde(default)]
    pub weights: WeightRule,
    #[serde(default)]
    pub starting_hands: Vec<String>,
    #[serde(default)]
    pub portraits: Vec<String>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_life: 5,
            hand_slots: 3,
            draw_limit: 3,
            weights: WeightRule::default(),
            starting_hands: vec![
                "rock".to_string(),
                "scissors".to_string(),
                "paper".to_string(),
            ],
            portraits: vec![
                "robot1_blue.png".to_string(),
                "robot2_green.png".to_string(),
                "robot3.png".to_string(),
                "robot4_orange.png".to_string(),
                "robot5_red.png".to_string(),
                "robot6_purple.png".to_string(),
            ],
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.hand_slots == 0 {
            return Err(ConfigError::NoHandSlots);
        }
        if self.starting_life == 0 {
            return Err(ConfigError::NoLife);
        }
        if self.draw_limit == 0 {
            return Err(ConfigError::NoDrawLimit);
        }
        if self.weights.neutralizer_floor > self.weights.base {
            return Err(ConfigError::FloorAboveBase {
                floor: self.weights.neutralizer_floor,
                base: self.weights.base,
            });
        }
        Ok(())
    }
}

pub fn clamp(value: i64, lo: i64, hi: i64) -> i64 {
    lo.max(hi.min(value))
}
