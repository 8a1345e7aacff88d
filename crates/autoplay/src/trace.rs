use crate::{AutoplayError, Policy};
use janken_core::RoundOutcome;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameStatus {
    GameOver,
    MaxRounds,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRecord {
    pub round: u32,
    pub player_index: usize,
    pub computer_index: usize,
    pub player_hand: String,
    pub computer_hand: String,
    pub outcome: RoundOutcome,
    pub life_after: u32,
    pub win_count_after: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GameRecord {
    pub seed: u64,
    pub status: GameStatus,
    pub score: u32,
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub resets: u32,
    /// Special (non-base) hands the computer was dealt over the game.
    pub specials_dealt: u32,
    #[serde(default)]
    pub round_log: Vec<RoundRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummaryStats {
    pub games: u32,
    pub mean_score: f64,
    pub min_score: u32,
    pub max_score: u32,
    pub total_rounds: u64,
    pub total_resets: u64,
    pub wall_time_ms: u64,
}

impl SummaryStats {
    pub fn from_games(games: &[GameRecord], wall_time_ms: u64) -> Self {
        let count = games.len() as u32;
        let total_score: u64 = games.iter().map(|game| u64::from(game.score)).sum();
        Self {
            games: count,
            mean_score: if count == 0 {
                0.0
            } else {
                total_score as f64 / f64::from(count)
            },
            min_score: games.iter().map(|game| game.score).min().unwrap_or(0),
            max_score: games.iter().map(|game| game.score).max().unwrap_or(0),
            total_rounds: games.iter().map(|game| u64::from(game.rounds)).sum(),
            total_resets: games.iter().map(|game| u64::from(game.resets)).sum(),
            wall_time_ms,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoplayResult {
    pub seed: u64,
    pub policy: Policy,
    pub games: Vec<GameRecord>,
    pub summary: SummaryStats,
}

impl AutoplayResult {
    pub fn summary_line(&self) -> String {
        let summary = &self.summary;
        format!(
            "{} games ({}): mean score {:.2}, min {}, max {}, resets {}",
            summary.games,
            self.policy.name(),
            summary.mean_score,
            summary.min_score,
            summary.max_score,
            summary.total_resets
        )
    }

    pub fn to_text_report(&self) -> String {
        let summary = &self.summary;
        let mut lines = vec![
            format!("policy: {} seed: {:#x}", self.policy.name(), self.seed),
            format!(
                "summary: games={} mean_score={:.2} min={} max={} rounds={} resets={} wall_ms={}",
                summary.games,
                summary.mean_score,
                summary.min_score,
                summary.max_score,
                summary.total_rounds,
                summary.total_resets,
                summary.wall_time_ms
            ),
            String::new(),
            "games:".to_string(),
        ];
        for (idx, game) in self.games.iter().enumerate() {
            lines.push(format!(
                "  game {:>4} | {} score={} rounds={} W/L/D/R={}/{}/{}/{} specials={}",
                idx + 1,
                status_label(game.status),
                game.score,
                game.rounds,
                game.wins,
                game.losses,
                game.draws,
                game.resets,
                game.specials_dealt
            ));
            for round in &game.round_log {
                lines.push(format!(
                    "    round {:>3}: {} vs {} -> {} (life {} wins {})",
                    round.round,
                    round.player_hand,
                    round.computer_hand,
                    outcome_label(round.outcome),
                    round.life_after,
                    round.win_count_after
                ));
            }
        }
        lines.join("\n")
    }
}

pub fn outcome_label(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::Win => "win",
        RoundOutcome::Lose => "lose",
        RoundOutcome::Draw => "draw",
        RoundOutcome::Reset => "reset",
    }
}

fn status_label(status: GameStatus) -> &'static str {
    match status {
        GameStatus::GameOver => "game_over",
        GameStatus::MaxRounds => "max_rounds",
    }
}

pub fn write_json(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &AutoplayResult) -> Result<(), AutoplayError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}
