use crate::{
    AutoplayConfig, AutoplayError, AutoplayResult, GameRecord, GameStatus, Policy, RoundRecord,
    SummaryStats,
};
use janken_core::{Event, EventBus, HandDef, HandTier, RngState, RoundOutcome, Session};
use janken_data::GameAssets;
use std::time::Instant;

const POLICY_SEED_SALT: u64 = 0x5EED_0F_A11CE;

#[derive(Debug)]
pub struct Simulator {
    pub session: Session,
    pub events: EventBus,
    policy_rng: RngState,
    specials_dealt: u32,
}

impl Simulator {
    pub fn new(assets: &GameAssets, seed: u64) -> Result<Self, AutoplayError> {
        let mut events = EventBus::default();
        let session = Session::start_default(
            assets.config.clone(),
            assets.catalog.clone(),
            seed,
            &mut events,
        )?;
        let specials_dealt = count_specials(&session.computer_hands);
        events.drain().for_each(drop);
        Ok(Self {
            session,
            events,
            policy_rng: RngState::from_seed(seed ^ POLICY_SEED_SALT),
            specials_dealt,
        })
    }

    /// Plays one full round: choose, resolve, acknowledge.
    pub fn step(&mut self, policy: Policy) -> Result<RoundRecord, AutoplayError> {
        let index = policy.choose(
            &self.session.player_hands,
            &self.session.computer_hands,
            &mut self.policy_rng,
        );
        let result = self.session.select_hand(index, &mut self.events)?.clone();
        let record = RoundRecord {
            round: result.round,
            player_index: result.player_index,
            computer_index: result.computer_index,
            player_hand: result.player_hand.id,
            computer_hand: result.computer_hand.id,
            outcome: result.outcome,
            life_after: self.session.state.life,
            win_count_after: self.session.state.win_count,
        };
        self.session.acknowledge(&mut self.events)?;
        let redrawn = self
            .events
            .drain()
            .any(|event| matches!(event, Event::HandsRedrawn { .. }));
        if redrawn {
            self.specials_dealt += count_specials(&self.session.computer_hands);
        }
        Ok(record)
    }

    pub fn play(mut self, config: &AutoplayConfig) -> Result<GameRecord, AutoplayError> {
        let mut record = GameRecord {
            seed: self.session.seed(),
            status: GameStatus::MaxRounds,
            score: 0,
            rounds: 0,
            wins: 0,
            losses: 0,
            draws: 0,
            resets: 0,
            specials_dealt: 0,
            round_log: Vec::new(),
        };
        while self.session.state.rounds < config.max_rounds {
            let round = self.step(config.policy)?;
            match round.outcome {
                RoundOutcome::Win => record.wins += 1,
                RoundOutcome::Lose => record.losses += 1,
                RoundOutcome::Draw => record.draws += 1,
                RoundOutcome::Reset => record.resets += 1,
            }
            if config.keep_rounds {
                record.round_log.push(round);
            }
            if self.session.is_game_over() {
                record.status = GameStatus::GameOver;
                break;
            }
        }
        record.score = self.session.score();
        record.rounds = self.session.state.rounds;
        record.specials_dealt = self.specials_dealt;
        log::debug!(
            "game seed={:#x} {:?} score={} rounds={}",
            record.seed,
            record.status,
            record.score,
            record.rounds
        );
        Ok(record)
    }
}

pub fn run_game(
    assets: &GameAssets,
    seed: u64,
    config: &AutoplayConfig,
) -> Result<GameRecord, AutoplayError> {
    Simulator::new(assets, seed)?.play(config)
}

pub fn run_batch(
    assets: &GameAssets,
    config: &AutoplayConfig,
) -> Result<AutoplayResult, AutoplayError> {
    let started = Instant::now();
    let mut games = Vec::with_capacity(config.games as usize);
    for index in 0..config.games {
        games.push(run_game(assets, config.game_seed(index), config)?);
    }
    let wall_time_ms = started.elapsed().as_millis() as u64;
    let summary = SummaryStats::from_games(&games, wall_time_ms);
    log::info!(
        "autoplay {} games policy={} mean_score={:.2}",
        summary.games,
        config.policy.name(),
        summary.mean_score
    );
    Ok(AutoplayResult {
        seed: config.seed,
        policy: config.policy,
        games,
        summary,
    })
}

fn count_specials(hands: &[HandDef]) -> u32 {
    hands.iter().filter(|hand| hand.tier != HandTier::Base).count() as u32
}
