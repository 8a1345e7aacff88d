use super::*;
use crate::{draw_hands, Event, EventBus};

impl Session {
    /// Starts a game with an externally chosen player hand set.
    pub fn start(
        config: GameConfig,
        catalog: Catalog,
        initial_hands: Vec<HandDef>,
        seed: u64,
        events: &mut EventBus,
    ) -> Result<Self, SessionError> {
        config.validate()?;
        if initial_hands.len() != config.hand_slots {
            return Err(SessionError::InvalidHandCount {
                expected: config.hand_slots,
                got: initial_hands.len(),
            });
        }
        let state = GameState::new(config.starting_life);
        let mut session = Self {
            config,
            catalog,
            rng: RngState::from_seed(seed),
            player_hands: initial_hands.clone(),
            computer_hands: Vec::new(),
            state,
            last_result: None,
            portrait: None,
            initial_hands,
        };
        session.computer_hands = session.draw_computer_hands()?;
        session.portrait = session.pick_portrait();
        log::info!(
            "game started seed={} life={} player={:?}",
            seed,
            session.state.life,
            hand_ids(&session.player_hands)
        );
        events.push(Event::GameStarted {
            life: session.state.life,
            player_hands: hand_ids(&session.player_hands),
            computer_hands: hand_ids(&session.computer_hands),
        });
        Ok(session)
    }

    /// Starts a game with the configured `starting_hands`.
    pub fn start_default(
        config: GameConfig,
        catalog: Catalog,
        seed: u64,
        events: &mut EventBus,
    ) -> Result<Self, SessionError> {
        let hands = catalog.resolve_ids(&config.starting_hands)?;
        Self::start(config, catalog, hands, seed, events)
    }

    /// Back to the opening position: initial hands, full life, zero counters.
    pub fn restart(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        self.state = GameState::new(self.config.starting_life);
        self.last_result = None;
        self.player_hands = self.initial_hands.clone();
        self.computer_hands = self.draw_computer_hands()?;
        self.portrait = self.pick_portrait();
        log::info!("game restarted");
        events.push(Event::Restarted);
        events.push(Event::GameStarted {
            life: self.state.life,
            player_hands: hand_ids(&self.player_hands),
            computer_hands: hand_ids(&self.computer_hands),
        });
        Ok(())
    }

    pub(super) fn redraw_computer(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        self.computer_hands = self.draw_computer_hands()?;
        self.portrait = self.pick_portrait();
        events.push(Event::HandsRedrawn {
            hands: hand_ids(&self.computer_hands),
            win_count: self.state.win_count,
            portrait: self.portrait.clone(),
        });
        Ok(())
    }

    fn draw_computer_hands(&mut self) -> Result<Vec<HandDef>, SessionError> {
        let hands = draw_hands(
            &self.catalog,
            &self.config.weights,
            self.config.hand_slots,
            self.state.win_count,
            &mut self.rng,
        )?;
        Ok(hands)
    }

    fn pick_portrait(&mut self) -> Option<String> {
        let idx = self.rng.pick_index(self.config.portraits.len())?;
        self.config.portraits.get(idx).cloned()
    }
}

pub(super) fn hand_ids(hands: &[HandDef]) -> Vec<String> {
    hands.iter().map(|hand| hand.id.clone()).collect()
}
