use super::setup::hand_ids;
use super::*;
use crate::{resolve, Event, EventBus};

impl Session {
    /// Plays the player's hand at `index` against a random computer slot.
    pub fn select_hand(
        &mut self,
        index: usize,
        events: &mut EventBus,
    ) -> Result<&RoundResult, SessionError> {
        self.ensure_phase(Phase::AwaitingSelection)?;
        let computer_index = self
            .rng
            .pick_index(self.computer_hands.len())
            .ok_or(SessionError::InvalidSelection {
                index: 0,
                len: 0,
            })?;
        self.select_hand_against(index, computer_index, events)
    }

    /// Plays the player's hand at `index` against the computer slot
    /// `computer_index`. Counters, the trade and the phase change land as one
    /// update; nothing is touched when an index is out of range.
    pub fn select_hand_against(
        &mut self,
        index: usize,
        computer_index: usize,
        events: &mut EventBus,
    ) -> Result<&RoundResult, SessionError> {
        self.ensure_phase(Phase::AwaitingSelection)?;
        if index >= self.player_hands.len() {
            return Err(SessionError::InvalidSelection {
                index,
                len: self.player_hands.len(),
            });
        }
        if computer_index >= self.computer_hands.len() {
            return Err(SessionError::InvalidSelection {
                index: computer_index,
                len: self.computer_hands.len(),
            });
        }

        let player_hand = self.player_hands[index].clone();
        let computer_hand = self.computer_hands[computer_index].clone();
        let outcome = resolve(&player_hand, &computer_hand);
        let reported = self.state.apply(outcome, self.config.draw_limit);

        std::mem::swap(
            &mut self.player_hands[index],
            &mut self.computer_hands[computer_index],
        );

        log::debug!(
            "round {}: {} vs {} -> {:?} (life={} wins={} draws={})",
            self.state.rounds,
            player_hand.id,
            computer_hand.id,
            reported,
            self.state.life,
            self.state.win_count,
            self.state.draw_count
        );
        events.push(Event::RoundResolved {
            round: self.state.rounds,
            player_index: index,
            computer_index,
            player_hand: player_hand.id.clone(),
            computer_hand: computer_hand.id.clone(),
            outcome: reported,
        });
        match reported {
            RoundOutcome::Reset => events.push(Event::ComebackTriggered {
                win_count: self.state.win_count,
            }),
            RoundOutcome::Lose => events.push(Event::LifeLost {
                life: self.state.life,
            }),
            RoundOutcome::Win | RoundOutcome::Draw => {}
        }

        self.state.phase = Phase::ShowingResult;
        let result: &RoundResult = self.last_result.insert(RoundResult {
            round: self.state.rounds,
            player_index: index,
            computer_index,
            player_hand,
            computer_hand,
            outcome: reported,
            draw_count: self.state.draw_count,
        });
        Ok(result)
    }

    /// Dismisses the shown result. Ends the game at zero life, otherwise
    /// re-draws the computer's hands unless the round was a plain draw.
    pub fn acknowledge(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        self.ensure_phase(Phase::ShowingResult)?;
        let result = self.last_result.take();
        if self.state.life == 0 {
            self.finish(events);
            return Ok(());
        }
        if result.map(|round| round.outcome.redraws()).unwrap_or(false) {
            self.redraw_computer(events)?;
            log::debug!(
                "computer redrawn at win_count={}: {:?}",
                self.state.win_count,
                hand_ids(&self.computer_hands)
            );
        }
        self.state.phase = Phase::AwaitingSelection;
        Ok(())
    }

    /// Gives up immediately from any phase before game over.
    pub fn forfeit(&mut self, events: &mut EventBus) -> Result<(), SessionError> {
        if self.is_game_over() {
            return Err(SessionError::InvalidPhase(Phase::GameOver));
        }
        self.state.life = 0;
        self.last_result = None;
        events.push(Event::Forfeited {
            score: self.state.win_count,
        });
        self.finish(events);
        Ok(())
    }

    fn finish(&mut self, events: &mut EventBus) {
        self.state.phase = Phase::GameOver;
        log::info!(
            "game over score={} rounds={}",
            self.state.win_count,
            self.state.rounds
        );
        events.push(Event::GameOver {
            score: self.state.win_count,
            rounds: self.state.rounds,
        });
    }

    fn ensure_phase(&self, expected: Phase) -> Result<(), SessionError> {
        if self.state.phase != expected {
            return Err(SessionError::InvalidPhase(self.state.phase));
        }
        Ok(())
    }
}
