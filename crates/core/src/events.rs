use crate::RoundOutcome;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Event {
    GameStarted {
        life: u32,
        player_hands: Vec<String>,
        computer_hands: Vec<String>,
    },
    RoundResolved {
        round: u32,
        player_index: usize,
        computer_index: usize,
        player_hand: String,
        computer_hand: String,
        outcome: RoundOutcome,
    },
    ComebackTriggered { win_count: u32 },
    LifeLost { life: u32 },
    HandsRedrawn {
        hands: Vec<String>,
        win_count: u32,
        portrait: Option<String>,
    },
    Forfeited { score: u32 },
    GameOver { score: u32, rounds: u32 },
    Restarted,
}

#[derive(Debug, Default)]
pub struct EventBus {
    queue: Vec<Event>,
}

impl EventBus {
    pub fn push(&mut self, event: Event) {
        self.queue.push(event);
    }

    pub fn drain(&mut self) -> impl Iterator<Item = Event> + '_ {
        self.queue.drain(..)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
