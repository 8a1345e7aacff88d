//! Core game logic. Keep this crate free of IO and platform concerns.

pub mod catalog;
pub mod config;
pub mod draw;
pub mod events;
pub mod hand;
pub mod outcome;
pub mod rng;
pub mod session;
pub mod state;

pub use catalog::*;
pub use config::*;
pub use draw::*;
pub use events::*;
pub use hand::*;
pub use outcome::*;
pub use rng::*;
pub use session::*;
pub use state::*;
