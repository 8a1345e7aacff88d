//! Seeded batch play over the core session API.

mod config;
mod error;
mod policy;
mod simulator;
mod trace;

pub use config::*;
pub use error::*;
pub use policy::*;
pub use simulator::*;
pub use trace::*;
