//! Data loading and validation for the hand catalog and rule set.

pub mod load;
pub mod schema;

pub use load::*;
pub use schema::*;
