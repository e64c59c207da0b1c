//! Roll (close-and-reopen) analytics.
//!
//! A roll buys back some or all of an open position and opens a replacement
//! of the same type at a new strike and premium:
//! - Realized close P/L on the rolled contracts
//! - The new position's expiration payoff, shifted by that realized amount
//! - Metrics over the combined curve

mod error;
mod request;
mod scenario;

pub use error::RollError;
pub use request::RollRequest;
pub use scenario::{
    RollScenario, close_profit_loss, compute_roll, compute_roll_with_steps, rolled_position,
};
