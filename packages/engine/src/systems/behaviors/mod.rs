//! Behaviors - movement rules for cave materials
//!
//! Rock never moves; sand follows the powder rule.

mod powder;

pub use powder::{PowderBehavior, PowderStep, FALL_ORDER};
