//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay headless:
//! - Plain data in, plain data out
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bounds;
pub mod clock;
pub mod controller;
pub mod state;
pub mod steering;
pub mod tick;

pub use bounds::orb_escaped;
pub use clock::FixedStep;
pub use controller::RoundController;
pub use state::{EndReason, GameEvent, PointerState, RoundPhase, RoundState};
pub use steering::{DirectionalCue, Steering, push_factor, steer};
pub use tick::{StepOutcome, step};
