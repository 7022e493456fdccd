//! Input domain — логические клавиши и вектор намерения движения
//!
//! # Архитектура
//!
//! ```text
//! Host input (keyboard / virtual joystick / window focus)
//!     ↓
//! InputState (resource) + input events - state.rs, events.rs
//!     ↓
//! movement_intent() → Movement Integrator
//! ```
//!
//! Физические клавиши маппит хост (client), симуляция знает только `LogicalKey`.

pub mod events;
pub mod state;
pub mod systems;

#[cfg(test)]
mod state_tests;

pub use events::*;
pub use state::*;
pub use systems::*;
