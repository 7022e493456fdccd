//! Movement domain — интеграция движения аватара
//!
//! Содержит:
//! - MovementConfig (скорость, трение, границы комнаты)
//! - integrate() — чистая per-frame функция (intent → AvatarState)
//! - integrate_avatar_movement — ECS обёртка

pub mod integrator;
pub mod systems;


pub use integrator::*;
pub use systems::*;
