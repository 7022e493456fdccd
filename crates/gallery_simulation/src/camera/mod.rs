//! Camera domain — follow/orbit camera и zoom на выбранную картину
//!
//! **Orbit mode (нет selection):**
//! - Камера на сфере радиуса `orbit_distance` вокруг аватара
//! - Pointer drag → target yaw/pitch, текущие yaw/pitch догоняют плавно
//!
//! **Zoom mode (selection есть):**
//! - Камера перед картиной по её нормали, FOV сужается по мере подлёта
//! - Смена картины во время zoom → FOV сбрасывается на establishing
//!
//! Позиция и look-at всегда сглаживаются (lerp), никогда не прыгают.

pub mod rig;
pub mod systems;


pub use rig::*;
pub use systems::*;
