//! Shared world state — resources, которые читают все per-frame системы
//!
//! Bevy `World` и есть process-wide store:
//! - avatar: поза и флаги движения (AvatarState)
//! - paintings: зарегистрированные картины, nearest/selected
//! - session: выбор персонажа, пауза
//! - snapshot: read-only снимок для UI слоя
//!
//! # Single writer
//! У каждого resource ровно одна система-писатель, запись = замена
//! всего значения. Читатели в том же кадре видят либо старое, либо
//! новое значение целиком.

pub mod avatar;
pub mod paintings;
pub mod session;
pub mod snapshot;


pub use avatar::*;
pub use paintings::*;
pub use session::*;
pub use snapshot::*;
