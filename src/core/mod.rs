//! Core game module - states, events, and the session that drives the game.

mod events;
mod plugin;
mod session;
mod states;

pub use events::*;
pub use plugin::CorePlugin;
pub use session::{Session, SessionEntity};
pub use states::*;
