//! Input module - forwards keyboard and cursor events into the session.

mod plugin;

pub use plugin::InputCollectorPlugin;
