//! Reusable view components.

pub mod auth_panel;
pub mod song;

pub use auth_panel::AuthPanel;
pub use song::SongCard;
