//! Fixed-tick 2D platformer runtime.
//!
//! The embedding loop owns the clock and the window; this crate owns the
//! simulation. Feed a [`session::Session`] raw input events, tick it at a
//! fixed rate, and read back the player view and level geometry to draw.

pub mod animation;
pub mod collision;
pub mod config;
pub mod level;
pub mod platform;
pub mod player;
pub mod session;

pub use config::GameConfig;
pub use level::Level;
pub use session::{PlayerView, Session};
