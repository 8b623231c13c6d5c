//! User interface: colors and sizes, and the heads-up display

pub mod hud;
pub mod theme;

pub use hud::HudPlugin;
