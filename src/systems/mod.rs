//! Bevy Systems and Plugins
//!
//! This module contains the frame-level wiring of the app:
//! - System set ordering for one tick
//! - The projection sync loop
//! - Plugin bundles and default plugin configuration

pub mod plugins;
pub mod sync;
pub mod system_sets;

// Re-export commonly used items
pub use plugins::{configure_default_plugins, ProjectorSystems};
pub use sync::{sync_projections, SyncPhase, SyncPlugin, SyncState};
pub use system_sets::{ProjectorSets, ProjectorSetsPlugin};
