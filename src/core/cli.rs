//! Command line arguments for the application

use anyhow::ensure;
use bevy::prelude::*;
use clap::Parser;
use std::path::PathBuf;

use crate::core::errors::{validate_config_path, ProjectorResult};
use crate::core::settings::MAX_POINT_COUNT;

/// command line arguments for the point set and viewer options
#[derive(Parser, Debug, Clone, Default, Resource)]
#[command(author, version, about, long_about = None)]
pub struct CliArgs {
    /// how many points to scatter in the [-1, 1] cube
    #[arg(long)]
    pub points: Option<usize>,

    /// seed for the point scatter, random if not given
    #[arg(long)]
    pub seed: Option<u64>,

    /// path to a json settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// hide the frame rate and plane readout
    #[arg(long, default_value_t = false)]
    pub no_stats: bool,

    /// display debug information
    #[arg(long, default_value_t = false)]
    pub debug: bool,
}

impl CliArgs {
    /// Checks argument values that clap can't check on its own
    pub fn validate(&self) -> ProjectorResult<()> {
        if let Some(points) = self.points {
            ensure!(
                (1..=MAX_POINT_COUNT).contains(&points),
                "--points must be between 1 and {}, got {}",
                MAX_POINT_COUNT,
                points
            );
        }

        if let Some(path) = &self.config {
            validate_config_path(path)?;
        }

        Ok(())
    }
}
