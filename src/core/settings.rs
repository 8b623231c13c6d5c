// Settings ///////////////////////////////////////////////////////////////////
// This module contains all the non-visual settings for the app. The constants
// are the defaults; a json settings file and the command line can override
// them at startup, and the result lives in the `ProjectorSettings` resource.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::cli::CliArgs;
use crate::core::errors::{ProjectorContext, ProjectorResult};

// Point Set //////////////////////////////////////////////////////////////////

/// Number of points scattered at startup
pub const DEFAULT_POINT_COUNT: usize = 10;
/// Upper bound accepted from the command line or a settings file
pub const MAX_POINT_COUNT: usize = 10_000;
/// Radius of the point and projection spheres (world units)
pub const POINT_RADIUS: f32 = 0.01;

// Plane //////////////////////////////////////////////////////////////////////

/// Radius of the plane disk; covers the corners of the [-1, 1] square
pub const PLANE_RADIUS: f32 = std::f32::consts::SQRT_2;
/// Number of segments used to tessellate the plane disk
pub const PLANE_RESOLUTION: u32 = 64;

// Manipulator ////////////////////////////////////////////////////////////////

/// Relative size of the rotation rings
pub const MANIPULATOR_SIZE: f32 = 0.5;
/// Ring radius at a manipulator size of 1.0
pub const RING_BASE_RADIUS: f32 = 2.0;
/// How far (world units) from a ring a click still grabs it
pub const RING_HIT_TOLERANCE: f32 = 0.05;

// Camera /////////////////////////////////////////////////////////////////////

/// Radians of orbit per pixel of mouse motion
pub const ORBIT_SENSITIVITY: f32 = 0.005;
/// Fraction of the orbit radius removed per scroll line
pub const ZOOM_SENSITIVITY: f32 = 0.1;
/// Closest and farthest the orbit camera may get to its target
pub const MIN_ORBIT_RADIUS: f32 = 0.2;
pub const MAX_ORBIT_RADIUS: f32 = 50.0;

/// Runtime settings, resolved once at startup
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct ProjectorSettings {
    pub point_count: usize,
    pub point_radius: f32,
    pub plane_radius: f32,
    pub manipulator_size: f32,
    pub ring_hit_tolerance: f32,
    pub orbit_sensitivity: f32,
    pub zoom_sensitivity: f32,
    pub show_stats: bool,
    pub debug: bool,
}

impl Default for ProjectorSettings {
    fn default() -> Self {
        Self {
            point_count: DEFAULT_POINT_COUNT,
            point_radius: POINT_RADIUS,
            plane_radius: PLANE_RADIUS,
            manipulator_size: MANIPULATOR_SIZE,
            ring_hit_tolerance: RING_HIT_TOLERANCE,
            orbit_sensitivity: ORBIT_SENSITIVITY,
            zoom_sensitivity: ZOOM_SENSITIVITY,
            show_stats: true,
            debug: false,
        }
    }
}

impl ProjectorSettings {
    /// Resolves settings from defaults, then the settings file, then flags
    pub fn from_cli(cli_args: &CliArgs) -> ProjectorResult<Self> {
        let mut settings = Self::default();

        if let Some(path) = &cli_args.config {
            let file = SettingsFile::load_from_file(path)?;
            settings.apply_file(&file);
            info!("Loaded settings from {}", path.display());
        }

        if let Some(points) = cli_args.points {
            settings.point_count = points;
        }
        if cli_args.no_stats {
            settings.show_stats = false;
        }
        settings.debug |= cli_args.debug;

        settings.validate()?;
        Ok(settings)
    }

    /// Copies every value present in the file over the current one
    pub fn apply_file(&mut self, file: &SettingsFile) {
        if let Some(v) = file.point_count {
            self.point_count = v;
        }
        if let Some(v) = file.point_radius {
            self.point_radius = v;
        }
        if let Some(v) = file.plane_radius {
            self.plane_radius = v;
        }
        if let Some(v) = file.manipulator_size {
            self.manipulator_size = v;
        }
        if let Some(v) = file.ring_hit_tolerance {
            self.ring_hit_tolerance = v;
        }
        if let Some(v) = file.orbit_sensitivity {
            self.orbit_sensitivity = v;
        }
        if let Some(v) = file.zoom_sensitivity {
            self.zoom_sensitivity = v;
        }
        if let Some(v) = file.show_stats {
            self.show_stats = v;
        }
        if let Some(v) = file.debug {
            self.debug = v;
        }
    }

    /// Radius of the manipulator's rotation rings in world units
    pub fn ring_radius(&self) -> f32 {
        RING_BASE_RADIUS * self.manipulator_size
    }

    fn validate(&self) -> ProjectorResult<()> {
        anyhow::ensure!(
            (1..=MAX_POINT_COUNT).contains(&self.point_count),
            "point_count must be between 1 and {}, got {}",
            MAX_POINT_COUNT,
            self.point_count
        );
        for (name, value) in [
            ("point_radius", self.point_radius),
            ("plane_radius", self.plane_radius),
            ("manipulator_size", self.manipulator_size),
            ("ring_hit_tolerance", self.ring_hit_tolerance),
        ] {
            anyhow::ensure!(
                value.is_finite() && value > 0.0,
                "{name} must be a positive number, got {value}"
            );
        }
        Ok(())
    }
}

/// Optional overrides read from a json settings file
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    pub point_count: Option<usize>,
    pub point_radius: Option<f32>,
    pub plane_radius: Option<f32>,
    pub manipulator_size: Option<f32>,
    pub ring_hit_tolerance: Option<f32>,
    pub orbit_sensitivity: Option<f32>,
    pub zoom_sensitivity: Option<f32>,
    pub show_stats: Option<bool>,
    pub debug: Option<bool>,
}

impl SettingsFile {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> ProjectorResult<Self> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).with_file_context("read", path)?;
        let file: SettingsFile =
            serde_json::from_str(&contents).with_file_context("parse", path)?;
        Ok(file)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> ProjectorResult<()> {
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self).with_file_context("serialize", path)?;
        fs::write(path, json).with_file_context("write", path)?;
        Ok(())
    }
}
