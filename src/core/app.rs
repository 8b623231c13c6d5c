//! Application initialization and configuration

use anyhow::Context;
use bevy::prelude::*;
use bevy::winit::WinitSettings;
use rand::rngs::StdRng;
use rand::{thread_rng, SeedableRng};

use crate::core::cli::CliArgs;
use crate::core::errors::ProjectorResult;
use crate::core::settings::ProjectorSettings;
use crate::registry::EntityRegistry;
use crate::systems::plugins::{configure_default_plugins, ProjectorSystems};
use crate::ui::theme::BACKGROUND_COLOR;

/// Creates a fully configured Bevy GUI application ready to run
pub fn create_app(cli_args: CliArgs) -> ProjectorResult<App> {
    cli_args.validate()?;

    let settings = ProjectorSettings::from_cli(&cli_args)?;
    let registry = build_registry(&settings, cli_args.seed)?;

    let mut app = App::new();
    configure_app_settings(&mut app, cli_args, settings, registry);
    add_all_plugins(&mut app);
    Ok(app)
}

/// Scatters the startup point set, reproducibly when a seed is given
pub fn build_registry(
    settings: &ProjectorSettings,
    seed: Option<u64>,
) -> ProjectorResult<EntityRegistry> {
    let registry = match seed {
        Some(seed) => {
            info!("Scattering {} points with seed {}", settings.point_count, seed);
            let mut rng = StdRng::seed_from_u64(seed);
            EntityRegistry::with_random_points(settings.point_count, &mut rng)
        }
        None => EntityRegistry::with_random_points(settings.point_count, &mut thread_rng()),
    };
    registry.context("Failed to build the point registry")
}

/// Sets up application resources and configuration
fn configure_app_settings(
    app: &mut App,
    cli_args: CliArgs,
    settings: ProjectorSettings,
    registry: EntityRegistry,
) {
    app.insert_resource(cli_args)
        .insert_resource(settings)
        .insert_resource(registry)
        .insert_resource(ClearColor(BACKGROUND_COLOR))
        // Projections are recomputed every frame, so keep the loop running
        .insert_resource(WinitSettings::game());
}

/// Adds all plugins to the application
fn add_all_plugins(app: &mut App) {
    app.add_plugins(configure_default_plugins())
        .add_plugins(ProjectorSystems)
        .add_systems(Update, exit_on_esc);
}

/// System to exit the application when the Escape key is pressed
fn exit_on_esc(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut app_exit_events: EventWriter<AppExit>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        app_exit_events.write(AppExit::Success);
    }
}
