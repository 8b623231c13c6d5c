// An interactive plane projection viewer made with the Bevy game engine.

use anyhow::bail;
use bevy::app::AppExit;
use clap::Parser;
use plane_projector::core::{create_app, CliArgs};
use plane_projector::utils::logger::init_custom_logger;

fn main() -> anyhow::Result<()> {
    init_custom_logger();

    let cli_args = CliArgs::parse();
    let mut app = create_app(cli_args)?;

    match app.run() {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => bail!("Plane Projector exited with code {code}"),
    }
}
