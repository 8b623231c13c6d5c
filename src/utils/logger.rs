use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::prelude::*;

/// Environment variable that overrides the log level
pub const LOG_ENV_VAR: &str = "PROJECTOR_LOG";

const DEFAULT_LOG_LEVEL: &str = "warn";

/// Builds the filter string: the requested level, then the render layers
/// pinned to errors only
pub fn log_filter(level: Option<&str>) -> String {
    let level = level
        .map(str::trim)
        .filter(|level| !level.is_empty())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    format!("{level},wgpu_core=error,wgpu_hal=error,bevy_render=error,naga=warn")
}

/// Custom logger initialization to exclude timestamps but keep colors.
///
/// Use PROJECTOR_LOG=info or PROJECTOR_LOG=debug to increase verbosity.
/// Example: PROJECTOR_LOG=plane_projector=debug cargo run
pub fn init_custom_logger() {
    // Empty time formatter that doesn't print anything
    struct EmptyTime;
    impl FormatTime for EmptyTime {
        fn format_time(
            &self,
            _: &mut tracing_subscriber::fmt::format::Writer<'_>,
        ) -> std::fmt::Result {
            Ok(())
        }
    }

    let requested = std::env::var(LOG_ENV_VAR).ok();
    let filter = EnvFilter::try_new(log_filter(requested.as_deref()))
        .unwrap_or_else(|_| EnvFilter::new(log_filter(None)));

    let format = format()
        .with_timer(EmptyTime)
        .with_level(true)
        .with_target(true)
        .with_ansi(true); // Keep colors

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_filter(filter),
        )
        .init();
}
