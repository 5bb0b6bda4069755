// Standard library
use std::env;

// External libraries
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*, EnvFilter};

/// Level picked by the `-v`/`-q` flags when `RUST_LOG` does not say otherwise.
fn flag_level(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// `-q` silences everything. Otherwise `RUST_LOG` directives (e.g. `life::engine=trace`) are
/// layered over the flag level; malformed directives are dropped.
fn build_filter(verbosity: u8, quiet: bool, rust_log: Option<&str>) -> EnvFilter {
    let builder = EnvFilter::builder().with_default_directive(flag_level(verbosity, quiet).into());
    match rust_log {
        Some(directives) if !quiet => builder.parse_lossy(directives),
        _ => builder.parse_lossy(""),
    }
}

/// Logs go to stderr so stdout only carries the rendered generations.
pub fn setup_logging(verbosity: u8, quiet: bool) {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    let filter = build_filter(verbosity, quiet, rust_log.as_deref());

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .without_time()
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_map_to_levels() {
        assert_eq!(flag_level(0, false), LevelFilter::WARN);
        assert_eq!(flag_level(1, false), LevelFilter::INFO);
        assert_eq!(flag_level(2, false), LevelFilter::DEBUG);
        assert_eq!(flag_level(7, false), LevelFilter::TRACE);
        assert_eq!(flag_level(3, true), LevelFilter::OFF);
    }

    #[test]
    fn rust_log_overrides_flags() {
        let filter = build_filter(0, false, Some("life=trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
    }

    #[test]
    fn absent_or_malformed_rust_log_keeps_flag_level() {
        assert_eq!(build_filter(1, false, None).max_level_hint(), Some(LevelFilter::INFO));
        assert_eq!(
            build_filter(2, false, Some("life=loud")).max_level_hint(),
            Some(LevelFilter::DEBUG)
        );
    }

    #[test]
    fn quiet_ignores_rust_log() {
        let filter = build_filter(0, true, Some("trace"));
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::OFF));
    }
}
