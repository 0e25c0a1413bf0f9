use std::io::IsTerminal;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive that overrides the CLI verbosity
pub const LOG_ENV_VAR: &str = "GOSOURCES_LOG";

/// Maps `-q` / `-v` flags to a level: quiet shows errors only, default shows warnings,
/// each `-v` adds one level down to trace.
pub fn verbosity_level(quiet: bool, verbose: u8) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::ERROR,
        (false, 0) => LevelFilter::WARN,
        (false, 1) => LevelFilter::INFO,
        (false, 2) => LevelFilter::DEBUG,
        (false, _) => LevelFilter::TRACE,
    }
}

/// Installs a stderr subscriber for console diagnostics.
///
/// Does nothing if a global subscriber is already set.
pub fn init_logging(level: LevelFilter) {
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .with_env_var(LOG_ENV_VAR)
        .from_env_lossy();

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(stderr_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_level() {
        assert_eq!(verbosity_level(false, 0), LevelFilter::WARN);
        assert_eq!(verbosity_level(false, 1), LevelFilter::INFO);
        assert_eq!(verbosity_level(false, 2), LevelFilter::DEBUG);
        assert_eq!(verbosity_level(false, 3), LevelFilter::TRACE);
        assert_eq!(verbosity_level(false, 9), LevelFilter::TRACE);
        assert_eq!(verbosity_level(true, 0), LevelFilter::ERROR);
    }

    #[test]
    fn test_init_logging_twice() {
        init_logging(LevelFilter::WARN);
        init_logging(LevelFilter::DEBUG);
    }
}
