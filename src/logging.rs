//! Logging setup shared by both tools.
//!
//! Diagnostics go through the `log` facade to stderr so they never mix with
//! the report printed on stdout. `RUST_LOG` overrides the default level.

use log::LevelFilter;

/// Log levels, from quietest to noisiest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Nothing,
    Error,
    #[default]
    Warning,
    Info,
    Debug,
    All,
}

impl LogLevel {
    #[must_use]
    pub fn as_filter(self) -> LevelFilter {
        match self {
            LogLevel::Nothing => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warning => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::All => LevelFilter::Trace,
        }
    }
}

/// Install the stderr logger.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init(level: LogLevel) {
    let _ = env_logger::Builder::new()
        .filter_level(level.as_filter())
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_filter() {
        assert_eq!(LogLevel::Nothing.as_filter(), LevelFilter::Off);
        assert_eq!(LogLevel::Warning.as_filter(), LevelFilter::Warn);
        assert_eq!(LogLevel::All.as_filter(), LevelFilter::Trace);
    }

    #[test]
    fn test_init_twice() {
        init(LogLevel::Debug);
        init(LogLevel::Error);
        log::debug!("logger initialized");
    }
}
