//! Typed configuration records built from the command line.

use thiserror::Error;

/// Names accepted by `-p`.
pub const PROFILE_NAME_CORE: &str = "core";
pub const PROFILE_NAME_COMPAT: &str = "compat";
pub const PROFILE_NAME_ES2: &str = "es2";

/// Names accepted by `-r`.
pub const STRATEGY_NAME_NONE: &str = "none";
pub const STRATEGY_NAME_LOSE: &str = "lose";

/// Errors produced while turning arguments into a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("unrecognized option: {0}")]
    UnknownOption(String),

    #[error("missing value for option {0}")]
    MissingValue(String),

    #[error("invalid number for {flag}: {value}")]
    InvalidNumber { flag: char, value: String },

    #[error("invalid profile: {0}")]
    InvalidProfile(String),

    #[error("invalid robustness strategy: {0}")]
    InvalidStrategy(String),

    #[error("unexpected argument: {0}")]
    UnexpectedArgument(String),

    #[error("{0}")]
    Other(String),
}

/// Whether the surface is a desktop window or covers the whole display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Windowed,
    Fullscreen,
}

impl DisplayMode {
    #[must_use]
    pub const fn is_fullscreen(self) -> bool {
        matches!(self, Self::Fullscreen)
    }
}

/// OpenGL context profile selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    Core,
    Compat,
    Es2,
}

impl Profile {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Core => PROFILE_NAME_CORE,
            Self::Compat => PROFILE_NAME_COMPAT,
            Self::Es2 => PROFILE_NAME_ES2,
        }
    }
}

/// Context behavior after a GPU reset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetStrategy {
    /// No reset notification is delivered.
    NoNotification,
    /// The context is lost on reset.
    LoseContext,
}

impl ResetStrategy {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::NoNotification => STRATEGY_NAME_NONE,
            Self::LoseContext => STRATEGY_NAME_LOSE,
        }
    }
}

/// Configuration of the gamma tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GammaConfig {
    pub mode: DisplayMode,
}

/// Configuration of the info tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoConfig {
    pub major: u8,
    pub minor: u8,
    pub debug: bool,
    pub forward_compat: bool,
    pub profile: Option<Profile>,
    pub strategy: Option<ResetStrategy>,
    pub list_extensions: bool,
}

impl Default for InfoConfig {
    fn default() -> Self {
        Self {
            major: 1,
            minor: 0,
            debug: false,
            forward_compat: false,
            profile: None,
            strategy: None,
            list_extensions: false,
        }
    }
}

impl InfoConfig {
    /// The version to request, or `None` when the default 1.0 is left alone.
    #[must_use]
    pub const fn requested_version(&self) -> Option<(u8, u8)> {
        if self.major != 1 || self.minor != 0 {
            Some((self.major, self.minor))
        } else {
            None
        }
    }
}

/// Parse a profile name (case-insensitive).
pub fn parse_profile(s: &str) -> Result<Profile, ConfigError> {
    match s.to_lowercase().as_str() {
        PROFILE_NAME_CORE => Ok(Profile::Core),
        PROFILE_NAME_COMPAT => Ok(Profile::Compat),
        PROFILE_NAME_ES2 => Ok(Profile::Es2),
        _ => Err(ConfigError::InvalidProfile(s.to_string())),
    }
}

/// Parse a robustness strategy name (case-insensitive).
pub fn parse_strategy(s: &str) -> Result<ResetStrategy, ConfigError> {
    match s.to_lowercase().as_str() {
        STRATEGY_NAME_NONE => Ok(ResetStrategy::NoNotification),
        STRATEGY_NAME_LOSE => Ok(ResetStrategy::LoseContext),
        _ => Err(ConfigError::InvalidStrategy(s.to_string())),
    }
}

/// Parse a context version component given to `-m` or `-n`.
pub fn parse_version_component(flag: char, s: &str) -> Result<u8, ConfigError> {
    s.trim().parse().map_err(|_| ConfigError::InvalidNumber {
        flag,
        value: s.to_string(),
    })
}
