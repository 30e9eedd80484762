//! Command-line parsing for the `gamma` and `glinfo` tools.
//!
//! Both tools take single-character flags only. clap's generated help and
//! version flags are turned off: `-h` is an ordinary flag here, and the
//! caller prints the fixed usage text and picks the exit status.
//!
//! Flags are processed left to right: a repeated flag stays set, the last
//! value given for an option wins, and `-h` takes effect if it appears before
//! the first unrecognized option.

use std::ffi::OsString;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::Parser;

use crate::config::{
    parse_profile, parse_strategy, parse_version_component, ConfigError, DisplayMode,
    GammaConfig, InfoConfig,
};

const GAMMA_FLAGS: &str = "hf";
const GAMMA_VALUE_FLAGS: &str = "";

const INFO_FLAGS: &str = "hdflmnpr";
const INFO_VALUE_FLAGS: &str = "mnpr";

pub const GAMMA_USAGE: &str = "Usage: gamma [-h] [-f]\n";

pub const INFO_USAGE: &str = "\
Usage: glinfo [-h] [-m MAJOR] [-n MINOR] [-d] [-l] [-f] [-p PROFILE] [-r STRATEGY]
available profiles: core compat es2
available strategies: none lose
";

/// Outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command<T> {
    /// Run the tool with the parsed configuration.
    Run(T),
    /// `-h` was given; print usage and exit successfully.
    Help,
}

/// Gamma correction test
#[derive(Parser, Debug, Default)]
#[command(
    name = "gamma",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct GammaCli {
    /// Print usage and exit
    #[arg(short = 'h')]
    pub help: bool,

    /// Use a fullscreen surface at desktop resolution
    #[arg(short = 'f')]
    pub fullscreen: bool,
}

impl GammaCli {
    #[must_use]
    pub fn into_config(self) -> GammaConfig {
        GammaConfig {
            mode: if self.fullscreen {
                DisplayMode::Fullscreen
            } else {
                DisplayMode::Windowed
            },
        }
    }
}

/// Window system and OpenGL version information dumper
#[derive(Parser, Debug, Default)]
#[command(
    name = "glinfo",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct InfoCli {
    /// Print usage and exit
    #[arg(short = 'h')]
    pub help: bool,

    /// Request a debug context
    #[arg(short = 'd')]
    pub debug: bool,

    /// Request a forward-compatible context
    #[arg(short = 'f')]
    pub forward: bool,

    /// List supported extensions
    #[arg(short = 'l')]
    pub list: bool,

    /// Requested context major version
    #[arg(short = 'm', value_name = "MAJOR", allow_hyphen_values = true)]
    pub major: Option<String>,

    /// Requested context minor version
    #[arg(short = 'n', value_name = "MINOR", allow_hyphen_values = true)]
    pub minor: Option<String>,

    /// Context profile (core, compat, es2)
    #[arg(short = 'p', value_name = "PROFILE", allow_hyphen_values = true)]
    pub profile: Option<String>,

    /// Robustness strategy (none, lose)
    #[arg(short = 'r', value_name = "STRATEGY", allow_hyphen_values = true)]
    pub strategy: Option<String>,
}

impl InfoCli {
    /// Resolve the raw flag values into an [`InfoConfig`].
    pub fn into_config(self) -> Result<InfoConfig, ConfigError> {
        let mut config = InfoConfig {
            debug: self.debug,
            forward_compat: self.forward,
            list_extensions: self.list,
            ..InfoConfig::default()
        };

        if let Some(ref major) = self.major {
            config.major = parse_version_component('m', major)?;
        }
        if let Some(ref minor) = self.minor {
            config.minor = parse_version_component('n', minor)?;
        }
        if let Some(ref profile) = self.profile {
            config.profile = Some(parse_profile(profile)?);
        }
        if let Some(ref strategy) = self.strategy {
            config.strategy = Some(parse_strategy(strategy)?);
        }

        Ok(config)
    }
}

/// Parse the gamma tool's arguments. The first item is the program name.
pub fn parse_gamma_args<I, T>(args: I) -> Result<Command<GammaConfig>, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if help_requested(&args, GAMMA_FLAGS, GAMMA_VALUE_FLAGS) {
        return Ok(Command::Help);
    }
    let cli = GammaCli::try_parse_from(args).map_err(config_error)?;
    if cli.help {
        return Ok(Command::Help);
    }
    Ok(Command::Run(cli.into_config()))
}

/// Parse the info tool's arguments. The first item is the program name.
pub fn parse_info_args<I, T>(args: I) -> Result<Command<InfoConfig>, ConfigError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if help_requested(&args, INFO_FLAGS, INFO_VALUE_FLAGS) {
        return Ok(Command::Help);
    }
    let cli = InfoCli::try_parse_from(args).map_err(config_error)?;
    if cli.help {
        return Ok(Command::Help);
    }
    cli.into_config().map(Command::Run)
}

/// Scan short-flag clusters in order and report whether `-h` is reached
/// before anything unrecognized. Option values are skipped, not checked.
fn help_requested(args: &[OsString], flags: &str, value_flags: &str) -> bool {
    let mut tokens = args.iter().skip(1);
    while let Some(token) = tokens.next() {
        let Some(token) = token.to_str() else {
            return false;
        };
        let Some(cluster) = token.strip_prefix('-') else {
            return false;
        };
        if cluster.is_empty() || cluster.starts_with('-') {
            return false;
        }

        for (i, flag) in cluster.char_indices() {
            if !flags.contains(flag) {
                return false;
            }
            if flag == 'h' {
                return true;
            }
            if value_flags.contains(flag) {
                // An attached value ends the cluster; otherwise it is the next token
                if i + flag.len_utf8() == cluster.len() {
                    tokens.next();
                }
                break;
            }
        }
    }
    false
}

fn config_error(err: clap::Error) -> ConfigError {
    let arg = match err.get(ContextKind::InvalidArg) {
        Some(ContextValue::String(arg)) => arg.clone(),
        _ => String::new(),
    };

    match err.kind() {
        ErrorKind::UnknownArgument if arg.starts_with('-') => ConfigError::UnknownOption(arg),
        ErrorKind::UnknownArgument => ConfigError::UnexpectedArgument(arg),
        ErrorKind::InvalidValue | ErrorKind::NoEquals => ConfigError::MissingValue(arg),
        kind => ConfigError::Other(kind.to_string()),
    }
}
