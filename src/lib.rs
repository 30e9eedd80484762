//! Command-line probes for an SDL2 window and its OpenGL context.
//!
//! Two binaries sit on top of this library:
//! - `gamma` opens a window and lets the user adjust display gamma from the
//!   keyboard;
//! - `glinfo` creates a context with the requested hints and prints version
//!   and capability information about SDL and OpenGL.

pub mod cli;
pub mod config;
pub mod gamma;
pub mod input;
pub mod logging;
pub mod probe;
pub mod report;
pub mod scene;
pub mod session;
pub mod version;

pub use cli::Command;
pub use config::{ConfigError, GammaConfig, InfoConfig};
pub use logging::LogLevel;
pub use session::{BootstrapError, Session};
