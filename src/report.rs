//! Version and capability report for the info tool.
//!
//! The report is written against [`ContextProbe`] so that the formatting and
//! version gating can be exercised without a display. [`crate::probe::GlProbe`]
//! is the implementation backed by SDL and a live GL context.

use std::io::Write;

use thiserror::Error;

use crate::config::{
    Profile, PROFILE_NAME_COMPAT, PROFILE_NAME_CORE, STRATEGY_NAME_LOSE, STRATEGY_NAME_NONE,
};
use crate::version::VersionTriple;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("OpenGL function {0} is not available")]
    MissingCapability(&'static str),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

/// Strings readable through `glGetString`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlString {
    Version,
    Renderer,
    Vendor,
    ShadingLanguageVersion,
    Extensions,
}

/// Integers readable through `glGetIntegerv`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlInteger {
    ContextFlags,
    ProfileMask,
    ResetNotificationStrategy,
    NumExtensions,
}

/// Source of everything the report prints.
pub trait ContextProbe {
    /// Library version the crate was compiled against.
    fn header_version(&self) -> VersionTriple;
    /// Library version loaded at runtime.
    fn runtime_version(&self) -> VersionTriple;
    fn library_version_string(&self) -> String;
    fn gl_string(&self, name: GlString) -> String;
    fn gl_integer(&self, name: GlInteger) -> u32;
    /// Forward-compatible flag as recorded by the windowing library.
    fn library_forward_compat(&self) -> bool;
    /// Profile as recorded by the windowing library, `None` if unrecognized.
    fn library_profile(&self) -> Option<Profile>;
    /// Extensions enumerated by index, or `None` when the indexed query
    /// function was not loaded.
    fn indexed_extensions(&self) -> Option<Vec<String>>;
}

const CONTEXT_FLAGS: [(u32, &str); 3] = [
    (gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT, "forward-compatible"),
    (gl::CONTEXT_FLAG_DEBUG_BIT, "debug"),
    (gl::CONTEXT_FLAG_ROBUST_ACCESS_BIT, "robust-access"),
];

/// Names of the set context flag bits, or `none`.
#[must_use]
pub fn context_flag_names(flags: u32) -> String {
    let names: Vec<&str> = CONTEXT_FLAGS
        .iter()
        .filter(|(bit, _)| flags & bit != 0)
        .map(|(_, name)| *name)
        .collect();

    if names.is_empty() {
        "none".to_string()
    } else {
        names.join(" ")
    }
}

/// Name for a `GL_CONTEXT_PROFILE_MASK` value. Compatibility wins if both
/// bits are set.
#[must_use]
pub fn profile_mask_name(mask: u32) -> &'static str {
    if mask & gl::CONTEXT_COMPATIBILITY_PROFILE_BIT != 0 {
        PROFILE_NAME_COMPAT
    } else if mask & gl::CONTEXT_CORE_PROFILE_BIT != 0 {
        PROFILE_NAME_CORE
    } else {
        "unknown"
    }
}

#[must_use]
pub fn library_profile_name(profile: Option<Profile>) -> &'static str {
    profile.map_or("unknown", Profile::name)
}

#[must_use]
pub fn reset_strategy_name(strategy: u32) -> &'static str {
    match strategy {
        gl::NO_RESET_NOTIFICATION => STRATEGY_NAME_NONE,
        gl::LOSE_CONTEXT_ON_RESET => STRATEGY_NAME_LOSE,
        _ => "unknown",
    }
}

/// Write the full report.
pub fn write_report<W, P>(out: &mut W, probe: &P, list_extensions: bool) -> Result<(), ReportError>
where
    W: Write,
    P: ContextProbe + ?Sized,
{
    let header = probe.header_version();
    let runtime = probe.runtime_version();

    writeln!(out, "SDL header version: {}", header)?;
    writeln!(out, "SDL library version: {}", runtime)?;
    if header != runtime {
        writeln!(out, "*** WARNING: SDL version mismatch! ***")?;
    }
    writeln!(
        out,
        "SDL library version string: \"{}\"",
        probe.library_version_string()
    )?;

    let version_string = probe.gl_string(GlString::Version);
    writeln!(out, "OpenGL context version string: \"{}\"", version_string)?;

    let version = VersionTriple::parse_gl_version(&version_string).unwrap_or_else(|| {
        log::warn!("Unparseable OpenGL version string: {:?}", version_string);
        VersionTriple::default()
    });
    writeln!(out, "OpenGL context version parsed: {}", version)?;

    if version.major >= 3 {
        let flags = probe.gl_integer(GlInteger::ContextFlags);
        writeln!(out, "OpenGL context flags: {}", context_flag_names(flags))?;
        writeln!(
            out,
            "OpenGL forward-compatible flag reported by SDL: {}",
            probe.library_forward_compat()
        )?;

        if flags & gl::CONTEXT_FLAG_ROBUST_ACCESS_BIT != 0 {
            let strategy = probe.gl_integer(GlInteger::ResetNotificationStrategy);
            writeln!(
                out,
                "OpenGL robustness strategy: {} ({:#010x})",
                reset_strategy_name(strategy),
                strategy
            )?;
        }
    }

    if version.at_least(3, 2) {
        let mask = probe.gl_integer(GlInteger::ProfileMask);
        writeln!(
            out,
            "OpenGL profile mask: {} ({:#010x})",
            profile_mask_name(mask),
            mask
        )?;
        writeln!(
            out,
            "OpenGL profile reported by SDL: {}",
            library_profile_name(probe.library_profile())
        )?;
    }

    writeln!(
        out,
        "OpenGL context renderer string: \"{}\"",
        probe.gl_string(GlString::Renderer)
    )?;
    writeln!(
        out,
        "OpenGL context vendor string: \"{}\"",
        probe.gl_string(GlString::Vendor)
    )?;

    if version.major > 1 {
        writeln!(
            out,
            "OpenGL context shading language version: \"{}\"",
            probe.gl_string(GlString::ShadingLanguageVersion)
        )?;
    }

    if list_extensions {
        write_extensions(out, probe, version.major)?;
    }

    Ok(())
}

/// List supported extensions, one per line, followed by an empty line.
///
/// Contexts newer than 2.x are enumerated by index; older ones split the
/// legacy space-separated string.
pub fn write_extensions<W, P>(out: &mut W, probe: &P, major: u32) -> Result<(), ReportError>
where
    W: Write,
    P: ContextProbe + ?Sized,
{
    writeln!(out, "OpenGL context supported extensions:")?;

    if major > 2 {
        let extensions = probe
            .indexed_extensions()
            .ok_or(ReportError::MissingCapability("glGetStringi"))?;
        for extension in extensions {
            writeln!(out, "{}", extension)?;
        }
    } else {
        let extensions = probe.gl_string(GlString::Extensions);
        write!(out, "{}", extensions.replace(' ', "\n"))?;
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_flag_names() {
        assert_eq!(context_flag_names(0), "none");
        assert_eq!(
            context_flag_names(gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT),
            "forward-compatible"
        );
        assert_eq!(
            context_flag_names(
                gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT | gl::CONTEXT_FLAG_DEBUG_BIT
            ),
            "forward-compatible debug"
        );
        assert_eq!(context_flag_names(0x100), "none");
    }

    #[test]
    fn test_profile_mask_name() {
        assert_eq!(profile_mask_name(gl::CONTEXT_CORE_PROFILE_BIT), "core");
        assert_eq!(profile_mask_name(gl::CONTEXT_COMPATIBILITY_PROFILE_BIT), "compat");
        assert_eq!(
            profile_mask_name(gl::CONTEXT_CORE_PROFILE_BIT | gl::CONTEXT_COMPATIBILITY_PROFILE_BIT),
            "compat"
        );
        assert_eq!(profile_mask_name(0), "unknown");
    }

    #[test]
    fn test_library_profile_name() {
        assert_eq!(library_profile_name(Some(Profile::Core)), "core");
        assert_eq!(library_profile_name(Some(Profile::Es2)), "es2");
        assert_eq!(library_profile_name(None), "unknown");
    }

    #[test]
    fn test_reset_strategy_name() {
        assert_eq!(reset_strategy_name(gl::NO_RESET_NOTIFICATION), "none");
        assert_eq!(reset_strategy_name(gl::LOSE_CONTEXT_ON_RESET), "lose");
        assert_eq!(reset_strategy_name(0), "unknown");
    }
}
