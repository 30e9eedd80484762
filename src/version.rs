//! Version triples for the windowing library and the OpenGL context.

use std::fmt;

/// A `major.minor.revision` version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct VersionTriple {
    pub major: u32,
    pub minor: u32,
    pub revision: u32,
}

/// Prefixes some implementations put in front of an ES version string.
const GL_VERSION_PREFIXES: [&str; 3] = ["OpenGL ES-CM ", "OpenGL ES-CL ", "OpenGL ES "];

impl VersionTriple {
    #[must_use]
    pub const fn new(major: u32, minor: u32, revision: u32) -> Self {
        Self {
            major,
            minor,
            revision,
        }
    }

    /// Version of the SDL headers the crate was compiled against.
    #[must_use]
    pub fn sdl_header() -> Self {
        Self::new(
            sdl2::sys::SDL_MAJOR_VERSION as u32,
            sdl2::sys::SDL_MINOR_VERSION as u32,
            sdl2::sys::SDL_PATCHLEVEL as u32,
        )
    }

    /// Version of the SDL library loaded at runtime.
    #[must_use]
    pub fn sdl_runtime() -> Self {
        let version = sdl2::version::version();
        Self::new(
            u32::from(version.major),
            u32::from(version.minor),
            u32::from(version.patch),
        )
    }

    /// Parse a `GL_VERSION` string such as `"4.6.0 NVIDIA 535.54"` or
    /// `"OpenGL ES 3.2 Mesa 23.1"`.
    ///
    /// The revision defaults to 0 when absent. Returns `None` if no
    /// `major.minor` pair can be read.
    #[must_use]
    pub fn parse_gl_version(version: &str) -> Option<Self> {
        let mut rest = version;
        for prefix in GL_VERSION_PREFIXES {
            if let Some(stripped) = rest.strip_prefix(prefix) {
                rest = stripped;
                break;
            }
        }

        let number = rest.split_whitespace().next()?;
        let mut parts = number.split('.');
        let major = leading_number(parts.next()?)?;
        let minor = leading_number(parts.next()?)?;
        let revision = parts.next().and_then(leading_number).unwrap_or(0);

        Some(Self::new(major, minor, revision))
    }

    /// Whether this version is at least `major.minor`.
    #[must_use]
    pub fn at_least(&self, major: u32, minor: u32) -> bool {
        self.major > major || (self.major == major && self.minor >= minor)
    }
}

fn leading_number(s: &str) -> Option<u32> {
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    s[..end].parse().ok()
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.revision)
    }
}
