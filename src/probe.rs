//! [`ContextProbe`] backed by SDL and the current GL context.

use std::ffi::CStr;

use sdl2::video::GLProfile;
use sdl2::VideoSubsystem;

use crate::config::Profile;
use crate::report::{ContextProbe, GlInteger, GlString};
use crate::version::VersionTriple;

/// Reads from the context made current by [`crate::session::Session`].
pub struct GlProbe<'a> {
    video: &'a VideoSubsystem,
}

impl<'a> GlProbe<'a> {
    pub fn new(video: &'a VideoSubsystem) -> Self {
        Self { video }
    }
}

/// Copy a GL-owned string; null reads as empty.
///
/// # Safety
///
/// `ptr` must be null or point to a NUL-terminated string.
unsafe fn gl_str(ptr: *const gl::types::GLubyte) -> String {
    if ptr.is_null() {
        return String::new();
    }
    CStr::from_ptr(ptr.cast()).to_string_lossy().into_owned()
}

impl ContextProbe for GlProbe<'_> {
    fn header_version(&self) -> VersionTriple {
        VersionTriple::sdl_header()
    }

    fn runtime_version(&self) -> VersionTriple {
        VersionTriple::sdl_runtime()
    }

    fn library_version_string(&self) -> String {
        sdl2::version::revision()
    }

    fn gl_string(&self, name: GlString) -> String {
        let name = match name {
            GlString::Version => gl::VERSION,
            GlString::Renderer => gl::RENDERER,
            GlString::Vendor => gl::VENDOR,
            GlString::ShadingLanguageVersion => gl::SHADING_LANGUAGE_VERSION,
            GlString::Extensions => gl::EXTENSIONS,
        };
        unsafe { gl_str(gl::GetString(name)) }
    }

    fn gl_integer(&self, name: GlInteger) -> u32 {
        let name = match name {
            GlInteger::ContextFlags => gl::CONTEXT_FLAGS,
            GlInteger::ProfileMask => gl::CONTEXT_PROFILE_MASK,
            GlInteger::ResetNotificationStrategy => gl::RESET_NOTIFICATION_STRATEGY,
            GlInteger::NumExtensions => gl::NUM_EXTENSIONS,
        };
        let mut value = 0;
        unsafe {
            gl::GetIntegerv(name, &mut value);
        }
        value as u32
    }

    fn library_forward_compat(&self) -> bool {
        self.video.gl_attr().context_flags().has_forward_compatible()
    }

    fn library_profile(&self) -> Option<Profile> {
        match self.video.gl_attr().context_profile() {
            GLProfile::Core => Some(Profile::Core),
            GLProfile::Compatibility => Some(Profile::Compat),
            GLProfile::GLES => Some(Profile::Es2),
            _ => None,
        }
    }

    fn indexed_extensions(&self) -> Option<Vec<String>> {
        if !gl::GetStringi::is_loaded() {
            return None;
        }

        let count = self.gl_integer(GlInteger::NumExtensions);
        let extensions = (0..count)
            .map(|index| unsafe { gl_str(gl::GetStringi(gl::EXTENSIONS, index)) })
            .collect();
        Some(extensions)
    }
}
