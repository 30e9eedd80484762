//! Integration tests for the info tool's report.
//!
//! A scripted probe stands in for SDL and the GL context so the output can
//! be checked line by line without a display.

use glprobe::config::Profile;
use glprobe::report::{write_report, ContextProbe, GlInteger, GlString, ReportError};
use glprobe::version::VersionTriple;

struct FakeProbe {
    header: VersionTriple,
    runtime: VersionTriple,
    gl_version: &'static str,
    context_flags: u32,
    profile_mask: u32,
    reset_strategy: u32,
    forward_compat: bool,
    profile: Option<Profile>,
    legacy_extensions: &'static str,
    indexed_extensions: Option<Vec<String>>,
}

impl Default for FakeProbe {
    fn default() -> Self {
        Self {
            header: VersionTriple::new(2, 30, 0),
            runtime: VersionTriple::new(2, 30, 0),
            gl_version: "2.1 Mesa 23.1.4",
            context_flags: 0,
            profile_mask: 0,
            reset_strategy: 0,
            forward_compat: false,
            profile: None,
            legacy_extensions: "GL_ARB_multitexture GL_EXT_bgra",
            indexed_extensions: None,
        }
    }
}

impl ContextProbe for FakeProbe {
    fn header_version(&self) -> VersionTriple {
        self.header
    }

    fn runtime_version(&self) -> VersionTriple {
        self.runtime
    }

    fn library_version_string(&self) -> String {
        "release-2.30.0".to_string()
    }

    fn gl_string(&self, name: GlString) -> String {
        match name {
            GlString::Version => self.gl_version,
            GlString::Renderer => "llvmpipe",
            GlString::Vendor => "Mesa",
            GlString::ShadingLanguageVersion => "1.20",
            GlString::Extensions => self.legacy_extensions,
        }
        .to_string()
    }

    fn gl_integer(&self, name: GlInteger) -> u32 {
        match name {
            GlInteger::ContextFlags => self.context_flags,
            GlInteger::ProfileMask => self.profile_mask,
            GlInteger::ResetNotificationStrategy => self.reset_strategy,
            GlInteger::NumExtensions => {
                self.indexed_extensions.as_ref().map_or(0, |e| e.len() as u32)
            }
        }
    }

    fn library_forward_compat(&self) -> bool {
        self.forward_compat
    }

    fn library_profile(&self) -> Option<Profile> {
        self.profile
    }

    fn indexed_extensions(&self) -> Option<Vec<String>> {
        self.indexed_extensions.clone()
    }
}

fn report(probe: &FakeProbe, list: bool) -> String {
    let mut out = Vec::new();
    write_report(&mut out, probe, list).unwrap();
    String::from_utf8(out).unwrap()
}

fn core_33() -> FakeProbe {
    FakeProbe {
        gl_version: "3.3.0 NVIDIA 535.54.03",
        context_flags: gl::CONTEXT_FLAG_FORWARD_COMPATIBLE_BIT,
        profile_mask: gl::CONTEXT_CORE_PROFILE_BIT,
        forward_compat: true,
        profile: Some(Profile::Core),
        indexed_extensions: Some(vec![
            "GL_ARB_debug_output".to_string(),
            "GL_ARB_robustness".to_string(),
        ]),
        ..FakeProbe::default()
    }
}

#[test]
fn test_legacy_context_report() {
    let text = report(&FakeProbe::default(), false);
    assert_eq!(
        text,
        "SDL header version: 2.30.0\n\
         SDL library version: 2.30.0\n\
         SDL library version string: \"release-2.30.0\"\n\
         OpenGL context version string: \"2.1 Mesa 23.1.4\"\n\
         OpenGL context version parsed: 2.1.0\n\
         OpenGL context renderer string: \"llvmpipe\"\n\
         OpenGL context vendor string: \"Mesa\"\n\
         OpenGL context shading language version: \"1.20\"\n"
    );
}

#[test]
fn test_version_mismatch_warning() {
    let probe = FakeProbe {
        runtime: VersionTriple::new(2, 30, 2),
        ..FakeProbe::default()
    };
    let text = report(&probe, false);
    assert!(text.contains("SDL library version: 2.30.2\n*** WARNING: SDL version mismatch! ***\n"));
}

#[test]
fn test_no_warning_when_versions_match() {
    let text = report(&FakeProbe::default(), false);
    assert!(!text.contains("WARNING"));
}

#[test]
fn test_core_context_report() {
    let text = report(&core_33(), false);
    assert!(text.contains("OpenGL context version parsed: 3.3.0\n"));
    assert!(text.contains("OpenGL context flags: forward-compatible\n"));
    assert!(text.contains("OpenGL forward-compatible flag reported by SDL: true\n"));
    assert!(text.contains("OpenGL profile mask: core (0x00000001)\n"));
    assert!(text.contains("OpenGL profile reported by SDL: core\n"));
    assert!(!text.contains("robustness strategy"));
}

#[test]
fn test_context_flags_without_profile_before_3_2() {
    let probe = FakeProbe {
        gl_version: "3.1 Mesa 10.0",
        ..FakeProbe::default()
    };
    let text = report(&probe, false);
    assert!(text.contains("OpenGL context flags: none\n"));
    assert!(text.contains("OpenGL forward-compatible flag reported by SDL: false\n"));
    assert!(!text.contains("OpenGL profile mask"));
}

#[test]
fn test_robust_context_reports_strategy() {
    let probe = FakeProbe {
        context_flags: gl::CONTEXT_FLAG_ROBUST_ACCESS_BIT,
        reset_strategy: gl::LOSE_CONTEXT_ON_RESET,
        ..core_33()
    };
    let text = report(&probe, false);
    assert!(text.contains("OpenGL context flags: robust-access\n"));
    assert!(text.contains("OpenGL robustness strategy: lose (0x00008252)\n"));
}

#[test]
fn test_gl_1x_has_no_shading_language_line() {
    let probe = FakeProbe {
        gl_version: "1.4.0",
        ..FakeProbe::default()
    };
    let text = report(&probe, false);
    assert!(text.contains("OpenGL context version parsed: 1.4.0\n"));
    assert!(!text.contains("shading language"));
}

#[test]
fn test_legacy_extension_listing() {
    let text = report(&FakeProbe::default(), true);
    assert!(text.ends_with(
        "OpenGL context supported extensions:\nGL_ARB_multitexture\nGL_EXT_bgra\n"
    ));
}

#[test]
fn test_indexed_extension_listing() {
    let text = report(&core_33(), true);
    assert!(text.ends_with(
        "OpenGL context supported extensions:\nGL_ARB_debug_output\nGL_ARB_robustness\n\n"
    ));
}

#[test]
fn test_missing_indexed_query_is_fatal() {
    let probe = FakeProbe {
        indexed_extensions: None,
        ..core_33()
    };
    let mut out = Vec::new();
    let err = write_report(&mut out, &probe, true).unwrap_err();
    assert!(matches!(err, ReportError::MissingCapability("glGetStringi")));
}

#[test]
fn test_missing_indexed_query_ignored_without_listing() {
    let probe = FakeProbe {
        indexed_extensions: None,
        ..core_33()
    };
    let mut out = Vec::new();
    assert!(write_report(&mut out, &probe, false).is_ok());
}

#[test]
fn test_es_context_version_is_parsed() {
    let probe = FakeProbe {
        gl_version: "OpenGL ES 3.2 Mesa 23.1.4",
        profile: Some(Profile::Es2),
        indexed_extensions: Some(Vec::new()),
        ..FakeProbe::default()
    };
    let text = report(&probe, false);
    assert!(text.contains("OpenGL context version parsed: 3.2.0\n"));
    assert!(text.contains("OpenGL profile reported by SDL: es2\n"));
    assert!(text.contains("OpenGL profile mask: unknown (0x00000000)\n"));
}

#[test]
fn test_unparseable_version_reports_zero() {
    let probe = FakeProbe {
        gl_version: "",
        ..FakeProbe::default()
    };
    let text = report(&probe, false);
    assert!(text.contains("OpenGL context version parsed: 0.0.0\n"));
    assert!(!text.contains("shading language"));
}
