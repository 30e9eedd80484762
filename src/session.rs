//! Library bootstrap: hints, surface creation and GL loading.
//!
//! Everything here runs once before the tool does its real work. Any
//! failure is returned as a [`BootstrapError`]; nothing is retried.

use sdl2::video::gl_attr::GLAttr;
use sdl2::video::{GLContext, GLProfile, SwapInterval, Window};
use sdl2::{EventPump, Sdl, VideoSubsystem};
use thiserror::Error;

use crate::config::{DisplayMode, InfoConfig, Profile, ResetStrategy};

/// Size of an auto-sized windowed surface.
pub const DEFAULT_WINDOW_SIZE: (u32, u32) = (640, 480);

/// Errors raised while bringing up the library, window or context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BootstrapError {
    #[error("Failed to initialize SDL: {0}")]
    Init(String),

    #[error("Failed to query desktop mode: {0}")]
    DesktopMode(String),

    #[error("Failed to open SDL window: {0}")]
    Window(String),

    #[error("Failed to create OpenGL context: {0}")]
    Context(String),

    #[error("Failed to obtain event pump: {0}")]
    EventPump(String),
}

/// Context flag bits requested together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextFlagRequest {
    pub debug: bool,
    pub forward_compat: bool,
    pub robust_access: bool,
}

/// Receiver of context creation hints.
///
/// Hints must all be issued before the window and context are created.
pub trait HintSink {
    fn hint_version(&mut self, major: u8, minor: u8);
    fn hint_profile(&mut self, profile: Profile);
    fn hint_context_flags(&mut self, flags: ContextFlagRequest);
    fn hint_reset_notification(&mut self, strategy: ResetStrategy);
}

/// Context creation options. Anything left unset keeps the library default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ContextHints {
    pub version: Option<(u8, u8)>,
    pub debug: bool,
    pub forward_compat: bool,
    pub profile: Option<Profile>,
    pub strategy: Option<ResetStrategy>,
}

impl From<&InfoConfig> for ContextHints {
    fn from(config: &InfoConfig) -> Self {
        Self {
            version: config.requested_version(),
            debug: config.debug,
            forward_compat: config.forward_compat,
            profile: config.profile,
            strategy: config.strategy,
        }
    }
}

impl ContextHints {
    /// Issue one call per requested option, and none for the others.
    pub fn apply<S: HintSink + ?Sized>(&self, sink: &mut S) {
        match (self.version, self.profile) {
            (Some((major, minor)), _) => sink.hint_version(major, minor),
            (None, Some(Profile::Es2)) => sink.hint_version(2, 0),
            (None, _) => {}
        }

        if let Some(profile) = self.profile {
            sink.hint_profile(profile);
        }

        let flags = ContextFlagRequest {
            debug: self.debug,
            forward_compat: self.forward_compat,
            robust_access: self.strategy.is_some(),
        };
        if flags != ContextFlagRequest::default() {
            sink.hint_context_flags(flags);
        }

        if let Some(strategy) = self.strategy {
            sink.hint_reset_notification(strategy);
        }
    }
}

impl HintSink for GLAttr<'_> {
    fn hint_version(&mut self, major: u8, minor: u8) {
        log::debug!("hint: context version {}.{}", major, minor);
        self.set_context_version(major, minor);
    }

    fn hint_profile(&mut self, profile: Profile) {
        log::debug!("hint: profile {}", profile.name());
        self.set_context_profile(match profile {
            Profile::Core => GLProfile::Core,
            Profile::Compat => GLProfile::Compatibility,
            Profile::Es2 => GLProfile::GLES,
        });
    }

    fn hint_context_flags(&mut self, flags: ContextFlagRequest) {
        log::debug!("hint: context flags {:?}", flags);
        let mut builder = self.set_context_flags();
        if flags.debug {
            builder.debug();
        }
        if flags.forward_compat {
            builder.forward_compatible();
        }
        if flags.robust_access {
            builder.robust_access();
        }
        builder.set();
    }

    fn hint_reset_notification(&mut self, strategy: ResetStrategy) {
        log::debug!("hint: reset notification {}", strategy.name());
        let value = match strategy {
            ResetStrategy::NoNotification => 0,
            ResetStrategy::LoseContext => 1,
        };
        // SAFETY: plain attribute store, valid before context creation.
        let result = unsafe {
            sdl2::sys::SDL_GL_SetAttribute(
                sdl2::sys::SDL_GLattr::SDL_GL_CONTEXT_RESET_NOTIFICATION,
                value,
            )
        };
        if result != 0 {
            log::warn!("reset notification hint rejected: {}", sdl2::get_error());
        }
    }
}

/// Resolve the surface size for `mode`.
///
/// The desktop resolution is queried only for fullscreen surfaces.
pub fn surface_size<F>(mode: DisplayMode, desktop: F) -> Result<(u32, u32), BootstrapError>
where
    F: FnOnce() -> Result<(u32, u32), BootstrapError>,
{
    match mode {
        DisplayMode::Fullscreen => desktop(),
        DisplayMode::Windowed => Ok(DEFAULT_WINDOW_SIZE),
    }
}

/// What to open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceRequest<'a> {
    pub title: &'a str,
    pub mode: DisplayMode,
    pub hints: ContextHints,
}

/// A live window with a current OpenGL context.
///
/// Dropping the session destroys the context and window and shuts SDL down.
pub struct Session {
    _gl_context: GLContext,
    window: Window,
    video: VideoSubsystem,
    sdl: Sdl,
}

impl Session {
    /// Initialize SDL, apply the hints and open the surface.
    pub fn open(request: &SurfaceRequest<'_>) -> Result<Self, BootstrapError> {
        log::info!("Initializing SDL2");
        let sdl = sdl2::init().map_err(BootstrapError::Init)?;
        let video = sdl.video().map_err(BootstrapError::Init)?;

        request.hints.apply(&mut video.gl_attr());

        let (width, height) = surface_size(request.mode, || desktop_size(&video))?;
        log::info!(
            "Creating {} surface: {}x{}",
            if request.mode.is_fullscreen() { "fullscreen" } else { "windowed" },
            width,
            height
        );

        // Returning early drops `video` and `sdl`, which shuts the library down.
        let mut builder = video.window(request.title, width, height);
        builder.opengl();
        if request.mode.is_fullscreen() {
            builder.fullscreen();
        } else {
            builder.position_centered().resizable();
        }
        let window = builder
            .build()
            .map_err(|e| BootstrapError::Window(e.to_string()))?;

        let gl_context = window.gl_create_context().map_err(BootstrapError::Context)?;
        window
            .gl_make_current(&gl_context)
            .map_err(BootstrapError::Context)?;

        gl::load_with(|name| video.gl_get_proc_address(name) as *const _);

        if let Err(err) = video.gl_set_swap_interval(SwapInterval::VSync) {
            log::warn!("vsync unavailable: {}", err);
        }

        Ok(Self {
            _gl_context: gl_context,
            window,
            video,
            sdl,
        })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }

    pub fn window_mut(&mut self) -> &mut Window {
        &mut self.window
    }

    pub fn video(&self) -> &VideoSubsystem {
        &self.video
    }

    pub fn event_pump(&self) -> Result<EventPump, BootstrapError> {
        self.sdl.event_pump().map_err(BootstrapError::EventPump)
    }

    /// Size of the drawable area in pixels.
    pub fn drawable_size(&self) -> (u32, u32) {
        self.window.drawable_size()
    }
}

fn desktop_size(video: &VideoSubsystem) -> Result<(u32, u32), BootstrapError> {
    let mode = video
        .desktop_display_mode(0)
        .map_err(BootstrapError::DesktopMode)?;
    Ok((mode.w.max(1) as u32, mode.h.max(1) as u32))
}
