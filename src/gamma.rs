//! Gamma adjustment state machine and the interactive loop around it.
//!
//! [`GammaState::dispatch`] is pure: it takes the current state and one
//! [`Event`] and returns the next state plus at most one [`Effect`] for the
//! loop to carry out against the window and GL context.

use crate::input::{self, Event, Key, KeyAction};
use crate::scene;
use crate::session::{BootstrapError, Session};

/// Gamma at startup.
pub const INITIAL_GAMMA: f32 = 1.0;

/// Amount added or removed per key press.
pub const GAMMA_STEP: f32 = 0.1;

/// A decrease is applied only if the result stays above this value.
pub const GAMMA_FLOOR: f32 = 1e-3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    Open,
    Closed,
}

/// Side effects requested by the dispatch function.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Apply this gamma to the display and echo it.
    SetGamma(f32),
    /// Resize the GL viewport to the new surface size.
    Viewport { width: u32, height: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GammaState {
    gamma: f32,
    phase: LoopPhase,
}

impl Default for GammaState {
    fn default() -> Self {
        Self::new()
    }
}

impl GammaState {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            gamma: INITIAL_GAMMA,
            phase: LoopPhase::Open,
        }
    }

    #[must_use]
    pub const fn gamma(&self) -> f32 {
        self.gamma
    }

    #[must_use]
    pub const fn phase(&self) -> LoopPhase {
        self.phase
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.phase == LoopPhase::Open
    }

    /// Compute the state following `event`.
    #[must_use]
    pub fn dispatch(self, event: &Event) -> (Self, Option<Effect>) {
        if !self.is_open() {
            return (self, None);
        }

        match *event {
            Event::Close => (self.closed(), None),
            Event::Resize { width, height } => (self, Some(Effect::Viewport { width, height })),
            Event::Key {
                action: KeyAction::Press,
                key,
            } => self.on_key_press(key),
            Event::Key { .. } => (self, None),
        }
    }

    fn on_key_press(self, key: Key) -> (Self, Option<Effect>) {
        match key {
            Key::Escape => (self.closed(), None),
            Key::Q | Key::KeypadAdd => self.with_gamma(self.gamma + GAMMA_STEP),
            Key::W | Key::KeypadSubtract => {
                let lowered = self.gamma - GAMMA_STEP;
                if lowered > GAMMA_FLOOR {
                    self.with_gamma(lowered)
                } else {
                    (self, None)
                }
            }
            Key::Other => (self, None),
        }
    }

    fn with_gamma(self, gamma: f32) -> (Self, Option<Effect>) {
        (Self { gamma, ..self }, Some(Effect::SetGamma(gamma)))
    }

    fn closed(self) -> Self {
        Self {
            phase: LoopPhase::Closed,
            ..self
        }
    }
}

/// Text echoed whenever gamma is applied.
#[must_use]
pub fn gamma_line(gamma: f32) -> String {
    format!("Gamma: {:.6}", gamma)
}

/// Run the interactive loop until the window is closed.
pub fn run(session: &mut Session) -> Result<(), BootstrapError> {
    let mut event_pump = session.event_pump()?;
    let mut state = GammaState::new();
    let mut viewport = session.drawable_size();

    apply_effect(session, &mut viewport, Effect::SetGamma(state.gamma()));
    scene::set_viewport(viewport.0, viewport.1);

    while state.is_open() {
        scene::draw(viewport.0, viewport.1);
        session.window().gl_swap_window();

        for sdl_event in event_pump.poll_iter() {
            let Some(event) = input::translate(&sdl_event) else {
                continue;
            };
            let (next, effect) = state.dispatch(&event);
            state = next;
            if let Some(effect) = effect {
                apply_effect(session, &mut viewport, effect);
            }
        }
    }

    log::info!("Window closed at gamma {}", state.gamma());
    Ok(())
}

fn apply_effect(session: &mut Session, viewport: &mut (u32, u32), effect: Effect) {
    match effect {
        Effect::SetGamma(gamma) => {
            println!("{}", gamma_line(gamma));
            if let Err(err) = session.window_mut().set_brightness(f64::from(gamma)) {
                log::warn!("SDL2 set brightness failed: {}", err);
            }
        }
        Effect::Viewport { width, height } => {
            log::debug!("Viewport resized to {}x{}", width, height);
            *viewport = (width, height);
            scene::set_viewport(width, height);
        }
    }
}
