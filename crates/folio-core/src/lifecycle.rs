//! Boot-time capability detection, the loading-screen schedule and teardown.

use crate::constants::{LOADING_DELAY_MS, LOADING_FADE_MS};
use crate::error::SiteError;

/// An optional collaborator, detected once at startup.
#[derive(Clone, Debug)]
pub enum Capability<T> {
    Available(T),
    Unavailable,
}

impl<T> Capability<T> {
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Capability::Available(v),
            None => Capability::Unavailable,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Capability::Available(_))
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Capability::Available(v) => Some(v),
            Capability::Unavailable => None,
        }
    }

    /// `EnvironmentUnavailable(name)` when missing.
    pub fn require(&self, name: &str) -> Result<&T, SiteError> {
        self.available()
            .ok_or_else(|| SiteError::EnvironmentUnavailable(name.to_string()))
    }
}

/// Which optional script libraries were found on the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub tweening: bool,
    pub scroll_trigger: bool,
    pub motion_path: bool,
    pub vector_animation: bool,
}

/// Features to start, decided once from [`Capabilities`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BootPlan {
    pub particles: bool,
    pub dot_sync: bool,
    pub nav_links: bool,
    pub sound: bool,
    pub hero_intro: bool,
    pub entrances: bool,
    pub card_hover: bool,
    pub camera_path: bool,
    pub decorations: bool,
    pub breathing: bool,
    pub mascot_reactions: bool,
    pub mascot_path: bool,
    pub mascot_drag: bool,
}

impl BootPlan {
    pub fn from_capabilities(caps: &Capabilities) -> Self {
        let tween = caps.tweening;
        let choreography = caps.tweening && caps.scroll_trigger;
        Self {
            // Native features: always attempted, they fail on their own.
            particles: true,
            dot_sync: true,
            nav_links: true,
            sound: true,
            hero_intro: tween,
            card_hover: tween,
            breathing: tween,
            entrances: choreography,
            camera_path: choreography,
            decorations: choreography,
            mascot_reactions: choreography,
            mascot_path: choreography && caps.motion_path,
            mascot_drag: caps.vector_animation,
        }
    }

    /// True when nothing scroll- or tween-driven will run.
    pub fn is_static(&self) -> bool {
        !(self.hero_intro || self.entrances || self.breathing || self.decorations)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadingPhase {
    Visible,
    FadingOut,
    Hidden,
}

/// Simulated-latency loading screen: hold, fade, hide.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingSchedule {
    pub delay_ms: u32,
    pub fade_ms: u32,
}

impl Default for LoadingSchedule {
    fn default() -> Self {
        Self {
            delay_ms: LOADING_DELAY_MS,
            fade_ms: LOADING_FADE_MS,
        }
    }
}

impl LoadingSchedule {
    pub fn phase_at(&self, elapsed_ms: u32) -> LoadingPhase {
        if elapsed_ms < self.delay_ms {
            LoadingPhase::Visible
        } else if elapsed_ms < self.delay_ms.saturating_add(self.fade_ms) {
            LoadingPhase::FadingOut
        } else {
            LoadingPhase::Hidden
        }
    }

    pub fn total_ms(&self) -> u32 {
        self.delay_ms.saturating_add(self.fade_ms)
    }
}

/// Stop hooks for loops, tweens and listeners, run once on teardown.
#[derive(Default)]
pub struct Teardown {
    hooks: Vec<Box<dyn FnOnce()>>,
    done: bool,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook. After teardown has run, the hook runs immediately.
    pub fn defer(&mut self, hook: impl FnOnce() + 'static) {
        if self.done {
            hook();
        } else {
            self.hooks.push(Box::new(hook));
        }
    }

    /// Keep `value` alive until teardown, then drop it.
    pub fn hold<T: 'static>(&mut self, value: T) {
        self.defer(move || drop(value));
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Run every hook in reverse registration order. Idempotent.
    pub fn run(&mut self) {
        if self.done {
            return;
        }
        self.done = true;
        let hooks = std::mem::take(&mut self.hooks);
        log::info!("[boot] teardown: {} hooks", hooks.len());
        for hook in hooks.into_iter().rev() {
            hook();
        }
    }
}
