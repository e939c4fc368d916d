//! Scroll choreography expressed as plain data and small state machines.
//!
//! The tweening and scroll-observation engines stay in JavaScript; this module
//! decides *what* they should do (trigger lines, toggle actions, stagger
//! offsets, randomised idle loops) so the decisions can be tested on the host.

use crate::constants::*;
use glam::Vec3;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// Easing curves handed to the tweening engine by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ease {
    None,
    Power1InOut,
    Power2Out,
    Power3Out,
    SineInOut,
}

impl Ease {
    pub fn as_str(self) -> &'static str {
        match self {
            Ease::None => "none",
            Ease::Power1InOut => "power1.inOut",
            Ease::Power2Out => "power2.out",
            Ease::Power3Out => "power3.out",
            Ease::SineInOut => "sine.inOut",
        }
    }
}

// ---------------- Trigger lines ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Center,
    Bottom,
}

/// "`<element edge>` meets `<fraction>` of the viewport height from the top".
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerLine {
    pub edge: Edge,
    pub viewport_fraction: f32,
}

impl TriggerLine {
    pub const fn top(viewport_fraction: f32) -> Self {
        Self {
            edge: Edge::Top,
            viewport_fraction,
        }
    }

    pub const fn bottom(viewport_fraction: f32) -> Self {
        Self {
            edge: Edge::Bottom,
            viewport_fraction,
        }
    }
}

impl fmt::Display for TriggerLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let edge = match self.edge {
            Edge::Top => "top",
            Edge::Center => "center",
            Edge::Bottom => "bottom",
        };
        write!(f, "{} {}%", edge, (self.viewport_fraction * 100.0).round() as i32)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerRange {
    pub start: TriggerLine,
    pub end: TriggerLine,
}

pub const TITLE_RANGE: TriggerRange = TriggerRange {
    start: TriggerLine::top(TITLE_TRIGGER_START),
    end: TriggerLine::bottom(TITLE_TRIGGER_END),
};
pub const CONTENT_RANGE: TriggerRange = TriggerRange {
    start: TriggerLine::top(CONTENT_TRIGGER_START),
    end: TriggerLine::bottom(CONTENT_TRIGGER_END),
};
pub const CARD_RANGE: TriggerRange = TriggerRange {
    start: TriggerLine::top(CARD_TRIGGER_START),
    end: TriggerLine::bottom(CARD_TRIGGER_END),
};
pub const SECTION_RANGE: TriggerRange = TriggerRange {
    start: TriggerLine::top(SECTION_TRIGGER_LINE),
    end: TriggerLine::bottom(SECTION_TRIGGER_LINE),
};
pub const REVEAL_RANGE: TriggerRange = TriggerRange {
    start: TriggerLine::top(REVEAL_TRIGGER_START),
    end: TriggerLine::bottom(0.0),
};

// ---------------- Toggle actions ----------------

/// Callbacks the scroll observer fires as a trigger range is crossed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter,
    Leave,
    EnterBack,
    LeaveBack,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToggleAction {
    Play,
    Pause,
    Resume,
    Reverse,
    Restart,
    Reset,
    Complete,
    None,
}

impl ToggleAction {
    pub fn as_str(self) -> &'static str {
        match self {
            ToggleAction::Play => "play",
            ToggleAction::Pause => "pause",
            ToggleAction::Resume => "resume",
            ToggleAction::Reverse => "reverse",
            ToggleAction::Restart => "restart",
            ToggleAction::Reset => "reset",
            ToggleAction::Complete => "complete",
            ToggleAction::None => "none",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseToggleActionsError(pub String);

impl fmt::Display for ParseToggleActionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid toggle actions: {:?}", self.0)
    }
}

impl std::error::Error for ParseToggleActionsError {}

impl FromStr for ToggleAction {
    type Err = ParseToggleActionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "play" => ToggleAction::Play,
            "pause" => ToggleAction::Pause,
            "resume" => ToggleAction::Resume,
            "reverse" => ToggleAction::Reverse,
            "restart" => ToggleAction::Restart,
            "reset" => ToggleAction::Reset,
            "complete" => ToggleAction::Complete,
            "none" => ToggleAction::None,
            other => return Err(ParseToggleActionsError(other.to_string())),
        })
    }
}

/// What to do on enter / leave / enter-back / leave-back, in that order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleActions {
    pub on_enter: ToggleAction,
    pub on_leave: ToggleAction,
    pub on_enter_back: ToggleAction,
    pub on_leave_back: ToggleAction,
}

impl ToggleActions {
    /// Re-armable entrance: plays on the way down, reverses on the way back up.
    pub const PLAY_REVERSE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::Reverse,
    };

    /// One-shot reveal.
    pub const PLAY_ONCE: Self = Self {
        on_enter: ToggleAction::Play,
        on_leave: ToggleAction::None,
        on_enter_back: ToggleAction::None,
        on_leave_back: ToggleAction::None,
    };

    pub fn action(&self, event: TriggerEvent) -> ToggleAction {
        match event {
            TriggerEvent::Enter => self.on_enter,
            TriggerEvent::Leave => self.on_leave,
            TriggerEvent::EnterBack => self.on_enter_back,
            TriggerEvent::LeaveBack => self.on_leave_back,
        }
    }
}

impl FromStr for ToggleActions {
    type Err = ParseToggleActionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        if parts.len() != 4 {
            return Err(ParseToggleActionsError(s.to_string()));
        }
        Ok(Self {
            on_enter: parts[0].parse()?,
            on_leave: parts[1].parse()?,
            on_enter_back: parts[2].parse()?,
            on_leave_back: parts[3].parse()?,
        })
    }
}

impl fmt::Display for ToggleActions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.on_enter.as_str(),
            self.on_leave.as_str(),
            self.on_enter_back.as_str(),
            self.on_leave_back.as_str()
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntranceState {
    /// Pre-animation: offset and transparent.
    Hidden,
    Shown,
}

/// Tracks one entrance animation so duplicate callbacks never replay it.
#[derive(Clone, Copy, Debug)]
pub struct EntranceTrigger {
    actions: ToggleActions,
    state: EntranceState,
}

impl EntranceTrigger {
    pub fn new(actions: ToggleActions) -> Self {
        Self {
            actions,
            state: EntranceState::Hidden,
        }
    }

    pub fn state(&self) -> EntranceState {
        self.state
    }

    /// Resolve a scroll callback to the tween command to issue, if any.
    pub fn handle(&mut self, event: TriggerEvent) -> Option<ToggleAction> {
        let action = self.actions.action(event);
        match action {
            ToggleAction::Play | ToggleAction::Resume | ToggleAction::Complete => {
                if self.state == EntranceState::Shown {
                    return None;
                }
                self.state = EntranceState::Shown;
                Some(action)
            }
            ToggleAction::Restart => {
                self.state = EntranceState::Shown;
                Some(action)
            }
            ToggleAction::Reverse | ToggleAction::Reset => {
                if self.state == EntranceState::Hidden {
                    return None;
                }
                self.state = EntranceState::Hidden;
                Some(action)
            }
            ToggleAction::Pause => Some(action),
            ToggleAction::None => None,
        }
    }
}

// ---------------- Tween parameters ----------------

/// Translate-and-fade entrance: starts `from_y` px lower at opacity 0.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntranceTween {
    pub from_y: f32,
    pub duration_sec: f32,
    pub delay_sec: f32,
    pub ease: Ease,
}

pub const TITLE_ENTRANCE: EntranceTween = EntranceTween {
    from_y: 50.0,
    duration_sec: 1.0,
    delay_sec: 0.0,
    ease: Ease::Power3Out,
};
pub const CONTENT_ENTRANCE: EntranceTween = EntranceTween {
    from_y: 30.0,
    duration_sec: 0.8,
    delay_sec: 0.0,
    ease: Ease::Power3Out,
};
pub const HERO_TITLE_INTRO: EntranceTween = EntranceTween {
    from_y: 100.0,
    duration_sec: 1.5,
    delay_sec: 0.0,
    ease: Ease::Power3Out,
};
pub const HERO_SUBTITLE_INTRO: EntranceTween = EntranceTween {
    from_y: 50.0,
    duration_sec: 1.5,
    delay_sec: 0.3,
    ease: Ease::Power3Out,
};
pub const HERO_BUTTONS_INTRO: EntranceTween = EntranceTween {
    from_y: 30.0,
    duration_sec: 1.0,
    delay_sec: 0.6,
    ease: Ease::Power3Out,
};

/// Hero block intro, in play order: title, subtitle, buttons.
pub const HERO_INTRO: [EntranceTween; 3] =
    [HERO_TITLE_INTRO, HERO_SUBTITLE_INTRO, HERO_BUTTONS_INTRO];

/// Start-time offsets for a staggered group, in DOM order.
pub fn stagger_offsets(count: usize, step_sec: f32) -> Vec<f32> {
    (0..count).map(|i| i as f32 * step_sec).collect()
}

#[inline]
pub fn hover_scale(hovered: bool) -> f32 {
    if hovered {
        HOVER_SCALE
    } else {
        1.0
    }
}

/// Button scale while hovered, otherwise the idle pulse target.
#[inline]
pub fn button_hover_scale(hovered: bool) -> f32 {
    if hovered {
        BUTTON_HOVER_SCALE
    } else {
        BUTTON_PULSE_SCALE
    }
}

/// Card scale change for a card's own scroll range; only enter and leave act.
pub fn card_scroll_scale(event: TriggerEvent) -> Option<f32> {
    match event {
        TriggerEvent::Enter => Some(CARD_SCROLL_SCALE),
        TriggerEvent::Leave => Some(1.0),
        TriggerEvent::EnterBack | TriggerEvent::LeaveBack => None,
    }
}

#[inline]
pub fn parallax_offset(scroll_y: f32) -> f32 {
    scroll_y * PARALLAX_FACTOR
}

// ---------------- Idle breathing ----------------

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BreathingKind {
    CardFloat,
    ButtonPulse,
    SectionDrift,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BreathTarget {
    /// Relative vertical offset (`+=` px).
    TranslateY(f32),
    Scale(f32),
    BackgroundPosition { x_pct: f32, y_pct: f32 },
}

/// One infinite yoyo loop with its randomised phase and period.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BreathingSpec {
    pub kind: BreathingKind,
    pub target: BreathTarget,
    pub duration_sec: f32,
    pub delay_sec: f32,
}

impl BreathingSpec {
    pub const EASE: Ease = Ease::SineInOut;

    pub fn sample<R: Rng + ?Sized>(kind: BreathingKind, rng: &mut R) -> Self {
        let (target, duration_sec) = match kind {
            BreathingKind::CardFloat => (
                BreathTarget::TranslateY(CARD_FLOAT_DISTANCE_PX),
                CARD_FLOAT_BASE_SEC + rng.gen::<f32>(),
            ),
            BreathingKind::ButtonPulse => (
                BreathTarget::Scale(BUTTON_PULSE_SCALE),
                BUTTON_PULSE_BASE_SEC + rng.gen::<f32>(),
            ),
            BreathingKind::SectionDrift => (
                BreathTarget::BackgroundPosition {
                    x_pct: 50.0 + rng.gen::<f32>() * SECTION_DRIFT_PERCENT,
                    y_pct: 50.0 + rng.gen::<f32>() * SECTION_DRIFT_PERCENT,
                },
                SECTION_DRIFT_BASE_SEC + rng.gen::<f32>() * SECTION_DRIFT_SPREAD_SEC,
            ),
        };
        Self {
            kind,
            target,
            duration_sec,
            delay_sec: rng.gen::<f32>() * BREATHING_MAX_DELAY_SEC,
        }
    }
}

// ---------------- Decorations and paths ----------------

/// A decorative dot placed inside a section, CSS-animated.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingElement {
    pub left_pct: f32,
    pub top_pct: f32,
    pub delay_sec: f32,
}

impl FloatingElement {
    pub fn scatter<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Self> {
        (0..count)
            .map(|_| Self {
                left_pct: rng.gen::<f32>() * 100.0,
                top_pct: rng.gen::<f32>() * 100.0,
                delay_sec: rng.gen::<f32>() * FLOATING_MAX_DELAY_SEC,
            })
            .collect()
    }
}

/// 3D offset a motion-path reveal flies in from; cycles through three variants.
pub fn motion_path_origin(index: usize) -> Vec3 {
    match index % 3 {
        0 => Vec3::new(-200.0, -100.0, -200.0),
        1 => Vec3::new(200.0, 120.0, -150.0),
        _ => Vec3::new(0.0, 200.0, -100.0),
    }
}

/// Mascot scroll path waypoints as (vw, vh) percentages, top of page first.
pub const MASCOT_WAYPOINTS: [(f32, f32); 6] = [
    (10.0, 15.0),
    (30.0, 30.0),
    (80.0, 40.0),
    (20.0, 55.0),
    (70.0, 70.0),
    (50.0, 85.0),
];
pub const MASCOT_PATH_CURVINESS: f32 = 1.5;
pub const MASCOT_PATH_SCRUB: f32 = 1.0;
