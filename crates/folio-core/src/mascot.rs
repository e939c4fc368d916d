//! Mascot state: scroll-owned appearance and drag-owned position.
//!
//! The two halves never write the same style property. [`Appearance`] only
//! produces class sets; [`DragController`] only produces position, transition,
//! cursor and playback commands.

use crate::constants::{SNAP_BACK_EASING, SNAP_BACK_MS};
use crate::sections::SectionId;
use fnv::FnvHashMap;
use glam::Vec2;
use smallvec::{smallvec, SmallVec};

/// Named visual states, each backed by one CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MascotLook {
    Hide,
    Wave,
    ColorHome,
    ColorServices,
    ColorProjects,
}

impl MascotLook {
    pub const ALL: [MascotLook; 5] = [
        MascotLook::Hide,
        MascotLook::Wave,
        MascotLook::ColorHome,
        MascotLook::ColorServices,
        MascotLook::ColorProjects,
    ];

    pub fn class_name(self) -> &'static str {
        match self {
            MascotLook::Hide => "hide",
            MascotLook::Wave => "wave",
            MascotLook::ColorHome => "color-home",
            MascotLook::ColorServices => "color-services",
            MascotLook::ColorProjects => "color-projects",
        }
    }
}

pub type LookSet = SmallVec<[MascotLook; 4]>;

/// Section → looks mapping. Sections without an entry use the default look.
#[derive(Clone, Debug)]
pub struct LookTable {
    entries: FnvHashMap<SectionId, LookSet>,
}

impl Default for LookTable {
    fn default() -> Self {
        let mut entries = FnvHashMap::default();
        entries.insert(SectionId::Home, smallvec![MascotLook::ColorHome]);
        entries.insert(SectionId::About, smallvec![MascotLook::Hide]);
        entries.insert(
            SectionId::Services,
            smallvec![MascotLook::Wave, MascotLook::ColorServices],
        );
        entries.insert(SectionId::Projects, smallvec![MascotLook::ColorProjects]);
        Self { entries }
    }
}

impl LookTable {
    pub fn looks_for(&self, section: Option<SectionId>) -> LookSet {
        section
            .and_then(|s| self.entries.get(&s).cloned())
            .unwrap_or_default()
    }
}

/// Scroll- and hover-driven class state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Appearance {
    pub section: Option<SectionId>,
    pub hovered: bool,
}

impl Appearance {
    /// (old state, new section) -> new state.
    pub fn enter_section(self, section: SectionId) -> Self {
        Self {
            section: Some(section),
            ..self
        }
    }

    pub fn set_hovered(self, hovered: bool) -> Self {
        Self { hovered, ..self }
    }

    /// Full class set to apply after clearing every [`MascotLook`] class.
    pub fn looks(&self, table: &LookTable) -> LookSet {
        let mut looks = table.looks_for(self.section);
        if self.hovered && !looks.contains(&MascotLook::Wave) {
            looks.push(MascotLook::Wave);
        }
        looks
    }
}

/// Pointer-over tracking for the wave look.
///
/// The look follows the pointer only while the drag controller is idle. An
/// enter that arrives mid-drag is remembered and applied by [`settle`] once
/// the snap-back completes.
///
/// [`settle`]: HoverGate::settle
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HoverGate {
    over: bool,
}

impl HoverGate {
    /// Record an enter/leave. Returns the hover flag to apply now, if any.
    pub fn pointer(&mut self, over: bool, idle: bool) -> Option<bool> {
        self.over = over;
        if over && !idle {
            None
        } else {
            Some(over)
        }
    }

    /// Hover flag to apply when the controller returns to idle.
    pub fn settle(&self) -> bool {
        self.over
    }
}

/// Parse a computed CSS length such as `"128.5px"`.
pub fn parse_px(value: &str) -> Option<f32> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cursor {
    Grab,
    Grabbing,
}

impl Cursor {
    pub fn as_css(self) -> &'static str {
        match self {
            Cursor::Grab => "grab",
            Cursor::Grabbing => "grabbing",
        }
    }
}

/// Side effects the DOM layer applies on behalf of the drag controller.
#[derive(Clone, Debug, PartialEq)]
pub enum MascotCommand {
    PausePlayback,
    ResumePlayback,
    SetCursor(Cursor),
    /// Write `left`/`top` immediately, no transition.
    MoveTo(Vec2),
    /// Install the snap-back transition and write the anchor position. The DOM
    /// layer calls [`DragController::snap_back_finished`] with `generation`
    /// after `duration_ms`.
    StartSnapBack {
        to: Vec2,
        duration_ms: u32,
        easing: &'static str,
        generation: u32,
    },
    /// Remove the snap-back transition.
    ClearTransition,
}

pub type Commands = SmallVec<[MascotCommand; 4]>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DragPhase {
    Idle,
    Dragging { grab_offset: Vec2 },
    SnappingBack { generation: u32 },
}

/// Pointer/touch drag with snap-back to a fixed anchor.
///
/// A new grab during snap-back cancels it: the transition is cleared, the
/// pending completion becomes stale (its generation no longer matches) and
/// playback stays paused until the next snap-back completes.
#[derive(Clone, Debug)]
pub struct DragController {
    anchor: Vec2,
    position: Vec2,
    phase: DragPhase,
    generation: u32,
}

impl DragController {
    pub fn new(anchor: Vec2) -> Self {
        Self {
            anchor,
            position: anchor,
            phase: DragPhase::Idle,
            generation: 0,
        }
    }

    pub fn anchor(&self) -> Vec2 {
        self.anchor
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn is_idle(&self) -> bool {
        self.phase == DragPhase::Idle
    }

    /// Pointer-down/touch-start on the mascot.
    ///
    /// `element_origin` is the element's current `left`/`top`, the same frame
    /// [`MascotCommand::MoveTo`] writes. It must not include any `transform`,
    /// otherwise the grab offset absorbs the transform and the mascot jumps.
    pub fn begin_drag(&mut self, pointer: Vec2, element_origin: Vec2) -> Commands {
        let mut out = Commands::new();
        match self.phase {
            DragPhase::Dragging { .. } => return out,
            DragPhase::Idle => out.push(MascotCommand::PausePlayback),
            DragPhase::SnappingBack { .. } => {
                // Invalidate the pending completion.
                self.generation = self.generation.wrapping_add(1);
                out.push(MascotCommand::ClearTransition);
            }
        }
        self.phase = DragPhase::Dragging {
            grab_offset: pointer - element_origin,
        };
        self.position = element_origin;
        out.push(MascotCommand::SetCursor(Cursor::Grabbing));
        log::debug!("[mascot] drag started");
        out
    }

    /// Pointer/touch move; unclamped, the mascot may leave the viewport.
    pub fn drag_to(&mut self, pointer: Vec2) -> Option<MascotCommand> {
        match self.phase {
            DragPhase::Dragging { grab_offset } => {
                self.position = pointer - grab_offset;
                Some(MascotCommand::MoveTo(self.position))
            }
            _ => None,
        }
    }

    /// Pointer/touch up. A no-op unless a drag is in progress.
    pub fn release(&mut self) -> Commands {
        if !self.is_dragging() {
            return Commands::new();
        }
        self.generation = self.generation.wrapping_add(1);
        self.phase = DragPhase::SnappingBack {
            generation: self.generation,
        };
        self.position = self.anchor;
        log::debug!("[mascot] drag ended");
        smallvec![
            MascotCommand::SetCursor(Cursor::Grab),
            MascotCommand::StartSnapBack {
                to: self.anchor,
                duration_ms: SNAP_BACK_MS,
                easing: SNAP_BACK_EASING,
                generation: self.generation,
            },
        ]
    }

    /// Snap-back timer fired. Stale generations are ignored.
    pub fn snap_back_finished(&mut self, generation: u32) -> Commands {
        match self.phase {
            DragPhase::SnappingBack { generation: g } if g == generation => {
                self.phase = DragPhase::Idle;
                smallvec![MascotCommand::ClearTransition, MascotCommand::ResumePlayback]
            }
            _ => Commands::new(),
        }
    }
}
