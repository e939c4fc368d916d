use std::fmt;
use std::str::FromStr;

/// Page sections known to the mascot and the markup (`data-section` values).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    Profile,
    About,
    Services,
    Projects,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Home,
        SectionId::Profile,
        SectionId::About,
        SectionId::Services,
        SectionId::Projects,
        SectionId::Contact,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionId::Home => "home",
            SectionId::Profile => "profile",
            SectionId::About => "about",
            SectionId::Services => "services",
            SectionId::Projects => "projects",
            SectionId::Contact => "contact",
        }
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnknownSection(pub String);

impl FromStr for SectionId {
    type Err = UnknownSection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionId::ALL
            .iter()
            .copied()
            .find(|id| id.as_str() == s.trim())
            .ok_or_else(|| UnknownSection(s.to_string()))
    }
}

/// One measured section: document-space top and height in CSS px.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Section {
    pub id: Option<SectionId>,
    pub top: f32,
    pub height: f32,
}

impl Section {
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Half-open containment: `[top, top + height)`.
    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y >= self.top && y < self.bottom()
    }
}

/// Ordered, immutable snapshot of the page sections.
#[derive(Clone, Debug, Default)]
pub struct SectionRegistry {
    sections: Vec<Section>,
}

impl SectionRegistry {
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Section> {
        self.sections.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Section> {
        self.sections.iter()
    }

    /// Index of the section containing the viewport midpoint.
    ///
    /// Linear scan in document order; the first match wins so overlapping
    /// bounds still yield a single active section.
    pub fn active_index(&self, scroll_y: f32, viewport_height: f32) -> Option<usize> {
        let midpoint = scroll_y + viewport_height / 2.0;
        self.sections.iter().position(|s| s.contains(midpoint))
    }

    /// Progress of the midpoint through section `index`, in [0, 1].
    pub fn progress(&self, index: usize, scroll_y: f32, viewport_height: f32) -> f32 {
        match self.sections.get(index) {
            Some(s) if s.height > 0.0 => {
                let midpoint = scroll_y + viewport_height / 2.0;
                ((midpoint - s.top) / s.height).clamp(0.0, 1.0)
            }
            _ => 0.0,
        }
    }

    /// Active section together with the midpoint's progress through it.
    pub fn active_progress(&self, scroll_y: f32, viewport_height: f32) -> Option<(usize, f32)> {
        self.active_index(scroll_y, viewport_height)
            .map(|i| (i, self.progress(i, scroll_y, viewport_height)))
    }
}

/// Which indicator dot currently carries the active marker.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct IndicatorState {
    active: Option<usize>,
}

impl IndicatorState {
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    /// Recompute the active dot. Returns the new index when it changed.
    ///
    /// When the midpoint lies in no section (e.g. in a footer gap) the
    /// previous dot stays active.
    pub fn sync(
        &mut self,
        registry: &SectionRegistry,
        scroll_y: f32,
        viewport_height: f32,
    ) -> Option<usize> {
        let next = registry.active_index(scroll_y, viewport_height)?;
        if self.active == Some(next) {
            return None;
        }
        self.active = Some(next);
        Some(next)
    }
}
