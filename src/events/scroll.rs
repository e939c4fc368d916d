use crate::constants::{ACTIVE_CLASS, NAV_LINK_SELECTOR, SCROLL_DOT_SELECTOR, SECTION_ATTR, SECTION_SELECTOR};
use crate::dom::{self, EventListener};
use folio_core::{IndicatorState, Section, SectionRegistry};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Snapshot current section geometry in document order.
pub fn measure_sections(elements: &[web::Element]) -> SectionRegistry {
    let sections = elements
        .iter()
        .filter_map(|el| el.dyn_ref::<web::HtmlElement>())
        .map(|el| Section {
            id: el
                .get_attribute(SECTION_ATTR)
                .and_then(|v| v.parse().ok()),
            top: el.offset_top() as f32,
            height: el.offset_height() as f32,
        })
        .collect();
    SectionRegistry::new(sections)
}

/// Scroll indicator: one dot per section, the midpoint's section marked active.
pub struct DotSync {
    sections: Vec<web::Element>,
    dots: Vec<web::Element>,
    indicator: IndicatorState,
}

impl DotSync {
    pub fn new(document: &web::Document) -> Self {
        Self {
            sections: dom::query_all(document, SECTION_SELECTOR),
            dots: dom::query_all(document, SCROLL_DOT_SELECTOR),
            indicator: IndicatorState::default(),
        }
    }

    pub fn active(&self) -> Option<usize> {
        self.indicator.active()
    }

    /// Re-measure and move the active marker if the section changed.
    pub fn sync(&mut self) {
        // Geometry is re-read on every call.
        let registry = measure_sections(&self.sections);
        let (_, vh) = dom::inner_size();
        let Some(index) = self
            .indicator
            .sync(&registry, dom::scroll_y() as f32, vh as f32)
        else {
            return;
        };
        for dot in &self.dots {
            _ = dot.class_list().remove_1(ACTIVE_CLASS);
        }
        if let Some(dot) = self.dots.get(index) {
            _ = dot.class_list().add_1(ACTIVE_CLASS);
        }
        log::debug!("[scroll] active section {}", index);
    }

    fn section(&self, index: usize) -> Option<&web::Element> {
        self.sections.get(index)
    }
}

/// Passive scroll listener for the dots plus a click handler per dot.
pub fn wire_dot_sync(dots: &Rc<RefCell<DotSync>>) -> anyhow::Result<Vec<EventListener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let mut listeners = Vec::new();

    dots.borrow_mut().sync();
    let on_scroll = dots.clone();
    listeners.push(EventListener::passive(&window, "scroll", move |_| {
        on_scroll.borrow_mut().sync();
    })?);

    let dot_elements = dots.borrow().dots.clone();
    for (index, dot) in dot_elements.iter().enumerate() {
        let sync = dots.clone();
        listeners.push(EventListener::new(dot, "click", move |_| {
            if let Some(section) = sync.borrow().section(index) {
                dom::smooth_scroll_to(section);
            }
        })?);
    }
    log::info!(
        "[scroll] {} dots for {} sections",
        dot_elements.len(),
        dots.borrow().sections.len()
    );
    Ok(listeners)
}

/// `.nav-link` clicks scroll smoothly to the element named by `href`.
pub fn wire_nav_links(document: &web::Document) -> anyhow::Result<Vec<EventListener>> {
    let mut listeners = Vec::new();
    for link in dom::query_all(document, NAV_LINK_SELECTOR) {
        let doc = document.clone();
        let href = link.get_attribute("href");
        listeners.push(EventListener::new(&link, "click", move |ev| {
            let target = href
                .as_deref()
                .and_then(|h| doc.query_selector(h).ok().flatten());
            if let Some(t) = target {
                ev.prevent_default();
                dom::smooth_scroll_to(&t);
            }
        })?);
    }
    Ok(listeners)
}
