//! Mascot element: section-driven looks, hover, drag and the scroll path.

use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::tween::{
    construct_rive, Gsap, RiveInstance, RiveNamespace, ScrollTriggerApi, TriggerBuilder,
    TweenHandle, Vars,
};
use folio_core::{
    parse_px, Appearance, Commands, DragController, Ease, HoverGate, LookTable, MascotCommand,
    SectionId, SiteError, Teardown, MASCOT_PATH_CURVINESS, MASCOT_PATH_SCRUB, MASCOT_WAYPOINTS,
    SECTION_RANGE,
};
use glam::Vec2;
use js_sys::Array;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

pub struct MascotView {
    element: web::HtmlElement,
    table: LookTable,
    appearance: Appearance,
    hover: HoverGate,
    drag: Option<DragController>,
    rive: Option<RiveInstance>,
}

pub type SharedMascot = Rc<RefCell<MascotView>>;

impl MascotView {
    pub fn new(element: web::HtmlElement) -> Self {
        Self {
            element,
            table: LookTable::default(),
            appearance: Appearance::default(),
            hover: HoverGate::default(),
            drag: None,
            rive: None,
        }
    }

    /// Look up `#mascot-octopus` and make it visible.
    pub fn find(document: &web::Document) -> Option<SharedMascot> {
        let element = dom::html_element_by_id(document, MASCOT_ID)?;
        dom::set_style(&element, "display", "block");
        Some(Rc::new(RefCell::new(Self::new(element))))
    }

    pub fn appearance(&self) -> Appearance {
        self.appearance
    }

    fn render_looks(&self) {
        dom::apply_looks(&self.element, &self.appearance.looks(&self.table));
    }

    /// Unknown `data-section` values fall back to the default look.
    pub fn enter_section(&mut self, section: Option<SectionId>) {
        self.appearance = match section {
            Some(id) => self.appearance.enter_section(id),
            None => Appearance {
                section: None,
                ..self.appearance
            },
        };
        log::debug!("[mascot] section {:?}", section);
        self.render_looks();
    }

    /// Hover only takes effect while the mascot is at rest; leaving always clears it.
    pub fn set_hovered(&mut self, hovered: bool) {
        let idle = self.drag.as_ref().map_or(true, DragController::is_idle);
        if let Some(h) = self.hover.pointer(hovered, idle) {
            self.appearance = self.appearance.set_hovered(h);
            self.render_looks();
        }
    }

    fn settle_hover(&mut self) {
        self.appearance = self.appearance.set_hovered(self.hover.settle());
        self.render_looks();
    }

    /// Current `left`/`top`, read from the computed style so transforms
    /// written by the scroll path are excluded.
    fn layout_origin(&self) -> Option<Vec2> {
        let style = web::window()?
            .get_computed_style(&self.element)
            .ok()
            .flatten()?;
        let left = parse_px(&style.get_property_value("left").ok()?)?;
        let top = parse_px(&style.get_property_value("top").ok()?)?;
        Some(Vec2::new(left, top))
    }

    fn set_px(&self, pos: Vec2) {
        dom::set_style(&self.element, "left", &format!("{}px", pos.x));
        dom::set_style(&self.element, "top", &format!("{}px", pos.y));
    }

    fn apply(&self, command: &MascotCommand) {
        match command {
            MascotCommand::PausePlayback => {
                if let Some(r) = &self.rive {
                    r.pause();
                }
            }
            MascotCommand::ResumePlayback => {
                if let Some(r) = &self.rive {
                    r.play();
                }
            }
            MascotCommand::SetCursor(c) => dom::set_style(&self.element, "cursor", c.as_css()),
            MascotCommand::MoveTo(p) => self.set_px(*p),
            MascotCommand::StartSnapBack {
                to,
                duration_ms,
                easing,
                ..
            } => {
                let secs = *duration_ms as f32 / 1000.0;
                let transition = format!("left {secs}s {easing}, top {secs}s {easing}");
                dom::set_style(&self.element, "transition", &transition);
                self.set_px(*to);
            }
            MascotCommand::ClearTransition => dom::set_style(&self.element, "transition", ""),
        }
    }
}

/// Apply drag commands; a snap-back schedules its own completion.
fn run_commands(view: &SharedMascot, commands: Commands) {
    for command in &commands {
        view.borrow().apply(command);
        if let MascotCommand::StartSnapBack {
            duration_ms,
            generation,
            ..
        } = *command
        {
            let view = view.clone();
            dom::set_timeout(duration_ms, move || {
                let done = {
                    let mut v = view.borrow_mut();
                    let done = match v.drag.as_mut() {
                        Some(d) => d.snap_back_finished(generation),
                        None => Commands::new(),
                    };
                    if !done.is_empty() {
                        v.settle_hover();
                    }
                    done
                };
                run_commands(&view, done);
            });
        }
    }
}

/// Section looks change when a section's range crosses the viewport centre.
pub fn wire_reactions(
    st: &ScrollTriggerApi,
    document: &web::Document,
    view: &SharedMascot,
    teardown: &mut Teardown,
) {
    for section in dom::query_all(document, MASCOT_SECTION_SELECTOR) {
        let id = section
            .get_attribute(SECTION_ATTR)
            .and_then(|v| v.parse::<SectionId>().ok());
        let mut builder = TriggerBuilder::new(
            section.as_ref(),
            &SECTION_RANGE.start.to_string(),
            &SECTION_RANGE.end.to_string(),
        );
        for slot in ["onEnter", "onEnterBack"] {
            let view = view.clone();
            builder = builder.on(slot, move || view.borrow_mut().enter_section(id));
        }
        teardown.hold(builder.create(st));
    }
}

/// Scroll-scrubbed path through the viewport waypoints. Writes `transform` only.
pub fn follow_scroll_path(gsap: &Gsap, view: &SharedMascot) -> TweenHandle {
    let path: Array = MASCOT_WAYPOINTS
        .iter()
        .map(|(x, y)| {
            JsValue::from(
                Vars::new()
                    .str("x", &format!("{}vw", x))
                    .str("y", &format!("{}vh", y))
                    .build(),
            )
        })
        .collect();
    let motion = Vars::new()
        .value("path", &path)
        .flag("autoRotate", false)
        .num("curviness", MASCOT_PATH_CURVINESS as f64);
    let trigger = Vars::new()
        .str("trigger", "body")
        .str("start", "top top")
        .str("end", "bottom bottom")
        .num("scrub", MASCOT_PATH_SCRUB as f64);
    let vars = Vars::new()
        .nested("motionPath", motion)
        .str("ease", Ease::Power1InOut.as_str())
        .nested("scrollTrigger", trigger);
    let element = view.borrow().element.clone();
    TweenHandle::from(gsap.to(element.as_ref(), &vars.build()))
}

/// Load the vector animation; on success install drag, hover and surface resize.
pub fn load_animation(
    ns: &RiveNamespace,
    document: &web::Document,
    view: &SharedMascot,
    teardown: &Rc<RefCell<Teardown>>,
) -> anyhow::Result<()> {
    let canvas = document
        .get_element_by_id(MASCOT_CANVAS_ID)
        .ok_or_else(|| SiteError::EnvironmentUnavailable(format!("#{}", MASCOT_CANVAS_ID)))?;
    let instance: Rc<RefCell<Option<RiveInstance>>> = Rc::new(RefCell::new(None));

    let on_load = {
        let (instance, view, teardown) = (instance.clone(), view.clone(), teardown.clone());
        Closure::wrap(Box::new(move || {
            let Some(rive) = instance.borrow().clone() else {
                return;
            };
            rive.resize_drawing_surface_to_canvas();
            match wire_drag(&view, rive) {
                Ok(listeners) => teardown.borrow_mut().hold(listeners),
                Err(e) => log::warn!("[mascot] drag disabled: {:?}", e),
            }
            log::info!("[mascot] animation loaded");
        }) as Box<dyn FnMut()>)
    };
    let on_load_error = Closure::wrap(Box::new(move || {
        let e = SiteError::AssetLoadFailure(MASCOT_ASSET.to_string());
        log::warn!("[mascot] {}; mascot stays inert", e);
    }) as Box<dyn FnMut()>);

    let options = Vars::new()
        .str("src", MASCOT_ASSET)
        .value("canvas", canvas.as_ref())
        .flag("autoplay", true)
        .value("stateMachines", &Array::of1(&JsValue::from_str(MASCOT_STATE_MACHINE)))
        .func("onLoad", on_load.as_ref().unchecked_ref())
        .func("onLoadError", on_load_error.as_ref().unchecked_ref())
        .build();
    let rive = construct_rive(ns, &options)?;
    *instance.borrow_mut() = Some(rive.clone());

    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resize_target = rive.clone();
    let on_resize = EventListener::new(&window, "resize", move |_| {
        resize_target.resize_drawing_surface_to_canvas();
    })?;

    let mut td = teardown.borrow_mut();
    td.hold((on_load, on_load_error));
    td.hold(on_resize);
    td.defer(move || rive.cleanup());
    Ok(())
}

fn touch_point(ev: &web::Event) -> Option<Vec2> {
    let t = ev.dyn_ref::<web::TouchEvent>()?.touches().get(0)?;
    Some(Vec2::new(t.client_x() as f32, t.client_y() as f32))
}

fn mouse_point(ev: &web::Event) -> Option<Vec2> {
    let m = ev.dyn_ref::<web::MouseEvent>()?;
    Some(Vec2::new(m.client_x() as f32, m.client_y() as f32))
}

fn begin(view: &SharedMascot, pointer: Vec2) {
    let commands = {
        let mut v = view.borrow_mut();
        let origin = v.layout_origin();
        match v.drag.as_mut() {
            Some(d) => {
                let origin = origin.unwrap_or_else(|| d.position());
                d.begin_drag(pointer, origin)
            }
            None => return,
        }
    };
    run_commands(view, commands);
}

fn move_to(view: &SharedMascot, pointer: Vec2) {
    let command = view
        .borrow_mut()
        .drag
        .as_mut()
        .and_then(|d| d.drag_to(pointer));
    if let Some(c) = command {
        view.borrow().apply(&c);
    }
}

fn end(view: &SharedMascot) {
    let commands = match view.borrow_mut().drag.as_mut() {
        Some(d) => d.release(),
        None => return,
    };
    run_commands(view, commands);
}

/// Pin the mascot at its laid-out position and make it draggable.
fn wire_drag(view: &SharedMascot, rive: RiveInstance) -> anyhow::Result<Vec<EventListener>> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let element = {
        let mut v = view.borrow_mut();
        let anchor = Vec2::new(v.element.offset_left() as f32, v.element.offset_top() as f32);
        dom::set_style(&v.element, "position", "fixed");
        v.set_px(anchor);
        dom::set_style(&v.element, "cursor", "grab");
        v.drag = Some(DragController::new(anchor));
        v.rive = Some(rive);
        v.element.clone()
    };

    let mut listeners = Vec::new();
    let v = view.clone();
    listeners.push(EventListener::new(&element, "mousedown", move |ev| {
        if let Some(p) = mouse_point(&ev) {
            begin(&v, p);
        }
    })?);
    let v = view.clone();
    listeners.push(EventListener::passive(&element, "touchstart", move |ev| {
        if let Some(p) = touch_point(&ev) {
            begin(&v, p);
        }
    })?);
    let v = view.clone();
    listeners.push(EventListener::new(&document, "mousemove", move |ev| {
        if let Some(p) = mouse_point(&ev) {
            move_to(&v, p);
        }
    })?);
    let v = view.clone();
    listeners.push(EventListener::passive(&document, "touchmove", move |ev| {
        if let Some(p) = touch_point(&ev) {
            move_to(&v, p);
        }
    })?);
    for event in ["mouseup", "touchend"] {
        let v = view.clone();
        listeners.push(EventListener::new(&document, event, move |_| end(&v))?);
    }
    for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
        let v = view.clone();
        listeners.push(EventListener::new(&element, event, move |_| {
            v.borrow_mut().set_hovered(hovered);
        })?);
    }
    Ok(listeners)
}
