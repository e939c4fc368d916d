//! GSAP/ScrollTrigger side of the scroll choreography. Timing and trigger
//! decisions come from `folio_core::choreography`.

use crate::constants::*;
use crate::dom::{self, EventListener};
use crate::events::measure_sections;
use crate::frame::SceneState;
use crate::tween::{
    targets, Gsap, ScrollTriggerApi, Timeline, TriggerBuilder, TweenHandle, Vars,
};
use folio_core::{
    button_hover_scale, card_scroll_scale, hover_scale, motion_path_origin, parallax_offset,
    stagger_offsets, BreathTarget, BreathingKind, BreathingSpec, CameraPath, Ease,
    EntranceTrigger, EntranceTween, FloatingElement, Teardown, ToggleAction, ToggleActions,
    TriggerEvent, TriggerRange, CARD_RANGE, CARD_SCROLL_DURATION_SEC, CONTENT_ENTRANCE,
    CONTENT_RANGE, FLOATING_ELEMENTS_PER_SECTION, HERO_INTRO, HOVER_DURATION_SEC,
    PARALLAX_DURATION_SEC, REVEAL_DURATION_SEC, REVEAL_RANGE, STAGGER_STEP_SEC,
    TITLE_ENTRANCE, TITLE_RANGE,
};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

const TRIGGER_SLOTS: [(&str, TriggerEvent); 4] = [
    ("onEnter", TriggerEvent::Enter),
    ("onLeave", TriggerEvent::Leave),
    ("onEnterBack", TriggerEvent::EnterBack),
    ("onLeaveBack", TriggerEvent::LeaveBack),
];

fn entrance_from(t: &EntranceTween) -> Vars {
    Vars::new().num("y", t.from_y as f64).num("opacity", 0.0)
}

fn entrance_to(t: &EntranceTween) -> Vars {
    Vars::new()
        .num("y", 0.0)
        .num("opacity", 1.0)
        .num("duration", t.duration_sec as f64)
        .num("delay", t.delay_sec as f64)
        .str("ease", t.ease.as_str())
}

fn apply_action(tl: &Timeline, action: ToggleAction) {
    match action {
        ToggleAction::Play => {
            tl.play();
        }
        ToggleAction::Pause => {
            tl.pause();
        }
        ToggleAction::Resume => {
            tl.resume();
        }
        ToggleAction::Reverse => {
            tl.reverse();
        }
        ToggleAction::Restart => {
            tl.restart();
        }
        ToggleAction::Reset => {
            tl.pause();
            tl.progress(0.0);
        }
        ToggleAction::Complete => {
            tl.progress(1.0);
        }
        ToggleAction::None => {}
    }
}

/// Drive a paused timeline from a scroll range through an [`EntranceTrigger`].
fn wire_toggle_trigger(
    st: &ScrollTriggerApi,
    trigger: &web::Element,
    range: TriggerRange,
    actions: ToggleActions,
    tl: &Timeline,
    teardown: &mut Teardown,
) {
    let state = Rc::new(RefCell::new(EntranceTrigger::new(actions)));
    let mut builder = TriggerBuilder::new(
        trigger.as_ref(),
        &range.start.to_string(),
        &range.end.to_string(),
    );
    for (slot, event) in TRIGGER_SLOTS {
        let state = state.clone();
        let tl = tl.clone();
        builder = builder.on(slot, move || {
            if let Some(action) = state.borrow_mut().handle(event) {
                apply_action(&tl, action);
            }
        });
    }
    teardown.hold(builder.create(st));
    let tl = tl.clone();
    teardown.defer(move || tl.kill());
}

/// Hero title, subtitle and buttons fade up once on DOM-ready.
pub fn hero_intro(gsap: &Gsap, document: &web::Document, teardown: &mut Teardown) {
    let selectors = [HERO_TITLE_SELECTOR, HERO_SUBTITLE_SELECTOR, HERO_BUTTONS_SELECTOR];
    for (selector, tween) in selectors.iter().zip(HERO_INTRO.iter()) {
        let els = dom::query_all(document, selector);
        if els.is_empty() {
            continue;
        }
        let t = gsap.from_to(
            &targets(&els),
            &entrance_from(tween).build(),
            &entrance_to(tween).build(),
        );
        teardown.hold(TweenHandle::from(t));
    }
}

/// Per-section title and staggered content entrances, re-armable on scroll-up.
pub fn section_entrances(
    gsap: &Gsap,
    st: &ScrollTriggerApi,
    document: &web::Document,
    teardown: &mut Teardown,
) {
    let paused = || Vars::new().flag("paused", true).build();
    let mut wired = 0;
    for section in dom::query_all(document, SECTION_SELECTOR) {
        if let Ok(Some(title)) = section.query_selector(SECTION_TITLE_SELECTOR) {
            let tl = gsap.timeline(&paused());
            tl.from_to(
                title.as_ref(),
                &entrance_from(&TITLE_ENTRANCE).build(),
                &entrance_to(&TITLE_ENTRANCE).build(),
                0.0,
            );
            wire_toggle_trigger(st, &section, TITLE_RANGE, ToggleActions::PLAY_REVERSE, &tl, teardown);
            wired += 1;
        }
        if let Ok(Some(content)) = section.query_selector(SECTION_CONTENT_SELECTOR) {
            let children = dom::children(&content);
            if children.is_empty() {
                continue;
            }
            let tl = gsap.timeline(&paused());
            let offsets = stagger_offsets(children.len(), STAGGER_STEP_SEC);
            for (child, at) in children.iter().zip(offsets) {
                tl.from_to(
                    child.as_ref(),
                    &entrance_from(&CONTENT_ENTRANCE).build(),
                    &entrance_to(&CONTENT_ENTRANCE).build(),
                    at as f64,
                );
            }
            wire_toggle_trigger(st, &section, CONTENT_RANGE, ToggleActions::PLAY_REVERSE, &tl, teardown);
            wired += 1;
        }
    }
    log::info!("[scroll] {} entrance triggers", wired);
}

fn scale_to(gsap: &Gsap, el: &web::Element, scale: f32, duration_sec: f32) {
    gsap.to(
        el.as_ref(),
        &Vars::new()
            .num("scale", scale as f64)
            .num("duration", duration_sec as f64)
            .str("ease", Ease::Power2Out.as_str())
            .build(),
    );
}

/// Card and button hover scaling.
pub fn wire_hover(gsap: &Gsap, document: &web::Document) -> anyhow::Result<Vec<EventListener>> {
    let mut listeners = Vec::new();
    for card in dom::query_all(document, CARD_SELECTOR) {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let (g, el) = (gsap.clone(), card.clone());
            listeners.push(EventListener::new(&card, event, move |_| {
                scale_to(&g, &el, hover_scale(hovered), HOVER_DURATION_SEC);
            })?);
        }
    }
    for btn in dom::query_all(document, BUTTON_SELECTOR) {
        for (event, hovered) in [("mouseenter", true), ("mouseleave", false)] {
            let (g, el) = (gsap.clone(), btn.clone());
            let glow = if hovered { BUTTON_GLOW_HOVER } else { BUTTON_GLOW_IDLE };
            listeners.push(EventListener::new(&btn, event, move |_| {
                g.to(
                    el.as_ref(),
                    &Vars::new()
                        .num("scale", button_hover_scale(hovered) as f64)
                        .str("boxShadow", glow)
                        .num("duration", HOVER_DURATION_SEC as f64)
                        .build(),
                );
            })?);
        }
    }
    Ok(listeners)
}

/// Cards grow while inside their own scroll range.
pub fn card_scroll_transforms(
    gsap: &Gsap,
    st: &ScrollTriggerApi,
    document: &web::Document,
    teardown: &mut Teardown,
) {
    for card in dom::query_all(document, CARD_SELECTOR) {
        let mut builder = TriggerBuilder::new(
            card.as_ref(),
            &CARD_RANGE.start.to_string(),
            &CARD_RANGE.end.to_string(),
        );
        for (slot, event) in TRIGGER_SLOTS {
            let Some(scale) = card_scroll_scale(event) else {
                continue;
            };
            let (g, el) = (gsap.clone(), card.clone());
            builder = builder.on(slot, move || {
                scale_to(&g, &el, scale, CARD_SCROLL_DURATION_SEC);
            });
        }
        teardown.hold(builder.create(st));
    }
}

/// Background canvas follows half the scroll distance.
pub fn wire_parallax(gsap: &Gsap, canvas: &web::Element) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let (g, el) = (gsap.clone(), canvas.clone());
    EventListener::passive(&window, "scroll", move |_| {
        g.to(
            el.as_ref(),
            &Vars::new()
                .num("y", parallax_offset(dom::scroll_y() as f32) as f64)
                .num("duration", PARALLAX_DURATION_SEC as f64)
                .str("ease", Ease::None.as_str())
                .build(),
        );
    })
}

/// Camera follows the curve while a section spans the viewport centre.
pub fn wire_camera_path(
    document: &web::Document,
    scene: &SceneState,
) -> anyhow::Result<EventListener> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let sections = dom::query_all(document, SECTION_SELECTOR);
    let path = CameraPath::default();
    let scene = scene.clone();
    EventListener::passive(&window, "scroll", move |_| {
        let registry = measure_sections(&sections);
        let (_, vh) = dom::inner_size();
        if let Some((_, p)) = registry.active_progress(dom::scroll_y() as f32, vh as f32) {
            scene.camera_target.set(Some(path.camera_target(p)));
        }
    })
}

fn breath_vars(spec: &BreathingSpec) -> Vars {
    let vars = match spec.target {
        BreathTarget::TranslateY(px) => Vars::new().str("y", &format!("+={}", px)),
        BreathTarget::Scale(s) => Vars::new().num("scale", s as f64),
        BreathTarget::BackgroundPosition { x_pct, y_pct } => {
            Vars::new().str("backgroundPosition", &format!("{}% {}%", x_pct, y_pct))
        }
    };
    vars.num("duration", spec.duration_sec as f64)
        .num("delay", spec.delay_sec as f64)
        .num("repeat", -1.0)
        .flag("yoyo", true)
        .str("ease", BreathingSpec::EASE.as_str())
}

/// Infinite idle loops for cards, buttons and section backgrounds.
pub fn start_breathing(gsap: &Gsap, document: &web::Document, teardown: &mut Teardown) {
    let mut rng = rand::thread_rng();
    let groups = [
        (CARD_SELECTOR, BreathingKind::CardFloat),
        (BUTTON_SELECTOR, BreathingKind::ButtonPulse),
        (SECTION_SELECTOR, BreathingKind::SectionDrift),
    ];
    let mut count = 0;
    for (selector, kind) in groups {
        for el in dom::query_all(document, selector) {
            let spec = BreathingSpec::sample(kind, &mut rng);
            let t = gsap.to(el.as_ref(), &breath_vars(&spec).build());
            teardown.hold(TweenHandle::from(t));
            count += 1;
        }
    }
    log::debug!("[scroll] {} breathing loops", count);
}

/// Three CSS-animated `.floating-element` dots per section.
pub fn add_floating_elements(document: &web::Document) -> anyhow::Result<usize> {
    let mut rng = rand::thread_rng();
    let mut added = 0;
    for section in dom::query_all(document, SECTION_SELECTOR) {
        for spot in FloatingElement::scatter(FLOATING_ELEMENTS_PER_SECTION, &mut rng) {
            let el = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            el.set_class_name(FLOATING_CLASS);
            let style = format!(
                "left:{}%;top:{}%;animation-delay:{}s",
                spot.left_pct, spot.top_pct, spot.delay_sec
            );
            el.set_attribute("style", &style)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            section
                .append_child(&el)
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            added += 1;
        }
    }
    Ok(added)
}

/// One-shot fly-in for `[data-animate="motion-path"]` elements.
pub fn motion_path_reveals(gsap: &Gsap, document: &web::Document, teardown: &mut Teardown) {
    for (i, el) in dom::query_all(document, MOTION_PATH_SELECTOR).iter().enumerate() {
        let origin = motion_path_origin(i);
        let from = Vars::new()
            .num("opacity", 0.0)
            .num("x", origin.x as f64)
            .num("y", origin.y as f64)
            .num("z", origin.z as f64)
            .num("rotateY", 0.0);
        let trigger = Vars::new()
            .value("trigger", el.as_ref())
            .str("start", &REVEAL_RANGE.start.to_string())
            .str("toggleActions", &ToggleActions::PLAY_ONCE.to_string());
        let to = Vars::new()
            .num("opacity", 1.0)
            .num("x", 0.0)
            .num("y", 0.0)
            .num("z", 0.0)
            .num("rotateY", 0.0)
            .num("duration", REVEAL_DURATION_SEC as f64)
            .str("ease", Ease::Power3Out.as_str())
            .nested("scrollTrigger", trigger);
        let t = gsap.from_to(&JsValue::from(el.clone()), &from.build(), &to.build());
        teardown.hold(TweenHandle::from(t));
    }
}
