#![cfg(target_arch = "wasm32")]
use folio_core::{BootPlan, LoadingSchedule, ParticleField, Teardown};
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod audio;
mod choreography;
mod constants;
mod dom;
mod events;
mod frame;
mod loading;
mod mascot;
mod render;
mod storage;
mod tween;

use constants::CANVAS_ID;
use events::DotSync;
use frame::{FrameContext, SceneState};

/// Everything started by [`boot`]; dropped listeners and loops are owned by
/// the teardown registry, which runs when the page unloads.
pub struct Site {
    plan: BootPlan,
    teardown: Rc<RefCell<Teardown>>,
    dots: Rc<RefCell<DotSync>>,
    mascot: Option<mascot::SharedMascot>,
    _pagehide: Option<dom::EventListener>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

impl Site {
    pub fn plan(&self) -> BootPlan {
        self.plan
    }

    /// Index of the section whose indicator dot is active.
    pub fn active_dot(&self) -> Option<usize> {
        self.dots.borrow().active()
    }

    /// Re-run the dot sync, as a scroll event would.
    pub fn sync_dots(&self) {
        self.dots.borrow_mut().sync();
    }

    pub fn mascot_section(&self) -> Option<String> {
        let m = self.mascot.as_ref()?;
        let section = m.borrow().appearance().section?;
        Some(section.to_string())
    }

    /// False once teardown has run.
    pub fn is_running(&self) -> bool {
        !self.teardown.borrow().is_done()
    }

    pub fn shutdown(&self) {
        self.teardown.borrow_mut().run();
    }
}

// Log and swallow a subsystem failure so the others still start.
fn guarded<T>(what: &str, result: anyhow::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            log::warn!("[boot] {} disabled: {:?}", what, e);
            None
        }
    }
}

fn install_error_observers(window: &web::Window) {
    let on_error = Closure::wrap(Box::new(move |ev: web::ErrorEvent| {
        log::error!(
            "Global JS Error: {} {}:{}",
            ev.message(),
            ev.filename(),
            ev.lineno()
        );
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref());
    on_error.forget();

    let on_rejection = Closure::wrap(Box::new(move |ev: web::PromiseRejectionEvent| {
        log::error!("Unhandled Promise Rejection: {:?}", ev.reason());
    }) as Box<dyn FnMut(_)>);
    _ = window.add_event_listener_with_callback(
        "unhandledrejection",
        on_rejection.as_ref().unchecked_ref(),
    );
    on_rejection.forget();
}

// Run `f` once `event` fires on `target`, or now if `ready` already holds.
fn when(target: &web::EventTarget, event: &str, ready: bool, f: impl FnOnce() + 'static) {
    if ready {
        f();
        return;
    }
    let cb = Closure::once_into_js(f);
    _ = target.add_event_listener_with_callback(event, cb.unchecked_ref());
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;
    install_error_observers(&window);

    let state = document.ready_state();
    let loaded = state == "complete";
    let doc = document.clone();
    when(&window, "load", loaded, move || {
        loading::run(&doc, LoadingSchedule::default())
    });

    let dom_ready = state != "loading";
    when(&document, "DOMContentLoaded", dom_ready, || match boot() {
        Ok(site) => SITE.with(|s| *s.borrow_mut() = Some(site)),
        Err(e) => log::error!("[boot] {:?}", e),
    });
    Ok(())
}

fn start_particles(canvas: web::HtmlCanvasElement, scene: SceneState, teardown: Rc<RefCell<Teardown>>) {
    spawn_local(async move {
        let field = ParticleField::for_viewport(&scene.viewport.borrow(), &mut rand::thread_rng());
        let gpu = match render::GpuState::new(&canvas, &field).await {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[particles] disabled: {:?}", e);
                return;
            }
        };
        let ctx = Rc::new(RefCell::new(FrameContext {
            scene,
            field,
            gpu,
            canvas,
            last_instant: Instant::now(),
        }));
        teardown.borrow_mut().hold(frame::start_loop(ctx));
    });
}

/// Start every subsystem the page supports. Missing libraries or elements
/// disable single features; nothing here is fatal.
pub fn boot() -> anyhow::Result<Site> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let libs = tween::Libraries::detect(&window);
    let plan = BootPlan::from_capabilities(&libs.capabilities());
    if plan.is_static() {
        log::info!("[boot] animation libraries missing, content stays static");
    }

    let teardown = Rc::new(RefCell::new(Teardown::new()));
    let (w, h) = dom::inner_size();
    let scene = SceneState::new(w as f32, h as f32);
    let canvas = document
        .get_element_by_id(CANVAS_ID)
        .and_then(|el| el.dyn_into::<web::HtmlCanvasElement>().ok());
    let dots = Rc::new(RefCell::new(DotSync::new(&document)));
    let mascot = mascot::MascotView::find(&document);

    {
        let mut td = teardown.borrow_mut();

        if let Some(l) = guarded("viewport", events::wire_viewport(&scene, canvas.clone())) {
            td.hold(l);
        }
        if plan.dot_sync {
            if let Some(l) = guarded("scroll indicator", events::wire_dot_sync(&dots)) {
                td.hold(l);
            }
        }
        if plan.nav_links {
            if let Some(l) = guarded("nav links", events::wire_nav_links(&document)) {
                td.hold(l);
            }
        }
        if plan.sound {
            let board = Rc::new(RefCell::new(audio::SoundBoard::new(&document)));
            if let Some(l) = guarded("sound", audio::wire(&document, &board)) {
                td.hold(l);
            }
        }

        if let Some(gsap) = libs.gsap.available() {
            if plan.hero_intro {
                choreography::hero_intro(gsap, &document, &mut td);
            }
            if plan.card_hover {
                if let Some(l) = guarded("hover", choreography::wire_hover(gsap, &document)) {
                    td.hold(l);
                }
            }
            if plan.breathing {
                choreography::start_breathing(gsap, &document, &mut td);
            }
        }

        if let (Some(gsap), Some(st)) = (libs.gsap.available(), libs.scroll_trigger.available()) {
            if plan.entrances {
                choreography::section_entrances(gsap, st, &document, &mut td);
                choreography::motion_path_reveals(gsap, &document, &mut td);
            }
            if plan.camera_path {
                if let Some(l) = guarded("camera path", choreography::wire_camera_path(&document, &scene)) {
                    td.hold(l);
                }
            }
            if plan.decorations {
                if let Some(n) = guarded("floating elements", choreography::add_floating_elements(&document)) {
                    log::debug!("[scroll] {} floating elements", n);
                }
                choreography::card_scroll_transforms(gsap, st, &document, &mut td);
                if let Some(c) = &canvas {
                    if let Some(l) = guarded("parallax", choreography::wire_parallax(gsap, c)) {
                        td.hold(l);
                    }
                }
            }
            if let Some(m) = &mascot {
                if plan.mascot_reactions {
                    mascot::wire_reactions(st, &document, m, &mut td);
                }
                if plan.mascot_path {
                    td.hold(mascot::follow_scroll_path(gsap, m));
                }
            }
        }
    }

    if plan.particles {
        match &canvas {
            Some(c) => start_particles(c.clone(), scene.clone(), teardown.clone()),
            None => log::info!("[particles] no #{} canvas", CANVAS_ID),
        }
    }

    if let (true, Some(m)) = (plan.mascot_drag, &mascot) {
        let loaded = libs
            .rive
            .require(constants::RIVE_GLOBAL)
            .map_err(anyhow::Error::from)
            .and_then(|ns| mascot::load_animation(ns, &document, m, &teardown));
        guarded("mascot animation", loaded);
    }

    let on_pagehide = teardown.clone();
    let pagehide = guarded(
        "pagehide",
        dom::EventListener::new(&window, "pagehide", move |ev| {
            // A page entering the back/forward cache comes back with its loops.
            let persisted = ev
                .dyn_ref::<web::PageTransitionEvent>()
                .is_some_and(web::PageTransitionEvent::persisted);
            if persisted {
                log::debug!("[boot] page cached, keeping subsystems");
                return;
            }
            on_pagehide.borrow_mut().run();
        }),
    );

    log::info!("[boot] ready: {:?}", plan);
    Ok(Site {
        plan,
        teardown,
        dots,
        mascot,
        _pagehide: pagehide,
    })
}
