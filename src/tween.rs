//! Bindings to the page's tweening, scroll-observation and vector-animation
//! scripts. Each library is looked up on `window` once at boot.

use crate::constants::*;
use folio_core::{Capabilities, Capability};
use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

#[wasm_bindgen]
extern "C" {
    /// The `gsap` global.
    #[derive(Clone)]
    pub type Gsap;

    #[wasm_bindgen(method)]
    pub fn to(this: &Gsap, targets: &JsValue, vars: &Object) -> Tween;

    #[wasm_bindgen(method, js_name = fromTo)]
    pub fn from_to(this: &Gsap, targets: &JsValue, from: &Object, to: &Object) -> Tween;

    #[wasm_bindgen(method)]
    pub fn timeline(this: &Gsap, vars: &Object) -> Timeline;

    #[wasm_bindgen(method, js_name = registerPlugin)]
    pub fn register_plugin(this: &Gsap, plugin: &JsValue);

    pub type Tween;

    #[wasm_bindgen(method)]
    pub fn kill(this: &Tween);

    #[derive(Clone)]
    pub type Timeline;

    #[wasm_bindgen(method, js_name = fromTo)]
    pub fn from_to(
        this: &Timeline,
        targets: &JsValue,
        from: &Object,
        to: &Object,
        position: f64,
    ) -> Timeline;

    #[wasm_bindgen(method)]
    pub fn play(this: &Timeline) -> Timeline;

    #[wasm_bindgen(method)]
    pub fn pause(this: &Timeline) -> Timeline;

    #[wasm_bindgen(method)]
    pub fn resume(this: &Timeline) -> Timeline;

    #[wasm_bindgen(method)]
    pub fn reverse(this: &Timeline) -> Timeline;

    #[wasm_bindgen(method)]
    pub fn restart(this: &Timeline) -> Timeline;

    #[wasm_bindgen(method)]
    pub fn progress(this: &Timeline, value: f64) -> Timeline;

    #[wasm_bindgen(method)]
    pub fn kill(this: &Timeline);

    /// The `ScrollTrigger` global (its static API).
    pub type ScrollTriggerApi;

    #[wasm_bindgen(method)]
    pub fn create(this: &ScrollTriggerApi, vars: &Object) -> ScrollTrigger;

    pub type ScrollTrigger;

    #[wasm_bindgen(method)]
    pub fn kill(this: &ScrollTrigger);

    /// The `rive` global namespace.
    pub type RiveNamespace;

    #[derive(Clone)]
    pub type RiveInstance;

    #[wasm_bindgen(method)]
    pub fn play(this: &RiveInstance);

    #[wasm_bindgen(method)]
    pub fn pause(this: &RiveInstance);

    #[wasm_bindgen(method, js_name = resizeDrawingSurfaceToCanvas)]
    pub fn resize_drawing_surface_to_canvas(this: &RiveInstance);

    #[wasm_bindgen(method)]
    pub fn cleanup(this: &RiveInstance);
}

fn global(window: &web::Window, name: &str) -> Option<JsValue> {
    Reflect::get(window, &JsValue::from_str(name))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

/// Script libraries found on the page.
pub struct Libraries {
    pub gsap: Capability<Gsap>,
    pub scroll_trigger: Capability<ScrollTriggerApi>,
    pub motion_path: Capability<JsValue>,
    pub rive: Capability<RiveNamespace>,
}

impl Libraries {
    pub fn detect(window: &web::Window) -> Self {
        let libs = Self {
            gsap: Capability::from_option(global(window, GSAP_GLOBAL).map(JsValue::unchecked_into)),
            scroll_trigger: Capability::from_option(
                global(window, SCROLL_TRIGGER_GLOBAL).map(JsValue::unchecked_into),
            ),
            motion_path: Capability::from_option(global(window, MOTION_PATH_GLOBAL)),
            rive: Capability::from_option(global(window, RIVE_GLOBAL).map(JsValue::unchecked_into)),
        };
        libs.register_plugins();
        log::info!("[boot] libraries: {:?}", libs.capabilities());
        libs
    }

    pub fn capabilities(&self) -> Capabilities {
        Capabilities {
            tweening: self.gsap.is_available(),
            scroll_trigger: self.scroll_trigger.is_available(),
            motion_path: self.motion_path.is_available(),
            vector_animation: self.rive.is_available(),
        }
    }

    fn register_plugins(&self) {
        let (Some(gsap), Some(st)) = (self.gsap.available(), self.scroll_trigger.available()) else {
            return;
        };
        gsap.register_plugin(st);
        if let Some(mp) = self.motion_path.available() {
            gsap.register_plugin(mp);
        }
    }
}

/// Builder for the plain option objects the libraries take.
pub struct Vars(Object);

impl Default for Vars {
    fn default() -> Self {
        Self::new()
    }
}

impl Vars {
    pub fn new() -> Self {
        Self(Object::new())
    }

    pub fn value(self, key: &str, value: &JsValue) -> Self {
        _ = Reflect::set(&self.0, &JsValue::from_str(key), value);
        self
    }

    pub fn num(self, key: &str, value: f64) -> Self {
        self.value(key, &JsValue::from_f64(value))
    }

    pub fn str(self, key: &str, value: &str) -> Self {
        self.value(key, &JsValue::from_str(value))
    }

    pub fn flag(self, key: &str, value: bool) -> Self {
        self.value(key, &JsValue::from_bool(value))
    }

    pub fn nested(self, key: &str, vars: Vars) -> Self {
        self.value(key, &vars.build().into())
    }

    pub fn func(self, key: &str, f: &Function) -> Self {
        self.value(key, f.as_ref())
    }

    pub fn build(self) -> Object {
        self.0
    }
}

/// Array of elements usable as a tween target.
pub fn targets(elements: &[web::Element]) -> JsValue {
    elements.iter().collect::<Array>().into()
}

/// A tween killed when dropped.
pub struct TweenHandle(Tween);

impl From<Tween> for TweenHandle {
    fn from(t: Tween) -> Self {
        Self(t)
    }
}

impl Drop for TweenHandle {
    fn drop(&mut self) {
        self.0.kill();
    }
}

/// A scroll trigger together with the callbacks it invokes; killed when dropped.
pub struct TriggerBinding {
    trigger: ScrollTrigger,
    _callbacks: Vec<Closure<dyn FnMut()>>,
}

impl Drop for TriggerBinding {
    fn drop(&mut self) {
        self.trigger.kill();
    }
}

/// Incrementally assembles a `ScrollTrigger.create` call.
pub struct TriggerBuilder {
    vars: Vars,
    callbacks: Vec<Closure<dyn FnMut()>>,
}

impl TriggerBuilder {
    pub fn new(trigger: &JsValue, start: &str, end: &str) -> Self {
        Self {
            vars: Vars::new()
                .value("trigger", trigger)
                .str("start", start)
                .str("end", end),
            callbacks: Vec::new(),
        }
    }

    /// Attach `f` to a callback slot such as `onEnter` or `onUpdate`.
    pub fn on(mut self, slot: &str, f: impl FnMut() + 'static) -> Self {
        let cb = Closure::wrap(Box::new(f) as Box<dyn FnMut()>);
        self.vars = self.vars.func(slot, cb.as_ref().unchecked_ref());
        self.callbacks.push(cb);
        self
    }

    pub fn create(self, api: &ScrollTriggerApi) -> TriggerBinding {
        TriggerBinding {
            trigger: api.create(&self.vars.build()),
            _callbacks: self.callbacks,
        }
    }
}

/// `new rive.Rive(options)`.
pub fn construct_rive(ns: &RiveNamespace, options: &Object) -> anyhow::Result<RiveInstance> {
    let ctor = Reflect::get(ns, &JsValue::from_str("Rive"))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into::<Function>()
        .map_err(|_| anyhow::anyhow!("rive.Rive is not a constructor"))?;
    let instance = Reflect::construct(&ctor, &Array::of1(options))
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    Ok(instance.unchecked_into())
}
