use crate::dom;
use crate::render::GpuState;
use folio_core::{Camera, ParticleField, ViewportState, MAX_PIXEL_RATIO};
use glam::Vec3;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// State shared between the frame loop and the DOM event handlers.
#[derive(Clone)]
pub struct SceneState {
    pub viewport: Rc<RefCell<ViewportState>>,
    pub camera: Rc<RefCell<Camera>>,
    /// Where the scroll-driven camera path wants the camera; `None` until a
    /// section reports progress.
    pub camera_target: Rc<Cell<Option<Vec3>>>,
}

impl SceneState {
    pub fn new(width: f32, height: f32) -> Self {
        let viewport = ViewportState::new(width, height);
        Self {
            camera: Rc::new(RefCell::new(Camera::new(viewport.aspect()))),
            viewport: Rc::new(RefCell::new(viewport)),
            camera_target: Rc::new(Cell::new(None)),
        }
    }

    /// Window resize: viewport halves, camera aspect and canvas backing size.
    pub fn resize(&self, canvas: Option<&web::HtmlCanvasElement>) {
        let (w, h) = dom::inner_size();
        let (w, h) = (w as f32, h as f32);
        self.viewport.borrow_mut().resize(w, h);
        self.camera.borrow_mut().resize(w, h);
        if let Some(c) = canvas {
            dom::sync_canvas_backing_size(c, MAX_PIXEL_RATIO);
        }
    }
}

pub struct FrameContext {
    pub scene: SceneState,
    pub field: ParticleField,
    pub gpu: GpuState,
    pub canvas: web::HtmlCanvasElement,
    pub last_instant: Instant,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        let offset = self.scene.viewport.borrow().pointer_offset;
        self.field.advance(offset);

        let mut camera = self.scene.camera.borrow_mut();
        if let Some(target) = self.scene.camera_target.get() {
            camera.ease_toward(target, dt_sec);
        }

        self.gpu
            .resize_if_needed(self.canvas.width(), self.canvas.height());
        match self.gpu.render(&camera, &self.field) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => self.gpu.reconfigure(),
            Err(e) => log::error!("[particles] render error: {:?}", e),
        }
    }
}

/// Handle to a running `requestAnimationFrame` loop.
pub struct FrameLoop {
    pending: Rc<Cell<Option<i32>>>,
    tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>>,
}

impl FrameLoop {
    /// Cancel the pending frame and release the loop closure.
    pub fn stop(&self) {
        if let (Some(id), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
        log::debug!("[particles] frame loop stopped");
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) -> Option<i32> {
    let window = web::window()?;
    let tick = tick.borrow();
    let cb = tick.as_ref()?;
    window
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) -> FrameLoop {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        frame_ctx.borrow_mut().frame();
        pending_clone.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));
    pending.set(request_frame(&tick));
    FrameLoop { pending, tick }
}
