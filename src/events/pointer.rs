use crate::dom::{self, EventListener};
use crate::frame::SceneState;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Window resize and document mousemove, feeding the shared viewport.
pub fn wire_viewport(
    scene: &SceneState,
    canvas: Option<web::HtmlCanvasElement>,
) -> anyhow::Result<Vec<EventListener>> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    scene.resize(canvas.as_ref());
    let resize_scene = scene.clone();
    let on_resize = EventListener::new(&window, "resize", move |_| {
        resize_scene.resize(canvas.as_ref());
    })?;

    let move_scene = scene.clone();
    let on_move = EventListener::passive(&document, "mousemove", move |ev| {
        if let Some(me) = ev.dyn_ref::<web::MouseEvent>() {
            move_scene
                .viewport
                .borrow_mut()
                .pointer_moved(me.client_x() as f32, me.client_y() as f32);
        }
    })?;
    Ok(vec![on_resize, on_move])
}
