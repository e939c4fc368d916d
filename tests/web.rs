#![cfg(target_arch = "wasm32")]

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{
    Document, Element, EventTarget, HtmlElement, MouseEvent, MouseEventInit, PageTransitionEvent,
    PageTransitionEventInit,
};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window()
        .expect("no window")
        .document()
        .expect("no document")
}

fn add(doc: &Document, tag: &str, attrs: &[(&str, &str)]) -> Element {
    let el = doc.create_element(tag).expect("create element");
    for (k, v) in attrs {
        el.set_attribute(k, v).expect("set attribute");
    }
    doc.body().expect("body").prepend_with_node_1(&el).expect("prepend");
    el
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .expect("window")
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .expect("setTimeout");
    });
    JsFuture::from(promise).await.expect("timer");
}

fn page_hide(persisted: bool) {
    let init = PageTransitionEventInit::new();
    init.set_persisted(persisted);
    let ev = PageTransitionEvent::new_with_event_init_dict("pagehide", &init).expect("event");
    web_sys::window()
        .expect("window")
        .dispatch_event(&ev)
        .expect("dispatch");
}

fn mouse(target: &EventTarget, kind: &str, x: i32, y: i32) {
    let init = MouseEventInit::new();
    init.set_bubbles(true);
    init.set_client_x(x);
    init.set_client_y(y);
    let ev = MouseEvent::new_with_mouse_event_init_dict(kind, &init).expect("event");
    target.dispatch_event(&ev).expect("dispatch");
}

fn px(el: &HtmlElement, property: &str) -> f32 {
    let value = el.style().get_property_value(property).expect("style");
    value
        .trim_end_matches("px")
        .parse()
        .unwrap_or_else(|_| panic!("{} = {:?}", property, value))
}

// Stand-in for the vector animation runtime: loads on the next tick.
fn install_fake_rive() {
    js_sys::Function::new_no_args(
        r#"
        window.rive = {
            Rive: function (opts) {
                this.play = function () {};
                this.pause = function () {};
                this.resizeDrawingSurfaceToCanvas = function () {};
                this.cleanup = function () {};
                setTimeout(opts.onLoad, 0);
            },
        };
        "#,
    )
    .call0(&JsValue::NULL)
    .expect("install rive");
}

fn remove_fake_rive() {
    let window = web_sys::window().expect("window");
    js_sys::Reflect::delete_property(&window, &JsValue::from_str("rive")).expect("delete");
}

#[wasm_bindgen_test]
fn boot_without_libraries_does_not_throw() {
    let site = folio_web::boot().expect("boot");
    let plan = site.plan();
    assert!(plan.is_static());
    assert!(!plan.mascot_drag);
    site.shutdown();
}

#[wasm_bindgen_test]
fn first_section_dot_is_active_at_top() {
    let doc = document();
    let dots: Vec<Element> = (0..2)
        .map(|_| add(&doc, "span", &[("class", "scroll-dot")]))
        .collect();
    // prepended, so the second section ends up first in the document
    let second = add(&doc, "div", &[("class", "section"), ("style", "height: 6000px")]);
    let first = add(&doc, "div", &[("class", "section"), ("style", "height: 6000px")]);
    web_sys::window().expect("window").scroll_to_with_x_and_y(0.0, 0.0);

    let site = folio_web::boot().expect("boot");
    site.sync_dots();
    assert_eq!(site.active_dot(), Some(0));
    assert!(dots[0].class_list().contains("active"));
    assert!(!dots[1].class_list().contains("active"));

    site.shutdown();
    for el in dots.iter().chain([&first, &second]) {
        el.remove();
    }
}

#[wasm_bindgen_test]
fn sound_button_shows_and_flips_icon() {
    let doc = document();
    let storage = web_sys::window().expect("window").local_storage().ok().flatten();
    if let Some(s) = &storage {
        s.remove_item("sound").expect("clear preference");
    }
    let button = add(&doc, "button", &[("id", "sound-toggle")]);

    let site = folio_web::boot().expect("boot");
    assert_eq!(button.text_content().as_deref(), Some("🔊"));
    button.unchecked_ref::<HtmlElement>().click();
    assert_eq!(button.text_content().as_deref(), Some("🔇"));
    if let Some(s) = &storage {
        assert_eq!(s.get_item("sound").expect("read"), Some("off".to_string()));
        s.remove_item("sound").expect("clear preference");
    }

    site.shutdown();
    button.remove();
}

#[wasm_bindgen_test]
fn mascot_is_shown_even_without_animation_library() {
    let doc = document();
    let mascot = add(&doc, "div", &[("id", "mascot-octopus"), ("style", "display: none")]);

    let site = folio_web::boot().expect("boot");
    let style = mascot.get_attribute("style").unwrap_or_default();
    assert!(style.contains("display: block"), "{}", style);
    assert_eq!(site.mascot_section(), None);

    site.shutdown();
    mascot.remove();
}

#[wasm_bindgen_test]
fn cached_page_keeps_running_until_real_unload() {
    let doc = document();
    let dot = add(&doc, "span", &[("class", "scroll-dot")]);
    let section = add(&doc, "div", &[("class", "section"), ("style", "height: 6000px")]);
    web_sys::window().expect("window").scroll_to_with_x_and_y(0.0, 0.0);

    let site = folio_web::boot().expect("boot");
    page_hide(true);
    assert!(site.is_running());
    site.sync_dots();
    assert_eq!(site.active_dot(), Some(0));

    page_hide(false);
    assert!(!site.is_running());
    // a second unload after restore must not throw
    page_hide(false);

    drop(site);
    dot.remove();
    section.remove();
}

#[wasm_bindgen_test]
async fn dragged_mascot_snaps_back_to_its_anchor() {
    let doc = document();
    web_sys::window().expect("window").scroll_to_with_x_and_y(0.0, 0.0);
    let canvas = add(&doc, "canvas", &[("id", "rive-octopus")]);
    let mascot: HtmlElement = add(
        &doc,
        "div",
        &[
            ("id", "mascot-octopus"),
            (
                "style",
                "position: absolute; left: 100px; top: 200px; width: 50px; height: 50px",
            ),
        ],
    )
    .unchecked_into();
    install_fake_rive();

    let site = folio_web::boot().expect("boot");
    assert!(site.plan().mascot_drag);
    sleep(20).await;
    let (left, top) = (px(&mascot, "left"), px(&mascot, "top"));

    // a scroll-path transform moves the painted box but not left/top
    mascot
        .style()
        .set_property("transform", "translate(300px, 150px)")
        .expect("transform");
    let grab = (left as i32 + 310, top as i32 + 160);
    mouse(&mascot, "mousedown", grab.0, grab.1);
    mouse(&doc, "mousemove", grab.0, grab.1);
    assert_eq!((px(&mascot, "left"), px(&mascot, "top")), (left, top));

    mouse(&doc, "mousemove", grab.0 + 40, grab.1 + 30);
    assert_eq!(
        (px(&mascot, "left"), px(&mascot, "top")),
        (left + 40.0, top + 30.0)
    );

    mouse(&doc, "mouseup", grab.0 + 40, grab.1 + 30);
    assert_eq!((px(&mascot, "left"), px(&mascot, "top")), (left, top));
    assert!(!mascot
        .style()
        .get_property_value("transition")
        .expect("style")
        .is_empty());

    sleep(folio_core::SNAP_BACK_MS as i32 + 100).await;
    assert_eq!(
        mascot.style().get_property_value("transition").expect("style"),
        ""
    );
    assert_eq!((px(&mascot, "left"), px(&mascot, "top")), (left, top));

    site.shutdown();
    remove_fake_rive();
    mascot.remove();
    canvas.remove();
}
