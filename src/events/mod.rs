pub mod pointer;

pub use pointer::{wire_input_handlers, InputWiring};

use crate::core::Scene;
use crate::dom::{self, Listener};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsValue;
use web_sys as web;

/// Keep the canvas sized to the viewport and the scene's recorded viewport in sync.
pub fn wire_canvas_resize(
    canvas: &web::HtmlCanvasElement,
    scene: &Rc<RefCell<Scene>>,
) -> Result<Listener, JsValue> {
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    resize_now(canvas, scene);
    let canvas = canvas.clone();
    let scene = scene.clone();
    Listener::new(&window, "resize", move |_ev: web::Event| {
        resize_now(&canvas, &scene);
    })
}

fn resize_now(canvas: &web::HtmlCanvasElement, scene: &Rc<RefCell<Scene>>) {
    if let Some((w, h)) = dom::sync_canvas_to_viewport(canvas) {
        scene.borrow_mut().resize(w, h);
    }
}
