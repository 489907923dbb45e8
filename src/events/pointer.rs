use crate::audio::ToneGenerator;
use crate::core::{canvas_relative, touch_position, Scene};
use crate::dom::Listener;
use glam::DVec2;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[derive(Clone)]
pub struct InputWiring {
    pub canvas: web::HtmlCanvasElement,
    pub scene: Rc<RefCell<Scene>>,
    pub tones: Rc<RefCell<ToneGenerator>>,
}

impl InputWiring {
    fn canvas_origin(&self) -> DVec2 {
        let rect = self.canvas.get_bounding_client_rect();
        DVec2::new(rect.left(), rect.top())
    }

    fn handle_move(&self, pos: DVec2) {
        let note = self.scene.borrow_mut().on_move(pos, Instant::now());
        if let Some(note) = note {
            self.tones.borrow_mut().play(&note);
        }
    }
}

/// Client coordinates of the first touch point, if any.
#[inline]
pub fn first_touch_client(ev: &web::TouchEvent) -> Option<DVec2> {
    ev.touches()
        .item(0)
        .map(|t| DVec2::new(t.client_x() as f64, t.client_y() as f64))
}

pub fn wire_input_handlers(w: InputWiring) -> Result<Vec<Listener>, JsValue> {
    Ok(vec![wire_mousemove(&w)?, wire_touchmove(&w)?])
}

fn wire_mousemove(w: &InputWiring) -> Result<Listener, JsValue> {
    let w = w.clone();
    let window = web::window().ok_or_else(|| JsValue::from_str("no window"))?;
    Listener::new(&window, "mousemove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::MouseEvent>() {
            let client = DVec2::new(ev.client_x() as f64, ev.client_y() as f64);
            w.handle_move(canvas_relative(client, w.canvas_origin()));
        }
    })
}

fn wire_touchmove(w: &InputWiring) -> Result<Listener, JsValue> {
    let w = w.clone();
    let canvas = w.canvas.clone();
    Listener::new(&canvas, "touchmove", move |ev: web::Event| {
        if let Some(ev) = ev.dyn_ref::<web::TouchEvent>() {
            // an empty touch list carries no position
            if let Some(pos) = touch_position(first_touch_client(ev), w.canvas_origin()) {
                w.handle_move(pos);
            }
            ev.prevent_default();
        }
    })
}
