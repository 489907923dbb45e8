use crate::core::{SceneParams, OVERRIDE_KEYS};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// An event listener that deregisters itself when dropped.
pub struct Listener {
    target: web::EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        kind: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

/// Current viewport size in CSS pixels, `(innerWidth, innerHeight)`.
pub fn viewport_size(window: &web::Window) -> (u32, u32) {
    let read = |v: Result<JsValue, JsValue>| {
        v.ok()
            .and_then(|v| v.as_f64())
            .map(|f| f.max(0.0) as u32)
            .unwrap_or(0)
    };
    (read(window.inner_width()), read(window.inner_height()))
}

/// Size the canvas backing store to the viewport; returns the new size.
pub fn sync_canvas_to_viewport(canvas: &web::HtmlCanvasElement) -> Option<(u32, u32)> {
    let window = web::window()?;
    let (w, h) = viewport_size(&window);
    canvas.set_width(w);
    canvas.set_height(h);
    Some((w, h))
}

/// Read scene overrides from the canvas `data-*` attributes.
pub fn params_from_dataset(canvas: &web::HtmlCanvasElement) -> SceneParams {
    let dataset = canvas.dataset();
    let values: Vec<(&str, String)> = OVERRIDE_KEYS
        .iter()
        .filter_map(|key| dataset.get(key).map(|v| (*key, v)))
        .collect();
    SceneParams::from_overrides(values.iter().map(|(k, v)| (*k, v.as_str())))
}
