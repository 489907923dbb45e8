#![cfg(target_arch = "wasm32")]
use crate::audio::ToneGenerator;
use crate::core::Scene;
use crate::dom::Listener;
use crate::frame::{FrameContext, FrameLoop};
use crate::render::CanvasSurface;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod audio;
mod constants;
mod core;
mod dom;
mod events;
mod frame;
mod panels;
mod render;

/// A mounted landing canvas.
///
/// Owns everything registered on mount; `dispose` (or dropping the handle)
/// cancels the frame loop, removes every listener and closes audio.
pub struct Landing {
    scene: Rc<RefCell<Scene>>,
    tones: Rc<RefCell<ToneGenerator>>,
    frame_loop: Option<FrameLoop>,
    listeners: Vec<Listener>,
}

impl Landing {
    pub fn dispose(&mut self) {
        if let Some(frame_loop) = self.frame_loop.take() {
            frame_loop.cancel();
        }
        self.listeners.clear();
        self.tones.borrow_mut().close();
        let mut scene = self.scene.borrow_mut();
        if !scene.pool().is_empty() {
            log::debug!("dropping {} live shapes", scene.pool().len());
        }
        scene.reset();
        log::info!("landing canvas disposed");
    }
}

impl Drop for Landing {
    fn drop(&mut self) {
        if self.frame_loop.is_some() {
            self.dispose();
        }
    }
}

thread_local! {
    static MOUNTED: RefCell<Option<Landing>> = const { RefCell::new(None) };
}

fn mount(canvas_id: &str) -> anyhow::Result<Landing> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", canvas_id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let surface = CanvasSurface::new(&canvas)?;

    let params = dom::params_from_dataset(&canvas);
    log::info!(
        "[config] max_shapes={} per_move={} tone_interval={}ms seed={:?} sound={}",
        params.max_shapes,
        params.shapes_per_move,
        params.tone_interval.as_millis(),
        params.seed,
        params.sound
    );
    let scene = Rc::new(RefCell::new(Scene::new(params)));
    let tones = Rc::new(RefCell::new(ToneGenerator::new()));

    let mut listeners = Vec::new();
    listeners.push(
        events::wire_canvas_resize(&canvas, &scene).map_err(|e| anyhow::anyhow!("{:?}", e))?,
    );
    listeners.extend(
        events::wire_input_handlers(events::InputWiring {
            canvas: canvas.clone(),
            scene: scene.clone(),
            tones: tones.clone(),
        })
        .map_err(|e| anyhow::anyhow!("{:?}", e))?,
    );
    // panels are decoration; the canvas still works without them
    match panels::mount(&document) {
        Ok(l) => listeners.extend(l),
        Err(e) => log::warn!("[panels] not mounted: {:?}", e),
    }

    let frame_loop = frame::start_loop(FrameContext {
        scene: scene.clone(),
        surface,
    });

    {
        let scene = scene.borrow();
        let vp = scene.viewport();
        log::info!(
            "landing canvas mounted at {}x{}, pool capacity {}",
            vp.width,
            vp.height,
            scene.pool().capacity()
        );
    }
    Ok(Landing {
        scene,
        tones,
        frame_loop: Some(frame_loop),
        listeners,
    })
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("shape-canvas starting");

    match mount(constants::CANVAS_ID) {
        Ok(landing) => MOUNTED.with(|m| {
            // replacing a previous mount drops and disposes it
            *m.borrow_mut() = Some(landing);
        }),
        Err(e) => log::error!("mount error: {:?}", e),
    }
    Ok(())
}

/// Tear down the canvas mounted by `start`.
#[wasm_bindgen]
pub fn unmount() {
    if let Some(mut landing) = MOUNTED.with(|m| m.borrow_mut().take()) {
        landing.dispose();
    }
}
