use crate::core::Scene;
use crate::render::CanvasSurface;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub scene: Rc<RefCell<Scene>>,
    pub surface: CanvasSurface,
}

impl FrameContext {
    pub fn frame(&mut self) {
        self.scene.borrow_mut().frame(&mut self.surface);
    }
}

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running `requestAnimationFrame` loop.
///
/// The tick closure reschedules itself and records the pending frame id so
/// `cancel` can stop the loop and drop the closure.
pub struct FrameLoop {
    tick: TickSlot,
    pending: Rc<Cell<Option<i32>>>,
}

fn request_frame(tick: &TickSlot, pending: &Cell<Option<i32>>) {
    let Some(window) = web::window() else {
        return;
    };
    if let Some(closure) = tick.borrow().as_ref() {
        match window.request_animation_frame(closure.as_ref().unchecked_ref::<js_sys::Function>()) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => {
                pending.set(None);
                log::error!("requestAnimationFrame failed: {:?}", e);
            }
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> FrameLoop {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let pending_clone = pending.clone();
    let mut frame_ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_clone.set(None);
        frame_ctx.frame();
        request_frame(&tick_clone, &pending_clone);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &pending);
    FrameLoop { tick, pending }
}

impl FrameLoop {
    pub fn cancel(&self) {
        if let Some(id) = self.pending.take() {
            if let Some(w) = web::window() {
                _ = w.cancel_animation_frame(id);
            }
        }
        // breaks the closure's reference to its own slot
        self.tick.borrow_mut().take();
    }
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        self.cancel();
    }
}
