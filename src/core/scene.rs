use crate::core::draw::{draw_frame, Surface};
use crate::core::params::SceneParams;
use crate::core::shapes::ShapePool;
use crate::core::tone::{pick_note, Note, ToneThrottle};
use glam::DVec2;
use instant::Instant;
use rand::prelude::*;

/// Drawing surface size in canvas pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Client coordinates relative to the canvas bounding-box origin.
#[inline]
pub fn canvas_relative(client: DVec2, canvas_origin: DVec2) -> DVec2 {
    client - canvas_origin
}

/// Canvas-relative position of the first touch point; `None` for an empty touch list.
#[inline]
pub fn touch_position(first_touch: Option<DVec2>, canvas_origin: DVec2) -> Option<DVec2> {
    first_touch.map(|client| canvas_relative(client, canvas_origin))
}

/// All mutable state of the landing canvas.
///
/// Pointer handlers call `on_move`, the frame loop calls `frame`; both run on
/// the browser's single thread so they never interleave.
///
/// Typical usage:
/// - Construct with `Scene::new(params)`
/// - Call `resize` on mount and on every window resize
/// - Call `on_move(pos, now)` per pointer move; play the returned note, if any
/// - Call `frame(surface)` once per animation frame
pub struct Scene {
    pub params: SceneParams,
    pool: ShapePool,
    throttle: ToneThrottle,
    rng: StdRng,
    viewport: Viewport,
}

impl Scene {
    pub fn new(params: SceneParams) -> Self {
        let rng = match params.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            pool: ShapePool::new(params.max_shapes),
            throttle: ToneThrottle::new(params.tone_interval),
            rng,
            viewport: Viewport::default(),
            params,
        }
    }

    /// Spawn a burst at `pos` and return a note when the tone throttle allows one.
    pub fn on_move(&mut self, pos: DVec2, now: Instant) -> Option<Note> {
        self.pool
            .spawn_burst(&mut self.rng, pos, self.params.burst_size());
        if !self.params.sound {
            return None;
        }
        if self.throttle.try_acquire(now) {
            Some(pick_note(&mut self.rng))
        } else {
            None
        }
    }

    /// Advance every shape one step and prune the dead ones.
    #[inline]
    pub fn tick(&mut self) {
        self.pool.tick();
    }

    /// One animation frame: step the simulation then redraw the viewport.
    pub fn frame<S: Surface + ?Sized>(&mut self, surface: &mut S) {
        self.tick();
        draw_frame(
            surface,
            &self.pool,
            self.viewport.width as f64,
            self.viewport.height as f64,
        );
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.viewport = Viewport { width, height };
    }

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn pool(&self) -> &ShapePool {
        &self.pool
    }

    /// Drop every live shape and forget the last tone time.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.throttle.reset();
    }
}
