use crate::constants::*;
use glam::DVec2;
use rand::prelude::*;
use std::collections::VecDeque;

/// Geometry used when drawing a shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    Square,
    Triangle,
}

pub const SHAPE_KINDS: [ShapeKind; 3] = [ShapeKind::Circle, ShapeKind::Square, ShapeKind::Triangle];

/// An ephemeral particle spawned by pointer movement.
///
/// Position, velocity and size are in canvas pixels. `life` falls from
/// `SPAWN_LIFE` by `LIFE_STEP` per frame and `opacity` tracks `life²`, so the
/// fade accelerates towards the end.
#[derive(Clone, Debug)]
pub struct Shape {
    pub position: DVec2,
    pub velocity: DVec2,
    pub size: f64,
    pub color: &'static str,
    pub kind: ShapeKind,
    pub life: f64,
    pub opacity: f64,
    spawn_life: f64,
    age: u32,
}

impl Shape {
    pub fn new(
        position: DVec2,
        velocity: DVec2,
        size: f64,
        color: &'static str,
        kind: ShapeKind,
    ) -> Self {
        Self {
            position,
            velocity,
            size,
            color,
            kind,
            life: SPAWN_LIFE,
            opacity: SPAWN_LIFE * SPAWN_LIFE,
            spawn_life: SPAWN_LIFE,
            age: 0,
        }
    }

    /// Advance one frame: decay life, refresh opacity, grow, move.
    pub fn tick(&mut self) {
        self.age += 1;
        // derived from age so 100 steps of 0.01 land exactly on zero
        self.life = self.spawn_life - self.age as f64 * LIFE_STEP;
        self.opacity = self.life * self.life;
        self.size += SIZE_GROWTH_PER_FRAME;
        self.position += self.velocity;
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.life > 0.0
    }
}

#[inline]
pub fn sample_kind<R: Rng>(rng: &mut R) -> ShapeKind {
    SHAPE_KINDS[rng.gen_range(0..SHAPE_KINDS.len())]
}

#[inline]
pub fn sample_color<R: Rng>(rng: &mut R) -> &'static str {
    PALETTE.choose(rng).copied().unwrap_or("#ffffff")
}

#[inline]
pub fn sample_velocity<R: Rng>(rng: &mut R) -> DVec2 {
    DVec2::new(
        rng.gen_range(-VELOCITY_MAX..VELOCITY_MAX),
        rng.gen_range(-VELOCITY_MAX..VELOCITY_MAX),
    )
}

/// Sample one freshly spawned shape at `position`.
pub fn sample_shape<R: Rng>(rng: &mut R, position: DVec2) -> Shape {
    let size = rng.gen_range(SIZE_MIN..SIZE_MAX);
    let color = sample_color(rng);
    let kind = sample_kind(rng);
    let velocity = sample_velocity(rng);
    Shape::new(position, velocity, size, color, kind)
}

/// Bounded collection of live shapes.
///
/// Shapes are kept in spawn order. Every shape decays at the same rate, so the
/// front is always the oldest and eviction on overflow is a `pop_front`.
#[derive(Clone, Debug)]
pub struct ShapePool {
    shapes: VecDeque<Shape>,
    capacity: usize,
}

impl ShapePool {
    pub fn new(capacity: usize) -> Self {
        // grows on demand; the capacity only bounds eviction
        Self {
            shapes: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    /// Insert a shape, evicting the oldest one if the pool is full.
    pub fn push(&mut self, shape: Shape) {
        if self.shapes.len() >= self.capacity {
            self.shapes.pop_front();
        }
        self.shapes.push_back(shape);
    }

    /// Spawn `count` random shapes at `position`.
    pub fn spawn_burst<R: Rng>(&mut self, rng: &mut R, position: DVec2, count: usize) {
        for _ in 0..count {
            self.push(sample_shape(rng, position));
        }
    }

    /// Advance every shape one frame, then drop the dead ones.
    pub fn tick(&mut self) {
        for shape in self.shapes.iter_mut() {
            shape.tick();
        }
        self.shapes.retain(Shape::is_alive);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.shapes.clear();
    }
}
