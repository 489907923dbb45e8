// Host-side tests for shape decay, spawning and the bounded pool.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod core {
    pub mod draw {
        include!("../src/core/draw.rs");
    }
    pub mod params {
        include!("../src/core/params.rs");
    }
    pub mod scene {
        include!("../src/core/scene.rs");
    }
    pub mod shapes {
        include!("../src/core/shapes.rs");
    }
    pub mod tone {
        include!("../src/core/tone.rs");
    }
}

use crate::constants::*;
use crate::core::shapes::*;
use glam::DVec2;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn still_shape(size: f64) -> Shape {
    Shape::new(
        DVec2::new(100.0, 100.0),
        DVec2::ZERO,
        size,
        "#ffffff",
        ShapeKind::Circle,
    )
}

#[test]
fn opacity_is_squared_remaining_life() {
    let mut s = still_shape(10.0);
    assert_eq!(s.opacity, 1.0);
    for n in 1..100 {
        s.tick();
        let life = 1.0 - 0.01 * n as f64;
        assert!((s.life - life).abs() < 1e-12, "life at tick {n}: {}", s.life);
        assert!((s.opacity - life * life).abs() < 1e-12);
        assert!(s.is_alive(), "died early at tick {n}");
    }
    s.tick();
    assert!(!s.is_alive());
}

#[test]
fn size_grows_linearly_and_never_shrinks() {
    let mut s = still_shape(12.0);
    let mut prev = s.size;
    for n in 1..=60 {
        s.tick();
        assert!(s.size >= prev);
        assert!((s.size - (12.0 + 0.2 * n as f64)).abs() < 1e-9);
        prev = s.size;
    }
}

#[test]
fn position_advances_by_velocity() {
    let mut s = Shape::new(
        DVec2::new(10.0, 20.0),
        DVec2::new(1.5, -0.5),
        10.0,
        "#ffffff",
        ShapeKind::Square,
    );
    for _ in 0..4 {
        s.tick();
    }
    assert!((s.position - DVec2::new(16.0, 18.0)).length() < 1e-9);
    assert_eq!(s.kind, ShapeKind::Square);
    assert_eq!(s.color, "#ffffff");
}

#[test]
fn single_shape_lives_exactly_one_hundred_ticks() {
    let mut pool = ShapePool::new(MAX_SHAPES);
    pool.push(still_shape(10.0));
    for _ in 0..50 {
        pool.tick();
    }
    assert_eq!(pool.len(), 1);
    let s = pool.iter().next().unwrap();
    assert!((s.life - 0.5).abs() < 1e-12);
    assert!((s.opacity - 0.25).abs() < 1e-12);
    assert!((s.position - DVec2::new(100.0, 100.0)).length() < 1e-12);

    for _ in 0..49 {
        pool.tick();
    }
    assert_eq!(pool.len(), 1);
    pool.tick();
    assert!(pool.is_empty());
}

#[test]
fn burst_spawns_requested_count_at_position() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut pool = ShapePool::new(MAX_SHAPES);
    let at = DVec2::new(42.0, 17.5);
    pool.spawn_burst(&mut rng, at, SHAPES_PER_MOVE);
    assert_eq!(pool.len(), 3);
    for s in pool.iter() {
        assert_eq!(s.position, at);
        assert_eq!(s.life, SPAWN_LIFE);
        assert_eq!(s.opacity, 1.0);
    }
}

#[test]
fn sampled_shapes_stay_in_their_ranges() {
    let mut rng = StdRng::seed_from_u64(1234);
    let mut kinds_seen = [false; 3];
    for _ in 0..500 {
        let s = sample_shape(&mut rng, DVec2::ZERO);
        assert!(s.size >= SIZE_MIN && s.size < SIZE_MAX);
        assert!(s.velocity.x.abs() <= VELOCITY_MAX && s.velocity.y.abs() <= VELOCITY_MAX);
        assert!(PALETTE.contains(&s.color));
        let i = SHAPE_KINDS.iter().position(|k| *k == s.kind).unwrap();
        kinds_seen[i] = true;
    }
    assert!(kinds_seen.iter().all(|seen| *seen), "{kinds_seen:?}");
}

#[test]
fn sampling_is_reproducible_under_a_fixed_seed() {
    let mut a = StdRng::seed_from_u64(99);
    let mut b = StdRng::seed_from_u64(99);
    for _ in 0..20 {
        let sa = sample_shape(&mut a, DVec2::ZERO);
        let sb = sample_shape(&mut b, DVec2::ZERO);
        assert_eq!(sa.size, sb.size);
        assert_eq!(sa.velocity, sb.velocity);
        assert_eq!(sa.color, sb.color);
        assert_eq!(sa.kind, sb.kind);
    }
}

#[test]
fn full_pool_evicts_oldest_first() {
    let mut pool = ShapePool::new(5);
    for i in 0..7 {
        pool.push(still_shape(i as f64));
    }
    assert_eq!(pool.len(), 5);
    let sizes: Vec<f64> = pool.iter().map(|s| s.size).collect();
    assert_eq!(sizes, vec![2.0, 3.0, 4.0, 5.0, 6.0]);
}

#[test]
fn eviction_keeps_oldest_at_front_after_pruning() {
    let mut pool = ShapePool::new(4);
    pool.push(still_shape(0.0));
    for _ in 0..60 {
        pool.tick();
    }
    pool.push(still_shape(1.0));
    pool.push(still_shape(2.0));
    pool.push(still_shape(3.0));
    pool.push(still_shape(4.0));
    // the first shape is the oldest and goes first
    let sizes: Vec<f64> = pool.iter().map(|s| s.size).collect();
    assert_eq!(sizes, vec![1.0, 2.0, 3.0, 4.0]);
    assert!(pool.iter().all(|s| s.life == SPAWN_LIFE));
}

#[test]
fn zero_capacity_is_clamped_to_one() {
    let mut pool = ShapePool::new(0);
    assert_eq!(pool.capacity(), 1);
    pool.push(still_shape(1.0));
    pool.push(still_shape(2.0));
    assert_eq!(pool.len(), 1);
    assert_eq!(pool.iter().next().unwrap().size, 2.0);
}

#[test]
fn ticking_an_empty_pool_is_a_no_op() {
    let mut pool = ShapePool::new(3);
    pool.tick();
    assert!(pool.is_empty());
}

#[test]
fn huge_capacity_does_not_allocate_up_front() {
    let mut pool = ShapePool::new(usize::MAX);
    assert_eq!(pool.capacity(), usize::MAX);
    pool.push(still_shape(1.0));
    assert_eq!(pool.len(), 1);
}
