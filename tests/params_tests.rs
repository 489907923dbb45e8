// Host-side tests for runtime parameters and canvas data-attribute overrides.
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
use crate::core::params::*;
use std::time::Duration;

#[test]
fn defaults_come_from_constants() {
    let p = SceneParams::default();
    assert_eq!(p.max_shapes, MAX_SHAPES);
    assert_eq!(p.shapes_per_move, SHAPES_PER_MOVE);
    assert_eq!(p.tone_interval, Duration::from_millis(TONE_INTERVAL_MS));
    assert_eq!(p.seed, None);
    assert!(p.sound);
}

#[test]
fn overrides_apply_by_dataset_key() {
    let p = SceneParams::from_overrides([
        ("maxShapes", "50"),
        ("shapesPerMove", "5"),
        ("toneIntervalMs", " 250 "),
        ("seed", "42"),
        ("sound", "off"),
    ]);
    assert_eq!(p.max_shapes, 50);
    assert_eq!(p.shapes_per_move, 5);
    assert_eq!(p.tone_interval, Duration::from_millis(250));
    assert_eq!(p.seed, Some(42));
    assert!(!p.sound);
}

#[test]
fn invalid_values_keep_defaults() {
    let p = SceneParams::from_overrides([
        ("maxShapes", "lots"),
        ("toneIntervalMs", "-5"),
        ("sound", "maybe"),
        ("seed", ""),
    ]);
    assert_eq!(p, SceneParams::default());
}

#[test]
fn zero_capacity_is_rejected() {
    let mut p = SceneParams::default();
    assert!(p.apply_override("maxShapes", "0").is_err());
    assert_eq!(p.max_shapes, MAX_SHAPES);
}

#[test]
fn unknown_keys_are_ignored() {
    let mut p = SceneParams::default();
    assert!(p.apply_override("theme", "dark").is_ok());
    assert_eq!(p, SceneParams::default());
}

#[test]
fn sound_accepts_boolean_spellings() {
    let mut p = SceneParams::default();
    for (value, expected) in [("on", true), ("0", false), ("true", true), ("false", false)] {
        p.apply_override("sound", value).unwrap();
        assert_eq!(p.sound, expected, "sound={value}");
    }
}

#[test]
fn override_keys_are_all_recognized() {
    assert_eq!(OVERRIDE_KEYS.len(), 5);
    assert!(OVERRIDE_KEYS.contains(&"maxShapes"));
    assert!(OVERRIDE_KEYS.contains(&"seed"));
}

#[test]
fn oversized_max_shapes_is_rejected() {
    for value in ["18446744073709551615", "4000000000", "10001"] {
        let p = SceneParams::from_overrides([("maxShapes", value)]);
        assert_eq!(p.max_shapes, MAX_SHAPES, "maxShapes={value}");
    }
    let p = SceneParams::from_overrides([("maxShapes", "10000")]);
    assert_eq!(p.max_shapes, MAX_SHAPES_LIMIT);
}

#[test]
fn oversized_burst_is_rejected() {
    let mut p = SceneParams::default();
    assert!(p.apply_override("shapesPerMove", "1000000").is_err());
    assert_eq!(p.shapes_per_move, SHAPES_PER_MOVE);
    assert!(p.apply_override("shapesPerMove", "32").is_ok());
    assert_eq!(p.shapes_per_move, SHAPES_PER_MOVE_LIMIT);
}

#[test]
fn burst_size_never_exceeds_the_pool() {
    let p = SceneParams::from_overrides([("maxShapes", "4"), ("shapesPerMove", "20")]);
    assert_eq!(p.burst_size(), 4);
    assert_eq!(SceneParams::default().burst_size(), SHAPES_PER_MOVE);
}
