/// Shape and tone tuning constants.
///
/// These express the intended per-frame behavior and keep magic numbers out of
/// the simulation and drawing code.
// Per-frame decay of a shape's remaining life (life starts at SPAWN_LIFE)
pub const SPAWN_LIFE: f64 = 1.0;
pub const LIFE_STEP: f64 = 0.01;

// Per-frame size growth in canvas pixels (no upper bound)
pub const SIZE_GROWTH_PER_FRAME: f64 = 0.2;

// Spawn ranges
pub const SIZE_MIN: f64 = 10.0;
pub const SIZE_MAX: f64 = 30.0;
pub const VELOCITY_MAX: f64 = 2.0; // px per frame, each axis in -max..max

// Spawning and pool bounds
pub const SHAPES_PER_MOVE: usize = 3;
pub const MAX_SHAPES: usize = 600;
// Upper bounds accepted from data-* overrides
pub const MAX_SHAPES_LIMIT: usize = 10_000;
pub const SHAPES_PER_MOVE_LIMIT: usize = 32;

// Tone throttle and envelope
pub const TONE_INTERVAL_MS: u64 = 500;
pub const TONE_DURATION_SEC: f64 = 0.5;
pub const TONE_START_GAIN: f32 = 0.1;
pub const TONE_END_GAIN: f32 = 0.001; // exponential ramps cannot reach 0

// C4 major scale, C4..C5
pub const SCALE_HZ: [f32; 8] = [
    261.63, 293.66, 329.63, 349.23, 392.00, 440.00, 493.88, 523.25,
];

// Scale-degree indices into SCALE_HZ; repeats weight the tonic triad
pub const MELODY: &[usize] = &[0, 2, 4, 2, 0, 4, 5, 4, 7, 4, 2, 1, 0, 3, 6, 7];

// Fill palette (CSS colors)
pub const PALETTE: &[&str] = &[
    "#ff6b6b", "#feca57", "#48dbfb", "#1dd1a1", "#5f27cd", "#ff9ff3", "#54a0ff",
];

// DOM wiring
pub const CANVAS_ID: &str = "landing-canvas";
pub const NAV_CONTAINER_ID: &str = "nav-panels";
pub const NAV_PANEL_CLASS: &str = "nav-panel";
pub const NAV_HOVER_CLASS: &str = "is-hovered";

/// Navigation target rendered as one hover panel.
#[derive(Clone, Copy, Debug)]
pub struct NavLink {
    pub label: &'static str,
    pub href: &'static str,
}

pub const NAV_LINKS: [NavLink; 2] = [
    NavLink {
        label: "Projects",
        href: "/projects",
    },
    NavLink {
        label: "Writing",
        href: "/writing",
    },
];
