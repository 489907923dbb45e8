use crate::constants::{
    MAX_SHAPES, MAX_SHAPES_LIMIT, SHAPES_PER_MOVE, SHAPES_PER_MOVE_LIMIT, TONE_INTERVAL_MS,
};
use std::time::Duration;

/// Runtime parameters for a mounted scene.
///
/// - `max_shapes` bounds the live pool; spawning into a full pool evicts the oldest shape
/// - `shapes_per_move` is how many shapes one pointer move spawns
/// - `tone_interval` is the minimum spacing between two tones
/// - `seed` fixes the random source when set (reproducible bursts and melodies)
/// - `sound` disables the tone generator entirely when false
#[derive(Clone, Debug, PartialEq)]
pub struct SceneParams {
    pub max_shapes: usize,
    pub shapes_per_move: usize,
    pub tone_interval: Duration,
    pub seed: Option<u64>,
    pub sound: bool,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            max_shapes: MAX_SHAPES,
            shapes_per_move: SHAPES_PER_MOVE,
            tone_interval: Duration::from_millis(TONE_INTERVAL_MS),
            seed: None,
            sound: true,
        }
    }
}

impl SceneParams {
    /// Apply one override given as a camelCase dataset key (`data-max-shapes` -> `maxShapes`).
    ///
    /// Unknown keys are ignored so unrelated `data-*` attributes on the canvas are harmless.
    pub fn apply_override(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let value = value.trim();
        match key {
            "maxShapes" => {
                let n: usize = value.parse()?;
                if n == 0 || n > MAX_SHAPES_LIMIT {
                    anyhow::bail!("maxShapes must be in 1..={}", MAX_SHAPES_LIMIT);
                }
                self.max_shapes = n;
            }
            "shapesPerMove" => {
                let n: usize = value.parse()?;
                if n > SHAPES_PER_MOVE_LIMIT {
                    anyhow::bail!("shapesPerMove must be at most {}", SHAPES_PER_MOVE_LIMIT);
                }
                self.shapes_per_move = n;
            }
            "toneIntervalMs" => self.tone_interval = Duration::from_millis(value.parse()?),
            "seed" => self.seed = Some(value.parse()?),
            "sound" => {
                self.sound = match value {
                    "on" | "true" | "1" => true,
                    "off" | "false" | "0" => false,
                    other => anyhow::bail!("sound expects on/off, got {:?}", other),
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Shapes spawned per move, never more than the pool can hold.
    #[inline]
    pub fn burst_size(&self) -> usize {
        self.shapes_per_move.min(self.max_shapes)
    }

    /// Build params from `(key, value)` pairs, keeping the default for any value that fails to parse.
    pub fn from_overrides<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            if let Err(e) = params.apply_override(key, value) {
                log::warn!("[config] ignoring {}={:?}: {}", key, value, e);
            }
        }
        params
    }
}

/// Dataset keys read from the canvas element.
pub const OVERRIDE_KEYS: [&str; 5] = [
    "maxShapes",
    "shapesPerMove",
    "toneIntervalMs",
    "seed",
    "sound",
];
