use crate::constants::*;
use instant::Instant;
use rand::prelude::*;
use std::time::Duration;

/// A single scheduled tone for the audio backend.
///
/// Fields:
/// - `frequency_hz`: sine oscillator pitch
/// - `start_gain`: gain at the moment the tone starts
/// - `end_gain`: gain reached by the exponential ramp (must be > 0)
/// - `duration_sec`: ramp length; the oscillator stops when it ends
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Note {
    pub frequency_hz: f32,
    pub start_gain: f32,
    pub end_gain: f32,
    pub duration_sec: f64,
}

impl Note {
    pub fn with_frequency(frequency_hz: f32) -> Self {
        Self {
            frequency_hz,
            start_gain: TONE_START_GAIN,
            end_gain: TONE_END_GAIN,
            duration_sec: TONE_DURATION_SEC,
        }
    }
}

/// Frequency for a scale degree; out of range degrees wrap around the table.
#[inline]
pub fn degree_to_hz(degree: usize) -> f32 {
    SCALE_HZ[degree % SCALE_HZ.len()]
}

/// Pick a random step of the melody and return its note.
pub fn pick_note<R: Rng>(rng: &mut R) -> Note {
    let degree = MELODY.choose(rng).copied().unwrap_or(0);
    Note::with_frequency(degree_to_hz(degree))
}

/// Gate allowing at most one tone per `interval`.
#[derive(Clone, Debug)]
pub struct ToneThrottle {
    interval: Duration,
    last: Option<Instant>,
}

impl ToneThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    /// Returns true and records `now` if the window since the last tone has elapsed.
    pub fn try_acquire(&mut self, now: Instant) -> bool {
        let ready = match self.last {
            None => true,
            Some(prev) => now >= prev && now - prev >= self.interval,
        };
        if ready {
            self.last = Some(now);
        }
        ready
    }

    pub fn reset(&mut self) {
        self.last = None;
    }
}

/// Output handle created on first use.
///
/// A failed initialization is remembered: later calls return `None` without
/// retrying, so an environment without audio degrades to silence.
#[derive(Debug)]
pub enum LazyOutput<T> {
    Pending,
    Ready(T),
    Unavailable,
}

impl<T> Default for LazyOutput<T> {
    fn default() -> Self {
        LazyOutput::Pending
    }
}

impl<T> LazyOutput<T> {
    pub fn get_or_try_init<E, F>(&mut self, init: F) -> Option<&T>
    where
        E: std::fmt::Debug,
        F: FnOnce() -> Result<T, E>,
    {
        if let LazyOutput::Pending = self {
            *self = match init() {
                Ok(out) => LazyOutput::Ready(out),
                Err(e) => {
                    log::warn!("[audio] unavailable, tones disabled: {:?}", e);
                    LazyOutput::Unavailable
                }
            };
        }
        match self {
            LazyOutput::Ready(out) => Some(&*out),
            _ => None,
        }
    }

    /// Take a ready output, leaving the slot pending so the next use creates a fresh one.
    pub fn take(&mut self) -> Option<T> {
        match std::mem::take(self) {
            LazyOutput::Ready(out) => Some(out),
            other => {
                *self = other;
                None
            }
        }
    }
}
