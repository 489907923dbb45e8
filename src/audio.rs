use crate::core::{LazyOutput, Note};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Lazily created WebAudio output shared by every tone on the page.
///
/// The context is built on the first `play` (browsers only allow audio after a
/// user gesture anyway) and reused until `close`. If construction fails the
/// generator stays unavailable and every later `play` is a no-op.
#[derive(Default)]
pub struct ToneGenerator {
    ctx: LazyOutput<web::AudioContext>,
}

impl ToneGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    fn context(&mut self) -> Option<&web::AudioContext> {
        self.ctx.get_or_try_init(|| {
            let ctx = web::AudioContext::new()?;
            log::info!("[audio] context created, sample rate {}", ctx.sample_rate());
            Ok::<_, wasm_bindgen::JsValue>(ctx)
        })
    }

    /// Schedule `note` now: a sine oscillator with an exponential gain decay.
    pub fn play(&mut self, note: &Note) {
        let Some(ctx) = self.context() else {
            return;
        };
        if ctx.state() == web::AudioContextState::Suspended {
            _ = ctx.resume();
        }
        let osc = match web::OscillatorNode::new(ctx) {
            Ok(o) => o,
            Err(e) => {
                log::warn!("[audio] OscillatorNode error: {:?}", e);
                return;
            }
        };
        let gain = match web::GainNode::new(ctx) {
            Ok(g) => g,
            Err(e) => {
                log::warn!("[audio] GainNode error: {:?}", e);
                return;
            }
        };
        osc.set_type(web::OscillatorType::Sine);
        osc.frequency().set_value(note.frequency_hz);

        let t0 = ctx.current_time();
        let t1 = t0 + note.duration_sec;
        _ = gain.gain().set_value_at_time(note.start_gain, t0);
        _ = gain.gain().exponential_ramp_to_value_at_time(note.end_gain, t1);
        _ = osc.connect_with_audio_node(&gain);
        _ = gain.connect_with_audio_node(&ctx.destination());
        _ = osc.start_with_when(t0);
        _ = osc.stop_with_when(t1);
        log::debug!("[audio] tone {:.2} Hz", note.frequency_hz);
    }

    /// Release the audio context; a later `play` creates a fresh one.
    pub fn close(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            match ctx.close() {
                Ok(promise) => wasm_bindgen_futures::spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[audio] close failed: {:?}", e);
                    }
                }),
                Err(e) => log::warn!("[audio] close failed: {:?}", e),
            }
        }
    }
}
