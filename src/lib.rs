pub mod code_table;
pub mod config;
pub mod dsp;
pub mod error;
pub mod player;
pub mod sink;

pub use config::MorseConfig;
pub use dsp::engine::{EncodedWord, MorseEngine};
pub use error::{MorseError, MorseResult};
pub use sink::AudioSink;

use wasm_bindgen::prelude::*;

/// The crate version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// WASM-exposed: return the morsewave version string.
#[wasm_bindgen]
pub fn core_version() -> String {
    VERSION.to_string()
}

/// Decode an optional JS config object; `undefined`/`null` means defaults.
fn config_from_js(config: JsValue) -> Result<MorseConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(MorseConfig::default());
    }
    serde_wasm_bindgen::from_value(config).map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render text to a 16-bit mono WAV byte array.
#[wasm_bindgen]
pub fn render_morse_wav(
    text: &str,
    sample_rate: u32,
    config: JsValue,
) -> Result<Vec<u8>, JsValue> {
    let config = config_from_js(config)?;
    dsp::renderer::render_wav(text, config, sample_rate)
        .map_err(|e| JsValue::from_str(&format!("{e}")))
}

/// WASM-exposed: render text to mono f32 samples.
/// Returns the raw audio buffer for AudioWorklet playback.
#[wasm_bindgen]
pub fn render_morse_samples(
    text: &str,
    sample_rate: u32,
    config: JsValue,
) -> Result<Vec<f32>, JsValue> {
    let config = config_from_js(config)?;
    let engine =
        MorseEngine::new(config, sample_rate).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    let samples = dsp::renderer::render_text(&engine, text, &player::PlayOptions::default())
        .map_err(|e| JsValue::from_str(&format!("{e}")))?;
    Ok(samples.iter().map(|&s| s as f32).collect())
}

/// WASM-exposed: the quantized timing a config produces at `sample_rate`.
#[wasm_bindgen]
pub fn morse_timing(sample_rate: u32, config: JsValue) -> Result<JsValue, JsValue> {
    let config = config_from_js(config)?;
    let engine =
        MorseEngine::new(config, sample_rate).map_err(|e| JsValue::from_str(&format!("{e}")))?;
    serde_wasm_bindgen::to_value(engine.timing()).map_err(|e| JsValue::from_str(&format!("{e}")))
}
