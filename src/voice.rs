//! Language code → text-to-speech locale lookup.
//!
//! Voices live next to each signature in the language table; this module only
//! adds the fallback policy.

use crate::{confidence::Detection, detector::detect_language, lang::from_code};
use tracing::debug;

pub const DEFAULT_VOICE: &str = "en-US";

static DEFAULT_VOICES: &[&str] = &[DEFAULT_VOICE];

/// All voices for `code`, preferred first. Unknown codes get `[DEFAULT_VOICE]`.
pub fn voices_for(code: &str) -> &'static [&'static str] {
    match from_code(code).and_then(|lang| lang.signature()) {
        Some(sig) if !sig.voices.is_empty() => sig.voices,
        _ => {
            debug!(code, fallback = DEFAULT_VOICE, "no voice mapping");
            DEFAULT_VOICES
        }
    }
}

/// Preferred voice for `code`. A full locale that the table lists (`pt-PT`)
/// is returned as-is instead of the language's first voice.
pub fn voice_for(code: &str) -> &'static str {
    let voices = voices_for(code);
    let wanted = code.trim().replace('_', "-");
    voices
        .iter()
        .copied()
        .find(|v| v.eq_ignore_ascii_case(&wanted))
        .or_else(|| voices.first().copied())
        .unwrap_or(DEFAULT_VOICE)
}

/// Pick a voice from a detection result. The first entry at or above
/// `min_confidence` wins; otherwise `DEFAULT_VOICE`.
pub fn select_voice(detections: &[Detection], min_confidence: u8) -> &'static str {
    detections
        .iter()
        .find(|d| d.confidence() >= min_confidence)
        .map_or(DEFAULT_VOICE, |d| voice_for(d.code()))
}

/// [`detect_language`] followed by [`select_voice`].
pub fn voice_for_text(text: &str, min_confidence: u8) -> &'static str {
    select_voice(&detect_language(text), min_confidence)
}
