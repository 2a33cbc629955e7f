pub mod confidence;
pub mod detector;
pub mod lang;
pub mod matcher;
pub mod unicode;
pub mod voice;

pub use confidence::Detection;
pub use detector::{
    DEFAULT_MAX_RESULTS, DetectError, Detector, DetectorBuilder, RawScore, Weights,
    default_detector, detect_language,
};
pub use lang::{
    ARA, DEU, ENG, FRA, HIN, ITA, JPN, KOR, Lang, LanguageSignature, POR, RUS, SPA, ZHO,
    all_langs, from_code,
};
pub use voice::{DEFAULT_VOICE, select_voice, voice_for, voice_for_text, voices_for};
