use crate::{
    confidence::{self, Detection},
    lang::{Lang, all_langs, from_code},
    matcher::{Hits, MatcherError, SignatureMatchers},
    unicode::{dominant_script, is_blank},
};
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{debug, error, trace};

pub const DEFAULT_MAX_RESULTS: usize = 5;

#[derive(Debug, Error)]
pub enum DetectError {
    #[error("unknown language code `{0}`")]
    UnknownLanguage(String),
    #[error("detector needs at least one language")]
    NoLanguages,
    #[error("max_results must be at least 1")]
    ZeroResults,
    #[error("matcher error: {0}")]
    Matcher(#[from] MatcherError),
}

/// Multiplier per signal category. Whole words are the strongest signal,
/// bare characters the weakest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Weights {
    pub chars: u64,
    pub affixes: u64,
    pub words: u64,
}

impl Default for Weights {
    fn default() -> Self {
        Self {
            chars: 1,
            affixes: 2,
            words: 3,
        }
    }
}

impl Weights {
    /// Weighted sum of `hits`. Saturates at `u64::MAX` instead of overflowing.
    #[inline]
    pub fn score(&self, hits: &Hits) -> u64 {
        (hits.chars as u64)
            .saturating_mul(self.chars)
            .saturating_add((hits.affixes as u64).saturating_mul(self.affixes))
            .saturating_add((hits.words as u64).saturating_mul(self.words))
    }
}

/// Per-language breakdown of one input, before normalization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawScore {
    pub lang: Lang,
    pub hits: Hits,
    pub total: u64,
}

/// Scores text against a fixed set of compiled signatures.
///
/// A `Detector` holds no per-call state; `detect` takes `&self` and can be
/// shared across threads freely.
#[derive(Debug, Clone)]
pub struct Detector {
    matchers: Vec<SignatureMatchers>,
    weights: Weights,
    max_results: usize,
}

impl Detector {
    pub fn builder() -> DetectorBuilder {
        DetectorBuilder::default()
    }

    pub fn langs(&self) -> impl Iterator<Item = Lang> + '_ {
        self.matchers.iter().map(|m| m.lang)
    }

    pub fn weights(&self) -> Weights {
        self.weights
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    /// Raw weighted score for every configured language, in configuration
    /// order. Blank input yields an empty vec.
    pub fn raw_scores(&self, text: &str) -> Vec<RawScore> {
        if is_blank(text) {
            return Vec::new();
        }
        let normalized = normalize_input(text);
        self.score(&normalized)
    }

    fn score(&self, normalized: &str) -> Vec<RawScore> {
        self.matchers
            .iter()
            .map(|m| {
                let hits = m.hits(normalized);
                let total = self.weights.score(&hits);
                trace!(
                    lang = m.lang.code(),
                    chars = hits.chars,
                    affixes = hits.affixes,
                    words = hits.words,
                    total,
                    "raw score"
                );
                RawScore {
                    lang: m.lang,
                    hits,
                    total,
                }
            })
            .collect()
    }

    /// Full confidence distribution, sorted by confidence descending.
    /// Sums to exactly 100 whenever it is non-empty.
    pub fn distribution(&self, text: &str) -> Vec<Detection> {
        let candidates: Vec<(Lang, u64)> = self
            .raw_scores(text)
            .into_iter()
            .filter(|s| s.total > 0)
            .map(|s| (s.lang, s.total))
            .collect();
        if candidates.is_empty() {
            debug!(script = ?dominant_script(text), "no language matched");
            return Vec::new();
        }

        let mut detections = confidence::normalize(&candidates);
        confidence::correct_rounding(&mut detections);
        confidence::rank(detections, usize::MAX)
    }

    /// Top `max_results` entries of [`Detector::distribution`].
    ///
    /// Truncation happens after the rounding correction, so when more than
    /// `max_results` languages match, the returned confidences sum to less
    /// than 100.
    pub fn detect(&self, text: &str) -> Vec<Detection> {
        let mut detections = self.distribution(text);
        detections.truncate(self.max_results);
        if let Some(top) = detections.first() {
            debug!(
                top = top.code(),
                confidence = top.confidence(),
                candidates = detections.len(),
                "language detected"
            );
        }
        detections
    }

    pub fn detect_top(&self, text: &str) -> Option<Detection> {
        self.distribution(text).into_iter().next()
    }
}

#[inline]
fn normalize_input(text: &str) -> String {
    text.trim().to_lowercase()
}

#[derive(Debug, Clone)]
enum Selection {
    All,
    Langs(Vec<Lang>),
    Codes(Vec<String>),
}

#[derive(Debug, Clone)]
pub struct DetectorBuilder {
    selection: Selection,
    weights: Weights,
    max_results: usize,
}

impl Default for DetectorBuilder {
    fn default() -> Self {
        Self {
            selection: Selection::All,
            weights: Weights::default(),
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl DetectorBuilder {
    /// Restrict detection to these languages. Order breaks raw-score ties.
    pub fn langs(mut self, langs: impl IntoIterator<Item = Lang>) -> Self {
        self.selection = Selection::Langs(langs.into_iter().collect());
        self
    }

    /// Same as [`DetectorBuilder::langs`], resolved from codes at `build`.
    pub fn lang_codes(mut self, codes: &[&str]) -> Self {
        self.selection = Selection::Codes(codes.iter().map(|c| (*c).to_owned()).collect());
        self
    }

    pub fn weights(mut self, weights: Weights) -> Self {
        self.weights = weights;
        self
    }

    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = max_results;
        self
    }

    pub fn build(self) -> Result<Detector, DetectError> {
        if self.max_results == 0 {
            return Err(DetectError::ZeroResults);
        }

        let requested: Vec<Lang> = match self.selection {
            Selection::All => all_langs().to_vec(),
            Selection::Langs(langs) => langs,
            Selection::Codes(codes) => codes
                .into_iter()
                .map(|code| from_code(&code).ok_or(DetectError::UnknownLanguage(code)))
                .collect::<Result<_, _>>()?,
        };

        let mut matchers: Vec<SignatureMatchers> = Vec::with_capacity(requested.len());
        for lang in requested {
            if matchers.iter().any(|m| m.lang == lang) {
                continue;
            }
            let sig = lang
                .signature()
                .ok_or_else(|| DetectError::UnknownLanguage(lang.code().to_owned()))?;
            matchers.push(SignatureMatchers::compile(sig)?);
        }
        if matchers.is_empty() {
            return Err(DetectError::NoLanguages);
        }

        Ok(Detector {
            matchers,
            weights: self.weights,
            max_results: self.max_results,
        })
    }
}

static DEFAULT_DETECTOR: LazyLock<Result<Detector, DetectError>> =
    LazyLock::new(|| Detector::builder().build());

/// The process-wide detector over every supported language, built on first use.
pub fn default_detector() -> Option<&'static Detector> {
    match &*DEFAULT_DETECTOR {
        Ok(detector) => Some(detector),
        Err(e) => {
            error!(error = %e, "default language detector failed to build");
            None
        }
    }
}

/// Detect the language of `text` with the default detector.
///
/// Never fails: blank or unrecognized input yields an empty vec. At most
/// [`DEFAULT_MAX_RESULTS`] entries are returned; if more languages matched,
/// their confidences sum to less than 100 (see [`Detector::distribution`]
/// for the full share).
pub fn detect_language(text: &str) -> Vec<Detection> {
    default_detector().map_or_else(Vec::new, |d| d.detect(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ENG, SPA, ZHO};

    #[test]
    fn default_builder_covers_all_languages() {
        let d = Detector::builder().build().unwrap();
        assert_eq!(d.langs().count(), all_langs().len());
        assert_eq!(d.max_results(), DEFAULT_MAX_RESULTS);
        assert_eq!(d.weights(), Weights::default());
    }

    #[test]
    fn zero_results_rejected() {
        let err = Detector::builder().max_results(0).build().unwrap_err();
        assert!(matches!(err, DetectError::ZeroResults));
    }

    #[test]
    fn empty_language_set_rejected() {
        let err = Detector::builder().langs([]).build().unwrap_err();
        assert!(matches!(err, DetectError::NoLanguages));
    }

    #[test]
    fn unknown_code_rejected() {
        let err = Detector::builder()
            .lang_codes(&["en", "klingon"])
            .build()
            .unwrap_err();
        assert!(matches!(err, DetectError::UnknownLanguage(ref c) if c == "klingon"));
        assert_eq!(err.to_string(), "unknown language code `klingon`");
    }

    #[test]
    fn unknown_lang_value_rejected() {
        let fake = Lang {
            code: "xx",
            name: "Nowhere",
        };
        let err = Detector::builder().langs([fake]).build().unwrap_err();
        assert!(matches!(err, DetectError::UnknownLanguage(ref c) if c == "xx"));
    }

    #[test]
    fn duplicate_languages_collapse() {
        let d = Detector::builder()
            .lang_codes(&["en", "EN", "en-GB", "es"])
            .build()
            .unwrap();
        let langs: Vec<_> = d.langs().collect();
        assert_eq!(langs, [ENG, SPA]);
    }

    #[test]
    fn weights_score() {
        let hits = Hits {
            chars: 4,
            affixes: 1,
            words: 2,
        };
        assert_eq!(Weights::default().score(&hits), 4 + 2 + 6);
        let flat = Weights {
            chars: 1,
            affixes: 1,
            words: 1,
        };
        assert_eq!(flat.score(&hits), 7);
    }

    #[test]
    fn extreme_weights_saturate() {
        let huge = Weights {
            chars: u64::MAX,
            affixes: 1,
            words: 1,
        };
        let hits = Hits {
            chars: 3,
            affixes: 2,
            words: 1,
        };
        assert_eq!(huge.score(&hits), u64::MAX);

        let d = Detector::builder().weights(huge).build().unwrap();
        let out = d.detect("ñañá");
        assert!(!out.is_empty());
        assert_eq!(confidence::total(&out), 100);
        assert!(out.iter().all(|det| det.confidence() <= 100));
    }

    #[test]
    fn raw_scores_breakdown() {
        let d = Detector::builder().langs([ENG, ZHO]).build().unwrap();
        let scores = d.raw_scores("The cat and the dog");
        assert_eq!(scores.len(), 2);
        assert_eq!(scores[0].lang, ENG);
        assert_eq!(scores[0].hits.words, 3);
        assert_eq!(scores[0].total, 9);
        assert_eq!(scores[1].lang, ZHO);
        assert_eq!(scores[1].total, 0);
    }

    #[test]
    fn raw_scores_blank_input() {
        let d = Detector::builder().build().unwrap();
        assert!(d.raw_scores("").is_empty());
        assert!(d.raw_scores(" \n\t ").is_empty());
    }

    #[test]
    fn subset_detector_ignores_other_languages() {
        let d = Detector::builder().langs([ENG]).build().unwrap();
        assert!(d.detect("的一是不了人我在有他").is_empty());
        let out = d.detect("the cat and the dog");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].confidence(), 100);
    }

    #[test]
    fn max_results_limits_output() {
        let d = Detector::builder().max_results(1).build().unwrap();
        let out = d.detect("El perro y el gato están en la casa");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lang, SPA);
        assert!(d.distribution("El perro y el gato están en la casa").len() > 1);
    }

    #[test]
    fn custom_weights_change_ranking() {
        // "la" / "en" are French words too; only the diacritic is Spanish-only
        let chars_only = Weights {
            chars: 1,
            affixes: 0,
            words: 0,
        };
        let d = Detector::builder()
            .lang_codes(&["es", "fr"])
            .weights(chars_only)
            .build()
            .unwrap();
        let out = d.detect("están");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lang, SPA);
    }

    #[test]
    fn detect_top_matches_first_entry() {
        let d = Detector::builder().build().unwrap();
        let text = "the quick brown fox and the lazy dog";
        assert_eq!(d.detect_top(text), d.detect(text).first().copied());
        assert_eq!(d.detect_top("   "), None);
    }

    #[test]
    fn default_detector_is_available() {
        assert!(default_detector().is_some());
        assert_eq!(detect_language("   "), Vec::new());
    }
}
