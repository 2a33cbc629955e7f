//! Per-category scorers.
//!
//! Every `LanguageSignature` is compiled into three matchers, one per signal
//! category. Each matcher only *counts*; weighting happens in the detector so
//! the same compiled set can be reused with different `Weights`.
//!
//! * `CharMatcher` – characters inside the signature's script classes,
//!   ranges or sets.
//! * `AffixMatcher` – morphological markers, one regex per pattern.
//! * `WordMatcher` – whole-token function words, one alternation regex.

pub mod affix;
pub mod char_class;
pub mod common_word;

pub use affix::AffixMatcher;
pub use char_class::CharMatcher;
pub use common_word::WordMatcher;

use crate::lang::{Lang, LanguageSignature};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Chars,
    Affixes,
    Words,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Category::Chars => "char",
            Category::Affixes => "affix",
            Category::Words => "word",
        })
    }
}

/// Public error type for matcher construction.
#[derive(Debug, Error)]
pub enum MatcherError {
    #[error("invalid {category} pattern `{pattern}` for `{lang}`: {source}")]
    Pattern {
        lang: &'static str,
        category: Category,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

/// A single signal category for one language.
pub trait Matcher: Send + Sync {
    /// Short name, logged with every per-matcher count.
    fn name(&self) -> &'static str;

    fn category(&self) -> Category;

    /// Nothing to match; `count` is always zero.
    fn is_empty(&self) -> bool;

    /// Number of hits in already-normalized (trimmed, lower-cased) text.
    fn count(&self, text: &str) -> usize;
}

/// The three compiled matchers of one language.
#[derive(Debug, Clone)]
pub struct SignatureMatchers {
    pub lang: Lang,
    pub chars: CharMatcher,
    pub affixes: AffixMatcher,
    pub words: WordMatcher,
}

/// Hit counts per category, unweighted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hits {
    pub chars: usize,
    pub affixes: usize,
    pub words: usize,
}

impl Hits {
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.chars == 0 && self.affixes == 0 && self.words == 0
    }
}

impl SignatureMatchers {
    pub fn compile(sig: &'static LanguageSignature) -> Result<Self, MatcherError> {
        Ok(Self {
            lang: sig.lang,
            chars: CharMatcher::new(sig.char_patterns),
            affixes: AffixMatcher::compile(sig.lang, sig.affix_patterns)?,
            words: WordMatcher::compile(sig.lang, sig.common_words)?,
        })
    }

    /// The three matchers in category order.
    pub fn matchers(&self) -> [&dyn Matcher; 3] {
        [&self.chars, &self.affixes, &self.words]
    }

    pub fn hits(&self, text: &str) -> Hits {
        let mut hits = Hits::default();
        for m in self.matchers() {
            if m.is_empty() {
                continue;
            }
            let n = m.count(text);
            trace!(
                lang = self.lang.code(),
                matcher = m.name(),
                category = %m.category(),
                count = n,
                "matcher count"
            );
            match m.category() {
                Category::Chars => hits.chars += n,
                Category::Affixes => hits.affixes += n,
                Category::Words => hits.words += n,
            }
        }
        hits
    }
}
