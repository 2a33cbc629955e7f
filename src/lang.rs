pub mod data;

use serde::Serialize;

pub use data::{
    ARA, DEU, ENG, FRA, HIN, ITA, JPN, KOR, POR, RUS, SIGNATURE_TABLE, SPA, ZHO, all_langs,
    from_code,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Lang {
    pub code: &'static str,
    pub name: &'static str,
}

impl Lang {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Static signature for this language. Every `Lang` constant is in the table.
    #[inline]
    pub fn signature(&self) -> Option<&'static LanguageSignature> {
        signature(self.code)
    }
}

/// A character-class matcher. `Set` members are stored lower-case because
/// matching always runs on lower-cased input. `Class` defers to a script
/// predicate from [`crate::unicode`].
#[derive(Clone, Copy, Debug)]
pub enum CharPattern {
    Range(char, char),
    Set(&'static [char]),
    Class(fn(char) -> bool),
}

impl CharPattern {
    #[inline(always)]
    pub fn matches(&self, c: char) -> bool {
        match *self {
            CharPattern::Range(lo, hi) => (lo..=hi).contains(&c),
            CharPattern::Set(chars) => chars.contains(&c),
            CharPattern::Class(pred) => pred(c),
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LanguageSignature {
    pub lang: Lang,
    pub char_patterns: &'static [CharPattern],
    pub affix_patterns: &'static [&'static str],
    pub common_words: &'static [&'static str],
    pub voices: &'static [&'static str],
}

impl LanguageSignature {
    #[inline]
    pub fn has_char_patterns(&self) -> bool {
        !self.char_patterns.is_empty()
    }

    #[inline]
    pub fn has_affix_patterns(&self) -> bool {
        !self.affix_patterns.is_empty()
    }

    #[inline]
    pub fn has_common_words(&self) -> bool {
        !self.common_words.is_empty()
    }

    /// At least one matcher category carries data.
    #[inline]
    pub fn is_scorable(&self) -> bool {
        self.has_char_patterns() || self.has_affix_patterns() || self.has_common_words()
    }
}

/// Look up a signature by its short code (exact, lower-case key).
#[inline]
pub fn signature(code: &str) -> Option<&'static LanguageSignature> {
    SIGNATURE_TABLE.get(code)
}
