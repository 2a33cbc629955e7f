use crate::{
    lang::Lang,
    matcher::{Category, Matcher, MatcherError},
};
use regex::{Regex, RegexBuilder};

/// Whole-token function words, compiled into one case-insensitive
/// `\b(?:w1|w2|…)\b` alternation. Word boundaries are Unicode-aware, so
/// `está` and `não` match as single tokens.
#[derive(Debug, Clone, Default)]
pub struct WordMatcher {
    pattern: Option<Regex>,
}

impl WordMatcher {
    pub fn compile(lang: Lang, words: &[&str]) -> Result<Self, MatcherError> {
        if words.is_empty() {
            return Ok(Self { pattern: None });
        }
        let alternation = words
            .iter()
            .map(|w| regex::escape(w))
            .collect::<Vec<_>>()
            .join("|");
        let source = format!(r"\b(?:{alternation})\b");
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(|source_err| MatcherError::Pattern {
                lang: lang.code(),
                category: Category::Words,
                pattern: source.clone(),
                source: source_err,
            })?;
        Ok(Self {
            pattern: Some(pattern),
        })
    }
}

impl Matcher for WordMatcher {
    fn name(&self) -> &'static str {
        "common_word"
    }

    fn category(&self) -> Category {
        Category::Words
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.pattern.is_none()
    }

    fn count(&self, text: &str) -> usize {
        self.pattern
            .as_ref()
            .map_or(0, |re| re.find_iter(text).count())
    }
}
