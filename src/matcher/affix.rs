use crate::{
    lang::Lang,
    matcher::{Category, Matcher, MatcherError},
};
use regex::Regex;

/// Morphological markers (suffixes, prefixes, particles). Each pattern is
/// compiled on its own and contributes its non-overlapping match count.
#[derive(Debug, Clone, Default)]
pub struct AffixMatcher {
    patterns: Vec<Regex>,
}

impl AffixMatcher {
    pub fn compile(lang: Lang, sources: &[&str]) -> Result<Self, MatcherError> {
        let patterns = sources
            .iter()
            .map(|src| {
                Regex::new(src).map_err(|source| MatcherError::Pattern {
                    lang: lang.code(),
                    category: Category::Affixes,
                    pattern: (*src).to_owned(),
                    source,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }
}

impl Matcher for AffixMatcher {
    fn name(&self) -> &'static str {
        "affix"
    }

    fn category(&self) -> Category {
        Category::Affixes
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn count(&self, text: &str) -> usize {
        self.patterns
            .iter()
            .map(|re| re.find_iter(text).count())
            .sum()
    }
}
