use crate::{
    lang::CharPattern,
    matcher::{Category, Matcher},
};

/// Counts characters that fall into the signature's character classes.
/// A character matching two patterns is counted twice; each pattern is an
/// independent signal.
#[derive(Debug, Clone, Copy)]
pub struct CharMatcher {
    patterns: &'static [CharPattern],
}

impl CharMatcher {
    pub const fn new(patterns: &'static [CharPattern]) -> Self {
        Self { patterns }
    }
}

impl Matcher for CharMatcher {
    fn name(&self) -> &'static str {
        "char_class"
    }

    fn category(&self) -> Category {
        Category::Chars
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    fn count(&self, text: &str) -> usize {
        if self.patterns.is_empty() {
            return 0;
        }
        self.patterns
            .iter()
            .map(|p| text.chars().filter(|&c| p.matches(c)).count())
            .sum()
    }
}
