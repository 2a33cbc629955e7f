// Unicode whitespace not covered by `char::is_whitespace` on every platform
// we care about, plus the script blocks the signature table is built from.
#[inline(always)]
pub fn is_unicode_whitespace(c: char) -> bool {
    matches!(
        c as u32,
        0x0085 | // NEXT LINE (NEL)
        0x00A0 | // NO-BREAK SPACE
        0x1680 | // OGHAM SPACE MARK
        0x2000
            ..=0x200A | // EN QUAD through HAIR SPACE
        0x2028 | // LINE SEPARATOR
        0x2029 | // PARAGRAPH SEPARATOR
        0x202F | // NARROW NO-BREAK SPACE
        0x205F | // MEDIUM MATHEMATICAL SPACE
        0x3000 // IDEOGRAPHIC SPACE
    )
}

// Zero-width characters that pasted text often carries; they never carry
// language signal and count as blank.
#[inline(always)]
pub const fn is_zero_width(c: char) -> bool {
    matches!(c as u32, 0x200B..=0x200D | 0x2060 | 0xFEFF)
}

#[inline(always)]
pub fn is_any_whitespace(c: char) -> bool {
    c.is_whitespace() || is_unicode_whitespace(c)
}

/// True when `text` has nothing to score: empty, whitespace, or zero-width only.
#[inline]
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| is_any_whitespace(c) || is_zero_width(c))
}

// Unified Han blocks + extensions + compatibility block.
#[inline(always)]
pub fn is_cjk_unified_ideograph(c: char) -> bool {
    matches!(c as u32,
        0x4E00..=0x9FFF   | // Unified
        0x3400..=0x4DBF   | // Ext A
        0x20000..=0x2A6DF | // Ext B
        0x2A700..=0x2EBEF | // Ext C-F
        0x30000..=0x323AF | // Ext G-I
        0xF900..=0xFAFF     // Compatibility
    )
}

#[inline(always)]
pub fn is_hiragana(c: char) -> bool {
    matches!(c as u32, 0x3040..=0x309F)
}

#[inline(always)]
pub fn is_katakana(c: char) -> bool {
    matches!(c as u32,
        0x30A0..=0x30FF  | // Katakana
        0x31F0..=0x31FF    // Phonetic Extensions
    )
}

// Hangul syllables + jamo + compatibility jamo.
#[inline(always)]
pub fn is_hangul(c: char) -> bool {
    matches!(c as u32,
        0xAC00..=0xD7AF  | // Syllables
        0x1100..=0x11FF  | // Jamo
        0x3130..=0x318F  | // Compatibility Jamo
        0xA960..=0xA97F  | // Jamo Ext A
        0xD7B0..=0xD7FF    // Jamo Ext B
    )
}

#[inline(always)]
pub fn is_cyrillic(c: char) -> bool {
    matches!(c as u32, 0x0400..=0x052F)
}

#[inline(always)]
pub fn is_arabic(c: char) -> bool {
    matches!(c as u32,
        0x0600..=0x06FF | // Arabic
        0x0750..=0x077F | // Arabic Supplement
        0x08A0..=0x08FF   // Arabic Extended-A
    )
}

#[inline(always)]
pub fn is_devanagari(c: char) -> bool {
    matches!(c as u32, 0x0900..=0x097F | 0xA8E0..=0xA8FF)
}

#[inline(always)]
pub fn is_latin(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c as u32, 0x00C0..=0x024F if c != '×' && c != '÷')
}

/// Coarse script class, used for diagnostics and for telling callers which
/// script dominates a mixed input.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Script {
    Other,
    Latin,
    Cyrillic,
    Arabic,
    Devanagari,
    Han,
    Kana,
    Hangul,
}

#[inline(always)]
pub fn classify(c: char) -> Script {
    if c.is_ascii() {
        return if c.is_ascii_alphabetic() {
            Script::Latin
        } else {
            Script::Other
        };
    }
    if is_cjk_unified_ideograph(c) {
        return Script::Han;
    }
    if is_hiragana(c) || is_katakana(c) {
        return Script::Kana;
    }
    if is_hangul(c) {
        return Script::Hangul;
    }
    if is_cyrillic(c) {
        return Script::Cyrillic;
    }
    if is_arabic(c) {
        return Script::Arabic;
    }
    if is_devanagari(c) {
        return Script::Devanagari;
    }
    if is_latin(c) {
        return Script::Latin;
    }
    Script::Other
}

/// Most frequent non-`Other` script in `text`, ties resolved toward the
/// lower `Script` discriminant.
pub fn dominant_script(text: &str) -> Option<Script> {
    let mut counts = [0usize; 8];
    for c in text.chars() {
        let s = classify(c);
        if s != Script::Other {
            counts[s as usize] += 1;
        }
    }
    let (idx, &best) = counts
        .iter()
        .enumerate()
        .rev()
        .max_by_key(|&(_, n)| *n)?;
    if best == 0 {
        return None;
    }
    Some(match idx {
        1 => Script::Latin,
        2 => Script::Cyrillic,
        3 => Script::Arabic,
        4 => Script::Devanagari,
        5 => Script::Han,
        6 => Script::Kana,
        7 => Script::Hangul,
        _ => Script::Other,
    })
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn unicode_whitespace_is_correctly_detected() {
        assert!(is_unicode_whitespace('\u{00A0}'));
        assert!(is_unicode_whitespace('\u{3000}'));
        assert!(!is_unicode_whitespace('a'));
        assert!(is_any_whitespace(' '));
        assert!(is_any_whitespace('\t'));
    }

    #[test]
    fn blank_detection() {
        assert!(is_blank(""));
        assert!(is_blank("   \t\n"));
        assert!(is_blank("\u{3000}\u{00A0}"));
        assert!(is_blank("\u{200B}\u{FEFF}"));
        assert!(!is_blank(" a "));
        assert!(!is_blank("的"));
    }

    #[test]
    fn classify_is_exhaustive_and_correct() {
        use Script::*;

        macro_rules! assert_class {
            ($c:expr, $expected:expr) => {
                assert_eq!(
                    classify($c),
                    $expected,
                    "U+{:04X} '{}' misclassified",
                    $c as u32,
                    $c
                );
            };
        }

        assert_class!('a', Latin);
        assert_class!('Z', Latin);
        assert_class!('ñ', Latin);
        assert_class!('ß', Latin);
        assert_class!('×', Other);
        assert_class!('5', Other);
        assert_class!('!', Other);
        assert_class!('世', Han);
        assert_class!('界', Han);
        assert_class!('の', Kana);
        assert_class!('カ', Kana);
        assert_class!('한', Hangul);
        assert_class!('я', Cyrillic);
        assert_class!('م', Arabic);
        assert_class!('ह', Devanagari);
        assert_class!('★', Other);
    }

    #[test]
    fn dominant_script_picks_majority() {
        assert_eq!(dominant_script("hello 世界"), Some(Script::Latin));
        assert_eq!(dominant_script("的一是不了人"), Some(Script::Han));
        assert_eq!(dominant_script("привет, world"), Some(Script::Cyrillic));
        assert_eq!(dominant_script("123 !?"), None);
        assert_eq!(dominant_script(""), None);
    }

    #[test]
    fn dominant_script_tie_prefers_lower_variant() {
        // one Latin, one Han
        assert_eq!(dominant_script("a世"), Some(Script::Latin));
    }
}
