use crate::lang::{CharPattern, Lang, LanguageSignature};
use crate::unicode;

use paste::paste;
use phf::{Map, phf_map};

/// ---------------------------------------------------------------------------
///    Macro – generates everything from a single table
/// ---------------------------------------------------------------------------
macro_rules! define_signatures {
($(
        $code:ident, $code_str:literal, $name:literal,
        chars: [ $($cp:expr),* $(,)? ],
        affixes: [ $($affix:literal),* $(,)? ],
        words: [ $($word:literal),* $(,)? ],
        voices: [ $($voice:literal),* $(,)? ]
    ),* $(,)?) => {
        // Public `Lang` constants
        $(
            pub const $code: Lang = Lang { code: $code_str, name: $name };
        )*

        // Per-language static data modules
        $(
            paste! {
                mod [<$code:lower _data>] {
                    use super::*;

                    pub const CHARS: &[CharPattern] = &[$($cp),*];
                    pub const AFFIXES: &[&str] = &[$($affix),*];
                    pub const WORDS: &[&str] = &[$($word),*];
                    pub const VOICES: &[&str] = &[$($voice),*];
                }
            }
        )*

        // Global lookup table (public)
        paste! {
            pub static SIGNATURE_TABLE: Map<&'static str, LanguageSignature> = phf_map! {
                $(
                    $code_str => LanguageSignature {
                        lang: $code,
                        char_patterns: [<$code:lower _data>]::CHARS,
                        affix_patterns: [<$code:lower _data>]::AFFIXES,
                        common_words: [<$code:lower _data>]::WORDS,
                        voices: [<$code:lower _data>]::VOICES,
                    }
                ),*
            };
        }

        static ALL_LANGS: &[Lang] = &[$($code),*];

        /// Every supported language, in table order.
        pub const fn all_langs() -> &'static [Lang] {
            ALL_LANGS
        }

        /// Resolve a short code. Case-insensitive; a region suffix
        /// (`en-US`, `pt_BR`) is ignored.
        pub fn from_code(code: &str) -> Option<Lang> {
            let primary = code.trim().split(['-', '_']).next().unwrap_or_default();
            let lower = primary.to_ascii_lowercase();
            match lower.as_str() {
                $(
                    $code_str => Some($code),
                )*
                _ => None,
            }
        }
    };
}

// ---------------------------------------------------------------------------
//    Language signatures (single source of truth)
//    Word lists only exist for space-delimited scripts; CJK particles are
//    matched as affixes because `\b` never fires inside an ideograph run.
// ---------------------------------------------------------------------------
define_signatures! {
    ENG, "en", "English",
        chars: [],
        affixes: [ r"\b\w+ing\b", r"\b\w+tion\b", r"\b\w+ly\b", r"\b\w+ness\b", r"\b\w+ed\b" ],
        words: [
            "the", "and", "is", "are", "was", "were", "of", "to", "in", "that", "it", "with",
            "for", "on", "this", "have", "you", "be", "at", "not", "but", "from", "they", "he",
            "she", "we",
        ],
        voices: [ "en-US", "en-GB", "en-AU" ],

    SPA, "es", "Spanish",
        chars: [ CharPattern::Set(&['ñ', 'á', 'é', 'í', 'ó', 'ú', 'ü', '¿', '¡']) ],
        affixes: [ r"\b\w+ción\b", r"\b\w+mente\b", r"\b\w+dad\b", r"\b\w+(?:ando|iendo)\b" ],
        words: [
            "el", "la", "los", "las", "de", "que", "y", "en", "un", "una", "es", "por", "con",
            "para", "está", "están", "son", "del", "al", "pero", "muy", "como", "yo", "tú", "se",
            "lo", "no",
        ],
        voices: [ "es-ES", "es-MX" ],

    FRA, "fr", "French",
        chars: [
            CharPattern::Set(&[
                'à', 'â', 'æ', 'ç', 'é', 'è', 'ê', 'ë', 'î', 'ï', 'ô', 'œ', 'ù', 'û', 'ÿ',
            ]),
        ],
        affixes: [
            r"\b\w+eux\b", r"\b\w+euse\b", r"\b\w+ment\b", r"\b(?:l|d|j|qu|n|s|c)'\w+",
            r"\b\w+aient\b",
        ],
        words: [
            "le", "la", "les", "de", "des", "du", "et", "est", "un", "une", "en", "que", "qui",
            "dans", "pour", "pas", "sur", "avec", "ce", "il", "elle", "nous", "vous", "ils", "au",
            "aux", "mais", "ou", "je",
        ],
        voices: [ "fr-FR", "fr-CA" ],

    DEU, "de", "German",
        chars: [ CharPattern::Set(&['ä', 'ö', 'ü', 'ß']) ],
        affixes: [
            r"\b\w+ung\b", r"\b\w+keit\b", r"\b\w+heit\b", r"\b\w+lich\b", r"\b\w+schaft\b",
            r"\bge\w+t\b",
        ],
        words: [
            "der", "die", "das", "und", "ist", "nicht", "ein", "eine", "zu", "den", "mit", "von",
            "sich", "des", "auf", "für", "im", "dem", "auch", "es", "ich", "sie", "wir", "wird",
            "sind",
        ],
        voices: [ "de-DE" ],

    ITA, "it", "Italian",
        chars: [ CharPattern::Set(&['à', 'è', 'é', 'ì', 'í', 'ò', 'ó', 'ù']) ],
        affixes: [
            r"\b\w+zione\b", r"\b\w+zioni\b", r"\b\w+mente\b", r"\b\w+(?:etto|etta|ino|ina)\b",
        ],
        words: [
            "il", "lo", "la", "gli", "le", "di", "che", "e", "è", "un", "una", "per", "non",
            "con", "sono", "del", "della", "nel", "ma", "come", "anche", "io", "questo", "ci",
        ],
        voices: [ "it-IT" ],

    POR, "pt", "Portuguese",
        chars: [
            CharPattern::Set(&['ã', 'õ', 'ç', 'á', 'é', 'í', 'ó', 'ú', 'â', 'ê', 'ô', 'à']),
        ],
        affixes: [
            r"\b\w+ção\b", r"\b\w+ções\b", r"\b\w+mente\b", r"\b\w+(?:inho|inha)\b", r"\b\w+ões\b",
        ],
        words: [
            "o", "a", "os", "as", "de", "do", "da", "dos", "das", "e", "em", "um", "uma", "que",
            "não", "para", "com", "por", "no", "na", "se", "mais", "é", "você", "eu", "ele",
        ],
        voices: [ "pt-BR", "pt-PT" ],

    RUS, "ru", "Russian",
        chars: [ CharPattern::Class(unicode::is_cyrillic) ],
        affixes: [ r"\w+(?:ость|ение|ание)\b", r"\w+(?:ться|тся)\b", r"\w+(?:ый|ий|ая|ое)\b" ],
        words: [
            "и", "в", "не", "на", "я", "что", "он", "с", "это", "как", "а", "по", "но", "они",
            "мы", "к", "у", "из", "за", "то", "так", "вы", "все", "она",
        ],
        voices: [ "ru-RU" ],

    ZHO, "zh", "Chinese",
        chars: [ CharPattern::Class(unicode::is_cjk_unified_ideograph) ],
        affixes: [ "的", "了", "是", "们" ],
        words: [],
        voices: [ "zh-CN", "zh-TW", "zh-HK" ],

    JPN, "ja", "Japanese",
        chars: [
            CharPattern::Class(unicode::is_hiragana),
            CharPattern::Class(unicode::is_katakana),
        ],
        affixes: [ "です", "ます", "でした", "ました", "ません" ],
        words: [],
        voices: [ "ja-JP" ],

    KOR, "ko", "Korean",
        chars: [ CharPattern::Class(unicode::is_hangul) ],
        affixes: [ "습니다", "입니다", r"\w+(?:에서|으로|에게)\b" ],
        words: [ "그리고", "그", "이", "저", "나는", "우리" ],
        voices: [ "ko-KR" ],

    ARA, "ar", "Arabic",
        chars: [ CharPattern::Class(unicode::is_arabic) ],
        affixes: [ r"\bال\w+", r"\w+(?:ة|ات|ون|ين)\b" ],
        words: [
            "في", "من", "على", "إلى", "عن", "مع", "هذا", "هذه", "أن", "كان", "التي", "الذي",
            "و", "لا", "ما",
        ],
        voices: [ "ar-SA", "ar-EG" ],

    HIN, "hi", "Hindi",
        chars: [ CharPattern::Class(unicode::is_devanagari) ],
        affixes: [ r"\w+(?:ों|ें|ाएं)\b", r"\w+ने\b" ],
        words: [
            "है", "हैं", "का", "की", "के", "में", "और", "को", "से", "यह", "वह", "था", "थी",
            "नहीं", "पर", "भी", "एक",
        ],
        voices: [ "hi-IN" ]
}
