//! Raw score → integer percentage distribution.
//!
//! Three explicit passes, kept separate so each rule can be tested alone:
//!
//! 1. [`normalize`] orders candidates by raw score and rounds each share to
//!    a whole percent.
//! 2. [`correct_rounding`] hands the rounding remainder (`100 − sum`) to the
//!    first entry, i.e. the highest raw-score candidate.
//! 3. [`rank`] re-sorts by final confidence and truncates.

use crate::lang::Lang;
use serde::Serialize;

/// One language and its share of the total score, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Detection {
    #[serde(flatten)]
    pub lang: Lang,
    pub confidence: u8,
}

impl Detection {
    #[inline(always)]
    pub const fn code(&self) -> &'static str {
        self.lang.code
    }
    #[inline(always)]
    pub const fn name(&self) -> &'static str {
        self.lang.name
    }
    #[inline(always)]
    pub const fn confidence(&self) -> u8 {
        self.confidence
    }
}

#[inline]
fn percent(raw: u64, total: u64) -> u8 {
    ((raw as f64 / total as f64) * 100.0).round() as u8
}

/// Candidates with a zero raw score are dropped. The rest are ordered by raw
/// score descending (stable, so table order breaks ties). The total saturates
/// at `u64::MAX`, so every share stays within `0..=100`.
pub fn normalize(candidates: &[(Lang, u64)]) -> Vec<Detection> {
    let mut ordered: Vec<(Lang, u64)> = candidates
        .iter()
        .copied()
        .filter(|&(_, raw)| raw > 0)
        .collect();
    let total = ordered
        .iter()
        .fold(0u64, |acc, &(_, raw)| acc.saturating_add(raw));
    if total == 0 {
        return Vec::new();
    }
    ordered.sort_by(|a, b| b.1.cmp(&a.1));
    ordered
        .into_iter()
        .map(|(lang, raw)| Detection {
            lang,
            confidence: percent(raw, total),
        })
        .collect()
}

/// Push the rounding remainder onto the first entry so the distribution sums
/// to exactly 100. The adjusted value never goes below 0.
pub fn correct_rounding(detections: &mut [Detection]) {
    let sum: i64 = detections.iter().map(|d| i64::from(d.confidence)).sum();
    let Some(top) = detections.first_mut() else {
        return;
    };
    let adjusted = (i64::from(top.confidence) + 100 - sum).clamp(0, 100);
    top.confidence = adjusted as u8;
}

/// Stable sort by confidence descending, then keep at most `max` entries.
pub fn rank(mut detections: Vec<Detection>, max: usize) -> Vec<Detection> {
    detections.sort_by(|a, b| b.confidence.cmp(&a.confidence));
    detections.truncate(max);
    detections
}

#[inline]
pub fn total(detections: &[Detection]) -> u32 {
    detections.iter().map(|d| u32::from(d.confidence)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{DEU, ENG, FRA, ITA, JPN, POR, RUS, SPA, ZHO};

    #[test]
    fn normalize_orders_by_raw_score() {
        let out = normalize(&[(ENG, 1), (SPA, 19), (FRA, 6), (ITA, 3)]);
        let codes: Vec<_> = out.iter().map(|d| d.code()).collect();
        assert_eq!(codes, ["es", "fr", "it", "en"]);
        let confs: Vec<_> = out.iter().map(|d| d.confidence).collect();
        assert_eq!(confs, [66, 21, 10, 3]);
        assert_eq!(total(&out), 100);
    }

    #[test]
    fn normalize_drops_zero_scores() {
        let out = normalize(&[(ENG, 0), (ZHO, 16), (JPN, 0)]);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].lang, ZHO);
        assert_eq!(out[0].confidence, 100);
    }

    #[test]
    fn normalize_empty_and_all_zero() {
        assert!(normalize(&[]).is_empty());
        assert!(normalize(&[(ENG, 0), (SPA, 0)]).is_empty());
    }

    #[test]
    fn ties_keep_table_order() {
        let out = normalize(&[(ENG, 5), (SPA, 5), (FRA, 5)]);
        let codes: Vec<_> = out.iter().map(|d| d.code()).collect();
        assert_eq!(codes, ["en", "es", "fr"]);
    }

    #[test]
    fn correction_adds_shortfall_to_top_raw_candidate() {
        let mut out = normalize(&[(ENG, 1), (SPA, 1), (FRA, 1)]);
        assert_eq!(total(&out), 99);
        correct_rounding(&mut out);
        assert_eq!(out[0].lang, ENG);
        assert_eq!(out[0].confidence, 34);
        assert_eq!(total(&out), 100);
    }

    #[test]
    fn correction_removes_overshoot_then_rank_resorts() {
        // six equal shares round to 17 each → 102
        let mut out = normalize(&[(ENG, 1), (SPA, 1), (FRA, 1), (DEU, 1), (ITA, 1), (POR, 1)]);
        assert_eq!(total(&out), 102);
        correct_rounding(&mut out);
        assert_eq!(out[0].lang, ENG);
        assert_eq!(out[0].confidence, 15);
        assert_eq!(total(&out), 100);

        let ranked = rank(out, 10);
        assert_eq!(ranked.last().unwrap().lang, ENG);
        assert_eq!(ranked[0].lang, SPA);
    }

    #[test]
    fn correction_clamps_at_zero() {
        let mut out = vec![
            Detection { lang: ENG, confidence: 0 },
            Detection { lang: SPA, confidence: 90 },
            Detection { lang: FRA, confidence: 20 },
        ];
        correct_rounding(&mut out);
        assert_eq!(out[0].confidence, 0);
    }

    #[test]
    fn saturated_total_stays_in_range() {
        let mut out = normalize(&[(ENG, u64::MAX), (SPA, u64::MAX), (FRA, 1)]);
        assert!(out.iter().all(|d| d.confidence <= 100));
        correct_rounding(&mut out);
        assert_eq!(total(&out), 100);
    }

    #[test]
    fn correction_on_empty_is_noop() {
        let mut out: Vec<Detection> = Vec::new();
        correct_rounding(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn rank_truncates() {
        let out = vec![
            Detection { lang: ENG, confidence: 10 },
            Detection { lang: SPA, confidence: 40 },
            Detection { lang: RUS, confidence: 50 },
        ];
        let ranked = rank(out, 2);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].lang, RUS);
        assert_eq!(ranked[1].lang, SPA);
    }

    #[test]
    fn serializes_flat() {
        let d = Detection { lang: SPA, confidence: 66 };
        let json = serde_json::to_value(d).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "code": "es", "name": "Spanish", "confidence": 66 })
        );
    }
}
