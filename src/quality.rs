//! Case quality evaluation.
//!
//! Two rubrics run over the same `(KeywordAnalysis, NineDimensions)` pair:
//! the tier classifier decides `high`/`medium`/`low`, the numeric scorer
//! produces the persisted 0-100 score. They weight fields differently and
//! both feed the semantic booster.

use crate::config::{HIGH_TIER_MIN, MEDIUM_TIER_MIN};
use crate::core::{KeywordAnalysis, NineDimensions, QualityTier};

// ═══════════════════════════════════════════════════════════════════════════
// Tier classifier
// ═══════════════════════════════════════════════════════════════════════════

const TIER_LONG_TEXT: usize = 50;
const TIER_SPECIFIC_SUGGESTION: usize = 15;
const MIN_SUGGESTIONS: usize = 3;

#[inline]
fn chars(text: &str) -> usize {
    text.chars().count()
}

/// Raw points of the tier rubric (0-123)
pub fn tier_points(analysis: &KeywordAnalysis, dimensions: &NineDimensions) -> u32 {
    let mut points = 0;

    if chars(&analysis.core_function) > TIER_LONG_TEXT {
        points += 20;
    }
    if analysis.key_attributes.len() >= 3 {
        points += 15;
    }
    if chars(&analysis.value_chain) > TIER_LONG_TEXT {
        points += 15;
    }
    if analysis.constraints.len() >= 2 {
        points += 10;
    }

    for (_, suggestions) in dimensions.iter() {
        if suggestions.len() >= MIN_SUGGESTIONS {
            points += 5;
            if suggestions.iter().any(|s| chars(s) > TIER_SPECIFIC_SUGGESTION) {
                points += 2;
            }
        }
    }

    points
}

/// Map tier points to a tier: >= 80 high, >= 60 medium, else low
pub fn tier_for_points(points: u32) -> QualityTier {
    if points >= HIGH_TIER_MIN {
        QualityTier::High
    } else if points >= MEDIUM_TIER_MIN {
        QualityTier::Medium
    } else {
        QualityTier::Low
    }
}

/// Classify a case's analytical depth.
///
/// `hint` is the tier the caller expected (the browser app passed `high`
/// by default); the computed tier always wins, a mismatch is only logged.
pub fn evaluate_case_quality(
    analysis: &KeywordAnalysis,
    dimensions: &NineDimensions,
    hint: Option<QualityTier>,
) -> QualityTier {
    let points = tier_points(analysis, dimensions);
    let tier = tier_for_points(points);

    if let Some(expected) = hint {
        if expected != tier {
            tracing::debug!("Quality hint {} overridden by computed tier {} ({} points)", expected, tier, points);
        }
    }

    tier
}

// ═══════════════════════════════════════════════════════════════════════════
// Numeric scorer
// ═══════════════════════════════════════════════════════════════════════════

const SCORE_LONG_TEXT: usize = 50;
const SCORE_AVG_SUGGESTION: f64 = 20.0;
const DIMENSION_BASE: f64 = 5.0;
const DIMENSION_DETAIL: f64 = 1.67;

/// Weighted 0-100 score: keyword analysis worth up to 40 points, each
/// dimension up to 6.67 (5 for three or more suggestions, 1.67 more when
/// their average length exceeds 20 chars). Rounded to the nearest integer.
pub fn calculate_case_score(analysis: &KeywordAnalysis, dimensions: &NineDimensions) -> u32 {
    let mut score = 0.0;

    if chars(&analysis.core_function) > SCORE_LONG_TEXT {
        score += 10.0;
    }
    if analysis.key_attributes.len() >= 3 {
        score += 8.0;
    }
    if chars(&analysis.current_form) > SCORE_LONG_TEXT {
        score += 8.0;
    }
    if chars(&analysis.target_users) > SCORE_LONG_TEXT {
        score += 8.0;
    }
    if chars(&analysis.value_chain) > SCORE_LONG_TEXT {
        score += 6.0;
    }

    for (_, suggestions) in dimensions.iter() {
        if suggestions.len() >= MIN_SUGGESTIONS {
            score += DIMENSION_BASE;
            let total: usize = suggestions.iter().map(|s| chars(s)).sum();
            let average = total as f64 / suggestions.len() as f64;
            if average > SCORE_AVG_SUGGESTION {
                score += DIMENSION_DETAIL;
            }
        }
    }

    (score.round() as u32).min(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;

    fn text(len: usize) -> String {
        "字".repeat(len)
    }

    fn list(count: usize, len: usize) -> Vec<String> {
        (0..count).map(|_| text(len)).collect()
    }

    fn rich_analysis() -> KeywordAnalysis {
        KeywordAnalysis {
            core_function: text(51),
            key_attributes: list(3, 4),
            current_form: text(51),
            target_users: text(51),
            value_chain: text(51),
            constraints: list(2, 4),
            ..Default::default()
        }
    }

    fn dimensions(filled: usize, count: usize, len: usize) -> NineDimensions {
        let mut dims = NineDimensions::default();
        for dimension in Dimension::ALL.into_iter().take(filled) {
            dims.set(dimension, list(count, len));
        }
        dims
    }

    #[test]
    fn test_tier_thresholds() {
        assert_eq!(tier_for_points(85), QualityTier::High);
        assert_eq!(tier_for_points(80), QualityTier::High);
        assert_eq!(tier_for_points(65), QualityTier::Medium);
        assert_eq!(tier_for_points(60), QualityTier::Medium);
        assert_eq!(tier_for_points(40), QualityTier::Low);
        assert_eq!(tier_for_points(0), QualityTier::Low);
    }

    #[test]
    fn test_tier_points_full_case() {
        let points = tier_points(&rich_analysis(), &dimensions(9, 3, 16));
        assert_eq!(points, 60 + 9 * 7);
        assert_eq!(evaluate_case_quality(&rich_analysis(), &dimensions(9, 3, 16), None), QualityTier::High);
    }

    #[test]
    fn test_tier_boundaries_are_strict() {
        let analysis = KeywordAnalysis {
            core_function: text(50),
            value_chain: text(50),
            key_attributes: list(2, 4),
            constraints: list(1, 4),
            ..Default::default()
        };
        // exactly 15 chars is not "specific"
        assert_eq!(tier_points(&analysis, &dimensions(9, 3, 15)), 45);
        assert_eq!(tier_points(&analysis, &dimensions(9, 2, 40)), 0);
    }

    #[test]
    fn test_tier_medium_and_low() {
        // 60 from analysis + 5 from one thin dimension
        let medium = evaluate_case_quality(&rich_analysis(), &dimensions(1, 3, 5), None);
        assert_eq!(medium, QualityTier::Medium);

        let low = evaluate_case_quality(&KeywordAnalysis::default(), &dimensions(9, 3, 5), None);
        assert_eq!(low, QualityTier::Low);
    }

    #[test]
    fn test_hint_does_not_override() {
        let tier = evaluate_case_quality(
            &KeywordAnalysis::default(),
            &NineDimensions::default(),
            Some(QualityTier::High),
        );
        assert_eq!(tier, QualityTier::Low);
    }

    #[test]
    fn test_case_score_maximum() {
        assert_eq!(calculate_case_score(&rich_analysis(), &dimensions(9, 3, 21)), 100);
    }

    #[test]
    fn test_case_score_dimension_detail() {
        // 9 * 5 = 45, no detail bonus at exactly 20 chars average
        assert_eq!(calculate_case_score(&KeywordAnalysis::default(), &dimensions(9, 3, 20)), 45);
        // 3 * 6.67 = 20.01 -> 20
        assert_eq!(calculate_case_score(&KeywordAnalysis::default(), &dimensions(3, 4, 30)), 20);
    }

    #[test]
    fn test_case_score_analysis_weights() {
        let analysis = KeywordAnalysis {
            core_function: text(60),
            key_attributes: list(3, 2),
            ..Default::default()
        };
        assert_eq!(calculate_case_score(&analysis, &NineDimensions::default()), 18);
    }

    #[test]
    fn test_empty_case_scores_zero() {
        assert_eq!(calculate_case_score(&KeywordAnalysis::default(), &NineDimensions::default()), 0);
        assert_eq!(tier_points(&KeywordAnalysis::default(), &NineDimensions::default()), 0);
    }
}
