//! Content-based rescue path for weak title matches

use crate::config::{HIGH_SCORE_BOOST, HIGH_SCORE_THRESHOLD, HIGH_TIER_BOOST, SEMANTIC_DISCOUNT};
use crate::core::CaseRecord;
use crate::text::{extract_keywords, keywords_overlap};

/// Keywords describing a case: its topic, core function and value chain
/// keywords, plus its key attributes taken whole
pub fn case_keywords(case: &CaseRecord) -> Vec<String> {
    let analysis = &case.keyword_analysis;
    let mut keywords = extract_keywords(&case.topic);
    keywords.extend(extract_keywords(&analysis.core_function));
    keywords.extend(extract_keywords(&analysis.value_chain));
    keywords.extend(
        analysis
            .key_attributes
            .iter()
            .map(|attr| attr.trim().to_lowercase())
            .filter(|attr| !attr.is_empty()),
    );
    keywords
}

/// Share of query keywords found in (or containing) a case keyword, boosted
/// for high-quality cases and capped at 1.
pub fn semantic_similarity(query: &str, case: &CaseRecord) -> f64 {
    let query_keywords = extract_keywords(query);
    let case_keywords = case_keywords(case);

    let overlap = query_keywords
        .iter()
        .filter(|word| case_keywords.iter().any(|case_word| keywords_overlap(word, case_word)))
        .count();

    let mut score = overlap as f64 / query_keywords.len().max(1) as f64;

    if case.is_high_quality() {
        score *= HIGH_TIER_BOOST;
    }
    if case.score > HIGH_SCORE_THRESHOLD {
        score *= HIGH_SCORE_BOOST;
    }

    score.min(1.0)
}

/// Final similarity once the semantic path has been consulted: the
/// discounted semantic score can only raise the title score
pub fn boost(title_similarity: f64, semantic_score: f64) -> f64 {
    title_similarity.max(SEMANTIC_DISCOUNT * semantic_score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{KeywordAnalysis, NineDimensions, QualityTier};

    fn case(topic: &str, quality: QualityTier, score: u32) -> CaseRecord {
        let mut record = CaseRecord::evaluated(
            topic,
            KeywordAnalysis {
                core_function: "帮助 用户 管理 日程 提醒".to_string(),
                value_chain: "硬件->软件->服务".to_string(),
                key_attributes: vec!["续航".to_string(), "".to_string()],
                ..Default::default()
            },
            NineDimensions::default(),
        );
        record.quality = quality;
        record.score = score;
        record
    }

    #[test]
    fn test_case_keywords_include_content() {
        let keywords = case_keywords(&case("智能手表", QualityTier::Low, 0));
        assert!(keywords.contains(&"智能手表".to_string()));
        assert!(keywords.contains(&"日程".to_string()));
        assert!(keywords.contains(&"续航".to_string()));
        assert!(keywords.iter().all(|k| !k.is_empty()));
    }

    #[test]
    fn test_overlap_ratio() {
        // "日程" matches, "咖啡" does not
        let score = semantic_similarity("日程 咖啡", &case("智能手表", QualityTier::Low, 0));
        assert_eq!(score, 0.5);
    }

    #[test]
    fn test_substring_either_way() {
        // query keyword contains case keyword "续航"
        let score = semantic_similarity("超长续航", &case("智能手表", QualityTier::Low, 0));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_quality_boosts() {
        let base = semantic_similarity("日程 咖啡 茶叶", &case("x", QualityTier::Low, 0));
        let high = semantic_similarity("日程 咖啡 茶叶", &case("x", QualityTier::High, 0));
        let both = semantic_similarity("日程 咖啡 茶叶", &case("x", QualityTier::High, 81));
        let at_threshold = semantic_similarity("日程 咖啡 茶叶", &case("x", QualityTier::Low, 80));

        assert!((high - base * 1.2).abs() < 1e-12);
        assert!((both - base * 1.2 * 1.1).abs() < 1e-12);
        assert_eq!(at_threshold, base);
    }

    #[test]
    fn test_capped_at_one() {
        let score = semantic_similarity("日程", &case("x", QualityTier::High, 95));
        assert_eq!(score, 1.0);
    }

    #[test]
    fn test_empty_query_scores_zero() {
        assert_eq!(semantic_similarity("", &case("x", QualityTier::High, 95)), 0.0);
    }

    #[test]
    fn test_boost_never_lowers() {
        assert_eq!(boost(0.4, 0.2), 0.4);
        assert!((boost(0.2, 1.0) - 0.7).abs() < 1e-12);
    }
}
