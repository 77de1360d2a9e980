//! Rewriting a matched case's text so it reads for a new topic

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::core::CaseRecord;

/// A CJK run directly followed by a linking particle; the run is taken to be
/// the subject of the sentence
static SUBJECT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\x{4e00}-\x{9fa5}]+)([的是为在与和或])").expect("valid subject regex"));

/// Adapt one suggestion from `old_topic` to `new_topic`.
///
/// Every literal occurrence of `old_topic` is replaced. When nothing was
/// replaced the new topic is prefixed as `<new_topic>可以<original>`, so the
/// result always mentions the new topic.
///
/// ```
/// use osborn_case_engine::adapt_suggestion_to_topic;
///
/// assert_eq!(adapt_suggestion_to_topic("做X的事", "X", "Y"), "做Y的事");
/// assert_eq!(adapt_suggestion_to_topic("降低成本", "X", "Y"), "Y可以降低成本");
/// ```
pub fn adapt_suggestion_to_topic(original: &str, old_topic: &str, new_topic: &str) -> String {
    if original.is_empty() {
        return format!("为{}创造创新价值", new_topic);
    }

    if !old_topic.is_empty() && original.contains(old_topic) {
        let adapted = original.replace(old_topic, new_topic);
        if adapted != original {
            return adapted;
        }
    }

    format!("{}可以{}", new_topic, original)
}

/// Adapt a descriptive analysis sentence: every CJK run immediately followed
/// by one of `的 是 为 在 与 和 或` is replaced by `new_topic`.
pub fn adapt_analysis_text(original: &str, new_topic: &str) -> String {
    if original.is_empty() {
        return format!("{}的相关分析", new_topic);
    }

    SUBJECT_RE
        .replace_all(original, |caps: &Captures| format!("{}{}", new_topic, &caps[2]))
        .into_owned()
}

/// Append entries of `extra` not already covered (substring either way) by
/// an entry of `base`, then cap the list at `limit`
pub fn merge_unique(base: &[String], extra: &[String], limit: usize) -> Vec<String> {
    let mut merged: Vec<String> = base.to_vec();
    for item in extra {
        if item.is_empty() {
            continue;
        }
        if !merged.iter().any(|m| m.contains(item.as_str()) || item.contains(m.as_str())) {
            merged.push(item.clone());
        }
    }
    merged.truncate(limit);
    merged
}

/// Rewrite every text field, list entry and suggestion of `case` for
/// `new_topic`. Every list entry and suggestion mentions the new topic
/// afterwards; text fields the case left empty stay empty.
pub fn adapt_case(case: &CaseRecord, new_topic: &str) -> CaseRecord {
    let old_topic = case.topic.as_str();
    let adapt = |text: &str| adapt_suggestion_to_topic(text, old_topic, new_topic);
    let adapt_field = |text: &str| {
        if text.is_empty() {
            String::new()
        } else {
            adapt(text)
        }
    };

    CaseRecord {
        topic: new_topic.to_string(),
        keyword_analysis: case.keyword_analysis.map_fields(adapt_field, adapt),
        nine_dimensions: case.nine_dimensions.map_suggestions(adapt),
        created_at: case.created_at,
        quality: case.quality,
        score: case.score,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Dimension, KeywordAnalysis, NineDimensions};

    #[test]
    fn test_replaces_all_occurrences() {
        let adapted = adapt_suggestion_to_topic("做X的事，X更好", "X", "Y");
        assert_eq!(adapted, "做Y的事，Y更好");
        assert!(!adapted.contains('X'));
    }

    #[test]
    fn test_replacement_is_case_sensitive() {
        assert_eq!(adapt_suggestion_to_topic("make app better", "App", "Tool"), "Tool可以make app better");
    }

    #[test]
    fn test_prefix_fallback() {
        let adapted = adapt_suggestion_to_topic("增加社交功能", "智能手机", "智能手表");
        assert!(adapted.starts_with("智能手表可以"));
        assert!(adapted.ends_with("增加社交功能"));
    }

    #[test]
    fn test_empty_inputs() {
        assert_eq!(adapt_suggestion_to_topic("", "X", "Y"), "为Y创造创新价值");
        assert_eq!(adapt_suggestion_to_topic("abc", "", "Y"), "Y可以abc");
    }

    #[test]
    fn test_adapt_analysis_text() {
        assert_eq!(
            adapt_analysis_text("手机，连接人与信息", "智能手表"),
            "手机，智能手表与信息"
        );
        // the longest run before a particle is taken as the subject
        assert_eq!(adapt_analysis_text("智能手机是现代人的必需品", "智能手表"), "智能手表的必需品");
        assert_eq!(adapt_analysis_text("", "咖啡杯"), "咖啡杯的相关分析");
        assert_eq!(adapt_analysis_text("no particles here", "x"), "no particles here");
    }

    #[test]
    fn test_adapt_analysis_text_replacement_is_literal() {
        assert_eq!(adapt_analysis_text("手机和电脑", "$1"), "$1和电脑");
    }

    #[test]
    fn test_merge_unique() {
        let base = vec!["技术创新性".to_string(), "用户体验".to_string()];
        let extra = vec!["创新性".to_string(), "续航能力".to_string(), "".to_string(), "品牌".to_string()];

        assert_eq!(merge_unique(&base, &extra, 5), ["技术创新性", "用户体验", "续航能力", "品牌"]);
        assert_eq!(merge_unique(&base, &extra, 3), ["技术创新性", "用户体验", "续航能力"]);
    }

    #[test]
    fn test_adapt_case() {
        let mut dims = NineDimensions::default();
        dims.set(
            Dimension::Ta,
            vec!["把智能手机用于教育".to_string(), "增加屏幕".to_string(), String::new()],
        );
        let case = CaseRecord::evaluated(
            "智能手机",
            KeywordAnalysis {
                core_function: "智能手机连接人与信息".to_string(),
                key_attributes: vec!["便携".to_string(), String::new()],
                ..Default::default()
            },
            dims,
        );

        let adapted = adapt_case(&case, "智能手表");
        assert_eq!(adapted.topic, "智能手表");
        assert_eq!(adapted.keyword_analysis.core_function, "智能手表连接人与信息");
        assert_eq!(adapted.keyword_analysis.key_attributes, ["智能手表可以便携", "为智能手表创造创新价值"]);
        assert_eq!(adapted.keyword_analysis.value_chain, "");
        assert_eq!(
            adapted.nine_dimensions.get(Dimension::Ta),
            ["把智能手表用于教育", "智能手表可以增加屏幕", "为智能手表创造创新价值"]
        );
        assert!(adapted.nine_dimensions.iter().flat_map(|(_, s)| s).all(|s| s.contains("智能手表")));
        assert_eq!(adapted.quality, case.quality);
    }
}
