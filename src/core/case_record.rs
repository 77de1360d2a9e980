use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

use crate::core::NineDimensions;
use crate::text::is_cjk_ideograph;

/// Separators accepted when a list field is stored as one string
const LIST_SEPARATORS: &[char] = &['、', ',', '，', ';', '；'];

/// Deserialize a text field, mapping `null` to an empty string
pub(crate) fn deserialize_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Deserialize any field, falling back to its default when the value is
/// `null` or does not fit (e.g. an unknown tier)
fn deserialize_or_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Deserialize a timestamp; `null` or an unparsable value becomes now
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_else(|_| Utc::now()))
}

/// Deserialize a 0-100 score from any JSON number, rounded and clamped.
/// Anything else is 0.
fn deserialize_score<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value
        .as_f64()
        .filter(|score| score.is_finite())
        .map(|score| score.round().clamp(0.0, 100.0) as u32)
        .unwrap_or(0))
}

/// Deserialize a list field from a list, a separator-joined string, or `null`
pub(crate) fn deserialize_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum ListValue {
        List(Vec<Option<String>>),
        Text(String),
        Null,
    }

    match ListValue::deserialize(deserializer)? {
        ListValue::List(items) => Ok(items.into_iter().flatten().collect()),
        ListValue::Text(text) => Ok(split_entries(&text)),
        ListValue::Null => Ok(Vec::new()),
    }
}

/// Split a `、`/comma/semicolon separated string into trimmed entries
pub fn split_entries(text: &str) -> Vec<String> {
    text.split(LIST_SEPARATORS)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Coarse quality classification of a saved case
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    High,
    Medium,
    #[default]
    Low,
}

impl QualityTier {
    pub fn as_str(self) -> &'static str {
        match self {
            QualityTier::High => "high",
            QualityTier::Medium => "medium",
            QualityTier::Low => "low",
        }
    }
}

impl std::fmt::Display for QualityTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QualityTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "high" => Ok(QualityTier::High),
            "medium" => Ok(QualityTier::Medium),
            "low" => Ok(QualityTier::Low),
            other => Err(format!("Unknown quality tier: {}", other)),
        }
    }
}

/// Descriptive analysis of a topic.
///
/// Every field is optional in the stored document; missing or `null`
/// values decode as empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordAnalysis {
    /// What the subject fundamentally does
    #[serde(default, deserialize_with = "deserialize_text")]
    pub core_function: String,

    #[serde(default, deserialize_with = "deserialize_list")]
    pub key_attributes: Vec<String>,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub current_form: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub target_users: String,

    #[serde(default, deserialize_with = "deserialize_list")]
    pub usage_scenarios: Vec<String>,

    /// Upstream-to-downstream value flow, e.g. `研发->设计->推广`
    #[serde(default, deserialize_with = "deserialize_text")]
    pub value_chain: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub market_trends: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub competitive_advantage: String,

    #[serde(default, deserialize_with = "deserialize_text")]
    pub risk_factors: String,

    #[serde(default, deserialize_with = "deserialize_list")]
    pub constraints: Vec<String>,
}

impl KeywordAnalysis {
    /// Apply `text` to every text field and `entry` to every list entry
    pub fn map_fields(
        &self,
        mut text: impl FnMut(&str) -> String,
        mut entry: impl FnMut(&str) -> String,
    ) -> Self {
        let mut list = |items: &[String]| -> Vec<String> { items.iter().map(|s| entry(s)).collect() };
        let key_attributes = list(&self.key_attributes);
        let usage_scenarios = list(&self.usage_scenarios);
        let constraints = list(&self.constraints);

        Self {
            core_function: text(&self.core_function),
            key_attributes,
            current_form: text(&self.current_form),
            target_users: text(&self.target_users),
            usage_scenarios,
            value_chain: text(&self.value_chain),
            market_trends: text(&self.market_trends),
            competitive_advantage: text(&self.competitive_advantage),
            risk_factors: text(&self.risk_factors),
            constraints,
        }
    }
}

/// A saved topic analysis used as a retrieval source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaseRecord {
    pub topic: String,

    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub keyword_analysis: KeywordAnalysis,

    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub nine_dimensions: NineDimensions,

    #[serde(default = "Utc::now", deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,

    #[serde(default, deserialize_with = "deserialize_or_default")]
    pub quality: QualityTier,

    /// Numeric quality score (0-100)
    #[serde(default, deserialize_with = "deserialize_score")]
    pub score: u32,
}

impl CaseRecord {
    /// Build a record, computing its tier and score from the content
    pub fn evaluated(
        topic: impl Into<String>,
        keyword_analysis: KeywordAnalysis,
        nine_dimensions: NineDimensions,
    ) -> Self {
        let quality = crate::quality::evaluate_case_quality(&keyword_analysis, &nine_dimensions, None);
        let score = crate::quality::calculate_case_score(&keyword_analysis, &nine_dimensions);
        Self {
            topic: topic.into(),
            keyword_analysis,
            nine_dimensions,
            created_at: Utc::now(),
            quality,
            score,
        }
    }

    /// Storage key for this record
    pub fn slug(&self) -> String {
        slug(&self.topic)
    }

    pub fn is_high_quality(&self) -> bool {
        self.quality == QualityTier::High
    }
}

/// Storage key for a topic: lower-cased, every char other than ASCII
/// alphanumerics, `_` and CJK ideographs replaced by `_`
pub fn slug(topic: &str) -> String {
    topic
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || is_cjk_ideograph(c) {
                c
            } else {
                '_'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Dimension;

    #[test]
    fn test_slug() {
        assert_eq!(slug("Smart Phone-App!"), "smart_phone_app_");
        assert_eq!(slug("智能手机应用"), "智能手机应用");
        assert_eq!(slug("AI 教育"), "ai_教育");
    }

    #[test]
    fn test_quality_tier_parse() {
        assert_eq!("HIGH".parse::<QualityTier>(), Ok(QualityTier::High));
        assert_eq!(" medium ".parse::<QualityTier>(), Ok(QualityTier::Medium));
        assert!("great".parse::<QualityTier>().is_err());
        assert_eq!(QualityTier::Low.to_string(), "low");
    }

    #[test]
    fn test_keyword_analysis_lenient_decoding() {
        let analysis: KeywordAnalysis = serde_json::from_str(
            r#"{
                "coreFunction": null,
                "keyAttributes": ["a", null, "b"],
                "constraints": "研发投入成本、技术人才稀缺, 数据隐私合规"
            }"#,
        )
        .unwrap();

        assert_eq!(analysis.core_function, "");
        assert_eq!(analysis.key_attributes, ["a", "b"]);
        assert_eq!(analysis.constraints, ["研发投入成本", "技术人才稀缺", "数据隐私合规"]);
        assert!(analysis.value_chain.is_empty());
    }

    #[test]
    fn test_case_record_camel_case_document() {
        let record: CaseRecord = serde_json::from_str(
            r#"{
                "topic": "智能手机应用",
                "keywordAnalysis": {"coreFunction": "通讯"},
                "nineDimensions": {"ta": ["x", "y", "z"]},
                "createdAt": "2025-01-02T03:04:05Z",
                "quality": "high",
                "score": 88
            }"#,
        )
        .unwrap();

        assert_eq!(record.topic, "智能手机应用");
        assert_eq!(record.keyword_analysis.core_function, "通讯");
        assert_eq!(record.nine_dimensions.get(Dimension::Ta).len(), 3);
        assert_eq!(record.quality, QualityTier::High);
        assert_eq!(record.score, 88);

        let json = serde_json::to_value(&record).unwrap();
        assert!(json.get("keywordAnalysis").is_some());
        assert!(json.get("nineDimensions").is_some());
        assert!(json.get("createdAt").is_some());
    }

    #[test]
    fn test_minimal_record_defaults() {
        let record: CaseRecord = serde_json::from_str(r#"{"topic": "x"}"#).unwrap();
        assert_eq!(record.quality, QualityTier::Low);
        assert_eq!(record.score, 0);
        assert!(record.nine_dimensions.is_empty());
    }

    #[test]
    fn test_null_and_odd_record_fields_fall_back() {
        let record: CaseRecord = serde_json::from_str(
            r#"{
                "topic": "智能手机应用",
                "keywordAnalysis": null,
                "nineDimensions": null,
                "createdAt": "yesterday",
                "quality": "excellent",
                "score": 87.5
            }"#,
        )
        .unwrap();

        assert_eq!(record.keyword_analysis, KeywordAnalysis::default());
        assert!(record.nine_dimensions.is_empty());
        assert_eq!(record.quality, QualityTier::Low);
        assert_eq!(record.score, 88);
        assert!(record.created_at <= Utc::now());
    }

    #[test]
    fn test_score_is_clamped() {
        let score = |json: &str| serde_json::from_str::<CaseRecord>(json).unwrap().score;
        assert_eq!(score(r#"{"topic": "x", "score": 250}"#), 100);
        assert_eq!(score(r#"{"topic": "x", "score": -3}"#), 0);
        assert_eq!(score(r#"{"topic": "x", "score": null}"#), 0);
        assert_eq!(score(r#"{"topic": "x", "score": "88"}"#), 0);
    }

    #[test]
    fn test_record_without_topic_is_rejected() {
        assert!(serde_json::from_str::<CaseRecord>(r#"{"quality": "high"}"#).is_err());
        assert!(serde_json::from_str::<CaseRecord>(r#"{"topic": null}"#).is_err());
    }

    #[test]
    fn test_map_fields_touches_every_field() {
        let analysis = KeywordAnalysis {
            core_function: "a".into(),
            key_attributes: vec!["b".into()],
            constraints: vec!["c".into()],
            ..Default::default()
        };

        let mapped = analysis.map_fields(|s| format!("<{}>", s), |s| format!("[{}]", s));
        assert_eq!(mapped.core_function, "<a>");
        assert_eq!(mapped.value_chain, "<>");
        assert_eq!(mapped.key_attributes, ["[b]"]);
        assert_eq!(mapped.constraints, ["[c]"]);
        assert_eq!(mapped.value_chain, "<>");
    }
}
