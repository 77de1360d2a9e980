use std::sync::Arc;
use std::time::Instant;

use chrono::{Duration, Utc};

use crate::adapt::{adapt_analysis_text, adapt_suggestion_to_topic, merge_unique};
use crate::config::{FindOptions, RECENT_WINDOW_DAYS, SEMANTIC_TRIGGER};
use crate::core::{
    slug, CaseRecord, CaseStats, Dimension, KeywordAnalysis, NineDimensions, QualityTier, SimilarityResult,
};
use crate::error::{CaseEngineError, Result};
use crate::industry::{detect_industry, match_industry_template};
use crate::inspiration::{base_suggestions, inspired_suggestion};
use crate::quality;
use crate::random::RandomSource;
use crate::semantic;
use crate::similarity::{BlendedScorer, SimilarityScorer};
use crate::store::{CaseMap, CaseStore};
use crate::text::{extract_keywords, keywords_overlap, normalize};

const MAX_KEY_ATTRIBUTES: usize = 5;
const MAX_USAGE_SCENARIOS: usize = 4;
const MAX_CONSTRAINTS: usize = 4;
const ADAPTED_PER_DIMENSION: usize = 2;
const BASE_PER_DIMENSION: usize = 2;

/// Case library orchestrator: retrieval, persistence and topic analysis
/// over an injected [`CaseStore`]
pub struct CaseEngine {
    store: Arc<dyn CaseStore>,
    scorer: Arc<dyn SimilarityScorer>,
}

impl CaseEngine {
    /// Create engine over `store` with the blended title scorer
    pub fn new(store: Arc<dyn CaseStore>) -> Self {
        Self {
            store,
            scorer: Arc::new(BlendedScorer::new()),
        }
    }

    /// Replace the title scorer
    pub fn with_scorer(mut self, scorer: Arc<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Name of the backing store
    pub fn store_name(&self) -> &str {
        self.store.name()
    }

    /// Load the library for a read path. A store that cannot be read is
    /// treated as empty.
    fn load_or_empty(&self) -> CaseMap {
        match self.store.load() {
            Ok(cases) => cases,
            Err(e) => {
                tracing::warn!("⚠️ Failed to read case store '{}', treating as empty: {}", self.store.name(), e);
                CaseMap::new()
            }
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Retrieval
    // ═══════════════════════════════════════════════════════════════════════

    /// Rank stored cases against `query`, best first
    pub fn find_similar_cases(&self, query: &str, options: &FindOptions) -> Vec<SimilarityResult> {
        let start = Instant::now();

        if normalize(query).is_empty() {
            return Vec::new();
        }

        let cases = self.load_or_empty();
        let mut results: Vec<SimilarityResult> = Vec::new();

        for case in cases.values() {
            if let Some(tier) = options.quality_filter {
                if case.quality != tier {
                    continue;
                }
            }

            let mut similarity = self.scorer.score(query, &case.topic);

            if options.use_semantic_search && similarity < SEMANTIC_TRIGGER {
                similarity = semantic::boost(similarity, semantic::semantic_similarity(query, case));
            }

            tracing::debug!("'{}' vs '{}': {:.3}", query, case.topic, similarity);

            if !similarity.is_finite() || similarity < options.min_similarity {
                continue;
            }

            results.push(SimilarityResult::new(case.clone(), similarity, match_reason(query, case)));
        }

        results.sort_by(|a, b| b.similarity.partial_cmp(&a.similarity).unwrap_or(std::cmp::Ordering::Equal));
        results.truncate(options.max_results);

        tracing::debug!(
            "🔍 '{}': {} of {} cases matched via {} ({:.2}ms)",
            query,
            results.len(),
            cases.len(),
            self.scorer.name(),
            start.elapsed().as_secs_f64() * 1000.0
        );

        results
    }

    /// Best match for `query` under default options
    pub fn best_match(&self, query: &str) -> Option<SimilarityResult> {
        self.find_similar_cases(query, &FindOptions::default()).into_iter().next()
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Library maintenance
    // ═══════════════════════════════════════════════════════════════════════

    /// Evaluate and upsert a case under its slug, rewriting the whole store
    pub fn save_case(
        &self,
        topic: &str,
        keyword_analysis: KeywordAnalysis,
        nine_dimensions: NineDimensions,
    ) -> Result<CaseRecord> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(CaseEngineError::InvalidTopic(topic.to_string()));
        }

        let mut cases = self.store.load()?;
        let record = CaseRecord::evaluated(topic, keyword_analysis, nine_dimensions);
        cases.insert(record.slug(), record.clone());
        self.store.save(&cases)?;

        tracing::info!("💾 Saved case '{}' (quality: {}, score: {})", record.topic, record.quality, record.score);
        Ok(record)
    }

    /// Remove the case stored under `topic`'s slug. Returns whether one existed.
    pub fn delete_case(&self, topic: &str) -> Result<bool> {
        let mut cases = self.store.load()?;
        let removed = cases.remove(&slug(topic)).is_some();

        if removed {
            self.store.save(&cases)?;
            tracing::info!("🗑️ Deleted case '{}'", topic);
        }

        Ok(removed)
    }

    pub fn get_case(&self, topic: &str) -> Option<CaseRecord> {
        self.load_or_empty().remove(&slug(topic))
    }

    /// All stored cases ordered by slug
    pub fn list_cases(&self) -> Vec<CaseRecord> {
        self.load_or_empty().into_values().collect()
    }

    /// Library totals; `recent` counts cases created in the last 30 days
    pub fn case_stats(&self) -> CaseStats {
        let cases = self.load_or_empty();
        let cutoff = Utc::now() - Duration::days(RECENT_WINDOW_DAYS);

        CaseStats {
            total: cases.len(),
            high_quality: cases.values().filter(|c| c.is_high_quality()).count(),
            recent: cases.values().filter(|c| c.created_at >= cutoff).count(),
        }
    }

    pub fn evaluate_case_quality(
        &self,
        analysis: &KeywordAnalysis,
        dimensions: &NineDimensions,
        hint: Option<QualityTier>,
    ) -> QualityTier {
        quality::evaluate_case_quality(analysis, dimensions, hint)
    }

    pub fn calculate_case_score(&self, analysis: &KeywordAnalysis, dimensions: &NineDimensions) -> u32 {
        quality::calculate_case_score(analysis, dimensions)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Analysis from the library
    // ═══════════════════════════════════════════════════════════════════════

    /// Keyword analysis for a new topic: the industry template, enriched by
    /// the best matching stored case when there is one
    pub fn analyze_topic(&self, topic: &str) -> KeywordAnalysis {
        let template = match_industry_template(topic);

        let Some(best) = self.best_match(topic) else {
            tracing::debug!("No similar case for '{}', using template", topic);
            return template_for_topic(template, topic);
        };

        tracing::info!("📚 Analysing '{}' from case '{}'", topic, best.case.topic);
        let case = &best.case.keyword_analysis;

        KeywordAnalysis {
            core_function: adapt_analysis_text(&case.core_function, topic),
            key_attributes: merge_lists(&template.key_attributes, &case.key_attributes, MAX_KEY_ATTRIBUTES),
            current_form: adapt_analysis_text(&case.current_form, topic),
            target_users: adapt_analysis_text(&case.target_users, topic),
            usage_scenarios: merge_lists(&template.usage_scenarios, &case.usage_scenarios, MAX_USAGE_SCENARIOS),
            value_chain: adapt_analysis_text(&case.value_chain, topic),
            market_trends: template.market_trends,
            competitive_advantage: template.competitive_advantage,
            risk_factors: template.risk_factors,
            constraints: merge_lists(&template.constraints, &case.constraints, MAX_CONSTRAINTS),
        }
    }

    /// Suggestions for all nine dimensions: generic suggestions, replaced
    /// in part by the best matching case's adapted suggestions, plus one
    /// suggestion inspired by a classic example per dimension
    pub fn generate_nine_dimensions(&self, topic: &str, random: &mut dyn RandomSource) -> NineDimensions {
        let best = self.best_match(topic);
        let mut dimensions = NineDimensions::default();

        for dimension in Dimension::ALL {
            let base = base_suggestions(dimension, topic);

            let mut merged = match &best {
                Some(result) if !result.case.nine_dimensions.get(dimension).is_empty() => {
                    let case = &result.case;
                    case.nine_dimensions
                        .get(dimension)
                        .iter()
                        .take(ADAPTED_PER_DIMENSION)
                        .map(|s| adapt_suggestion_to_topic(s, &case.topic, topic))
                        .chain(base.into_iter().take(BASE_PER_DIMENSION))
                        .collect()
                }
                _ => base,
            };

            if let Some(inspired) = inspired_suggestion(dimension, topic, random) {
                merged.push(inspired);
            }

            dimensions.set(dimension, merged);
        }

        dimensions
    }
}

/// Why `case` matched `query`: shared topic keywords, same industry bucket
/// (only checked when the case has a value chain) and the high-quality tag,
/// joined by `，`. Falls back to `主题相关`.
pub fn match_reason(query: &str, case: &CaseRecord) -> String {
    let mut reasons: Vec<String> = Vec::new();

    let topic_keywords = extract_keywords(&case.topic);
    let shared: Vec<String> = extract_keywords(query)
        .into_iter()
        .filter(|word| topic_keywords.iter().any(|topic_word| keywords_overlap(word, topic_word)))
        .collect();
    if !shared.is_empty() {
        reasons.push(format!("包含关键词：{}", shared.join("、")));
    }

    let value_chain = &case.keyword_analysis.value_chain;
    if !value_chain.is_empty() && detect_industry(query) == detect_industry(value_chain) {
        reasons.push("同一行业领域".to_string());
    }

    if case.is_high_quality() {
        reasons.push("高质量案例".to_string());
    }

    if reasons.is_empty() {
        "主题相关".to_string()
    } else {
        reasons.join("，")
    }
}

/// Template entries followed by the case's new ones. A case without
/// entries leaves the template untouched.
fn merge_lists(template: &[String], case: &[String], limit: usize) -> Vec<String> {
    if case.is_empty() {
        template.to_vec()
    } else {
        merge_unique(template, case, limit)
    }
}

/// Template analysis with its generic placeholders filled by `topic`
fn template_for_topic(template: KeywordAnalysis, topic: &str) -> KeywordAnalysis {
    KeywordAnalysis {
        core_function: replace_first(&template.core_function, &["通用", "科技产品"], topic),
        key_attributes: template
            .key_attributes
            .iter()
            .map(|attr| replace_first(attr, &["通用"], topic))
            .collect(),
        current_form: replace_first(&template.current_form, &["通用"], topic),
        target_users: replace_first(&template.target_users, &["通用"], topic),
        value_chain: replace_first(&template.value_chain, &["通用"], topic),
        ..template
    }
}

/// Replace the leftmost occurrence of any of `patterns`
fn replace_first(text: &str, patterns: &[&str], replacement: &str) -> String {
    let leftmost = patterns
        .iter()
        .filter_map(|p| text.find(p).map(|i| (i, p.len())))
        .min_by_key(|(i, _)| *i);

    match leftmost {
        Some((start, len)) => format!("{}{}{}", &text[..start], replacement, &text[start + len..]),
        None => text.to_string(),
    }
}
