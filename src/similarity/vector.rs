use std::collections::BTreeMap;

/// Normalized term frequencies of one text (values sum to 1)
///
/// Backed by an ordered map so that every traversal, and therefore every
/// floating-point sum over it, happens in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermVector {
    weights: BTreeMap<String, f64>,
}

impl TermVector {
    /// Count tokens and divide by the total. An empty sequence gives an
    /// empty vector.
    pub fn from_tokens<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        let mut total = 0usize;
        for token in tokens {
            *counts.entry(token.into()).or_insert(0) += 1;
            total += 1;
        }

        if total == 0 {
            return Self::default();
        }

        let weights = counts
            .into_iter()
            .map(|(token, count)| (token, count as f64 / total as f64))
            .collect();

        Self { weights }
    }

    /// Weight of `token`, zero when absent
    pub fn get(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Tokens in sorted order with their weights
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.weights.iter().map(|(token, weight)| (token.as_str(), *weight))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.weights.keys().map(String::as_str)
    }
}
