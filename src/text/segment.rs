use crate::text::is_cjk_ideograph;

/// Split normalized text into tokens: every char on its own, plus every
/// adjacent pair of chars when both are CJK ideographs.
///
/// Character bigrams stand in for word boundaries in CJK text; single chars
/// keep short queries from producing empty vectors.
pub fn segment(normalized: &str) -> Vec<String> {
    let chars: Vec<char> = normalized.chars().collect();
    let mut tokens = Vec::with_capacity(chars.len() * 2);

    for (i, &c) in chars.iter().enumerate() {
        tokens.push(c.to_string());
        if let Some(&next) = chars.get(i + 1) {
            if is_cjk_ideograph(c) && is_cjk_ideograph(next) {
                let mut bigram = String::with_capacity(c.len_utf8() + next.len_utf8());
                bigram.push(c);
                bigram.push(next);
                tokens.push(bigram);
            }
        }
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_cjk_bigrams() {
        assert_eq!(segment("手机应用"), ["手", "手机", "机", "机应", "应", "应用", "用"]);
    }

    #[test]
    fn test_segment_latin_is_unigrams_only() {
        assert_eq!(segment("ab c"), ["a", "b", " ", "c"]);
    }

    #[test]
    fn test_segment_mixed_script() {
        // no bigram across the script boundary
        assert_eq!(segment("ai教育"), ["a", "i", "教", "教育", "育"]);
    }

    #[test]
    fn test_segment_empty() {
        assert!(segment("").is_empty());
    }
}
