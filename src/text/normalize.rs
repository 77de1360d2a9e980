use unicode_normalization::UnicodeNormalization;

/// True for chars in the CJK unified ideograph blocks (base, extension A,
/// compatibility ideographs)
#[inline]
pub fn is_cjk_ideograph(c: char) -> bool {
    matches!(c,
        '\u{4E00}'..='\u{9FFF}'
        | '\u{3400}'..='\u{4DBF}'
        | '\u{F900}'..='\u{FAFF}'
    )
}

#[inline]
fn is_kept(c: char) -> bool {
    c.is_alphanumeric() || is_cjk_ideograph(c)
}

/// Lower-case `text`, replace everything but letters, digits and CJK
/// ideographs with a space, collapse whitespace runs and trim.
///
/// ```
/// use osborn_case_engine::text::normalize;
///
/// assert_eq!(normalize("  Smart-Phone, 智能！ "), "smart phone 智能");
/// ```
pub fn normalize(text: &str) -> String {
    let replaced: String = text
        .nfc()
        .flat_map(char::to_lowercase)
        .map(|c| if is_kept(c) { c } else { ' ' })
        .collect();

    replaced.split_whitespace().collect::<Vec<_>>().join(" ")
}
