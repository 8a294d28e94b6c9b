use std::collections::HashSet;

use crate::core::constants::{MIN_KEYWORD_LEN, STOPWORDS};

/// Extract the normalized keyword set of a bio
///
/// Lowercases the text, strips everything except letters (ASCII and accented
/// Latin) and whitespace, then drops short tokens and stopwords.
/// An absent or blank bio yields an empty set.
pub fn extract_keywords(bio: Option<&str>) -> HashSet<String> {
    let Some(bio) = bio else {
        return HashSet::new();
    };

    let normalized: String = bio
        .to_lowercase()
        .chars()
        .filter(|c| c.is_whitespace() || is_keyword_letter(*c))
        .collect();

    normalized
        .split_whitespace()
        .filter(|token| token.chars().count() >= MIN_KEYWORD_LEN)
        .filter(|token| !is_stopword(token))
        .map(str::to_owned)
        .collect()
}

/// Whether a token is on the stopword list
#[inline]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(&token)
}

/// Letters kept by normalization: ASCII letters plus the Latin-1 and Latin Extended ranges
#[inline]
fn is_keyword_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || (('\u{00C0}'..='\u{024F}').contains(&c) && c.is_alphabetic())
}
