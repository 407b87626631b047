//! Whitespace-insensitive substring matching.
//!
//! This is intentionally cheap and permissive: substring containment over
//! normalized strings, not edit distance or token-set similarity. Its job is
//! to be a low-priority fallback signal for the scorer, tolerating the
//! whitespace variation between queries like `2bhk` and text like `2 BHK`.

/// Returns whether `query` loosely appears in `text`.
///
/// Both inputs are lowercased. The primary check strips all whitespace from
/// both sides and tests substring containment. If that fails, a handful of
/// literal query variants (unmodified, whitespace removed, collapsed to
/// single spaces, hyphenated, underscored) are tested against both the raw
/// and the stripped text.
///
/// Empty or whitespace-only inputs never match.
pub fn fuzzy_match(query: &str, text: &str) -> bool {
    if query.is_empty() || text.is_empty() {
        return false;
    }

    let query_lower = query.to_lowercase();
    let text_lower = text.to_lowercase();
    let stripped_query: String = query_lower.split_whitespace().collect();
    let stripped_text: String = text_lower.split_whitespace().collect();

    if stripped_query.is_empty() {
        return false;
    }
    if stripped_text.contains(&stripped_query) {
        return true;
    }

    let words: Vec<&str> = query_lower.split_whitespace().collect();
    let variants = [
        query_lower.clone(),
        stripped_query,
        words.join(" "),
        words.join("-"),
        words.join("_"),
    ];

    variants
        .iter()
        .any(|variant| text_lower.contains(variant) || stripped_text.contains(variant))
}
