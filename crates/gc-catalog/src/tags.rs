//! Keyword tag synthesis.
//!
//! Tags are an auxiliary matching surface for the scorer: a bag of lowercase
//! tokens derived from record names and descriptions. No deduplication, no
//! stemming; the only filter is dropping description tokens of two characters
//! or fewer.

/// Builds the tag bag for a vendor-style result.
///
/// The output is, in order: whitespace tokens of the vendor name, whitespace
/// tokens of the item name, description tokens longer than two characters,
/// then the full vendor name and full item name as single tags. All
/// lowercase. An empty description contributes no tokens but the two
/// full-name tags are always present.
pub fn synthesize_tags(vendor_name: &str, item_name: &str, description: &str) -> Vec<String> {
    let vendor = vendor_name.to_lowercase();
    let item = item_name.to_lowercase();
    let desc = description.to_lowercase();

    let mut tags: Vec<String> = Vec::new();
    tags.extend(vendor.split_whitespace().map(String::from));
    tags.extend(item.split_whitespace().map(String::from));
    tags.extend(
        desc.split_whitespace()
            .filter(|token| token.chars().count() > 2)
            .map(String::from),
    );
    tags.push(vendor);
    tags.push(item);
    tags
}

/// Builds the tag bag for an apartment result.
///
/// In addition to the usual name/description tokens this emits the spaced and
/// compact BHK variants (`"2 bhk"`, `"2bhk"`) plus the generic rental intent
/// tags, so queries like `2bhk` match without relying on the fuzzy fallback.
pub fn apartment_tags(
    apartment_type: &str,
    building_name: &str,
    location: &str,
    description: &str,
) -> Vec<String> {
    let ty = apartment_type.to_lowercase();
    let compact: String = ty.split_whitespace().collect();

    let mut tags = vec![ty, compact];
    tags.extend(["apartment", "flat", "rent"].map(String::from));

    let building = building_name.to_lowercase();
    tags.extend(building.split_whitespace().map(String::from));
    let location = location.to_lowercase();
    tags.extend(location.split_whitespace().map(String::from));
    let desc = description.to_lowercase();
    tags.extend(
        desc.split_whitespace()
            .filter(|token| token.chars().count() > 2)
            .map(String::from),
    );
    if !building.is_empty() {
        tags.push(building);
    }
    tags
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Containment check that ignores order and duplicates.
    fn assert_contains_all(tags: &[String], expected: &[&str]) {
        for tag in expected {
            assert!(
                tags.iter().any(|t| t == tag),
                "expected tag {tag:?} in {tags:?}"
            );
        }
    }

    #[test]
    fn synthesizes_name_and_description_tokens() {
        let tags = synthesize_tags("Raj Plumbing", "Tap Repair", "Fixes leaking taps fast");
        assert_contains_all(
            &tags,
            &[
                "raj",
                "plumbing",
                "tap",
                "repair",
                "fixes",
                "leaking",
                "taps",
                "fast",
                "raj plumbing",
                "tap repair",
            ],
        );
    }

    #[test]
    fn drops_short_description_tokens_only() {
        let tags = synthesize_tags("AC Care", "Gas Refill", "AC is on the of up gas");
        // Two-letter-or-shorter description tokens are dropped.
        assert!(!tags.iter().any(|t| t == "is"));
        assert!(!tags.iter().any(|t| t == "on"));
        assert!(!tags.iter().any(|t| t == "of"));
        assert!(!tags.iter().any(|t| t == "up"));
        // The length filter applies to description tokens, not name tokens.
        assert!(tags.iter().any(|t| t == "ac"));
        assert_contains_all(&tags, &["gas", "ac care", "gas refill"]);
    }

    #[test]
    fn empty_description_still_yields_full_name_tags() {
        let tags = synthesize_tags("Raj Plumbing", "Tap Repair", "");
        assert_contains_all(&tags, &["raj plumbing", "tap repair"]);
    }

    #[test]
    fn duplicates_are_preserved() {
        let tags = synthesize_tags("Milk Milk", "Milk", "");
        let milk_count = tags.iter().filter(|t| *t == "milk").count();
        assert_eq!(milk_count, 3);
    }

    #[test]
    fn apartment_tags_include_bhk_variants() {
        let tags = apartment_tags("2 BHK", "Palm Grove", "Andheri West", "Spacious and sunlit");
        assert_contains_all(
            &tags,
            &[
                "2 bhk",
                "2bhk",
                "apartment",
                "flat",
                "rent",
                "palm",
                "grove",
                "andheri",
                "west",
                "spacious",
                "sunlit",
                "palm grove",
            ],
        );
        // "and" is a description token of length 3, so it survives the filter.
        assert!(tags.iter().any(|t| t == "and"));
    }

    #[test]
    fn apartment_tags_work_for_type_placeholders() {
        let tags = apartment_tags("3 BHK", "", "", "");
        assert_contains_all(&tags, &["3 bhk", "3bhk", "apartment", "flat", "rent"]);
        assert!(!tags.iter().any(String::is_empty));
    }
}
