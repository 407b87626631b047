//! Additive relevance scoring.
//!
//! Scores a (query, result) pair with an additive point system. Checks are
//! case-insensitive, applied independently, and stack: an apartment result
//! can earn both the BHK boost and the plain title-substring points. A score
//! of zero means the result is excluded by the ranker.

use std::sync::OnceLock;

use gc_catalog::{ResultKind, SearchResult};
use regex::Regex;
use serde::Serialize;

use crate::fuzzy::fuzzy_match;

/// One scoring rule that fired, with the points it contributed.
#[derive(Debug, Clone, Serialize)]
pub struct Signal {
    /// Short name of the rule.
    pub rule: &'static str,
    /// Points contributed (already multiplied for per-hit rules).
    pub points: u32,
}

/// The full outcome of scoring one result against one query.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScoreBreakdown {
    /// Sum of all fired rules.
    pub total: u32,
    /// The rules that fired, in evaluation order.
    pub signals: Vec<Signal>,
}

impl ScoreBreakdown {
    /// Records a fired rule.
    fn add(&mut self, rule: &'static str, points: u32) {
        self.total += points;
        self.signals.push(Signal { rule, points });
    }
}

/// Matches an "N BHK" intent in a query, with or without the space.
fn bhk_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d+)\s*bhk").expect("static pattern compiles"))
}

/// Computes the relevance score for a (query, result) pair.
///
/// The query must be non-empty; the pipeline guards this before scoring.
pub fn score(query: &str, result: &SearchResult) -> u32 {
    score_with_breakdown(query, result).total
}

/// Computes the relevance score along with the rules that produced it.
///
/// Point table, applied independently and summed:
///
/// | rule | points |
/// |---|---|
/// | apartment kind, "N bhk" query, apartment type has "N BHK" | 200 |
/// | apartment kind, "N bhk" query, a tag has "Nbhk"/"N bhk" | 150 |
/// | apartment kind, "apartment"/"flat" in query and title | 120 each |
/// | apartment kind, "apartment"/"flat" in query and a tag | 100 each |
/// | title contains query | 100 |
/// | apartment type contains query | 90 |
/// | category contains query | 80 |
/// | tag contains query | 70 per tag |
/// | query word appears within a title word | 60 per query word |
/// | description contains query | 50 |
/// | vendor name contains query | 40 |
/// | location contains query | 30 |
/// | building name contains query | 20 |
/// | fuzzy match on title, description, or category | 10 |
pub fn score_with_breakdown(query: &str, result: &SearchResult) -> ScoreBreakdown {
    let query = query.to_lowercase();
    let title = result.title.to_lowercase();
    let category = result.category.to_lowercase();
    let description = result.description.to_lowercase();
    let apartment_type = result.apartment_type.as_deref().map(str::to_lowercase);
    let tags: Vec<String> = result.tags.iter().map(|t| t.to_lowercase()).collect();

    let mut breakdown = ScoreBreakdown::default();

    if result.kind == ResultKind::Apartment {
        score_bhk(&query, apartment_type.as_deref(), &tags, &mut breakdown);
        score_rental_keyword(&query, "apartment", &title, &tags, &mut breakdown);
        score_rental_keyword(&query, "flat", &title, &tags, &mut breakdown);
    }

    if title.contains(&query) {
        breakdown.add("title", 100);
    }
    if let Some(apartment_type) = &apartment_type
        && apartment_type.contains(&query)
    {
        breakdown.add("apartment type", 90);
    }
    if category.contains(&query) {
        breakdown.add("category", 80);
    }

    let tag_hits = tags.iter().filter(|tag| tag.contains(&query)).count() as u32;
    if tag_hits > 0 {
        breakdown.add("tags", 70 * tag_hits);
    }

    let title_words: Vec<&str> = title.split_whitespace().collect();
    let word_hits = query
        .split_whitespace()
        .filter(|word| title_words.iter().any(|title_word| title_word.contains(word)))
        .count() as u32;
    if word_hits > 0 {
        breakdown.add("title words", 60 * word_hits);
    }

    if !description.is_empty() && description.contains(&query) {
        breakdown.add("description", 50);
    }
    if contains_query(result.vendor_name.as_deref(), &query) {
        breakdown.add("vendor name", 40);
    }
    if contains_query(result.location.as_deref(), &query) {
        breakdown.add("location", 30);
    }
    if contains_query(result.building_name.as_deref(), &query) {
        breakdown.add("building name", 20);
    }

    if fuzzy_match(&query, &result.title)
        || fuzzy_match(&query, &result.description)
        || fuzzy_match(&query, &result.category)
    {
        breakdown.add("fuzzy", 10);
    }

    breakdown
}

/// Case-insensitive contains over an optional field.
fn contains_query(field: Option<&str>, query: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(query))
}

/// BHK boosts: +200 for an apartment-type match, +150 for a tag match.
fn score_bhk(
    query: &str,
    apartment_type: Option<&str>,
    tags: &[String],
    breakdown: &mut ScoreBreakdown,
) {
    let Some(captures) = bhk_pattern().captures(query) else {
        return;
    };
    let bedrooms = &captures[1];
    let spaced = format!("{bedrooms} bhk");
    let compact = format!("{bedrooms}bhk");

    if apartment_type.is_some_and(|ty| ty.contains(&spaced)) {
        breakdown.add("bhk apartment type", 200);
    }
    if tags
        .iter()
        .any(|tag| tag.contains(&compact) || tag.contains(&spaced))
    {
        breakdown.add("bhk tags", 150);
    }
}

/// Rental intent keywords ("apartment", "flat"): +120 via title, +100 via tags.
fn score_rental_keyword(
    query: &str,
    keyword: &'static str,
    title: &str,
    tags: &[String],
    breakdown: &mut ScoreBreakdown,
) {
    if !query.contains(keyword) {
        return;
    }
    if title.contains(keyword) {
        breakdown.add(keyword, 120);
    }
    if tags.iter().any(|tag| tag.contains(keyword)) {
        breakdown.add(keyword, 100);
    }
}
