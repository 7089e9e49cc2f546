//! Interest extraction and profile building

use crate::catalog::interests::{DEFAULT_RATING, INTEREST_CATEGORIES, KEYWORD_TABLE, TOP_COUNT, WORK_PREFERENCES};
use crate::error::{CareerCompassError, Result};
use aho_corasick::AhoCorasick;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};

/// Derived interest summary for one assessment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestProfile {
    pub raw_interest_text: String,
    pub raw_goal_text: String,
    /// Category tags detected in the free text, in keyword-table order.
    pub extracted_categories: Vec<String>,
    pub category_ratings: BTreeMap<String, u8>,
    pub work_preference_ratings: BTreeMap<String, u8>,
    /// Up to three category ids, highest rating first; ties keep catalog
    /// declaration order.
    pub top_interests: Vec<String>,
    pub top_work_preferences: Vec<String>,
}

/// Classifies free text against the fixed keyword table.
///
/// Matching is plain substring containment over the lower-cased concatenation
/// of both text fields: "art" inside "started" tags the arts category, and
/// that false positive is accepted behavior.
pub struct InterestExtractor {
    matcher: AhoCorasick,
    pattern_categories: Vec<&'static str>,
}

impl InterestExtractor {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::new();
        let mut pattern_categories = Vec::new();
        for set in &KEYWORD_TABLE {
            for keyword in set.keywords {
                patterns.push(*keyword);
                pattern_categories.push(set.category);
            }
        }

        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(&patterns)
            .map_err(|e| {
                CareerCompassError::Configuration(format!("Failed to build keyword matcher: {}", e))
            })?;

        Ok(Self { matcher, pattern_categories })
    }

    /// Tag categories whose keywords occur anywhere in the combined text.
    /// Empty text yields an empty set.
    pub fn extract_categories(&self, interest_text: &str, goal_text: &str) -> Vec<String> {
        let text = format!("{} {}", interest_text, goal_text).to_lowercase();

        let mut hit: HashSet<&str> = HashSet::new();
        for mat in self.matcher.find_iter(&text) {
            hit.insert(self.pattern_categories[mat.pattern().as_usize()]);
        }

        KEYWORD_TABLE
            .iter()
            .filter(|set| hit.contains(set.category))
            .map(|set| set.category.to_string())
            .collect()
    }

    /// Assemble the interest profile from the extracted tags and the slider
    /// ratings. Anything the user did not rate defaults to the midpoint.
    pub fn build_profile(
        &self,
        interest_text: &str,
        goal_text: &str,
        extracted_categories: Vec<String>,
        category_ratings: &BTreeMap<String, u8>,
        work_preference_ratings: &BTreeMap<String, u8>,
    ) -> InterestProfile {
        let top_interests = top_rated(
            INTEREST_CATEGORIES.iter().map(|c| c.id),
            category_ratings,
        );
        let top_work_preferences = top_rated(
            WORK_PREFERENCES.iter().map(|p| p.id),
            work_preference_ratings,
        );

        InterestProfile {
            raw_interest_text: interest_text.to_string(),
            raw_goal_text: goal_text.to_string(),
            extracted_categories,
            category_ratings: category_ratings.clone(),
            work_preference_ratings: work_preference_ratings.clone(),
            top_interests,
            top_work_preferences,
        }
    }
}

/// Top-N ids by rating descending. The stable sort keeps declaration order
/// for equal ratings, so the first-listed entry wins ties.
fn top_rated<'a>(
    declared: impl Iterator<Item = &'a str>,
    ratings: &BTreeMap<String, u8>,
) -> Vec<String> {
    let mut rated: Vec<(&str, u8)> = declared
        .map(|id| (id, ratings.get(id).copied().unwrap_or(DEFAULT_RATING)))
        .collect();
    rated.sort_by(|a, b| b.1.cmp(&a.1));
    rated.into_iter().take(TOP_COUNT).map(|(id, _)| id.to_string()).collect()
}
