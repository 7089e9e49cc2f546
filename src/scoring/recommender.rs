//! Career match computation and ranking

use crate::catalog::careers::{CareerCatalogEntry, CAREER_CATALOG};
use crate::config::ScoringConfig;
use crate::scoring::aptitude::AptitudeProfile;
use crate::scoring::interests::InterestProfile;
use crate::scoring::skills::SkillsProfile;
use serde::Serialize;

/// Lower and upper bound for the computed match percentage.
pub const MATCH_FLOOR: f64 = 60.0;
pub const MATCH_CEILING: f64 = 95.0;

/// Neutral stand-ins for skipped assessment steps.
pub const DEFAULT_APTITUDE_OVERALL: f64 = 70.0;
pub const DEFAULT_SKILL_LEVEL: f64 = 5.0;

/// One ranked career: the catalog entry plus its computed match percentage.
/// A transient view, recomputed from the profiles on every request.
#[derive(Debug, Clone, Serialize)]
pub struct RankedRecommendation {
    pub career: &'static CareerCatalogEntry,
    pub computed_match: u8,
}

/// Ranks the career catalog against the three assessment profiles.
///
/// The match formula reads only the profiles, never the career's own
/// requirements or its static `base_match`, so every catalog entry receives
/// the same score for a given profile set and the ranking falls back to
/// catalog declaration order. Mixing career fields into the formula would
/// change observable ranking behavior.
pub struct CareerMatcher {
    weights: ScoringConfig,
}

impl CareerMatcher {
    pub fn new(weights: ScoringConfig) -> Self {
        Self { weights }
    }

    /// Compute the match percentage for one profile set. Skipped steps fall
    /// back to neutral defaults (70 aptitude, no top interests, skill level
    /// 5), keeping the function total over partial input.
    pub fn compute_match(
        &self,
        aptitude: Option<&AptitudeProfile>,
        interests: Option<&InterestProfile>,
        skills: Option<&SkillsProfile>,
    ) -> u8 {
        let aptitude_overall = aptitude
            .map(|a| f64::from(a.overall))
            .unwrap_or(DEFAULT_APTITUDE_OVERALL);
        let interest_count = interests.map(|i| i.top_interests.len()).unwrap_or(0) as f64;
        let skill_level = skills
            .map(|s| s.overall_skill_level)
            .unwrap_or(DEFAULT_SKILL_LEVEL);

        let raw = aptitude_overall * self.weights.aptitude_weight
            + interest_count * self.weights.interest_points
            + skill_level * self.weights.skill_weight;

        raw.clamp(MATCH_FLOOR, MATCH_CEILING).round() as u8
    }

    /// Rank the full catalog, descending by computed match. The sort is
    /// stable, so equal scores keep catalog declaration order.
    pub fn rank(
        &self,
        aptitude: Option<&AptitudeProfile>,
        interests: Option<&InterestProfile>,
        skills: Option<&SkillsProfile>,
    ) -> Vec<RankedRecommendation> {
        let computed_match = self.compute_match(aptitude, interests, skills);

        let mut ranked: Vec<RankedRecommendation> = CAREER_CATALOG
            .iter()
            .map(|career| RankedRecommendation { career, computed_match })
            .collect();
        ranked.sort_by(|a, b| b.computed_match.cmp(&a.computed_match));
        ranked
    }
}

impl Default for CareerMatcher {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::skills;
    use std::collections::BTreeMap;

    fn aptitude(overall: u8) -> AptitudeProfile {
        AptitudeProfile { logical: 0, numerical: 0, verbal: 0, spatial: 0, overall }
    }

    fn interests(top: &[&str]) -> InterestProfile {
        InterestProfile {
            raw_interest_text: String::new(),
            raw_goal_text: String::new(),
            extracted_categories: Vec::new(),
            category_ratings: BTreeMap::new(),
            work_preference_ratings: BTreeMap::new(),
            top_interests: top.iter().map(|s| s.to_string()).collect(),
            top_work_preferences: Vec::new(),
        }
    }

    fn skills_with_level(level: f64) -> SkillsProfile {
        let mut profile = skills::profile(&[], "", "", "");
        profile.overall_skill_level = level;
        profile
    }

    #[test]
    fn test_high_profile_clamps_to_ceiling() {
        // 100 * 0.3 + 5 * 10 + 10 * 5 = 130, clamped to 95.
        let matcher = CareerMatcher::default();
        let score = matcher.compute_match(
            Some(&aptitude(100)),
            Some(&interests(&["a", "b", "c", "d", "e"])),
            Some(&skills_with_level(10.0)),
        );
        assert_eq!(score, 95);
    }

    #[test]
    fn test_zero_profile_clamps_to_floor() {
        // Present-but-zero profiles score 0 raw, clamped to 60.
        let matcher = CareerMatcher::default();
        let score = matcher.compute_match(
            Some(&aptitude(0)),
            Some(&interests(&[])),
            Some(&skills_with_level(0.0)),
        );
        assert_eq!(score, 60);
    }

    #[test]
    fn test_absent_profiles_use_neutral_defaults() {
        // 70 * 0.3 + 0 * 10 + 5 * 5 = 46, clamped to 60.
        let matcher = CareerMatcher::default();
        assert_eq!(matcher.compute_match(None, None, None), 60);
    }

    #[test]
    fn test_mid_profile_lands_inside_band() {
        // 80 * 0.3 + 3 * 10 + 6 * 5 = 84.
        let matcher = CareerMatcher::default();
        let score = matcher.compute_match(
            Some(&aptitude(80)),
            Some(&interests(&["technology", "science", "business"])),
            Some(&skills_with_level(6.0)),
        );
        assert_eq!(score, 84);
    }

    #[test]
    fn test_every_career_receives_identical_match() {
        let matcher = CareerMatcher::default();
        let ranked = matcher.rank(Some(&aptitude(80)), Some(&interests(&["technology"])), None);
        assert_eq!(ranked.len(), CAREER_CATALOG.len());
        let first = ranked[0].computed_match;
        assert!(ranked.iter().all(|r| r.computed_match == first));
    }

    #[test]
    fn test_ranking_order_equals_catalog_declaration_order() {
        // With identical scores everywhere, the stable sort returns the
        // catalog in declaration order.
        let matcher = CareerMatcher::default();
        let ranked = matcher.rank(None, None, None);
        let ids: Vec<&str> = ranked.iter().map(|r| r.career.id).collect();
        let catalog_ids: Vec<&str> = CAREER_CATALOG.iter().map(|c| c.id).collect();
        assert_eq!(ids, catalog_ids);
    }

    #[test]
    fn test_base_match_is_not_an_input() {
        // Catalog base_match values differ, yet computed matches are equal.
        let matcher = CareerMatcher::default();
        let ranked = matcher.rank(None, None, None);
        assert!(ranked.iter().any(|r| r.career.base_match != ranked[0].career.base_match));
        assert!(ranked.iter().all(|r| r.computed_match == ranked[0].computed_match));
    }
}
