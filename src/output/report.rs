//! Assessment report structure assembled from the analysis results

use crate::catalog::aptitude::ANSWER_KEY;
use crate::catalog::careers::CAREER_CATALOG;
use crate::scoring::aptitude::AptitudeProfile;
use crate::scoring::engine::AssessmentAnalysis;
use crate::scoring::gaps::GapReport;
use crate::scoring::interests::InterestProfile;
use crate::scoring::recommender::RankedRecommendation;
use crate::scoring::skills::SkillsProfile;
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Headline values shown before the detailed sections. The fallbacks kick in
/// when a step was skipped: 75% aptitude, 80% interest alignment, skill
/// level 6.5. Display values only; the match formula uses its own defaults.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentSummary {
    pub aptitude_overall: u8,
    pub interest_match_percent: u8,
    pub skill_level: f64,
    pub top_interests: Vec<String>,
    pub top_work_preferences: Vec<String>,
    pub top_skills: Vec<String>,
    pub verdict: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub generated_at: DateTime<Utc>,
    pub tool_version: String,
    pub responses_file: String,
    pub processing_time_ms: u64,
    pub question_count: usize,
    pub career_count: usize,
}

/// The complete result of one assessment run, ready for any formatter.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentReport {
    pub summary: AssessmentSummary,
    pub aptitude: Option<AptitudeProfile>,
    pub interests: Option<InterestProfile>,
    pub skills: Option<SkillsProfile>,
    pub recommendations: Vec<RankedRecommendation>,
    pub gap_reports: Vec<GapReport>,
    pub metadata: ReportMetadata,
}

const FALLBACK_APTITUDE_OVERALL: u8 = 75;
const FALLBACK_INTEREST_MATCH: u8 = 80;
const FALLBACK_SKILL_LEVEL: f64 = 6.5;

impl AssessmentReport {
    pub fn from_analysis(analysis: AssessmentAnalysis) -> Self {
        let summary = Self::create_summary(&analysis);
        let metadata = ReportMetadata {
            generated_at: Utc::now(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            responses_file: analysis.responses_file.clone(),
            processing_time_ms: analysis.processing_time_ms,
            question_count: ANSWER_KEY.len(),
            career_count: CAREER_CATALOG.len(),
        };

        Self {
            summary,
            aptitude: analysis.aptitude,
            interests: analysis.interests,
            skills: analysis.skills,
            recommendations: analysis.recommendations,
            gap_reports: analysis.gap_reports,
            metadata,
        }
    }

    fn create_summary(analysis: &AssessmentAnalysis) -> AssessmentSummary {
        let aptitude_overall = analysis
            .aptitude
            .as_ref()
            .map(|a| a.overall)
            .unwrap_or(FALLBACK_APTITUDE_OVERALL);

        let interest_match_percent = analysis
            .interests
            .as_ref()
            .map(|i| i.top_interests.len() as u8 * 20)
            .unwrap_or(FALLBACK_INTEREST_MATCH);

        let skill_level = analysis
            .skills
            .as_ref()
            .map(|s| s.overall_skill_level)
            .unwrap_or(FALLBACK_SKILL_LEVEL);

        let top_match = analysis
            .recommendations
            .first()
            .map(|r| r.computed_match)
            .unwrap_or(0);

        AssessmentSummary {
            aptitude_overall,
            interest_match_percent,
            skill_level,
            top_interests: analysis
                .interests
                .as_ref()
                .map(|i| i.top_interests.clone())
                .unwrap_or_default(),
            top_work_preferences: analysis
                .interests
                .as_ref()
                .map(|i| i.top_work_preferences.clone())
                .unwrap_or_default(),
            top_skills: analysis
                .skills
                .as_ref()
                .map(|s| s.top_skills.clone())
                .unwrap_or_default(),
            verdict: Self::verdict(top_match),
        }
    }

    fn verdict(top_match: u8) -> String {
        match top_match {
            90..=100 => "Excellent match - your profile strongly supports the top recommendation".to_string(),
            80..=89 => "Very good match - minor skill gaps to close".to_string(),
            70..=79 => "Good match - some targeted development recommended".to_string(),
            60..=69 => "Fair match - complete more assessment steps for a sharper picture".to_string(),
            _ => "Insufficient data - run the assessment to get a ranked recommendation".to_string(),
        }
    }
}

/// Star count for a match percentage: one star per 20 points, capped at 5.
pub fn star_count(computed_match: u8) -> usize {
    usize::from(computed_match / 20).min(5)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::AssessmentResponses;
    use crate::scoring::engine::AssessmentEngine;

    fn empty_report() -> AssessmentReport {
        let engine = AssessmentEngine::new(&Config::default()).unwrap();
        let analysis = engine.run(&AssessmentResponses::default(), "empty.json");
        AssessmentReport::from_analysis(analysis)
    }

    #[test]
    fn test_summary_fallbacks_for_skipped_steps() {
        let report = empty_report();
        assert_eq!(report.summary.aptitude_overall, 75);
        assert_eq!(report.summary.interest_match_percent, 80);
        assert!((report.summary.skill_level - 6.5).abs() < f64::EPSILON);
        assert!(report.summary.top_interests.is_empty());
    }

    #[test]
    fn test_verdict_banding() {
        assert!(AssessmentReport::verdict(95).starts_with("Excellent"));
        assert!(AssessmentReport::verdict(84).starts_with("Very good"));
        assert!(AssessmentReport::verdict(72).starts_with("Good"));
        assert!(AssessmentReport::verdict(60).starts_with("Fair"));
    }

    #[test]
    fn test_star_count() {
        assert_eq!(star_count(60), 3);
        assert_eq!(star_count(79), 3);
        assert_eq!(star_count(80), 4);
        assert_eq!(star_count(95), 4);
    }

    #[test]
    fn test_metadata_counts() {
        let report = empty_report();
        assert_eq!(report.metadata.question_count, 8);
        assert_eq!(report.metadata.career_count, 5);
        assert_eq!(report.metadata.responses_file, "empty.json");
    }

    #[test]
    fn test_report_serializes_to_json() {
        let report = empty_report();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["summary"]["aptitude_overall"], 75);
        assert_eq!(json["recommendations"].as_array().unwrap().len(), 5);
        assert!(json["aptitude"].is_null());
    }
}
