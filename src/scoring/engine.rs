//! Assessment engine coordinating the scoring components

use crate::catalog::aptitude::ANSWER_KEY;
use crate::config::Config;
use crate::error::Result;
use crate::input::AssessmentResponses;
use crate::scoring::aptitude::{self, AptitudeProfile};
use crate::scoring::gaps::{GapAnalyzer, GapReport};
use crate::scoring::interests::{InterestExtractor, InterestProfile};
use crate::scoring::recommender::{CareerMatcher, RankedRecommendation};
use crate::scoring::skills::{self, SkillsProfile};
use log::info;
use serde::Serialize;
use std::collections::HashSet;
use std::time::Instant;

/// Gap reports are produced for this many top-ranked careers.
const GAP_REPORT_COUNT: usize = 3;

/// Everything one assessment run derives from the raw responses.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentAnalysis {
    pub aptitude: Option<AptitudeProfile>,
    pub interests: Option<InterestProfile>,
    pub skills: Option<SkillsProfile>,
    pub recommendations: Vec<RankedRecommendation>,
    pub gap_reports: Vec<GapReport>,
    pub processing_time_ms: u64,
    pub responses_file: String,
}

/// Coordinates the three profile builders, the career matcher, and the gap
/// lookup. Holds no mutable state; each run takes a snapshot of the
/// responses and returns a fresh analysis.
pub struct AssessmentEngine {
    extractor: InterestExtractor,
    matcher: CareerMatcher,
}

impl AssessmentEngine {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            extractor: InterestExtractor::new()?,
            matcher: CareerMatcher::new(config.scoring.clone()),
        })
    }

    pub fn run(&self, responses: &AssessmentResponses, responses_file: &str) -> AssessmentAnalysis {
        let start_time = Instant::now();
        info!("Starting assessment analysis");

        let aptitude = responses
            .aptitude
            .as_ref()
            .map(|step| aptitude::score(&ANSWER_KEY, &step.answers));

        let interests = responses.interests.as_ref().map(|step| {
            let extracted = self
                .extractor
                .extract_categories(&step.interest_text, &step.goal_text);
            self.extractor.build_profile(
                &step.interest_text,
                &step.goal_text,
                extracted,
                &step.category_ratings,
                &step.work_preference_ratings,
            )
        });

        let skills = responses.skills.as_ref().map(|step| {
            skills::profile(
                &step.skills,
                &step.achievements,
                &step.projects,
                &step.certifications,
            )
        });

        let recommendations = self
            .matcher
            .rank(aptitude.as_ref(), interests.as_ref(), skills.as_ref());

        let user_skill_names: HashSet<String> = skills
            .as_ref()
            .map(|s| s.skill_vector.iter().map(|w| w.skill.clone()).collect())
            .unwrap_or_default();
        let gap_reports: Vec<GapReport> = recommendations
            .iter()
            .take(GAP_REPORT_COUNT)
            .map(|rec| GapAnalyzer::gaps(rec.career.id, &user_skill_names))
            .collect();

        let processing_time_ms = start_time.elapsed().as_millis() as u64;
        info!(
            "Assessment analysis completed in {}ms ({} recommendations)",
            processing_time_ms,
            recommendations.len()
        );

        AssessmentAnalysis {
            aptitude,
            interests,
            skills,
            recommendations,
            gap_reports,
            processing_time_ms,
            responses_file: responses_file.to_string(),
        }
    }
}
