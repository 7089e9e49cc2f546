//! Recorded assessment responses
//!
//! The wizard frontend is out of scope here; its place is taken by a JSON
//! responses file holding the raw per-step inputs. Any step the user skipped
//! is simply absent and the pipeline substitutes its neutral defaults.

use crate::error::{CareerCompassError, Result};
use crate::scoring::skills::SkillEntry;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

/// The full recorded input of one assessment run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessmentResponses {
    #[serde(default)]
    pub aptitude: Option<AptitudeResponses>,
    #[serde(default)]
    pub interests: Option<InterestResponses>,
    #[serde(default)]
    pub skills: Option<SkillsResponses>,
}

/// Selected option index per question id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AptitudeResponses {
    #[serde(default)]
    pub answers: HashMap<u32, usize>,
}

/// Free text plus the 1-10 slider ratings from the interests step.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InterestResponses {
    #[serde(default)]
    pub interest_text: String,
    #[serde(default)]
    pub goal_text: String,
    #[serde(default)]
    pub category_ratings: BTreeMap<String, u8>,
    #[serde(default)]
    pub work_preference_ratings: BTreeMap<String, u8>,
}

/// Skill entries plus the free-text experience fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillsResponses {
    #[serde(default)]
    pub skills: Vec<SkillEntry>,
    #[serde(default)]
    pub achievements: String,
    #[serde(default)]
    pub projects: String,
    #[serde(default)]
    pub certifications: String,
}

impl AssessmentResponses {
    /// Load a responses file. Missing sections are fine; a file that is not
    /// valid JSON for this shape is an input error.
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading assessment responses from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        let responses: AssessmentResponses = serde_json::from_str(&content).map_err(|e| {
            CareerCompassError::InvalidInput(format!(
                "Failed to parse responses file {}: {}",
                path.display(),
                e
            ))
        })?;

        info!(
            "Loaded responses: aptitude {}, interests {}, skills {}",
            step_state(responses.aptitude.is_some()),
            step_state(responses.interests.is_some()),
            step_state(responses.skills.is_some()),
        );
        Ok(responses)
    }
}

fn step_state(present: bool) -> &'static str {
    if present {
        "completed"
    } else {
        "skipped"
    }
}
