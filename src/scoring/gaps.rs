//! Skill gap lookup

use crate::catalog::careers::GAP_TABLE;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Missing skills and remediation steps for one career. Empty for careers
/// the gap table does not cover.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GapReport {
    pub career_id: String,
    pub missing_skills: Vec<String>,
    pub recommendations: Vec<String>,
}

impl GapReport {
    pub fn is_empty(&self) -> bool {
        self.missing_skills.is_empty() && self.recommendations.is_empty()
    }
}

/// Static lookup from career id into the gap table.
pub struct GapAnalyzer;

impl GapAnalyzer {
    /// Return the table entry for a career verbatim. The user's current
    /// skill set is part of the call contract but the table is not filtered
    /// against it. An unknown career id yields an empty report, never an
    /// error; callers treat "no data" and "nothing missing" identically.
    pub fn gaps(career_id: &str, user_skill_names: &HashSet<String>) -> GapReport {
        debug!(
            "skill gap lookup for '{}' ({} user skills on record)",
            career_id,
            user_skill_names.len()
        );

        match GAP_TABLE.iter().find(|entry| entry.career_id == career_id) {
            Some(entry) => GapReport {
                career_id: career_id.to_string(),
                missing_skills: entry.missing_skills.iter().map(|s| s.to_string()).collect(),
                recommendations: entry.recommendations.iter().map(|s| s.to_string()).collect(),
            },
            None => GapReport {
                career_id: career_id.to_string(),
                missing_skills: Vec::new(),
                recommendations: Vec::new(),
            },
        }
    }
}
