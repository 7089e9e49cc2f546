//! Skill category lists and experience tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Skill buckets. A skill lands in the first catalog category whose list
/// contains its name; anything unknown goes to `Custom`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Technical,
    Soft,
    Academic,
    Languages,
    Custom,
}

impl SkillCategory {
    /// Scan order for categorization. `Custom` is the fallback and is not
    /// scanned.
    pub const CATALOG_ORDER: [SkillCategory; 4] = [
        SkillCategory::Technical,
        SkillCategory::Soft,
        SkillCategory::Academic,
        SkillCategory::Languages,
    ];

    pub fn catalog_skills(&self) -> &'static [&'static str] {
        match self {
            SkillCategory::Technical => TECHNICAL_SKILLS,
            SkillCategory::Soft => SOFT_SKILLS,
            SkillCategory::Academic => ACADEMIC_SKILLS,
            SkillCategory::Languages => LANGUAGE_SKILLS,
            SkillCategory::Custom => &[],
        }
    }
}

impl fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SkillCategory::Technical => "technical",
            SkillCategory::Soft => "soft",
            SkillCategory::Academic => "academic",
            SkillCategory::Languages => "languages",
            SkillCategory::Custom => "custom",
        };
        write!(f, "{}", name)
    }
}

/// Experience buckets, ordered from least to most experienced. The position
/// in this ordering drives the skill weighting multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceTier {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl ExperienceTier {
    pub const ALL: [ExperienceTier; 4] = [
        ExperienceTier::Beginner,
        ExperienceTier::Intermediate,
        ExperienceTier::Advanced,
        ExperienceTier::Expert,
    ];

    /// Weighting multiplier: 0-based tier index plus one, so beginner
    /// multiplies by 1 and expert by 4.
    pub fn multiplier(&self) -> u32 {
        *self as u32 + 1
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExperienceTier::Beginner => "Beginner (0-1 years)",
            ExperienceTier::Intermediate => "Intermediate (1-3 years)",
            ExperienceTier::Advanced => "Advanced (3-5 years)",
            ExperienceTier::Expert => "Expert (5+ years)",
        }
    }
}

pub const TECHNICAL_SKILLS: &[&str] = &[
    "Programming",
    "Data Analysis",
    "Web Development",
    "Mobile Development",
    "Machine Learning",
    "Database Management",
    "Cybersecurity",
    "Cloud Computing",
    "UI/UX Design",
    "Digital Marketing",
    "CAD/Design Software",
    "Research Methods",
];

pub const SOFT_SKILLS: &[&str] = &[
    "Communication",
    "Leadership",
    "Problem Solving",
    "Critical Thinking",
    "Teamwork",
    "Time Management",
    "Adaptability",
    "Creativity",
    "Public Speaking",
    "Project Management",
    "Negotiation",
    "Emotional Intelligence",
];

pub const ACADEMIC_SKILLS: &[&str] = &[
    "Mathematics",
    "Physics",
    "Chemistry",
    "Biology",
    "English",
    "Hindi",
    "History",
    "Geography",
    "Economics",
    "Political Science",
    "Psychology",
    "Philosophy",
];

pub const LANGUAGE_SKILLS: &[&str] = &[
    "English",
    "Hindi",
    "Tamil",
    "Telugu",
    "Bengali",
    "Marathi",
    "Gujarati",
    "Kannada",
    "Malayalam",
    "Punjabi",
    "French",
    "German",
    "Spanish",
    "Mandarin",
];
