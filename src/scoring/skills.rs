//! Skills categorization, weighting, and summary statistics

use crate::catalog::skills::{ExperienceTier, SkillCategory};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One user-reported skill: a free-form name, a 1-10 proficiency level, and
/// an experience tier. Names are case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillEntry {
    pub name: String,
    pub level: u8,
    pub experience: ExperienceTier,
}

/// Level and experience for a skill already keyed by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRating {
    pub level: u8,
    pub experience: ExperienceTier,
}

/// A skill with its experience-weighted score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedSkill {
    pub skill: String,
    pub weighted_score: u32,
}

/// Derived skills summary for one assessment run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillsProfile {
    pub skills_by_category: BTreeMap<SkillCategory, BTreeMap<String, SkillRating>>,
    pub skill_vector: Vec<WeightedSkill>,
    /// Up to five names, highest level first; ties keep insertion order.
    pub top_skills: Vec<String>,
    /// Mean raw level across all skills; 0 when no skills were entered.
    pub overall_skill_level: f64,
    pub achievements: String,
    pub projects: String,
    pub certifications: String,
}

const TOP_SKILL_COUNT: usize = 5;

/// Collapse duplicate names: the last write wins but the skill keeps its
/// first insertion position, matching how the wizard's selection map behaves.
pub fn dedup(entries: &[SkillEntry]) -> Vec<SkillEntry> {
    let mut out: Vec<SkillEntry> = Vec::new();
    for entry in entries {
        match out.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry.clone(),
            None => out.push(entry.clone()),
        }
    }
    out
}

/// Bucket skills by catalog category. Categories are scanned in fixed order
/// and the first list containing the name wins; unknown names land in
/// `Custom`. ("English" sits in both the academic and language lists, so it
/// buckets as academic.)
pub fn categorize(entries: &[SkillEntry]) -> BTreeMap<SkillCategory, BTreeMap<String, SkillRating>> {
    let mut by_category: BTreeMap<SkillCategory, BTreeMap<String, SkillRating>> = BTreeMap::new();

    for entry in entries {
        let category = SkillCategory::CATALOG_ORDER
            .into_iter()
            .find(|c| c.catalog_skills().contains(&entry.name.as_str()))
            .unwrap_or(SkillCategory::Custom);

        by_category.entry(category).or_default().insert(
            entry.name.clone(),
            SkillRating { level: entry.level, experience: entry.experience },
        );
    }

    by_category
}

/// Weighted score per skill: raw level times the experience multiplier
/// (beginner 1x through expert 4x), in entry order.
pub fn build_vector(entries: &[SkillEntry]) -> Vec<WeightedSkill> {
    entries
        .iter()
        .map(|entry| WeightedSkill {
            skill: entry.name.clone(),
            weighted_score: u32::from(entry.level) * entry.experience.multiplier(),
        })
        .collect()
}

/// Top skills by raw level plus the mean level. The mean is 0 when there are
/// no skills; never a division error.
pub fn summarize(entries: &[SkillEntry]) -> (Vec<String>, f64) {
    let mut ranked: Vec<&SkillEntry> = entries.iter().collect();
    ranked.sort_by(|a, b| b.level.cmp(&a.level));
    let top_skills = ranked
        .into_iter()
        .take(TOP_SKILL_COUNT)
        .map(|e| e.name.clone())
        .collect();

    let overall = if entries.is_empty() {
        0.0
    } else {
        entries.iter().map(|e| f64::from(e.level)).sum::<f64>() / entries.len() as f64
    };

    (top_skills, overall)
}

/// Build the full skills profile from the raw entry list and the free-text
/// experience fields. Duplicates are collapsed once, up front.
pub fn profile(
    entries: &[SkillEntry],
    achievements: &str,
    projects: &str,
    certifications: &str,
) -> SkillsProfile {
    let entries = dedup(entries);
    let (top_skills, overall_skill_level) = summarize(&entries);

    SkillsProfile {
        skills_by_category: categorize(&entries),
        skill_vector: build_vector(&entries),
        top_skills,
        overall_skill_level,
        achievements: achievements.to_string(),
        projects: projects.to_string(),
        certifications: certifications.to_string(),
    }
}
