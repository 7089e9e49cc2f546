//! Aptitude answer scoring

use crate::catalog::aptitude::{AnswerKeyEntry, AptitudeCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Per-category correctness percentages plus the overall score, all in
/// [0, 100]. Derived once from a submitted answer set and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AptitudeProfile {
    pub logical: u8,
    pub numerical: u8,
    pub verbal: u8,
    pub spatial: u8,
    pub overall: u8,
}

impl AptitudeProfile {
    pub fn category_percent(&self, category: AptitudeCategory) -> u8 {
        match category {
            AptitudeCategory::Logical => self.logical,
            AptitudeCategory::Numerical => self.numerical,
            AptitudeCategory::Verbal => self.verbal,
            AptitudeCategory::Spatial => self.spatial,
        }
    }
}

/// Score a set of multiple-choice selections against the answer key.
///
/// Unanswered questions and out-of-range selections count as incorrect, never
/// as errors. The overall score is question-weighted (raw correct count over
/// total question count), not the mean of the four category percentages; the
/// two diverge whenever category sizes are unequal.
pub fn score(key: &[AnswerKeyEntry], answers: &HashMap<u32, usize>) -> AptitudeProfile {
    let mut correct: HashMap<AptitudeCategory, u32> = HashMap::new();
    let mut totals: HashMap<AptitudeCategory, u32> = HashMap::new();
    let mut correct_overall = 0u32;

    for question in key {
        *totals.entry(question.category).or_insert(0) += 1;
        if answers.get(&question.id) == Some(&question.correct) {
            *correct.entry(question.category).or_insert(0) += 1;
            correct_overall += 1;
        }
    }

    let percent = |category: AptitudeCategory| -> u8 {
        let total = totals.get(&category).copied().unwrap_or(0);
        if total == 0 {
            return 0;
        }
        let hits = correct.get(&category).copied().unwrap_or(0);
        (100.0 * f64::from(hits) / f64::from(total)).round() as u8
    };

    let overall = if key.is_empty() {
        0
    } else {
        (100.0 * f64::from(correct_overall) / key.len() as f64).round() as u8
    };

    AptitudeProfile {
        logical: percent(AptitudeCategory::Logical),
        numerical: percent(AptitudeCategory::Numerical),
        verbal: percent(AptitudeCategory::Verbal),
        spatial: percent(AptitudeCategory::Spatial),
        overall,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::aptitude::ANSWER_KEY;

    fn entry(id: u32, category: AptitudeCategory, correct: usize) -> AnswerKeyEntry {
        AnswerKeyEntry {
            id,
            category,
            question: "",
            options: ["a", "b", "c", "d"],
            correct,
        }
    }

    #[test]
    fn test_all_correct_scores_hundred() {
        let answers: HashMap<u32, usize> = ANSWER_KEY.iter().map(|q| (q.id, q.correct)).collect();
        let profile = score(&ANSWER_KEY, &answers);
        assert_eq!(
            profile,
            AptitudeProfile { logical: 100, numerical: 100, verbal: 100, spatial: 100, overall: 100 }
        );
    }

    #[test]
    fn test_unanswered_counts_as_incorrect() {
        let profile = score(&ANSWER_KEY, &HashMap::new());
        assert_eq!(profile.overall, 0);
        assert_eq!(profile.logical, 0);
    }

    #[test]
    fn test_out_of_range_selection_scores_incorrect() {
        let mut answers = HashMap::new();
        answers.insert(1, 17usize);
        let profile = score(&ANSWER_KEY, &answers);
        assert_eq!(profile.logical, 0);
        assert_eq!(profile.overall, 0);
    }

    #[test]
    fn test_overall_is_question_weighted_not_category_mean() {
        // Uneven category sizes: logical 1, numerical 1, verbal 1, spatial 5.
        // Only the three singleton categories are answered correctly, so the
        // category percentages are {100, 100, 100, 0} (mean 75) while the raw
        // count is 3/8 -> 38.
        let mut key = vec![
            entry(1, AptitudeCategory::Logical, 0),
            entry(2, AptitudeCategory::Numerical, 0),
            entry(3, AptitudeCategory::Verbal, 0),
        ];
        for id in 4..=8 {
            key.push(entry(id, AptitudeCategory::Spatial, 0));
        }
        let answers: HashMap<u32, usize> = [(1, 0), (2, 0), (3, 0)].into_iter().collect();

        let profile = score(&key, &answers);
        assert_eq!(profile.logical, 100);
        assert_eq!(profile.numerical, 100);
        assert_eq!(profile.verbal, 100);
        assert_eq!(profile.spatial, 0);
        assert_eq!(profile.overall, 38);
    }

    #[test]
    fn test_category_with_no_questions_scores_zero() {
        // No spatial questions at all: the percentage is 0, not a division
        // error.
        let key = vec![
            entry(1, AptitudeCategory::Logical, 1),
            entry(2, AptitudeCategory::Numerical, 1),
        ];
        let answers: HashMap<u32, usize> = [(1, 1usize), (2, 1usize)].into_iter().collect();

        let profile = score(&key, &answers);
        assert_eq!(profile.spatial, 0);
        assert_eq!(profile.verbal, 0);
        assert_eq!(profile.overall, 100);
    }

    #[test]
    fn test_empty_key_scores_zero_overall() {
        let profile = score(&[], &HashMap::new());
        assert_eq!(profile.overall, 0);
    }

    #[test]
    fn test_percentages_round_to_nearest() {
        // 1 of 3 correct -> 33, 2 of 3 -> 67.
        let key = vec![
            entry(1, AptitudeCategory::Logical, 0),
            entry(2, AptitudeCategory::Logical, 0),
            entry(3, AptitudeCategory::Logical, 0),
        ];
        let answers: HashMap<u32, usize> = [(1, 0usize)].into_iter().collect();
        assert_eq!(score(&key, &answers).logical, 33);

        let answers: HashMap<u32, usize> = [(1, 0usize), (2, 0usize)].into_iter().collect();
        assert_eq!(score(&key, &answers).logical, 67);
    }
}
