//! Aptitude question bank and answer key

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four cognitive dimensions measured by the aptitude test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AptitudeCategory {
    Logical,
    Numerical,
    Verbal,
    Spatial,
}

impl AptitudeCategory {
    pub const ALL: [AptitudeCategory; 4] = [
        AptitudeCategory::Logical,
        AptitudeCategory::Numerical,
        AptitudeCategory::Verbal,
        AptitudeCategory::Spatial,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            AptitudeCategory::Logical => "Logical Reasoning",
            AptitudeCategory::Numerical => "Numerical Ability",
            AptitudeCategory::Verbal => "Verbal Comprehension",
            AptitudeCategory::Spatial => "Spatial Intelligence",
        }
    }
}

impl fmt::Display for AptitudeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AptitudeCategory::Logical => "logical",
            AptitudeCategory::Numerical => "numerical",
            AptitudeCategory::Verbal => "verbal",
            AptitudeCategory::Spatial => "spatial",
        };
        write!(f, "{}", name)
    }
}

/// One entry of the fixed answer key. Question ids are unique across the key.
#[derive(Debug, Clone)]
pub struct AnswerKeyEntry {
    pub id: u32,
    pub category: AptitudeCategory,
    pub question: &'static str,
    pub options: [&'static str; 4],
    pub correct: usize,
}

/// The fixed 8-question instrument, two questions per category.
pub const ANSWER_KEY: [AnswerKeyEntry; 8] = [
    AnswerKeyEntry {
        id: 1,
        category: AptitudeCategory::Logical,
        question: "If all roses are flowers and some flowers are red, which statement is definitely true?",
        options: [
            "All roses are red",
            "Some roses might be red",
            "No roses are red",
            "All red things are roses",
        ],
        correct: 1,
    },
    AnswerKeyEntry {
        id: 2,
        category: AptitudeCategory::Numerical,
        question: "What is the next number in the sequence: 2, 6, 12, 20, 30, ?",
        options: ["40", "42", "44", "46"],
        correct: 1,
    },
    AnswerKeyEntry {
        id: 3,
        category: AptitudeCategory::Verbal,
        question: "Choose the word that best completes the analogy: Book is to Reading as Fork is to ____",
        options: ["Kitchen", "Eating", "Metal", "Utensil"],
        correct: 1,
    },
    AnswerKeyEntry {
        id: 4,
        category: AptitudeCategory::Spatial,
        question: "If you fold a square paper in half twice and cut a small triangle from the corner, how many holes will you see when you unfold it?",
        options: ["1", "2", "4", "8"],
        correct: 2,
    },
    AnswerKeyEntry {
        id: 5,
        category: AptitudeCategory::Logical,
        question: "In a certain code, COMPUTER is written as RFUVQNPC. How is MEDICINE written in that code?",
        options: ["EOJDEJFM", "NFEJDJOF", "NFEJDJOF", "EOJDJFM"],
        correct: 2,
    },
    AnswerKeyEntry {
        id: 6,
        category: AptitudeCategory::Numerical,
        question: "A train travels 60 km in 45 minutes. What is its speed in km/hr?",
        options: ["75", "80", "85", "90"],
        correct: 1,
    },
    AnswerKeyEntry {
        id: 7,
        category: AptitudeCategory::Verbal,
        question: "Which word is the odd one out?",
        options: ["Honest", "Truthful", "Sincere", "Deceptive"],
        correct: 3,
    },
    AnswerKeyEntry {
        id: 8,
        category: AptitudeCategory::Spatial,
        question: "How many cubes are needed to complete the 3x3x3 cube if 7 cubes are already placed?",
        options: ["20", "22", "24", "26"],
        correct: 0,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_question_ids_unique() {
        let ids: HashSet<u32> = ANSWER_KEY.iter().map(|q| q.id).collect();
        assert_eq!(ids.len(), ANSWER_KEY.len());
    }

    #[test]
    fn test_every_category_covered() {
        for category in AptitudeCategory::ALL {
            assert!(
                ANSWER_KEY.iter().any(|q| q.category == category),
                "no questions for category {}",
                category
            );
        }
    }

    #[test]
    fn test_correct_indices_in_range() {
        for q in &ANSWER_KEY {
            assert!(q.correct < q.options.len());
        }
    }
}
