//! Interest categories, the keyword table, and work environment preferences
//!
//! Two orderings matter here and they are not the same: `INTEREST_CATEGORIES`
//! is the catalog declaration order used to break rating ties, while
//! `KEYWORD_TABLE` has its own iteration order that determines the order of
//! extracted category tags.

/// A rateable interest field.
#[derive(Debug, Clone)]
pub struct InterestCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
}

/// A rateable work environment preference.
#[derive(Debug, Clone)]
pub struct WorkPreference {
    pub id: &'static str,
    pub label: &'static str,
}

/// Keywords whose presence anywhere in the user's free text tags a category.
#[derive(Debug, Clone)]
pub struct KeywordSet {
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

/// Rating applied to any category or preference the user left untouched.
pub const DEFAULT_RATING: u8 = 5;

/// How many top interests / work preferences a profile keeps.
pub const TOP_COUNT: usize = 3;

pub const INTEREST_CATEGORIES: [InterestCategory; 10] = [
    InterestCategory {
        id: "science",
        label: "Science & Research",
        description: "Biology, Chemistry, Physics, Research",
    },
    InterestCategory {
        id: "technology",
        label: "Technology & Engineering",
        description: "Programming, AI, Robotics, Engineering",
    },
    InterestCategory {
        id: "arts",
        label: "Arts & Creative",
        description: "Design, Music, Writing, Visual Arts",
    },
    InterestCategory {
        id: "business",
        label: "Business & Finance",
        description: "Management, Finance, Marketing, Entrepreneurship",
    },
    InterestCategory {
        id: "social",
        label: "Social & Humanities",
        description: "Psychology, Sociology, History, Literature",
    },
    InterestCategory {
        id: "healthcare",
        label: "Healthcare & Medicine",
        description: "Medicine, Nursing, Therapy, Public Health",
    },
    InterestCategory {
        id: "education",
        label: "Education & Training",
        description: "Teaching, Training, Educational Technology",
    },
    InterestCategory {
        id: "law",
        label: "Law & Governance",
        description: "Legal, Public Administration, Policy Making",
    },
    InterestCategory {
        id: "sports",
        label: "Sports & Fitness",
        description: "Athletics, Fitness Training, Sports Management",
    },
    InterestCategory {
        id: "environment",
        label: "Environment & Agriculture",
        description: "Environmental Science, Agriculture, Sustainability",
    },
];

pub const WORK_PREFERENCES: [WorkPreference; 8] = [
    WorkPreference { id: "teamwork", label: "Team Collaboration" },
    WorkPreference { id: "independent", label: "Independent Work" },
    WorkPreference { id: "leadership", label: "Leadership Roles" },
    WorkPreference { id: "creative", label: "Creative Freedom" },
    WorkPreference { id: "structured", label: "Structured Environment" },
    WorkPreference { id: "flexible", label: "Flexible Schedule" },
    WorkPreference { id: "travel", label: "Travel Opportunities" },
    WorkPreference { id: "stability", label: "Job Stability" },
];

pub const KEYWORD_TABLE: [KeywordSet; 10] = [
    KeywordSet {
        category: "science",
        keywords: &["science", "research", "experiment", "biology", "chemistry", "physics", "lab"],
    },
    KeywordSet {
        category: "technology",
        keywords: &["technology", "programming", "coding", "computer", "software", "ai", "robot"],
    },
    KeywordSet {
        category: "arts",
        keywords: &["art", "design", "creative", "music", "painting", "drawing", "writing"],
    },
    KeywordSet {
        category: "business",
        keywords: &["business", "management", "finance", "marketing", "entrepreneur", "money"],
    },
    KeywordSet {
        category: "healthcare",
        keywords: &["medicine", "doctor", "nurse", "health", "patient", "hospital", "medical"],
    },
    KeywordSet {
        category: "education",
        keywords: &["teaching", "education", "school", "student", "learning", "training"],
    },
    KeywordSet {
        category: "law",
        keywords: &["law", "legal", "justice", "court", "government", "policy"],
    },
    KeywordSet {
        category: "social",
        keywords: &["people", "society", "psychology", "social", "community", "help"],
    },
    KeywordSet {
        category: "sports",
        keywords: &["sports", "fitness", "athletic", "exercise", "game", "competition"],
    },
    KeywordSet {
        category: "environment",
        keywords: &["environment", "nature", "agriculture", "farming", "green", "sustainability"],
    },
];
