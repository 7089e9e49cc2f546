//! Career catalog and skill gap table

use serde::Serialize;

/// One career in the fixed catalog. `base_match` is the catalog's static
/// headline number; the recommendation engine overwrites it with a computed
/// match and never reads it as an input.
#[derive(Debug, Clone, Serialize)]
pub struct CareerCatalogEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub stream: &'static str,
    pub description: &'static str,
    pub requirements: &'static [&'static str],
    pub prospects: &'static str,
    pub pathways: &'static [&'static str],
    pub exams: &'static [&'static str],
    pub base_match: u8,
}

/// Missing skills and remediation steps for one career, keyed by career id.
#[derive(Debug, Clone)]
pub struct GapTableEntry {
    pub career_id: &'static str,
    pub missing_skills: &'static [&'static str],
    pub recommendations: &'static [&'static str],
}

pub const CAREER_CATALOG: [CareerCatalogEntry; 5] = [
    CareerCatalogEntry {
        id: "software-engineer",
        title: "Software Engineer",
        stream: "JEE (Computer Science)",
        description: "Design and develop software applications and systems",
        requirements: &["Programming", "Problem Solving", "Mathematics"],
        prospects: "High demand, excellent salary prospects",
        pathways: &["B.Tech CSE", "B.Sc Computer Science", "BCA"],
        exams: &["JEE Main", "JEE Advanced", "BITSAT", "VITEEE"],
        base_match: 92,
    },
    CareerCatalogEntry {
        id: "data-scientist",
        title: "Data Scientist",
        stream: "Engineering/Statistics",
        description: "Analyze complex data to help organizations make decisions",
        requirements: &["Statistics", "Programming", "Machine Learning"],
        prospects: "Rapidly growing field with high salaries",
        pathways: &["B.Tech CSE", "B.Sc Statistics", "B.Sc Mathematics"],
        exams: &["JEE Main", "CUET", "University Entrance Exams"],
        base_match: 88,
    },
    CareerCatalogEntry {
        id: "doctor",
        title: "Medical Doctor",
        stream: "NEET (Medicine)",
        description: "Diagnose and treat patients, promote health and wellness",
        requirements: &["Biology", "Chemistry", "Empathy", "Communication"],
        prospects: "Stable career with social impact",
        pathways: &["MBBS", "BDS", "BAMS", "BHMS"],
        exams: &["NEET UG", "AIIMS", "JIPMER"],
        base_match: 75,
    },
    CareerCatalogEntry {
        id: "civil-servant",
        title: "Civil Servant (IAS/IPS)",
        stream: "UPSC",
        description: "Serve the nation through administrative and policy roles",
        requirements: &["General Knowledge", "Leadership", "Communication", "Ethics"],
        prospects: "Prestigious career with social impact",
        pathways: &["Any Graduate Degree", "Post-graduation preferred"],
        exams: &["UPSC CSE Prelims", "UPSC CSE Mains", "Interview"],
        base_match: 82,
    },
    CareerCatalogEntry {
        id: "chartered-accountant",
        title: "Chartered Accountant",
        stream: "CA",
        description: "Manage financial records, auditing, and taxation",
        requirements: &["Mathematics", "Attention to Detail", "Business Acumen"],
        prospects: "High earning potential in finance sector",
        pathways: &["CA Foundation", "CA Intermediate", "CA Final"],
        exams: &["CA Foundation", "CA Intermediate", "CA Final"],
        base_match: 78,
    },
];

pub const GAP_TABLE: [GapTableEntry; 2] = [
    GapTableEntry {
        career_id: "software-engineer",
        missing_skills: &["Advanced Programming", "System Design", "Database Management"],
        recommendations: &[
            "Complete a full-stack web development course",
            "Practice data structures and algorithms",
            "Build portfolio projects on GitHub",
        ],
    },
    GapTableEntry {
        career_id: "data-scientist",
        missing_skills: &["Machine Learning", "Statistics", "Data Visualization"],
        recommendations: &[
            "Take online courses in Python for Data Science",
            "Learn statistical analysis and hypothesis testing",
            "Practice with real datasets on Kaggle",
        ],
    },
];

/// Look up a career by its catalog id.
pub fn career_by_id(id: &str) -> Option<&'static CareerCatalogEntry> {
    CAREER_CATALOG.iter().find(|c| c.id == id)
}
