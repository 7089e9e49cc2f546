//! Integration tests for the career compass

use career_compass::config::{Config, OutputFormat};
use career_compass::input::AssessmentResponses;
use career_compass::output::formatter::ReportGenerator;
use career_compass::output::report::AssessmentReport;
use career_compass::scoring::engine::AssessmentEngine;
use std::io::Write;
use tempfile::NamedTempFile;

fn write_responses(json: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

fn run_pipeline(json: &str) -> AssessmentReport {
    let file = write_responses(json);
    let responses = AssessmentResponses::from_file(file.path()).unwrap();
    let engine = AssessmentEngine::new(&Config::default()).unwrap();
    let analysis = engine.run(&responses, &file.path().to_string_lossy());
    AssessmentReport::from_analysis(analysis)
}

const FULL_RESPONSES: &str = r#"{
    "aptitude": {
        "answers": {"1": 1, "2": 1, "3": 1, "4": 2, "5": 2, "6": 1, "7": 3, "8": 0}
    },
    "interests": {
        "interest_text": "I love programming and building software",
        "goal_text": "I want a career in technology that helps people",
        "category_ratings": {"technology": 10, "science": 8, "business": 7},
        "work_preference_ratings": {"teamwork": 9, "flexible": 8}
    },
    "skills": {
        "skills": [
            {"name": "Programming", "level": 8, "experience": "advanced"},
            {"name": "Communication", "level": 6, "experience": "intermediate"},
            {"name": "Mathematics", "level": 7, "experience": "advanced"}
        ],
        "achievements": "Won a state-level coding competition",
        "projects": "Built a school timetable app",
        "certifications": ""
    }
}"#;

#[test]
fn test_full_pipeline_from_file() {
    let report = run_pipeline(FULL_RESPONSES);

    // All answers correct.
    let aptitude = report.aptitude.as_ref().unwrap();
    assert_eq!(aptitude.overall, 100);
    assert_eq!(aptitude.logical, 100);

    let interests = report.interests.as_ref().unwrap();
    assert!(interests.extracted_categories.contains(&"technology".to_string()));
    assert_eq!(interests.top_interests[0], "technology");

    let skills = report.skills.as_ref().unwrap();
    assert_eq!(skills.top_skills[0], "Programming");
    assert!((skills.overall_skill_level - 7.0).abs() < f64::EPSILON);

    // 100 * 0.3 + 3 * 10 + 7 * 5 = 95.
    assert!(report.recommendations.iter().all(|r| r.computed_match == 95));
}

#[test]
fn test_skipped_steps_use_neutral_defaults() {
    let report = run_pipeline("{}");

    assert!(report.aptitude.is_none());
    assert!(report.interests.is_none());
    assert!(report.skills.is_none());

    // 70 * 0.3 + 0 + 5 * 5 = 46 -> clamped to 60; order equals the catalog.
    assert!(report.recommendations.iter().all(|r| r.computed_match == 60));
    assert_eq!(report.recommendations[0].career.id, "software-engineer");

    // Dashboard fallbacks for the summary tiles.
    assert_eq!(report.summary.aptitude_overall, 75);
    assert_eq!(report.summary.interest_match_percent, 80);
}

#[test]
fn test_partial_responses_aptitude_only() {
    let report = run_pipeline(r#"{"aptitude": {"answers": {"1": 1, "2": 0}}}"#);

    // 1 of 8 correct -> overall 13.
    let aptitude = report.aptitude.as_ref().unwrap();
    assert_eq!(aptitude.overall, 13);
    assert_eq!(aptitude.logical, 50);
    assert_eq!(aptitude.numerical, 0);

    // 13 * 0.3 + 0 + 5 * 5 = 28.9 -> clamped to 60.
    assert!(report.recommendations.iter().all(|r| r.computed_match == 60));
}

#[test]
fn test_gap_reports_cover_top_careers() {
    let report = run_pipeline(FULL_RESPONSES);

    assert_eq!(report.gap_reports.len(), 3);
    assert_eq!(report.gap_reports[0].career_id, "software-engineer");
    assert!(!report.gap_reports[0].missing_skills.is_empty());
    // "doctor" is ranked third and has no gap table entry.
    assert!(report.gap_reports[2].is_empty());
}

#[test]
fn test_all_output_formats_render() {
    let report = run_pipeline(FULL_RESPONSES);
    let generator = ReportGenerator::new(false, true);

    for format in [
        OutputFormat::Console,
        OutputFormat::Json,
        OutputFormat::Markdown,
        OutputFormat::Html,
    ] {
        let rendered = generator.generate(&report, format).unwrap();
        assert!(rendered.contains("Software Engineer"), "{:?} output misses careers", format);
    }
}

#[test]
fn test_json_output_round_trips() {
    let report = run_pipeline(FULL_RESPONSES);
    let generator = ReportGenerator::new(false, false);
    let json = generator.generate(&report, OutputFormat::Json).unwrap();

    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["recommendations"][0]["computed_match"], 95);
    assert_eq!(value["summary"]["aptitude_overall"], 100);
    assert_eq!(value["gap_reports"].as_array().unwrap().len(), 3);
}

#[test]
fn test_save_report_to_file() {
    let report = run_pipeline("{}");
    let generator = ReportGenerator::new(false, false);
    let rendered = generator.generate(&report, OutputFormat::Markdown).unwrap();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.md");
    generator.save_to_file(&rendered, &path).unwrap();

    let saved = std::fs::read_to_string(&path).unwrap();
    assert_eq!(saved, rendered);
}

#[test]
fn test_malformed_responses_file_is_an_input_error() {
    let file = write_responses("not json at all");
    let result = AssessmentResponses::from_file(file.path());
    assert!(result.is_err());
}

#[test]
fn test_nonexistent_file_is_an_error() {
    let result = AssessmentResponses::from_file(std::path::Path::new("does/not/exist.json"));
    assert!(result.is_err());
}
