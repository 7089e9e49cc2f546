//! Output formatters - multiple format support for assessment reports

use crate::catalog::aptitude::AptitudeCategory;
use crate::catalog::careers::career_by_id;
use crate::config::OutputFormat;
use crate::error::{CareerCompassError, Result};
use crate::output::report::{star_count, AssessmentReport};
use askama::Template;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting assessment reports
pub trait OutputFormatter {
    fn format_report(&self, report: &AssessmentReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with colors and rich presentation
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for documentation and reports
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// HTML formatter with embedded styling
pub struct HtmlFormatter {
    include_styles: bool,
}

/// Report generator that coordinates the formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
    html_formatter: HtmlFormatter,
}

/// Askama template for HTML output
#[derive(Template)]
#[template(source = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Career Assessment Report</title>
    {% if include_styles %}
    <style>
        body {
            font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
            line-height: 1.6;
            color: #333;
            max-width: 900px;
            margin: 0 auto;
            padding: 20px;
            background: #f8f9fa;
        }
        .container {
            background: white;
            padding: 30px;
            border-radius: 8px;
            box-shadow: 0 2px 10px rgba(0,0,0,0.1);
        }
        .header {
            text-align: center;
            margin-bottom: 30px;
            border-bottom: 3px solid #4f46e5;
            padding-bottom: 20px;
        }
        .tiles {
            display: grid;
            grid-template-columns: repeat(auto-fit, minmax(200px, 1fr));
            gap: 15px;
            margin: 20px 0;
        }
        .tile {
            background: #f8f9fa;
            padding: 15px;
            border-radius: 6px;
            border-left: 4px solid #4f46e5;
        }
        .tile .value {
            font-size: 1.8em;
            font-weight: bold;
            color: #4f46e5;
        }
        .section {
            margin: 25px 0;
        }
        .section h2 {
            color: #4f46e5;
            border-bottom: 2px solid #e9ecef;
            padding-bottom: 10px;
        }
        .career {
            background: #f8f9fa;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #16a34a;
        }
        .career .match {
            float: right;
            font-weight: bold;
            color: #16a34a;
        }
        .stars { color: #eab308; }
        .gap {
            background: #fff7ed;
            padding: 15px;
            margin: 10px 0;
            border-radius: 6px;
            border-left: 4px solid #ea580c;
        }
        .metadata {
            background: #e9ecef;
            padding: 15px;
            border-radius: 6px;
            margin-top: 30px;
            font-size: 0.9em;
            color: #6c757d;
        }
        ul { margin: 10px 0; }
        li { margin: 5px 0; }
    </style>
    {% endif %}
</head>
<body>
    <div class="container">
        <div class="header">
            <h1>🎯 Career Assessment Report</h1>
            <p>Generated: {{ generated_at }} | Processing time: {{ processing_time }}ms</p>
        </div>

        <div class="section">
            <h2>Summary</h2>
            <p><strong>Verdict:</strong> {{ verdict }}</p>
            <div class="tiles">
                <div class="tile">
                    <h4>🧠 Aptitude Score</h4>
                    <p class="value">{{ aptitude_overall }}%</p>
                </div>
                <div class="tile">
                    <h4>🎯 Interest Alignment</h4>
                    <p class="value">{{ interest_match_percent }}%</p>
                </div>
                <div class="tile">
                    <h4>🛠️ Skill Level</h4>
                    <p class="value">{{ skill_level }}/10</p>
                </div>
            </div>
        </div>

        {% if has_profiles %}
        <div class="section">
            <h2>Profiles</h2>
            {{ profiles_html | safe }}
        </div>
        {% endif %}

        <div class="section">
            <h2>Career Matches</h2>
            {{ recommendations_html | safe }}
        </div>

        {% if has_gaps %}
        <div class="section">
            <h2>Skill Gap Analysis</h2>
            {{ gaps_html | safe }}
        </div>
        {% endif %}

        <div class="metadata">
            <p><strong>Generated by Career Compass v{{ version }}</strong></p>
            <p><strong>Responses:</strong> {{ responses_file }} | {{ question_count }} questions, {{ career_count }} careers in catalog</p>
        </div>
    </div>
</body>
</html>"#, ext = "html")]
struct HtmlTemplate {
    include_styles: bool,
    generated_at: String,
    processing_time: u64,
    verdict: String,
    aptitude_overall: u8,
    interest_match_percent: u8,
    skill_level: String,
    has_profiles: bool,
    profiles_html: String,
    recommendations_html: String,
    has_gaps: bool,
    gaps_html: String,
    version: String,
    responses_file: String,
    question_count: usize,
    career_count: usize,
}

/// Minimal HTML escaping for user-provided strings interpolated into
/// pre-formatted fragments.
fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn star_row(computed_match: u8) -> String {
    let filled = star_count(computed_match);
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            3 => "▒",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Yellow,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_match_badge(&self, computed_match: u8) -> String {
        let (badge, color) = match computed_match {
            90..=100 => ("EXCELLENT", Color::Green),
            80..=89 => ("VERY GOOD", Color::BrightGreen),
            70..=79 => ("GOOD", Color::Yellow),
            60..=69 => ("FAIR", Color::BrightYellow),
            _ => ("LOW", Color::Red),
        };

        if self.use_colors {
            format!("[{}]", badge.color(color).bold())
        } else {
            format!("[{}]", badge)
        }
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &AssessmentReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("🎯 CAREER ASSESSMENT REPORT", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));

        // Summary
        output.push_str(&self.format_header("Summary", 2));
        output.push_str(&format!(
            "Verdict: {}\n\n",
            self.colorize(&report.summary.verdict, Color::Cyan)
        ));
        output.push_str(&format!("🧠 Aptitude Score: {}%\n", report.summary.aptitude_overall));
        output.push_str(&format!(
            "🎯 Interest Alignment: {}%\n",
            report.summary.interest_match_percent
        ));
        output.push_str(&format!(
            "🛠️  Skill Level: {}/10\n",
            report.summary.skill_level.round() as u8
        ));

        // Aptitude breakdown
        if let Some(aptitude) = &report.aptitude {
            output.push_str(&self.format_header("🧠 Aptitude Breakdown", 3));
            for category in AptitudeCategory::ALL {
                output.push_str(&format!(
                    "  • {}: {}%\n",
                    category.label(),
                    aptitude.category_percent(category)
                ));
            }
            output.push_str(&format!("  • Overall: {}%\n", aptitude.overall));
        }

        // Interests
        if let Some(interests) = &report.interests {
            output.push_str(&self.format_header("🎯 Interest Profile", 3));
            if !interests.extracted_categories.is_empty() {
                output.push_str(&format!(
                    "  Detected interest areas: {}\n",
                    interests.extracted_categories.join(", ")
                ));
            }
            output.push_str(&format!("  Top interests: {}\n", interests.top_interests.join(", ")));
            output.push_str(&format!(
                "  Top work preferences: {}\n",
                interests.top_work_preferences.join(", ")
            ));
        }

        // Skills
        if let Some(skills) = &report.skills {
            output.push_str(&self.format_header("🛠️  Skills Profile", 3));
            output.push_str(&format!(
                "  Overall skill level: {:.1}/10\n",
                skills.overall_skill_level
            ));
            if !skills.top_skills.is_empty() {
                output.push_str(&format!("  Top skills: {}\n", skills.top_skills.join(", ")));
            }
            if self.detailed {
                for weighted in &skills.skill_vector {
                    output.push_str(&format!(
                        "    • {} (weighted score: {})\n",
                        weighted.skill, weighted.weighted_score
                    ));
                }
            }
        }

        // Career recommendations
        output.push_str(&self.format_header("💼 Career Matches", 2));
        for (i, rec) in report.recommendations.iter().enumerate() {
            let badge = self.format_match_badge(rec.computed_match);
            output.push_str(&format!(
                "{}. {} ({}) - {}% {} {}\n",
                i + 1,
                self.colorize(rec.career.title, Color::White),
                rec.career.stream,
                rec.computed_match,
                self.colorize(&star_row(rec.computed_match), Color::Yellow),
                badge
            ));
            if self.detailed {
                output.push_str(&format!("   {}\n", rec.career.description));
                output.push_str(&format!("   Required: {}\n", rec.career.requirements.join(", ")));
                output.push_str(&format!("   Prospects: {}\n", rec.career.prospects));
                output.push_str(&format!("   Pathways: {}\n", rec.career.pathways.join(", ")));
                output.push_str(&format!("   Exams: {}\n", rec.career.exams.join(", ")));
            }
        }

        // Gap analysis
        let gaps: Vec<_> = report.gap_reports.iter().filter(|g| !g.is_empty()).collect();
        if !gaps.is_empty() {
            output.push_str(&self.format_header("📌 Skill Gap Analysis", 2));
            for gap in gaps {
                let title = career_by_id(&gap.career_id)
                    .map(|c| c.title)
                    .unwrap_or(gap.career_id.as_str());
                output.push_str(&format!("{}\n", self.colorize(title, Color::White)));
                output.push_str(&format!(
                    "  Missing skills: {}\n",
                    self.colorize(&gap.missing_skills.join(", "), Color::Yellow)
                ));
                for rec in &gap.recommendations {
                    output.push_str(&format!("  • {}\n", rec));
                }
            }
        }

        output.push_str(&format!(
            "\nℹ️  Career Compass v{} | responses: {}\n",
            report.metadata.tool_version, report.metadata.responses_file
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &AssessmentReport) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        Ok(json)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &AssessmentReport) -> Result<String> {
        let mut output = String::new();

        output.push_str("# Career Assessment Report\n\n");
        output.push_str(&format!("**Verdict:** {}\n\n", report.summary.verdict));

        output.push_str("## Summary\n\n");
        output.push_str(&format!("- **Aptitude score:** {}%\n", report.summary.aptitude_overall));
        output.push_str(&format!(
            "- **Interest alignment:** {}%\n",
            report.summary.interest_match_percent
        ));
        output.push_str(&format!(
            "- **Skill level:** {:.1}/10\n\n",
            report.summary.skill_level
        ));

        if let Some(aptitude) = &report.aptitude {
            output.push_str("## Aptitude Breakdown\n\n");
            output.push_str("| Category | Score |\n|---|---|\n");
            for category in AptitudeCategory::ALL {
                output.push_str(&format!(
                    "| {} | {}% |\n",
                    category.label(),
                    aptitude.category_percent(category)
                ));
            }
            output.push_str(&format!("| **Overall** | **{}%** |\n\n", aptitude.overall));
        }

        if let Some(interests) = &report.interests {
            output.push_str("## Interest Profile\n\n");
            if !interests.extracted_categories.is_empty() {
                output.push_str(&format!(
                    "Detected interest areas: {}\n\n",
                    interests.extracted_categories.join(", ")
                ));
            }
            output.push_str(&format!(
                "- **Top interests:** {}\n",
                interests.top_interests.join(", ")
            ));
            output.push_str(&format!(
                "- **Top work preferences:** {}\n\n",
                interests.top_work_preferences.join(", ")
            ));
        }

        if let Some(skills) = &report.skills {
            output.push_str("## Skills Profile\n\n");
            output.push_str(&format!(
                "Overall skill level: {:.1}/10\n\n",
                skills.overall_skill_level
            ));
            if !skills.skill_vector.is_empty() {
                output.push_str("| Skill | Weighted score |\n|---|---|\n");
                for weighted in &skills.skill_vector {
                    output.push_str(&format!("| {} | {} |\n", weighted.skill, weighted.weighted_score));
                }
                output.push('\n');
            }
        }

        output.push_str("## Career Matches\n\n");
        for (i, rec) in report.recommendations.iter().enumerate() {
            output.push_str(&format!(
                "{}. **{}** ({}) - {}% {}\n",
                i + 1,
                rec.career.title,
                rec.career.stream,
                rec.computed_match,
                star_row(rec.computed_match)
            ));
            output.push_str(&format!("   - {}\n", rec.career.description));
            output.push_str(&format!("   - Required: {}\n", rec.career.requirements.join(", ")));
        }
        output.push('\n');

        let gaps: Vec<_> = report.gap_reports.iter().filter(|g| !g.is_empty()).collect();
        if !gaps.is_empty() {
            output.push_str("## Skill Gap Analysis\n\n");
            for gap in gaps {
                let title = career_by_id(&gap.career_id)
                    .map(|c| c.title)
                    .unwrap_or(gap.career_id.as_str());
                output.push_str(&format!("### {}\n\n", title));
                output.push_str(&format!(
                    "Missing skills: {}\n\n",
                    gap.missing_skills.join(", ")
                ));
                for rec in &gap.recommendations {
                    output.push_str(&format!("- {}\n", rec));
                }
                output.push('\n');
            }
        }

        if self.include_metadata {
            output.push_str("---\n\n");
            output.push_str(&format!(
                "Generated by Career Compass v{} on {} in {}ms\n",
                report.metadata.tool_version,
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms
            ));
        }

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl HtmlFormatter {
    pub fn new(include_styles: bool) -> Self {
        Self { include_styles }
    }

    fn profiles_html(report: &AssessmentReport) -> String {
        let mut html = String::new();

        if let Some(aptitude) = &report.aptitude {
            html.push_str("<h3>Aptitude</h3><ul>");
            for category in AptitudeCategory::ALL {
                html.push_str(&format!(
                    "<li>{}: {}%</li>",
                    category.label(),
                    aptitude.category_percent(category)
                ));
            }
            html.push_str("</ul>");
        }

        if let Some(interests) = &report.interests {
            html.push_str("<h3>Interests</h3><ul>");
            if !interests.extracted_categories.is_empty() {
                html.push_str(&format!(
                    "<li>Detected areas: {}</li>",
                    html_escape(&interests.extracted_categories.join(", "))
                ));
            }
            html.push_str(&format!(
                "<li>Top interests: {}</li>",
                html_escape(&interests.top_interests.join(", "))
            ));
            html.push_str(&format!(
                "<li>Top work preferences: {}</li>",
                html_escape(&interests.top_work_preferences.join(", "))
            ));
            html.push_str("</ul>");
        }

        if let Some(skills) = &report.skills {
            html.push_str("<h3>Skills</h3><ul>");
            html.push_str(&format!(
                "<li>Overall skill level: {:.1}/10</li>",
                skills.overall_skill_level
            ));
            if !skills.top_skills.is_empty() {
                html.push_str(&format!(
                    "<li>Top skills: {}</li>",
                    html_escape(&skills.top_skills.join(", "))
                ));
            }
            html.push_str("</ul>");
        }

        html
    }

    fn recommendations_html(report: &AssessmentReport) -> String {
        let mut html = String::new();
        for rec in &report.recommendations {
            html.push_str(&format!(
                r#"<div class="career"><span class="match">{}% <span class="stars">{}</span></span><h3>{}</h3><p>{} | {}</p><p>Required: {}</p></div>"#,
                rec.computed_match,
                star_row(rec.computed_match),
                html_escape(rec.career.title),
                html_escape(rec.career.stream),
                html_escape(rec.career.description),
                html_escape(&rec.career.requirements.join(", ")),
            ));
        }
        html
    }

    fn gaps_html(report: &AssessmentReport) -> String {
        let mut html = String::new();
        for gap in report.gap_reports.iter().filter(|g| !g.is_empty()) {
            let title = career_by_id(&gap.career_id)
                .map(|c| c.title)
                .unwrap_or(gap.career_id.as_str());
            let recommendations: String = gap
                .recommendations
                .iter()
                .map(|r| format!("<li>{}</li>", html_escape(r)))
                .collect();
            html.push_str(&format!(
                r#"<div class="gap"><h3>{}</h3><p>Missing skills: {}</p><ul>{}</ul></div>"#,
                html_escape(title),
                html_escape(&gap.missing_skills.join(", ")),
                recommendations,
            ));
        }
        html
    }
}

impl OutputFormatter for HtmlFormatter {
    fn format_report(&self, report: &AssessmentReport) -> Result<String> {
        let gaps_html = Self::gaps_html(report);
        let profiles_html = Self::profiles_html(report);

        let template = HtmlTemplate {
            include_styles: self.include_styles,
            generated_at: report
                .metadata
                .generated_at
                .format("%Y-%m-%d %H:%M:%S UTC")
                .to_string(),
            processing_time: report.metadata.processing_time_ms,
            verdict: report.summary.verdict.clone(),
            aptitude_overall: report.summary.aptitude_overall,
            interest_match_percent: report.summary.interest_match_percent,
            skill_level: format!("{:.1}", report.summary.skill_level),
            has_profiles: !profiles_html.is_empty(),
            profiles_html,
            recommendations_html: Self::recommendations_html(report),
            has_gaps: !gaps_html.is_empty(),
            gaps_html,
            version: report.metadata.tool_version.clone(),
            responses_file: report.metadata.responses_file.clone(),
            question_count: report.metadata.question_count,
            career_count: report.metadata.career_count,
        };

        template
            .render()
            .map_err(|e| CareerCompassError::OutputFormatting(format!("HTML rendering failed: {}", e)))
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Html
    }
}

impl ReportGenerator {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
            html_formatter: HtmlFormatter::new(true),
        }
    }

    pub fn generate(&self, report: &AssessmentReport, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
            OutputFormat::Html => self.html_formatter.format_report(report),
        }
    }

    pub fn save_to_file(&self, content: &str, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::input::AssessmentResponses;
    use crate::output::report::AssessmentReport;
    use crate::scoring::engine::AssessmentEngine;

    fn report() -> AssessmentReport {
        let engine = AssessmentEngine::new(&Config::default()).unwrap();
        let analysis = engine.run(&AssessmentResponses::default(), "empty.json");
        AssessmentReport::from_analysis(analysis)
    }

    #[test]
    fn test_console_output_lists_all_careers() {
        let formatter = ConsoleFormatter::new(false, false);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("Software Engineer"));
        assert!(output.contains("Chartered Accountant"));
        assert!(output.contains("60%"));
    }

    #[test]
    fn test_console_detailed_includes_pathways() {
        let formatter = ConsoleFormatter::new(false, true);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("B.Tech CSE"));
        assert!(output.contains("NEET UG"));
    }

    #[test]
    fn test_json_output_is_valid() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_markdown_output_has_sections() {
        let formatter = MarkdownFormatter::new(true);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.starts_with("# Career Assessment Report"));
        assert!(output.contains("## Career Matches"));
        assert!(output.contains("## Skill Gap Analysis"));
    }

    #[test]
    fn test_html_output_renders() {
        let formatter = HtmlFormatter::new(true);
        let output = formatter.format_report(&report()).unwrap();
        assert!(output.contains("<!DOCTYPE html>"));
        assert!(output.contains("Software Engineer"));
        assert!(output.contains("★★★☆☆"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        assert_eq!(html_escape("<b>&\"x\""), "&lt;b&gt;&amp;&quot;x&quot;");
    }

    #[test]
    fn test_star_rows() {
        assert_eq!(star_row(60), "★★★☆☆");
        assert_eq!(star_row(95), "★★★★☆");
    }

    #[test]
    fn test_generator_dispatches_by_format() {
        let generator = ReportGenerator::new(false, false);
        let report = report();
        assert!(generator
            .generate(&report, OutputFormat::Json)
            .unwrap()
            .starts_with('{'));
        assert!(generator
            .generate(&report, OutputFormat::Html)
            .unwrap()
            .contains("<html"));
    }
}
