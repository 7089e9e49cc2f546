//! Career compass: AI-powered career assessment and recommendation tool

mod catalog;
mod cli;
mod config;
mod error;
mod input;
mod output;
mod scoring;

use catalog::aptitude::ANSWER_KEY;
use catalog::careers::CAREER_CATALOG;
use catalog::interests::{INTEREST_CATEGORIES, WORK_PREFERENCES};
use catalog::skills::{ExperienceTier, SkillCategory};
use clap::Parser;
use cli::{CatalogAction, Cli, Commands, ConfigAction};
use config::Config;
use error::{CareerCompassError, Result};
use input::AssessmentResponses;
use log::{error, info};
use output::formatter::ReportGenerator;
use output::report::AssessmentReport;
use scoring::engine::AssessmentEngine;
use std::process;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    // Load configuration
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    // Execute command
    if let Err(e) = run_command(cli.command, config) {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn run_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Assess {
            responses,
            detailed,
            output,
            save,
            no_color,
        } => {
            info!("Starting career assessment");

            cli::validate_file_extension(&responses, &["json"])
                .map_err(|e| CareerCompassError::InvalidInput(format!("Responses file: {}", e)))?;

            let output_format = cli::parse_output_format(&output)
                .map_err(CareerCompassError::InvalidInput)?;

            let response_set = AssessmentResponses::from_file(&responses)?;

            let engine = AssessmentEngine::new(&config)?;
            let analysis = engine.run(&response_set, &responses.to_string_lossy());
            let report = AssessmentReport::from_analysis(analysis);

            let use_colors = config.output.color_output && !no_color && save.is_none();
            let generator = ReportGenerator::new(use_colors, detailed || config.output.detailed);
            let rendered = generator.generate(&report, output_format)?;

            match save {
                Some(path) => {
                    generator.save_to_file(&rendered, &path)?;
                    println!("✅ Report saved to {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Catalog { action } => match action {
            CatalogAction::Careers => {
                println!("💼 Career Catalog\n");
                for career in &CAREER_CATALOG {
                    println!("  • {} ({})", career.title, career.stream);
                    println!("    {}", career.description);
                    println!("    Required: {}", career.requirements.join(", "));
                    println!("    Pathways: {}", career.pathways.join(", "));
                    println!("    Exams: {}", career.exams.join(", "));
                    println!();
                }
            }

            CatalogAction::Questions => {
                println!("🧠 Aptitude Questions\n");
                for question in &ANSWER_KEY {
                    println!("  {}. [{}] {}", question.id, question.category, question.question);
                    for (i, option) in question.options.iter().enumerate() {
                        println!("     {}) {}", i + 1, option);
                    }
                    println!();
                }
            }

            CatalogAction::Skills => {
                println!("🛠️  Skill Categories\n");
                for category in SkillCategory::CATALOG_ORDER {
                    println!("  {} skills:", category);
                    println!("    {}", category.catalog_skills().join(", "));
                    println!();
                }
                println!("  Experience tiers:");
                for tier in ExperienceTier::ALL {
                    println!("    • {} (weight x{})", tier.label(), tier.multiplier());
                }
            }

            CatalogAction::Interests => {
                println!("🎯 Interest Categories\n");
                for category in &INTEREST_CATEGORIES {
                    println!("  • {} - {}", category.label, category.description);
                }
                println!("\n  Work environment preferences:");
                for pref in &WORK_PREFERENCES {
                    println!("  • {}", pref.label);
                }
            }
        },

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Scoring weights:");
                println!("  Aptitude weight: {}", config.scoring.aptitude_weight);
                println!("  Interest points: {}", config.scoring.interest_points);
                println!("  Skill weight: {}", config.scoring.skill_weight);
                println!("\nOutput:");
                println!("  Format: {:?}", config.output.format);
                println!("  Detailed: {}", config.output.detailed);
                println!("  Colors: {}", config.output.color_output);
            }

            Some(ConfigAction::Reset) => {
                println!("🔄 Resetting configuration to defaults...");
                let default_config = Config::default();
                default_config.save()?;
                println!("✅ Configuration reset successfully!");
            }
        },
    }

    Ok(())
}
