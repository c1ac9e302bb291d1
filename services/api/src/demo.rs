use chrono::{Local, NaiveDate};
use clap::Args;
use std::path::{Path, PathBuf};
use prevention_sst::error::AppError;
use prevention_sst::workflows::prevention::{
    export_to_markdown, CompanyProfile, PreventionProgram, PreventionProgramGenerator,
};
use prevention_sst::workflows::roster::RosterImporter;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Override the generation date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the full Markdown documents into this directory.
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct ProgramExportArgs {
    /// Roster CSV to generate programs for a whole list of establishments.
    #[arg(long, conflicts_with_all = ["name", "sector", "scian", "size"])]
    pub(crate) roster: Option<PathBuf>,
    /// Establishment name for a single-program export.
    #[arg(long, required_unless_present = "roster")]
    pub(crate) name: Option<String>,
    /// Sector label (construction, manufacturier, transport, services, ...).
    #[arg(long)]
    pub(crate) sector: Option<String>,
    /// SCIAN code of the establishment.
    #[arg(long)]
    pub(crate) scian: Option<String>,
    /// Number of workers.
    #[arg(long)]
    pub(crate) size: Option<u32>,
    /// Main activity; repeat the flag for several.
    #[arg(long = "activity")]
    pub(crate) activities: Vec<String>,
    /// Override the generation date (defaults to today).
    #[arg(long, value_parser = crate::infra::parse_date)]
    pub(crate) today: Option<NaiveDate>,
    /// Write the Markdown documents into this directory instead of stdout.
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
}

pub(crate) fn run_program_export(args: ProgramExportArgs) -> Result<(), AppError> {
    let ProgramExportArgs {
        roster,
        name,
        sector,
        scian,
        size,
        activities,
        today,
        output_dir,
    } = args;

    let today = today.unwrap_or_else(|| Local::now().date_naive());

    let profiles = if let Some(path) = roster {
        RosterImporter::from_path(path)?
    } else {
        vec![CompanyProfile {
            company_name: name.unwrap_or_default(),
            sector: sector.unwrap_or_default(),
            scian_code: scian,
            company_size: size.unwrap_or(0),
            main_activities: activities,
            identified_risks: Vec::new(),
            existing_measures: Vec::new(),
        }]
    };

    for profile in &profiles {
        let program = PreventionProgramGenerator::generate_program_on(profile, today);
        emit_program(&program, output_dir.as_deref())?;
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs { today, output_dir } = args;
    let today = today.unwrap_or_else(|| Local::now().date_naive());

    println!("Prevention program demo ({today})");

    for profile in sample_establishments() {
        let program = PreventionProgramGenerator::generate_program_on(&profile, today);
        render_program_summary(&profile, &program);

        if let Some(dir) = output_dir.as_deref() {
            let path = write_markdown(&program, dir)?;
            println!("  Markdown written to {}", path.display());
        }
    }

    Ok(())
}

fn emit_program(program: &PreventionProgram, output_dir: Option<&Path>) -> Result<(), AppError> {
    match output_dir {
        Some(dir) => {
            let path = write_markdown(program, dir)?;
            println!("{} -> {}", program.title, path.display());
        }
        None => println!("{}", export_to_markdown(program)),
    }
    Ok(())
}

fn write_markdown(program: &PreventionProgram, dir: &Path) -> Result<PathBuf, AppError> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(format!("{}.md", slugify(&program.company_info.name)));
    std::fs::write(&path, export_to_markdown(program))?;
    Ok(path)
}

fn render_program_summary(profile: &CompanyProfile, program: &PreventionProgram) {
    println!();
    println!("{}", program.title);
    println!(
        "  Secteur : {} | SCIAN : {} | Effectif : {}",
        display_or_dash(&profile.sector),
        profile.scian_code.as_deref().unwrap_or("-"),
        profile.company_size
    );
    println!("  Sections : {}", program.sections.len());
    println!("  M\u{e9}canisme de participation : {}", program.sections[6].title);

    let risk_lines = program.sections[2]
        .content
        .lines()
        .filter(|line| line.starts_with(|c: char| c.is_ascii_digit()))
        .count();
    println!("  Risques list\u{e9}s : {risk_lines}");
}

fn sample_establishments() -> Vec<CompanyProfile> {
    vec![
        CompanyProfile {
            company_name: "Toitures Gagnon".to_string(),
            sector: "construction".to_string(),
            scian_code: Some("2361".to_string()),
            company_size: 35,
            main_activities: vec!["Toitures r\u{e9}sidentielles".to_string()],
            identified_risks: Vec::new(),
            existing_measures: vec!["Port du harnais obligatoire".to_string()],
        },
        CompanyProfile {
            company_name: "Acier Lachine".to_string(),
            sector: "manufacturier".to_string(),
            scian_code: Some("3321".to_string()),
            company_size: 620,
            main_activities: vec!["Fonderie".to_string()],
            identified_risks: Vec::new(),
            existing_measures: Vec::new(),
        },
        CompanyProfile {
            company_name: "Comptabilit\u{e9} Rive-Sud".to_string(),
            sector: "services".to_string(),
            scian_code: None,
            company_size: 8,
            main_activities: Vec::new(),
            identified_risks: Vec::new(),
            existing_measures: Vec::new(),
        },
    ]
}

fn display_or_dash(value: &str) -> &str {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        "-"
    } else {
        trimmed
    }
}

fn slugify(name: &str) -> String {
    let mut slug = name
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c.to_lowercase().next().unwrap_or('-')
            } else {
                '-'
            }
        })
        .collect::<String>();
    while slug.contains("--") {
        slug = slug.replace("--", "-");
    }
    let trimmed = slug.trim_matches('-');
    if trimmed.is_empty() {
        "programme".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_handles_accents_and_spacing() {
        assert_eq!(slugify("Toitures Gagnon"), "toitures-gagnon");
        assert_eq!(slugify("Comptabilit\u{e9} Rive-Sud"), "comptabilit\u{e9}-rive-sud");
        assert_eq!(slugify("  "), "programme");
    }

    #[test]
    fn demo_profiles_cover_the_three_size_tiers() {
        let profiles = sample_establishments();
        let sizes: Vec<u32> = profiles.iter().map(|p| p.company_size).collect();

        assert!(sizes.iter().any(|size| *size < 20));
        assert!(sizes.iter().any(|size| (20..500).contains(size)));
        assert!(sizes.iter().any(|size| *size >= 500));
    }
}
