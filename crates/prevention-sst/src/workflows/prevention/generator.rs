use std::fmt::Write as _;

use chrono::{Local, NaiveDate};

use super::actions::{get_scian_actions, prioritize_scian_actions};
use super::domain::{CommitteeStructure, CompanyInfo, CompanyProfile, PreventionProgram, ProgramSection, ScianAction};
use super::risks::{identify_risks_by_scian, measures_for_risks};

const MAX_LISTED_RISKS: usize = 15;
const MAX_LISTED_MEASURES: usize = 20;
const MAX_PRIMARY_ACTIONS: usize = 8;
const MAX_APPENDIX_ACTIONS: usize = 12;

/// Assembles the nine-section prevention program from a company profile and
/// the static catalogs.
///
/// The pipeline is a pure transformation: identical profiles and an
/// identical date stamp produce identical programs. No input combination
/// fails; degraded profiles yield default-content documents.
pub struct PreventionProgramGenerator;

impl PreventionProgramGenerator {
    pub fn generate_program(params: &CompanyProfile) -> PreventionProgram {
        Self::generate_program_on(params, Local::now().date_naive())
    }

    /// Date-injected variant backing [`Self::generate_program`]; the explicit
    /// date keeps generation reproducible under test.
    pub fn generate_program_on(params: &CompanyProfile, today: NaiveDate) -> PreventionProgram {
        let generated_date = today.format("%Y-%m-%d").to_string();

        let derived_risks =
            identify_risks_by_scian(params.scian_code.as_deref(), Some(&params.sector));
        let risks = merge_risks(&params.identified_risks, &derived_risks);

        let mut measures: Vec<String> = params.existing_measures.clone();
        measures.extend(
            measures_for_risks(derived_risks.iter().copied())
                .into_iter()
                .map(str::to_string),
        );

        let actions = prioritize_scian_actions(
            get_scian_actions(Some(&params.sector), Some(params.company_size)),
            Some(&params.sector),
            Some(params.company_size),
        );

        let sections = vec![
            commitment_section(params),
            policy_section(params),
            risk_identification_section(params, &risks),
            prevention_measures_section(&measures),
            scian_actions_section(&actions, params.company_size),
            training_section(params),
            participation_section(params.company_size),
            monitoring_section(),
            emergency_section(),
        ];

        PreventionProgram {
            title: format!("Programme de prévention - {}", params.company_name),
            company_info: CompanyInfo {
                name: params.company_name.clone(),
                sector: params.sector.clone(),
                scian_code: params.scian_code.clone(),
                size: params.company_size,
            },
            sections,
            last_updated: generated_date.clone(),
            generated_date,
        }
    }
}

/// Caller-supplied risks first, derived risks after, first-seen dedup.
fn merge_risks(supplied: &[String], derived: &[&'static str]) -> Vec<String> {
    let mut merged: Vec<String> = Vec::with_capacity(supplied.len() + derived.len());
    for risk in supplied.iter().map(String::as_str).chain(derived.iter().copied()) {
        if !merged.iter().any(|known| known == risk) {
            merged.push(risk.to_string());
        }
    }
    merged
}

fn commitment_section(params: &CompanyProfile) -> ProgramSection {
    let mut content = String::new();
    let _ = writeln!(
        content,
        "La direction de {} s'engage formellement à mettre en place et à maintenir un programme de prévention conforme à la Loi sur la santé et la sécurité du travail (LSST) et à la LMRSST.",
        params.company_name
    );
    let _ = writeln!(content);
    let _ = writeln!(content, "**Identification de l'établissement :**");
    let _ = writeln!(content, "- Secteur d'activité : {}", display_sector(&params.sector));
    if let Some(code) = params.scian_code.as_deref().filter(|code| !code.trim().is_empty()) {
        let _ = writeln!(content, "- Code SCIAN : {code}");
    }
    let _ = writeln!(content, "- Effectif : {} travailleurs", params.company_size);
    if !params.main_activities.is_empty() {
        let _ = writeln!(content);
        let _ = writeln!(content, "**Principales activités :**");
        for activity in &params.main_activities {
            let _ = writeln!(content, "- {activity}");
        }
    }
    let _ = writeln!(content);
    let _ = writeln!(content, "**Objectifs du programme :**");
    let _ = writeln!(
        content,
        "- Éliminer à la source les dangers pour la santé, la sécurité et l'intégrité physique des travailleurs"
    );
    let _ = writeln!(
        content,
        "- Assurer la formation et l'information nécessaires aux travailleurs"
    );
    let _ = writeln!(content, "- Maintenir un milieu de travail sécuritaire et sain");
    let _ = write!(
        content,
        "- Respecter les exigences réglementaires en matière de SST"
    );

    ProgramSection {
        title: "ENGAGEMENT DE LA DIRECTION".to_string(),
        content,
        subsections: Vec::new(),
    }
}

fn policy_section(params: &CompanyProfile) -> ProgramSection {
    let mut content = String::new();
    let _ = writeln!(
        content,
        "{} reconnaît que la santé et la sécurité de ses employés constituent une priorité et une responsabilité partagée.",
        params.company_name
    );
    let _ = writeln!(content);
    let _ = writeln!(content, "**Engagements :**");
    let _ = writeln!(content, "- Fournir un environnement de travail sécuritaire et sain");
    let _ = writeln!(content, "- Respecter toutes les lois et tous les règlements applicables");
    let _ = writeln!(
        content,
        "- Impliquer les travailleurs dans l'identification et la résolution des problèmes de SST"
    );
    let _ = writeln!(
        content,
        "- Fournir les ressources nécessaires au maintien de conditions de travail sécuritaires"
    );
    let _ = writeln!(content);
    let _ = writeln!(content, "**Responsabilités :**");
    let _ = writeln!(content, "- Direction : leadership, ressources, conformité");
    let _ = writeln!(content, "- Superviseurs : application, formation, surveillance");
    let _ = write!(
        content,
        "- Travailleurs : respect des règles, signalement des dangers, participation active"
    );

    ProgramSection {
        title: "POLITIQUE DE SANTÉ ET DE SÉCURITÉ DU TRAVAIL".to_string(),
        content,
        subsections: Vec::new(),
    }
}

fn risk_identification_section(params: &CompanyProfile, risks: &[String]) -> ProgramSection {
    let mut content = String::new();
    let _ = writeln!(content, "**Méthodologie :**");
    let _ = writeln!(content, "- Inspection des lieux de travail");
    let _ = writeln!(content, "- Analyse des tâches et des postes de travail");
    let _ = writeln!(content, "- Consultation des travailleurs et du mécanisme de participation");
    let _ = writeln!(content, "- Analyse des accidents et incidents déclarés");
    let _ = writeln!(content);
    let _ = writeln!(
        content,
        "**Secteur analysé :** {}{}",
        display_sector(&params.sector),
        params
            .scian_code
            .as_deref()
            .filter(|code| !code.trim().is_empty())
            .map(|code| format!(" (code SCIAN {code})"))
            .unwrap_or_default()
    );
    let _ = writeln!(content);
    let _ = writeln!(content, "**Risques identifiés :**");
    for (index, risk) in risks.iter().take(MAX_LISTED_RISKS).enumerate() {
        let _ = writeln!(content, "{}. {risk}", index + 1);
    }

    ProgramSection {
        title: "IDENTIFICATION ET ANALYSE DES RISQUES".to_string(),
        content: content.trim_end().to_string(),
        subsections: Vec::new(),
    }
}

fn prevention_measures_section(measures: &[String]) -> ProgramSection {
    let mut content = String::new();
    let _ = writeln!(content, "**Hiérarchie des mesures de contrôle :**");
    let _ = writeln!(content, "1. Élimination du danger à la source");
    let _ = writeln!(content, "2. Substitution par un procédé moins dangereux");
    let _ = writeln!(content, "3. Contrôles techniques (isolation, ventilation)");
    let _ = writeln!(content, "4. Contrôles administratifs (procédures, formation)");
    let _ = writeln!(content, "5. Équipements de protection individuelle (EPI)");
    let _ = writeln!(content);
    let _ = writeln!(content, "**Mesures retenues :**");
    for (index, measure) in measures.iter().take(MAX_LISTED_MEASURES).enumerate() {
        let _ = writeln!(content, "{}. {measure}", index + 1);
    }

    ProgramSection {
        title: "MESURES DE PRÉVENTION ET DE CONTRÔLE".to_string(),
        content: content.trim_end().to_string(),
        subsections: Vec::new(),
    }
}

fn scian_actions_section(actions: &[ScianAction], company_size: u32) -> ProgramSection {
    let mut content = String::new();
    if actions.is_empty() {
        let _ = write!(
            content,
            "Aucune action sectorielle du catalogue SCIAN ne correspond au profil fourni; les mesures générales de la section précédente s'appliquent."
        );
    } else {
        let _ = writeln!(
            content,
            "Actions prioritaires retenues du catalogue SCIAN, par ordre de priorité :"
        );
        for (index, action) in actions.iter().take(MAX_PRIMARY_ACTIONS).enumerate() {
            let _ = writeln!(content);
            render_action(&mut content, index + 1, action);
        }
    }

    let mut subsections = Vec::new();
    if company_size >= 500 && actions.len() > MAX_PRIMARY_ACTIONS {
        let mut appendix = String::new();
        let _ = writeln!(
            appendix,
            "Actions supplémentaires applicables aux grandes entreprises :"
        );
        for (offset, action) in actions
            .iter()
            .skip(MAX_PRIMARY_ACTIONS)
            .take(MAX_APPENDIX_ACTIONS - MAX_PRIMARY_ACTIONS)
            .enumerate()
        {
            let _ = writeln!(appendix);
            render_action(&mut appendix, MAX_PRIMARY_ACTIONS + offset + 1, action);
        }
        subsections.push(ProgramSection {
            title: "Actions complémentaires - grande entreprise".to_string(),
            content: appendix.trim_end().to_string(),
            subsections: Vec::new(),
        });
    }

    ProgramSection {
        title: "ACTIONS SPÉCIFIQUES AU SECTEUR SCIAN".to_string(),
        content: content.trim_end().to_string(),
        subsections,
    }
}

fn render_action(buffer: &mut String, rank: usize, action: &ScianAction) {
    let _ = writeln!(buffer, "**{rank}. {}**", action.action);
    let _ = writeln!(buffer, "- Risque visé : {}", action.risk);
    let _ = writeln!(buffer, "- But : {}", action.goal);
    let _ = writeln!(buffer, "- Référentiels : {}", action.standards.join(", "));
    let _ = writeln!(buffer, "- Étapes :");
    for (index, step) in action.steps.iter().enumerate() {
        let _ = writeln!(buffer, "  {}. {step}", index + 1);
    }
}

fn training_section(params: &CompanyProfile) -> ProgramSection {
    let mut content = String::new();
    let _ = writeln!(content, "**Formation d'accueil (nouveaux travailleurs) :**");
    let _ = writeln!(content, "- Politique et procédures SST de l'entreprise");
    let _ = writeln!(
        content,
        "- Risques propres au secteur {}",
        display_sector(&params.sector)
    );
    let _ = writeln!(content, "- Utilisation des équipements de protection");
    let _ = writeln!(content, "- Procédures d'urgence");
    let _ = writeln!(content);
    let _ = writeln!(content, "**Formation continue :**");
    let _ = writeln!(content, "- Mise à jour des connaissances SST");
    let _ = writeln!(content, "- Formation sur les nouveaux équipements et procédés");
    let _ = writeln!(content, "- Formation du mécanisme de participation (LMRSST art. 27)");
    let _ = writeln!(content);
    let _ = write!(
        content,
        "Toutes les formations sont consignées au registre de formation et archivées selon les exigences réglementaires."
    );

    ProgramSection {
        title: "FORMATION ET INFORMATION".to_string(),
        content,
        subsections: Vec::new(),
    }
}

fn participation_section(company_size: u32) -> ProgramSection {
    let structure = CommitteeStructure::for_size(company_size);
    let mut content = String::new();

    match structure {
        CommitteeStructure::Committee {
            representatives_per_side,
        } => {
            let _ = writeln!(
                content,
                "Un comité de santé et de sécurité est constitué conformément à la LMRSST (art. 101)."
            );
            let _ = writeln!(content);
            let _ = writeln!(content, "**Composition paritaire :**");
            let _ = writeln!(
                content,
                "- Représentants de l'employeur : {representatives_per_side}"
            );
            let _ = writeln!(
                content,
                "- Représentants des travailleurs : {representatives_per_side}"
            );
            let _ = writeln!(content);
            let _ = writeln!(content, "**Fonctions :**");
            let _ = writeln!(content, "- Participer à l'identification et à l'analyse des risques");
            let _ = writeln!(content, "- Valider le programme de prévention et son suivi");
            let _ = write!(content, "- Recevoir et traiter les suggestions et plaintes SST");
        }
        CommitteeStructure::LiaisonAgent => {
            let _ = writeln!(
                content,
                "Un agent de liaison en santé et sécurité est désigné conformément à la LMRSST (art. 101)."
            );
            let _ = writeln!(content);
            let _ = writeln!(content, "**Responsabilités de l'agent de liaison :**");
            let _ = writeln!(
                content,
                "- Recevoir les suggestions et plaintes relatives à la santé et sécurité"
            );
            let _ = writeln!(content, "- Accompagner l'inspecteur lors de ses visites");
            let _ = writeln!(
                content,
                "- Identifier les situations pouvant être source de danger"
            );
            let _ = write!(content, "- Transmettre les recommandations à l'employeur");
        }
    }

    ProgramSection {
        title: structure.section_title().to_string(),
        content,
        subsections: Vec::new(),
    }
}

fn monitoring_section() -> ProgramSection {
    let mut content = String::new();
    let _ = writeln!(content, "**Inspections :**");
    let _ = writeln!(content, "- Inspections quotidiennes par les superviseurs");
    let _ = writeln!(content, "- Inspections mensuelles des lieux de travail");
    let _ = writeln!(content, "- Vérification périodique des équipements critiques");
    let _ = writeln!(content);
    let _ = writeln!(content, "**Indicateurs suivis :**");
    let _ = writeln!(content, "- Taux de fréquence des accidents");
    let _ = writeln!(content, "- Nombre de presqu'accidents signalés");
    let _ = writeln!(content, "- Participation aux formations");
    let _ = writeln!(content);
    let _ = write!(
        content,
        "Le programme est révisé annuellement ou lors de tout changement significatif des activités, des équipements ou de la réglementation."
    );

    ProgramSection {
        title: "SURVEILLANCE ET ÉVALUATION".to_string(),
        content,
        subsections: Vec::new(),
    }
}

fn emergency_section() -> ProgramSection {
    let mut content = String::new();
    let _ = writeln!(content, "**Procédures d'évacuation :**");
    let _ = writeln!(content, "- Plans d'évacuation affichés et points de rassemblement identifiés");
    let _ = writeln!(content, "- Responsables d'évacuation désignés et exercices réguliers");
    let _ = writeln!(content);
    let _ = writeln!(content, "**Premiers secours :**");
    let _ = writeln!(content, "- Secouristes certifiés disponibles sur chaque quart");
    let _ = writeln!(content, "- Trousses de premiers secours complètes et accessibles");
    let _ = writeln!(content);
    let _ = writeln!(content, "**Numéros d'urgence :**");
    let _ = writeln!(content, "- Urgences : 911");
    let _ = writeln!(content, "- CNESST (urgence 24 h) : 1 844 838-0808");
    let _ = writeln!(content, "- Centre antipoison du Québec : 1 800 463-5060");
    let _ = write!(content, "- Info-Santé : 811");

    ProgramSection {
        title: "MESURES D'URGENCE".to_string(),
        content,
        subsections: Vec::new(),
    }
}

fn display_sector(sector: &str) -> &str {
    let trimmed = sector.trim();
    if trimmed.is_empty() {
        "non précisé"
    } else {
        trimmed
    }
}
