use std::fmt::Write as _;

use super::domain::PreventionProgram;

/// Project a program to a Markdown document.
///
/// Pure read-only projection: the identification header, every section as a
/// level-2 heading (subsections one level deeper), then the regulatory
/// annexes. The annexes are deliberately static text present in every
/// generated document regardless of content; they are part of the CNESST
/// document model, not derived data.
pub fn export_to_markdown(program: &PreventionProgram) -> String {
    let mut markdown = String::new();

    let _ = writeln!(markdown, "# {}", program.title);
    let _ = writeln!(markdown);
    let _ = writeln!(markdown, "**Entreprise :** {}", program.company_info.name);
    let _ = writeln!(
        markdown,
        "**Secteur d'activité :** {}",
        program.company_info.sector
    );
    if let Some(code) = program
        .company_info
        .scian_code
        .as_deref()
        .filter(|code| !code.trim().is_empty())
    {
        let _ = writeln!(markdown, "**Code SCIAN :** {code}");
    }
    let _ = writeln!(
        markdown,
        "**Taille de l'entreprise :** {} employés",
        program.company_info.size
    );
    let _ = writeln!(
        markdown,
        "**Date de génération :** {}",
        program.generated_date
    );
    let _ = writeln!(
        markdown,
        "**Dernière mise à jour :** {}",
        program.last_updated
    );
    let _ = writeln!(
        markdown,
        "**Référence légale :** LMRSST art. 90; LSST (RLRQ, c. S-2.1)"
    );
    let _ = writeln!(markdown);
    let _ = writeln!(
        markdown,
        "**Élaboré en collaboration avec :** _________________________"
    );
    let _ = writeln!(
        markdown,
        "**Signature de la direction :** _________________________"
    );
    let _ = writeln!(markdown);
    let _ = writeln!(markdown, "---");

    for section in &program.sections {
        let _ = writeln!(markdown);
        let _ = writeln!(markdown, "## {}", section.title);
        let _ = writeln!(markdown);
        let _ = writeln!(markdown, "{}", section.content);

        for subsection in &section.subsections {
            let _ = writeln!(markdown);
            let _ = writeln!(markdown, "### {}", subsection.title);
            let _ = writeln!(markdown);
            let _ = writeln!(markdown, "{}", subsection.content);
        }
    }

    let _ = writeln!(markdown);
    markdown.push_str(REGULATORY_ANNEXES);
    markdown
}

/// Fixed annexes appended to every exported program.
pub(crate) const REGULATORY_ANNEXES: &str = "\
---

## ANNEXE A - ÉCHÉANCIER DE MISE EN OEUVRE

| Mesure ou action | Responsable | Échéance | Statut |
|------------------|-------------|----------|--------|
|                  |             |          |        |
|                  |             |          |        |
|                  |             |          |        |

## ANNEXE B - SUIVI ET SURVEILLANCE

Liste de contrôle à compléter à chaque inspection :

- [ ] Inspection des lieux de travail réalisée et consignée
- [ ] Mesures correctives des inspections précédentes fermées
- [ ] Registre des incidents et accidents à jour (LMRSST art. 123)
- [ ] Registre des premiers secours à jour
- [ ] Suivi des recommandations du mécanisme de participation

## ANNEXE C - ÉQUIPEMENTS DE PROTECTION INDIVIDUELLE

| Poste ou tâche | EPI requis | Norme applicable | Date de remise |
|----------------|------------|------------------|----------------|
|                |            |                  |                |
|                |            |                  |                |

## ANNEXE D - PROGRAMME DE FORMATION

Formations minimales à consigner au registre :

- Accueil SST des nouveaux travailleurs
- SIMDUT 2015 pour les travailleurs exposés aux produits dangereux
- Secourisme en milieu de travail (nombre de secouristes selon le RNPSMT)
- Formation du comité SST ou de l'agent de liaison (LMRSST art. 27)

## ANNEXE E - APPROBATION ET TRANSMISSION

- [ ] Programme validé par le mécanisme de participation SST
- [ ] Programme signé par la direction
- [ ] Programme diffusé à l'ensemble des travailleurs
- [ ] Copie conservée et disponible pour la CNESST

**Signature de la direction :** _________________________
**Date :** _________________________

**Signature du représentant des travailleurs :** _________________________
**Date :** _________________________
";
