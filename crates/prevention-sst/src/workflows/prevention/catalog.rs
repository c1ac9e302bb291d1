//! Static lookup tables backing the generation pipeline.
//!
//! The tables are bundled data, not runtime fetches: risk lists keyed by
//! normalized sector name or exact SCIAN code, prevention measures keyed by
//! risk label, and the SCIAN action catalog. Lookups degrade to the
//! `"default"` entries instead of failing. Safe for unsynchronized concurrent
//! reads; callers only ever receive shared slices or fresh copies.

use super::domain::ScianAction;

pub(crate) const DEFAULT_KEY: &str = "default";

/// General risks by normalized (lowercase) sector label.
pub(crate) fn sector_risks(sector_key: &str) -> Option<&'static [&'static str]> {
    let risks: &'static [&'static str] = match sector_key {
        "construction" => &[
            "Chutes de hauteur",
            "Électrocution",
            "Écrasement par machinerie",
            "Exposition à l'amiante",
            "Bruit excessif",
            "Vibrations",
            "Poussières de silice",
            "Manutention manuelle",
        ],
        "manufacturier" => &[
            "Machinerie en mouvement",
            "Substances chimiques",
            "Bruit industriel",
            "Ergonomie - mouvements répétitifs",
            "Espaces confinés",
            "Équipements sous pression",
            "Rayonnements",
            "Manutention manuelle",
        ],
        "transport" => &[
            "Accidents de véhicules",
            "Manutention de marchandises",
            "Fatigue au volant",
            "Conditions météorologiques",
            "Exposition aux carburants",
            "Ergonomie - position assise prolongée",
            "Stress et pression temporelle",
        ],
        "services" => &[
            "Troubles musculo-squelettiques",
            "Stress psychosocial",
            "Qualité de l'air intérieur",
            "Ergonomie des postes de travail",
            "Violence en milieu de travail",
            "Glissades et chutes de plain-pied",
        ],
        DEFAULT_KEY => default_sector_risks(),
        _ => return None,
    };
    Some(risks)
}

/// Fallback risk set applied when the sector label matches no table key.
pub(crate) fn default_sector_risks() -> &'static [&'static str] {
    &[
        "Incendies et explosions",
        "Premiers secours",
        "Évacuation d'urgence",
        "Équipements de protection individuelle",
        "Formation et sensibilisation",
        "Inspection des lieux de travail",
    ]
}

/// Specialized risks by exact SCIAN code. Unknown codes yield `None` and the
/// identification step silently skips them.
pub(crate) fn scian_specific_risks(code: &str) -> Option<&'static [&'static str]> {
    let risks: &'static [&'static str] = match code {
        // Construction spécialisée
        "2361" => &[
            "Chutes de hauteur (toitures résidentielles)",
            "Charpente et coffrage",
            "Couverture",
            "Échafaudages",
        ],
        "2362" => &["Plomberie", "Soudage", "Espaces confinés", "Gaz et vapeurs"],
        "2383" => &[
            "Électricité haute tension",
            "Arc électrique",
            "Travail sous tension",
        ],
        // Fabrication alimentaire
        "3111" => &[
            "Machines de boucherie",
            "Températures froides",
            "Lames et couteaux",
            "Sols glissants",
        ],
        "3112" => &["Poussières de grain", "Espaces confinés", "Machinerie agricole"],
        // Fabrication métallique
        "3321" => &["Métaux en fusion", "Radiations thermiques", "Monoxyde de carbone"],
        "3322" => &["Outils de coupe", "Copeaux métalliques", "Fluides de coupe"],
        // Transport
        "4841" => &[
            "Marchandises dangereuses",
            "Manutention lourde",
            "Conduite longue distance",
        ],
        "4842" => &[
            "Entrepôt frigorifique",
            "Chariots élévateurs",
            "Stockage en hauteur",
        ],
        // Services de santé
        "6211" => &["Agents pathogènes", "Aiguilles souillées", "Radiations médicales"],
        "6212" => &[
            "Produits pharmaceutiques",
            "Chimiothérapie",
            "Manipulation précise",
        ],
        // Restauration
        "7221" => &[
            "Surfaces chaudes",
            "Huiles de friture",
            "Sols glissants",
            "Coupures",
        ],
        "7222" => &[
            "Service rapide",
            "Stress temporel",
            "Brûlures",
            "Équipement électrique",
        ],
        _ => return None,
    };
    Some(risks)
}

/// Prevention measures by risk label, with a generic fallback list.
///
/// A risk without a dedicated entry is not an error: it contributes the
/// default measures, so the assembled document is complete either way.
pub(crate) fn measures_for_risk(risk: &str) -> &'static [&'static str] {
    match risk {
        "Chutes de hauteur" | "Chutes de hauteur (toitures résidentielles)" => &[
            "Installation de garde-corps conformes",
            "Utilisation de harnais de sécurité",
            "Formation sur le travail en hauteur",
            "Inspection quotidienne des équipements",
            "Procédures de travail sécuritaires",
        ],
        "Électrocution" | "Électricité haute tension" => &[
            "Cadenassage des sources d'énergie",
            "Vérification de l'absence de tension",
            "Utilisation d'équipements isolés",
            "Formation électrique spécialisée",
            "Inspection des installations électriques",
        ],
        "Machinerie en mouvement" => &[
            "Installation de protecteurs fixes",
            "Dispositifs d'arrêt d'urgence",
            "Formation sur la sécurité machine",
            "Procédures de cadenassage",
            "Maintenance préventive régulière",
        ],
        "Substances chimiques" => &[
            "Fiches de données de sécurité (FDS)",
            "Équipements de protection respiratoire",
            "Ventilation adéquate",
            "Formation SIMDUT",
            "Procédures de déversement",
        ],
        "Bruit excessif" | "Bruit industriel" => &[
            "Mesurage périodique des niveaux sonores",
            "Encoffrement des sources de bruit",
            "Protecteurs auditifs adaptés",
            "Rotation des postes exposés",
        ],
        "Troubles musculo-squelettiques" | "Manutention manuelle" => &[
            "Évaluation ergonomique des postes",
            "Aides mécaniques à la manutention",
            "Formation sur les techniques de levage",
            "Aménagement des postes de travail",
        ],
        "Espaces confinés" => &[
            "Permis d'entrée en espace clos",
            "Détection des gaz avant l'entrée",
            "Surveillant à l'extérieur en tout temps",
            "Plan de sauvetage spécifique",
        ],
        _ => &[
            "Évaluation régulière des risques",
            "Formation du personnel",
            "Supervision adéquate",
            "Équipements de protection appropriés",
            "Procédures d'urgence",
        ],
    }
}

/// Full static catalog of recommended SCIAN actions.
///
/// Catalog order is meaningful: selection preserves it and prioritization
/// falls back to it on score ties.
pub fn scian_action_catalog() -> Vec<ScianAction> {
    vec![
        ScianAction {
            id: "const-chutes-inventaire",
            sector_category: "Construction",
            program_category: "Identification des risques",
            risk: "Chutes de hauteur",
            action: "Inventorier les travaux en hauteur et les points d'ancrage disponibles",
            goal: "Connaître chaque situation de travail à plus de 3 mètres avant d'ouvrir un chantier",
            standards: vec!["LSST art. 51", "CSTC 2.9.1"],
            steps: vec![
                "Recenser les tâches exécutées en hauteur par corps de métier",
                "Cartographier les points d'ancrage et garde-corps existants",
                "Consigner l'inventaire au registre de chantier",
            ],
        },
        ScianAction {
            id: "const-chutes-protection",
            sector_category: "Construction",
            program_category: "Contrôle du risque",
            risk: "Chutes de hauteur",
            action: "Installer des protections collectives contre les chutes",
            goal: "Éliminer le recours au harnais lorsque des garde-corps suffisent",
            standards: vec!["CSTC 2.9.2", "CSA Z259"],
            steps: vec![
                "Prioriser garde-corps et filets avant la protection individuelle",
                "Inspecter les installations à chaque quart",
                "Documenter les dérogations et les mesures compensatoires",
            ],
        },
        ScianAction {
            id: "const-electrisation",
            sector_category: "Construction",
            program_category: "Contrôle du risque",
            risk: "Électrocution près des lignes électriques",
            action: "Encadrer les travaux à proximité des lignes sous tension",
            goal: "Maintenir les distances d'approche minimales en tout temps",
            standards: vec!["CSTC 5.2.1", "LSST art. 51"],
            steps: vec![
                "Identifier les lignes aériennes avant le positionnement des équipements",
                "Convenir d'une entente écrite avec le distributeur au besoin",
                "Désigner un signaleur pour les manoeuvres à risque",
            ],
        },
        ScianAction {
            id: "const-ecrasement-excavation",
            sector_category: "Construction",
            program_category: "Contrôle du risque",
            risk: "Écrasement lors de travaux d'excavation",
            action: "Étançonner les tranchées et contrôler les accès",
            goal: "Empêcher tout effondrement sur un travailleur en fouille",
            standards: vec!["CSTC 3.15"],
            steps: vec![
                "Évaluer la nature du sol avant le creusage",
                "Installer l'étançonnement requis au-delà de 1,2 mètre",
                "Éloigner les déblais et la machinerie des parois",
            ],
        },
        ScianAction {
            id: "manuf-cadenassage",
            sector_category: "Fabrication et manufacturier",
            program_category: "Contrôle du risque",
            risk: "Écrasement par machinerie en mouvement",
            action: "Déployer un programme de cadenassage complet",
            goal: "Garantir l'énergie zéro lors des interventions de maintenance",
            standards: vec!["RSST art. 188.2", "CSA Z460"],
            steps: vec![
                "Répertorier les sources d'énergie de chaque équipement",
                "Rédiger les fiches de cadenassage par machine",
                "Former et auditer les personnes autorisées",
            ],
        },
        ScianAction {
            id: "manuf-bruit-mesurage",
            sector_category: "Fabrication et manufacturier",
            program_category: "Hygiène du travail",
            risk: "Bruit industriel",
            action: "Mesurer l'exposition au bruit par poste de travail",
            goal: "Ramener l'exposition quotidienne sous 85 dBA",
            standards: vec!["RSST art. 131", "CSA Z107.56"],
            steps: vec![
                "Établir la cartographie sonore de l'usine",
                "Prioriser les réductions à la source",
                "Réévaluer après chaque modification d'équipement",
            ],
        },
        ScianAction {
            id: "manuf-simdut",
            sector_category: "Fabrication et manufacturier",
            program_category: "Hygiène du travail",
            risk: "Exposition aux substances chimiques",
            action: "Tenir l'inventaire SIMDUT et les fiches de données de sécurité à jour",
            goal: "Assurer l'information complète sur chaque produit dangereux utilisé",
            standards: vec!["LPD", "RSST art. 62"],
            steps: vec![
                "Inventorier les produits contrôlés par département",
                "Vérifier l'étiquetage des contenants de transvasement",
                "Former les travailleurs exposés au SIMDUT 2015",
            ],
        },
        ScianAction {
            id: "manuf-espaces-clos",
            sector_category: "Fabrication et manufacturier",
            program_category: "Identification des risques",
            risk: "Asphyxie en espace clos",
            action: "Recenser et identifier tous les espaces clos de l'établissement",
            goal: "Qu'aucune entrée en espace clos ne survienne sans permis",
            standards: vec!["RSST art. 297"],
            steps: vec![
                "Inventorier réservoirs, fosses, silos et conduits",
                "Afficher l'identification à chaque point d'accès",
                "Établir le registre des entrées",
            ],
        },
        ScianAction {
            id: "trans-fatigue",
            sector_category: "Transport et entreposage",
            program_category: "Identification des risques",
            risk: "Fatigue au volant",
            action: "Suivre les heures de conduite et les périodes de repos",
            goal: "Prévenir les accidents liés à la fatigue des chauffeurs",
            standards: vec!["Règlement sur les heures de conduite"],
            steps: vec![
                "Analyser les feuilles de route des 12 derniers mois",
                "Repérer les trajets dépassant les seuils de repos",
                "Ajuster la planification des livraisons",
            ],
        },
        ScianAction {
            id: "trans-arrimage",
            sector_category: "Transport et entreposage",
            program_category: "Contrôle du risque",
            risk: "Écrasement lors du chargement",
            action: "Normaliser l'arrimage et la circulation aux quais",
            goal: "Séparer piétons et chariots élévateurs dans les zones de chargement",
            standards: vec!["RSST art. 280", "Norme 10 CCMTA"],
            steps: vec![
                "Tracer les corridors piétons aux quais",
                "Installer les butoirs et systèmes de retenue de remorque",
                "Vérifier l'arrimage avant chaque départ",
            ],
        },
        ScianAction {
            id: "serv-tms-postes",
            sector_category: "Services",
            program_category: "Identification des risques",
            risk: "Troubles musculo-squelettiques",
            action: "Dépister les postes à risque de TMS",
            goal: "Cibler les postes de travail nécessitant une correction ergonomique",
            standards: vec!["LSST art. 51"],
            steps: vec![
                "Passer en revue les déclarations de douleur des 24 derniers mois",
                "Appliquer la grille de dépistage aux postes identifiés",
                "Prioriser les corrections au plan d'action",
            ],
        },
        ScianAction {
            id: "serv-violence",
            sector_category: "Services",
            program_category: "Contrôle du risque",
            risk: "Violence en milieu de travail",
            action: "Mettre en place une procédure de prévention de la violence",
            goal: "Encadrer les situations de violence et de harcèlement au travail",
            standards: vec!["LSST art. 51", "LNT art. 81.19"],
            steps: vec![
                "Adopter une politique interne et la diffuser",
                "Former les gestionnaires à la détection précoce",
                "Établir le mécanisme de signalement confidentiel",
            ],
        },
        ScianAction {
            id: "sante-piqures",
            sector_category: "Santé et services sociaux",
            program_category: "Contrôle du risque",
            risk: "Piqûres d'aiguilles souillées",
            action: "Convertir aux dispositifs médicaux sécuritaires",
            goal: "Éliminer les piqûres accidentelles lors des soins",
            standards: vec!["RSST art. 49", "Guide CNESST piqûres"],
            steps: vec![
                "Substituer les aiguilles standards par des modèles rétractables",
                "Installer des contenants rigides à portée de main",
                "Consigner chaque exposition au registre",
            ],
        },
        ScianAction {
            id: "resto-brulures",
            sector_category: "Restauration et hébergement",
            program_category: "Identification des risques",
            risk: "Brûlures et surfaces chaudes",
            action: "Repérer les sources de brûlures en cuisine",
            goal: "Réduire les brûlures aux postes de friture et de plonge",
            standards: vec!["RSST art. 166"],
            steps: vec![
                "Inspecter les équipements de cuisson et la plomberie vapeur",
                "Baliser les zones de dépôt des contenants chauds",
                "Fournir les gants et tabliers thermiques requis",
            ],
        },
        ScianAction {
            id: "resto-chutes-plancher",
            sector_category: "Restauration et hébergement",
            program_category: "Contrôle du risque",
            risk: "Glissades et chutes de plain-pied",
            action: "Contrôler l'état des planchers et le déversement de graisses",
            goal: "Supprimer les glissades dans les aires de service",
            standards: vec!["RSST art. 15"],
            steps: vec![
                "Établir la routine de nettoyage des planchers par quart",
                "Imposer les chaussures antidérapantes en cuisine",
                "Corriger les seuils et tapis endommagés",
            ],
        },
        ScianAction {
            id: "general-fatigue-horaires",
            sector_category: "Tous secteurs",
            program_category: "Hygiène du travail",
            risk: "Fatigue liée aux horaires prolongés",
            action: "Évaluer l'organisation des horaires de travail",
            goal: "Limiter les quarts prolongés et le cumul d'heures supplémentaires",
            standards: vec!["LNT art. 59.0.1"],
            steps: vec![
                "Compiler les heures travaillées par personne sur 8 semaines",
                "Identifier les dépassements récurrents",
                "Réviser la rotation des équipes",
            ],
        },
    ]
}
