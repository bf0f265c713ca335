//! Marketing copy rendered by the pages
//!
//! Plain constants: nothing here is derived from the catalog.

/// A titled text block (value, pillar, service, FAQ entry...)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub text: &'static str,
}

const fn card(title: &'static str, text: &'static str) -> Card {
    Card { title, text }
}

/// Carousel slide: image reference and its caption
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slide {
    pub image: &'static str,
    pub caption: &'static str,
}

pub const FOOTER: &str = "© SL Automotive — Stanley Racing Academy";

// ============================================================================
// Home
// ============================================================================

pub mod home {
    use super::{Card, Slide, card};

    pub const KICKER: &str = "Stanley Racing Academy";
    pub const TITLE: &str =
        "La première école de pilotage de niveau international en Afrique de l’Ouest";
    pub const LEAD: &str = "Une académie automobile premium au Sénégal, dirigée par un formateur \
                            issu des circuits de Formule 1. De la découverte au haut niveau, selon \
                            des standards européens.";
    pub const BADGES: [&str; 3] = [
        "Formateur certifié F1",
        "Standards internationaux",
        "Places limitées",
    ];

    pub const HERO_SLIDES: [Slide; 7] = [
        Slide { image: "/slide-2.jpg", caption: "Stanley Racing Academy circuit Senegal" },
        Slide { image: "/slide-8.webp", caption: "Motorsport training Africa" },
        Slide { image: "/slide-11.webp", caption: "Motorsport training Africa" },
        Slide { image: "/slide-7.jpg", caption: "Racing academy karting" },
        Slide { image: "/slide-5.jpg", caption: "Motorsport training Africa" },
        Slide { image: "/slide-6.jpg", caption: "Motorsport training Africa" },
        Slide { image: "/slide-14.webp", caption: "Motorsport training Africa" },
    ];

    pub const ACADEMY: [&str; 2] = [
        "Stanley Racing Academy structure la formation au sport automobile en Afrique de l’Ouest \
         autour de standards internationaux de sécurité, de pédagogie et de performance.",
        "Notre objectif : former les pilotes de demain, du premier tour de piste à la compétition \
         professionnelle, tout en développant un écosystème local durable.",
    ];

    pub const FOUNDER: [&str; 2] = [
        "Formé sur des circuits européens de Formule 1, Stanley Lishou apporte une expertise \
         internationale unique en Afrique de l’Ouest.",
        "Son ambition : transmettre un savoir-faire de haut niveau, structurer une filière \
         professionnelle et créer des opportunités durables pour les talents locaux.",
    ];

    pub const INFRASTRUCTURE: [&str; 2] = [
        "Située à proximité de Dakar, au Lac Rose, l’académie s’appuie sur des infrastructures \
         évolutives intégrant piste de karting, zones d’entraînement et futurs développements \
         aux normes internationales.",
        "La sécurité, la progression pédagogique et l’expérience pilote sont au cœur de la \
         conception du site.",
    ];

    /// Training programme preview opened in the home modal
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Programme {
        pub level: &'static str,
        pub card: Card,
        pub details: [&'static str; 4],
    }

    pub const PROGRAMMES: [Programme; 3] = [
        Programme {
            level: "Level 1",
            card: card(
                "Découverte & Initiation",
                "Karting découverte, premières expériences de pilotage et bases de la sécurité \
                 pour débutants et familles.",
            ),
            details: [
                "Objectif : découvrir le pilotage en toute sécurité.",
                "Durée : 1 à 2 jours.",
                "Public : débutants, familles, jeunes pilotes.",
                "Prix : sur demande.",
            ],
        },
        Programme {
            level: "Level 2",
            card: card(
                "Pilotage avancé",
                "Techniques de pilotage sportif, trajectoires, maîtrise du freinage et \
                 progression vers la performance.",
            ),
            details: [
                "Objectif : améliorer les performances et la maîtrise du véhicule.",
                "Durée : 2 à 3 jours.",
                "Public : pilotes amateurs.",
                "Prix : sur demande.",
            ],
        },
        Programme {
            level: "Level 3",
            card: card(
                "Professionnel & Compétition",
                "Préparation de pilotes professionnels, coaching compétition et accompagnement \
                 vers les carrières du sport automobile.",
            ),
            details: [
                "Objectif : préparer à la compétition professionnelle.",
                "Durée : programme long.",
                "Public : pilotes confirmés.",
                "Prix : sur sélection.",
            ],
        },
    ];
}

// ============================================================================
// Academy
// ============================================================================

pub mod academy {
    use super::{Card, card};

    pub const INTRO: &str = "Une institution dédiée à la formation, à la transmission et à la \
                             structuration du sport automobile en Afrique de l’Ouest, selon des \
                             standards internationaux.";

    pub const VISION: &str = "Faire de Stanley Racing Academy le hub de référence du sport \
                              automobile en Afrique de l’Ouest, capable de former des pilotes, des \
                              encadrants et des professionnels selon des standards reconnus à \
                              l’international.";

    pub const MISSION: &str = "Structurer des parcours de formation progressifs, accessibles et \
                               exigeants, alliant sécurité, performance, pédagogie moderne et \
                               transmission d’une culture du sport automobile durable.";

    pub const VALUES: [Card; 4] = [
        card("Sécurité", "Priorité absolue à la protection des pilotes, des équipes et du public."),
        card(
            "Excellence",
            "Standards techniques et pédagogiques inspirés des meilleures pratiques internationales.",
        ),
        card(
            "Passion",
            "Transmettre l’amour du pilotage et du sport automobile à tous les niveaux.",
        ),
        card("Transmission", "Former durablement et créer une filière locale de compétences."),
    ];

    pub const MODEL: [Card; 4] = [
        card(
            "Progression structurée",
            "Un parcours clair du premier contact avec le pilotage jusqu’à la préparation \
             professionnelle.",
        ),
        card(
            "Séparation loisir / performance",
            "Des programmes distincts pour le loisir, le perfectionnement et la compétition.",
        ),
        card(
            "Standards européens adaptés",
            "Méthodologies inspirées des circuits européens, adaptées au contexte africain.",
        ),
        card(
            "Encadrement certifié",
            "Supervision par des professionnels formés sur des circuits internationaux.",
        ),
    ];

    pub const AUDIENCES: [Card; 3] = [
        card(
            "Jeunes pilotes & particuliers",
            "Initiation, découverte et accompagnement des talents dès les premiers niveaux.",
        ),
        card(
            "Passionnés & amateurs confirmés",
            "Perfectionnement, stages avancés et préparation à la compétition amateur.",
        ),
        card(
            "Entreprises & institutions",
            "Programmes dédiés au team building, à la formation et aux événements professionnels.",
        ),
    ];

    pub const SAFETY: &str = "La sécurité est au cœur de notre approche. Chaque programme est \
                              conçu selon des protocoles stricts, un encadrement qualifié et des \
                              équipements adaptés, inspirés des standards internationaux du sport \
                              automobile.";

    pub const LONG_TERM: &str = "Stanley Racing Academy est conçue comme une plateforme scalable, \
                                 avec une montée en gamme progressive, un développement régional \
                                 en Afrique de l’Ouest et des partenariats internationaux pour \
                                 structurer durablement l’écosystème du sport automobile.";
}

// ============================================================================
// Formations
// ============================================================================

pub mod formations {
    use super::{Card, card};

    pub const INTRO: &str = "Le pilotage n’est pas un loisir. C’est une discipline. Nos parcours \
                             sont pensés pour transmettre la maîtrise — du premier tour de piste \
                             à la préparation professionnelle.";

    pub const TAGS: [&str; 4] = [
        "Karting",
        "Pilotage automobile",
        "Compétition",
        "Métiers du sport auto",
    ];

    /// Reservation link carried by every offer card
    pub const OFFER_LINK: &str = "/reserver?product=performance-45&step=slots";

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Offer {
        pub title: &'static str,
        pub tagline: &'static str,
        pub price: &'static str,
        pub vehicles: &'static str,
        pub includes: &'static str,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Programme {
        pub id: &'static str,
        pub badge: &'static str,
        pub title: &'static str,
        pub promise: &'static str,
        pub price_from: &'static str,
        pub vehicles: &'static str,
        pub offers: &'static [Offer],
    }

    pub const LEVELS: [Programme; 3] = [
        Programme {
            id: "niveau-1",
            badge: "Niveau 1",
            title: "Découverte & Initiation",
            promise: "Vivre ses premières sensations. Apprendre les bases. En toute sécurité.",
            price_from: "À partir de 25 000 FCFA / 38 €",
            vehicles: "Karting • Véhicules tourisme école",
            offers: &[
                Offer {
                    title: "Karting découverte",
                    tagline: "Découverte plaisir, sécurité et premiers repères de trajectoire.",
                    price: "25 000 FCFA / 38 €",
                    vehicles: "Karts 4T 270cc sécurisés",
                    includes: "Briefing • Piste • Temps & classement",
                },
                Offer {
                    title: "Stage pilotage tourisme",
                    tagline: "Position de conduite, trajectoires, freinage — puis pratique progressive.",
                    price: "65 000 FCFA / 99 €",
                    vehicles: "Citroën C3 • Peugeot 208 (sécurité)",
                    includes: "Théorie • Pratique • Débriefing",
                },
                Offer {
                    title: "Baptême de vitesse",
                    tagline: "Expérience passager avec pilote professionnel. Sensations garanties.",
                    price: "35 000 FCFA / 53 €",
                    vehicles: "BMW M Performance • Mercedes AMG",
                    includes: "Briefing • Tours reconnaissance • Tours performance",
                },
            ],
        },
        Programme {
            id: "niveau-2",
            badge: "Niveau 2",
            title: "Perfectionnement",
            promise: "Transformer l’instinct en technique. Maîtriser la performance.",
            price_from: "À partir de 125 000 FCFA / 190 €",
            vehicles: "Sportives • GT préparées",
            offers: &[
                Offer {
                    title: "Stage pilotage sportif",
                    tagline: "Trajectoires avancées, freinage performance, transferts de masse.",
                    price: "125 000 FCFA / 190 €",
                    vehicles: "BMW M3 • Porsche Boxster (préparées)",
                    includes: "Journée complète • Déjeuner • Coaching",
                },
                Offer {
                    title: "Compétition amateur",
                    tagline: "Chronométrage, simulations de course et évaluation finale.",
                    price: "350 000 FCFA / 533 €",
                    vehicles: "BMW M3 Cup • Clio Cup",
                    includes: "3 jours intensifs • Sélection",
                },
            ],
        },
        Programme {
            id: "niveau-3",
            badge: "Niveau 3",
            title: "Professionnel",
            promise: "Préparer une carrière en compétition de haut niveau (programme sélectif).",
            price_from: "Programme sur sélection",
            vehicles: "GT compétition • Monoplaces",
            offers: &[Offer {
                title: "Pilote professionnel",
                tagline: "Technique, préparation mentale, stratégie course, médias & sponsors.",
                price: "1 300 000 FCFA / 1 980 €",
                vehicles: "Formule 4 • GT préparées",
                includes: "2 semaines • Coaching 6 mois inclus",
            }],
        },
    ];

    pub const MECHANIC_TITLE: &str = "Mécanicien Sport Automobile";
    pub const MECHANIC_BADGE: &str = "Parcours Métiers";
    pub const MECHANIC_PROMISE: &str = "Le paddock ne tourne pas sans eux. Une formation \
                                        technique en environnement compétition.";
    pub const MECHANIC_PRICE: &str = "450 000 FCFA / 685 €";
    pub const MECHANIC_VEHICLES: &str = "Karts • GT • Voitures de course";
    pub const MECHANIC_BULLETS: [&str; 5] = [
        "Mécanique spécifique sport auto",
        "Préparation & réglages châssis",
        "Diagnostics avancés",
        "Sécurité paddock & procédures",
        "Gestion du stress en course",
    ];

    pub const SAFETY: [Card; 4] = [
        card(
            "Encadrement certifié",
            "Briefings, coaching et supervision par des professionnels.",
        ),
        card(
            "Équipement fourni",
            "Casques et équipements adaptés selon l’activité.",
        ),
        card(
            "Véhicules préparés",
            "Parc contrôlé et configuré pour la sécurité et la pédagogie.",
        ),
        card(
            "Protocoles structurés",
            "Méthodes inspirées des standards internationaux.",
        ),
    ];
}

// ============================================================================
// Garage
// ============================================================================

pub mod garage {
    use super::{Card, card};

    pub const INTRO: &str = "Diagnostic, entretien et réparation. Une prise en charge structurée, \
                             transparente et professionnelle.";

    pub const ASSISTANT_LEAD: &str = "Dites-nous ce que vous conduisez et ce que vous ressentez. \
                                      Un technicien s’occupe du reste.";

    pub const CONTACT_LEAD: &str = "Ces informations nous permettent de vous recontacter \
                                    rapidement avec un diagnostic clair et un devis précis.";

    pub const SERVICES: [Card; 6] = [
        card("Diagnostic", "Analyse électronique et mécanique complète."),
        card("Entretien", "Révisions, vidanges, freins, climatisation."),
        card("Pneus & roues", "Montage, équilibrage, géométrie."),
        card("Moteur", "Embrayage, turbo, distribution."),
        card("Électronique", "Batterie, capteurs, calculateurs."),
        card("Transmission", "Boîte, cardans, différentiels."),
    ];

    pub const METHOD: [&str; 5] = ["Analyse", "Diagnostic", "Devis", "Validation", "Intervention"];

    pub const METHOD_NOTE: &str =
        "Transparence totale. Aucune intervention sans validation préalable.";
}

// ============================================================================
// Dealer & process
// ============================================================================

pub mod dealer {
    use super::{Card, card};

    pub const TITLE: &str = "Occasions d’exception. Zéro surprise.";
    pub const SUBTITLE: &str =
        "Voitures en fin de leasing • Historique complet • Garantie disponible";

    pub const WHY: [Card; 3] = [
        card(
            "Sélection",
            "Véhicules de moins de 5 ans, fin de leasing, entretenus exclusivement en réseau \
             constructeur avec historique complet.",
        ),
        card(
            "Transparence",
            "Carnet, factures, CT, photos détaillées et défauts signalés : un dossier clair, \
             zéro surprise.",
        ),
        card(
            "Sérénité",
            "Import depuis l’Allemagne ou le Luxembourg jusqu’à Dakar, test drive sur place et \
             garantie optionnelle 1 à 2 ans.",
        ),
    ];

    pub const FIGURES: [(&str, &str); 3] = [
        ("+600", "Véhicules inspectés"),
        ("150", "Points de contrôle"),
        ("100%", "Clients satisfaits"),
    ];

    pub const CTA: &str = "Parlez-nous de votre projet.";
}

pub mod process {
    use super::{Card, card};

    pub const TITLE: &str = "Notre processus, simple et transparent.";
    pub const LEAD: &str = "Des véhicules de moins de 5 ans, en fin de leasing, sélectionnés en \
                            Allemagne et au Luxembourg, importés jusqu’au port de Dakar — à nos \
                            frais.";

    pub const STEPS: [Card; 5] = [
        card(
            "Sélection",
            "Moins de 5 ans, fin de leasing, entretien constructeur + historique complet certifié.",
        ),
        card(
            "Contrôle & Dossier",
            "150 points, carnet, factures, CT, photos HD, défauts signalés: zéro surprise.",
        ),
        card(
            "Achat & Import",
            "Achat en Allemagne ou Luxembourg puis transport jusqu’au port de Dakar pris en \
             charge par SL Automotive.",
        ),
        card(
            "Arrivée à Dakar",
            "Annonce mise à jour + localisation au port. On convient d’un rendez-vous.",
        ),
        card(
            "Essai & Achat",
            "Test drive, vérification du dossier, paiement et remise du véhicule. Garantie \
             12–24 mois en option.",
        ),
    ];

    pub const TRANSPARENCY: [Card; 3] = [
        card(
            "Dossier complet",
            "Carnet d’entretien, factures, contrôles, historique constructeur vérifiable.",
        ),
        card(
            "Défauts signalés",
            "Photos HD + remarques explicites sur les micro-rayures, jantes, pneus, etc.",
        ),
        card(
            "Traçabilité",
            "VIN communiqué, entretien réseau constructeur, provenance claire (🇩🇪 / 🇱🇺).",
        ),
    ];

    pub const FAQ: [Card; 4] = [
        card(
            "Comment voir la voiture ?",
            "Nous partageons la localisation dès l’arrivée au port de Dakar et fixons un \
             rendez-vous pour un essai.",
        ),
        card(
            "Puis-je réserver ?",
            "Oui. Contactez-nous sur WhatsApp pour un acompte et un créneau prioritaire à l’essai.",
        ),
        card(
            "Quels documents fournissez-vous ?",
            "Carnet, factures, CT, historique constructeur et dossier photos détaillé.",
        ),
        card(
            "Et la garantie ?",
            "Optionnelle 12 à 24 mois selon le véhicule. On vous conseille au cas par cas.",
        ),
    ];

    pub const CTA: &str = "Prêt à passer à l’étape suivante ?";
    pub const TAGLINE: &str = "La performance, sans compromis. La transparence, sans surprise.";
}

// ============================================================================
// Investor & infrastructure
// ============================================================================

pub mod investor {
    use super::{Card, card};

    pub const TITLE: &str = "Investir dans un projet automobile structuré";
    pub const LEAD: &str = "Un projet ancré localement, pensé pour la performance, la formation et \
                            l’expérience, avec une vision long terme et une gouvernance maîtrisée.";

    pub const PILLARS: [Card; 4] = [
        card(
            "Actifs réels",
            "Infrastructures physiques exploitables, génératrices de valeur et de revenus.",
        ),
        card(
            "Revenus diversifiés",
            "Formation, expériences, B2B, événements et partenariats.",
        ),
        card(
            "Déploiement progressif",
            "Montée en charge maîtrisée, sans dépendance à un seul scénario.",
        ),
        card(
            "Gouvernance structurée",
            "Rôles clairs, pilotage opérationnel et supervision stratégique.",
        ),
    ];

    pub const FIT: [Card; 4] = [
        card(
            "Investisseurs long terme",
            "Vision patrimoniale, logique de développement durable et maîtrisé.",
        ),
        card(
            "Profils entrepreneuriaux",
            "Intérêt pour les projets concrets, opérationnels et pilotés.",
        ),
        card(
            "Passion automobile",
            "Affinité avec l’univers auto, sport mécanique ou événementiel.",
        ),
        card(
            "Approche raisonnée",
            "Recherche de structure, pas de promesse spéculative.",
        ),
    ];

    pub const DOSSIER_NOTE: &str = "Les informations financières détaillées et modalités \
                                    d’investissement sont communiquées sur demande.";
}

pub mod infrastructure {
    use super::{Card, card};

    pub const TITLE: &str = "Le circuit & les infrastructures";
    pub const LEAD: &str = "Un complexe conçu pour la formation, la sécurité et la montée en \
                            puissance du sport automobile en Afrique de l’Ouest.";

    pub const LOCATION_TITLE: &str = "Localisation stratégique – Lac Rose";
    pub const LOCATION: [&str; 2] = [
        "Situé à proximité immédiate de Dakar, le site du Lac Rose offre un environnement unique, \
         accessible et adapté au développement d’infrastructures sportives de niveau international.",
        "Ce positionnement permet d’accueillir des formations, des événements et des partenariats \
         régionaux tout en bénéficiant d’un cadre sécurisé et maîtrisé.",
    ];

    /// "Les composantes du complexe", shown as a carousel
    pub const COMPONENTS: [Card; 4] = [
        card(
            "Piste de karting",
            "Infrastructure de base dédiée à l’initiation et à la formation technique.",
        ),
        card(
            "Zones d’entraînement",
            "Espaces modulables pour perfectionnement, tests et sécurité.",
        ),
        card(
            "Paddock & bâtiments",
            "Zones techniques, accueil, briefing et maintenance.",
        ),
        card(
            "Espaces spectateurs",
            "Zones sécurisées pour événements et compétitions.",
        ),
    ];

    pub const SAFETY: &str = "Les infrastructures sont conçues selon des standards de sécurité \
                              inspirés des normes internationales, avec une montée en conformité \
                              progressive et contrôlée.";

    pub const PHASES: [Card; 2] = [
        card(
            "Phase 1 – Formation & initiation",
            "Lancement des formations, infrastructures de base et premières expériences.",
        ),
        card(
            "Phase 2 – Extension & homologation",
            "Montée en gamme, extension du site et alignement avec des standards de compétition.",
        ),
    ];
}
