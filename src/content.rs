//! Copy shown on the landing page.

pub struct TrustBullet {
    pub icon: &'static str,
    pub label: &'static str,
}

pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub struct ProcessStep {
    pub title: &'static str,
    pub description: &'static str,
}

pub struct Testimonial {
    pub author: &'static str,
    pub text: &'static str,
    pub rating: u8,
}

pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const TRUST_BULLETS: &[TrustBullet] = &[
    TrustBullet { icon: "✔", label: "Experts en pathologies du bâtiment" },
    TrustBullet { icon: "⏱", label: "Intervention rapide" },
    TrustBullet { icon: "📍", label: "Nouvelle-Aquitaine" },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "💧",
        title: "Recherche de fuites",
        description: "Localisation précise avec l’ensemble des outils adaptés : thermographie, hygrométrie, caméras d’inspection, tests traceurs, etc.",
    },
    Service {
        icon: "📏",
        title: "Diagnostic infiltrations",
        description: "Identification des infiltrations d’eau plus graves (murs enterrés, toitures, points singuliers) et recommandations d’intervention.",
    },
    Service {
        icon: "📄",
        title: "Expertise conseil avant vente",
        description: "Évitez les vices cachés et sécurisez votre transaction. Un diagnostic indépendant pour acheter ou vendre sereinement.",
    },
    Service {
        icon: "🔧",
        title: "Solutions adaptées",
        description: "Recommandations selon les pathologies : injections de résine, cuvelage, traitement de l’air, étanchéités extérieures, etc.",
    },
];

pub const PROCESS_STEPS: &[ProcessStep] = &[
    ProcessStep {
        title: "Prise de contact",
        description: "Échange rapide, recueil des premières informations et prise de rendez-vous.",
    },
    ProcessStep {
        title: "Intervention rapide",
        description: "Déplacement sur site, mesures et tests non destructifs, rapport synthétique.",
    },
    ProcessStep {
        title: "Accompagnement",
        description: "Aide auprès des assurances et des entreprises de travaux jusqu’à résolution.",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "A. Martin",
        text: "Diagnostic précis et recommandations claires. Très pro.",
        rating: 5,
    },
    Testimonial {
        author: "S. Bernard",
        text: "Fuite localisée rapidement, intervention coordonnée avec l’entreprise de travaux.",
        rating: 5,
    },
    Testimonial {
        author: "C. Dupuy",
        text: "Conseil avant achat très utile, a évité une mauvaise surprise.",
        rating: 5,
    },
];

pub const FAQ: &[FaqEntry] = &[
    FaqEntry {
        question: "Vos recherches de fuites sont-elles destructives ?",
        answer: "Non. Nous utilisons des méthodes non destructives (thermographie, gaz traceur, caméra d’inspection, hygrométrie) pour localiser la fuite sans casser inutilement.",
    },
    FaqEntry {
        question: "Le rapport est-il accepté par les assurances ?",
        answer: "Oui. Le rapport détaille les constats, les mesures et l’origine du sinistre. Il est conçu pour être transmis à votre assureur et aux entreprises de travaux.",
    },
    FaqEntry {
        question: "Réalisez-vous les travaux de réparation ?",
        answer: "Nous restons indépendants : nous ne vendons pas de travaux. Nous vous orientons vers les solutions adaptées et pouvons suivre l’entreprise choisie jusqu’à résolution.",
    },
    FaqEntry {
        question: "Dans quelle zone intervenez-vous ?",
        answer: "Bordeaux et toute la Nouvelle-Aquitaine. Contactez-nous pour connaître les délais d’intervention dans votre secteur.",
    },
    FaqEntry {
        question: "Combien de temps dure une intervention ?",
        answer: "Comptez généralement entre une et trois heures sur site selon la surface et la complexité, puis quelques jours pour la remise du rapport.",
    },
];

/// Clamped to the five stars the review cards can draw.
pub fn stars(rating: u8) -> usize {
    usize::from(rating.min(5))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ratings_fit_on_the_star_scale() {
        for t in TESTIMONIALS {
            assert!((1..=5).contains(&t.rating), "{}", t.author);
        }
        assert_eq!(stars(9), 5);
        assert_eq!(stars(3), 3);
    }

    #[test]
    fn no_section_is_left_empty() {
        assert!(!TRUST_BULLETS.is_empty());
        assert!(SERVICES.iter().all(|s| !s.title.is_empty() && !s.description.is_empty()));
        assert!(PROCESS_STEPS.iter().all(|s| !s.title.is_empty() && !s.description.is_empty()));
        assert!(TESTIMONIALS.iter().all(|t| !t.text.is_empty()));
        assert!(FAQ.iter().all(|f| f.question.ends_with('?') && !f.answer.is_empty()));
    }

    #[test]
    fn faq_questions_are_unique() {
        let questions: HashSet<_> = FAQ.iter().map(|f| f.question).collect();
        assert_eq!(questions.len(), FAQ.len());
    }
}
