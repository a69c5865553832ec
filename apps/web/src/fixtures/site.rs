use crate::models::{PortfolioItem, ProcessStep, TeamMember};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Landing page anchors, in scroll order.
pub const NAV_SECTIONS: [(&str, &str); 5] = [
    ("Accueil", "hero"),
    ("À propos", "about"),
    ("Portfolio", "portfolio"),
    ("Process", "process"),
    ("Contact", "contact"),
];

pub fn portfolio_items() -> Vec<PortfolioItem> {
    let rows: [(&str, &str, &str, &str, &str, &[&str]); 6] = [
        (
            "Neural Interface",
            "Web App",
            "Plateforme de visualisation de données en temps réel avec WebGL",
            "https://images.unsplash.com/photo-1633356122544-f134324a6cee?w=800",
            "#00F5FF",
            &["Three.js", "React", "Node.js"],
        ),
        (
            "Quantum Dashboard",
            "SaaS Platform",
            "Interface de gestion cloud avec animations 3D immersives",
            "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=800",
            "#9B51E0",
            &["Next.js", "TypeScript", "AWS"],
        ),
        (
            "Cyber Store",
            "E-commerce",
            "Expérience shopping futuriste avec réalité augmentée",
            "https://images.unsplash.com/photo-1556742049-0cfed4f6a45d?w=800",
            "#FF00A8",
            &["React Native", "AR.js", "Stripe"],
        ),
        (
            "Meta Gallery",
            "NFT Platform",
            "Galerie d'art digitale avec environnement 3D interactif",
            "https://images.unsplash.com/photo-1618005182384-a83a8bd57fbe?w=800",
            "#00F5FF",
            &["WebGL", "Solidity", "IPFS"],
        ),
        (
            "AI Assistant",
            "Mobile App",
            "Assistant personnel avec interface conversationnelle avancée",
            "https://images.unsplash.com/photo-1677442136019-21780ecad995?w=800",
            "#9B51E0",
            &["Flutter", "GPT-4", "Firebase"],
        ),
        (
            "Fintech Pro",
            "Finance",
            "Application bancaire nouvelle génération avec analytics en temps réel",
            "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=800",
            "#FF00A8",
            &["Vue.js", "Python", "Blockchain"],
        ),
    ];

    rows.iter()
        .enumerate()
        .map(
            |(idx, (title, category, description, image, color, tech))| PortfolioItem {
                id: idx as u32 + 1,
                title: title.to_string(),
                category: category.to_string(),
                description: description.to_string(),
                image: image.to_string(),
                color: color.to_string(),
                tech: strings(tech),
            },
        )
        .collect()
}

pub fn process_steps() -> Vec<ProcessStep> {
    vec![
        ProcessStep {
            phase: "Découverte".into(),
            title: "Comprendre votre vision".into(),
            description: "Nous plongeons dans votre univers pour comprendre vos objectifs, vos défis et vos ambitions.".into(),
            icon: "🔍".into(),
            details: strings(&["Analyse approfondie", "Workshops créatifs", "Étude de marché"]),
            duration: "1-2 semaines".into(),
        },
        ProcessStep {
            phase: "Stratégie".into(),
            title: "Définir la roadmap".into(),
            description: "Nous élaborons une stratégie digitale sur-mesure alignée avec vos objectifs business.".into(),
            icon: "🎯".into(),
            details: strings(&["Architecture technique", "User journey", "KPIs et métriques"]),
            duration: "1 semaine".into(),
        },
        ProcessStep {
            phase: "Design".into(),
            title: "Créer l'expérience".into(),
            description: "Nos designers créent des interfaces immersives qui captivent et engagent vos utilisateurs.".into(),
            icon: "🎨".into(),
            details: strings(&["Wireframes", "Prototypes interactifs", "Design system"]),
            duration: "2-3 semaines".into(),
        },
        ProcessStep {
            phase: "Développement".into(),
            title: "Donner vie au projet".into(),
            description: "Nos développeurs transforment les designs en expériences digitales performantes et scalables.".into(),
            icon: "⚡".into(),
            details: strings(&["Code moderne", "Tests rigoureux", "Optimisation performance"]),
            duration: "4-8 semaines".into(),
        },
        ProcessStep {
            phase: "Lancement".into(),
            title: "Propulser votre succès".into(),
            description: "Nous déployons votre solution et assurons un lancement réussi avec un support continu.".into(),
            icon: "🚀".into(),
            details: strings(&["Déploiement progressif", "Monitoring", "Formation équipes"]),
            duration: "1 semaine".into(),
        },
    ]
}

pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            name: "Alice Martin".into(),
            email: "alice@globiweb.com".into(),
            role: "Admin".into(),
        },
        TeamMember {
            name: "Bob Chen".into(),
            email: "bob@globiweb.com".into(),
            role: "Développeur".into(),
        },
        TeamMember {
            name: "Charlie Davis".into(),
            email: "charlie@globiweb.com".into(),
            role: "Designer".into(),
        },
    ]
}

/// Headline figures under the hero title.
pub const HERO_STATS: [(&str, &str); 3] = [
    ("150+", "Projets réalisés"),
    ("98%", "Clients satisfaits"),
    ("5★", "Note moyenne"),
];

pub const ABOUT_KEYWORDS: [(&str, &str); 4] = [
    ("Créativité", "#00F5FF"),
    ("Innovation", "#9B51E0"),
    ("Performance", "#FF00A8"),
    ("Excellence", "#00F5FF"),
];

/// (icon, title, description, features)
pub const SERVICES: [(&str, &str, &str, [&str; 3]); 4] = [
    (
        "🚀",
        "Développement Web",
        "Applications web modernes et performantes avec les dernières technologies",
        ["React/Next.js", "Node.js", "WebGL/Three.js"],
    ),
    (
        "🎨",
        "Design & UX/UI",
        "Interfaces élégantes et expériences utilisateur mémorables",
        ["Motion Design", "Prototypage", "Design System"],
    ),
    (
        "📱",
        "Applications Mobiles",
        "Solutions mobiles natives et cross-platform innovantes",
        ["React Native", "Flutter", "Progressive Web Apps"],
    ),
    (
        "⚡",
        "Solutions Cloud",
        "Infrastructure scalable et solutions cloud optimisées",
        ["AWS/Azure", "DevOps", "Microservices"],
    ),
];
