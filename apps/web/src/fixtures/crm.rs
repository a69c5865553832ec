use time::macros::{date, datetime};

use crate::models::{
    Activity, ActivityKind, Client, ClientStatus, Deal, DealStage, Money, Percent, Priority,
    Project, ProjectStatus, Rating, RecordError, Task, TaskStatus, Ticket, TicketStatus,
};

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

/// Sample client book for the demo CRM.
pub fn sample_clients() -> Result<Vec<Client>, RecordError> {
    Ok(vec![
        Client {
            id: "c-1".into(),
            name: "Jean Dupont".into(),
            company: "TechCorp SA".into(),
            email: "jean.dupont@techcorp.com".into(),
            phone: "+41 21 123 45 67".into(),
            address: "Rue de la Gare 10, 1003 Lausanne".into(),
            website: Some("www.techcorp.ch".into()),
            status: ClientStatus::Active,
            rating: Rating::new(5)?,
            revenue: Money::euros(125_000),
            projects: 8,
            joined_date: date!(2023 - 01 - 15),
            last_contact: "Il y a 2 jours".into(),
            tags: tags(&["Premium", "Tech", "Long-terme"]),
            description: Some(
                "Client stratégique dans le secteur tech, collaboration sur plusieurs projets innovants."
                    .into(),
            ),
        },
        Client {
            id: "c-2".into(),
            name: "Marie Laurent".into(),
            company: "StartupX".into(),
            email: "marie@startupx.io".into(),
            phone: "+41 22 987 65 43".into(),
            address: "Avenue du Léman 25, 1204 Genève".into(),
            website: Some("www.startupx.io".into()),
            status: ClientStatus::Active,
            rating: Rating::new(4)?,
            revenue: Money::euros(85_000),
            projects: 5,
            joined_date: date!(2023 - 03 - 22),
            last_contact: "Il y a 1 semaine".into(),
            tags: tags(&["Startup", "Innovation", "Agile"]),
            description: None,
        },
        Client {
            id: "c-3".into(),
            name: "Pierre Martin".into(),
            company: "GlobalCorp".into(),
            email: "p.martin@globalcorp.com".into(),
            phone: "+41 24 456 78 90".into(),
            address: "Place du Marché 5, 1260 Nyon".into(),
            website: None,
            status: ClientStatus::Prospect,
            rating: Rating::new(3)?,
            revenue: Money::ZERO,
            projects: 0,
            joined_date: date!(2024 - 01 - 05),
            last_contact: "Il y a 3 jours".into(),
            tags: tags(&["Prospect", "Enterprise"]),
            description: None,
        },
        Client {
            id: "c-4".into(),
            name: "Sophie Bernard".into(),
            company: "EduTech Solutions".into(),
            email: "sophie.bernard@edutech.ch".into(),
            phone: "+41 26 321 09 87".into(),
            address: "Rue des Alpes 15, 1700 Fribourg".into(),
            website: Some("www.edutech.ch".into()),
            status: ClientStatus::Active,
            rating: Rating::new(5)?,
            revenue: Money::euros(95_000),
            projects: 6,
            joined_date: date!(2023 - 02 - 10),
            last_contact: "Aujourd'hui".into(),
            tags: tags(&["Education", "SaaS", "Récurrent"]),
            description: None,
        },
        Client {
            id: "c-5".into(),
            name: "Thomas Müller".into(),
            company: "FinanceApp".into(),
            email: "t.muller@financeapp.ch".into(),
            phone: "+41 31 234 56 78".into(),
            address: "Bundesplatz 12, 3000 Bern".into(),
            website: None,
            status: ClientStatus::Inactive,
            rating: Rating::new(4)?,
            revenue: Money::euros(45_000),
            projects: 3,
            joined_date: date!(2022 - 11 - 20),
            last_contact: "Il y a 2 mois".into(),
            tags: tags(&["Finance", "Pause"]),
            description: None,
        },
    ])
}

/// Sample pipeline, one or more deals per open stage.
pub fn sample_deals() -> Result<Vec<Deal>, RecordError> {
    Ok(vec![
        Deal {
            id: "d-1".into(),
            title: "Refonte Site Web".into(),
            company: "TechCorp SA".into(),
            contact: "Jean Dupont".into(),
            value: Money::euros(45_000),
            probability: Percent::new(80)?,
            stage: DealStage::Negotiation,
            priority: Priority::High,
            created_date: date!(2024 - 01 - 05),
            expected_close_date: date!(2024 - 02 - 15),
            last_activity: "Il y a 2 heures".into(),
            notes: None,
            tags: tags(&["Web", "Design", "Urgent"]),
        },
        Deal {
            id: "d-2".into(),
            title: "Application Mobile".into(),
            company: "StartupX".into(),
            contact: "Marie Laurent".into(),
            value: Money::euros(75_000),
            probability: Percent::new(60)?,
            stage: DealStage::Proposal,
            priority: Priority::Medium,
            created_date: date!(2024 - 01 - 10),
            expected_close_date: date!(2024 - 03 - 01),
            last_activity: "Il y a 1 jour".into(),
            notes: None,
            tags: tags(&["Mobile", "iOS", "Android"]),
        },
        Deal {
            id: "d-3".into(),
            title: "Consultation SEO".into(),
            company: "GlobalCorp".into(),
            contact: "Pierre Martin".into(),
            value: Money::euros(15_000),
            probability: Percent::new(30)?,
            stage: DealStage::Qualification,
            priority: Priority::Low,
            created_date: date!(2024 - 01 - 12),
            expected_close_date: date!(2024 - 02 - 28),
            last_activity: "Il y a 3 jours".into(),
            notes: None,
            tags: tags(&["SEO", "Marketing"]),
        },
        Deal {
            id: "d-4".into(),
            title: "Plateforme E-learning".into(),
            company: "EduTech Solutions".into(),
            contact: "Sophie Bernard".into(),
            value: Money::euros(120_000),
            probability: Percent::new(90)?,
            stage: DealStage::Closing,
            priority: Priority::Urgent,
            created_date: date!(2023 - 12 - 15),
            expected_close_date: date!(2024 - 01 - 20),
            last_activity: "Il y a 30 minutes".into(),
            notes: Some("Signature prévue après validation du comité pédagogique.".into()),
            tags: tags(&["SaaS", "Education"]),
        },
        Deal {
            id: "d-5".into(),
            title: "Migration Cloud".into(),
            company: "FinanceApp".into(),
            contact: "Thomas Müller".into(),
            value: Money::euros(55_000),
            probability: Percent::new(40)?,
            stage: DealStage::Lead,
            priority: Priority::Medium,
            created_date: date!(2024 - 01 - 14),
            expected_close_date: date!(2024 - 04 - 01),
            last_activity: "Il y a 5 heures".into(),
            notes: None,
            tags: tags(&["Cloud", "Infrastructure"]),
        },
        Deal {
            id: "d-6".into(),
            title: "Audit de Sécurité".into(),
            company: "SecureBank".into(),
            contact: "Lisa Chen".into(),
            value: Money::euros(25_000),
            probability: Percent::new(70)?,
            stage: DealStage::Proposal,
            priority: Priority::High,
            created_date: date!(2024 - 01 - 08),
            expected_close_date: date!(2024 - 02 - 10),
            last_activity: "Il y a 1 heure".into(),
            notes: None,
            tags: tags(&["Sécurité", "Audit"]),
        },
    ])
}

pub fn sample_projects() -> Result<Vec<Project>, RecordError> {
    let projects = vec![
        Project {
            id: "p-1".into(),
            name: "Application Mobile Banking".into(),
            client: "FinanceApp".into(),
            status: ProjectStatus::Active,
            progress: Percent::new(75)?,
            budget: Money::euros(120_000),
            spent: Money::euros(90_000),
            start_date: date!(2023 - 11 - 01),
            end_date: date!(2024 - 02 - 15),
            team: tags(&["Alice", "Bob", "Charlie"]),
            tasks: vec![
                task("t1", "Design UI/UX", TaskStatus::Done, "Alice", date!(2023 - 12 - 15), Priority::High),
                task("t2", "Développement Backend", TaskStatus::InProgress, "Bob", date!(2024 - 01 - 30), Priority::High),
                task("t3", "Tests et QA", TaskStatus::Todo, "Charlie", date!(2024 - 02 - 10), Priority::Medium),
            ],
            priority: Priority::High,
            description: "Application mobile complète pour services bancaires avec authentification biométrique.".into(),
        },
        Project {
            id: "p-2".into(),
            name: "Plateforme E-learning".into(),
            client: "EduTech Solutions".into(),
            status: ProjectStatus::Active,
            progress: Percent::new(45)?,
            budget: Money::euros(85_000),
            spent: Money::euros(38_000),
            start_date: date!(2023 - 12 - 01),
            end_date: date!(2024 - 03 - 30),
            team: tags(&["David", "Eve"]),
            tasks: vec![
                task("t4", "Architecture système", TaskStatus::Done, "David", date!(2023 - 12 - 20), Priority::High),
                task("t5", "Module de cours", TaskStatus::InProgress, "Eve", date!(2024 - 02 - 15), Priority::High),
                task("t6", "Système de paiement", TaskStatus::Todo, "David", date!(2024 - 03 - 15), Priority::Medium),
            ],
            priority: Priority::Medium,
            description: "Plateforme complète de formation en ligne avec système de vidéoconférence intégré.".into(),
        },
        Project {
            id: "p-3".into(),
            name: "Site Vitrine Corporate".into(),
            client: "GlobalCorp".into(),
            status: ProjectStatus::Completed,
            progress: Percent::new(100)?,
            budget: Money::euros(35_000),
            spent: Money::euros(32_000),
            start_date: date!(2023 - 10 - 01),
            end_date: date!(2023 - 12 - 31),
            team: tags(&["Frank"]),
            tasks: vec![task(
                "t7",
                "Tous les livrables",
                TaskStatus::Done,
                "Frank",
                date!(2023 - 12 - 31),
                Priority::Low,
            )],
            priority: Priority::Low,
            description: "Site web corporate avec CMS headless et optimisation SEO avancée.".into(),
        },
        Project {
            id: "p-4".into(),
            name: "Migration Cloud AWS".into(),
            client: "TechCorp SA".into(),
            status: ProjectStatus::Planning,
            progress: Percent::new(10)?,
            budget: Money::euros(150_000),
            spent: Money::euros(15_000),
            start_date: date!(2024 - 02 - 01),
            end_date: date!(2024 - 06 - 30),
            team: tags(&["Grace", "Henry", "Iris"]),
            tasks: vec![
                task("t8", "Audit infrastructure", TaskStatus::InProgress, "Grace", date!(2024 - 02 - 15), Priority::High),
                task("t9", "Plan de migration", TaskStatus::Todo, "Henry", date!(2024 - 02 - 28), Priority::High),
                task("t10", "Migration données", TaskStatus::Todo, "Iris", date!(2024 - 05 - 30), Priority::High),
            ],
            priority: Priority::High,
            description: "Migration complète de l'infrastructure on-premise vers AWS avec haute disponibilité.".into(),
        },
    ];

    for project in &projects {
        project.validate()?;
    }

    Ok(projects)
}

fn task(
    id: &str,
    name: &str,
    status: TaskStatus,
    assignee: &str,
    due_date: time::Date,
    priority: Priority,
) -> Task {
    Task {
        id: id.into(),
        name: name.into(),
        status,
        assignee: assignee.into(),
        due_date,
        priority,
    }
}

pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        Ticket {
            id: "T001".into(),
            title: "Bug système de paiement".into(),
            description: "Les utilisateurs ne peuvent pas finaliser leurs achats avec PayPal".into(),
            client: "TechCorp SA".into(),
            assignee: "Alice Martin".into(),
            status: TicketStatus::InProgress,
            priority: Priority::Urgent,
            category: "Bug".into(),
            created_at: datetime!(2024-01-15 10:30),
            updated_at: datetime!(2024-01-15 14:45),
            messages: 8,
        },
        Ticket {
            id: "T002".into(),
            title: "Demande de nouvelle fonctionnalité".into(),
            description: "Ajouter un système de notifications push".into(),
            client: "StartupX".into(),
            assignee: "Bob Chen".into(),
            status: TicketStatus::Open,
            priority: Priority::Medium,
            category: "Feature Request".into(),
            created_at: datetime!(2024-01-14 09:15),
            updated_at: datetime!(2024-01-14 09:15),
            messages: 3,
        },
        Ticket {
            id: "T003".into(),
            title: "Problème de performance".into(),
            description: "Le site est lent lors des heures de pointe".into(),
            client: "GlobalCorp".into(),
            assignee: "Charlie Davis".into(),
            status: TicketStatus::Resolved,
            priority: Priority::High,
            category: "Performance".into(),
            created_at: datetime!(2024-01-13 16:00),
            updated_at: datetime!(2024-01-15 11:30),
            messages: 12,
        },
        Ticket {
            id: "T004".into(),
            title: "Question sur l'utilisation".into(),
            description: "Comment exporter les données en CSV?".into(),
            client: "EduTech Solutions".into(),
            assignee: "Diana Evans".into(),
            status: TicketStatus::Closed,
            priority: Priority::Low,
            category: "Support".into(),
            created_at: datetime!(2024-01-12 14:20),
            updated_at: datetime!(2024-01-13 10:00),
            messages: 5,
        },
        Ticket {
            id: "T005".into(),
            title: "Erreur 500 sur la page produits".into(),
            description: "Erreur serveur lors de l'accès à certains produits".into(),
            client: "FinanceApp".into(),
            assignee: "Eve Foster".into(),
            status: TicketStatus::InProgress,
            priority: Priority::High,
            category: "Bug".into(),
            created_at: datetime!(2024-01-15 08:00),
            updated_at: datetime!(2024-01-15 15:30),
            messages: 6,
        },
    ]
}

pub fn recent_activities() -> Vec<Activity> {
    vec![
        Activity {
            kind: ActivityKind::Client,
            action: "Nouveau client ajouté".into(),
            description: "TechCorp SA".into(),
            time: "Il y a 2 heures".into(),
        },
        Activity {
            kind: ActivityKind::Project,
            action: "Projet complété".into(),
            description: "Refonte site e-commerce".into(),
            time: "Il y a 4 heures".into(),
        },
        Activity {
            kind: ActivityKind::Ticket,
            action: "Ticket urgent".into(),
            description: "Bug système de paiement".into(),
            time: "Il y a 6 heures".into(),
        },
        Activity {
            kind: ActivityKind::Revenue,
            action: "Paiement reçu".into(),
            description: "€15,000 - StartupX".into(),
            time: "Hier".into(),
        },
    ]
}

/// Monthly revenue in thousands of euros, January first.
pub const MONTHLY_REVENUE_K: [u32; 12] = [85, 95, 110, 98, 105, 115, 125, 135, 128, 140, 155, 165];

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Juin", "Juil", "Août", "Sep", "Oct", "Nov", "Déc",
];
