/// Icon shown on a dashboard tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ServiceIcon {
    Mail,
    Grades,
    Calendar,
    Support,
    Courses,
    Help,
}

/// A service tile on the student dashboard.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct Service {
    pub icon: ServiceIcon,
    pub title: &'static str,
    pub description: &'static str,
}

/// Services listed on the home dashboard, each once.
pub(crate) fn dashboard_services() -> Vec<Service> {
    vec![
        Service {
            icon: ServiceIcon::Mail,
            title: "Messagerie",
            description: "Messagerie électronique des étudiants de l’université",
        },
        Service {
            icon: ServiceIcon::Grades,
            title: "Notes",
            description: "Consulter vos notes aux épreuves",
        },
        Service {
            icon: ServiceIcon::Calendar,
            title: "Calendrier des examens",
            description: "Consulter votre calendrier d’examens",
        },
        Service {
            icon: ServiceIcon::Support,
            title: "Demande d’intervention",
            description: "Demandez une intervention technique",
        },
        Service {
            icon: ServiceIcon::Courses,
            title: "Cours en ligne",
            description: "Accéder à la plateforme pédagogique de l’université (Moodle)",
        },
        Service {
            icon: ServiceIcon::Help,
            title: "Assistance ENT",
            description: "Foire aux questions sur l’environnement numérique de travail",
        },
    ]
}
