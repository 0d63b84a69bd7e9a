//! Technical skills with a proficiency level, shown as a filterable bar
//! chart with a detail panel for the selected skill.

use crate::i18n::{Localized, Text};
use crate::projects::{Categorized, CategoryFilter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TechnicalSkill {
    pub name: &'static str,
    /// Proficiency, 0..=100.
    pub level: u8,
    pub category: &'static str,
    pub years: u8,
    pub description: Localized,
}

impl Categorized for TechnicalSkill {
    fn category(&self) -> &'static str {
        self.category
    }
}

const fn skill(
    name: &'static str,
    level: u8,
    category: &'static str,
    years: u8,
    description: Localized,
) -> TechnicalSkill {
    TechnicalSkill {
        name,
        level,
        category,
        years,
        description,
    }
}

pub static TECHNICAL_SKILLS: [TechnicalSkill; 18] = [
    skill("JavaScript", 95, "Frontend", 18, Localized::new(
        "Expert-level JavaScript development with extensive experience in modern ES6+ features, functional programming, and asynchronous patterns.",
        "Desarrollo experto en JavaScript con amplia experiencia en características modernas de ES6+, programación funcional y patrones asíncronos.",
    )),
    skill("TypeScript", 90, "Frontend", 6, Localized::new(
        "Advanced TypeScript development with focus on strict typing, generics, and type inference for robust application architecture.",
        "Desarrollo avanzado en TypeScript enfocado en tipado estricto, genéricos e inferencia de tipos para arquitecturas robustas.",
    )),
    skill("React", 92, "Frontend", 8, Localized::new(
        "Extensive experience with React, including hooks, context API, custom hooks, and performance optimization techniques.",
        "Amplia experiencia con React, incluyendo hooks, context API, hooks personalizados y técnicas de optimización de rendimiento.",
    )),
    skill("Next.js", 88, "Frontend", 5, Localized::new(
        "Expert in Next.js with server and client components, file-based routing, and advanced optimization strategies.",
        "Experto en Next.js con componentes de servidor y cliente, enrutamiento basado en archivos y estrategias avanzadas de optimización.",
    )),
    skill("HTML/CSS", 95, "Frontend", 20, Localized::new(
        "Comprehensive knowledge of semantic HTML and CSS, including modern flexbox, grid layouts, and CSS animations.",
        "Conocimiento integral de HTML semántico y CSS, incluyendo flexbox, grid y animaciones CSS.",
    )),
    skill("Tailwind CSS", 88, "Frontend", 4, Localized::new(
        "Proficient in utility-first CSS frameworks with a focus on responsive design and component-based styling.",
        "Dominio de frameworks CSS utility-first con enfoque en diseño responsivo y estilos basados en componentes.",
    )),
    skill("Node.js", 85, "Backend", 10, Localized::new(
        "Extensive experience building scalable backend services with Node.js, including REST APIs and microservices.",
        "Amplia experiencia construyendo servicios backend escalables con Node.js, incluyendo APIs REST y microservicios.",
    )),
    skill("Express", 88, "Backend", 10, Localized::new(
        "Advanced implementation of Express.js backends with middleware, authentication, and security best practices.",
        "Implementación avanzada de backends con Express.js, middleware, autenticación y buenas prácticas de seguridad.",
    )),
    skill(".NET", 80, "Backend", 7, Localized::new(
        "Solid experience with .NET Framework and C# for enterprise application development.",
        "Sólida experiencia con .NET Framework y C# para el desarrollo de aplicaciones empresariales.",
    )),
    skill("Python", 75, "Backend", 5, Localized::new(
        "Proficient in Python development for data processing, API integrations, and automation scripts.",
        "Dominio de Python para procesamiento de datos, integraciones con APIs y scripts de automatización.",
    )),
    skill("SQL", 90, "Database", 15, Localized::new(
        "Expert in SQL database design, optimization, and complex query construction across multiple database systems.",
        "Experto en diseño y optimización de bases de datos SQL y en consultas complejas sobre múltiples motores.",
    )),
    skill("MongoDB", 85, "Database", 8, Localized::new(
        "Extensive experience with document databases, aggregation pipelines, and data modeling.",
        "Amplia experiencia con bases de datos documentales, pipelines de agregación y modelado de datos.",
    )),
    skill("PostgreSQL", 82, "Database", 7, Localized::new(
        "Advanced knowledge of relational database design, indexing strategies, and query optimization.",
        "Conocimiento avanzado de diseño relacional, estrategias de indexación y optimización de consultas.",
    )),
    skill("AWS", 80, "DevOps", 6, Localized::new(
        "Experienced with core AWS services including Lambda, EC2, S3, DynamoDB, and API Gateway.",
        "Experiencia con los servicios principales de AWS, incluyendo Lambda, EC2, S3, DynamoDB y API Gateway.",
    )),
    skill("Docker", 78, "DevOps", 5, Localized::new(
        "Proficient in containerization, Docker Compose, and multi-stage builds for efficient deployments.",
        "Dominio de contenedores, Docker Compose y builds multi-etapa para despliegues eficientes.",
    )),
    skill("Git/GitHub", 92, "DevOps", 12, Localized::new(
        "Expert in version control strategies, branching models, and collaborative development workflows.",
        "Experto en estrategias de control de versiones, modelos de ramas y flujos de trabajo colaborativos.",
    )),
    skill("React Native", 75, "Mobile", 4, Localized::new(
        "Solid experience building cross-platform mobile applications with React Native and native modules.",
        "Sólida experiencia construyendo aplicaciones móviles multiplataforma con React Native y módulos nativos.",
    )),
    skill("GraphQL", 78, "Backend", 5, Localized::new(
        "Advanced implementation of GraphQL APIs with Apollo Server and client integrations.",
        "Implementación avanzada de APIs GraphQL con Apollo Server e integraciones de cliente.",
    )),
];

/// Tailwind gradient stops for a category's bars.
pub fn category_gradient(category: &str) -> &'static str {
    match category {
        "Frontend" => "from-blue-500 to-indigo-600",
        "Backend" => "from-green-500 to-emerald-600",
        "Database" => "from-amber-500 to-orange-600",
        "DevOps" => "from-red-500 to-rose-600",
        "Mobile" => "from-purple-500 to-violet-600",
        _ => "from-gray-500 to-slate-600",
    }
}

/// Unit for a number of years of experience.
pub fn years_label(years: u8) -> Text {
    if years == 1 {
        Text::SkillsYear
    } else {
        Text::SkillsYears
    }
}

/// Chart state: the active category and at most one selected skill.
///
/// Changing the category clears the selection, so the selection is always
/// one of the filtered skills.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillChart<'a> {
    skills: &'a [TechnicalSkill],
    active: CategoryFilter,
    selected: Option<&'a TechnicalSkill>,
}

impl<'a> SkillChart<'a> {
    pub fn new(skills: &'a [TechnicalSkill]) -> Self {
        Self {
            skills,
            active: CategoryFilter::All,
            selected: None,
        }
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options(self.skills)
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.active = category;
        self.selected = None;
    }

    pub fn filtered(&self) -> impl Iterator<Item = &'a TechnicalSkill> + '_ {
        self.skills.iter().filter(|s| self.active.matches(*s))
    }

    /// Selects a skill by name among the filtered ones. Unknown names
    /// leave the selection as it was.
    pub fn select(&mut self, name: &str) {
        let found = self.filtered().find(|s| s.name == name);
        if found.is_some() {
            self.selected = found;
        }
    }

    pub fn selected(&self) -> Option<&'a TechnicalSkill> {
        self.selected
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected.is_some_and(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(skills: impl Iterator<Item = &'static TechnicalSkill>) -> Vec<&'static str> {
        skills.map(|s| s.name).collect()
    }

    #[test]
    fn test_categories_first_seen_order() {
        let chart = SkillChart::new(&TECHNICAL_SKILLS);
        let labels: Vec<String> = chart.categories().iter().map(|c| c.to_string()).collect();
        assert_eq!(
            labels,
            vec!["All", "Frontend", "Backend", "Database", "DevOps", "Mobile"]
        );
    }

    #[test]
    fn test_filter_by_category() {
        let mut chart = SkillChart::new(&TECHNICAL_SKILLS);
        assert_eq!(chart.filtered().count(), TECHNICAL_SKILLS.len());

        chart.set_category(CategoryFilter::Category("Backend"));
        assert_eq!(
            names(chart.filtered()),
            vec!["Node.js", "Express", ".NET", "Python", "GraphQL"]
        );

        chart.set_category(CategoryFilter::Category("Cobol"));
        assert_eq!(chart.filtered().count(), 0);
    }

    #[test]
    fn test_changing_category_clears_selection() {
        let mut chart = SkillChart::new(&TECHNICAL_SKILLS);
        chart.select("Docker");
        assert_eq!(chart.selected().map(|s| s.name), Some("Docker"));
        assert!(chart.is_selected("Docker"));

        chart.set_category(CategoryFilter::Category("DevOps"));
        assert!(chart.selected().is_none());
    }

    #[test]
    fn test_select_only_within_filter() {
        let mut chart = SkillChart::new(&TECHNICAL_SKILLS);
        chart.set_category(CategoryFilter::Category("Database"));
        chart.select("SQL");
        chart.select("React");
        assert_eq!(chart.selected().map(|s| s.name), Some("SQL"));
        chart.select("MongoDB");
        assert_eq!(chart.selected().map(|s| s.name), Some("MongoDB"));
        assert!(!chart.is_selected("SQL"));
    }

    #[test]
    fn test_table_is_well_formed() {
        for skill in &TECHNICAL_SKILLS {
            assert!(skill.level <= 100, "{} level out of range", skill.name);
            assert!(skill.years > 0);
            assert!(!skill.description.en.is_empty() && !skill.description.es.is_empty());
        }
        let mut seen: Vec<&str> = TECHNICAL_SKILLS.iter().map(|s| s.name).collect();
        seen.sort_unstable();
        seen.dedup();
        assert_eq!(seen.len(), TECHNICAL_SKILLS.len());
    }

    #[test]
    fn test_category_gradient() {
        assert_eq!(category_gradient("Frontend"), "from-blue-500 to-indigo-600");
        assert_eq!(category_gradient("Mobile"), "from-purple-500 to-violet-600");
        assert_eq!(category_gradient("Other"), "from-gray-500 to-slate-600");
    }

    #[test]
    fn test_years_label() {
        assert_eq!(years_label(1), Text::SkillsYear);
        assert_eq!(years_label(0), Text::SkillsYears);
        assert_eq!(years_label(12), Text::SkillsYears);
    }
}
