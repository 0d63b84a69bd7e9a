use std::fmt;

use crate::i18n::Localized;

/// Number of records revealed initially and per "load more".
pub const PAGE_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectRecord {
    pub title: Localized,
    pub description: Localized,
    pub technologies: &'static [&'static str],
    pub category: &'static str,
    pub image_ref: &'static str,
    pub repo_link: Option<&'static str>,
    pub demo_link: Option<&'static str>,
}

pub static PROJECTS: [ProjectRecord; 6] = [
    ProjectRecord {
        title: Localized::new("AI-Powered Data Processing", "Procesamiento de Datos con IA"),
        description: Localized::new(
            "Serverless application using AWS Lambda and Amazon Bedrock to process and analyze large datasets with LLM integration.",
            "Aplicación serverless utilizando AWS Lambda y Amazon Bedrock para procesar y analizar grandes conjuntos de datos con integración de LLM.",
        ),
        technologies: &["AWS", "Python", "React", "TypeScript"],
        category: "AI",
        image_ref: "https://placehold.co/600x400/2563eb/ffffff?text=AI",
        repo_link: Some("https://github.com/juang/ai-data-processing"),
        demo_link: None,
    },
    ProjectRecord {
        title: Localized::new("Enterprise Web Application", "Aplicación Web Empresarial"),
        description: Localized::new(
            "Scalable web application with complex business logic and multiple integrations with third-party services.",
            "Aplicación web escalable con lógica de negocio compleja y múltiples integraciones con servicios de terceros.",
        ),
        technologies: &["Node.js", "React", "MongoDB", "AWS"],
        category: "Web",
        image_ref: "https://placehold.co/600x400/4f46e5/ffffff?text=Web",
        repo_link: Some("https://github.com/juang/enterprise-web"),
        demo_link: Some("https://enterprise-web.example.com"),
    },
    ProjectRecord {
        title: Localized::new("RESTful API Development", "Desarrollo de API RESTful"),
        description: Localized::new(
            "High-performance RESTful API for data management with comprehensive documentation and security features.",
            "API RESTful de alto rendimiento para gestión de datos con documentación completa y características de seguridad.",
        ),
        technologies: &["Node.js", "Express", "SQL", "Docker"],
        category: "Backend",
        image_ref: "https://placehold.co/600x400/0891b2/ffffff?text=API",
        repo_link: Some("https://github.com/juang/restful-api"),
        demo_link: None,
    },
    ProjectRecord {
        title: Localized::new("Analytics Dashboard", "Panel de Analítica"),
        description: Localized::new(
            "ETL pipeline and interactive dashboard that turns raw operational data into weekly business reports.",
            "Pipeline ETL y panel interactivo que convierte datos operativos en reportes semanales de negocio.",
        ),
        technologies: &["Python", "PostgreSQL", "AWS Glue"],
        category: "Data",
        image_ref: "https://placehold.co/600x400/059669/ffffff?text=Data",
        repo_link: None,
        demo_link: Some("https://analytics.example.com"),
    },
    ProjectRecord {
        title: Localized::new("Portfolio Website", "Sitio Web Portafolio"),
        description: Localized::new(
            "Bilingual portfolio with theming, scroll effects and a filterable project gallery.",
            "Portafolio bilingüe con temas, efectos de desplazamiento y una galería de proyectos filtrable.",
        ),
        technologies: &["Rust", "Leptos", "Tailwind CSS"],
        category: "Web",
        image_ref: "https://placehold.co/600x400/7c3aed/ffffff?text=Portfolio",
        repo_link: Some("https://github.com/juang/portfolio"),
        demo_link: Some("https://juang.dev"),
    },
    ProjectRecord {
        title: Localized::new("Field Service Mobile App", "App Móvil de Servicio de Campo"),
        description: Localized::new(
            "Cross-platform app for technicians to receive work orders, capture photos and sync offline.",
            "App multiplataforma para que técnicos reciban órdenes de trabajo, capturen fotos y sincronicen sin conexión.",
        ),
        technologies: &["React Native", "TypeScript", "SQLite"],
        category: "Mobile",
        image_ref: "https://placehold.co/600x400/db2777/ffffff?text=Mobile",
        repo_link: None,
        demo_link: None,
    },
];

/// Anything a [`CategoryFilter`] can select by its category name.
pub trait Categorized {
    fn category(&self) -> &'static str;
}

impl Categorized for ProjectRecord {
    fn category(&self) -> &'static str {
        self.category
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(&'static str),
}

impl CategoryFilter {
    pub fn matches<T: Categorized>(&self, item: &T) -> bool {
        match self {
            Self::All => true,
            Self::Category(c) => item.category() == *c,
        }
    }

    /// `All` followed by each distinct category in first-seen order.
    pub fn options<T: Categorized>(items: &[T]) -> Vec<Self> {
        let mut categories = vec![Self::All];
        for item in items {
            let c = Self::Category(item.category());
            if !categories.contains(&c) {
                categories.push(c);
            }
        }
        categories
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Category(c) => f.write_str(c),
        }
    }
}

/// Category filter plus a growing window over a fixed project list.
///
/// `visible_count` is reset to [`PAGE_SIZE`] whenever the category changes
/// and only grows through [`ProjectFilter::load_more`], which never takes it
/// past the filtered length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFilter<'a> {
    projects: &'a [ProjectRecord],
    active: CategoryFilter,
    visible_count: usize,
}

impl<'a> ProjectFilter<'a> {
    pub fn new(projects: &'a [ProjectRecord]) -> Self {
        Self {
            projects,
            active: CategoryFilter::All,
            visible_count: PAGE_SIZE,
        }
    }

    pub fn categories(&self) -> Vec<CategoryFilter> {
        CategoryFilter::options(self.projects)
    }

    pub fn active(&self) -> CategoryFilter {
        self.active
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.active = category;
        self.visible_count = PAGE_SIZE;
    }

    /// Selects a category by its display name. `"All"` selects everything;
    /// a name with no records selects an empty category.
    pub fn set_category_by_name(&mut self, name: &str) {
        let category = self
            .categories()
            .into_iter()
            .find(|c| c.to_string() == name)
            .unwrap_or(CategoryFilter::Category(""));
        self.set_category(category);
    }

    pub fn filtered(&self) -> impl Iterator<Item = &'a ProjectRecord> + '_ {
        self.projects.iter().filter(|p| self.active.matches(*p))
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered().count()
    }

    pub fn visible_projects(&self) -> Vec<&'a ProjectRecord> {
        self.filtered().take(self.visible_count).collect()
    }

    pub fn can_load_more(&self) -> bool {
        self.visible_count < self.filtered_len()
    }

    pub fn load_more(&mut self) {
        let len = self.filtered_len();
        if self.visible_count < len {
            self.visible_count = (self.visible_count + PAGE_SIZE).min(len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(filters: &[CategoryFilter]) -> Vec<String> {
        filters.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_categories_first_seen_order() {
        let filter = ProjectFilter::new(&PROJECTS);
        assert_eq!(
            names(&filter.categories()),
            vec!["All", "AI", "Web", "Backend", "Data", "Mobile"]
        );
    }

    #[test]
    fn test_categories_stable_across_state_changes() {
        let mut filter = ProjectFilter::new(&PROJECTS);
        let before = filter.categories();
        filter.set_category(CategoryFilter::Category("Web"));
        filter.load_more();
        let after = filter.categories();
        assert_eq!(before, after);
        assert_eq!(
            after.iter().filter(|c| **c == CategoryFilter::All).count(),
            1
        );
    }

    #[test]
    fn test_web_filter_keeps_source_order() {
        let mut filter = ProjectFilter::new(&PROJECTS);
        filter.set_category(CategoryFilter::Category("Web"));
        let visible = filter.visible_projects();
        assert_eq!(visible.len(), 2);
        assert_eq!(visible[0].title.en, "Enterprise Web Application");
        assert_eq!(visible[1].title.en, "Portfolio Website");
        assert!(!filter.can_load_more());
    }

    #[test]
    fn test_set_category_resets_window() {
        let mut filter = ProjectFilter::new(&PROJECTS);
        filter.load_more();
        assert_eq!(filter.visible_count(), 6);
        for category in filter.categories() {
            filter.load_more();
            filter.set_category(category);
            assert_eq!(filter.visible_count(), PAGE_SIZE);
        }
    }

    #[test]
    fn test_load_more_is_clamped() {
        let mut filter = ProjectFilter::new(&PROJECTS);
        assert_eq!(filter.visible_projects().len(), 3);
        assert!(filter.can_load_more());
        filter.load_more();
        assert_eq!(filter.visible_count(), 6);
        assert_eq!(filter.visible_projects().len(), 6);
        assert!(!filter.can_load_more());
        filter.load_more();
        assert_eq!(filter.visible_count(), 6);

        for category in filter.categories() {
            filter.set_category(category);
            for _ in 0..4 {
                filter.load_more();
                assert!(filter.visible_projects().len() <= filter.filtered_len());
            }
        }
    }

    #[test]
    fn test_partial_page_growth() {
        let projects = [PROJECTS[0]; 5];
        let mut filter = ProjectFilter::new(&projects);
        filter.load_more();
        assert_eq!(filter.visible_count(), 5);
    }

    #[test]
    fn test_empty_category() {
        let mut filter = ProjectFilter::new(&PROJECTS);
        filter.set_category_by_name("Games");
        assert!(filter.visible_projects().is_empty());
        assert!(!filter.can_load_more());
        filter.load_more();
        assert!(filter.visible_projects().is_empty());
    }

    #[test]
    fn test_set_category_by_name() {
        let mut filter = ProjectFilter::new(&PROJECTS);
        filter.set_category_by_name("Mobile");
        assert_eq!(filter.active(), CategoryFilter::Category("Mobile"));
        assert_eq!(filter.visible_projects().len(), 1);
        filter.set_category_by_name("All");
        assert_eq!(filter.active(), CategoryFilter::All);
    }

    #[test]
    fn test_empty_source() {
        let filter = ProjectFilter::new(&[]);
        assert_eq!(filter.categories(), vec![CategoryFilter::All]);
        assert!(filter.visible_projects().is_empty());
    }
}
