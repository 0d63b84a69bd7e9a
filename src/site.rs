use crate::i18n::Text;

pub const OWNER_NAME: &str = "Juan G.";
pub const INITIALS: &str = "JG";
pub const PHONE: &str = "+(502) 44911338";
pub const EMAIL: &str = "johngamezm@gmail.com";
pub const LOCATION: &str = "Guatemala City, Guatemala";
pub const GITHUB_URL: &str = "https://github.com/juang";
pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/juang";

/// Figures counted up in the About section.
pub const YEARS_OF_EXPERIENCE: u32 = 4;
pub const COMPLETED_PROJECTS: u32 = 20;
pub const TECHNOLOGIES: u32 = 15;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    About,
    Experience,
    Skills,
    Education,
    Projects,
    Contact,
}

impl Section {
    /// Page order.
    pub const ALL: [Section; 7] = [
        Self::Home,
        Self::About,
        Self::Experience,
        Self::Skills,
        Self::Education,
        Self::Projects,
        Self::Contact,
    ];

    /// Anchor id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Experience => "experience",
            Self::Skills => "skills",
            Self::Education => "education",
            Self::Projects => "projects",
            Self::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> Text {
        match self {
            Self::Home => Text::NavHome,
            Self::About => Text::NavAbout,
            Self::Experience => Text::NavExperience,
            Self::Skills => Text::NavSkills,
            Self::Education => Text::NavEducation,
            Self::Projects => Text::NavProjects,
            Self::Contact => Text::NavContact,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::i18n::{translate, Entry, Locale};

    #[test]
    fn test_section_ids_unique() {
        let ids: HashSet<_> = Section::ALL.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }

    #[test]
    fn test_section_labels_resolve() {
        assert_eq!(Section::Projects.href(), "#projects");
        for section in Section::ALL {
            let key = section.label().key();
            assert!(key.starts_with("nav."));
            assert_ne!(translate(key, Locale::En), Entry::Text(key));
        }
    }
}
