mod en;
mod es;

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    #[default]
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Self::En, Self::Es];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Parses a language tag by its primary subtag: `en`, `en-US`, `es_419`.
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code.trim().split(['-', '_']).next()?;
        match primary.to_ascii_lowercase().as_str() {
            "en" => Some(Self::En),
            "es" => Some(Self::Es),
            _ => None,
        }
    }

    /// The other language, for the switcher.
    pub fn toggled(self) -> Self {
        match self {
            Self::En => Self::Es,
            Self::Es => Self::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Locale {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| I18nError::UnknownLocale(s.to_string()))
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum I18nError {
    #[error("Missing translation key: {0}")]
    MissingKey(String),
    #[error("Unsupported locale: {0}")]
    UnknownLocale(String),
}

/// Locale hint from the first path segment, e.g. `/en/...`.
pub fn locale_from_path(path: &str) -> Option<Locale> {
    let segment = path.trim_start_matches('/').split('/').next()?;
    match segment {
        "en" => Some(Locale::En),
        "es" => Some(Locale::Es),
        _ => None,
    }
}

/// Explicit choice, then path segment, then the first recognised browser
/// language, then Spanish.
pub fn resolve_locale<S: AsRef<str>>(
    explicit: Option<Locale>,
    path: &str,
    browser_languages: &[S],
) -> Locale {
    explicit
        .or_else(|| locale_from_path(path))
        .or_else(|| {
            browser_languages
                .iter()
                .find_map(|lang| Locale::from_code(lang.as_ref()))
        })
        .unwrap_or_default()
}

/// A value available in both languages. Used for content that lives outside
/// the dictionaries, like project records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Localized {
    pub en: &'static str,
    pub es: &'static str,
}

impl Localized {
    pub const fn new(en: &'static str, es: &'static str) -> Self {
        Self { en, es }
    }

    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Es => self.es,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub current: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Degree {
    pub title: &'static str,
    pub institution: &'static str,
    pub period: &'static str,
    pub status: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpokenLanguage {
    pub name: &'static str,
    pub level: &'static str,
    /// Width of the proficiency bar, 0-100.
    pub proficiency: u8,
}

pub struct NavText {
    pub home: &'static str,
    pub about: &'static str,
    pub experience: &'static str,
    pub skills: &'static str,
    pub education: &'static str,
    pub projects: &'static str,
    pub contact: &'static str,
    pub open_menu: &'static str,
    pub close_menu: &'static str,
    pub back_to_top: &'static str,
}

pub struct HeroText {
    pub greeting: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub cta: &'static str,
    pub contact: &'static str,
    pub roles: &'static [&'static str],
}

pub struct AboutText {
    pub title: &'static str,
    pub description: &'static str,
    pub years_of_experience: &'static str,
    pub completed_projects: &'static str,
    pub technologies: &'static str,
}

pub struct ExperienceText {
    pub title: &'static str,
    pub current: &'static str,
    pub roles: &'static [Role],
}

pub struct SkillsText {
    pub title: &'static str,
    pub hard_skills: &'static str,
    pub soft_skills: &'static str,
    pub languages: &'static str,
    pub chart_title: &'static str,
    pub all: &'static str,
    pub year: &'static str,
    pub years: &'static str,
    pub experience: &'static str,
    pub select_prompt: &'static str,
    pub hard: &'static [&'static str],
    pub soft: &'static [&'static str],
    pub languages_list: &'static [SpokenLanguage],
}

pub struct EducationText {
    pub title: &'static str,
    pub degrees: &'static [Degree],
    pub certifications_title: &'static str,
    pub certifications: &'static [&'static str],
}

pub struct ProjectsText {
    pub title: &'static str,
    pub description: &'static str,
    pub load_more: &'static str,
    pub all: &'static str,
    pub empty: &'static str,
    pub code: &'static str,
    pub demo: &'static str,
}

pub struct ContactText {
    pub title: &'static str,
    pub description: &'static str,
    pub form_name: &'static str,
    pub form_email: &'static str,
    pub form_message: &'static str,
    pub form_send: &'static str,
    pub form_sent: &'static str,
    pub phone: &'static str,
    pub email: &'static str,
    pub location: &'static str,
}

pub struct ThemeText {
    pub light: &'static str,
    pub dark: &'static str,
    pub high_contrast: &'static str,
}

pub struct LanguageText {
    pub en: &'static str,
    pub es: &'static str,
}

pub struct FooterText {
    pub rights: &'static str,
    pub navigation: &'static str,
    pub built: &'static str,
}

pub struct ErrorText {
    pub title: &'static str,
    pub fallback: &'static str,
    pub retry: &'static str,
    pub not_found: &'static str,
}

pub struct Dictionary {
    pub nav: NavText,
    pub hero: HeroText,
    pub about: AboutText,
    pub experience: ExperienceText,
    pub skills: SkillsText,
    pub education: EducationText,
    pub projects: ProjectsText,
    pub contact: ContactText,
    pub theme: ThemeText,
    pub language: LanguageText,
    pub footer: FooterText,
    pub error: ErrorText,
}

pub fn dictionary(locale: Locale) -> &'static Dictionary {
    match locale {
        Locale::En => &en::EN,
        Locale::Es => &es::ES,
    }
}

macro_rules! messages {
    (
        text { $($text:ident => $text_key:literal => $($text_path:ident).+;)* }
        list { $($list:ident => $list_key:literal => $($list_path:ident).+;)* }
    ) => {
        /// String-valued messages.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Text {
            $($text,)*
        }

        impl Text {
            pub const ALL: &'static [Text] = &[$(Text::$text,)*];

            pub fn key(self) -> &'static str {
                match self {
                    $(Text::$text => $text_key,)*
                }
            }
        }

        /// List-valued messages.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum List {
            $($list,)*
        }

        impl List {
            pub const ALL: &'static [List] = &[$(List::$list,)*];

            pub fn key(self) -> &'static str {
                match self {
                    $(List::$list => $list_key,)*
                }
            }
        }

        impl Dictionary {
            pub fn text(&self, text: Text) -> &'static str {
                match text {
                    $(Text::$text => self.$($text_path).+,)*
                }
            }

            pub fn list(&self, list: List) -> &'static [&'static str] {
                match list {
                    $(List::$list => self.$($list_path).+,)*
                }
            }
        }
    };
}

messages! {
    text {
        NavHome => "nav.home" => nav.home;
        NavAbout => "nav.about" => nav.about;
        NavExperience => "nav.experience" => nav.experience;
        NavSkills => "nav.skills" => nav.skills;
        NavEducation => "nav.education" => nav.education;
        NavProjects => "nav.projects" => nav.projects;
        NavContact => "nav.contact" => nav.contact;
        NavOpenMenu => "nav.openMenu" => nav.open_menu;
        NavCloseMenu => "nav.closeMenu" => nav.close_menu;
        NavBackToTop => "nav.backToTop" => nav.back_to_top;
        HeroGreeting => "hero.greeting" => hero.greeting;
        HeroName => "hero.name" => hero.name;
        HeroTitle => "hero.title" => hero.title;
        HeroDescription => "hero.description" => hero.description;
        HeroCta => "hero.cta" => hero.cta;
        HeroContact => "hero.contact" => hero.contact;
        AboutTitle => "about.title" => about.title;
        AboutDescription => "about.description" => about.description;
        AboutYearsOfExperience => "about.yearsOfExperience" => about.years_of_experience;
        AboutCompletedProjects => "about.completedProjects" => about.completed_projects;
        AboutTechnologies => "about.technologies" => about.technologies;
        ExperienceTitle => "experience.title" => experience.title;
        ExperienceCurrent => "experience.current" => experience.current;
        SkillsTitle => "skills.title" => skills.title;
        SkillsHardSkills => "skills.hardSkills" => skills.hard_skills;
        SkillsSoftSkills => "skills.softSkills" => skills.soft_skills;
        SkillsLanguages => "skills.languages" => skills.languages;
        SkillsChartTitle => "skills.chartTitle" => skills.chart_title;
        SkillsAll => "skills.all" => skills.all;
        SkillsYear => "skills.year" => skills.year;
        SkillsYears => "skills.years" => skills.years;
        SkillsExperience => "skills.experience" => skills.experience;
        SkillsSelectPrompt => "skills.selectPrompt" => skills.select_prompt;
        EducationTitle => "education.title" => education.title;
        EducationCertificationsTitle => "education.certifications.title" => education.certifications_title;
        ProjectsTitle => "projects.title" => projects.title;
        ProjectsDescription => "projects.description" => projects.description;
        ProjectsLoadMore => "projects.loadMore" => projects.load_more;
        ProjectsAll => "projects.all" => projects.all;
        ProjectsEmpty => "projects.empty" => projects.empty;
        ProjectsCode => "projects.code" => projects.code;
        ProjectsDemo => "projects.demo" => projects.demo;
        ContactTitle => "contact.title" => contact.title;
        ContactDescription => "contact.description" => contact.description;
        ContactFormName => "contact.form.name" => contact.form_name;
        ContactFormEmail => "contact.form.email" => contact.form_email;
        ContactFormMessage => "contact.form.message" => contact.form_message;
        ContactFormSend => "contact.form.send" => contact.form_send;
        ContactFormSent => "contact.form.sent" => contact.form_sent;
        ContactPhone => "contact.phone" => contact.phone;
        ContactEmail => "contact.email" => contact.email;
        ContactLocation => "contact.location" => contact.location;
        ThemeLight => "theme.light" => theme.light;
        ThemeDark => "theme.dark" => theme.dark;
        ThemeHighContrast => "theme.highContrast" => theme.high_contrast;
        LanguageEn => "language.en" => language.en;
        LanguageEs => "language.es" => language.es;
        FooterRights => "footer.rights" => footer.rights;
        FooterNavigation => "footer.navigation" => footer.navigation;
        FooterBuilt => "footer.built" => footer.built;
        ErrorTitle => "error.title" => error.title;
        ErrorFallback => "error.fallback" => error.fallback;
        ErrorRetry => "error.retry" => error.retry;
        ErrorNotFound => "error.notFound" => error.not_found;
    }
    list {
        HeroRoles => "hero.roles" => hero.roles;
        SkillsHard => "skills.hard" => skills.hard;
        SkillsSoft => "skills.soft" => skills.soft;
        EducationCertifications => "education.certifications.list" => education.certifications;
    }
}

impl Text {
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|t| t.key() == key)
    }
}

impl List {
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.key() == key)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entry<'a> {
    Text(&'a str),
    List(&'a [&'a str]),
}

impl<'a> Entry<'a> {
    /// The text value, or the list joined with `", "`.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(s) => s.to_string(),
            Self::List(items) => items.join(", "),
        }
    }
}

pub fn lookup(key: &str, locale: Locale) -> Result<Entry<'static>, I18nError> {
    let dict = dictionary(locale);
    if let Some(text) = Text::from_key(key) {
        return Ok(Entry::Text(dict.text(text)));
    }
    if let Some(list) = List::from_key(key) {
        return Ok(Entry::List(dict.list(list)));
    }
    Err(I18nError::MissingKey(key.to_string()))
}

/// Dotted-key lookup. A missing key is logged as an error and rendered as
/// the key itself.
pub fn translate(key: &str, locale: Locale) -> Entry<'_> {
    match lookup(key, locale) {
        Ok(entry) => entry,
        Err(e) => {
            log::error!("{e} ({locale})");
            Entry::Text(key)
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_nav_home() {
        assert_eq!(translate("nav.home", Locale::En), Entry::Text("Home"));
        assert_eq!(translate("nav.home", Locale::Es), Entry::Text("Inicio"));
    }

    #[test]
    fn test_missing_key_falls_back_to_key() {
        assert_eq!(
            translate("nav.nowhere", Locale::En),
            Entry::Text("nav.nowhere")
        );
        assert_eq!(
            lookup("nav.nowhere", Locale::Es),
            Err(I18nError::MissingKey("nav.nowhere".to_string()))
        );
    }

    #[test]
    fn test_list_entries() {
        let Entry::List(soft) = translate("skills.soft", Locale::En) else {
            panic!("skills.soft should be a list");
        };
        assert!(soft.contains(&"Leadership"));
        let Entry::List(soft) = translate("skills.soft", Locale::Es) else {
            panic!("skills.soft should be a list");
        };
        assert!(soft.contains(&"Liderazgo"));
    }

    #[test]
    fn test_keys_are_unique() {
        let mut seen = HashSet::new();
        for key in Text::ALL
            .iter()
            .map(|t| t.key())
            .chain(List::ALL.iter().map(|l| l.key()))
        {
            assert!(seen.insert(key), "duplicate key {key}");
        }
    }

    #[test]
    fn test_every_message_is_translated() {
        for locale in Locale::ALL {
            let dict = dictionary(locale);
            for text in Text::ALL {
                assert!(!dict.text(*text).is_empty(), "{} empty in {locale}", text.key());
            }
            for list in List::ALL {
                assert!(!dict.list(*list).is_empty(), "{} empty in {locale}", list.key());
            }
            assert!(!dict.experience.roles.is_empty());
            assert!(!dict.education.degrees.is_empty());
            assert!(!dict.skills.languages_list.is_empty());
        }
    }

    #[test]
    fn test_default_locale_without_hints() {
        let none: [&str; 0] = [];
        assert_eq!(resolve_locale(None, "/", &none), Locale::Es);
        assert_eq!(resolve_locale(None, "", &["fr-FR", "de"]), Locale::Es);
    }

    #[test]
    fn test_resolution_order() {
        assert_eq!(resolve_locale(None, "/", &["en-US"]), Locale::En);
        assert_eq!(resolve_locale(None, "/es", &["en-US"]), Locale::Es);
        assert_eq!(resolve_locale(None, "/en/", &["es"]), Locale::En);
        assert_eq!(
            resolve_locale(Some(Locale::Es), "/en", &["en"]),
            Locale::Es
        );
        assert_eq!(resolve_locale(None, "/", &["fr", "en-GB"]), Locale::En);
    }

    #[test]
    fn test_locale_from_path() {
        assert_eq!(locale_from_path("/en"), Some(Locale::En));
        assert_eq!(locale_from_path("/es/projects"), Some(Locale::Es));
        assert_eq!(locale_from_path("en"), Some(Locale::En));
        assert_eq!(locale_from_path("/"), None);
        assert_eq!(locale_from_path("/english"), None);
        assert_eq!(locale_from_path("/fr/en"), None);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Locale::from_code("EN-us"), Some(Locale::En));
        assert_eq!(Locale::from_code("es_419"), Some(Locale::Es));
        assert_eq!(Locale::from_code("pt-BR"), None);
        assert_eq!(Locale::from_code(""), None);
        assert!("xx".parse::<Locale>().is_err());
        assert_eq!("es".parse::<Locale>(), Ok(Locale::Es));
    }

    #[test]
    fn test_toggled() {
        assert_eq!(Locale::En.toggled(), Locale::Es);
        assert_eq!(Locale::Es.toggled().toggled(), Locale::Es);
    }
}
