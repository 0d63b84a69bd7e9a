use leptos::prelude::*;
use leptos_router::hooks::use_location;
use leptos_use::{use_locales_with_options, UseLocalesOptions};

use crate::effects::ScrollSpy;
use crate::i18n::{dictionary, resolve_locale, Dictionary, Locale, Text};
use crate::preferences::{PreferenceStore, ThemeMode, ROOT_CLASSES};

/// Theme state shared through context. The store owns persistence, the
/// signal drives rendering.
#[derive(Debug, Clone, Copy)]
pub struct ThemeContext {
    store: StoredValue<PreferenceStore>,
    theme: RwSignal<ThemeMode>,
}

impl ThemeContext {
    pub fn theme(&self) -> ThemeMode {
        self.theme.get()
    }

    pub fn set_theme(&self, mode: ThemeMode) {
        self.store.update_value(|s| s.set_theme(mode));
        self.theme.set(mode);
    }

    pub fn advance_theme(&self) {
        let mut next = ThemeMode::default();
        self.store.update_value(|s| next = s.advance_theme());
        self.theme.set(next);
    }

    /// Loads the persisted theme. Only meaningful in the browser, after
    /// hydration, so the server markup and the first client render agree.
    fn hydrate(&self) {
        let mut mode = ThemeMode::default();
        self.store.update_value(|s| mode = s.hydrate());
        self.theme.set(mode);
    }

    /// Classes for the root element. High contrast layers over the dark palette.
    pub fn root_class(&self) -> String {
        self.theme().root_classes().join(" ")
    }
}

pub fn provide_theme(store: PreferenceStore) {
    let initial = store.theme();
    let ctx = ThemeContext {
        store: StoredValue::new(store),
        theme: RwSignal::new(initial),
    };
    provide_context(ctx);

    // effects only run in the browser
    Effect::new(move |_| ctx.hydrate());
    // only the theme classes are touched, anything else on <html> stays
    Effect::new(move |_| {
        let theme = ctx.theme();
        let Some(root) = document().document_element() else {
            return;
        };
        let classes = root.class_list();
        for class in ROOT_CLASSES {
            if let Err(e) = classes.remove_1(class) {
                log::warn!("couldn't clear theme class {class}: {e:?}");
            }
        }
        for class in theme.root_classes() {
            if let Err(e) = classes.add_1(class) {
                log::warn!("couldn't apply theme class {class}: {e:?}");
            }
        }
    });
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

#[derive(Debug, Clone, Copy)]
pub struct I18nContext {
    explicit: RwSignal<Option<Locale>>,
    locale: Memo<Locale>,
}

impl I18nContext {
    pub fn locale(&self) -> Locale {
        self.locale.get()
    }

    pub fn locale_untracked(&self) -> Locale {
        self.locale.get_untracked()
    }

    /// Records an explicit choice, which outranks the path and the browser.
    pub fn change_locale(&self, code: &str) {
        match Locale::from_code(code) {
            Some(locale) => self.explicit.set(Some(locale)),
            None => log::warn!("ignoring unsupported locale {code:?}"),
        }
    }

    pub fn dict(&self) -> &'static Dictionary {
        dictionary(self.locale())
    }

    pub fn t(&self, text: Text) -> &'static str {
        self.dict().text(text)
    }
}

/// The server doesn't look at `Accept-Language`: server markup always uses
/// the path or the default, and the browser's languages only count once
/// hydrated.
fn browser_languages() -> Signal<Vec<String>> {
    use_locales_with_options(UseLocalesOptions::default().ssr_lang_header_getter(|| None))
}

/// Must be called under the router, the path is one of the inputs.
pub fn provide_i18n() {
    let explicit = RwSignal::new(None::<Locale>);
    let browser = RwSignal::new(Vec::<String>::new());
    let languages = browser_languages();
    let pathname = use_location().pathname;

    // the browser's languages are only picked up after hydration
    Effect::new(move |_| browser.set(languages.get()));

    let locale = Memo::new(move |_| {
        pathname.with(|path| {
            browser.with(|langs| resolve_locale(explicit.get(), path, langs.as_slice()))
        })
    });

    Effect::new(move |_| {
        let lang = locale.get().as_str();
        if let Some(root) = document().document_element() {
            let _ = root.set_attribute("lang", lang);
        }
    });

    provide_context(I18nContext { explicit, locale });
}

pub fn use_i18n() -> I18nContext {
    expect_context::<I18nContext>()
}

pub fn provide_scroll_spy() {
    provide_context(RwSignal::new(ScrollSpy::default()));
}

pub fn use_scroll_spy() -> RwSignal<ScrollSpy> {
    expect_context::<RwSignal<ScrollSpy>>()
}

#[cfg(test)]
mod tests {
    use leptos::reactive::owner::Owner;

    use super::*;

    #[test]
    fn test_server_render_ignores_request_languages() {
        let owner = Owner::new();
        owner.with(|| {
            assert!(browser_languages().get_untracked().is_empty());
        });
    }

    #[test]
    fn test_root_class_matches_theme_classes() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ThemeContext {
                store: StoredValue::new(PreferenceStore::new(
                    crate::preferences::MemoryStorage::new(),
                )),
                theme: RwSignal::new(ThemeMode::HighContrast),
            };
            assert_eq!(ctx.root_class(), "dark high-contrast");
            ctx.set_theme(ThemeMode::Light);
            assert_eq!(ctx.root_class(), "light");
        });
    }
}
