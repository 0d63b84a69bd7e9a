use leptos::prelude::*;
use leptos_router::{hooks::use_navigate, NavigateOptions};
use leptos_use::use_window_scroll;

use crate::effects::header_is_solid;
use crate::i18n::{Locale, Text};
use crate::preferences::ThemeMode;
use crate::site::{Section, INITIALS};

use super::context::{use_i18n, use_scroll_spy, use_theme};

#[component]
pub fn Header() -> impl IntoView {
    let i18n = use_i18n();
    let spy = use_scroll_spy();
    let (_, scroll_y) = use_window_scroll();
    let (menu_open, set_menu_open) = signal(false);

    let header_class = move || {
        let surface = if header_is_solid(scroll_y.get()) {
            "bg-white/90 dark:bg-gray-900/90 backdrop-blur-md shadow-md"
        } else {
            "bg-transparent"
        };
        format!("fixed top-0 inset-x-0 z-40 transition-all duration-300 {surface}")
    };

    let links = move |mobile: bool| {
        Section::ALL
            .into_iter()
            .map(|section| {
                let class = move || {
                    let base = if mobile {
                        "block px-3 py-2 rounded-md text-base font-medium"
                    } else {
                        "px-3 py-2 text-sm font-medium transition-colors"
                    };
                    let state = if spy.with(|s| s.is_active(section.id())) {
                        "text-blue-600 dark:text-blue-400"
                    } else {
                        "text-gray-700 dark:text-gray-300 hover:text-blue-600 dark:hover:text-blue-400"
                    };
                    format!("{base} {state}")
                };
                view! {
                    <a href=section.href() class=class on:click=move |_| set_menu_open.set(false)>
                        {move || i18n.t(section.label())}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <header class=header_class>
            <nav class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <a
                        href=Section::Home.href()
                        class="text-2xl font-bold text-blue-600 dark:text-blue-400"
                    >
                        {INITIALS}
                    </a>
                    <div class="hidden md:flex items-center space-x-2">
                        {links(false)} <ThemeToggle /> <LanguageSwitcher />
                    </div>
                    <div class="md:hidden flex items-center gap-2">
                        <ThemeToggle />
                        <LanguageSwitcher />
                        <button
                            type="button"
                            class="p-2 rounded-md text-gray-700 dark:text-gray-300"
                            aria-expanded=move || menu_open.get().to_string()
                            aria-label=move || {
                                i18n.t(if menu_open.get() { Text::NavCloseMenu } else { Text::NavOpenMenu })
                            }
                            on:click=move |_| set_menu_open.update(|open| *open = !*open)
                        >
                            {move || if menu_open.get() { "✕" } else { "☰" }}
                        </button>
                    </div>
                </div>
                <Show when=move || menu_open.get()>
                    <div class="md:hidden pb-4 space-y-1">{links(true)}</div>
                </Show>
            </nav>
        </header>
    }
}

fn theme_label(mode: ThemeMode) -> Text {
    match mode {
        ThemeMode::Light => Text::ThemeLight,
        ThemeMode::Dark => Text::ThemeDark,
        ThemeMode::HighContrast => Text::ThemeHighContrast,
    }
}

/// Cycles light, dark and high contrast.
#[component]
fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();
    let i18n = use_i18n();
    let label = move || i18n.t(theme_label(theme.theme()));
    let icon = move || match theme.theme() {
        ThemeMode::Light => "☀",
        ThemeMode::Dark => "☾",
        ThemeMode::HighContrast => "◐",
    };

    view! {
        <button
            type="button"
            class="p-2 rounded-full bg-gray-100 dark:bg-gray-800 text-gray-800 dark:text-gray-200 hover:ring-2 hover:ring-blue-500"
            title=label
            aria-label=label
            on:click=move |_| theme.advance_theme()
        >
            <span aria-hidden="true">{icon}</span>
        </button>
    }
}

/// Switches to the other language and moves to its path so the choice
/// survives a reload.
#[component]
fn LanguageSwitcher() -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();
    let other = move || i18n.locale().toggled();
    let label = move || {
        i18n.t(match other() {
            Locale::En => Text::LanguageEn,
            Locale::Es => Text::LanguageEs,
        })
    };

    view! {
        <button
            type="button"
            class="px-2 py-1 rounded-md text-sm font-semibold uppercase text-gray-700 dark:text-gray-300 border border-gray-300 dark:border-gray-600"
            title=label
            aria-label=label
            on:click=move |_| {
                let next = i18n.locale_untracked().toggled();
                i18n.change_locale(next.as_str());
                navigate(&format!("/{next}"), NavigateOptions::default());
            }
        >
            {move || other().as_str()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::dictionary;

    #[test]
    fn test_theme_labels_are_distinct() {
        for locale in Locale::ALL {
            let dict = dictionary(locale);
            let labels: Vec<_> = ThemeMode::ALL
                .iter()
                .map(|mode| dict.text(theme_label(*mode)))
                .collect();
            assert_ne!(labels[0], labels[1]);
            assert_ne!(labels[1], labels[2]);
        }
    }
}
