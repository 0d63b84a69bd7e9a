mod about;
mod contact;
mod context;
mod decor;
mod education;
mod experience;
mod fallback;
mod footer;
mod header;
mod hero;
mod projects;
mod section;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, hooks::use_params_map, path};

use crate::i18n::{Locale, Text};
use crate::preferences::PreferenceStore;

use about::About;
use contact::Contact;
use context::{provide_i18n, provide_scroll_spy, provide_theme, use_i18n, use_theme};
use decor::{CustomCursor, FocusIndicator, ScrollToTop};
use education::Education;
use experience::Experience;
use fallback::{ErrorFallback, NotFound};
use footer::Footer;
use header::Header;
use hero::Hero;
use projects::Projects;
use skills::Skills;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    #[cfg(feature = "hydrate")]
    let storage = crate::preferences::SignalStorage::local();
    #[cfg(not(feature = "hydrate"))]
    let storage = crate::preferences::MemoryStorage::new();
    provide_theme(PreferenceStore::new(storage));
    provide_scroll_spy();

    view! {
        <Title formatter=|title| format!("{} - {title}", crate::site::OWNER_NAME) />
        <Router>
            <Layout />
        </Router>
    }
}

/// Everything that needs the router: locale resolution reads the path.
#[component]
fn Layout() -> impl IntoView {
    provide_i18n();
    let i18n = use_i18n();
    let theme = use_theme();

    view! {
        <Title text=move || i18n.t(Text::HeroTitle) />
        <Meta name="description" content=move || i18n.t(Text::HeroDescription) />
        <div class=move || {
            format!(
                "{} min-h-screen bg-white dark:bg-gray-900 text-gray-900 dark:text-gray-100 transition-colors duration-300",
                theme.root_class(),
            )
        }>
            <FocusIndicator />
            <CustomCursor />
            <Header />
            <main>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/:locale") view=HomePage />
                </Routes>
            </main>
            <Footer />
            <ScrollToTop />
        </div>
    }
}

/// Renders the single page. An unsupported locale segment is reported
/// through the error boundary.
#[component]
fn HomePage() -> impl IntoView {
    let params = use_params_map();
    let locale_param = move || {
        params
            .read()
            .get("locale")
            .map(|code| code.parse::<Locale>())
            .transpose()
            .map(|_| ())
    };

    view! {
        <ErrorBoundary fallback=|errors| view! { <ErrorFallback errors /> }>
            {locale_param}
            <Hero />
            <About />
            <Experience />
            <Skills />
            <Education />
            <Projects />
            <Contact />
        </ErrorBoundary>
    }
}
