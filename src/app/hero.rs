use std::time::Duration;

use leptos::prelude::*;
use leptos_use::{use_interval_fn, use_window_scroll};

use crate::effects::parallax_offset;
use crate::i18n::{dictionary, List, Text};
use crate::site::{Section, GITHUB_URL, LINKEDIN_URL};
use crate::typing::{TypingText, DELETE_DELAY};

use super::context::use_i18n;
use super::decor::ParticleBackground;
use super::section::PageSection;

/// The typing effect is driven at the finest of its delays.
const TICK: Duration = DELETE_DELAY;

#[component]
pub fn Hero() -> impl IntoView {
    let i18n = use_i18n();
    let roles = move |locale| dictionary(locale).list(List::HeroRoles).iter().copied();
    let typing = RwSignal::new(TypingText::new(roles(i18n.locale_untracked())));

    Effect::watch(
        move || i18n.locale(),
        move |locale, _, _| typing.update(|t| t.reset(roles(*locale))),
        false,
    );
    use_interval_fn(
        move || {
            typing.maybe_update(|t| t.advance(TICK));
        },
        TICK.as_millis() as u64,
    );

    let (_, scroll_y) = use_window_scroll();
    let backdrop_style =
        move || format!("transform: translateY({}px)", parallax_offset(scroll_y.get(), 0.5));

    view! {
        <PageSection
            section=Section::Home
            class="relative min-h-screen flex items-center justify-center overflow-hidden"
        >
            <div class="absolute inset-0 -z-10" style=backdrop_style>
                <div class="absolute inset-0 bg-gradient-to-br from-blue-50 via-white to-purple-50 dark:from-gray-900 dark:via-gray-900 dark:to-blue-950"></div>
                <ParticleBackground />
            </div>
            <div class="max-w-4xl mx-auto px-4 text-center">
                <p class="text-lg text-blue-600 dark:text-blue-400 mb-2">
                    {move || i18n.t(Text::HeroGreeting)}
                </p>
                <h1 class="text-5xl md:text-7xl font-bold mb-4">
                    {move || i18n.t(Text::HeroName)}
                </h1>
                <h2 class="text-2xl md:text-3xl text-gray-700 dark:text-gray-300 mb-6 h-10">
                    <span>{move || typing.with(|t| t.text().to_string())}</span>
                    <span class="typing-caret" aria-hidden="true">
                        "|"
                    </span>
                </h2>
                <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto mb-10">
                    {move || i18n.t(Text::HeroDescription)}
                </p>
                <div class="flex flex-wrap justify-center gap-4">
                    <a
                        href=Section::Projects.href()
                        class="px-8 py-3 rounded-full bg-blue-600 hover:bg-blue-700 text-white font-medium transition-colors"
                    >
                        {move || i18n.t(Text::HeroCta)}
                    </a>
                    <a
                        href=Section::Contact.href()
                        class="px-8 py-3 rounded-full border-2 border-blue-600 text-blue-600 dark:text-blue-400 hover:bg-blue-600 hover:text-white font-medium transition-colors"
                    >
                        {move || i18n.t(Text::HeroContact)}
                    </a>
                </div>
                <div class="flex justify-center gap-6 mt-10 text-gray-600 dark:text-gray-400">
                    <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-blue-600">
                        "GitHub"
                    </a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="hover:text-blue-600">
                        "LinkedIn"
                    </a>
                </div>
            </div>
        </PageSection>
    }
}
