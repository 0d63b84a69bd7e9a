use chrono::{DateTime, Datelike, Utc};
use leptos::prelude::*;

use crate::i18n::Text;
use crate::site::{Section, GITHUB_URL, LINKEDIN_URL, OWNER_NAME};

use super::context::use_i18n;

fn parse_build_time(raw: &str) -> Option<DateTime<Utc>> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Some(dt.with_timezone(&Utc)),
        Err(e) => {
            log::warn!("unparseable build time {raw:?}: {e}");
            None
        }
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let built = parse_build_time(env!("BUILD_TIME"));
    let year = built.map(|dt| dt.year()).unwrap_or(2025);
    let built_on = built.map(|dt| dt.format("%Y-%m-%d").to_string());

    view! {
        <footer class="py-12 bg-gray-900 text-gray-300">
            <div class="max-w-6xl mx-auto px-4">
                <div class="grid md:grid-cols-3 gap-8 mb-8">
                    <div>
                        <p class="text-2xl font-bold text-white mb-2">{OWNER_NAME}</p>
                        <p class="text-sm text-gray-400">{move || i18n.t(Text::HeroTitle)}</p>
                    </div>
                    <nav>
                        <h3 class="text-white font-semibold mb-3">
                            {move || i18n.t(Text::FooterNavigation)}
                        </h3>
                        <ul class="grid grid-cols-2 gap-2 text-sm">
                            {Section::ALL
                                .into_iter()
                                .map(|section| {
                                    view! {
                                        <li>
                                            <a href=section.href() class="hover:text-white">
                                                {move || i18n.t(section.label())}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </nav>
                    <div class="flex md:justify-end gap-6 text-sm">
                        <a href=GITHUB_URL target="_blank" rel="noopener noreferrer" class="hover:text-white">
                            "GitHub"
                        </a>
                        <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer" class="hover:text-white">
                            "LinkedIn"
                        </a>
                    </div>
                </div>
                <div class="pt-8 border-t border-gray-800 flex flex-col md:flex-row justify-between gap-2 text-sm text-gray-500">
                    <p>
                        {format!("© {year} {OWNER_NAME}. ")}
                        {move || i18n.t(Text::FooterRights)}
                    </p>
                    {built_on
                        .map(|date| {
                            view! {
                                <p>{move || i18n.t(Text::FooterBuilt)}" "{date}</p>
                            }
                        })}
                </div>
            </div>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_build_time() {
        let dt = parse_build_time("2025-03-04T05:06:07+00:00").unwrap();
        assert_eq!(dt.year(), 2025);
        assert_eq!(dt.format("%Y-%m-%d").to_string(), "2025-03-04");
        assert!(parse_build_time("yesterday").is_none());
    }

    #[test]
    fn test_embedded_build_time_parses() {
        assert!(parse_build_time(env!("BUILD_TIME")).is_some());
    }
}
