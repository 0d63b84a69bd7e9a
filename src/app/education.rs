use leptos::prelude::*;

use crate::i18n::{List, Text};
use crate::site::Section;

use super::context::use_i18n;
use super::section::{PageSection, SectionHeading};

#[component]
pub fn Education() -> impl IntoView {
    let i18n = use_i18n();

    let degrees = move || {
        i18n.dict()
            .education
            .degrees
            .iter()
            .map(|degree| {
                view! {
                    <article class="p-6 rounded-2xl bg-white dark:bg-gray-800 shadow-lg">
                        <h3 class="text-xl font-semibold mb-1">{degree.title}</h3>
                        <p class="text-blue-600 dark:text-blue-400">{degree.institution}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400">
                            {degree.period}" · "{degree.status}
                        </p>
                    </article>
                }
            })
            .collect_view()
    };

    let certifications = move || {
        i18n.dict()
            .list(List::EducationCertifications)
            .iter()
            .map(|cert| view! { <li class="flex gap-2"><span aria-hidden="true">"✓"</span>{*cert}</li> })
            .collect_view()
    };

    view! {
        <PageSection section=Section::Education class="py-24">
            <div class="max-w-4xl mx-auto px-4">
                <SectionHeading title=Text::EducationTitle />
                <div class="grid gap-6 mb-12">{degrees}</div>
                <h3 class="text-2xl font-semibold mb-4">
                    {move || i18n.t(Text::EducationCertificationsTitle)}
                </h3>
                <ul class="space-y-2 text-gray-700 dark:text-gray-300">{certifications}</ul>
            </div>
        </PageSection>
    }
}
