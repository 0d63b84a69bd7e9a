use leptos::prelude::*;

use crate::i18n::Text;
use crate::site::Section;

use super::context::use_i18n;
use super::section::{PageSection, SectionHeading};

#[component]
pub fn Experience() -> impl IntoView {
    let i18n = use_i18n();

    let timeline = move || {
        let dict = i18n.dict();
        dict.experience
            .roles
            .iter()
            .map(|role| {
                view! {
                    <li class="relative pl-8 pb-12 border-l-2 border-blue-200 dark:border-blue-900 last:pb-0">
                        <span class="absolute -left-[9px] top-1 w-4 h-4 rounded-full bg-blue-600 dark:bg-blue-400"></span>
                        <div class="flex flex-wrap items-center gap-3 mb-1">
                            <h3 class="text-xl font-semibold">{role.title}</h3>
                            {role
                                .current
                                .then(|| {
                                    view! {
                                        <span class="px-2 py-0.5 text-xs rounded-full bg-green-100 text-green-800 dark:bg-green-900 dark:text-green-200">
                                            {dict.experience.current}
                                        </span>
                                    }
                                })}
                        </div>
                        <p class="text-blue-600 dark:text-blue-400 font-medium">{role.company}</p>
                        <p class="text-sm text-gray-500 dark:text-gray-400 mb-3">{role.period}</p>
                        <p class="text-gray-700 dark:text-gray-300 leading-relaxed">
                            {role.description}
                        </p>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <PageSection section=Section::Experience class="py-24">
            <div class="max-w-4xl mx-auto px-4">
                <SectionHeading title=Text::ExperienceTitle />
                <ol class="ml-2">{timeline}</ol>
            </div>
        </PageSection>
    }
}
