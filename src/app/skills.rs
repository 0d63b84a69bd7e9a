use leptos::prelude::*;

use crate::i18n::{List, Text};
use crate::projects::CategoryFilter;
use crate::site::Section;
use crate::skills::{category_gradient, years_label, SkillChart, TechnicalSkill, TECHNICAL_SKILLS};

use super::context::use_i18n;
use super::section::{PageSection, SectionHeading};

#[component]
pub fn Skills() -> impl IntoView {
    let i18n = use_i18n();

    let chips = move |list: List| {
        i18n.dict()
            .list(list)
            .iter()
            .map(|skill| {
                view! {
                    <li class="px-4 py-2 rounded-full bg-blue-50 dark:bg-gray-800 text-blue-800 dark:text-blue-200 text-sm">
                        {*skill}
                    </li>
                }
            })
            .collect_view()
    };

    let languages = move || {
        i18n.dict()
            .skills
            .languages_list
            .iter()
            .map(|lang| {
                let width = format!("width: {}%", lang.proficiency.min(100));
                view! {
                    <li class="mb-4">
                        <div class="flex justify-between mb-1">
                            <span class="font-medium">{lang.name}</span>
                            <span class="text-sm text-gray-500 dark:text-gray-400">{lang.level}</span>
                        </div>
                        <div class="h-2 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                            <div class="h-full rounded-full bg-blue-600 dark:bg-blue-400" style=width></div>
                        </div>
                    </li>
                }
            })
            .collect_view()
    };

    view! {
        <PageSection section=Section::Skills class="py-24 bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading title=Text::SkillsTitle />
                <div class="grid md:grid-cols-3 gap-8">
                    <SkillCard title=Text::SkillsHardSkills>
                        <ul class="flex flex-wrap gap-2">{move || chips(List::SkillsHard)}</ul>
                    </SkillCard>
                    <SkillCard title=Text::SkillsSoftSkills>
                        <ul class="flex flex-wrap gap-2">{move || chips(List::SkillsSoft)}</ul>
                    </SkillCard>
                    <SkillCard title=Text::SkillsLanguages>
                        <ul>{languages}</ul>
                    </SkillCard>
                </div>
                <SkillsChart />
            </div>
        </PageSection>
    }
}

#[component]
fn SkillCard(title: Text, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="p-6 rounded-2xl bg-white dark:bg-gray-900 shadow-lg">
            <h3 class="text-xl font-semibold mb-6">{move || i18n.t(title)}</h3>
            {children()}
        </div>
    }
}

#[component]
fn SkillsChart() -> impl IntoView {
    let i18n = use_i18n();
    let chart = RwSignal::new(SkillChart::new(&TECHNICAL_SKILLS));
    let categories = chart.with_untracked(|c| c.categories());

    let category_button = move |category: CategoryFilter| {
        let selected = move || chart.with(|c| c.active() == category);
        let class = move || {
            if selected() {
                "px-3 py-1 rounded-full text-sm font-medium bg-blue-600 text-white"
            } else {
                "px-3 py-1 rounded-full text-sm font-medium bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-blue-100 dark:hover:bg-gray-700"
            }
        };
        let label = move || match category {
            CategoryFilter::All => i18n.t(Text::SkillsAll).to_string(),
            CategoryFilter::Category(_) => category.to_string(),
        };
        view! {
            <button
                type="button"
                class=class
                aria-pressed=move || selected().to_string()
                on:click=move |_| chart.update(|c| c.set_category(category))
            >
                {label}
            </button>
        }
    };

    let years = move |skill: &TechnicalSkill| {
        format!("{} {}", skill.years, i18n.t(years_label(skill.years)))
    };

    let bar = move |skill: &'static TechnicalSkill| {
        let name = skill.name;
        let width = format!("width: {}%", skill.level.min(100));
        let fill = format!("h-2.5 rounded-full bg-gradient-to-r {}", category_gradient(skill.category));
        let selected = move || chart.with(|c| c.is_selected(name));
        let fill_class = move || {
            if selected() {
                format!("{fill} animate-pulse")
            } else {
                fill.clone()
            }
        };
        view! {
            <li>
                <button
                    type="button"
                    class="w-full text-left"
                    aria-pressed=move || selected().to_string()
                    on:click=move |_| chart.update(|c| c.select(name))
                >
                    <div class="flex items-center justify-between mb-1">
                        <span class="font-medium">
                            {name}
                            <span class="ml-2 text-xs text-gray-500 dark:text-gray-400">
                                {move || years(skill)}
                            </span>
                        </span>
                        <span class="text-sm text-gray-500 dark:text-gray-400">
                            {format!("{}%", skill.level)}
                        </span>
                    </div>
                    <div class="w-full h-2.5 rounded-full bg-gray-200 dark:bg-gray-700 overflow-hidden">
                        <div class=fill_class style=width></div>
                    </div>
                </button>
            </li>
        }
    };

    let detail = move || match chart.with(|c| c.selected()) {
        Some(skill) => view! {
            <div class="p-4 rounded-lg bg-white dark:bg-gray-900 shadow-md">
                <h4 class="text-lg font-semibold mb-2">{skill.name}</h4>
                <div class="text-sm text-gray-600 dark:text-gray-400 mb-3">
                    <span class="inline-block px-2 py-1 mr-2 rounded-full text-xs bg-gray-100 dark:bg-gray-800">
                        {skill.category}
                    </span>
                    <span>{years(skill)}" "{i18n.t(Text::SkillsExperience)}</span>
                </div>
                <p>{skill.description.get(i18n.locale())}</p>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="h-full p-4 rounded-lg bg-gray-100 dark:bg-gray-900 flex items-center justify-center">
                <p class="text-center text-gray-500 dark:text-gray-400">
                    {i18n.t(Text::SkillsSelectPrompt)}
                </p>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="mt-12 p-6 rounded-2xl bg-white dark:bg-gray-900 shadow-lg">
            <h3 class="text-xl font-semibold mb-6">{move || i18n.t(Text::SkillsChartTitle)}</h3>
            <div class="flex flex-wrap gap-2 mb-6" role="group">
                {categories.into_iter().map(category_button).collect_view()}
            </div>
            <div class="grid md:grid-cols-4 gap-6">
                <ul class="md:col-span-3 space-y-5">
                    {move || {
                        chart
                            .with(|c| c.filtered().collect::<Vec<_>>())
                            .into_iter()
                            .map(bar)
                            .collect_view()
                    }}
                </ul>
                <div class="md:col-span-1" aria-live="polite">{detail}</div>
            </div>
        </div>
    }
}
