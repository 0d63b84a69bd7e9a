use leptos::prelude::*;

use crate::i18n::Text;
use crate::projects::{CategoryFilter, ProjectFilter, ProjectRecord, PROJECTS};
use crate::site::Section;

use super::context::use_i18n;
use super::decor::TiltCard;
use super::section::{PageSection, SectionHeading};

#[component]
pub fn Projects() -> impl IntoView {
    let i18n = use_i18n();
    let filter = RwSignal::new(ProjectFilter::new(&PROJECTS));
    let categories = filter.with_untracked(|f| f.categories());

    let category_button = move |category: CategoryFilter| {
        let selected = move || filter.with(|f| f.active() == category);
        let class = move || {
            if selected() {
                "px-4 py-2 rounded-full text-sm font-medium bg-blue-600 text-white"
            } else {
                "px-4 py-2 rounded-full text-sm font-medium bg-gray-100 dark:bg-gray-800 text-gray-700 dark:text-gray-300 hover:bg-blue-100 dark:hover:bg-gray-700"
            }
        };
        let label = move || match category {
            CategoryFilter::All => i18n.t(Text::ProjectsAll).to_string(),
            CategoryFilter::Category(_) => category.to_string(),
        };
        view! {
            <button
                type="button"
                class=class
                aria-pressed=move || selected().to_string()
                on:click=move |_| filter.update(|f| f.set_category(category))
            >
                {label}
            </button>
        }
    };

    view! {
        <PageSection section=Section::Projects class="py-24 bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading title=Text::ProjectsTitle description=Text::ProjectsDescription />
                <div class="flex flex-wrap justify-center gap-3 mb-12" role="group">
                    {categories.into_iter().map(category_button).collect_view()}
                </div>
                <Show
                    when=move || filter.with(|f| f.filtered_len() > 0)
                    fallback=move || {
                        view! {
                            <p class="text-center text-gray-500 dark:text-gray-400">
                                {move || i18n.t(Text::ProjectsEmpty)}
                            </p>
                        }
                    }
                >
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8">
                        <For
                            each=move || filter.with(|f| f.visible_projects())
                            key=|project| project.title.en
                            children=move |project: &'static ProjectRecord| {
                                view! { <ProjectCard project /> }
                            }
                        />
                    </div>
                </Show>
                <Show when=move || filter.with(|f| f.can_load_more())>
                    <div class="text-center mt-12">
                        <button
                            type="button"
                            class="px-8 py-3 rounded-full border-2 border-blue-600 text-blue-600 dark:text-blue-400 hover:bg-blue-600 hover:text-white font-medium transition-colors"
                            on:click=move |_| filter.update(|f| f.load_more())
                        >
                            {move || i18n.t(Text::ProjectsLoadMore)}
                        </button>
                    </div>
                </Show>
            </div>
        </PageSection>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectRecord) -> impl IntoView {
    let i18n = use_i18n();
    let title = move || project.title.get(i18n.locale());
    let link_class = "text-sm font-medium text-blue-600 dark:text-blue-400 hover:underline";

    view! {
        <TiltCard class="h-full">
            <article
                data-cursor="project"
                class="h-full flex flex-col rounded-2xl overflow-hidden bg-white dark:bg-gray-900 shadow-lg"
            >
                <img src=project.image_ref alt=title class="w-full h-48 object-cover" loading="lazy" />
                <div class="flex flex-col flex-1 p-6">
                    <span class="text-xs uppercase tracking-wide text-blue-600 dark:text-blue-400 mb-2">
                        {project.category}
                    </span>
                    <h3 class="text-xl font-semibold mb-2">{title}</h3>
                    <p class="text-gray-600 dark:text-gray-400 mb-4 flex-1">
                        {move || project.description.get(i18n.locale())}
                    </p>
                    <ul class="flex flex-wrap gap-2 mb-4">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| {
                                view! {
                                    <li class="px-2 py-1 text-xs rounded bg-gray-100 dark:bg-gray-800">
                                        {*tech}
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                    <div class="flex gap-4">
                        {project
                            .repo_link
                            .map(|href| {
                                view! {
                                    <a href=href target="_blank" rel="noopener noreferrer" class=link_class>
                                        {move || i18n.t(Text::ProjectsCode)}
                                    </a>
                                }
                            })}
                        {project
                            .demo_link
                            .map(|href| {
                                view! {
                                    <a href=href target="_blank" rel="noopener noreferrer" class=link_class>
                                        {move || i18n.t(Text::ProjectsDemo)}
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </article>
        </TiltCard>
    }
}
