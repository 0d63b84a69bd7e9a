use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::i18n::Text;
use crate::site::Section;

use super::context::{use_i18n, use_scroll_spy};

/// A page section anchored at its id. Reports to the scroll spy whenever at
/// least a fifth of it enters the viewport.
#[component]
pub fn PageSection(
    section: Section,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Section>::new();
    let spy = use_scroll_spy();
    let id = section.id();

    use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            spy.update(|s| s.observe(entries.iter().map(|e| (id, e.is_intersecting()))));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.2]),
    );

    view! {
        <section id=id node_ref=node_ref class=class>
            {children()}
        </section>
    }
}

#[component]
pub fn SectionHeading(title: Text, #[prop(optional)] description: Option<Text>) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <div class="text-center mb-16">
            <h2 class="text-3xl md:text-4xl font-bold text-gray-900 dark:text-white">
                {move || i18n.t(title)}
            </h2>
            <div class="w-20 h-1 bg-blue-600 dark:bg-blue-400 mx-auto mt-4 mb-8"></div>
            {description
                .map(|d| {
                    view! {
                        <p class="text-lg text-gray-600 dark:text-gray-400 max-w-2xl mx-auto">
                            {move || i18n.t(d)}
                        </p>
                    }
                })}
        </div>
    }
}
