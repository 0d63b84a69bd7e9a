use leptos::{html, prelude::*};
use leptos_use::{
    use_element_visibility, use_raf_fn_with_options, UseRafFnCallbackArgs, UseRafFnOptions,
};

use crate::effects::counter_value;
use crate::i18n::Text;
use crate::site::{Section, COMPLETED_PROJECTS, TECHNOLOGIES, YEARS_OF_EXPERIENCE};

use super::context::use_i18n;
use super::section::{PageSection, SectionHeading};

const COUNT_UP_MS: f64 = 2000.0;

#[component]
pub fn About() -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <PageSection section=Section::About class="py-24 bg-gray-50 dark:bg-gray-800/50">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading title=Text::AboutTitle />
                <p class="text-lg leading-relaxed text-gray-700 dark:text-gray-300 max-w-3xl mx-auto text-center mb-16">
                    {move || i18n.t(Text::AboutDescription)}
                </p>
                <div class="grid grid-cols-1 sm:grid-cols-3 gap-8">
                    <Counter target=YEARS_OF_EXPERIENCE label=Text::AboutYearsOfExperience />
                    <Counter target=COMPLETED_PROJECTS label=Text::AboutCompletedProjects />
                    <Counter target=TECHNOLOGIES label=Text::AboutTechnologies />
                </div>
            </div>
        </PageSection>
    }
}

/// Counts up to `target` the first time it scrolls into view.
#[component]
fn Counter(target: u32, label: Text) -> impl IntoView {
    let i18n = use_i18n();
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_element_visibility(node_ref);
    let (value, set_value) = signal(0u32);
    let elapsed = StoredValue::new(0.0_f64);

    let raf = use_raf_fn_with_options(
        move |UseRafFnCallbackArgs { delta, .. }| {
            elapsed.update_value(|e| *e += delta);
            let progress = elapsed.get_value() / COUNT_UP_MS;
            set_value.set(counter_value(target, progress));
        },
        UseRafFnOptions::default().immediate(false),
    );

    let (pause, resume) = (raf.pause, raf.resume);
    Effect::new(move |_| {
        if value.get() >= target {
            pause();
        } else if visible.get() {
            resume();
        }
    });

    view! {
        <div node_ref=node_ref class="text-center p-8 rounded-2xl bg-white dark:bg-gray-900 shadow-lg">
            <div class="text-5xl font-bold text-blue-600 dark:text-blue-400 mb-2">
                {move || value.get()}"+"
            </div>
            <div class="text-gray-600 dark:text-gray-400">{move || i18n.t(label)}</div>
        </div>
    }
}
