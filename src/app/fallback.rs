use leptos::prelude::*;

use crate::i18n::Text;

use super::context::use_i18n;

/// Rendered by the page's error boundary. Retrying clears the errors so
/// the boundary re-renders its children.
#[component]
pub fn ErrorFallback(errors: ArcRwSignal<Errors>) -> impl IntoView {
    let i18n = use_i18n();
    let listed = errors.clone();
    let messages = move || {
        listed
            .get()
            .into_iter()
            .map(|(_, e)| view! { <li>{e.to_string()}</li> })
            .collect_view()
    };

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center px-4 text-center">
            <h1 class="text-3xl font-bold mb-4">{move || i18n.t(Text::ErrorTitle)}</h1>
            <p class="text-gray-600 dark:text-gray-400 mb-4">{move || i18n.t(Text::ErrorFallback)}</p>
            <ul class="text-sm text-red-600 dark:text-red-400 mb-8">{messages}</ul>
            <div class="flex gap-4">
                <button
                    type="button"
                    class="px-6 py-2 rounded-full bg-blue-600 hover:bg-blue-700 text-white"
                    on:click=move |_| errors.set(Errors::default())
                >
                    {move || i18n.t(Text::ErrorRetry)}
                </button>
                <a href="/" class="px-6 py-2 rounded-full border-2 border-blue-600 text-blue-600 dark:text-blue-400">
                    {move || i18n.t(Text::NavHome)}
                </a>
            </div>
        </div>
    }
}

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    #[cfg(feature = "ssr")]
    {
        let resp = expect_context::<leptos_axum::ResponseOptions>();
        resp.set_status(http::StatusCode::NOT_FOUND);
    }

    view! {
        <div class="min-h-screen flex flex-col items-center justify-center px-4 text-center">
            <h1 class="text-6xl font-bold text-blue-600 dark:text-blue-400 mb-4">"404"</h1>
            <p class="text-xl mb-8">{move || i18n.t(Text::ErrorNotFound)}</p>
            <a href="/" class="px-6 py-2 rounded-full bg-blue-600 hover:bg-blue-700 text-white">
                {move || i18n.t(Text::NavHome)}
            </a>
        </div>
    }
}
