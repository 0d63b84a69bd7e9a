use std::time::Duration;

use leptos::{ev::SubmitEvent, html, prelude::*};

use crate::i18n::Text;
use crate::lifecycle::CancelSlot;
use crate::site::{Section, EMAIL, LOCATION, PHONE};

use super::context::use_i18n;
use super::section::{PageSection, SectionHeading};

/// How long the acknowledgment stays up after a submit.
const ACK_DURATION: Duration = Duration::from_secs(5);

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-300 dark:border-gray-600 bg-white dark:bg-gray-900 focus:outline-none focus:ring-2 focus:ring-blue-500";

/// Nothing is sent anywhere: a submit clears the form and shows a
/// transient acknowledgment.
#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let form_ref = NodeRef::<html::Form>::new();
    let (sent, set_sent) = signal(false);
    let pending = CancelSlot::<TimeoutHandle>::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(form) = form_ref.get_untracked() {
            form.reset();
        }
        set_sent.set(true);

        match set_timeout_with_handle(move || set_sent.set(false), ACK_DURATION) {
            Ok(handle) => pending.replace(handle),
            Err(e) => log::warn!("couldn't schedule acknowledgment reset: {e:?}"),
        }
    };

    view! {
        <PageSection section=Section::Contact class="py-24">
            <div class="max-w-6xl mx-auto px-4">
                <SectionHeading title=Text::ContactTitle description=Text::ContactDescription />
                <div class="grid md:grid-cols-2 gap-12">
                    <ul class="space-y-6">
                        <ContactItem label=Text::ContactPhone>
                            <a href=format!("tel:{}", PHONE.replace(['(', ')', ' '], "")) class="hover:text-blue-600">
                                {PHONE}
                            </a>
                        </ContactItem>
                        <ContactItem label=Text::ContactEmail>
                            <a href=format!("mailto:{EMAIL}") class="hover:text-blue-600">
                                {EMAIL}
                            </a>
                        </ContactItem>
                        <ContactItem label=Text::ContactLocation>
                            <span>{LOCATION}</span>
                        </ContactItem>
                    </ul>
                    <form node_ref=form_ref class="space-y-4" on:submit=on_submit>
                        <label class="block">
                            <span class="block mb-1 text-sm font-medium">
                                {move || i18n.t(Text::ContactFormName)}
                            </span>
                            <input type="text" name="name" required class=INPUT_CLASS />
                        </label>
                        <label class="block">
                            <span class="block mb-1 text-sm font-medium">
                                {move || i18n.t(Text::ContactFormEmail)}
                            </span>
                            <input type="email" name="email" required class=INPUT_CLASS />
                        </label>
                        <label class="block">
                            <span class="block mb-1 text-sm font-medium">
                                {move || i18n.t(Text::ContactFormMessage)}
                            </span>
                            <textarea name="message" rows="5" required class=INPUT_CLASS></textarea>
                        </label>
                        <button
                            type="submit"
                            class="w-full px-8 py-3 rounded-lg bg-blue-600 hover:bg-blue-700 text-white font-medium transition-colors"
                        >
                            {move || i18n.t(Text::ContactFormSend)}
                        </button>
                        <p
                            class="min-h-6 text-center text-green-600 dark:text-green-400"
                            role="status"
                            aria-live="polite"
                        >
                            {move || sent.get().then(|| i18n.t(Text::ContactFormSent))}
                        </p>
                    </form>
                </div>
            </div>
        </PageSection>
    }
}

#[component]
fn ContactItem(label: Text, children: Children) -> impl IntoView {
    let i18n = use_i18n();
    view! {
        <li class="p-6 rounded-2xl bg-gray-50 dark:bg-gray-800 shadow">
            <h3 class="text-sm uppercase tracking-wide text-gray-500 dark:text-gray-400 mb-1">
                {move || i18n.t(label)}
            </h3>
            <div class="text-lg font-medium">{children()}</div>
        </li>
    }
}
