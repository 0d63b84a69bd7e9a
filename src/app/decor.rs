//! Decorative and scroll-driven effects. The pointer and tilt effects are
//! presentational only and hidden from assistive technology.

use std::convert::Infallible;

use leptos::{
    ev::{self, KeyboardEvent, MouseEvent},
    html,
    prelude::*,
};
use leptos_use::{
    use_document, use_event_listener, use_media_query, use_mouse_with_options, use_raf_fn,
    use_window, use_window_scroll, UseMouseCoordType, UseMouseOptions, UseMouseReturn,
    UseRafFnCallbackArgs,
};
use wasm_bindgen::JsCast;

use crate::effects::{
    classify_cursor, keyboard_focus, overlay_transform, particle_field, scroll_top_visible,
    tilt_angles, CursorVariant, FocusInput, HoverTarget, SpringFollower, KEYBOARD_FOCUS_CLASS,
};
use crate::i18n::Text;

use super::context::use_i18n;

const PARTICLE_COUNT: usize = 24;
const PARTICLE_SEED: u64 = 42;

/// Ring that trails the pointer on devices with a precise pointer.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let fine_pointer = use_media_query("(pointer: fine)");
    // server markup never has the cursor, so neither does the first client render
    let mounted = RwSignal::new(false);
    Effect::new(move |_| mounted.set(true));

    view! {
        <Show when=move || mounted.get() && fine_pointer.get()>
            <CursorFollower />
        </Show>
    }
}

fn hover_target(target: &web_sys::Element) -> HoverTarget {
    HoverTarget {
        tag: target.tag_name(),
        data_cursor: target
            .closest("[data-cursor]")
            .ok()
            .flatten()
            .and_then(|el| el.get_attribute("data-cursor")),
        in_clickable: matches!(target.closest("a, button, [role=button]"), Ok(Some(_))),
    }
}

/// The overlay is fixed, so it follows the pointer in viewport coordinates.
fn overlay_coords() -> UseMouseCoordType<Infallible> {
    UseMouseCoordType::Client
}

#[component]
fn CursorFollower() -> impl IntoView {
    let UseMouseReturn { x, y, .. } =
        use_mouse_with_options(UseMouseOptions::default().coord_type(overlay_coords()));
    let spring = RwSignal::new(SpringFollower::default());
    let (variant, set_variant) = signal(CursorVariant::Default);
    let (hidden, set_hidden) = signal(true);

    use_raf_fn(move |UseRafFnCallbackArgs { delta, .. }| {
        let (tx, ty) = (x.get_untracked(), y.get_untracked());
        spring.maybe_update(|s| {
            if s.is_settled(tx, ty) {
                return false;
            }
            s.step(tx, ty, delta);
            true
        });
    });

    let _ = use_event_listener(use_document(), ev::mouseover, move |ev: MouseEvent| {
        let Some(target) = ev.target().and_then(|t| t.dyn_into::<web_sys::Element>().ok()) else {
            return;
        };
        if hidden.get_untracked() {
            spring.update(|s| s.jump_to(f64::from(ev.client_x()), f64::from(ev.client_y())));
            set_hidden.set(false);
        }
        set_variant.set(classify_cursor(&hover_target(&target)));
    });
    let _ = use_event_listener(use_document(), ev::mouseout, move |ev: MouseEvent| {
        // no related target means the pointer left the window
        if ev.related_target().is_none() {
            set_hidden.set(true);
        }
    });

    let ring_style = move || spring.with(|s| overlay_transform(s.x, s.y));
    let dot_style = move || overlay_transform(x.get(), y.get());
    let visibility = move || if hidden.get() { "opacity-0" } else { "opacity-100" };

    view! {
        <div
            aria-hidden="true"
            class=move || format!("custom-cursor {} {}", variant.get().class(), visibility())
            style=ring_style
        ></div>
        <div
            aria-hidden="true"
            class=move || format!("custom-cursor-dot {}", visibility())
            style=dot_style
        ></div>
    }
}

/// Draws focus rings only while the keyboard is in use: Tab turns them on,
/// a mouse press turns them off.
#[component]
pub fn FocusIndicator() -> impl IntoView {
    let keyboard = StoredValue::new(false);
    let apply = move |input: FocusInput<'_>| {
        let current = keyboard.get_value();
        let next = keyboard_focus(current, input);
        if next == current {
            return;
        }
        keyboard.set_value(next);
        let Some(body) = document().body() else {
            return;
        };
        if let Err(e) = body.class_list().toggle_with_force(KEYBOARD_FOCUS_CLASS, next) {
            log::warn!("couldn't toggle {KEYBOARD_FOCUS_CLASS}: {e:?}");
        }
    };

    let _ = use_event_listener(use_window(), ev::keydown, move |ev: KeyboardEvent| {
        apply(FocusInput::Key(&ev.key()));
    });
    let _ = use_event_listener(use_window(), ev::mousedown, move |_: MouseEvent| {
        apply(FocusInput::PointerDown);
    });
}

#[component]
pub fn ScrollToTop() -> impl IntoView {
    let i18n = use_i18n();
    let (_, scroll_y) = use_window_scroll();

    let scroll_up = move |_| {
        let options = web_sys::ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window().scroll_to_with_scroll_to_options(&options);
    };

    view! {
        <Show when=move || scroll_top_visible(scroll_y.get())>
            <button
                type="button"
                class="fixed bottom-8 right-8 z-40 w-12 h-12 rounded-full bg-blue-600 hover:bg-blue-700 text-white shadow-lg transition-colors"
                aria-label=move || i18n.t(Text::NavBackToTop)
                on:click=scroll_up
            >
                "↑"
            </button>
        </Show>
    }
}

#[component]
pub fn ParticleBackground() -> impl IntoView {
    let particles = particle_field(PARTICLE_COUNT, PARTICLE_SEED);
    view! {
        <div class="absolute inset-0 overflow-hidden pointer-events-none" aria-hidden="true">
            {particles
                .into_iter()
                .map(|p| {
                    let style = format!(
                        "left: {:.2}%; top: {:.2}%; width: {:.1}px; height: {:.1}px; animation-delay: {:.2}s; animation-duration: {:.2}s",
                        p.left,
                        p.top,
                        p.size,
                        p.size,
                        p.delay,
                        p.duration,
                    );
                    view! { <span class="particle" style=style></span> }
                })
                .collect_view()}
        </div>
    }
}

/// Tilts its content toward the pointer, with a glare spot under it.
#[component]
pub fn TiltCard(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    // pointer position normalised to the card, None while outside
    let (pointer, set_pointer) = signal(None::<(f64, f64)>);

    let on_move = move |ev: MouseEvent| {
        let Some(el) = node_ref.get_untracked() else {
            return;
        };
        let rect = el.get_bounding_client_rect();
        if rect.width() <= 0.0 || rect.height() <= 0.0 {
            return;
        }
        let x = (f64::from(ev.client_x()) - rect.left()) / rect.width();
        let y = (f64::from(ev.client_y()) - rect.top()) / rect.height();
        set_pointer.set(Some((x, y)));
    };

    let style = move || {
        let (rx, ry) = pointer.get().map_or((0.0, 0.0), |(x, y)| tilt_angles(x, y));
        format!("transform: perspective(1000px) rotateX({rx:.2}deg) rotateY({ry:.2}deg)")
    };
    let glare = move || match pointer.get() {
        Some((x, y)) => format!(
            "opacity: 1; background: radial-gradient(circle at {:.1}% {:.1}%, rgb(255 255 255 / 0.25), transparent 60%)",
            x.clamp(0.0, 1.0) * 100.0,
            y.clamp(0.0, 1.0) * 100.0,
        ),
        None => "opacity: 0".to_string(),
    };

    view! {
        <div
            node_ref=node_ref
            class=format!("tilt-card relative {class}")
            style=style
            on:mousemove=on_move
            on:mouseleave=move |_| set_pointer.set(None)
        >
            {children()}
            <div
                aria-hidden="true"
                class="absolute inset-0 rounded-2xl pointer-events-none transition-opacity duration-300"
                style=glare
            ></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_tracks_viewport_coordinates() {
        assert!(matches!(overlay_coords(), UseMouseCoordType::Client));
    }
}
