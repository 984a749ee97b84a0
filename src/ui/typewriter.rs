//! Typing headline component
//!
//! Reveals its text one character at a time after mounting. To replay the
//! animation, remount the component (the landing page does this by keying it
//! on a toggle); the pending timer is cleared when the component goes away.

use leptos::prelude::*;

use crate::core::TypewriterOptions;

#[component]
pub fn Typewriter(
    /// Text to type out
    text: &'static str,
    /// Per-character delay and autostart
    #[prop(default = TypewriterOptions::default())]
    options: TypewriterOptions,
    /// Remount key, rendered as `data-key` for debugging
    #[prop(optional)]
    replay_key: Option<&'static str>,
) -> impl IntoView {
    let shown = RwSignal::new(String::new());

    #[cfg(not(feature = "ssr"))]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        use crate::core::Typewriter as TypingState;

        let pending: StoredValue<Option<TimeoutHandle>> = StoredValue::new(None);

        if options.auto_start {
            let state = Rc::new(RefCell::new(TypingState::new(text, options)));
            schedule_tick(state, shown, pending);
        }

        on_cleanup(move || {
            if let Some(handle) = pending.try_get_value().flatten() {
                handle.clear();
            }
        });
    }

    #[cfg(feature = "ssr")]
    {
        let _ = options;
    }

    view! {
        <span class="typewriter" data-key=replay_key>
            // Full text for crawlers and screen readers; the typed copy is decorative
            <span class="sr-only">{text}</span>
            <span class="typewriter-wrapper" aria-hidden="true">{move || shown.get()}</span>
            <span class="typewriter-cursor" aria-hidden="true">"|"</span>
        </span>
    }
}

#[cfg(not(feature = "ssr"))]
fn schedule_tick(
    state: std::rc::Rc<std::cell::RefCell<crate::core::Typewriter>>,
    shown: RwSignal<String>,
    pending: StoredValue<Option<TimeoutHandle>>,
) {
    let delay = state.borrow().next_delay();
    let next = state.clone();

    let handle = set_timeout_with_handle(
        move || {
            let advanced = next.borrow_mut().tick();
            shown.set(next.borrow().visible().to_string());
            if advanced && !next.borrow().is_done() {
                schedule_tick(next, shown, pending);
            } else {
                pending.try_set_value(None);
            }
        },
        delay,
    );

    match handle {
        Ok(handle) => {
            pending.try_set_value(Some(handle));
        }
        Err(err) => leptos::logging::warn!("typewriter: failed to schedule tick: {:?}", err),
    }
}
