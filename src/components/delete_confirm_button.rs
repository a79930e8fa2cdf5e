//! Delete Confirm Button Component
//!
//! Inline two-step delete: the first click asks, the second deletes.

use leptos::prelude::*;

/// Inline delete confirmation button
///
/// # Arguments
/// * `button_class` - CSS class for the initial delete button
/// * `on_confirm` - Runs when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (asking, set_asking) = signal(false);

    view! {
        <Show
            when=move || asking.get()
            fallback=move || {
                let class = button_class.clone();
                view! {
                    <button
                        class=class
                        title="Delete"
                        on:click=move |ev| {
                            ev.stop_propagation();
                            set_asking.set(true);
                        }
                    >
                        "🗑"
                    </button>
                }
            }
        >
            <span class="delete-confirm">
                <span class="delete-confirm-text">"Delete?"</span>
                <button
                    class="confirm-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button
                    class="cancel-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_asking.set(false);
                    }
                >
                    "No"
                </button>
            </span>
        </Show>
    }
}
