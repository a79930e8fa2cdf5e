//! Form Modal Component
//!
//! Overlay card hosting one of the edit forms, with the submit error shown
//! above the action buttons.

use leptos::prelude::*;

#[component]
pub fn FormModal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] submit_label: Signal<String>,
    /// Last submit error, if any
    error: ReadSignal<Option<String>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
    children: Children,
) -> impl IntoView {
    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="card modal" on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button class="icon-btn" title="Close" on:click=move |_| on_cancel.run(())>"✕"</button>
                </div>
                <form class="modal-form" on:submit=submit>
                    {children()}
                    {move || error.get().map(|msg| view! { <p class="form-error">{msg}</p> })}
                    <div class="modal-actions">
                        <button type="submit" class="primary-btn">{move || submit_label.get()}</button>
                        <button type="button" class="outline-btn" on:click=move |_| on_cancel.run(())>
                            "Cancel"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
