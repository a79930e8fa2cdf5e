//! Form Field Components
//!
//! Labelled inputs bound to a getter signal and an input callback, shared
//! by the deal, contact and task forms.

use leptos::prelude::*;

/// Single-line input (text, number, date, email)
#[component]
pub fn TextField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] placeholder: String,
    /// Highlights the field when the last submit failed on it
    #[prop(optional, into)] invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class=move || if invalid.get() { "form-field invalid" } else { "form-field" }>
            <span class="form-label">{label}</span>
            <input
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Multi-line text
#[component]
pub fn TextAreaField(
    #[prop(into)] label: String,
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(default = 3)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="form-field">
            <span class="form-label">{label}</span>
            <textarea
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

/// Dropdown over `(value, label)` pairs
#[component]
pub fn SelectField(
    #[prop(into)] label: String,
    options: Vec<(&'static str, &'static str)>,
    #[prop(into)] value: Signal<String>,
    on_change: Callback<String>,
    #[prop(optional, into)] invalid: Signal<bool>,
) -> impl IntoView {
    view! {
        <label class=move || if invalid.get() { "form-field invalid" } else { "form-field" }>
            <span class="form-label">{label}</span>
            <select
                prop:value=move || value.get()
                on:change=move |ev| on_change.run(event_target_value(&ev))
            >
                {options
                    .into_iter()
                    .map(|(val, text)| {
                        view! {
                            <option value=val selected=move || value.get() == val>
                                {text}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
