//! Deal Form Component
//!
//! Modal for adding or editing a deal. The draft keeps the raw input; it is
//! only turned into a `Deal` on submit, under the configured form policy.

use leptos::prelude::*;

use crm_core::{DealDraft, Stage};

use crate::components::{EditTarget, FormModal, SelectField, TextAreaField, TextField};
use crate::context::use_app_context;
use crate::store::{store_submit_deal, use_app_store, AppStateStoreFields};

fn stage_options() -> Vec<(&'static str, &'static str)> {
    Stage::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
}

#[component]
pub fn DealForm(target: EditTarget, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial = target
        .existing_id()
        .and_then(|id| store.deals().get_untracked().get(id).map(DealDraft::from_deal))
        .unwrap_or_default();
    let draft = RwSignal::new(initial);
    let (error, set_error) = signal(None::<String>);
    let failed = RwSignal::new(None::<&'static str>);

    let text = move |get: fn(&DealDraft) -> String| Signal::derive(move || draft.with(get));
    let setter = move |set: fn(&mut DealDraft, String)| Callback::new(move |v: String| draft.update(|d| set(d, v)));
    let invalid = move |field: &'static str| Signal::derive(move || failed.get() == Some(field));

    let on_submit = Callback::new(move |_: ()| {
        let result = draft.with_untracked(|d| store_submit_deal(&store, target.existing_id(), d, ctx.form_policy()));
        match result {
            Ok(()) => on_close.run(()),
            Err(e) => {
                failed.set(e.field());
                set_error.set(Some(e.to_string()));
            }
        }
    });

    let (title, submit_label) = if target.is_new() {
        ("Add New Deal", "Add Deal")
    } else {
        ("Edit Deal", "Save Changes")
    };

    view! {
        <FormModal
            title=title.to_string()
            submit_label=submit_label.to_string()
            error=error
            on_submit=on_submit
            on_cancel=on_close
        >
            <TextField
                label="Deal Title"
                value=text(|d| d.title.clone())
                on_input=setter(|d, v| d.title = v)
                invalid=invalid("title")
            />
            <div class="form-row">
                <TextField
                    label="Deal Value"
                    input_type="number"
                    value=text(|d| d.value.clone())
                    on_input=setter(|d, v| d.value = v)
                    invalid=invalid("value")
                />
                <TextField
                    label="Probability (%)"
                    input_type="number"
                    value=text(|d| d.probability.clone())
                    on_input=setter(|d, v| d.probability = v)
                    invalid=invalid("probability")
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Contact Person"
                    value=text(|d| d.contact.clone())
                    on_input=setter(|d, v| d.contact = v)
                    invalid=invalid("contact")
                />
                <TextField
                    label="Company"
                    value=text(|d| d.company.clone())
                    on_input=setter(|d, v| d.company = v)
                    invalid=invalid("company")
                />
            </div>
            <div class="form-row">
                <SelectField
                    label="Stage"
                    options=stage_options()
                    value=text(|d| d.stage.clone())
                    on_change=setter(|d, v| d.stage = v)
                    invalid=invalid("stage")
                />
                <TextField
                    label="Expected Close Date"
                    input_type="date"
                    value=text(|d| d.close_date.clone())
                    on_input=setter(|d, v| d.close_date = v)
                    invalid=invalid("close date")
                />
            </div>
            <TextAreaField
                label="Description"
                value=text(|d| d.description.clone())
                on_input=setter(|d, v| d.description = v)
            />
        </FormModal>
    }
}
