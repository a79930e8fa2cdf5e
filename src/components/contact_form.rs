//! Contact Form Component

use leptos::prelude::*;

use crm_core::{ContactDraft, ContactStatus};

use crate::components::{EditTarget, FormModal, SelectField, TextField};
use crate::context::{today, use_app_context};
use crate::store::{store_submit_contact, use_app_store, AppStateStoreFields};

fn status_options() -> Vec<(&'static str, &'static str)> {
    ContactStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
}

#[component]
pub fn ContactForm(target: EditTarget, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial = target
        .existing_id()
        .and_then(|id| store.contacts().get_untracked().get(id).map(ContactDraft::from_contact))
        .unwrap_or_else(|| ContactDraft::blank(today()));
    let draft = RwSignal::new(initial);
    let (error, set_error) = signal(None::<String>);
    let failed = RwSignal::new(None::<&'static str>);

    let text = move |get: fn(&ContactDraft) -> String| Signal::derive(move || draft.with(get));
    let setter =
        move |set: fn(&mut ContactDraft, String)| Callback::new(move |v: String| draft.update(|d| set(d, v)));
    let invalid = move |field: &'static str| Signal::derive(move || failed.get() == Some(field));

    let on_submit = Callback::new(move |_: ()| {
        let result =
            draft.with_untracked(|d| store_submit_contact(&store, target.existing_id(), d, ctx.form_policy()));
        match result {
            Ok(()) => on_close.run(()),
            Err(e) => {
                failed.set(e.field());
                set_error.set(Some(e.to_string()));
            }
        }
    });

    let (title, submit_label) = if target.is_new() {
        ("Add New Contact", "Add Contact")
    } else {
        ("Edit Contact", "Save Changes")
    };

    view! {
        <FormModal
            title=title.to_string()
            submit_label=submit_label.to_string()
            error=error
            on_submit=on_submit
            on_cancel=on_close
        >
            <div class="form-row">
                <TextField
                    label="Name"
                    value=text(|d| d.name.clone())
                    on_input=setter(|d, v| d.name = v)
                    invalid=invalid("name")
                />
                <TextField
                    label="Email"
                    input_type="email"
                    value=text(|d| d.email.clone())
                    on_input=setter(|d, v| d.email = v)
                    invalid=invalid("email")
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Phone"
                    input_type="tel"
                    value=text(|d| d.phone.clone())
                    on_input=setter(|d, v| d.phone = v)
                />
                <TextField
                    label="Company"
                    value=text(|d| d.company.clone())
                    on_input=setter(|d, v| d.company = v)
                />
            </div>
            <div class="form-row">
                <TextField
                    label="Position"
                    value=text(|d| d.position.clone())
                    on_input=setter(|d, v| d.position = v)
                />
                <SelectField
                    label="Status"
                    options=status_options()
                    value=text(|d| d.status.clone())
                    on_change=setter(|d, v| d.status = v)
                    invalid=invalid("status")
                />
            </div>
            <TextField
                label="Deal Value"
                input_type="number"
                value=text(|d| d.deal_value.clone())
                on_input=setter(|d, v| d.deal_value = v)
                invalid=invalid("deal value")
            />
        </FormModal>
    }
}
