//! Task Form Component

use leptos::prelude::*;

use crm_core::{Priority, TaskDraft, TaskKind, TaskStatus};

use crate::components::{EditTarget, FormModal, SelectField, TextAreaField, TextField};
use crate::context::use_app_context;
use crate::store::{store_submit_task, use_app_store, AppStateStoreFields};

#[component]
pub fn TaskForm(target: EditTarget, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let initial = target
        .existing_id()
        .and_then(|id| store.tasks().get_untracked().get(id).map(TaskDraft::from_task))
        .unwrap_or_default();
    let draft = RwSignal::new(initial);
    let (error, set_error) = signal(None::<String>);
    let failed = RwSignal::new(None::<&'static str>);

    let text = move |get: fn(&TaskDraft) -> String| Signal::derive(move || draft.with(get));
    let setter = move |set: fn(&mut TaskDraft, String)| Callback::new(move |v: String| draft.update(|d| set(d, v)));
    let invalid = move |field: &'static str| Signal::derive(move || failed.get() == Some(field));

    let on_submit = Callback::new(move |_: ()| {
        let result = draft.with_untracked(|d| store_submit_task(&store, target.existing_id(), d, ctx.form_policy()));
        match result {
            Ok(()) => on_close.run(()),
            Err(e) => {
                failed.set(e.field());
                set_error.set(Some(e.to_string()));
            }
        }
    });

    let (title, submit_label) = if target.is_new() {
        ("Add New Task", "Add Task")
    } else {
        ("Edit Task", "Save Changes")
    };

    let priorities = Priority::ALL.iter().map(|p| (p.as_str(), p.label())).collect::<Vec<_>>();
    let statuses = TaskStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect::<Vec<_>>();
    let kinds = TaskKind::ALL.iter().map(|k| (k.as_str(), k.as_str())).collect::<Vec<_>>();

    view! {
        <FormModal
            title=title.to_string()
            submit_label=submit_label.to_string()
            error=error
            on_submit=on_submit
            on_cancel=on_close
        >
            <TextField
                label="Title"
                value=text(|d| d.title.clone())
                on_input=setter(|d, v| d.title = v)
                invalid=invalid("title")
            />
            <TextAreaField
                label="Description"
                value=text(|d| d.description.clone())
                on_input=setter(|d, v| d.description = v)
            />
            <div class="form-row">
                <SelectField
                    label="Priority"
                    options=priorities
                    value=text(|d| d.priority.clone())
                    on_change=setter(|d, v| d.priority = v)
                    invalid=invalid("priority")
                />
                <SelectField
                    label="Status"
                    options=statuses
                    value=text(|d| d.status.clone())
                    on_change=setter(|d, v| d.status = v)
                    invalid=invalid("status")
                />
            </div>
            <div class="form-row">
                <SelectField
                    label="Type"
                    options=kinds
                    value=text(|d| d.kind.clone())
                    on_change=setter(|d, v| d.kind = v)
                    invalid=invalid("type")
                />
                <TextField
                    label="Due Date"
                    input_type="date"
                    value=text(|d| d.due_date.clone())
                    on_input=setter(|d, v| d.due_date = v)
                    invalid=invalid("due date")
                />
            </div>
            <TextField
                label="Related Contact"
                value=text(|d| d.contact.clone())
                on_input=setter(|d, v| d.contact = v)
            />
        </FormModal>
    }
}
