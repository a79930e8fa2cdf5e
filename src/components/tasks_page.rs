//! Tasks Page Component
//!
//! Stat row, status and priority filters, and the task list. The checkbox
//! on each row toggles completion.

use leptos::prelude::*;

use crm_core::query::is_overdue;
use crm_core::{filter_tasks, task_stats, Priority, Task, TaskStatus};

use crate::components::{DeleteConfirmButton, EditTarget, MetricCard, SelectField, TaskForm};
use crate::context::today;
use crate::store::{store_remove_task, store_toggle_task, use_app_store, AppStateStoreFields};

/// Filter value meaning "no filter"
const ALL: &str = "all";

#[component]
fn TaskRow(task: Task, on_edit: Callback<u32>) -> impl IntoView {
    let store = use_app_store();
    let id = task.id;
    let overdue = is_overdue(&task, today());

    let mut row_class = String::from("task-row");
    if task.completed { row_class.push_str(" completed"); }
    if overdue { row_class.push_str(" overdue"); }

    view! {
        <div class=row_class>
            <input
                type="checkbox"
                prop:checked=task.completed
                on:change=move |_| {
                    // failures are logged by the store helper
                    store_toggle_task(&store, id).ok();
                }
            />
            <span class="task-kind">{task.kind.icon()}</span>
            <div class="task-body" on:click=move |_| on_edit.run(id)>
                <div class="task-title">{task.title.clone()}</div>
                <div class="muted">{task.description.clone()}</div>
                <div class="task-meta">
                    <span class=format!("badge priority-{}", task.priority.as_str())>{task.priority.label()}</span>
                    <span class="badge outline">{task.status.label()}</span>
                    <span>"📅 " {task.due_date.clone()}</span>
                    <span>"👤 " {task.assignee.clone()}</span>
                    {(!task.contact.is_empty()).then(|| view! { <span>"↔ " {task.contact.clone()}</span> })}
                </div>
            </div>
            <DeleteConfirmButton
                button_class="icon-btn delete-btn"
                on_confirm=Callback::new(move |_: ()| {
                    // failures are logged by the store helper
                    store_remove_task(&store, id).ok();
                })
            />
        </div>
    }
}

#[component]
pub fn TasksPage() -> impl IntoView {
    let store = use_app_store();

    let status_filter = RwSignal::new(ALL.to_string());
    let priority_filter = RwSignal::new(ALL.to_string());
    let editing = RwSignal::new(None::<EditTarget>);

    let stats = Memo::new(move |_| store.tasks().with(|tasks| task_stats(tasks.as_slice(), today())));
    let visible = Memo::new(move |_| {
        let status = status_filter.with(|s| TaskStatus::parse(s));
        let priority = priority_filter.with(|p| Priority::parse(p));
        store
            .tasks()
            .with(|tasks| filter_tasks(tasks.as_slice(), status, priority).into_iter().cloned().collect::<Vec<_>>())
    });

    let mut status_options = vec![(ALL, "All Status")];
    status_options.extend(TaskStatus::ALL.iter().map(|s| (s.as_str(), s.label())));
    let mut priority_options = vec![(ALL, "All Priority")];
    priority_options.extend(Priority::ALL.iter().map(|p| (p.as_str(), p.label())));

    let on_edit = Callback::new(move |id: u32| editing.set(Some(EditTarget::Existing(id))));
    let on_close = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page tasks-page">
            <div class="page-header">
                <div>
                    <h1>"Tasks"</h1>
                    <p class="page-subtitle">"Stay on top of your follow-ups"</p>
                </div>
                <button class="primary-btn" on:click=move |_| editing.set(Some(EditTarget::New))>
                    "+ Add Task"
                </button>
            </div>

            <div class="stat-row">
                <MetricCard title="Total Tasks" value=Signal::derive(move || stats.get().total.to_string()) icon="📋" />
                <MetricCard
                    title="Completed"
                    value=Signal::derive(move || stats.get().completed.to_string())
                    icon="✅"
                    tone="success"
                />
                <MetricCard
                    title="Pending"
                    value=Signal::derive(move || stats.get().pending.to_string())
                    icon="⏳"
                    tone="warning"
                />
                <MetricCard
                    title="Overdue"
                    value=Signal::derive(move || stats.get().overdue.to_string())
                    icon="⚠"
                    tone="destructive"
                />
            </div>

            <div class="card filter-bar">
                <SelectField
                    label="Status"
                    options=status_options
                    value=status_filter
                    on_change=Callback::new(move |v: String| status_filter.set(v))
                />
                <SelectField
                    label="Priority"
                    options=priority_options
                    value=priority_filter
                    on_change=Callback::new(move |v: String| priority_filter.set(v))
                />
            </div>

            <div class="card task-list">
                <For
                    each=move || visible.get()
                    key=|task| task.clone()
                    children=move |task| view! { <TaskRow task=task on_edit=on_edit /> }
                />
                <Show when=move || visible.with(Vec::is_empty)>
                    <p class="empty-state">"No tasks match the selected filters"</p>
                </Show>
            </div>

            {move || editing.get().map(|target| view! { <TaskForm target=target on_close=on_close /> })}
        </div>
    }
}
