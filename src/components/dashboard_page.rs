//! Dashboard Page Component
//!
//! Landing page: headline numbers across deals, contacts and tasks, plus the
//! next few open tasks.

use leptos::prelude::*;

use crm_core::{active_deal_count, task_stats, total_pipeline_value, upcoming_tasks, weighted_pipeline_value, Task};

use crate::components::MetricCard;
use crate::context::{today, use_app_context, Page};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
fn UpcomingTask(task: Task) -> impl IntoView {
    view! {
        <li class="upcoming-task">
            <span class="task-kind">{task.kind.icon()}</span>
            <div class="task-body">
                <div class="task-title">{task.title.clone()}</div>
                <div class="muted">{task.contact.clone()}</div>
            </div>
            <span class=format!("badge priority-{}", task.priority.as_str())>{task.priority.label()}</span>
            <span class="muted">{task.due_date.clone()}</span>
        </li>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let pipeline = Signal::derive(move || ctx.money(store.deals().with(|b| total_pipeline_value(b.as_slice()))));
    let weighted =
        Signal::derive(move || ctx.money_f64(store.deals().with(|b| weighted_pipeline_value(b.as_slice()))));
    let active = Signal::derive(move || store.deals().with(|b| active_deal_count(b.as_slice())).to_string());
    let contacts = Signal::derive(move || store.contacts().with(|c| c.len()).to_string());
    let open_tasks = Signal::derive(move || store.tasks().with(|t| task_stats(t.as_slice(), today()).pending).to_string());

    let limit = ctx.upcoming_task_limit();
    let upcoming = Memo::new(move |_| {
        store
            .tasks()
            .with(|tasks| upcoming_tasks(tasks.as_slice(), limit).into_iter().cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <div>
                    <h1>"Dashboard"</h1>
                    <p class="page-subtitle">"Your sales at a glance"</p>
                </div>
            </div>

            <div class="stat-row">
                <MetricCard title="Pipeline Value" value=pipeline icon="💰" />
                <MetricCard title="Weighted Pipeline" value=weighted icon="📈" tone="success" />
                <MetricCard title="Active Deals" value=active icon="🎯" tone="success" />
                <MetricCard title="Contacts" value=contacts icon="👥" tone="warning" />
                <MetricCard title="Open Tasks" value=open_tasks icon="☑" tone="destructive" />
            </div>

            <div class="card">
                <div class="card-header">
                    <h2>"Upcoming Tasks"</h2>
                    <button class="outline-btn" on:click=move |_| ctx.navigate(Page::Tasks)>"View all"</button>
                </div>
                <ul class="upcoming-list">
                    <For
                        each=move || upcoming.get()
                        key=|task| task.clone()
                        children=|task| view! { <UpcomingTask task=task /> }
                    />
                </ul>
                <Show when=move || upcoming.with(Vec::is_empty)>
                    <p class="empty-state">"Nothing due. Nice work."</p>
                </Show>
            </div>
        </div>
    }
}
