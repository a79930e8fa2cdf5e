//! Reports Page Component
//!
//! Per-stage pipeline breakdown, win rate, and a JSON export of the deal
//! and contact lists.

use leptos::prelude::*;

use crm_core::{export_json, pipeline_summary, Stage};

use crate::components::MetricCard;
use crate::context::use_app_context;
use crate::format::percent;
use crate::store::{use_app_store, AppStateStoreFields};

/// What the export panel is showing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ExportKind {
    Deals,
    Contacts,
}

#[component]
pub fn ReportsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let summary = Memo::new(move |_| store.deals().with(|b| pipeline_summary(b.as_slice())));
    let export = RwSignal::new(None::<ExportKind>);

    let exported = move || {
        let kind = export.get()?;
        let json = match kind {
            ExportKind::Deals => store.deals().with(|b| export_json(b.as_slice())),
            ExportKind::Contacts => store.contacts().with(|c| export_json(c.as_slice())),
        };
        Some(json.unwrap_or_else(|e| {
            log::error!("export of {:?} failed: {}", kind, e);
            e.to_string()
        }))
    };

    view! {
        <div class="page reports-page">
            <div class="page-header">
                <div>
                    <h1>"Reports"</h1>
                    <p class="page-subtitle">"Pipeline performance by stage"</p>
                </div>
                <div class="header-actions">
                    <button class="outline-btn" on:click=move |_| export.set(Some(ExportKind::Deals))>
                        "Export Deals"
                    </button>
                    <button class="outline-btn" on:click=move |_| export.set(Some(ExportKind::Contacts))>
                        "Export Contacts"
                    </button>
                </div>
            </div>

            <div class="stat-row">
                <MetricCard
                    title="Total Pipeline"
                    value=Signal::derive(move || ctx.money(summary.with(|s| s.total_value)))
                    icon="💰"
                />
                <MetricCard
                    title="Weighted Pipeline"
                    value=Signal::derive(move || ctx.money_f64(summary.with(|s| s.weighted_value)))
                    icon="📈"
                    tone="success"
                />
                <MetricCard
                    title="Win Rate"
                    value=Signal::derive(move || percent(summary.with(|s| s.win_rate)))
                    icon="🏆"
                    tone="warning"
                />
            </div>

            <div class="card">
                <h2>"Deals by Stage"</h2>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Stage"</th>
                            <th>"Deals"</th>
                            <th>"Value"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {Stage::ALL
                            .into_iter()
                            .map(|stage| {
                                let row = move || summary.with(|s| *s.stage(stage));
                                view! {
                                    <tr>
                                        <td>{stage.label()}</td>
                                        <td>{move || row().count}</td>
                                        <td>{move || ctx.money(row().total)}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>

            {move || {
                exported()
                    .map(|json| {
                        view! {
                            <div class="card export-panel">
                                <div class="card-header">
                                    <h2>"Export"</h2>
                                    <button class="icon-btn" title="Close" on:click=move |_| export.set(None)>"✕"</button>
                                </div>
                                <pre class="export-json">{json}</pre>
                            </div>
                        }
                    })
            }}
        </div>
    }
}
