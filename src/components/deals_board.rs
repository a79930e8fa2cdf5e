//! Deals Board Component
//!
//! Pipeline page: stat row, one kanban column per stage, and the deal
//! form. Cards are dragged between columns with `leptos-dragdrop`.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_handlers, create_dnd_signals, make_on_mouseleave, make_on_target_mouseenter, DndSignals};

use crm_core::{active_deal_count, bucket_by_stage, stage_total, total_pipeline_value, weighted_pipeline_value, Deal, Stage};

use crate::components::{DealCard, DealForm, EditTarget, MetricCard};
use crate::context::use_app_context;
use crate::store::{store_move_deal, use_app_store, AppStateStoreFields};

/// One kanban column
#[component]
fn StageColumn(stage: Stage, dnd: DndSignals<Stage>, on_edit: Callback<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let deals = Memo::new(move |_| {
        store.deals().with(|book| bucket_by_stage(book.as_slice(), stage).into_iter().cloned().collect::<Vec<Deal>>())
    });
    let total = move || ctx.money(store.deals().with(|book| stage_total(book.as_slice(), stage)));

    let column_class = move || {
        if dnd.is_over(stage) { "stage-column drop-target" } else { "stage-column" }
    };

    view! {
        <div
            class=column_class
            on:mouseenter=make_on_target_mouseenter(dnd, stage)
            on:mouseleave=make_on_mouseleave(dnd, stage)
        >
            <div class=format!("stage-header stage-{}", stage.as_str())>
                <h3>{stage.label()}</h3>
                <span class="badge">{move || deals.with(Vec::len)}</span>
            </div>
            <p class="stage-total">{total}</p>
            <div class="stage-cards">
                <For
                    each=move || deals.get()
                    key=|deal| deal.clone()
                    children=move |deal| view! { <DealCard deal=deal dnd=dnd on_edit=on_edit /> }
                />
                <Show when=move || deals.with(Vec::is_empty)>
                    <p class="empty-column">"Drop deals here"</p>
                </Show>
            </div>
        </div>
    }
}

#[component]
pub fn DealsPage() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let dnd = create_dnd_signals::<Stage>();
    let editing = RwSignal::new(None::<EditTarget>);

    bind_global_handlers(dnd, move |id, stage| {
        let unchanged = store.deals().with_untracked(|book| book.get(id).map(|d| d.stage) == Some(stage));
        if !unchanged {
            // failures are logged by the store helper
            store_move_deal(&store, id, stage).ok();
        }
    });

    let total = Signal::derive(move || ctx.money(store.deals().with(|b| total_pipeline_value(b.as_slice()))));
    let weighted = Signal::derive(move || ctx.money_f64(store.deals().with(|b| weighted_pipeline_value(b.as_slice()))));
    let active = Signal::derive(move || store.deals().with(|b| active_deal_count(b.as_slice())).to_string());

    let on_edit = Callback::new(move |id: u32| editing.set(Some(EditTarget::Existing(id))));
    let on_close = Callback::new(move |_: ()| editing.set(None));

    view! {
        <div class="page deals-page">
            <div class="page-header">
                <div>
                    <h1>"Sales Pipeline"</h1>
                    <p class="page-subtitle">"Track deals through each stage"</p>
                </div>
                <button class="primary-btn" on:click=move |_| editing.set(Some(EditTarget::New))>
                    "+ Add Deal"
                </button>
            </div>

            <div class="stat-row">
                <MetricCard title="Total Pipeline" value=total icon="💰" />
                <MetricCard title="Weighted Pipeline" value=weighted icon="📈" tone="success" />
                <MetricCard title="Active Deals" value=active icon="🎯" tone="warning" />
            </div>

            <div class=move || if dnd.is_active() { "kanban-board dragging" } else { "kanban-board" }>
                {Stage::ALL
                    .into_iter()
                    .map(|stage| view! { <StageColumn stage=stage dnd=dnd on_edit=on_edit /> })
                    .collect_view()}
            </div>

            {move || editing.get().map(|target| view! { <DealForm target=target on_close=on_close /> })}
        </div>
    }
}
