//! Deal Card Component
//!
//! One deal on the kanban board. Pressing and dragging the card starts a
//! move; the edit and delete buttons do not.

use leptos::prelude::*;
use leptos_dragdrop::{make_on_mousedown, DndSignals};

use crm_core::{Deal, Stage};

use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::store::{store_remove_deal, use_app_store};

#[component]
pub fn DealCard(deal: Deal, dnd: DndSignals<Stage>, on_edit: Callback<u32>) -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let id = deal.id;
    let value = ctx.money(deal.value);
    let description = (!deal.description.is_empty()).then(|| deal.description.clone());

    let card_class = move || {
        let mut c = String::from("deal-card");
        if dnd.is_dragging(id) { c.push_str(" dragging"); }
        c
    };

    // A click that ends a drag should not open the editor
    let on_click = move |_| {
        if !dnd.drag_just_ended.get_untracked() {
            on_edit.run(id);
        }
    };

    view! {
        <div class=card_class on:mousedown=make_on_mousedown(dnd, id) on:click=on_click>
            <div class="deal-card-header">
                <h4 class="deal-title">{deal.title.clone()}</h4>
                <DeleteConfirmButton
                    button_class="icon-btn delete-btn"
                    on_confirm=Callback::new(move |_: ()| {
                        // failures are logged by the store helper
                        store_remove_deal(&store, id).ok();
                    })
                />
            </div>
            <div class="deal-meta">"👤 " {deal.contact.clone()}</div>
            <div class="deal-meta">"📅 " {deal.close_date.clone()}</div>
            <div class="deal-card-footer">
                <span class="deal-value">{value}</span>
                <span class="badge outline">{format!("{}%", deal.probability)}</span>
            </div>
            {description.map(|text| view! { <p class="deal-description">{text}</p> })}
        </div>
    }
}
