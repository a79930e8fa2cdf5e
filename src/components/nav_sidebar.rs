//! Navigation Sidebar Component
//!
//! Left column listing the dashboard pages.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn NavSidebar() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <nav class="nav-sidebar">
            <div class="nav-brand">"CRM Dashboard"</div>
            {Page::ALL
                .into_iter()
                .map(|page| {
                    let is_active = move || ctx.page.get() == page;
                    view! {
                        <button
                            class=move || if is_active() { "nav-item active" } else { "nav-item" }
                            on:click=move |_| ctx.navigate(page)
                        >
                            <span class="nav-icon">{page.icon()}</span>
                            {page.label()}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}
