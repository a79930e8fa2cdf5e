//! CRM Dashboard App
//!
//! Sidebar navigation plus the active page. Provides the store and app
//! context to everything below it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{ContactsPage, DashboardPage, DealsPage, NavSidebar, ReportsPage, TasksPage};
use crate::config::DashboardConfig;
use crate::context::{AppContext, Page};
use crate::store::AppState;

#[component]
pub fn App(config: DashboardConfig) -> impl IntoView {
    let store = Store::new(AppState::new(config.seed_demo_data));
    provide_context(store);

    let ctx = AppContext::new(signal(Page::default()), config);
    provide_context(ctx);

    view! {
        <div class="app-layout">
            <NavSidebar />
            <main class="main-content">
                {move || match ctx.page.get() {
                    Page::Dashboard => view! { <DashboardPage /> }.into_any(),
                    Page::Contacts => view! { <ContactsPage /> }.into_any(),
                    Page::Deals => view! { <DealsPage /> }.into_any(),
                    Page::Tasks => view! { <TasksPage /> }.into_any(),
                    Page::Reports => view! { <ReportsPage /> }.into_any(),
                }}
            </main>
        </div>
    }
}
