//! Application Context
//!
//! Shared state provided via Leptos Context API.

use chrono::NaiveDate;
use leptos::prelude::*;

use crm_core::FormPolicy;

use crate::config::DashboardConfig;
use crate::format;

/// Sidebar destinations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Dashboard,
    Contacts,
    Deals,
    Tasks,
    Reports,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Dashboard, Page::Contacts, Page::Deals, Page::Tasks, Page::Reports];

    pub fn label(&self) -> &'static str {
        match self {
            Page::Dashboard => "Dashboard",
            Page::Contacts => "Contacts",
            Page::Deals => "Deals",
            Page::Tasks => "Tasks",
            Page::Reports => "Reports",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Page::Dashboard => "▦",
            Page::Contacts => "👥",
            Page::Deals => "🎯",
            Page::Tasks => "☑",
            Page::Reports => "📊",
        }
    }
}

/// App-wide signals and settings provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Startup configuration, fixed for the session
    config: StoredValue<DashboardConfig>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), config: DashboardConfig) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            config: StoredValue::new(config),
        }
    }

    pub fn navigate(&self, page: Page) {
        log::debug!("navigate to {:?}", page);
        self.set_page.set(page);
    }

    pub fn form_policy(&self) -> FormPolicy {
        self.config.with_value(DashboardConfig::form_policy)
    }

    pub fn upcoming_task_limit(&self) -> usize {
        self.config.with_value(|c| c.upcoming_task_limit)
    }

    /// Format an amount with the configured currency symbol
    pub fn money(&self, amount: u64) -> String {
        self.config.with_value(|c| format::money(&c.currency_symbol, amount))
    }

    pub fn money_f64(&self, amount: f64) -> String {
        self.config.with_value(|c| format::money_f64(&c.currency_symbol, amount))
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(now.get_full_year() as i32, now.get_month() + 1, now.get_date()).unwrap_or_default()
}
