//! UI Components
//!
//! Shared building blocks (fields, modal, cards) and one component per page.

mod delete_confirm_button;
mod editor_target;
mod field;
mod form_modal;
mod metric_card;
mod nav_sidebar;
mod deal_card;
mod deal_form;
mod deals_board;
mod contact_form;
mod contacts_page;
mod task_form;
mod tasks_page;
mod dashboard_page;
mod reports_page;

pub use delete_confirm_button::DeleteConfirmButton;
pub use editor_target::EditTarget;
pub use field::{SelectField, TextAreaField, TextField};
pub use form_modal::FormModal;
pub use metric_card::MetricCard;
pub use nav_sidebar::NavSidebar;
pub use deal_card::DealCard;
pub use deal_form::DealForm;
pub use deals_board::DealsPage;
pub use contact_form::ContactForm;
pub use contacts_page::ContactsPage;
pub use task_form::TaskForm;
pub use tasks_page::TasksPage;
pub use dashboard_page::DashboardPage;
pub use reports_page::ReportsPage;
