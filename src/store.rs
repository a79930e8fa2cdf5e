//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity. Each collection
//! is replaced wholesale by the new value `crm-core` returns; nothing is
//! patched in place.

use leptos::prelude::*;
use reactive_stores::Store;

use crm_core::{
    seed, Collection, Contact, ContactDraft, DealBook, DealDraft, DomainResult, FormPolicy, Stage, SubmitError,
    Task, TaskDraft,
};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Deals on the pipeline board
    pub deals: DealBook,
    pub contacts: Collection<Contact>,
    pub tasks: Collection<Task>,
}

impl AppState {
    /// Demo data or an empty workspace
    pub fn new(seed_demo_data: bool) -> Self {
        if !seed_demo_data {
            return Self::default();
        }
        Self {
            deals: DealBook::seeded(seed::deals()),
            contacts: Collection::seeded(seed::contacts()),
            tasks: Collection::seeded(seed::tasks()),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

fn log_failure<T>(action: &str, result: &Result<T, impl std::fmt::Display>) {
    if let Err(e) = result {
        log::warn!("{} failed: {}", action, e);
    }
}

/// Add a deal (`editing = None`) or overwrite deal `editing` from a form
pub fn store_submit_deal(
    store: &AppStore,
    editing: Option<u32>,
    draft: &DealDraft,
    policy: FormPolicy,
) -> Result<(), SubmitError> {
    let current = store.deals().get_untracked();
    let result = match editing {
        None => current.with_draft(draft, policy).map(|(book, id)| {
            log::info!("deal {} added", id);
            book
        }),
        Some(id) => current.with_draft_applied(id, draft, policy),
    };
    log_failure("save deal", &result);
    *store.deals().write() = result?;
    Ok(())
}

/// Move a deal to another column
pub fn store_move_deal(store: &AppStore, id: u32, stage: Stage) -> DomainResult<()> {
    let result = store.deals().get_untracked().with_deal_moved(id, stage);
    log_failure("move deal", &result);
    *store.deals().write() = result?;
    log::info!("deal {} moved to {}", id, stage);
    Ok(())
}

pub fn store_remove_deal(store: &AppStore, id: u32) -> DomainResult<()> {
    let result = store.deals().get_untracked().without(id);
    log_failure("delete deal", &result);
    *store.deals().write() = result?;
    Ok(())
}

pub fn store_submit_contact(
    store: &AppStore,
    editing: Option<u32>,
    draft: &ContactDraft,
    policy: FormPolicy,
) -> Result<(), SubmitError> {
    let current = store.contacts().get_untracked();
    let result = match editing {
        None => current.with_draft(draft, policy).map(|(contacts, _)| contacts),
        Some(id) => current.with_draft_applied(id, draft, policy),
    };
    log_failure("save contact", &result);
    *store.contacts().write() = result?;
    Ok(())
}

pub fn store_remove_contact(store: &AppStore, id: u32) -> DomainResult<()> {
    let result = store.contacts().get_untracked().without(id);
    log_failure("delete contact", &result);
    *store.contacts().write() = result?;
    Ok(())
}

pub fn store_submit_task(
    store: &AppStore,
    editing: Option<u32>,
    draft: &TaskDraft,
    policy: FormPolicy,
) -> Result<(), SubmitError> {
    let current = store.tasks().get_untracked();
    let result = match editing {
        None => current.with_draft(draft, policy).map(|(tasks, _)| tasks),
        Some(id) => current.with_draft_applied(id, draft, policy),
    };
    log_failure("save task", &result);
    *store.tasks().write() = result?;
    Ok(())
}

/// Flip a task between completed and pending
pub fn store_toggle_task(store: &AppStore, id: u32) -> DomainResult<()> {
    let result = store.tasks().get_untracked().with_replaced(id, Task::toggled);
    log_failure("toggle task", &result);
    *store.tasks().write() = result?;
    Ok(())
}

pub fn store_remove_task(store: &AppStore, id: u32) -> DomainResult<()> {
    let result = store.tasks().get_untracked().without(id);
    log_failure("delete task", &result);
    *store.tasks().write() = result?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_seeding() {
        let state = AppState::new(true);
        assert_eq!(state.deals.len(), 5);
        assert_eq!(state.contacts.len(), 5);
        assert_eq!(state.tasks.len(), 5);
        assert_eq!(state.deals.next_id(), Some(6));

        let empty = AppState::new(false);
        assert!(empty.deals.is_empty());
        assert_eq!(empty.tasks.next_id(), Some(1));
    }

    #[test]
    fn test_failed_update_leaves_store_unchanged() {
        let store = Store::new(AppState::new(true));
        assert!(store_remove_deal(&store, 42).is_err());
        assert!(store_toggle_task(&store, 42).is_err());
        assert_eq!(store.deals().get_untracked().len(), 5);

        assert!(store_remove_deal(&store, 1).is_ok());
        assert!(store_move_deal(&store, 2, Stage::ClosedWon).is_ok());
        let deals = store.deals().get_untracked();
        assert_eq!(deals.len(), 4);
        assert_eq!(deals.get(2).map(|d| d.stage), Some(Stage::ClosedWon));
    }
}
