//! Domain Layer
//!
//! Contains all CRM entities and their fixed enumerations.
//! This layer has no browser dependencies.

mod entity;
mod stage;
mod deal;
mod contact;
mod task;

pub use entity::{Entity, DomainError, DomainResult};
pub use stage::Stage;
pub use deal::Deal;
pub use contact::{Contact, ContactStatus};
pub use task::{Task, TaskStatus, Priority, TaskKind, DEFAULT_ASSIGNEE};
