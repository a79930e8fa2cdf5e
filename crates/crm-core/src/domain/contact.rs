//! Contact Entity

use serde::{Deserialize, Serialize};

use super::entity::Entity;

/// Relationship status of a contact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ContactStatus {
    #[default]
    Active,
    Prospecting,
    Qualified,
    Negotiation,
    Closed,
}

impl ContactStatus {
    pub const ALL: [ContactStatus; 5] = [
        ContactStatus::Active,
        ContactStatus::Prospecting,
        ContactStatus::Qualified,
        ContactStatus::Negotiation,
        ContactStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactStatus::Active => "active",
            ContactStatus::Prospecting => "prospecting",
            ContactStatus::Qualified => "qualified",
            ContactStatus::Negotiation => "negotiation",
            ContactStatus::Closed => "closed",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        ContactStatus::ALL.into_iter().find(|status| status.as_str() == s)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactStatus::Active => "Active",
            ContactStatus::Prospecting => "Prospecting",
            ContactStatus::Qualified => "Qualified",
            ContactStatus::Negotiation => "Negotiation",
            ContactStatus::Closed => "Closed",
        }
    }
}

/// A person at a customer or prospect company
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    /// Job title
    pub position: String,
    pub status: ContactStatus,
    /// Date of last interaction, free-form
    pub last_contact: String,
    /// Value of open business with this contact
    pub deal_value: u64,
}

impl Contact {
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>, company: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            phone: String::new(),
            company: company.into(),
            position: String::new(),
            status: ContactStatus::default(),
            last_contact: String::new(),
            deal_value: 0,
        }
    }

    /// Case-insensitive match against name, email or company
    pub fn matches(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.email.to_lowercase().contains(needle_lower)
            || self.company.to_lowercase().contains(needle_lower)
    }
}

impl Entity for Contact {
    fn id(&self) -> u32 {
        self.id
    }
}
