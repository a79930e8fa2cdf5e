//! Deal Entity
//!
//! A sales opportunity with a monetary value, a close probability and a
//! pipeline stage.

use serde::{Deserialize, Serialize};

use super::entity::Entity;
use super::stage::Stage;

/// A sales opportunity
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deal {
    /// Unique identifier
    pub id: u32,
    pub title: String,
    /// Monetary amount in whole currency units
    pub value: u64,
    pub stage: Stage,
    /// Contact person (free text)
    pub contact: String,
    pub company: String,
    /// Expected close date, free-form
    pub close_date: String,
    /// Close probability in percent, nominally 0..=100
    pub probability: u32,
    pub description: String,
}

impl Deal {
    /// Create a deal with empty text fields
    pub fn new(id: u32, title: impl Into<String>, value: u64, stage: Stage, probability: u32) -> Self {
        Self {
            id,
            title: title.into(),
            value,
            stage,
            contact: String::new(),
            company: String::new(),
            close_date: String::new(),
            probability,
            description: String::new(),
        }
    }

    /// Value scaled by probability, unrounded
    pub fn weighted_value(&self) -> f64 {
        self.value as f64 * self.probability as f64 / 100.0
    }

    /// Still in the active pipeline
    pub fn is_active(&self) -> bool {
        !self.stage.is_closed()
    }
}

impl Entity for Deal {
    fn id(&self) -> u32 {
        self.id
    }
}
