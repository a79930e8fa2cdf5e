//! Form Drafts
//!
//! String-typed mirrors of the edit forms and their conversion into
//! records. Two policies are supported:
//! - lenient: numbers are read with integer-prefix semantics and anything
//!   unparseable becomes 0, never failing
//! - strict: every field is checked and the first problem is reported

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{Contact, ContactStatus, Deal, Priority, Stage, Task, TaskKind, TaskStatus, DEFAULT_ASSIGNEE};

/// Date format produced by `<input type="date">`
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Upper bound for a probability field
pub const MAX_PROBABILITY: u64 = 100;

/// Upper bound for a monetary field. Keeps pipeline sums far from `u64`
/// overflow: it takes over eighteen million maximal deals to reach it.
pub const MAX_AMOUNT: u64 = 1_000_000_000_000;

/// Strict validation failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{field} is required")]
    Required { field: &'static str },

    #[error("{field} must be a whole non-negative number, got {input:?}")]
    NotANumber { field: &'static str, input: String },

    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange { field: &'static str, value: u64, max: u64 },

    #[error("{field} has unknown value {input:?}")]
    UnknownOption { field: &'static str, input: String },

    #[error("{field} must be a date (YYYY-MM-DD), got {input:?}")]
    InvalidDate { field: &'static str, input: String },

    #[error("{field} is not valid: {input:?}")]
    Malformed { field: &'static str, input: String },
}

impl FormError {
    /// Name of the offending form field
    pub fn field(&self) -> &'static str {
        match self {
            FormError::Required { field }
            | FormError::NotANumber { field, .. }
            | FormError::OutOfRange { field, .. }
            | FormError::UnknownOption { field, .. }
            | FormError::InvalidDate { field, .. }
            | FormError::Malformed { field, .. } => field,
        }
    }
}

/// How a draft turns into a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FormPolicy {
    /// Silent coercion, never fails
    Lenient,
    /// Reject bad input with a [`FormError`]
    #[default]
    Strict,
}

/// A form's raw input, convertible into a record with a given id
pub trait Draft {
    type Output;

    /// Lenient conversion
    fn coerce(&self, id: u32) -> Self::Output;

    /// Strict conversion
    fn validate(&self, id: u32) -> Result<Self::Output, FormError>;

    fn build(&self, id: u32, policy: FormPolicy) -> Result<Self::Output, FormError> {
        match policy {
            FormPolicy::Lenient => Ok(self.coerce(id)),
            FormPolicy::Strict => self.validate(id),
        }
    }
}

// ========================
// Numeric parsing
// ========================

/// Integer-prefix parse: optional leading whitespace and sign followed by
/// at least one digit. Trailing garbage is ignored (`"12abc"` is 12,
/// `"7.9"` is 7). Saturates instead of overflowing.
pub fn parse_int_prefix(input: &str) -> Option<i64> {
    let s = input.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let run = digits.bytes().take_while(u8::is_ascii_digit).count();
    if run == 0 {
        return None;
    }

    let magnitude = digits[..run].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Lenient amount: unparseable or negative input becomes 0, anything above
/// [`MAX_AMOUNT`] is clamped to it
pub fn coerce_amount(input: &str) -> u64 {
    parse_int_prefix(input).map_or(0, |n| n.clamp(0, MAX_AMOUNT as i64) as u64)
}

fn coerce_percent(input: &str) -> u32 {
    parse_int_prefix(input).map_or(0, |n| u32::try_from(n.max(0)).unwrap_or(u32::MAX))
}

fn strict_amount(field: &'static str, input: &str, required: bool) -> Result<u64, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return if required { Err(FormError::Required { field }) } else { Ok(0) };
    }
    let value = trimmed.parse::<u64>().map_err(|_| FormError::NotANumber {
        field,
        input: input.to_string(),
    })?;
    if value > MAX_AMOUNT {
        return Err(FormError::OutOfRange { field, value, max: MAX_AMOUNT });
    }
    Ok(value)
}

fn strict_percent(field: &'static str, input: &str) -> Result<u32, FormError> {
    let value = strict_amount(field, input, false)?;
    if value > MAX_PROBABILITY {
        return Err(FormError::OutOfRange { field, value, max: MAX_PROBABILITY });
    }
    Ok(value as u32)
}

fn required_text(field: &'static str, input: &str) -> Result<String, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(FormError::Required { field })
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional_date(field: &'static str, input: &str) -> Result<String, FormError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Ok(String::new());
    }
    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map(|_| trimmed.to_string())
        .map_err(|_| FormError::InvalidDate { field, input: input.to_string() })
}

fn strict_option<T>(field: &'static str, input: &str, parse: impl Fn(&str) -> Option<T>) -> Result<T, FormError> {
    parse(input).ok_or_else(|| FormError::UnknownOption {
        field,
        input: input.to_string(),
    })
}

fn lenient_option<T: Default>(field: &'static str, input: &str, parse: impl Fn(&str) -> Option<T>) -> T {
    parse(input).unwrap_or_else(|| {
        log::warn!("{}: unknown value {:?}, using default", field, input);
        T::default()
    })
}

// ========================
// Deal
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct DealDraft {
    pub title: String,
    pub value: String,
    pub stage: String,
    pub contact: String,
    pub company: String,
    pub close_date: String,
    pub probability: String,
    pub description: String,
}

impl Default for DealDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            value: String::new(),
            stage: Stage::default().as_str().to_string(),
            contact: String::new(),
            company: String::new(),
            close_date: String::new(),
            probability: String::new(),
            description: String::new(),
        }
    }
}

impl DealDraft {
    /// Prefill from an existing deal for editing
    pub fn from_deal(deal: &Deal) -> Self {
        Self {
            title: deal.title.clone(),
            value: deal.value.to_string(),
            stage: deal.stage.as_str().to_string(),
            contact: deal.contact.clone(),
            company: deal.company.clone(),
            close_date: deal.close_date.clone(),
            probability: deal.probability.to_string(),
            description: deal.description.clone(),
        }
    }
}

impl Draft for DealDraft {
    type Output = Deal;

    fn coerce(&self, id: u32) -> Deal {
        Deal {
            id,
            title: self.title.clone(),
            value: coerce_amount(&self.value),
            stage: lenient_option("stage", &self.stage, Stage::parse),
            contact: self.contact.clone(),
            company: self.company.clone(),
            close_date: self.close_date.clone(),
            probability: coerce_percent(&self.probability),
            description: self.description.clone(),
        }
    }

    fn validate(&self, id: u32) -> Result<Deal, FormError> {
        Ok(Deal {
            id,
            title: required_text("title", &self.title)?,
            value: strict_amount("value", &self.value, true)?,
            stage: strict_option("stage", &self.stage, Stage::parse)?,
            contact: required_text("contact", &self.contact)?,
            company: required_text("company", &self.company)?,
            close_date: optional_date("close date", &self.close_date)?,
            probability: strict_percent("probability", &self.probability)?,
            description: self.description.trim().to_string(),
        })
    }
}

// ========================
// Contact
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub status: String,
    pub deal_value: String,
    /// Carried through unchanged; set to today for new contacts
    pub last_contact: String,
}

impl ContactDraft {
    /// Empty form for a contact first reached on `today`
    pub fn blank(today: NaiveDate) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            position: String::new(),
            status: ContactStatus::default().as_str().to_string(),
            deal_value: String::new(),
            last_contact: today.format(DATE_FORMAT).to_string(),
        }
    }

    pub fn from_contact(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            company: contact.company.clone(),
            position: contact.position.clone(),
            status: contact.status.as_str().to_string(),
            deal_value: contact.deal_value.to_string(),
            last_contact: contact.last_contact.clone(),
        }
    }
}

impl Draft for ContactDraft {
    type Output = Contact;

    fn coerce(&self, id: u32) -> Contact {
        Contact {
            id,
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            company: self.company.clone(),
            position: self.position.clone(),
            status: lenient_option("status", &self.status, ContactStatus::parse),
            last_contact: self.last_contact.clone(),
            deal_value: coerce_amount(&self.deal_value),
        }
    }

    fn validate(&self, id: u32) -> Result<Contact, FormError> {
        let name = required_text("name", &self.name)?;
        let email = required_text("email", &self.email)?;
        if !email.contains('@') {
            return Err(FormError::Malformed { field: "email", input: email });
        }
        Ok(Contact {
            id,
            name,
            email,
            phone: self.phone.trim().to_string(),
            company: self.company.trim().to_string(),
            position: self.position.trim().to_string(),
            status: strict_option("status", &self.status, ContactStatus::parse)?,
            last_contact: self.last_contact.clone(),
            deal_value: strict_amount("deal value", &self.deal_value, false)?,
        })
    }
}

// ========================
// Task
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub status: String,
    pub due_date: String,
    pub contact: String,
    pub kind: String,
    /// Carried through from the edited task
    pub assignee: String,
    pub completed: bool,
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            priority: Priority::default().as_str().to_string(),
            status: TaskStatus::default().as_str().to_string(),
            due_date: String::new(),
            contact: String::new(),
            kind: TaskKind::default().as_str().to_string(),
            assignee: DEFAULT_ASSIGNEE.to_string(),
            completed: false,
        }
    }
}

impl TaskDraft {
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            priority: task.priority.as_str().to_string(),
            status: task.status.as_str().to_string(),
            due_date: task.due_date.clone(),
            contact: task.contact.clone(),
            kind: task.kind.as_str().to_string(),
            assignee: task.assignee.clone(),
            completed: task.completed,
        }
    }
}

impl Draft for TaskDraft {
    type Output = Task;

    fn coerce(&self, id: u32) -> Task {
        Task {
            id,
            title: self.title.clone(),
            description: self.description.clone(),
            priority: lenient_option("priority", &self.priority, Priority::parse),
            status: lenient_option("status", &self.status, TaskStatus::parse),
            due_date: self.due_date.clone(),
            assignee: self.assignee.clone(),
            contact: self.contact.clone(),
            kind: lenient_option("type", &self.kind, TaskKind::parse),
            completed: self.completed,
        }
    }

    fn validate(&self, id: u32) -> Result<Task, FormError> {
        Ok(Task {
            id,
            title: required_text("title", &self.title)?,
            description: self.description.trim().to_string(),
            priority: strict_option("priority", &self.priority, Priority::parse)?,
            status: strict_option("status", &self.status, TaskStatus::parse)?,
            due_date: optional_date("due date", &self.due_date)?,
            assignee: self.assignee.clone(),
            contact: self.contact.trim().to_string(),
            kind: strict_option("type", &self.kind, TaskKind::parse)?,
            completed: self.completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_deal() -> DealDraft {
        DealDraft {
            title: "Acme Corp - CRM".to_string(),
            value: "50000".to_string(),
            stage: "proposal".to_string(),
            contact: "John Smith".to_string(),
            company: "Acme".to_string(),
            close_date: "2024-03-15".to_string(),
            probability: "25".to_string(),
            description: String::new(),
        }
    }

    #[test]
    fn test_parse_int_prefix() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("  12abc"), Some(12));
        assert_eq!(parse_int_prefix("7.9"), Some(7));
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix("+8"), Some(8));
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn test_coerce_amount_defaults_to_zero() {
        assert_eq!(coerce_amount(""), 0);
        assert_eq!(coerce_amount("abc"), 0);
        assert_eq!(coerce_amount("-5"), 0);
        assert_eq!(coerce_amount("12abc"), 12);
    }

    #[test]
    fn test_amounts_are_bounded() {
        assert_eq!(coerce_amount("99999999999999999999"), MAX_AMOUNT);
        assert_eq!(coerce_amount("1000000000001"), MAX_AMOUNT);
        assert_eq!(coerce_amount("1000000000000"), MAX_AMOUNT);

        let draft = DealDraft { value: u64::MAX.to_string(), ..filled_deal() };
        assert_eq!(
            draft.validate(1),
            Err(FormError::OutOfRange { field: "value", value: u64::MAX, max: MAX_AMOUNT })
        );
        assert_eq!(draft.coerce(1).value, MAX_AMOUNT);

        let draft = DealDraft { value: MAX_AMOUNT.to_string(), ..filled_deal() };
        assert_eq!(draft.validate(1).map(|d| d.value), Ok(MAX_AMOUNT));

        // the amount bound does not cap a lenient probability
        let draft = DealDraft { probability: "5000000000000".to_string(), ..filled_deal() };
        assert_eq!(draft.coerce(1).probability, u32::MAX);
    }

    #[test]
    fn test_deal_coerce_never_fails() {
        let draft = DealDraft {
            value: "lots".to_string(),
            probability: "150".to_string(),
            stage: "won".to_string(),
            ..DealDraft::default()
        };
        let deal = draft.coerce(9);
        assert_eq!(deal.id, 9);
        assert_eq!(deal.value, 0);
        // the bound is only a hint in lenient mode
        assert_eq!(deal.probability, 150);
        assert_eq!(deal.stage, Stage::Prospecting);
    }

    #[test]
    fn test_deal_validate_accepts_complete_form() {
        let deal = filled_deal().validate(3).unwrap();
        assert_eq!(deal.value, 50_000);
        assert_eq!(deal.stage, Stage::Proposal);
        assert_eq!(deal.probability, 25);
    }

    #[test]
    fn test_deal_validate_errors() {
        let draft = DealDraft { title: "  ".to_string(), ..filled_deal() };
        assert_eq!(draft.validate(1), Err(FormError::Required { field: "title" }));

        let draft = DealDraft { probability: "101".to_string(), ..filled_deal() };
        assert_eq!(
            draft.validate(1),
            Err(FormError::OutOfRange { field: "probability", value: 101, max: 100 })
        );

        let draft = DealDraft { value: "12abc".to_string(), ..filled_deal() };
        assert_eq!(draft.validate(1).unwrap_err().field(), "value");

        let draft = DealDraft { close_date: "next week".to_string(), ..filled_deal() };
        assert_eq!(draft.validate(1).unwrap_err().field(), "close date");
    }

    #[test]
    fn test_empty_probability_is_zero_when_strict() {
        let draft = DealDraft { probability: String::new(), ..filled_deal() };
        assert_eq!(draft.validate(1).unwrap().probability, 0);
    }

    #[test]
    fn test_build_respects_policy() {
        let draft = DealDraft::default();
        assert!(draft.build(1, FormPolicy::Lenient).is_ok());
        assert!(draft.build(1, FormPolicy::Strict).is_err());
    }

    #[test]
    fn test_deal_draft_prefill() {
        let deal = filled_deal().validate(4).unwrap();
        let draft = DealDraft::from_deal(&deal);
        assert_eq!(draft.value, "50000");
        assert_eq!(draft.stage, "proposal");
        assert_eq!(draft.validate(4).unwrap(), deal);
    }

    #[test]
    fn test_contact_blank_sets_today() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let draft = ContactDraft::blank(today);
        assert_eq!(draft.last_contact, "2024-01-20");
        assert_eq!(draft.status, "active");
    }

    #[test]
    fn test_contact_validate() {
        let today = NaiveDate::from_ymd_opt(2024, 1, 20).unwrap();
        let mut draft = ContactDraft::blank(today);
        draft.name = "Ada".to_string();
        draft.email = "ada.example.com".to_string();
        assert_eq!(draft.validate(1).unwrap_err().field(), "email");

        draft.email = "ada@example.com".to_string();
        draft.deal_value = "2500".to_string();
        let contact = draft.validate(1).unwrap();
        assert_eq!(contact.deal_value, 2500);
        assert_eq!(contact.last_contact, "2024-01-20");
    }

    #[test]
    fn test_task_draft_round_trip_keeps_completion() {
        let mut task = Task::new(2, "Demo", Priority::High, "2024-01-19");
        task.completed = true;
        task.status = TaskStatus::Completed;
        let rebuilt = TaskDraft::from_task(&task).validate(2).unwrap();
        assert_eq!(rebuilt, task);
    }

    #[test]
    fn test_task_lenient_unknown_kind() {
        let draft = TaskDraft { kind: "fax".to_string(), ..TaskDraft::default() };
        assert_eq!(draft.coerce(1).kind, TaskKind::Task);
        assert_eq!(draft.validate(1).unwrap_err().field(), "title");
    }
}
