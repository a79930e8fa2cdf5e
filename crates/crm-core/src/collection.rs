//! Record Collections
//!
//! Insertion-ordered records with a monotonic id allocator. Every update
//! returns a new collection; the receiver is never modified, so a view
//! computed from the old value stays consistent while the new one renders.

use thiserror::Error;

use crate::domain::{Deal, DomainError, DomainResult, Entity, Stage};
use crate::forms::{Draft, FormError, FormPolicy};

/// Hands out ids that only ever grow. An id freed by deletion is never
/// issued again, and once `u32::MAX` has been issued the allocator is
/// exhausted rather than repeating it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IdAllocator {
    next: Option<u32>,
}

impl IdAllocator {
    /// Start after the largest id already in use
    pub fn after(ids: impl IntoIterator<Item = u32>) -> Self {
        let next = match ids.into_iter().max() {
            Some(max) => max.checked_add(1),
            None => Some(1),
        };
        Self { next }
    }

    /// Peek at the next id without consuming it. `None` once exhausted.
    pub fn peek(&self) -> Option<u32> {
        self.next
    }

    /// Allocator advanced past the returned id
    pub fn advance(self) -> DomainResult<(u32, Self)> {
        let id = self
            .next
            .ok_or_else(|| DomainError::Internal("record ids exhausted".to_string()))?;
        Ok((id, Self { next: id.checked_add(1) }))
    }
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self { next: Some(1) }
    }
}

/// Insertion-ordered records of one entity type
#[derive(Debug, Clone, PartialEq)]
pub struct Collection<T: Entity> {
    records: Vec<T>,
    ids: IdAllocator,
}

impl<T: Entity> Default for Collection<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            ids: IdAllocator::default(),
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Wrap existing records; new ids continue after the largest seed id
    pub fn seeded(records: Vec<T>) -> Self {
        let ids = IdAllocator::after(records.iter().map(Entity::id));
        Self { records, ids }
    }

    pub fn as_slice(&self) -> &[T] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&T> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Id the next insert will receive, `None` when ids are exhausted
    pub fn next_id(&self) -> Option<u32> {
        self.ids.peek()
    }

    /// Append a record built from a freshly allocated id
    pub fn with_inserted(&self, build: impl FnOnce(u32) -> T) -> DomainResult<(Self, u32)> {
        self.try_with_inserted(|id| Ok(build(id)))
    }

    /// Same as [`with_inserted`](Self::with_inserted) for a fallible builder
    pub fn try_with_inserted<E>(&self, build: impl FnOnce(u32) -> Result<T, E>) -> Result<(Self, u32), E>
    where
        E: From<DomainError>,
    {
        let (id, ids) = self.ids.advance()?;
        let record = build(id)?;
        let mut records = self.records.clone();
        records.push(record);
        Ok((Self { records, ids }, id))
    }

    /// Replace the record with `id` by `update(&old)`. A replacement
    /// carrying a different id is rejected.
    pub fn with_replaced(&self, id: u32, update: impl FnOnce(&T) -> T) -> DomainResult<Self> {
        let pos = self.position(id)?;
        let mut records = self.records.clone();
        let replacement = update(&records[pos]);
        if replacement.id() != id {
            log::warn!("replacement for record {} carried id {}", id, replacement.id());
            return Err(DomainError::InvalidInput(format!(
                "replacement for record {} has id {}",
                id,
                replacement.id()
            )));
        }
        records[pos] = replacement;
        Ok(Self { records, ids: self.ids })
    }

    /// Collection without the record `id`
    pub fn without(&self, id: u32) -> DomainResult<Self> {
        self.position(id)?;
        let records = self.records.iter().filter(|r| r.id() != id).cloned().collect();
        Ok(Self { records, ids: self.ids })
    }

    fn position(&self, id: u32) -> DomainResult<usize> {
        self.records
            .iter()
            .position(|r| r.id() == id)
            .ok_or_else(|| DomainError::NotFound(format!("record {}", id)))
    }
}

impl<'a, T: Entity> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

/// Failure when submitting a form against a collection
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl SubmitError {
    /// Form field that failed, if the draft itself was rejected
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SubmitError::Form(e) => Some(e.field()),
            SubmitError::Domain(_) => None,
        }
    }
}

impl<T: Entity> Collection<T> {
    /// Insert a record built from a form draft
    pub fn with_draft<D>(&self, draft: &D, policy: FormPolicy) -> Result<(Self, u32), SubmitError>
    where
        D: Draft<Output = T>,
    {
        self.try_with_inserted(|id| draft.build(id, policy).map_err(SubmitError::from))
    }

    /// Overwrite record `id` with a form draft
    pub fn with_draft_applied<D>(&self, id: u32, draft: &D, policy: FormPolicy) -> Result<Self, SubmitError>
    where
        D: Draft<Output = T>,
    {
        let record = draft.build(id, policy)?;
        Ok(self.with_replaced(id, move |_| record)?)
    }
}

/// Deal collection
pub type DealBook = Collection<Deal>;

impl Collection<Deal> {
    /// Move a deal to another stage. Any stage may follow any other.
    pub fn with_deal_moved(&self, id: u32, stage: Stage) -> DomainResult<Self> {
        self.with_replaced(id, |deal| Deal { stage, ..deal.clone() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::DealDraft;

    fn book() -> DealBook {
        Collection::seeded(vec![
            Deal::new(1, "One", 100, Stage::Prospecting, 10),
            Deal::new(4, "Four", 400, Stage::Proposal, 40),
        ])
    }

    #[test]
    fn test_seeded_allocator_starts_after_max() {
        assert_eq!(book().next_id(), Some(5));
        assert_eq!(DealBook::default().next_id(), Some(1));
        assert_eq!(DealBook::seeded(Vec::new()).next_id(), Some(1));
    }

    #[test]
    fn test_insert_returns_new_collection() {
        let before = book();
        let (after, id) = before.with_inserted(|id| Deal::new(id, "Five", 500, Stage::Negotiation, 50)).unwrap();
        assert_eq!(id, 5);
        assert_eq!(before.len(), 2);
        assert_eq!(after.len(), 3);
        assert_eq!(after.as_slice().last().map(|d| d.id), Some(5));
    }

    #[test]
    fn test_deleted_max_id_is_not_reused() {
        let (with_five, five) = book().with_inserted(|id| Deal::new(id, "Five", 1, Stage::Proposal, 0)).unwrap();
        let without_five = with_five.without(five).unwrap();
        let (_, next) = without_five.with_inserted(|id| Deal::new(id, "Six", 1, Stage::Proposal, 0)).unwrap();
        assert_eq!(next, 6);
    }

    #[test]
    fn test_replace_and_remove_unknown_id() {
        let book = book();
        assert_eq!(
            book.with_replaced(99, |d| d.clone()),
            Err(DomainError::NotFound("record 99".to_string()))
        );
        assert!(book.without(99).is_err());
    }

    #[test]
    fn test_replace_rejects_id_change() {
        let result = book().with_replaced(1, |deal| Deal { id: 2, ..deal.clone() });
        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn test_move_deal_is_unconditional() {
        let book = book();
        let won = book.with_deal_moved(1, Stage::ClosedWon).unwrap();
        let back = won.with_deal_moved(1, Stage::Prospecting).unwrap();
        assert_eq!(won.get(1).map(|d| d.stage), Some(Stage::ClosedWon));
        assert_eq!(back.get(1).map(|d| d.stage), Some(Stage::Prospecting));
        // original untouched
        assert_eq!(book.get(1).map(|d| d.stage), Some(Stage::Prospecting));
    }

    #[test]
    fn test_draft_insert_and_edit() {
        let draft = DealDraft {
            title: "New".to_string(),
            value: "250".to_string(),
            probability: "oops".to_string(),
            ..DealDraft::default()
        };
        let (book, id) = book().with_draft(&draft, FormPolicy::Lenient).unwrap();
        assert_eq!(book.get(id).map(|d| (d.value, d.probability)), Some((250, 0)));

        // strict mode reports the form problem, collection unchanged
        let strict = book.with_draft(&draft, FormPolicy::Strict);
        assert!(matches!(strict, Err(SubmitError::Form(_))));
        assert!(strict.as_ref().err().and_then(SubmitError::field).is_some());

        let edit = DealDraft { value: "300".to_string(), ..draft };
        let edited = book.with_draft_applied(id, &edit, FormPolicy::Lenient).unwrap();
        assert_eq!(edited.get(id).map(|d| d.value), Some(300));
        assert_eq!(edited.len(), book.len());
    }

    #[test]
    fn test_failed_insert_does_not_consume_id() {
        let book = book();
        let result = book.try_with_inserted(|_| Err::<Deal, _>(DomainError::InvalidInput("nope".to_string())));
        assert!(result.is_err());
        assert_eq!(book.next_id(), Some(5));
    }

    #[test]
    fn test_last_id_is_issued_once() {
        let top = Collection::seeded(vec![Deal::new(u32::MAX, "Top", 1, Stage::Proposal, 0)]);
        assert_eq!(top.next_id(), None);
        let err = top.with_inserted(|id| Deal::new(id, "Again", 1, Stage::Proposal, 0)).unwrap_err();
        assert!(matches!(err, DomainError::Internal(_)));
        assert_eq!(top.len(), 1);

        let (near, last) = Collection::seeded(vec![Deal::new(u32::MAX - 1, "Near", 1, Stage::Proposal, 0)])
            .with_inserted(|id| Deal::new(id, "Last", 1, Stage::Proposal, 0))
            .unwrap();
        assert_eq!(last, u32::MAX);
        assert!(near.with_inserted(|id| Deal::new(id, "Over", 1, Stage::Proposal, 0)).is_err());

        // a form insert reports exhaustion as a domain failure
        let draft = DealDraft { title: "Form".to_string(), ..DealDraft::default() };
        let err = near.with_draft(&draft, FormPolicy::Lenient).unwrap_err();
        assert!(matches!(err, SubmitError::Domain(DomainError::Internal(_))));
    }

    #[test]
    fn test_iteration_order() {
        let ids: Vec<u32> = (&book()).into_iter().map(|d| d.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }
}
