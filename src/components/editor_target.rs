//! Edit Target Type
//!
//! What an open form modal is editing.

/// Either a record about to be created or an existing one by id
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditTarget {
    New,
    Existing(u32),
}

impl EditTarget {
    /// Id being edited, `None` for a new record
    pub fn existing_id(&self) -> Option<u32> {
        match self {
            EditTarget::New => None,
            EditTarget::Existing(id) => Some(*id),
        }
    }

    pub fn is_new(&self) -> bool {
        matches!(self, EditTarget::New)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_existing_id() {
        assert_eq!(EditTarget::New.existing_id(), None);
        assert_eq!(EditTarget::Existing(3).existing_id(), Some(3));
        assert!(EditTarget::New.is_new());
    }
}
