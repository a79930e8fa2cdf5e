//! Collection Integration Tests
//!
//! Drives the deal, contact and task lists the way the dashboard does:
//! seed, add from a form, edit, move, delete.

use chrono::NaiveDate;
use crm_core::*;

#[test]
fn test_deal_board_session() {
    let book = DealBook::seeded(seed::deals());
    assert_eq!(total_pipeline_value(book.as_slice()), 370_000);
    assert_eq!(active_deal_count(book.as_slice()), 4);

    let draft = DealDraft {
        title: "Northwind - Support".to_string(),
        value: "20000".to_string(),
        stage: "qualification".to_string(),
        contact: "Ann Lee".to_string(),
        company: "Northwind".to_string(),
        close_date: "2024-05-01".to_string(),
        probability: "40".to_string(),
        description: String::new(),
    };
    let (book, id) = book.with_draft(&draft, FormPolicy::Strict).unwrap();
    assert_eq!(id, 6);
    assert_eq!(stage_total(book.as_slice(), Stage::Qualification), 95_000);

    let book = book.with_deal_moved(id, Stage::ClosedLost).unwrap();
    assert_eq!(active_deal_count(book.as_slice()), 4);
    assert_eq!(pipeline_summary(book.as_slice()).win_rate, Some(50.0));

    let book = book.without(5).unwrap();
    let book = book.without(id).unwrap();
    assert_eq!(book.len(), 4);

    // ids keep growing after deletions
    let (book, next) = book.with_inserted(|id| Deal::new(id, "Late", 1, Stage::Proposal, 10)).unwrap();
    assert_eq!(next, 7);
    assert!(book.get(5).is_none());
}

#[test]
fn test_strict_failure_leaves_book_untouched() {
    let book = DealBook::seeded(seed::deals());
    let draft = DealDraft {
        title: "Bad".to_string(),
        value: "ten".to_string(),
        ..DealDraft::default()
    };
    let err = book.with_draft(&draft, FormPolicy::Strict).unwrap_err();
    assert!(matches!(err, SubmitError::Form(FormError::NotANumber { field: "value", .. })));
    assert_eq!(book.len(), 5);
    assert_eq!(book.next_id(), Some(6));

    // the lenient policy accepts the same input with value 0
    let (lenient, id) = book.with_draft(&draft, FormPolicy::Lenient).unwrap();
    assert_eq!(lenient.get(id).map(|d| d.value), Some(0));
}

#[test]
fn test_edit_missing_deal() {
    let book = DealBook::seeded(seed::deals());
    let err = book
        .with_draft_applied(42, &DealDraft::default(), FormPolicy::Lenient)
        .unwrap_err();
    assert!(matches!(err, SubmitError::Domain(DomainError::NotFound(_))));
    assert!(book.with_deal_moved(42, Stage::Proposal).is_err());
}

#[test]
fn test_contact_session() {
    let today = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
    let contacts = Collection::seeded(seed::contacts());

    let mut draft = ContactDraft::blank(today);
    draft.name = "Grace Hopper".to_string();
    draft.email = "grace@navy.mil".to_string();
    draft.company = "US Navy".to_string();
    draft.deal_value = "abc".to_string();

    let (contacts, id) = contacts.with_draft(&draft, FormPolicy::Lenient).unwrap();
    let added = contacts.get(id).unwrap();
    assert_eq!(added.last_contact, "2024-02-01");
    assert_eq!(added.deal_value, 0);

    let hits = search_contacts(contacts.as_slice(), "navy");
    assert_eq!(hits.len(), 1);

    // editing keeps last contact date
    let mut edit = ContactDraft::from_contact(added);
    edit.position = "Rear Admiral".to_string();
    let contacts = contacts.with_draft_applied(id, &edit, FormPolicy::Strict).unwrap();
    assert_eq!(contacts.get(id).map(|c| c.last_contact.as_str()), Some("2024-02-01"));
}

#[test]
fn test_task_session() {
    let today = NaiveDate::from_ymd_opt(2024, 1, 18).unwrap();
    let tasks = Collection::seeded(seed::tasks());

    let tasks = tasks.with_replaced(1, Task::toggled).unwrap();
    let stats = task_stats(tasks.as_slice(), today);
    assert_eq!(stats.completed, 2);
    assert_eq!(stats.completed + stats.pending, stats.total);
    assert_eq!(stats.overdue, 1);

    let draft = TaskDraft {
        title: "Call back".to_string(),
        due_date: "2024-01-20".to_string(),
        ..TaskDraft::default()
    };
    let (tasks, id) = tasks.with_draft(&draft, FormPolicy::Strict).unwrap();
    let created = tasks.get(id).unwrap();
    assert_eq!(created.assignee, "You");
    assert!(!created.completed);

    let completed = filter_tasks(tasks.as_slice(), Some(TaskStatus::Completed), None);
    assert_eq!(completed.len(), 2);
}
