//! Contact Search and Task Views
//!
//! Filtering and counting over the contact and task lists.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::{Contact, ContactStatus, Priority, Task, TaskStatus};
use crate::forms::DATE_FORMAT;

/// Contacts whose name, email or company contains `term`, ignoring case.
/// A blank term matches everything.
pub fn search_contacts<'a>(contacts: &'a [Contact], term: &str) -> Vec<&'a Contact> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return contacts.iter().collect();
    }
    contacts.iter().filter(|c| c.matches(&needle)).collect()
}

/// Counts shown above the contact table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
    pub total: usize,
    /// Contacts whose status is not closed
    pub active: usize,
    /// Sum of every contact's deal value
    pub pipeline_value: u64,
}

pub fn contact_stats(contacts: &[Contact]) -> ContactStats {
    ContactStats {
        total: contacts.len(),
        active: contacts.iter().filter(|c| c.status != ContactStatus::Closed).count(),
        pipeline_value: contacts.iter().fold(0, |acc, c| acc.saturating_add(c.deal_value)),
    }
}

/// Tasks matching both filters. `None` means "all".
pub fn filter_tasks(tasks: &[Task], status: Option<TaskStatus>, priority: Option<Priority>) -> Vec<&Task> {
    tasks
        .iter()
        .filter(|t| status.map_or(true, |s| t.status == s))
        .filter(|t| priority.map_or(true, |p| t.priority == p))
        .collect()
}

/// Counts shown above the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub overdue: usize,
}

/// Parse a due date. Anything other than `YYYY-MM-DD` is `None`.
pub fn parse_due_date(due: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(due.trim(), DATE_FORMAT).ok()
}

/// Open and due strictly before `today`. Unparseable dates are never overdue.
pub fn is_overdue(task: &Task, today: NaiveDate) -> bool {
    !task.completed && parse_due_date(&task.due_date).is_some_and(|due| due < today)
}

pub fn task_stats(tasks: &[Task], today: NaiveDate) -> TaskStats {
    let completed = tasks.iter().filter(|t| t.completed).count();
    TaskStats {
        total: tasks.len(),
        completed,
        pending: tasks.len() - completed,
        overdue: tasks.iter().filter(|t| is_overdue(t, today)).count(),
    }
}

/// Open tasks ordered by due date, earliest first; undated tasks last
pub fn upcoming_tasks(tasks: &[Task], limit: usize) -> Vec<&Task> {
    let mut open: Vec<&Task> = tasks.iter().filter(|t| !t.completed).collect();
    // stable sort keeps insertion order among equal dates
    open.sort_by_key(|t| (parse_due_date(&t.due_date).is_none(), parse_due_date(&t.due_date)));
    open.truncate(limit);
    open
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_contact_stats() {
        let mut contacts = seed::contacts();
        let seeded = contact_stats(&contacts);
        assert_eq!(seeded, ContactStats { total: 5, active: 4, pipeline_value: 370_000 });

        contacts[0].status = ContactStatus::Closed;
        let closed = contact_stats(&contacts);
        assert_eq!(closed.total, 5);
        assert_eq!(closed.active, 3);
        assert_eq!(closed.pipeline_value, seeded.pipeline_value);

        assert_eq!(contact_stats(&[]), ContactStats::default());
    }

    #[test]
    fn test_contact_stats_saturates() {
        let mut a = Contact::new(1, "A", "a@x.io", "X");
        a.deal_value = u64::MAX;
        let b = Contact { id: 2, ..a.clone() };
        assert_eq!(contact_stats(&[a, b]).pipeline_value, u64::MAX);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let contacts = seed::contacts();
        let hits: Vec<u32> = search_contacts(&contacts, "ACME").iter().map(|c| c.id).collect();
        assert_eq!(hits, vec![1]);
        let hits: Vec<u32> = search_contacts(&contacts, "sarah").iter().map(|c| c.id).collect();
        assert_eq!(hits, vec![2]);
    }

    #[test]
    fn test_blank_search_returns_all() {
        let contacts = seed::contacts();
        assert_eq!(search_contacts(&contacts, "").len(), contacts.len());
        assert_eq!(search_contacts(&contacts, "   ").len(), contacts.len());
        assert!(search_contacts(&contacts, "zzz-no-match").is_empty());
    }

    #[test]
    fn test_filter_tasks() {
        let tasks = seed::tasks();
        assert_eq!(filter_tasks(&tasks, None, None).len(), tasks.len());
        let high: Vec<u32> = filter_tasks(&tasks, None, Some(Priority::High)).iter().map(|t| t.id).collect();
        assert_eq!(high, vec![1, 2, 4]);
        let pending_high: Vec<u32> = filter_tasks(&tasks, Some(TaskStatus::Pending), Some(Priority::High))
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(pending_high, vec![1]);
    }

    #[test]
    fn test_task_stats() {
        let tasks = seed::tasks();
        let stats = task_stats(&tasks, day(2024, 1, 18));
        assert_eq!(stats.total, 5);
        assert_eq!(stats.completed, 1);
        assert_eq!(stats.pending, 4);
        // tasks 1 (01-16) and 2 (01-17) are open and past due; task 5 is done
        assert_eq!(stats.overdue, 2);
    }

    #[test]
    fn test_unparseable_due_date_never_overdue() {
        let task = Task::new(1, "Someday", Priority::Low, "soon");
        assert!(!is_overdue(&task, day(2100, 1, 1)));
        let task = Task::new(2, "Today", Priority::Low, "2024-01-18");
        assert!(!is_overdue(&task, day(2024, 1, 18)));
    }

    #[test]
    fn test_upcoming_tasks_sorted_and_limited() {
        let mut tasks = seed::tasks();
        tasks.push(Task::new(6, "Undated", Priority::Low, ""));
        tasks.push(Task::new(7, "Earliest", Priority::Low, "2024-01-01"));
        let ids: Vec<u32> = upcoming_tasks(&tasks, 3).iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![7, 1, 2]);
        let all: Vec<u32> = upcoming_tasks(&tasks, 10).iter().map(|t| t.id).collect();
        assert_eq!(all.last(), Some(&6));
        assert!(!all.contains(&5));
    }
}
