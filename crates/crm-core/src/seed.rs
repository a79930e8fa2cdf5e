//! Demo Data
//!
//! The records the dashboard starts with when demo data is enabled.

use crate::domain::{Contact, ContactStatus, Deal, Priority, Stage, Task, TaskKind, TaskStatus};

fn deal(
    id: u32,
    title: &str,
    value: u64,
    stage: Stage,
    (contact, company): (&str, &str),
    close_date: &str,
    probability: u32,
    description: &str,
) -> Deal {
    Deal {
        contact: contact.to_string(),
        company: company.to_string(),
        close_date: close_date.to_string(),
        description: description.to_string(),
        ..Deal::new(id, title, value, stage, probability)
    }
}

pub fn deals() -> Vec<Deal> {
    vec![
        deal(
            1,
            "Acme Corp - CRM Implementation",
            50_000,
            Stage::Prospecting,
            ("John Smith", "Acme Corporation"),
            "2024-03-15",
            25,
            "Complete CRM system implementation for enterprise client",
        ),
        deal(
            2,
            "Tech Solutions - Software License",
            75_000,
            Stage::Qualification,
            ("Sarah Johnson", "Tech Solutions Ltd"),
            "2024-02-28",
            50,
            "Annual software licensing deal",
        ),
        deal(
            3,
            "Global Industries - Consulting",
            120_000,
            Stage::Proposal,
            ("Mike Wilson", "Global Industries"),
            "2024-04-10",
            75,
            "6-month consulting engagement",
        ),
        deal(
            4,
            "StartupXYZ - Development",
            35_000,
            Stage::Negotiation,
            ("Emma Davis", "StartupXYZ"),
            "2024-02-15",
            90,
            "Custom development project",
        ),
        deal(
            5,
            "Enterprise Solutions - Integration",
            90_000,
            Stage::ClosedWon,
            ("David Brown", "Enterprise Solutions"),
            "2024-01-30",
            100,
            "System integration project",
        ),
    ]
}

fn contact(
    id: u32,
    name: &str,
    email: &str,
    phone: &str,
    (company, position): (&str, &str),
    status: ContactStatus,
    last_contact: &str,
    deal_value: u64,
) -> Contact {
    Contact {
        phone: phone.to_string(),
        position: position.to_string(),
        status,
        last_contact: last_contact.to_string(),
        deal_value,
        ..Contact::new(id, name, email, company)
    }
}

pub fn contacts() -> Vec<Contact> {
    vec![
        contact(
            1,
            "John Smith",
            "john.smith@acmecorp.com",
            "+1 (555) 123-4567",
            ("Acme Corporation", "CEO"),
            ContactStatus::Active,
            "2024-01-15",
            50_000,
        ),
        contact(
            2,
            "Sarah Johnson",
            "s.johnson@techsolutions.com",
            "+1 (555) 234-5678",
            ("Tech Solutions Ltd", "CTO"),
            ContactStatus::Prospecting,
            "2024-01-14",
            75_000,
        ),
        contact(
            3,
            "Mike Wilson",
            "mike.w@globalindustries.com",
            "+1 (555) 345-6789",
            ("Global Industries", "VP Sales"),
            ContactStatus::Qualified,
            "2024-01-13",
            120_000,
        ),
        contact(
            4,
            "Emma Davis",
            "emma@startupxyz.com",
            "+1 (555) 456-7890",
            ("StartupXYZ", "Founder"),
            ContactStatus::Negotiation,
            "2024-01-12",
            35_000,
        ),
        contact(
            5,
            "David Brown",
            "d.brown@enterprise.com",
            "+1 (555) 567-8901",
            ("Enterprise Solutions", "Director"),
            ContactStatus::Closed,
            "2024-01-10",
            90_000,
        ),
    ]
}

fn task(
    id: u32,
    title: &str,
    description: &str,
    priority: Priority,
    status: TaskStatus,
    due_date: &str,
    contact: &str,
    kind: TaskKind,
) -> Task {
    Task {
        description: description.to_string(),
        status,
        contact: contact.to_string(),
        kind,
        completed: status == TaskStatus::Completed,
        ..Task::new(id, title, priority, due_date)
    }
}

pub fn tasks() -> Vec<Task> {
    vec![
        task(
            1,
            "Follow up with John Smith",
            "Schedule demo call for next week",
            Priority::High,
            TaskStatus::Pending,
            "2024-01-16",
            "John Smith",
            TaskKind::Call,
        ),
        task(
            2,
            "Prepare proposal for Acme Corp",
            "Create detailed proposal with pricing",
            Priority::High,
            TaskStatus::InProgress,
            "2024-01-17",
            "John Smith",
            TaskKind::Task,
        ),
        task(
            3,
            "Send contract to Tech Solutions",
            "Final contract review and send",
            Priority::Medium,
            TaskStatus::Pending,
            "2024-01-18",
            "Sarah Johnson",
            TaskKind::Email,
        ),
        task(
            4,
            "Demo call with Global Industries",
            "Product demonstration call",
            Priority::High,
            TaskStatus::Scheduled,
            "2024-01-19",
            "Mike Wilson",
            TaskKind::Meeting,
        ),
        task(
            5,
            "Check in with StartupXYZ",
            "Regular check-in call",
            Priority::Low,
            TaskStatus::Completed,
            "2024-01-14",
            "Emma Davis",
            TaskKind::Call,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let ids: HashSet<u32> = deals().iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<u32> = contacts().iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), 5);
        let ids: HashSet<u32> = tasks().iter().map(|t| t.id).collect();
        assert_eq!(ids.len(), 5);
    }

    #[test]
    fn test_seed_completion_matches_status() {
        for task in tasks() {
            assert_eq!(task.completed, task.status == TaskStatus::Completed);
        }
    }
}
