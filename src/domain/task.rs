use super::enums::TaskStatus;
use chrono::{DateTime, Local};
use uuid::Uuid;

/// A single tracked task
#[derive(Debug, Clone)]
pub struct Task {
    /// Unique ID for internal references (pending-return bookkeeping)
    pub id: Uuid,
    /// Display name, trimmed at creation
    pub name: String,
    /// Which list conceptually owns this task
    pub status: TaskStatus,
    /// When the task was created
    pub created_at: DateTime<Local>,
    /// When the task was completed (None while active)
    pub completed_at: Option<DateTime<Local>>,
}

impl Task {
    /// Create a new active task. Returns None for empty/whitespace-only names.
    pub fn new(name: &str) -> Option<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return None;
        }

        Some(Self {
            id: Uuid::new_v4(),
            name: trimmed.to_string(),
            status: TaskStatus::Active,
            created_at: Local::now(),
            completed_at: None,
        })
    }

    /// Mark as completed, stamping the completion time
    pub fn mark_completed(&mut self) {
        self.status = TaskStatus::Completed;
        self.completed_at = Some(Local::now());
    }

    /// Mark as active again (moved back from the completed list)
    pub fn mark_active(&mut self) {
        self.status = TaskStatus::Active;
        self.completed_at = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new_trims_name() {
        let task = Task::new("  Buy milk  ").unwrap();
        assert_eq!(task.name, "Buy milk");
        assert_eq!(task.status, TaskStatus::Active);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_task_new_rejects_empty() {
        assert!(Task::new("").is_none());
        assert!(Task::new("   ").is_none());
        assert!(Task::new("\t\n").is_none());
    }

    #[test]
    fn test_task_mark_completed_and_active() {
        let mut task = Task::new("Write report").unwrap();

        task.mark_completed();
        assert_eq!(task.status, TaskStatus::Completed);
        assert!(task.completed_at.is_some());

        task.mark_active();
        assert_eq!(task.status, TaskStatus::Active);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_task_ids_are_unique() {
        let a = Task::new("A").unwrap();
        let b = Task::new("A").unwrap();
        assert_ne!(a.id, b.id);
    }
}
