use super::task::Task;
use thiserror::Error;
use uuid::Uuid;

/// Errors from store mutations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// An index did not refer to a task in the target list. Indices are
    /// absolute positions derived from the current render, so hitting this
    /// means a caller bug; the store rejects the call without mutating.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Single source of truth for task membership and ordering.
///
/// Holds the active list (newest first), the completed list (insertion
/// order), and the ids of completed-side tasks the user has flagged to move
/// back to active. Every mutation is an atomic replacement of its target
/// list; no operation can observe another's intermediate state.
#[derive(Debug, Default)]
pub struct TaskStore {
    active: Vec<Task>,
    completed: Vec<Task>,
    pending_return: Vec<Uuid>,
}

impl TaskStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> &[Task] {
        &self.active
    }

    pub fn completed(&self) -> &[Task] {
        &self.completed
    }

    /// Number of tasks flagged to move back to active
    pub fn pending_return_count(&self) -> usize {
        self.pending_return.len()
    }

    /// Add a new task to the top of the active list.
    /// Empty or whitespace-only names are silently ignored (returns false).
    pub fn add_task(&mut self, name: &str) -> bool {
        match Task::new(name) {
            Some(task) => {
                self.active.insert(0, task);
                true
            }
            None => false,
        }
    }

    /// Move the active task at `index` to the tail of the completed list.
    /// `index` is absolute (page offset already applied by the caller).
    pub fn toggle_active(&mut self, index: usize) -> Result<(), StoreError> {
        Self::check_index(index, self.active.len())?;

        let mut task = self.active.remove(index);
        task.mark_completed();
        self.completed.push(task);
        Ok(())
    }

    /// Delete the active task at `index`. A declined confirmation makes the
    /// whole call a no-op.
    pub fn delete_active(&mut self, index: usize, confirmed: bool) -> Result<(), StoreError> {
        if !confirmed {
            return Ok(());
        }
        Self::check_index(index, self.active.len())?;

        let task = self.active.remove(index);
        self.unflag(task.id);
        Ok(())
    }

    /// Delete every active task. Idempotent; no-op when not confirmed.
    pub fn delete_all_active(&mut self, confirmed: bool) {
        if confirmed {
            for task in &self.active {
                let id = task.id;
                self.pending_return.retain(|p| *p != id);
            }
            self.active.clear();
        }
    }

    /// Move the completed task at `index` back to the tail of the active
    /// list, recording its id in the pending-return list. The task moves
    /// immediately; the pending list only drives the "move N back" count
    /// until the next commit.
    pub fn toggle_completed(&mut self, index: usize) -> Result<(), StoreError> {
        Self::check_index(index, self.completed.len())?;

        let mut task = self.completed.remove(index);
        if !self.pending_return.contains(&task.id) {
            self.pending_return.push(task.id);
        }
        task.mark_active();
        self.active.push(task);
        Ok(())
    }

    /// Delete the completed task at `index`. No-op when not confirmed.
    pub fn delete_completed(&mut self, index: usize, confirmed: bool) -> Result<(), StoreError> {
        if !confirmed {
            return Ok(());
        }
        Self::check_index(index, self.completed.len())?;

        let task = self.completed.remove(index);
        self.unflag(task.id);
        Ok(())
    }

    /// Delete every completed task. Idempotent; no-op when not confirmed.
    pub fn delete_all_completed(&mut self, confirmed: bool) {
        if confirmed {
            for task in &self.completed {
                let id = task.id;
                self.pending_return.retain(|p| *p != id);
            }
            self.completed.clear();
        }
    }

    /// Commit the pending-return list: any flagged task still sitting in the
    /// completed list moves to the active tail, then the list is cleared.
    /// Tasks already moved by `toggle_completed` are left where they are, so
    /// in the normal flow this only clears the counter.
    pub fn commit_pending_return(&mut self) {
        let flagged: Vec<Uuid> = self.pending_return.drain(..).collect();

        for id in flagged {
            if let Some(pos) = self.completed.iter().position(|t| t.id == id) {
                let mut task = self.completed.remove(pos);
                task.mark_active();
                self.active.push(task);
            }
        }
    }

    fn check_index(index: usize, len: usize) -> Result<(), StoreError> {
        if index >= len {
            return Err(StoreError::IndexOutOfRange { index, len });
        }
        Ok(())
    }

    fn unflag(&mut self, id: Uuid) {
        self.pending_return.retain(|p| *p != id);
    }
}
