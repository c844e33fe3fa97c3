use crate::domain::{
    absolute_index, total_pages, visible_slice, PanelFsm, PanelSide, Pager, TaskStore, UiMode,
};
use crate::ticker::TRANSITION_TICKS;
use anyhow::Result;

/// A destructive operation awaiting user confirmation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteTask { side: PanelSide, index: usize },
    DeleteAll { side: PanelSide },
}

/// Confirm modal state
#[derive(Debug, Clone)]
pub struct ConfirmState {
    pub action: ConfirmAction,
    pub message: String,
}

/// Main application state
pub struct AppState {
    pub store: TaskStore,
    pub panel: PanelFsm,
    pub active_pager: Pager,
    pub completed_pager: Pager,
    /// Row offset within the visible page slice of the shown panel
    pub selected_row: usize,
    pub ui_mode: UiMode,
    /// Buffer for the add-task form
    pub input_buffer: String,
    pub confirm: Option<ConfirmState>,
    /// Slide animation countdown; 0 when settled
    pub transition_ticks_left: u8,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(use_emoji: bool) -> Self {
        Self {
            store: TaskStore::new(),
            panel: PanelFsm::new(),
            active_pager: Pager::new(),
            completed_pager: Pager::new(),
            selected_row: 0,
            ui_mode: UiMode::Normal,
            input_buffer: String::new(),
            confirm: None,
            transition_ticks_left: 0,
            use_emoji,
        }
    }

    /// The panel currently rendered (target side while sliding)
    pub fn visible_side(&self) -> PanelSide {
        self.panel.visible_side()
    }

    fn list_len(&self, side: PanelSide) -> usize {
        match side {
            PanelSide::Active => self.store.active().len(),
            PanelSide::Completed => self.store.completed().len(),
        }
    }

    pub fn pager(&self, side: PanelSide) -> &Pager {
        match side {
            PanelSide::Active => &self.active_pager,
            PanelSide::Completed => &self.completed_pager,
        }
    }

    fn pager_mut(&mut self, side: PanelSide) -> &mut Pager {
        match side {
            PanelSide::Active => &mut self.active_pager,
            PanelSide::Completed => &mut self.completed_pager,
        }
    }

    /// Total pages for one side's list
    pub fn total_pages_for(&self, side: PanelSide) -> usize {
        total_pages(self.list_len(side))
    }

    /// Number of rows on the currently visible page
    pub fn visible_len(&self) -> usize {
        let side = self.visible_side();
        let page = self.pager(side).current_page();
        match side {
            PanelSide::Active => visible_slice(self.store.active(), page).len(),
            PanelSide::Completed => visible_slice(self.store.completed(), page).len(),
        }
    }

    /// Absolute index of the selected row, None when the page is empty
    pub fn selected_absolute(&self) -> Option<usize> {
        if self.selected_row >= self.visible_len() {
            return None;
        }
        let page = self.pager(self.visible_side()).current_page();
        Some(absolute_index(page, self.selected_row))
    }

    /// Keep the row selection inside the visible slice after mutations
    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            self.selected_row = 0;
        } else if self.selected_row >= len {
            self.selected_row = len - 1;
        }
    }

    // ---- selection and paging ----

    pub fn move_selection_up(&mut self) {
        if self.selected_row > 0 {
            self.selected_row -= 1;
        }
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_row + 1 < self.visible_len() {
            self.selected_row += 1;
        }
    }

    /// Jump to a page on the shown panel (clamped). Returns the new page.
    pub fn paginate(&mut self, target: usize) -> usize {
        let side = self.visible_side();
        let total = self.total_pages_for(side);
        let page = self.pager_mut(side).paginate(target, total);
        self.clamp_selection();
        page
    }

    pub fn page_prev(&mut self) {
        let side = self.visible_side();
        let total = self.total_pages_for(side);
        self.pager_mut(side).prev(total);
        self.clamp_selection();
    }

    pub fn page_next(&mut self) {
        let side = self.visible_side();
        let total = self.total_pages_for(side);
        self.pager_mut(side).next(total);
        self.clamp_selection();
    }

    // ---- panel switching ----

    /// Switch to the other panel, starting the slide animation
    pub fn switch_panel(&mut self) {
        let target = self.visible_side().other();
        if self.panel.select(target) {
            self.transition_ticks_left = TRANSITION_TICKS;
            self.selected_row = 0;
        }
    }

    /// Advance the slide animation one tick, emitting the completion signal
    /// when the countdown runs out
    pub fn tick(&mut self) {
        if self.panel.is_transitioning() {
            self.transition_ticks_left = self.transition_ticks_left.saturating_sub(1);
            if self.transition_ticks_left == 0 {
                self.panel.animation_complete();
            }
        }
    }

    // ---- add-task form ----

    pub fn start_add_task(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    pub fn input_add_char(&mut self, c: char) {
        self.input_buffer.push(c);
    }

    pub fn input_backspace(&mut self) {
        self.input_buffer.pop();
    }

    /// Submit the form. Empty names are silently dropped by the store; the
    /// input buffer is cleared either way.
    pub fn submit_input(&mut self) {
        self.store.add_task(&self.input_buffer);
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    pub fn cancel_input(&mut self) {
        self.input_buffer.clear();
        self.ui_mode = UiMode::Normal;
    }

    // ---- store operations on the selection ----

    /// Toggle the selected task across lists (complete it, or move it back)
    pub fn toggle_selected(&mut self) -> Result<()> {
        let Some(index) = self.selected_absolute() else {
            return Ok(());
        };

        match self.visible_side() {
            PanelSide::Active => self.store.toggle_active(index)?,
            PanelSide::Completed => self.store.toggle_completed(index)?,
        }
        self.clamp_selection();
        Ok(())
    }

    /// Open the confirm modal for deleting the selected task
    pub fn request_delete_selected(&mut self) {
        let Some(index) = self.selected_absolute() else {
            return;
        };
        let side = self.visible_side();

        self.confirm = Some(ConfirmState {
            action: ConfirmAction::DeleteTask { side, index },
            message: "Are you sure you want to delete this task?".to_string(),
        });
        self.ui_mode = UiMode::ConfirmDelete;
    }

    /// Open the confirm modal for clearing the shown list
    pub fn request_delete_all(&mut self) {
        let side = self.visible_side();
        if self.list_len(side) == 0 {
            return;
        }

        let message = match side {
            PanelSide::Active => "Are you sure you want to delete all active tasks?",
            PanelSide::Completed => "Are you sure you want to delete all completed tasks?",
        };
        self.confirm = Some(ConfirmState {
            action: ConfirmAction::DeleteAll { side },
            message: message.to_string(),
        });
        self.ui_mode = UiMode::ConfirmDelete;
    }

    /// Apply the pending destructive action with confirmation granted
    pub fn confirm_accept(&mut self) -> Result<()> {
        if let Some(confirm) = self.confirm.take() {
            match confirm.action {
                ConfirmAction::DeleteTask { side, index } => match side {
                    PanelSide::Active => self.store.delete_active(index, true)?,
                    PanelSide::Completed => self.store.delete_completed(index, true)?,
                },
                ConfirmAction::DeleteAll { side } => match side {
                    PanelSide::Active => self.store.delete_all_active(true),
                    PanelSide::Completed => self.store.delete_all_completed(true),
                },
            }
            self.ui_mode = UiMode::Normal;
            self.clamp_selection();
        }
        Ok(())
    }

    /// Decline the pending destructive action; nothing is mutated
    pub fn confirm_decline(&mut self) -> Result<()> {
        if let Some(confirm) = self.confirm.take() {
            match confirm.action {
                ConfirmAction::DeleteTask { side, index } => match side {
                    PanelSide::Active => self.store.delete_active(index, false)?,
                    PanelSide::Completed => self.store.delete_completed(index, false)?,
                },
                ConfirmAction::DeleteAll { side } => match side {
                    PanelSide::Active => self.store.delete_all_active(false),
                    PanelSide::Completed => self.store.delete_all_completed(false),
                },
            }
            self.ui_mode = UiMode::Normal;
        }
        Ok(())
    }

    /// Commit the flagged completed tasks back to active
    pub fn commit_pending_return(&mut self) {
        self.store.commit_pending_return();
        self.clamp_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn app_with_active(count: usize) -> AppState {
        let mut app = AppState::new(true);
        // add_task prepends; add in reverse so "task 1" ends up on top
        for i in (1..=count).rev() {
            app.store.add_task(&format!("task {}", i));
        }
        app
    }

    #[test]
    fn test_new_app_defaults() {
        let app = AppState::new(true);
        assert_eq!(app.visible_side(), PanelSide::Active);
        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.selected_row, 0);
        assert!(app.confirm.is_none());
        assert_eq!(app.total_pages_for(PanelSide::Active), 1);
    }

    #[test]
    fn test_add_task_via_form() {
        let mut app = AppState::new(true);

        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);
        for c in "Buy milk".chars() {
            app.input_add_char(c);
        }
        app.submit_input();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.store.active()[0].name, "Buy milk");
    }

    #[test]
    fn test_empty_add_is_ignored() {
        let mut app = AppState::new(true);
        app.store.add_task("Buy milk");

        app.start_add_task();
        app.submit_input();

        assert_eq!(app.store.active().len(), 1);
        assert_eq!(app.store.active()[0].name, "Buy milk");
    }

    #[test]
    fn test_selection_maps_to_absolute_index() {
        let mut app = app_with_active(13);

        app.paginate(2);
        app.selected_row = 1;
        assert_eq!(app.selected_absolute(), Some(7));

        app.paginate(3);
        assert_eq!(app.visible_len(), 1);
        assert_eq!(app.selected_absolute(), Some(6 * 2));
    }

    #[test]
    fn test_paginate_clamps_on_shown_panel() {
        let mut app = app_with_active(13);

        assert_eq!(app.paginate(99), 3);
        assert_eq!(app.paginate(0), 1);
    }

    #[test]
    fn test_selection_clamped_when_page_shrinks() {
        let mut app = app_with_active(13);
        app.paginate(3);
        app.selected_row = 0;

        // Delete the only task on page 3; page goes empty, selection resets
        app.request_delete_selected();
        app.confirm_accept().unwrap();

        assert_eq!(app.store.active().len(), 12);
        assert_eq!(app.visible_len(), 0);
        assert_eq!(app.selected_row, 0);
        assert_eq!(app.selected_absolute(), None);
        // Page is not auto-adjusted; it degrades to an empty page
        assert_eq!(app.pager(PanelSide::Active).current_page(), 3);
    }

    #[test]
    fn test_toggle_selected_moves_across_lists() {
        let mut app = app_with_active(3);
        app.selected_row = 1; // "task 2"

        app.toggle_selected().unwrap();

        let active: Vec<&str> = app.store.active().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(active, vec!["task 1", "task 3"]);
        assert_eq!(app.store.completed()[0].name, "task 2");
    }

    #[test]
    fn test_toggle_on_empty_page_is_noop() {
        let mut app = AppState::new(true);
        app.toggle_selected().unwrap();
        assert!(app.store.active().is_empty());
    }

    #[test]
    fn test_confirm_decline_leaves_state_unchanged() {
        let mut app = app_with_active(2);

        app.request_delete_selected();
        assert_eq!(app.ui_mode, UiMode::ConfirmDelete);
        app.confirm_decline().unwrap();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert_eq!(app.store.active().len(), 2);
        assert!(app.confirm.is_none());
    }

    #[test]
    fn test_confirm_accept_delete_all() {
        let mut app = app_with_active(8);

        app.request_delete_all();
        app.confirm_accept().unwrap();

        assert!(app.store.active().is_empty());
        assert_eq!(app.visible_len(), 0);
    }

    #[test]
    fn test_request_delete_all_on_empty_list_is_noop() {
        let mut app = AppState::new(true);
        app.request_delete_all();
        assert!(app.confirm.is_none());
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_switch_panel_runs_transition() {
        let mut app = app_with_active(1);

        app.switch_panel();
        assert!(app.panel.is_transitioning());
        assert_eq!(app.visible_side(), PanelSide::Completed);
        assert_eq!(app.transition_ticks_left, TRANSITION_TICKS);

        // Switching again mid-slide is ignored
        app.switch_panel();
        assert_eq!(app.visible_side(), PanelSide::Completed);

        for _ in 0..TRANSITION_TICKS {
            app.tick();
        }
        assert!(!app.panel.is_transitioning());
        assert_eq!(app.visible_side(), PanelSide::Completed);
    }

    #[test]
    fn test_pagers_are_independent_per_panel() {
        let mut app = app_with_active(13);
        for _ in 0..7 {
            app.toggle_selected().unwrap(); // complete 7 tasks -> 2 pages
        }

        app.paginate(3); // active still has 6 left -> clamped to 1
        assert_eq!(app.pager(PanelSide::Active).current_page(), 1);

        app.switch_panel();
        for _ in 0..TRANSITION_TICKS {
            app.tick();
        }
        app.paginate(2);
        assert_eq!(app.pager(PanelSide::Completed).current_page(), 2);
        assert_eq!(app.pager(PanelSide::Active).current_page(), 1);
    }

    #[test]
    fn test_commit_pending_return_via_app() {
        let mut app = app_with_active(1);
        app.toggle_selected().unwrap(); // complete it
        app.switch_panel();
        for _ in 0..TRANSITION_TICKS {
            app.tick();
        }
        app.toggle_selected().unwrap(); // flag and move back

        assert_eq!(app.store.pending_return_count(), 1);
        app.commit_pending_return();
        assert_eq!(app.store.pending_return_count(), 0);
        assert_eq!(app.store.active().len(), 1);
    }
}
