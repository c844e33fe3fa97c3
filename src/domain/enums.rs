/// Which list conceptually owns a task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Active,
    Completed,
}

/// The two list panels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelSide {
    Active,
    Completed,
}

impl PanelSide {
    /// Get the opposite panel
    pub fn other(&self) -> Self {
        match self {
            PanelSide::Active => PanelSide::Completed,
            PanelSide::Completed => PanelSide::Active,
        }
    }

    /// Get the display name for this panel
    pub fn name(&self) -> &'static str {
        match self {
            PanelSide::Active => "Active Tasks",
            PanelSide::Completed => "Completed Tasks",
        }
    }
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    ConfirmDelete,
}
