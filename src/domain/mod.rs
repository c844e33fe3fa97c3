pub mod enums;
pub mod pager;
pub mod panel;
pub mod store;
pub mod task;

pub use enums::{PanelSide, TaskStatus, UiMode};
pub use pager::{
    absolute_index, page_controls, total_pages, visible_slice, PageControls, Pager, PAGE_SIZE,
    PAGE_WINDOW,
};
pub use panel::PanelFsm;
pub use store::TaskStore;
pub use task::Task;
