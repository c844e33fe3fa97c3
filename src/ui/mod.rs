pub mod active_pane;
pub mod completed_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod modal;
pub mod pagination;
pub mod styles;
pub mod tabs;

use crate::app::AppState;
use crate::domain::PanelSide;
use active_pane::render_active_pane;
use completed_pane::render_completed_pane;
use input_form::render_input_form;
use keybindings::render_keybindings;
use layout::create_layout;
use modal::render_confirm_modal;
use pagination::render_pagination_bar;
use ratatui::Frame;
use tabs::render_tabs;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar and tab switcher
    render_keybindings(f, layout.keybindings_area);
    render_tabs(f, app, layout.tabs_area);

    // Render the shown panel (the target side while sliding)
    match app.visible_side() {
        PanelSide::Active => render_active_pane(f, app, layout.list_area),
        PanelSide::Completed => render_completed_pane(f, app, layout.list_area),
    }

    render_pagination_bar(f, app, layout.pagination_area);

    // Render confirm modal if active
    if app.confirm.is_some() {
        render_confirm_modal(f, app, size);
    }

    // Render add-task form if active
    render_input_form(f, app, size);
}
