use crate::app::AppState;
use crate::domain::{page_controls, PanelSide};
use crate::ui::styles::{
    page_current_style, page_disabled_style, page_style, pending_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the pagination bar for the shown panel.
/// Format: ‹  1 [2] 3  ›  (page 2 of 3)   plus the move-back affordance on
/// the completed side when tasks are flagged.
pub fn render_pagination_bar(f: &mut Frame, app: &AppState, area: Rect) {
    let side = app.visible_side();
    let current = app.pager(side).current_page();
    let total = app.total_pages_for(side);
    let controls = page_controls(current, total);

    let mut spans = Vec::new();

    let prev_style = if controls.prev_enabled {
        page_style()
    } else {
        page_disabled_style()
    };
    spans.push(Span::styled(" ‹ ", prev_style));

    for page in &controls.pages {
        if *page == current {
            spans.push(Span::styled(format!(" [{}] ", page), page_current_style()));
        } else {
            spans.push(Span::styled(format!("  {}  ", page), page_style()));
        }
    }

    let next_style = if controls.next_enabled {
        page_style()
    } else {
        page_disabled_style()
    };
    spans.push(Span::styled(" › ", next_style));

    spans.push(Span::styled(
        format!("  page {} of {}", current, total),
        page_disabled_style(),
    ));

    let pending = app.store.pending_return_count();
    if side == PanelSide::Completed && pending > 0 {
        spans.push(Span::styled(
            format!("   Move {} task(s) back to active [m]", pending),
            pending_style(),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
