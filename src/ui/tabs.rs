use crate::app::AppState;
use crate::domain::PanelSide;
use crate::ui::styles::{hint_style, tab_active_style, tab_inactive_style};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the Active / Completed tab switcher bar
pub fn render_tabs(f: &mut Frame, app: &AppState, area: Rect) {
    let shown = app.visible_side();

    let style_for = |side: PanelSide| {
        if side == shown {
            tab_active_style()
        } else {
            tab_inactive_style()
        }
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::styled(PanelSide::Active.name(), style_for(PanelSide::Active)),
        Span::raw("  |  "),
        Span::styled(PanelSide::Completed.name(), style_for(PanelSide::Completed)),
    ];

    if app.panel.is_transitioning() {
        spans.push(Span::styled("  (sliding...)", hint_style()));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
