use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, area: Rect) {
    let hints = Line::from(vec![
        Span::raw(" ↑/↓ select   "),
        Span::raw("←/→ page   "),
        Span::raw("1-9 jump   "),
        Span::raw("Enter toggle   "),
        Span::raw("a add   "),
        Span::raw("d delete   "),
        Span::raw("D delete-all   "),
        Span::raw("m move-back   "),
        Span::raw("Tab panel   "),
        Span::raw("q quit"),
    ]);

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}
