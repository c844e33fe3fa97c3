use crate::app::AppState;
use crate::domain::{visible_slice, PanelSide, Task};
use crate::ui::styles::{
    border_style, default_style, hint_style, selected_style, title_style, transition_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn checkbox(use_emoji: bool) -> &'static str {
    if use_emoji {
        "☐"
    } else {
        "[ ]"
    }
}

/// Create a single line for an active task
fn create_task_line(task: &Task, use_emoji: bool) -> Line<'static> {
    Line::from(vec![
        Span::raw(format!("{} ", checkbox(use_emoji))),
        Span::raw(task.name.clone()),
        Span::styled(
            format!("  · added {}", task.created_at.format("%H:%M")),
            hint_style(),
        ),
    ])
}

/// Render the active tasks pane
pub fn render_active_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let page = app.pager(PanelSide::Active).current_page();
    let tasks = app.store.active();
    let slice = visible_slice(tasks, page);

    let title = format!(" Active Tasks ({}) ", tasks.len());
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));
    if app.panel.is_transitioning() {
        block = block.style(transition_style());
    }

    if tasks.is_empty() {
        let empty = Paragraph::new("\n  No Active Tasks  ·  press 'a' to add one")
            .style(default_style())
            .block(block);
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = slice
        .iter()
        .enumerate()
        .map(|(row, task)| {
            let style = if row == app.selected_row {
                selected_style()
            } else {
                default_style()
            };
            ListItem::new(create_task_line(task, app.use_emoji)).style(style)
        })
        .collect();

    let list = List::new(items).block(block);
    f.render_widget(list, area);
}
