use crate::app::AppState;
use crate::domain::{visible_slice, PanelSide, Task};
use crate::ui::styles::{
    border_style, default_style, done_style, selected_style, title_style, transition_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

fn checkbox(use_emoji: bool) -> &'static str {
    if use_emoji {
        "☑"
    } else {
        "[x]"
    }
}

/// Create a single line for a completed task
fn create_task_line(task: &Task, use_emoji: bool) -> Line<'static> {
    let mut spans = vec![
        Span::styled(format!("{} ", checkbox(use_emoji)), done_style()),
        Span::raw(task.name.clone()),
    ];

    if let Some(done_at) = task.completed_at {
        spans.push(Span::styled(
            format!("  · done {}", done_at.format("%H:%M")),
            done_style(),
        ));
    }

    Line::from(spans)
}

/// Render the completed tasks pane
pub fn render_completed_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let page = app.pager(PanelSide::Completed).current_page();
    let tasks = app.store.completed();
    let slice = visible_slice(tasks, page);

    let title = format!(" Completed Tasks ({}) ", tasks.len());
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style())
        .title(Span::styled(title, title_style()));
    if app.panel.is_transitioning() {
        block = block.style(transition_style());
    }

    if tasks.is_empty() {
        let empty = Paragraph::new("\n  No Completed Tasks")
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
