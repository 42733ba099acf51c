use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Text;
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use crate::app::App;
use crate::model::Pane;

const ACTIVE_BORDER: Color = Color::Cyan;
const INACTIVE_BORDER: Color = Color::Black;
const CONTEXT_TEXT: Color = Color::Blue;

/// Draws every pane. `Terminal::draw` only flushes once this returns, so a
/// frame is never half written.
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.resize(area.width, area.height);
    let layout = *app.layout();

    render_context(frame, layout.context, app);
    for pane in Pane::LISTS {
        render_list(frame, layout.rect(pane), app, pane);
    }
    render_info(frame, layout.info, app);
}

fn pane_block(app: &App, pane: Pane) -> Block<'static> {
    let title = match app.scroll_state(pane) {
        Some(state) => format!("{} ({})", pane.title(), state.len()),
        None => pane.title().to_string(),
    };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(app.is_active(pane)))
}

fn border_style(active: bool) -> Style {
    if active {
        Style::default().fg(ACTIVE_BORDER)
    } else {
        Style::default().fg(INACTIVE_BORDER)
    }
}

fn selected_row_style(active: bool) -> Style {
    if active {
        Style::default().fg(Color::Black).bg(Color::White)
    } else {
        Style::default()
    }
}

fn render_context(frame: &mut Frame, area: Rect, app: &App) {
    if area.area() == 0 {
        return;
    }
    let paragraph = Paragraph::new(app.context_text().to_string())
        .block(pane_block(app, Pane::Context))
        .style(Style::default().fg(CONTEXT_TEXT));
    frame.render_widget(paragraph, area);
}

fn render_list(frame: &mut Frame, area: Rect, app: &App, pane: Pane) {
    if area.area() == 0 {
        return;
    }
    let Some(state) = app.scroll_state(pane) else {
        return;
    };

    let window = state.window(app.layout().visible_rows(pane));
    let items = window
        .rows
        .iter()
        .map(|row| ListItem::new(row.clone()))
        .collect::<Vec<_>>();
    let list = List::new(items)
        .block(pane_block(app, pane))
        .highlight_style(selected_row_style(app.is_active(pane)));

    let mut list_state = ListState::default().with_selected(window.highlighted);
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_info(frame: &mut Frame, area: Rect, app: &App) {
    if area.area() == 0 {
        return;
    }
    let paragraph = Paragraph::new(Text::from(app.info_text().to_string()))
        .block(pane_block(app, Pane::Info))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
