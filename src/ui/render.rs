use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph};
use ratatui::Frame;
use serde_json::Value;

use crate::ui::app::App;

const ACCENT: Color = Color::Cyan;
const DIM: Color = Color::DarkGray;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let regions = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_counter(frame, app, regions[0]);
    draw_history(frame, app, regions[1]);
    draw_footer(frame, regions[2]);
}

fn draw_counter(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.snapshot();
    let count_line = Line::from(vec![
        Span::raw("Count: "),
        Span::styled(
            state.count().to_string(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);
    let items_line = Line::from(Span::styled(
        format!("items: {:?}", state.items),
        Style::default().fg(DIM),
    ));

    let widget = Paragraph::new(vec![count_line, items_line])
        .block(Block::default().borders(Borders::ALL).title(" Counter "));
    frame.render_widget(widget, area);
}

fn draw_history(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = if app.devtools_enabled() {
        " Dispatches "
    } else {
        " Dispatches (devtools off) "
    };

    let items: Vec<ListItem<'_>> = app
        .history()
        .iter()
        .rev()
        .map(|entry| {
            let tag = entry
                .action
                .get("type")
                .and_then(Value::as_str)
                .unwrap_or("?")
                .to_string();
            let len = entry
                .state
                .get("items")
                .and_then(Value::as_array)
                .map(|items| items.len())
                .unwrap_or(0);
            ListItem::new(Line::from(vec![
                Span::styled(format!("#{:<4}", entry.seq), Style::default().fg(DIM)),
                Span::raw(tag),
                Span::styled(format!("  items: {}", len), Style::default().fg(DIM)),
            ]))
        })
        .collect();

    let widget = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(widget, area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hint = Line::from(Span::styled(
        " space/enter: increase count   x: send unknown action   q: quit",
        Style::default().fg(DIM),
    ));
    frame.render_widget(Paragraph::new(hint), area);
}
