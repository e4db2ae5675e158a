//! UI rendering

use super::app::App;
use crate::palette;
use pokedex_api::{ErrorKind, Phase, Record};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use std::time::Instant;

/// Width of one grid cell, name plus gap
const CELL_WIDTH: usize = 16;

/// Render the entire UI
pub fn render(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search input
            Constraint::Min(8),    // Grid + details
            Constraint::Length(1), // Toast line
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_search_input(frame, app, chunks[0]);
    render_grid(frame, app, main[0]);
    render_detail(frame, app, main[1]);
    render_toast_line(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[3]);
}

fn render_search_input(frame: &mut Frame, app: &App, area: Rect) {
    let input = &app.search_input;
    let (before, rest) = input.text.split_at(input.cursor);
    let mut chars = rest.chars();
    let at_cursor = chars.next().map(String::from).unwrap_or_else(|| " ".to_string());
    let after: String = chars.collect();

    let line = Line::from(vec![
        Span::raw(before.to_string()),
        Span::styled(at_cursor, Style::default().add_modifier(Modifier::REVERSED)),
        Span::raw(after),
    ]);

    let title = if app.state.is_searching() {
        " Search (looking up...) "
    } else {
        " Search (Enter to look up) "
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(title);

    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn render_grid(frame: &mut Frame, app: &mut App, area: Rect) {
    let title = format!(
        " Pokédex [{}/{}] ",
        app.visible.len(),
        app.state.catalog().len()
    );
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title(title);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.visible.is_empty() {
        let message = empty_grid_message(app);
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, inner);
        return;
    }

    let columns = (inner.width as usize / CELL_WIDTH).max(1);
    let rows_shown = (inner.height as usize).max(1);
    let total_rows = app.visible.len().div_ceil(columns);
    let cursor_row = app.cursor.index / columns;

    let cursor = &mut app.cursor;
    cursor.columns = columns;
    cursor.scroll_row = cursor.scroll_row.min(total_rows.saturating_sub(rows_shown));
    if cursor_row < cursor.scroll_row {
        cursor.scroll_row = cursor_row;
    } else if cursor_row >= cursor.scroll_row + rows_shown {
        cursor.scroll_row = cursor_row + 1 - rows_shown;
    }

    let focused_id = app.state.focused().map(|r| r.id);
    let first_row = app.cursor.scroll_row;
    let last_row = (first_row + rows_shown).min(total_rows);

    let lines: Vec<Line> = (first_row..last_row)
        .map(|row| {
            let mut spans = Vec::with_capacity(columns * 2);
            for col in 0..columns {
                let pos = row * columns + col;
                let Some(record) = app
                    .visible
                    .get(pos)
                    .and_then(|&idx| app.state.catalog().get(idx))
                else {
                    break;
                };
                let name = truncate(&record.name, CELL_WIDTH - 1);
                let pad = " ".repeat(CELL_WIDTH - name.chars().count());

                let mut style = Style::default().fg(palette::to_ratatui(record.primary_type()));
                if pos == app.cursor.index {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                if focused_id == Some(record.id) {
                    style = style.add_modifier(Modifier::UNDERLINED);
                }
                spans.push(Span::styled(name, style));
                spans.push(Span::raw(pad));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn empty_grid_message(app: &App) -> String {
    if app.state.is_loading() {
        return match (app.load_progress, app.load_started) {
            (Some(p), Some(started)) => format!(
                "{} Loading Pokémon... {}/{}",
                spinner_frame(started),
                p.completed,
                p.total
            ),
            (None, Some(started)) => format!("{} Loading Pokémon...", spinner_frame(started)),
            _ => "Loading Pokémon...".to_string(),
        };
    }
    if !app.state.query().is_empty() {
        return "No Pokémon found!".to_string();
    }
    match app.state.last_error() {
        Some(kind) if app.state.phase() == Phase::Idle => {
            format!("Could not load the Pokédex ({}). Ctrl+R to retry.", kind.describe())
        }
        _ => "The Pokédex is empty.".to_string(),
    }
}

fn render_detail(frame: &mut Frame, app: &App, area: Rect) {
    let lines = match app.state.focused() {
        Some(record) => detail_lines(record),
        None => placeholder_lines(app),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Details ");

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

fn detail_lines(record: &Record) -> Vec<Line<'static>> {
    let label = Style::default().fg(Color::DarkGray);
    let title_style = Style::default()
        .fg(palette::to_ratatui(record.primary_type()))
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(record.name.to_uppercase(), title_style)),
        Line::default(),
        Line::from(vec![
            Span::styled("ID: ", label),
            Span::raw(record.id.to_string()),
        ]),
        Line::from(vec![
            Span::styled("Height: ", label),
            Span::raw(format!("{} decimetres", record.height)),
        ]),
        Line::from(vec![
            Span::styled("Weight: ", label),
            Span::raw(format!("{} hectograms", record.weight)),
        ]),
        Line::default(),
        Line::from(Span::styled("Types:", label)),
    ];

    let mut badges = Vec::new();
    for t in &record.types {
        let bg = palette::to_ratatui(Some(t));
        badges.push(Span::styled(
            format!(" {} ", t),
            Style::default().fg(Color::Black).bg(bg),
        ));
        badges.push(Span::raw(" "));
    }
    lines.push(Line::from(badges));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Abilities:", label)));
    lines.extend(
        record
            .abilities
            .iter()
            .map(|a| Line::from(format!("  • {}", a))),
    );

    lines.push(Line::default());
    lines.push(Line::from(Span::styled("Sprites:", label)));
    for (side, url) in [("front", &record.sprites.front), ("back", &record.sprites.back)] {
        let url = url.clone().unwrap_or_else(|| "-".to_string());
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", side), label),
            Span::styled(url, Style::default().fg(Color::Blue)),
        ]));
    }

    lines
}

fn placeholder_lines(app: &App) -> Vec<Line<'static>> {
    let dim = Style::default().fg(Color::DarkGray);
    match app.state.phase() {
        Phase::Searching => vec![Line::from(Span::styled(
            format!("Looking up `{}`...", app.state.query().trim()),
            dim,
        ))],
        Phase::NotFound => {
            let mut lines = vec![Line::from(Span::styled(
                "Pokémon not found!",
                Style::default().fg(Color::Red),
            ))];
            if let Some(kind) = app.state.last_error().filter(|k| *k != ErrorKind::NotFound) {
                lines.push(Line::from(Span::styled(format!("({})", kind.describe()), dim)));
            }
            lines
        }
        _ => vec![
            Line::from(Span::styled("Type to filter the grid.", dim)),
            Line::from(Span::styled("Enter looks a name up directly.", dim)),
            Line::from(Span::styled("Tab shows the highlighted Pokémon.", dim)),
        ],
    }
}

/// Render the toast notification line
fn render_toast_line(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(ref toast) = app.toast {
        let bracket = Style::default().fg(Color::DarkGray);
        let toast_style = if toast.is_error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Blue)
        };

        let spans = vec![
            Span::styled("  [", bracket),
            Span::styled(toast.message.as_str(), toast_style),
            Span::styled("]", bracket),
        ];
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}

fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let status_text = match (app.state.is_loading(), app.load_started) {
        (true, Some(started)) => {
            let progress = app
                .load_progress
                .map(|p| format!(" {}/{}", p.completed, p.total))
                .unwrap_or_default();
            format!(" {} Loading{} │ Esc: quit", spinner_frame(started), progress)
        }
        _ => format!(
            " {} Pokémon │ Enter: search │ Tab: show │ ←↑→↓: move │ Ctrl+R: reload │ Esc: quit",
            app.state.catalog().len()
        ),
    };

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(status, area);
}

fn truncate(name: &str, max: usize) -> String {
    if name.chars().count() <= max {
        return name.to_string();
    }
    let mut out: String = name.chars().take(max.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn spinner_frame(started_at: Instant) -> &'static str {
    const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];
    let elapsed = started_at.elapsed().as_millis() / 80;
    FRAMES[(elapsed as usize) % FRAMES.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("pikachu", 15), "pikachu");
        assert_eq!(truncate("crabominable", 8), "crabomi…");
        assert_eq!(truncate("crabominable", 8).chars().count(), 8);
    }
}
