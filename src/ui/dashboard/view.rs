use crate::catalog::Game;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::layout::{list_window, split_columns};
use crate::ui::theme::{
    BODY_TEXT, CURSOR_ROW, FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, SELECTED_ROW, STEEL_BLUE,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

/// Draw the dashboard: search box and list on the left, details on the right.
///
/// `games` is the list already filtered by the current query.
pub fn render_dashboard(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &DashboardState,
    games: &[Game],
    selected: Option<&Game>,
) {
    let (left, right) = split_columns(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(left);

    let search = Paragraph::new(Line::from(vec![
        Span::styled("🔍 ", Style::default().fg(MUTED_TEXT)),
        if state.query.is_empty() {
            Span::styled("Search for games...", Style::default().fg(MUTED_TEXT))
        } else {
            Span::styled(state.query.clone(), Style::default().fg(BODY_TEXT))
        },
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(FOCUS_BORDER)),
    );
    frame.render_widget(search, rows[0]);

    let list_block = Block::default()
        .title(Span::styled(" Games ", Style::default().fg(STEEL_BLUE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let visible_rows = rows[1].height.saturating_sub(2) as usize;
    let lines: Vec<Line> = if games.is_empty() {
        vec![Line::from(Span::styled(
            "No games to show.",
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        let (start, end) = list_window(state.cursor, games.len(), visible_rows);
        games[start..end]
            .iter()
            .enumerate()
            .map(|(offset, game)| {
                let index = start + offset;
                let mut line = Line::from(vec![
                    Span::styled(format!(" {} ", game.name), Style::default().fg(BODY_TEXT)),
                    Span::styled(format!(" {}", game.genre), Style::default().fg(MUTED_TEXT)),
                ]);
                if selected.is_some_and(|s| s.id == game.id) {
                    line = line.style(Style::default().bg(SELECTED_ROW));
                } else if index == state.cursor {
                    line = line.style(Style::default().bg(CURSOR_ROW));
                }
                line
            })
            .collect()
    };
    frame.render_widget(Paragraph::new(lines).block(list_block), rows[1]);

    let card_block = Block::default()
        .title(Span::styled(" Selected Game ", Style::default().fg(STEEL_BLUE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));
    let card = match selected {
        Some(game) => details_lines(game),
        None => vec![Line::from(Span::styled(
            "Select a game to view its details.",
            Style::default().fg(MUTED_TEXT),
        ))],
    };
    frame.render_widget(
        Paragraph::new(card)
            .block(card_block)
            .wrap(Wrap { trim: false }),
        right,
    );
}

fn details_lines(game: &Game) -> Vec<Line<'static>> {
    let label = Style::default().fg(MUTED_TEXT).add_modifier(Modifier::BOLD);
    let value = Style::default().fg(BODY_TEXT);
    vec![
        Line::from(Span::styled(
            game.name.clone(),
            Style::default().fg(STEEL_BLUE).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Genre: ", label),
            Span::styled(game.genre.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Price: ", label),
            Span::styled(format!("${}", game.price), value),
        ]),
        Line::from(vec![
            Span::styled("Release Date: ", label),
            Span::styled(display_date(&game.release_date).to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Image: ", label),
            Span::styled(game.image_uri.clone(), value),
        ]),
        Line::from(vec![
            Span::styled("Id: ", label),
            Span::styled(game.id.to_string(), value),
        ]),
    ]
}

/// Date part of an ISO timestamp ("2020-01-01T00:00:00" → "2020-01-01").
fn display_date(raw: &str) -> &str {
    raw.split_once('T').map_or(raw, |(date, _)| date)
}
