use crate::catalog::{Field, Game, GameId};
use crate::ui::layout::{centered_rect_by_size, list_window, split_columns};
use crate::ui::manage::state::{ManageState, Notice};
use crate::ui::theme::{
    BODY_TEXT, CURSOR_ROW, FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, POPUP_BORDER, SELECTED_ROW,
    STATUS_ERROR, STATUS_OK, STATUS_PENDING, STEEL_BLUE,
};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const LABEL_WIDTH: usize = 14;

/// Draw the management screen: game list on the left, details form on the right.
pub fn render_manage(frame: &mut Frame<'_>, area: Rect, state: &ManageState, games: &[Game]) {
    let (left, right) = split_columns(area);
    render_list(frame, left, state, games);
    render_form(frame, right, state);
}

fn render_list(frame: &mut Frame<'_>, area: Rect, state: &ManageState, games: &[Game]) {
    let block = Block::default()
        .title(Span::styled(" Games ", Style::default().fg(STEEL_BLUE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(GLOBAL_BORDER));

    let visible_rows = area.height.saturating_sub(2) as usize;
    let lines: Vec<Line> = if games.is_empty() {
        vec![Line::from(Span::styled(
            "No games yet.",
            Style::default().fg(MUTED_TEXT),
        ))]
    } else {
        let (start, end) = list_window(state.cursor, games.len(), visible_rows);
        games[start..end]
            .iter()
            .enumerate()
            .map(|(offset, game)| {
                let mut line = Line::from(vec![
                    Span::styled(format!("{:>4} ", game.id), Style::default().fg(MUTED_TEXT)),
                    Span::styled(game.name.clone(), Style::default().fg(BODY_TEXT)),
                ]);
                if state.selected == Some(game.id) {
                    line = line.style(Style::default().bg(SELECTED_ROW));
                } else if start + offset == state.cursor {
                    line = line.style(Style::default().bg(CURSOR_ROW));
                }
                line
            })
            .collect()
    };

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, state: &ManageState) {
    let block = Block::default()
        .title(Span::styled(" Game Details ", Style::default().fg(STEEL_BLUE)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_BORDER));

    let label_style = Style::default().fg(MUTED_TEXT);
    let mut lines = Vec::new();

    let id_text = match state.selected {
        Some(id) => id.to_string(),
        None => "(new)".to_string(),
    };
    lines.push(Line::from(vec![
        Span::styled(format!("{:<width$}", "Id", width = LABEL_WIDTH), label_style),
        Span::styled(id_text, Style::default().fg(BODY_TEXT)),
    ]));
    lines.push(Line::from(""));

    for field in Field::ALL {
        let focused = field == state.focused;
        let mut value = field.value(&state.form).to_string();
        if focused && !state.is_busy() {
            value.push('▏');
        }
        let value_style = if focused {
            Style::default().fg(BODY_TEXT).add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(BODY_TEXT)
        };
        let marker = if focused { "› " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(marker, Style::default().fg(FOCUS_BORDER)),
            Span::styled(
                format!("{:<width$}", field.label(), width = LABEL_WIDTH - 2),
                label_style,
            ),
            Span::styled(value, value_style),
        ]));
        if let Some(message) = state.error_for(field) {
            lines.push(Line::from(vec![
                Span::raw(" ".repeat(LABEL_WIDTH)),
                Span::styled(message, Style::default().fg(STATUS_ERROR)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        action_span("Ctrl+A Add", state.can_add()),
        Span::raw("  "),
        action_span("Ctrl+U Update", state.can_update()),
        Span::raw("  "),
        action_span("Ctrl+D Delete", state.can_delete()),
        Span::raw("  "),
        action_span("Esc Clear", !state.is_busy()),
    ]));

    if let Some(mutation) = state.pending {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            mutation.in_progress_label(),
            Style::default().fg(STATUS_PENDING),
        )));
    } else if let Some(notice) = &state.notice {
        lines.push(Line::from(""));
        let (text, color) = match notice {
            Notice::Success(text) => (text.clone(), STATUS_OK),
            Notice::Failure(text) => (text.clone(), STATUS_ERROR),
        };
        lines.push(Line::from(Span::styled(text, Style::default().fg(color))));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn action_span(label: &'static str, enabled: bool) -> Span<'static> {
    if enabled {
        Span::styled(label, Style::default().fg(BODY_TEXT))
    } else {
        Span::styled(
            label,
            Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM),
        )
    }
}

/// Yes/no popup shown before a delete is sent.
pub fn render_delete_confirm(frame: &mut Frame<'_>, area: Rect, id: GameId, name: &str) {
    let lines = vec![
        Line::from(format!("Delete \"{}\" (id {})?", name, id)),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(STATUS_ERROR).add_modifier(Modifier::BOLD)),
            Span::raw(": Delete   "),
            Span::styled("n/Esc", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(": Cancel"),
        ]),
    ];

    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;
    let popup = centered_rect_by_size(
        area,
        content_width.saturating_add(4).max(36),
        lines.len() as u16 + 2,
    );

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .title(Span::styled(
            " Confirm Delete ",
            Style::default().fg(STATUS_ERROR),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    frame.render_widget(Paragraph::new(lines).block(block), popup);
}
