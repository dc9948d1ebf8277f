use crate::ui::app::{Screen, SyncStatus};
use crate::ui::theme::{
    GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK, STATUS_PENDING,
    STEEL_BLUE,
};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header {
    screen: Screen,
    sync: SyncStatus,
    games: usize,
}

impl Header {
    pub fn new(screen: Screen, sync: SyncStatus, games: usize) -> Self {
        Self {
            screen,
            sync,
            games,
        }
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let (status_icon, status_text, status_color) = match self.sync {
            SyncStatus::Loading => ("🟡", "Loading", STATUS_PENDING),
            SyncStatus::Ready => ("🟢", "Synced", STATUS_OK),
            SyncStatus::Failed => ("🔴", "Offline", STATUS_ERROR),
        };
        let title = match self.screen {
            Screen::Dashboard => "List of Games",
            Screen::Manage => "Manage Games",
        };

        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(
                title,
                Style::default().fg(STEEL_BLUE).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(status_icon, Style::default().fg(status_color)),
            Span::styled(format!(" {}", status_text), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} games", self.games), text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
