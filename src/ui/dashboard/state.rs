use crate::catalog::GameId;
use crate::ui::mvi::UiState;

/// "List of Games" screen: search box, filtered list and a details card.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashboardState {
    /// Text typed into the search box.
    pub query: String,
    /// Highlighted row within the filtered list.
    pub cursor: usize,
    /// Game whose details card is shown.
    pub selected: Option<GameId>,
}

impl UiState for DashboardState {}
