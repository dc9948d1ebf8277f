use crate::catalog::GameId;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DashboardIntent {
    QueryInput(char),
    QueryBackspace,
    QueryClear,
    MoveUp,
    /// `len` is the number of rows currently visible.
    MoveDown { len: usize },
    Select(GameId),
}

impl Intent for DashboardIntent {}
