use crate::catalog::{Field, FieldErrors, GameDraft, GameId};
use crate::ui::mvi::UiState;

/// Catalog operation started from the management screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Add,
    Update(GameId),
    Delete(GameId),
}

impl Mutation {
    pub fn in_progress_label(self) -> &'static str {
        match self {
            Mutation::Add => "Adding game...",
            Mutation::Update(_) => "Updating game...",
            Mutation::Delete(_) => "Deleting game...",
        }
    }

    pub fn done_label(self) -> &'static str {
        match self {
            Mutation::Add => "Game added.",
            Mutation::Update(_) => "Game updated.",
            Mutation::Delete(_) => "Game deleted.",
        }
    }
}

/// Outcome message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Failure(String),
}

/// "Manage Games" screen: game list plus an editable details form.
#[derive(Debug, Clone, PartialEq)]
pub struct ManageState {
    /// Highlighted row in the game list.
    pub cursor: usize,
    /// Game being edited. `None` means the form describes a new game.
    pub selected: Option<GameId>,
    /// Editable copy of the fields; only written back through a mutation.
    pub form: GameDraft,
    pub focused: Field,
    pub errors: FieldErrors,
    /// Operation waiting for the remote. While set, the form is locked.
    pub pending: Option<Mutation>,
    /// Game awaiting a yes/no delete confirmation.
    pub confirm_delete: Option<GameId>,
    pub notice: Option<Notice>,
}

impl Default for ManageState {
    fn default() -> Self {
        Self {
            cursor: 0,
            selected: None,
            form: GameDraft::default(),
            focused: Field::Name,
            errors: FieldErrors::new(),
            pending: None,
            confirm_delete: None,
            notice: None,
        }
    }
}

impl UiState for ManageState {}

impl ManageState {
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Adding is only offered for a fresh form.
    pub fn can_add(&self) -> bool {
        !self.is_busy() && self.selected.is_none()
    }

    pub fn can_update(&self) -> bool {
        !self.is_busy() && self.selected.is_some()
    }

    pub fn can_delete(&self) -> bool {
        self.can_update()
    }

    pub fn error_for(&self, field: Field) -> Option<&'static str> {
        self.errors.get(&field).copied()
    }
}
