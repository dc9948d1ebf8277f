use crate::catalog::{FieldErrors, Game};
use crate::ui::manage::state::Mutation;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ManageIntent {
    MoveUp,
    /// `len` is the number of games in the list.
    MoveDown { len: usize },
    /// Copy a game's fields into the form for editing.
    Select(Game),
    /// Clear the form and the selection.
    Reset,
    FocusNext,
    FocusPrev,
    Input(char),
    Backspace,
    /// Client-side validation failed; nothing was sent.
    Rejected(FieldErrors),
    /// Validation passed and the operation was handed to the catalog.
    Submitted(Mutation),
    /// Ask for confirmation before deleting the selected game.
    RequestDelete,
    CancelDelete,
    /// The catalog finished an operation. `Err` carries a display message.
    Finished {
        mutation: Mutation,
        outcome: Result<(), String>,
    },
}

impl Intent for ManageIntent {}
