use crate::catalog::FieldErrors;
use crate::ui::manage::intent::ManageIntent;
use crate::ui::manage::state::{ManageState, Notice};
use crate::ui::mvi::Reducer;

pub struct ManageReducer;

impl Reducer for ManageReducer {
    type State = ManageState;
    type Intent = ManageIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        if state.is_busy() && locked_while_pending(&intent) {
            return state;
        }

        match intent {
            ManageIntent::MoveUp => ManageState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },
            ManageIntent::MoveDown { len } => ManageState {
                cursor: (state.cursor + 1).min(len.saturating_sub(1)),
                ..state
            },
            ManageIntent::FocusNext => ManageState {
                focused: state.focused.next(),
                ..state
            },
            ManageIntent::FocusPrev => ManageState {
                focused: state.focused.prev(),
                ..state
            },

            ManageIntent::Select(game) => ManageState {
                selected: Some(game.id),
                form: game.draft(),
                errors: FieldErrors::new(),
                confirm_delete: None,
                notice: None,
                ..state
            },
            ManageIntent::Reset => cleared(state),
            ManageIntent::Input(ch) => {
                let mut form = state.form;
                state.focused.value_mut(&mut form).push(ch);
                ManageState { form, ..state }
            }
            ManageIntent::Backspace => {
                let mut form = state.form;
                state.focused.value_mut(&mut form).pop();
                ManageState { form, ..state }
            }
            ManageIntent::Rejected(errors) => {
                // Jump to the first field that needs attention.
                let focused = errors.keys().next().copied().unwrap_or(state.focused);
                ManageState {
                    errors,
                    focused,
                    notice: None,
                    ..state
                }
            }
            ManageIntent::Submitted(mutation) => ManageState {
                pending: Some(mutation),
                errors: FieldErrors::new(),
                confirm_delete: None,
                notice: None,
                ..state
            },
            ManageIntent::RequestDelete => match state.selected {
                Some(id) => ManageState {
                    confirm_delete: Some(id),
                    ..state
                },
                None => state,
            },
            ManageIntent::CancelDelete => ManageState {
                confirm_delete: None,
                ..state
            },
            ManageIntent::Finished { mutation, outcome } => {
                let state = ManageState {
                    pending: None,
                    ..state
                };
                match outcome {
                    Ok(()) => ManageState {
                        notice: Some(Notice::Success(mutation.done_label().to_string())),
                        ..cleared(state)
                    },
                    Err(message) => ManageState {
                        notice: Some(Notice::Failure(message)),
                        ..state
                    },
                }
            }
        }
    }
}

/// Intents that edit the form or start an operation.
fn locked_while_pending(intent: &ManageIntent) -> bool {
    !matches!(
        intent,
        ManageIntent::MoveUp
            | ManageIntent::MoveDown { .. }
            | ManageIntent::FocusNext
            | ManageIntent::FocusPrev
            | ManageIntent::Finished { .. }
    )
}

/// Empty form with no selection. The list cursor is kept.
fn cleared(state: ManageState) -> ManageState {
    ManageState {
        cursor: state.cursor,
        ..ManageState::default()
    }
}
