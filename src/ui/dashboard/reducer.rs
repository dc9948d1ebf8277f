use crate::ui::dashboard::intent::DashboardIntent;
use crate::ui::dashboard::state::DashboardState;
use crate::ui::mvi::Reducer;

pub struct DashboardReducer;

impl Reducer for DashboardReducer {
    type State = DashboardState;
    type Intent = DashboardIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DashboardIntent::QueryInput(ch) => {
                let mut query = state.query;
                query.push(ch);
                DashboardState {
                    query,
                    cursor: 0,
                    ..state
                }
            }
            DashboardIntent::QueryBackspace => {
                let mut query = state.query;
                query.pop();
                DashboardState {
                    query,
                    cursor: 0,
                    ..state
                }
            }
            DashboardIntent::QueryClear => DashboardState {
                query: String::new(),
                cursor: 0,
                ..state
            },
            DashboardIntent::MoveUp => DashboardState {
                cursor: state.cursor.saturating_sub(1),
                ..state
            },
            DashboardIntent::MoveDown { len } => {
                let last = len.saturating_sub(1);
                DashboardState {
                    cursor: (state.cursor + 1).min(last),
                    ..state
                }
            }
            DashboardIntent::Select(id) => DashboardState {
                selected: Some(id),
                ..state
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_resets_cursor() {
        let state = DashboardState {
            cursor: 3,
            ..DashboardState::default()
        };
        let state = DashboardReducer::reduce(state, DashboardIntent::QueryInput('z'));
        assert_eq!(state.query, "z");
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn backspace_on_empty_query_is_harmless() {
        let state = DashboardReducer::reduce(DashboardState::default(), DashboardIntent::QueryBackspace);
        assert_eq!(state, DashboardState::default());
    }

    #[test]
    fn cursor_stays_within_list() {
        let mut state = DashboardState::default();
        for _ in 0..5 {
            state = DashboardReducer::reduce(state, DashboardIntent::MoveDown { len: 2 });
        }
        assert_eq!(state.cursor, 1);

        state = DashboardReducer::reduce(state, DashboardIntent::MoveUp);
        state = DashboardReducer::reduce(state, DashboardIntent::MoveUp);
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn select_keeps_query() {
        let state = DashboardState {
            query: "che".to_string(),
            ..DashboardState::default()
        };
        let state = DashboardReducer::reduce(state, DashboardIntent::Select(4));
        assert_eq!(state.selected, Some(4));
        assert_eq!(state.query, "che");
    }
}
