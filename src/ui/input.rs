use crate::ui::app::{App, Screen};
use crate::ui::dashboard::DashboardIntent;
use crate::ui::manage::ManageIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') {
        app.request_quit();
        return;
    }

    // The delete confirmation swallows everything else until answered.
    if app.manage().confirm_delete.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_delete(),
            _ => {}
        }
        return;
    }

    if key.code == KeyCode::F(2) {
        app.toggle_screen();
        return;
    }
    if is_ctrl_char(key, 'r') {
        app.request_refresh();
        return;
    }

    match app.screen() {
        Screen::Dashboard => handle_dashboard_key(app, key),
        Screen::Manage => handle_manage_key(app, key),
    }
}

fn handle_dashboard_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.dispatch_dashboard(DashboardIntent::MoveUp),
        KeyCode::Down => app.dashboard_move_down(),
        KeyCode::Enter => app.dashboard_select_cursor(),
        KeyCode::Esc => app.dispatch_dashboard(DashboardIntent::QueryClear),
        KeyCode::Backspace => app.dispatch_dashboard(DashboardIntent::QueryBackspace),
        KeyCode::Char(ch) if is_plain(key) => {
            app.dispatch_dashboard(DashboardIntent::QueryInput(ch))
        }
        _ => {}
    }
}

fn handle_manage_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'a') {
        app.submit_add();
        return;
    }
    if is_ctrl_char(key, 'u') {
        app.submit_update();
        return;
    }
    if is_ctrl_char(key, 'd') {
        app.request_delete();
        return;
    }

    match key.code {
        KeyCode::Up => app.dispatch_manage(ManageIntent::MoveUp),
        KeyCode::Down => app.manage_move_down(),
        KeyCode::Enter => app.manage_select_cursor(),
        KeyCode::Esc => app.dispatch_manage(ManageIntent::Reset),
        KeyCode::Tab => app.dispatch_manage(ManageIntent::FocusNext),
        KeyCode::BackTab => app.dispatch_manage(ManageIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_manage(ManageIntent::Backspace),
        KeyCode::Char(ch) if is_plain(key) => app.dispatch_manage(ManageIntent::Input(ch)),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn is_plain(key: KeyEvent) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
