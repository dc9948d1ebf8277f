use crate::catalog::{validate, CatalogView, Game, GameDraft, GameId};
use crate::ui::dashboard::{DashboardIntent, DashboardReducer, DashboardState};
use crate::ui::manage::{ManageIntent, ManageReducer, ManageState, Mutation};
use crate::ui::mvi::dispatch;
use tokio::sync::mpsc;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Screen {
    Dashboard,
    Manage,
}

/// Work handed to the catalog worker.
#[derive(Debug)]
pub enum UiCommand {
    Initialize,
    Refresh,
    Add { draft: GameDraft },
    Update { id: GameId, draft: GameDraft },
    Delete { id: GameId },
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

/// State of the last list fetch, shown in the header.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SyncStatus {
    Loading,
    Ready,
    Failed,
}

pub struct App {
    should_quit: bool,
    screen: Screen,
    catalog: CatalogView,
    sync_status: SyncStatus,
    dashboard: DashboardState,
    manage: ManageState,
    commands: Option<UiCommandSender>,
}

impl App {
    pub fn new(catalog: CatalogView) -> Self {
        Self {
            should_quit: false,
            screen: Screen::Dashboard,
            catalog,
            sync_status: SyncStatus::Loading,
            dashboard: DashboardState::default(),
            manage: ManageState::default(),
            commands: None,
        }
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.commands = Some(sender);
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn toggle_screen(&mut self) {
        self.screen = match self.screen {
            Screen::Dashboard => Screen::Manage,
            Screen::Manage => Screen::Dashboard,
        };
    }

    pub fn sync_status(&self) -> SyncStatus {
        self.sync_status
    }

    pub fn game_count(&self) -> usize {
        self.catalog.len()
    }

    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    pub fn manage(&self) -> &ManageState {
        &self.manage
    }

    /// Games matching the dashboard search box.
    pub fn dashboard_games(&self) -> Vec<Game> {
        self.catalog.search(&self.dashboard.query)
    }

    /// Game shown in the dashboard details card, if it still exists.
    pub fn dashboard_selection(&self) -> Option<Game> {
        self.dashboard.selected.and_then(|id| self.catalog.get(id))
    }

    pub fn manage_games(&self) -> Vec<Game> {
        self.catalog.games()
    }

    pub fn delete_candidate(&self) -> Option<(GameId, String)> {
        let id = self.manage.confirm_delete?;
        let name = self
            .catalog
            .get(id)
            .map(|game| game.name)
            .unwrap_or_else(|| self.manage.form.name.clone());
        Some((id, name))
    }

    pub fn dispatch_dashboard(&mut self, intent: DashboardIntent) {
        dispatch::<DashboardReducer>(&mut self.dashboard, intent);
    }

    pub fn dispatch_manage(&mut self, intent: ManageIntent) {
        dispatch::<ManageReducer>(&mut self.manage, intent);
    }

    pub fn dashboard_move_down(&mut self) {
        let len = self.dashboard_games().len();
        self.dispatch_dashboard(DashboardIntent::MoveDown { len });
    }

    pub fn manage_move_down(&mut self) {
        let len = self.catalog.len();
        self.dispatch_manage(ManageIntent::MoveDown { len });
    }

    /// Show details for the highlighted dashboard row.
    pub fn dashboard_select_cursor(&mut self) {
        let games = self.dashboard_games();
        if let Some(game) = games.get(self.dashboard.cursor) {
            self.dispatch_dashboard(DashboardIntent::Select(game.id));
        }
    }

    /// Load the highlighted row into the management form.
    pub fn manage_select_cursor(&mut self) {
        let games = self.catalog.games();
        if let Some(game) = games.get(self.manage.cursor).cloned() {
            self.dispatch_manage(ManageIntent::Select(game));
        }
    }

    pub fn request_initialize(&mut self) {
        self.request_sync(UiCommand::Initialize);
    }

    pub fn request_refresh(&mut self) {
        self.request_sync(UiCommand::Refresh);
    }

    fn request_sync(&mut self, command: UiCommand) {
        self.sync_status = match self.send_command(command) {
            Ok(()) => SyncStatus::Loading,
            Err(_) => SyncStatus::Failed,
        };
    }

    pub fn submit_add(&mut self) {
        if !self.manage.can_add() {
            return;
        }
        let draft = self.manage.form.clone();
        let errors = validate(&draft);
        if !errors.is_empty() {
            self.dispatch_manage(ManageIntent::Rejected(errors));
            return;
        }
        self.submit(Mutation::Add, UiCommand::Add { draft });
    }

    pub fn submit_update(&mut self) {
        if !self.manage.can_update() {
            return;
        }
        let Some(id) = self.manage.selected else {
            return;
        };
        let draft = self.manage.form.clone();
        let errors = validate(&draft);
        if !errors.is_empty() {
            self.dispatch_manage(ManageIntent::Rejected(errors));
            return;
        }
        self.submit(Mutation::Update(id), UiCommand::Update { id, draft });
    }

    pub fn request_delete(&mut self) {
        if self.manage.can_delete() {
            self.dispatch_manage(ManageIntent::RequestDelete);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.dispatch_manage(ManageIntent::CancelDelete);
    }

    pub fn confirm_delete(&mut self) {
        let Some(id) = self.manage.confirm_delete else {
            return;
        };
        self.submit(Mutation::Delete(id), UiCommand::Delete { id });
    }

    pub fn on_catalog_synced(&mut self, synced: bool) {
        self.sync_status = if synced {
            SyncStatus::Ready
        } else {
            SyncStatus::Failed
        };
        self.clamp_cursors();
    }

    pub fn on_mutation_finished(&mut self, mutation: Mutation, outcome: Result<(), String>) {
        self.dispatch_manage(ManageIntent::Finished { mutation, outcome });
        if let Mutation::Delete(id) = mutation {
            if self.dashboard.selected == Some(id) && self.catalog.get(id).is_none() {
                self.dashboard.selected = None;
            }
        }
        self.clamp_cursors();
    }

    fn submit(&mut self, mutation: Mutation, command: UiCommand) {
        self.dispatch_manage(ManageIntent::Submitted(mutation));
        if let Err(message) = self.send_command(command) {
            self.dispatch_manage(ManageIntent::Finished {
                mutation,
                outcome: Err(message),
            });
        }
    }

    fn send_command(&self, command: UiCommand) -> Result<(), String> {
        let Some(sender) = &self.commands else {
            return Err("Catalog worker is not running".to_string());
        };

        sender.try_send(command).map_err(|err| {
            tracing::warn!(error = %err, "Failed to queue catalog command");
            "Catalog worker is busy".to_string()
        })
    }

    /// Keep list cursors inside the list after it shrinks.
    fn clamp_cursors(&mut self) {
        let visible = self.dashboard_games().len();
        self.dashboard.cursor = self.dashboard.cursor.min(visible.saturating_sub(1));
        let total = self.catalog.len();
        self.manage.cursor = self.manage.cursor.min(total.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Field;
    use crate::ui::manage::Notice;

    fn app_with_channel() -> (App, mpsc::Receiver<UiCommand>) {
        let (tx, rx) = mpsc::channel(8);
        let mut app = App::new(CatalogView::default());
        app.set_command_sender(tx);
        (app, rx)
    }

    fn fill_form(app: &mut App, draft: &GameDraft) {
        for field in Field::ALL {
            for ch in field.value(draft).chars() {
                app.dispatch_manage(ManageIntent::Input(ch));
            }
            app.dispatch_manage(ManageIntent::FocusNext);
        }
    }

    fn portal() -> GameDraft {
        GameDraft {
            name: "Portal".to_string(),
            genre: "Puzzle".to_string(),
            price: "9.99".to_string(),
            release_date: "2007-10-10".to_string(),
            image_uri: "https://img.example.com/portal.png".to_string(),
        }
    }

    #[test]
    fn invalid_form_is_not_sent() {
        let (mut app, mut rx) = app_with_channel();

        app.submit_add();

        assert!(rx.try_recv().is_err());
        assert_eq!(app.manage().error_for(Field::Name), Some("Name is required."));
        assert!(!app.manage().is_busy());
    }

    #[test]
    fn valid_add_is_queued_and_locks_form() {
        let (mut app, mut rx) = app_with_channel();
        fill_form(&mut app, &portal());

        app.submit_add();
        app.submit_add();

        match rx.try_recv() {
            Ok(UiCommand::Add { draft }) => assert_eq!(draft, portal()),
            other => panic!("expected add command, got {other:?}"),
        }
        assert!(rx.try_recv().is_err());
        assert_eq!(app.manage().pending, Some(Mutation::Add));
    }

    #[test]
    fn finished_add_resets_form() {
        let (mut app, _rx) = app_with_channel();
        fill_form(&mut app, &portal());
        app.submit_add();

        app.on_mutation_finished(Mutation::Add, Ok(()));

        assert_eq!(app.manage().form, GameDraft::default());
        assert_eq!(
            app.manage().notice,
            Some(Notice::Success("Game added.".to_string()))
        );
    }

    #[test]
    fn missing_worker_reports_failure() {
        let mut app = App::new(CatalogView::default());
        fill_form(&mut app, &portal());

        app.submit_add();

        assert!(!app.manage().is_busy());
        assert_eq!(app.manage().form, portal());
        assert!(matches!(app.manage().notice, Some(Notice::Failure(_))));
    }

    #[test]
    fn update_requires_selection() {
        let (mut app, mut rx) = app_with_channel();
        fill_form(&mut app, &portal());

        app.submit_update();
        app.request_delete();

        assert!(rx.try_recv().is_err());
        assert_eq!(app.manage().confirm_delete, None);
    }

    #[test]
    fn refresh_marks_loading_until_synced() {
        let (mut app, mut rx) = app_with_channel();

        app.request_refresh();
        assert_eq!(app.sync_status(), SyncStatus::Loading);
        assert!(matches!(rx.try_recv(), Ok(UiCommand::Refresh)));

        app.on_catalog_synced(false);
        assert_eq!(app.sync_status(), SyncStatus::Failed);
    }

    #[test]
    fn toggle_screen_alternates() {
        let mut app = App::new(CatalogView::default());
        assert_eq!(app.screen(), Screen::Dashboard);
        app.toggle_screen();
        assert_eq!(app.screen(), Screen::Manage);
        app.toggle_screen();
        assert_eq!(app.screen(), Screen::Dashboard);
    }
}
