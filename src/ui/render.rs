use crate::ui::app::{App, Screen};
use crate::ui::dashboard::render_dashboard;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::manage::{render_delete_confirm, render_manage};
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let header_widget = Header::new(app.screen(), app.sync_status(), app.game_count());
    frame.render_widget(header_widget.widget(), header);

    frame.render_widget(Clear, body);
    match app.screen() {
        Screen::Dashboard => {
            let games = app.dashboard_games();
            let selected = app.dashboard_selection();
            render_dashboard(frame, body, app.dashboard(), &games, selected.as_ref());
        }
        Screen::Manage => {
            let games = app.manage_games();
            render_manage(frame, body, app.manage(), &games);
        }
    }

    let footer_widget = Footer::new(app.screen());
    frame.render_widget(footer_widget.widget(footer), footer);

    if let Some((id, name)) = app.delete_candidate() {
        render_delete_confirm(frame, area, id, &name);
    }
}
