mod intent;
mod reducer;
mod state;
mod view;

pub use intent::DashboardIntent;
pub use reducer::DashboardReducer;
pub use state::DashboardState;
pub use view::render_dashboard;
