mod intent;
mod reducer;
mod state;
mod view;

pub use intent::ManageIntent;
pub use reducer::ManageReducer;
pub use state::{ManageState, Mutation, Notice};
pub use view::{render_delete_confirm, render_manage};
