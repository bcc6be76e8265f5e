mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::LoginIntent;
pub use reducer::{LoginReducer, WELCOME_MESSAGE};
pub use state::LoginState;
pub(crate) use view_model::persist_session;
pub use view_model::LoginViewModel;
