mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::RegisterIntent;
pub use reducer::{RegisterReducer, REGISTERED_MESSAGE};
pub use state::RegisterState;
pub use view_model::RegisterViewModel;
