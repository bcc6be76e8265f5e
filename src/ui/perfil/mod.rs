mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::PerfilIntent;
pub use reducer::PerfilReducer;
pub use state::PerfilState;
pub use view_model::PerfilViewModel;
