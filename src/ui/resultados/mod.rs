mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::ResultadosIntent;
pub use reducer::ResultadosReducer;
pub use state::ResultadosState;
pub use view_model::ResultadosViewModel;
