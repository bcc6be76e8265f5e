mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::CompararIntent;
pub use reducer::CompararReducer;
pub use state::{Comparacion, CompararState, Resumen, Slot};
pub use view_model::CompararViewModel;
