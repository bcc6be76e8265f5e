mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::CandidatoDetailIntent;
pub use reducer::CandidatoDetailReducer;
pub use state::CandidatoDetailState;
pub use view_model::CandidatoDetailViewModel;
