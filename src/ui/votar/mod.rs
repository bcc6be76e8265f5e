//! Ballot screen: one vote per office, with confirmation.

mod intent;
mod reducer;
mod state;
mod view_model;

pub use intent::VotarIntent;
pub use reducer::{VotarReducer, VOTO_REGISTRADO};
pub use state::{EstadoCargo, VotarState};
pub use view_model::VotarViewModel;
