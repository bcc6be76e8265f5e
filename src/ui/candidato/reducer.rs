use crate::repository::Resource;
use crate::ui::candidato::intent::CandidatoDetailIntent;
use crate::ui::candidato::state::CandidatoDetailState;
use crate::ui::mvi::Reducer;

pub struct CandidatoDetailReducer;

impl Reducer for CandidatoDetailReducer {
    type State = CandidatoDetailState;
    type Intent = CandidatoDetailIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CandidatoDetailIntent::LoadStarted => CandidatoDetailState {
                is_loading: true,
                error_message: None,
                ..state
            },
            CandidatoDetailIntent::Loaded(Resource::Success(candidato)) => CandidatoDetailState {
                is_loading: false,
                error_message: None,
                candidato: Some(candidato),
            },
            CandidatoDetailIntent::Loaded(Resource::Error { message }) => CandidatoDetailState {
                is_loading: false,
                error_message: Some(message),
                candidato: None,
            },
            CandidatoDetailIntent::Loaded(Resource::Loading) => state,
        }
    }
}
