use crate::repository::Resource;
use crate::ui::mvi::Reducer;
use crate::ui::perfil::intent::PerfilIntent;
use crate::ui::perfil::state::PerfilState;

pub struct PerfilReducer;

impl Reducer for PerfilReducer {
    type State = PerfilState;
    type Intent = PerfilIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            PerfilIntent::PerfilStarted => PerfilState {
                is_loading: true,
                error_message: None,
                ..state
            },
            PerfilIntent::PerfilLoaded(Resource::Success(perfil)) => PerfilState {
                is_loading: false,
                error_message: None,
                perfil: Some(perfil),
                ..state
            },
            PerfilIntent::PerfilLoaded(Resource::Error { message }) => PerfilState {
                is_loading: false,
                error_message: Some(message),
                perfil: None,
                ..state
            },
            PerfilIntent::VotosStarted => PerfilState {
                is_loading_votos: true,
                ..state
            },
            // A voter without votes and a failed lookup look the same.
            PerfilIntent::VotosLoaded(result) => PerfilState {
                is_loading_votos: false,
                mis_votos: result.into_data().unwrap_or_default(),
                ..state
            },
            PerfilIntent::SesionCerrada => PerfilState::default(),
            PerfilIntent::PerfilLoaded(Resource::Loading) => state,
        }
    }
}
