use crate::repository::Resource;
use crate::ui::comparar::intent::CompararIntent;
use crate::ui::comparar::state::CompararState;
use crate::ui::mvi::Reducer;

pub struct CompararReducer;

impl Reducer for CompararReducer {
    type State = CompararState;
    type Intent = CompararIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            CompararIntent::ListaStarted => CompararState {
                is_loading_candidatos: true,
                ..state
            },
            CompararIntent::ListaLoaded(Resource::Success(lista_candidatos)) => CompararState {
                lista_candidatos,
                is_loading_candidatos: false,
                ..state
            },
            CompararIntent::ListaLoaded(_) => CompararState {
                is_loading_candidatos: false,
                ..state
            },
            CompararIntent::CandidatoStarted { slot, id } => {
                let detail = state.slot(slot).filter(|d| d.id == id).cloned();
                CompararState {
                    is_loading: true,
                    error_message: None,
                    ..state.with_slot(slot, Some(id), detail)
                }
            }
            CompararIntent::CandidatoLoaded { slot, id, result } => match result {
                Resource::Success(detail) => CompararState {
                    is_loading: false,
                    error_message: None,
                    ..state.with_slot(slot, Some(id), Some(detail))
                },
                Resource::Error { message } => CompararState {
                    is_loading: false,
                    error_message: Some(message),
                    ..state.with_slot(slot, Some(id), None)
                },
                Resource::Loading => state,
            },
            CompararIntent::Limpiar => CompararState::default(),
            CompararIntent::LimpiarSlot(slot) => state.with_slot(slot, None, None),
        }
    }
}
