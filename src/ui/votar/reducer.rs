use crate::models::CargoNombre;
use crate::repository::Resource;
use crate::ui::mvi::Reducer;
use crate::ui::votar::intent::VotarIntent;
use crate::ui::votar::state::VotarState;

/// Shown when the server confirms a vote without a message.
pub const VOTO_REGISTRADO: &str = "Voto registrado exitosamente";

pub struct VotarReducer;

impl Reducer for VotarReducer {
    type State = VotarState;
    type Intent = VotarIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            VotarIntent::CandidatosStarted => VotarState {
                is_loading: true,
                ..state
            },
            VotarIntent::CandidatosLoaded { cargo, result } => match result {
                Resource::Success(lista) => {
                    let mut candidatos = state.candidatos;
                    candidatos.insert(cargo, lista);
                    VotarState {
                        candidatos,
                        ..state
                    }
                }
                // Only the first office is fatal for the ballot.
                Resource::Error { message } if cargo == CargoNombre::Presidente => VotarState {
                    is_loading: false,
                    error_message: Some(message),
                    ..state
                },
                Resource::Error { .. } | Resource::Loading => state,
            },
            VotarIntent::CandidatosFinished => VotarState {
                is_loading: false,
                ..state
            },
            VotarIntent::EstadoLoaded { cargo, estado } => {
                let mut estados = state.estado;
                estados.insert(cargo, estado.into());
                VotarState {
                    estado: estados,
                    ..state
                }
            }
            VotarIntent::PerfilLoaded(perfil) => VotarState {
                perfil: Some(perfil),
                ..state
            },
            VotarIntent::SearchChanged(search_query) => VotarState {
                search_query,
                ..state
            },
            VotarIntent::CandidatoSeleccionado(candidato) => VotarState {
                candidato_seleccionado: Some(candidato),
                mostrar_confirmacion: true,
                error_message: None,
                ..state
            },
            VotarIntent::ConfirmacionCancelada => VotarState {
                candidato_seleccionado: None,
                mostrar_confirmacion: false,
                ..state
            },
            VotarIntent::CargoSeleccionado(cargo) => VotarState {
                cargo_seleccionado: Some(cargo),
                ..state
            },
            VotarIntent::LimpiarMensajeExito => VotarState {
                success_message: None,
                ..state
            },
            VotarIntent::LimpiarError => VotarState {
                error_message: None,
                ..state
            },
            VotarIntent::VotoStarted => VotarState {
                is_loading: true,
                error_message: None,
                success_message: None,
                ..state
            },
            VotarIntent::VotoRegistrado { message } => {
                let message = if message.trim().is_empty() {
                    VOTO_REGISTRADO.to_string()
                } else {
                    message
                };
                VotarState {
                    is_loading: false,
                    success_message: Some(message),
                    error_message: None,
                    candidato_seleccionado: None,
                    mostrar_confirmacion: false,
                    ..state
                }
            }
            VotarIntent::VotoFallido { message } => VotarState {
                is_loading: false,
                error_message: Some(message),
                success_message: None,
                mostrar_confirmacion: false,
                ..state
            },
        }
    }
}
