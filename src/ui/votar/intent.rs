use crate::models::{CandidatoItem, CargoNombre, PuedeVotarResponse, User};
use crate::repository::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum VotarIntent {
    CandidatosStarted,
    CandidatosLoaded {
        cargo: CargoNombre,
        result: Resource<Vec<CandidatoItem>>,
    },
    CandidatosFinished,
    EstadoLoaded {
        cargo: CargoNombre,
        estado: PuedeVotarResponse,
    },
    PerfilLoaded(User),
    SearchChanged(String),
    CandidatoSeleccionado(CandidatoItem),
    ConfirmacionCancelada,
    CargoSeleccionado(CargoNombre),
    LimpiarMensajeExito,
    LimpiarError,
    VotoStarted,
    VotoRegistrado { message: String },
    VotoFallido { message: String },
}

impl Intent for VotarIntent {}
