use crate::models::{CandidatoDetail, CandidatoItem};
use crate::repository::Resource;
use crate::ui::comparar::state::Slot;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CompararIntent {
    ListaStarted,
    ListaLoaded(Resource<Vec<CandidatoItem>>),
    CandidatoStarted {
        slot: Slot,
        id: i64,
    },
    CandidatoLoaded {
        slot: Slot,
        id: i64,
        result: Resource<CandidatoDetail>,
    },
    Limpiar,
    LimpiarSlot(Slot),
}

impl Intent for CompararIntent {}
