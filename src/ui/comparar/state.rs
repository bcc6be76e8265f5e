use crate::models::{CandidatoDetail, CandidatoItem};
use crate::ui::mvi::UiState;

/// Side of the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Primero,
    Segundo,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompararState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub primero: Option<CandidatoDetail>,
    pub segundo: Option<CandidatoDetail>,
    pub primero_id: Option<i64>,
    pub segundo_id: Option<i64>,
    /// Picker options.
    pub lista_candidatos: Vec<CandidatoItem>,
    pub is_loading_candidatos: bool,
}

impl UiState for CompararState {}

/// Counts shown for one candidate in the side-by-side view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Resumen {
    pub denuncias: usize,
    pub proyectos: usize,
    pub propuestas: usize,
    pub total_votos: u64,
}

impl From<&CandidatoDetail> for Resumen {
    fn from(detail: &CandidatoDetail) -> Self {
        Self {
            denuncias: detail.denuncias.len(),
            proyectos: detail.proyectos.len(),
            propuestas: detail.propuestas.len(),
            total_votos: detail.total_votos.unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Comparacion {
    pub primero: Resumen,
    pub segundo: Resumen,
}

impl CompararState {
    pub fn slot(&self, slot: Slot) -> Option<&CandidatoDetail> {
        match slot {
            Slot::Primero => self.primero.as_ref(),
            Slot::Segundo => self.segundo.as_ref(),
        }
    }

    /// Only available once both slots are loaded.
    pub fn diferencias(&self) -> Option<Comparacion> {
        Some(Comparacion {
            primero: self.primero.as_ref()?.into(),
            segundo: self.segundo.as_ref()?.into(),
        })
    }

    pub(crate) fn with_slot(
        self,
        slot: Slot,
        id: Option<i64>,
        detail: Option<CandidatoDetail>,
    ) -> Self {
        match slot {
            Slot::Primero => Self {
                primero_id: id,
                primero: detail,
                ..self
            },
            Slot::Segundo => Self {
                segundo_id: id,
                segundo: detail,
                ..self
            },
        }
    }
}
