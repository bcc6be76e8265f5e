use std::collections::BTreeMap;

use crate::models::{CandidatoItem, CargoNombre, PuedeVotarResponse, User};
use crate::ui::mvi::UiState;

/// Whether the voter may still vote for an office.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EstadoCargo {
    pub puede_votar: bool,
    pub ya_voto: bool,
}

impl Default for EstadoCargo {
    fn default() -> Self {
        Self {
            puede_votar: true,
            ya_voto: false,
        }
    }
}

impl From<PuedeVotarResponse> for EstadoCargo {
    fn from(response: PuedeVotarResponse) -> Self {
        Self {
            puede_votar: response.puede_votar,
            ya_voto: response.ya_voto,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct VotarState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub success_message: Option<String>,
    pub cargo_seleccionado: Option<CargoNombre>,
    pub candidatos: BTreeMap<CargoNombre, Vec<CandidatoItem>>,
    pub estado: BTreeMap<CargoNombre, EstadoCargo>,
    pub candidato_seleccionado: Option<CandidatoItem>,
    pub mostrar_confirmacion: bool,
    pub perfil: Option<User>,
    pub search_query: String,
}

impl UiState for VotarState {}

impl VotarState {
    /// Status for `cargo`; offices not checked yet are open.
    pub fn estado_de(&self, cargo: CargoNombre) -> EstadoCargo {
        self.estado.get(&cargo).copied().unwrap_or_default()
    }

    pub fn candidatos_de(&self, cargo: CargoNombre) -> &[CandidatoItem] {
        self.candidatos.get(&cargo).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Candidates to list for `cargo` after the search filter.
    ///
    /// Diputado candidates are further restricted to the voter's region once
    /// the profile is known.
    pub fn candidatos_visibles(&self, cargo: CargoNombre) -> Vec<&CandidatoItem> {
        let region_id = match cargo {
            CargoNombre::Diputado => self.perfil.as_ref().map(|perfil| perfil.region.id),
            CargoNombre::Presidente | CargoNombre::Senador => None,
        };

        self.candidatos_de(cargo)
            .iter()
            .filter(|candidato| region_id.map_or(true, |id| candidato.region.id() == Some(id)))
            .filter(|candidato| candidato.matches(&self.search_query))
            .collect()
    }
}
