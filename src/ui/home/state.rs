use crate::models::{CandidatoItem, CargoNombre};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct HomeState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub candidatos: Vec<CandidatoItem>,
}

impl UiState for HomeState {}

impl HomeState {
    /// Candidates running for `cargo`, in listing order.
    pub fn por_cargo(&self, cargo: CargoNombre) -> Vec<&CandidatoItem> {
        self.candidatos
            .iter()
            .filter(|candidato| candidato.cargo.nombre() == Some(cargo))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Cargo, Partido, RegionField};

    fn candidato(id: i64, cargo: &str) -> CandidatoItem {
        CandidatoItem {
            id,
            nombre: "Ana".into(),
            apellido_paterno: "Soto".into(),
            apellido_materno: "Ruiz".into(),
            nombre_completo: "Ana Soto Ruiz".into(),
            partido: Partido {
                id: 1,
                nombre_partido: "Partido Uno".into(),
                sigla: "PU".into(),
                logo_url: None,
            },
            cargo: Cargo {
                id: 1,
                nombre_cargo: cargo.into(),
            },
            region: RegionField::Absent,
            foto_url: None,
            total_votos: None,
        }
    }

    #[test]
    fn groups_by_office_ignoring_case_and_gender() {
        let state = HomeState {
            candidatos: vec![
                candidato(1, "Presidente"),
                candidato(2, "DIPUTADA"),
                candidato(3, "diputado"),
                candidato(4, "Alcalde"),
            ],
            ..HomeState::default()
        };

        let diputados: Vec<i64> = state
            .por_cargo(CargoNombre::Diputado)
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(diputados, vec![2, 3]);
        assert_eq!(state.por_cargo(CargoNombre::Presidente).len(), 1);
        assert!(state.por_cargo(CargoNombre::Senador).is_empty());
    }
}
