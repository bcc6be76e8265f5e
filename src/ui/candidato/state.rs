use crate::models::CandidatoDetail;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CandidatoDetailState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub candidato: Option<CandidatoDetail>,
}

impl UiState for CandidatoDetailState {}
