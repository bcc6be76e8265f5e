use crate::models::{User, Voto};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PerfilState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub perfil: Option<User>,
    pub mis_votos: Vec<Voto>,
    pub is_loading_votos: bool,
}

impl UiState for PerfilState {}
