use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LoginState {
    pub is_loading: bool,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

impl UiState for LoginState {}
