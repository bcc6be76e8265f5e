use crate::models::{DniValidationResponse, Region};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegisterState {
    pub is_loading: bool,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
    /// Options for the region picker.
    pub regiones: Vec<Region>,
    /// Identity returned by the DNI lookup, shown before submitting.
    pub dni_validation: Option<DniValidationResponse>,
}

impl UiState for RegisterState {}
