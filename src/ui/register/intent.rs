use crate::models::{DniValidationResponse, Region};
use crate::repository::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum RegisterIntent {
    Submitted,
    Completed(Resource<()>),
    RegionesLoaded(Resource<Vec<Region>>),
    DniValidationStarted,
    DniValidated(Resource<DniValidationResponse>),
    ClearDniValidation,
}

impl Intent for RegisterIntent {}
