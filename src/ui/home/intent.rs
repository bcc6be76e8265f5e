use crate::models::CandidatoItem;
use crate::repository::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum HomeIntent {
    LoadStarted,
    Loaded(Resource<Vec<CandidatoItem>>),
}

impl Intent for HomeIntent {}
