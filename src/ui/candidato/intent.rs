use crate::models::CandidatoDetail;
use crate::repository::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CandidatoDetailIntent {
    LoadStarted,
    Loaded(Resource<CandidatoDetail>),
}

impl Intent for CandidatoDetailIntent {}
