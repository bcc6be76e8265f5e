use crate::models::{User, Voto};
use crate::repository::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum PerfilIntent {
    PerfilStarted,
    PerfilLoaded(Resource<User>),
    VotosStarted,
    VotosLoaded(Resource<Vec<Voto>>),
    SesionCerrada,
}

impl Intent for PerfilIntent {}
