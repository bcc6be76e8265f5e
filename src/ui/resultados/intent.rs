use crate::models::{Estadisticas, ResultadoGeneral, ResultadoPorPartido};
use crate::repository::Resource;
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum ResultadosIntent {
    ResultadosStarted {
        cargo: Option<String>,
        region: Option<i64>,
    },
    ResultadosLoaded(Resource<Vec<ResultadoGeneral>>),
    PorPartidoStarted {
        cargo: Option<String>,
    },
    PorPartidoLoaded(Resource<Vec<ResultadoPorPartido>>),
    EstadisticasLoaded(Estadisticas),
    VistaAlternada,
}

impl Intent for ResultadosIntent {}
