use crate::models::{Estadisticas, ResultadoGeneral, ResultadoPorPartido};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResultadosState {
    pub is_loading: bool,
    pub error_message: Option<String>,
    pub resultados: Vec<ResultadoGeneral>,
    pub resultados_por_partido: Vec<ResultadoPorPartido>,
    pub estadisticas: Option<Estadisticas>,
    pub cargo_filtro: Option<String>,
    pub region_filtro: Option<i64>,
    /// Party totals instead of per-candidate totals.
    pub mostrar_por_partido: bool,
}

impl UiState for ResultadosState {}

impl ResultadosState {
    /// Nothing recorded yet for the active view. Not an error.
    pub fn is_empty(&self) -> bool {
        if self.is_loading || self.error_message.is_some() {
            return false;
        }
        if self.mostrar_por_partido {
            self.resultados_por_partido.is_empty()
        } else {
            self.resultados.is_empty()
        }
    }
}
