use crate::repository::Resource;
use crate::ui::mvi::Reducer;
use crate::ui::resultados::intent::ResultadosIntent;
use crate::ui::resultados::state::ResultadosState;

pub struct ResultadosReducer;

impl Reducer for ResultadosReducer {
    type State = ResultadosState;
    type Intent = ResultadosIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ResultadosIntent::ResultadosStarted { cargo, region } => ResultadosState {
                is_loading: true,
                error_message: None,
                cargo_filtro: cargo,
                region_filtro: region,
                ..state
            },
            ResultadosIntent::ResultadosLoaded(Resource::Success(resultados)) => ResultadosState {
                is_loading: false,
                resultados,
                ..state
            },
            ResultadosIntent::ResultadosLoaded(Resource::Error { message }) => ResultadosState {
                is_loading: false,
                error_message: Some(message),
                resultados: Vec::new(),
                ..state
            },
            ResultadosIntent::PorPartidoStarted { cargo } => ResultadosState {
                is_loading: true,
                error_message: None,
                cargo_filtro: cargo,
                mostrar_por_partido: true,
                ..state
            },
            ResultadosIntent::PorPartidoLoaded(Resource::Success(resultados_por_partido)) => {
                ResultadosState {
                    is_loading: false,
                    resultados_por_partido,
                    ..state
                }
            }
            ResultadosIntent::PorPartidoLoaded(Resource::Error { message }) => ResultadosState {
                is_loading: false,
                error_message: Some(message),
                resultados_por_partido: Vec::new(),
                ..state
            },
            ResultadosIntent::EstadisticasLoaded(estadisticas) => ResultadosState {
                estadisticas: Some(estadisticas),
                ..state
            },
            ResultadosIntent::VistaAlternada => ResultadosState {
                mostrar_por_partido: !state.mostrar_por_partido,
                ..state
            },
            ResultadosIntent::ResultadosLoaded(Resource::Loading)
            | ResultadosIntent::PorPartidoLoaded(Resource::Loading) => state,
        }
    }
}
