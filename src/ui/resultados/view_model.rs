use crate::repository::{Resource, VotosRepository};
use crate::ui::resultados::intent::ResultadosIntent;
use crate::ui::resultados::reducer::ResultadosReducer;
use crate::ui::runtime::{Store, TaskScope, ViewModel};

pub struct ResultadosViewModel {
    store: Store<ResultadosReducer>,
    scope: TaskScope,
    repository: VotosRepository,
}

impl ResultadosViewModel {
    pub fn new(repository: VotosRepository) -> Self {
        Self {
            store: Store::default(),
            scope: TaskScope::new(),
            repository,
        }
    }

    pub fn load_resultados(&self, cargo: Option<String>, region: Option<i64>) {
        self.store.dispatch(ResultadosIntent::ResultadosStarted {
            cargo: cargo.clone(),
            region,
        });

        let store = self.store.clone();
        let repository = self.repository.clone();
        self.scope.launch(async move {
            let result = repository.resultados(cargo.as_deref(), region).await;
            store.dispatch(ResultadosIntent::ResultadosLoaded(result));
        });
    }

    pub fn load_resultados_por_partido(&self, cargo: Option<String>) {
        self.store.dispatch(ResultadosIntent::PorPartidoStarted {
            cargo: cargo.clone(),
        });

        let store = self.store.clone();
        let repository = self.repository.clone();
        self.scope.launch(async move {
            let result = repository.resultados_por_partido(cargo.as_deref()).await;
            store.dispatch(ResultadosIntent::PorPartidoLoaded(result));
        });
    }

    /// Failures leave the previous figures in place.
    pub fn load_estadisticas(&self) {
        let store = self.store.clone();
        let repository = self.repository.clone();
        self.scope.launch(async move {
            match repository.estadisticas().await {
                Resource::Success(estadisticas) => {
                    store.dispatch(ResultadosIntent::EstadisticasLoaded(estadisticas));
                }
                Resource::Error { message } => {
                    tracing::debug!(%message, "statistics unavailable");
                }
                Resource::Loading => {}
            }
        });
    }

    /// Switch between candidate and party totals, reloading with the
    /// current filters.
    pub fn toggle_vista(&self) {
        self.store.dispatch(ResultadosIntent::VistaAlternada);

        let state = self.store.snapshot();
        if state.mostrar_por_partido {
            self.load_resultados_por_partido(state.cargo_filtro);
        } else {
            self.load_resultados(state.cargo_filtro, state.region_filtro);
        }
    }
}

impl ViewModel for ResultadosViewModel {
    type Reducer = ResultadosReducer;

    fn store(&self) -> &Store<ResultadosReducer> {
        &self.store
    }

    fn scope(&self) -> &TaskScope {
        &self.scope
    }
}
