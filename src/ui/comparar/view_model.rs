use crate::api::CandidatoQuery;
use crate::repository::CandidatosRepository;
use crate::ui::comparar::intent::CompararIntent;
use crate::ui::comparar::reducer::CompararReducer;
use crate::ui::comparar::state::Slot;
use crate::ui::runtime::{Store, TaskScope, ViewModel};

/// Side-by-side comparison of two candidates.
pub struct CompararViewModel {
    store: Store<CompararReducer>,
    scope: TaskScope,
    repository: CandidatosRepository,
}

impl CompararViewModel {
    pub fn new(repository: CandidatosRepository) -> Self {
        Self {
            store: Store::default(),
            scope: TaskScope::new(),
            repository,
        }
    }

    pub fn cargar_lista(&self) {
        self.store.dispatch(CompararIntent::ListaStarted);

        let store = self.store.clone();
        let repository = self.repository.clone();
        self.scope.launch(async move {
            let result = repository.all_candidatos(&CandidatoQuery::default()).await;
            store.dispatch(CompararIntent::ListaLoaded(result));
        });
    }

    pub fn cargar_candidato(&self, slot: Slot, id: i64) {
        self.store.dispatch(CompararIntent::CandidatoStarted { slot, id });

        let store = self.store.clone();
        let repository = self.repository.clone();
        self.scope.launch(async move {
            let result = repository.candidato_detail(id).await;
            store.dispatch(CompararIntent::CandidatoLoaded { slot, id, result });
        });
    }

    pub fn limpiar(&self) {
        self.store.dispatch(CompararIntent::Limpiar);
    }

    pub fn limpiar_slot(&self, slot: Slot) {
        self.store.dispatch(CompararIntent::LimpiarSlot(slot));
    }
}

impl ViewModel for CompararViewModel {
    type Reducer = CompararReducer;

    fn store(&self) -> &Store<CompararReducer> {
        &self.store
    }

    fn scope(&self) -> &TaskScope {
        &self.scope
    }
}
