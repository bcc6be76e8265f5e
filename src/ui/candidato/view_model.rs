use crate::repository::CandidatosRepository;
use crate::ui::candidato::intent::CandidatoDetailIntent;
use crate::ui::candidato::reducer::CandidatoDetailReducer;
use crate::ui::runtime::{Store, TaskScope, ViewModel};

pub struct CandidatoDetailViewModel {
    store: Store<CandidatoDetailReducer>,
    scope: TaskScope,
    repository: CandidatosRepository,
}

impl CandidatoDetailViewModel {
    pub fn new(repository: CandidatosRepository) -> Self {
        Self {
            store: Store::default(),
            scope: TaskScope::new(),
            repository,
        }
    }

    pub fn load(&self, id: i64) {
        self.store.dispatch(CandidatoDetailIntent::LoadStarted);

        let store = self.store.clone();
        let repository = self.repository.clone();
        self.scope.launch(async move {
            let result = repository.candidato_detail(id).await;
            store.dispatch(CandidatoDetailIntent::Loaded(result));
        });
    }
}

impl ViewModel for CandidatoDetailViewModel {
    type Reducer = CandidatoDetailReducer;

    fn store(&self) -> &Store<CandidatoDetailReducer> {
        &self.store
    }

    fn scope(&self) -> &TaskScope {
        &self.scope
    }
}
