use crate::api::CandidatoQuery;
use crate::repository::CandidatosRepository;
use crate::ui::home::intent::HomeIntent;
use crate::ui::home::reducer::HomeReducer;
use crate::ui::runtime::{Store, TaskScope, ViewModel};

pub struct HomeViewModel {
    store: Store<HomeReducer>,
    scope: TaskScope,
    repository: CandidatosRepository,
}

impl HomeViewModel {
    pub fn new(repository: CandidatosRepository) -> Self {
        Self {
            store: Store::default(),
            scope: TaskScope::new(),
            repository,
        }
    }

    /// Fetch every page of the unfiltered listing.
    pub fn load_candidatos(&self) {
        self.load_filtered(CandidatoQuery::default());
    }

    pub fn load_filtered(&self, filters: CandidatoQuery) {
        self.store.dispatch(HomeIntent::LoadStarted);

        let store = self.store.clone();
        let repository = self.repository.clone();
        self.scope.launch(async move {
            let result = repository.all_candidatos(&filters).await;
            store.dispatch(HomeIntent::Loaded(result));
        });
    }
}

impl ViewModel for HomeViewModel {
    type Reducer = HomeReducer;

    fn store(&self) -> &Store<HomeReducer> {
        &self.store
    }

    fn scope(&self) -> &TaskScope {
        &self.scope
    }
}
