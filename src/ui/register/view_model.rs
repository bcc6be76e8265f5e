use std::sync::Arc;

use crate::repository::AuthRepository;
use crate::session::TokenStore;
use crate::ui::login::persist_session;
use crate::ui::register::intent::RegisterIntent;
use crate::ui::register::reducer::RegisterReducer;
use crate::ui::runtime::{Store, TaskScope, ViewModel};

pub struct RegisterViewModel {
    store: Store<RegisterReducer>,
    scope: TaskScope,
    repository: AuthRepository,
    tokens: Arc<dyn TokenStore>,
}

impl RegisterViewModel {
    pub fn new(repository: AuthRepository, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            store: Store::default(),
            scope: TaskScope::new(),
            repository,
            tokens,
        }
    }

    pub fn register(&self, dni: &str, region_id: i64, password: &str) {
        self.store.dispatch(RegisterIntent::Submitted);

        let store = self.store.clone();
        let repository = self.repository.clone();
        let tokens = Arc::clone(&self.tokens);
        let dni = dni.trim().to_string();
        let password = password.to_string();
        self.scope.launch(async move {
            let result = repository.register(&dni, region_id, &password).await;
            store.dispatch(RegisterIntent::Completed(persist_session(
                tokens.as_ref(),
                result,
            )));
        });
    }

    pub fn load_regiones(&self) {
        let store = self.store.clone();
        let repository = self.repository.clone();
        self.scope.launch(async move {
            let result = repository.regiones().await;
            store.dispatch(RegisterIntent::RegionesLoaded(result));
        });
    }

    pub fn validate_dni(&self, dni: &str) {
        self.store.dispatch(RegisterIntent::DniValidationStarted);

        let store = self.store.clone();
        let repository = self.repository.clone();
        let dni = dni.trim().to_string();
        self.scope.launch(async move {
            let result = repository.validate_dni(&dni).await;
            store.dispatch(RegisterIntent::DniValidated(result));
        });
    }

    pub fn clear_dni_validation(&self) {
        self.store.dispatch(RegisterIntent::ClearDniValidation);
    }
}

impl ViewModel for RegisterViewModel {
    type Reducer = RegisterReducer;

    fn store(&self) -> &Store<RegisterReducer> {
        &self.store
    }

    fn scope(&self) -> &TaskScope {
        &self.scope
    }
}
