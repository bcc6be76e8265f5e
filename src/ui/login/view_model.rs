use std::sync::Arc;

use crate::models::AuthResponse;
use crate::repository::{AuthRepository, Resource};
use crate::session::TokenStore;
use crate::ui::login::intent::LoginIntent;
use crate::ui::login::reducer::LoginReducer;
use crate::ui::runtime::{Store, TaskScope, ViewModel};

pub struct LoginViewModel {
    store: Store<LoginReducer>,
    scope: TaskScope,
    repository: AuthRepository,
    tokens: Arc<dyn TokenStore>,
}

impl LoginViewModel {
    pub fn new(repository: AuthRepository, tokens: Arc<dyn TokenStore>) -> Self {
        Self {
            store: Store::default(),
            scope: TaskScope::new(),
            repository,
            tokens,
        }
    }

    pub fn login(&self, dni: &str, password: &str) {
        self.store.dispatch(LoginIntent::Submitted);

        let store = self.store.clone();
        let repository = self.repository.clone();
        let tokens = Arc::clone(&self.tokens);
        let dni = dni.trim().to_string();
        let password = password.to_string();
        self.scope.launch(async move {
            let result = repository.login(&dni, &password).await;
            store.dispatch(LoginIntent::Completed(persist_session(
                tokens.as_ref(),
                result,
            )));
        });
    }
}

impl ViewModel for LoginViewModel {
    type Reducer = LoginReducer;

    fn store(&self) -> &Store<LoginReducer> {
        &self.store
    }

    fn scope(&self) -> &TaskScope {
        &self.scope
    }
}

/// Store the tokens of a successful login or registration.
pub(crate) fn persist_session(
    tokens: &dyn TokenStore,
    result: Resource<AuthResponse>,
) -> Resource<()> {
    match result {
        Resource::Success(response) => {
            let access = response.tokens.access.as_str();
            let refresh = response.tokens.refresh.as_deref();
            match tokens.save_tokens(access, refresh) {
                Ok(()) => {
                    tracing::info!(user_id = response.user.id, "session started");
                    Resource::Success(())
                }
                Err(err) => {
                    tracing::error!(error = %err, "failed to persist session tokens");
                    Resource::error(format!("No se pudo guardar la sesión: {err}"))
                }
            }
        }
        Resource::Error { message } => Resource::Error { message },
        Resource::Loading => Resource::Loading,
    }
}
