use std::sync::Arc;

use crate::repository::{AuthRepository, VotosRepository};
use crate::session::{SessionError, TokenStore};
use crate::ui::perfil::intent::PerfilIntent;
use crate::ui::perfil::reducer::PerfilReducer;
use crate::ui::runtime::{Store, TaskScope, ViewModel};

pub struct PerfilViewModel {
    store: Store<PerfilReducer>,
    scope: TaskScope,
    auth: AuthRepository,
    votos: VotosRepository,
    tokens: Arc<dyn TokenStore>,
}

impl PerfilViewModel {
    pub fn new(
        auth: AuthRepository,
        votos: VotosRepository,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            store: Store::default(),
            scope: TaskScope::new(),
            auth,
            votos,
            tokens,
        }
    }

    pub fn load_perfil(&self) {
        self.store.dispatch(PerfilIntent::PerfilStarted);

        let store = self.store.clone();
        let auth = self.auth.clone();
        self.scope.launch(async move {
            let result = auth.perfil().await;
            store.dispatch(PerfilIntent::PerfilLoaded(result));
        });
    }

    pub fn load_mis_votos(&self) {
        self.store.dispatch(PerfilIntent::VotosStarted);

        let store = self.store.clone();
        let votos = self.votos.clone();
        self.scope.launch(async move {
            let result = votos.mis_votos().await;
            store.dispatch(PerfilIntent::VotosLoaded(result));
        });
    }

    pub fn refrescar(&self) {
        self.load_perfil();
        self.load_mis_votos();
    }

    /// Forget both tokens and reset the screen. Pending loads are dropped.
    pub fn logout(&self) -> Result<(), SessionError> {
        self.scope.abort_all();
        self.tokens.clear()?;
        self.store.dispatch(PerfilIntent::SesionCerrada);
        tracing::info!("session closed");
        Ok(())
    }
}

impl ViewModel for PerfilViewModel {
    type Reducer = PerfilReducer;

    fn store(&self) -> &Store<PerfilReducer> {
        &self.store
    }

    fn scope(&self) -> &TaskScope {
        &self.scope
    }
}
