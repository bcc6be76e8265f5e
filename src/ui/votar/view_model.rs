use crate::api::CandidatoQuery;
use crate::models::CargoNombre;
use crate::repository::{AuthRepository, CandidatosRepository, Resource, VotosRepository};
use crate::ui::runtime::{Store, TaskScope, ViewModel};
use crate::ui::votar::intent::VotarIntent;
use crate::ui::votar::reducer::VotarReducer;

/// Async work of the ballot screen, shared with the tasks it launches.
#[derive(Clone)]
struct Ballot {
    store: Store<VotarReducer>,
    candidatos: CandidatosRepository,
    votos: VotosRepository,
    auth: AuthRepository,
}

impl Ballot {
    async fn load_candidatos(&self) {
        self.store.dispatch(VotarIntent::CandidatosStarted);

        for &cargo in CargoNombre::all() {
            let result = self
                .candidatos
                .all_candidatos(&CandidatoQuery::cargo(cargo))
                .await;
            let fatal = cargo == CargoNombre::Presidente && !result.is_success();
            self.store.dispatch(VotarIntent::CandidatosLoaded { cargo, result });
            if fatal {
                return;
            }
        }

        self.store.dispatch(VotarIntent::CandidatosFinished);
    }

    async fn verificar_estado_votos(&self) {
        for &cargo in CargoNombre::all() {
            match self.votos.puede_votar(cargo).await {
                Resource::Success(estado) => {
                    self.store.dispatch(VotarIntent::EstadoLoaded { cargo, estado });
                }
                Resource::Error { message } => {
                    tracing::debug!(%cargo, %message, "vote status check failed");
                }
                Resource::Loading => {}
            }
        }
    }

    async fn load_perfil(&self) {
        if let Resource::Success(perfil) = self.auth.perfil().await {
            self.store.dispatch(VotarIntent::PerfilLoaded(perfil));
        }
    }

    async fn votar(&self, candidato_id: i64) {
        match self.votos.votar(candidato_id).await {
            Resource::Success(response) => {
                tracing::info!(candidato_id, "vote registered");
                self.verificar_estado_votos().await;
                self.load_candidatos().await;
                self.store.dispatch(VotarIntent::VotoRegistrado {
                    message: response.message,
                });
            }
            Resource::Error { message } => {
                self.store.dispatch(VotarIntent::VotoFallido { message });
            }
            Resource::Loading => {}
        }
    }
}

pub struct VotarViewModel {
    ballot: Ballot,
    scope: TaskScope,
}

impl VotarViewModel {
    pub fn new(
        candidatos: CandidatosRepository,
        votos: VotosRepository,
        auth: AuthRepository,
    ) -> Self {
        Self {
            ballot: Ballot {
                store: Store::default(),
                candidatos,
                votos,
                auth,
            },
            scope: TaskScope::new(),
        }
    }

    /// Load the three offices in ballot order.
    pub fn load_candidatos(&self) {
        let ballot = self.ballot.clone();
        self.scope.launch(async move { ballot.load_candidatos().await });
    }

    pub fn verificar_estado_votos(&self) {
        let ballot = self.ballot.clone();
        self.scope.launch(async move { ballot.verificar_estado_votos().await });
    }

    pub fn load_perfil(&self) {
        let ballot = self.ballot.clone();
        self.scope.launch(async move { ballot.load_perfil().await });
    }

    pub fn set_search_query(&self, query: &str) {
        self.ballot.store.dispatch(VotarIntent::SearchChanged(query.to_string()));
    }

    /// Select a candidate by id among the loaded ones and ask for
    /// confirmation. Returns false when the id is not loaded.
    pub fn seleccionar_candidato(&self, candidato_id: i64) -> bool {
        let state = self.ballot.store.snapshot();
        let found = state
            .candidatos
            .values()
            .flatten()
            .find(|candidato| candidato.id == candidato_id)
            .cloned();

        match found {
            Some(candidato) => {
                self.ballot.store.dispatch(VotarIntent::CandidatoSeleccionado(candidato));
                true
            }
            None => false,
        }
    }

    pub fn cancelar_confirmacion(&self) {
        self.ballot.store.dispatch(VotarIntent::ConfirmacionCancelada);
    }

    pub fn seleccionar_cargo(&self, cargo: CargoNombre) {
        self.ballot.store.dispatch(VotarIntent::CargoSeleccionado(cargo));
    }

    pub fn limpiar_mensaje_exito(&self) {
        self.ballot.store.dispatch(VotarIntent::LimpiarMensajeExito);
    }

    pub fn limpiar_error(&self) {
        self.ballot.store.dispatch(VotarIntent::LimpiarError);
    }

    /// Cast the vote for the selected candidate.
    ///
    /// On success the vote status and the candidate lists are refreshed
    /// before the success message is shown.
    pub fn confirmar_voto(&self) {
        let Some(candidato) = self.ballot.store.snapshot().candidato_seleccionado else {
            return;
        };
        self.ballot.store.dispatch(VotarIntent::VotoStarted);

        let ballot = self.ballot.clone();
        self.scope.launch(async move { ballot.votar(candidato.id).await });
    }
}

impl ViewModel for VotarViewModel {
    type Reducer = VotarReducer;

    fn store(&self) -> &Store<VotarReducer> {
        &self.ballot.store
    }

    fn scope(&self) -> &TaskScope {
        &self.scope
    }
}
