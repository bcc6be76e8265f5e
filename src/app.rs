//! Composition root: one API client, three repositories, and the view
//! models built on top of them.

use std::sync::Arc;

use crate::api::{ApiClient, ApiError};
use crate::config::Config;
use crate::repository::{AuthRepository, CandidatosRepository, VotosRepository};
use crate::session::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::ui::candidato::CandidatoDetailViewModel;
use crate::ui::comparar::CompararViewModel;
use crate::ui::home::HomeViewModel;
use crate::ui::login::LoginViewModel;
use crate::ui::perfil::PerfilViewModel;
use crate::ui::register::RegisterViewModel;
use crate::ui::resultados::ResultadosViewModel;
use crate::ui::votar::VotarViewModel;

pub struct App {
    api: ApiClient,
    tokens: Arc<dyn TokenStore>,
    auth: AuthRepository,
    candidatos: CandidatosRepository,
    votos: VotosRepository,
}

impl App {
    pub fn from_config(config: &Config, tokens: Arc<dyn TokenStore>) -> Result<Self, ApiError> {
        let api = ApiClient::new(&config.api, Arc::clone(&tokens))?;
        tracing::debug!(base_url = %api.base_url(), "api client ready");

        Ok(Self {
            auth: AuthRepository::new(api.clone()),
            candidatos: CandidatosRepository::new(api.clone()),
            votos: VotosRepository::new(api.clone()),
            api,
            tokens,
        })
    }

    /// Token store for `config`: the session file, or process memory when
    /// `ephemeral`.
    pub fn token_store(config: &Config, ephemeral: bool) -> Arc<dyn TokenStore> {
        if ephemeral {
            Arc::new(MemoryTokenStore::new())
        } else {
            Arc::new(FileTokenStore::new(config.session.resolved_token_path()))
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    pub fn tokens(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    pub fn auth(&self) -> &AuthRepository {
        &self.auth
    }

    pub fn candidatos(&self) -> &CandidatosRepository {
        &self.candidatos
    }

    pub fn votos(&self) -> &VotosRepository {
        &self.votos
    }

    pub fn login(&self) -> LoginViewModel {
        LoginViewModel::new(self.auth.clone(), Arc::clone(&self.tokens))
    }

    pub fn register(&self) -> RegisterViewModel {
        RegisterViewModel::new(self.auth.clone(), Arc::clone(&self.tokens))
    }

    pub fn home(&self) -> HomeViewModel {
        HomeViewModel::new(self.candidatos.clone())
    }

    pub fn candidato(&self) -> CandidatoDetailViewModel {
        CandidatoDetailViewModel::new(self.candidatos.clone())
    }

    pub fn comparar(&self) -> CompararViewModel {
        CompararViewModel::new(self.candidatos.clone())
    }

    pub fn votar(&self) -> VotarViewModel {
        VotarViewModel::new(
            self.candidatos.clone(),
            self.votos.clone(),
            self.auth.clone(),
        )
    }

    pub fn resultados(&self) -> ResultadosViewModel {
        ResultadosViewModel::new(self.votos.clone())
    }

    pub fn perfil(&self) -> PerfilViewModel {
        PerfilViewModel::new(
            self.auth.clone(),
            self.votos.clone(),
            Arc::clone(&self.tokens),
        )
    }
}
