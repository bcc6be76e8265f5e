//! `usuarios/` endpoints.

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{
    AuthResponse, DniValidationRequest, DniValidationResponse, LoginRequest, Region,
    RegisterRequest, User,
};

impl ApiClient {
    /// `POST usuarios/login/`
    pub async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(self.endpoint("usuarios/login/")?, request).await
    }

    /// `POST usuarios/registro/`
    pub async fn register(&self, request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
        self.post_json(self.endpoint("usuarios/registro/")?, request).await
    }

    /// `POST usuarios/validar-dni/`
    pub async fn validate_dni(
        &self,
        request: &DniValidationRequest,
    ) -> Result<DniValidationResponse, ApiError> {
        self.post_json(self.endpoint("usuarios/validar-dni/")?, request).await
    }

    /// `GET usuarios/regiones/`
    pub async fn regiones(&self) -> Result<Vec<Region>, ApiError> {
        self.get_json(self.endpoint("usuarios/regiones/")?).await
    }

    /// `GET usuarios/perfil/` (bearer auth)
    pub async fn perfil(&self) -> Result<User, ApiError> {
        self.get_json(self.endpoint("usuarios/perfil/")?).await
    }
}
