use crate::api::ApiClient;
use crate::models::{
    AuthResponse, DniValidationRequest, DniValidationResponse, LoginRequest, Region,
    RegisterRequest, User,
};

use super::normalize::normalize;
use super::resource::Resource;

const LOGIN_FAILED: &str = "Credenciales inválidas";
const REGISTER_FAILED: &str = "No se pudo completar el registro";
const DNI_NOT_FOUND: &str = "DNI no encontrado";
const REGIONES_FAILED: &str = "Error al cargar regiones";
const PERFIL_FAILED: &str = "Error al cargar el perfil";

/// Authentication and account calls.
#[derive(Clone)]
pub struct AuthRepository {
    api: ApiClient,
}

impl AuthRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn login(&self, dni: &str, password: &str) -> Resource<AuthResponse> {
        let request = LoginRequest {
            dni: dni.to_string(),
            password: password.to_string(),
        };
        normalize(self.api.login(&request).await, LOGIN_FAILED)
    }

    pub async fn register(
        &self,
        dni: &str,
        region_id: i64,
        password: &str,
    ) -> Resource<AuthResponse> {
        let request = RegisterRequest {
            dni: dni.to_string(),
            region_id,
            password: password.to_string(),
        };
        normalize(self.api.register(&request).await, REGISTER_FAILED)
    }

    pub async fn validate_dni(&self, dni: &str) -> Resource<DniValidationResponse> {
        let request = DniValidationRequest {
            dni: dni.to_string(),
        };
        normalize(self.api.validate_dni(&request).await, DNI_NOT_FOUND)
    }

    pub async fn regiones(&self) -> Resource<Vec<Region>> {
        normalize(self.api.regiones().await, REGIONES_FAILED)
    }

    pub async fn perfil(&self) -> Resource<User> {
        normalize(self.api.perfil().await, PERFIL_FAILED)
    }
}
