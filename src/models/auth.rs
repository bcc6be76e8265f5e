use serde::{Deserialize, Serialize};

use super::reference::Region;

/// Account role as sent by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum Rol {
    Votante,
    Invitado,
    Other(String),
}

impl From<String> for Rol {
    fn from(value: String) -> Self {
        match value.as_str() {
            "votante" => Rol::Votante,
            "invitado" => Rol::Invitado,
            _ => Rol::Other(value),
        }
    }
}

impl Rol {
    pub fn as_str(&self) -> &str {
        match self {
            Rol::Votante => "votante",
            Rol::Invitado => "invitado",
            Rol::Other(other) => other,
        }
    }
}

/// Registered user; also the shape of `usuarios/perfil/`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct User {
    pub id: i64,
    pub dni: String,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub nombre_completo: String,
    pub region: Region,
    pub rol: Rol,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub is_staff: bool,
    pub created_at: String,
    #[serde(default)]
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

impl User {
    /// Only registered voters may vote; guests browse.
    pub fn puede_votar(&self) -> bool {
        self.rol == Rol::Votante
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthTokens {
    pub access: String,
    #[serde(default)]
    pub refresh: Option<String>,
}

/// Response of both login and registration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AuthResponse {
    pub user: User,
    pub tokens: AuthTokens,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub dni: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub dni: String,
    pub region_id: i64,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct DniValidationRequest {
    pub dni: String,
}

/// Identity data returned when a DNI is checked before registering.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DniValidationResponse {
    pub dni: String,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
}
