use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::auth::User;
use super::candidatos::CandidatoItem;
use super::reference::Cargo;

/// Office reference inside a vote: either the full record or just its name.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum CargoRef {
    Object(Cargo),
    Name(String),
}

impl CargoRef {
    pub fn nombre(&self) -> &str {
        match self {
            CargoRef::Object(cargo) => &cargo.nombre_cargo,
            CargoRef::Name(name) => name,
        }
    }
}

/// A cast vote.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Voto {
    pub id: i64,
    #[serde(default)]
    pub usuario: Option<User>,
    pub candidato: CandidatoItem,
    pub cargo: CargoRef,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct VotoRequest {
    pub candidato_id: i64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct VotoResponse {
    pub message: String,
    pub voto: Voto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct PuedeVotarResponse {
    pub puede_votar: bool,
    pub ya_voto: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PartidoResultado {
    pub sigla: String,
    pub nombre: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// Per-candidate tally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultadoGeneral {
    pub id: i64,
    pub nombre_completo: String,
    pub partido: PartidoResultado,
    pub cargo: String,
    #[serde(default)]
    pub region: Option<String>,
    pub total_votos: u64,
    #[serde(default)]
    pub foto_url: Option<String>,
}

/// Per-party tally.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResultadoPorPartido {
    pub id: i64,
    pub nombre_partido: String,
    pub sigla: String,
    #[serde(default)]
    pub logo_url: Option<String>,
    pub total_votos: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
pub struct Estadisticas {
    pub total_votos: u64,
    pub total_votantes: u64,
    pub total_candidatos: u64,
    #[serde(default)]
    pub votos_por_cargo: BTreeMap<String, u64>,
}
