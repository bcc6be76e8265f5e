use serde::Deserialize;

use super::reference::{Cargo, Partido};
use super::region::RegionField;

/// One page of a paginated listing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Page<T> {
    pub count: u64,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Candidate as listed (no history).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandidatoItem {
    pub id: i64,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub nombre_completo: String,
    pub partido: Partido,
    pub cargo: Cargo,
    #[serde(default)]
    pub region: RegionField,
    #[serde(default)]
    pub foto_url: Option<String>,
    #[serde(default)]
    pub total_votos: Option<u64>,
}

impl CandidatoItem {
    /// Case-insensitive substring match on name, party name or acronym.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.nombre_completo.to_lowercase().contains(&query)
            || self.partido.nombre_partido.to_lowercase().contains(&query)
            || self.partido.sigla.to_lowercase().contains(&query)
    }
}

/// Candidate with the three history lists.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CandidatoDetail {
    pub id: i64,
    pub nombre: String,
    pub apellido_paterno: String,
    pub apellido_materno: String,
    pub nombre_completo: String,
    pub partido: Partido,
    pub cargo: Cargo,
    #[serde(default)]
    pub region: RegionField,
    #[serde(default)]
    pub foto_url: Option<String>,
    #[serde(default)]
    pub denuncias: Vec<Antecedente>,
    #[serde(default)]
    pub proyectos: Vec<Antecedente>,
    #[serde(default)]
    pub propuestas: Vec<Antecedente>,
    #[serde(default)]
    pub total_votos: Option<u64>,
    #[serde(default)]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TipoAntecedente {
    Denuncia,
    Proyecto,
    Propuesta,
    Other(String),
}

impl From<String> for TipoAntecedente {
    fn from(value: String) -> Self {
        match value.as_str() {
            "denuncia" => TipoAntecedente::Denuncia,
            "proyecto" => TipoAntecedente::Proyecto,
            "propuesta" => TipoAntecedente::Propuesta,
            _ => TipoAntecedente::Other(value),
        }
    }
}

impl TipoAntecedente {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Denuncia => "denuncia",
            Self::Proyecto => "proyecto",
            Self::Propuesta => "propuesta",
            Self::Other(other) => other,
        }
    }
}

/// A single history entry: allegation, bill or proposal.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Antecedente {
    pub id: i64,
    pub tipo: TipoAntecedente,
    pub titulo: String,
    pub descripcion: String,
    pub fecha: String,
    #[serde(default)]
    pub fuente_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}
