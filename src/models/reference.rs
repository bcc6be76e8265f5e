use serde::Deserialize;

/// Reference region (departamento).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Region {
    pub id: i64,
    pub nombre_region: String,
}

/// Elected office.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Cargo {
    pub id: i64,
    pub nombre_cargo: String,
}

impl Cargo {
    pub fn nombre(&self) -> Option<CargoNombre> {
        CargoNombre::parse(&self.nombre_cargo)
    }
}

/// Political party.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Partido {
    pub id: i64,
    pub nombre_partido: String,
    pub sigla: String,
    #[serde(default)]
    pub logo_url: Option<String>,
}

/// The three offices a voter casts one vote each for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CargoNombre {
    Presidente,
    Senador,
    Diputado,
}

impl CargoNombre {
    /// Name as the backend spells it in paths and filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Presidente => "Presidente",
            Self::Senador => "Senador",
            Self::Diputado => "Diputado",
        }
    }

    /// All offices in ballot order.
    pub fn all() -> &'static [CargoNombre] {
        &[Self::Presidente, Self::Senador, Self::Diputado]
    }

    /// Case-insensitive; "Diputada" counts as Diputado.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "presidente" => Some(Self::Presidente),
            "senador" => Some(Self::Senador),
            "diputado" | "diputada" => Some(Self::Diputado),
            _ => None,
        }
    }
}

impl std::fmt::Display for CargoNombre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
