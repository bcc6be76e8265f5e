use crate::api::ApiClient;
use crate::models::{
    CargoNombre, Estadisticas, PuedeVotarResponse, ResultadoGeneral, ResultadoPorPartido, Voto,
    VotoResponse,
};

use super::normalize::normalize;
use super::resource::Resource;

const VOTAR_FAILED: &str = "No se pudo registrar el voto";
const MIS_VOTOS_FAILED: &str = "Error al cargar tus votos";
const PUEDE_VOTAR_FAILED: &str = "Error al verificar si puedes votar";
const RESULTADOS_FAILED: &str = "Error al cargar resultados";
const POR_PARTIDO_FAILED: &str = "Error al cargar resultados por partido";
const ESTADISTICAS_FAILED: &str = "Error al cargar estadísticas";

/// Voting and results calls. Vote-once-per-office is enforced by the backend.
#[derive(Clone)]
pub struct VotosRepository {
    api: ApiClient,
}

impl VotosRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub async fn votar(&self, candidato_id: i64) -> Resource<VotoResponse> {
        normalize(self.api.votar(candidato_id).await, VOTAR_FAILED)
    }

    pub async fn mis_votos(&self) -> Resource<Vec<Voto>> {
        normalize(self.api.mis_votos().await, MIS_VOTOS_FAILED)
    }

    pub async fn puede_votar(&self, cargo: CargoNombre) -> Resource<PuedeVotarResponse> {
        normalize(self.api.puede_votar(cargo.as_str()).await, PUEDE_VOTAR_FAILED)
    }

    pub async fn resultados(
        &self,
        cargo: Option<&str>,
        region: Option<i64>,
    ) -> Resource<Vec<ResultadoGeneral>> {
        normalize(self.api.resultados(cargo, region).await, RESULTADOS_FAILED)
    }

    pub async fn resultados_por_partido(
        &self,
        cargo: Option<&str>,
    ) -> Resource<Vec<ResultadoPorPartido>> {
        normalize(
            self.api.resultados_por_partido(cargo).await,
            POR_PARTIDO_FAILED,
        )
    }

    pub async fn estadisticas(&self) -> Resource<Estadisticas> {
        normalize(self.api.estadisticas().await, ESTADISTICAS_FAILED)
    }
}
