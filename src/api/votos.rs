//! `votos/` endpoints.

use super::candidatos::append_query;
use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{
    Estadisticas, PuedeVotarResponse, ResultadoGeneral, ResultadoPorPartido, Voto, VotoRequest,
    VotoResponse,
};

impl ApiClient {
    /// `POST votos/votar/` (bearer auth)
    pub async fn votar(&self, candidato_id: i64) -> Result<VotoResponse, ApiError> {
        let request = VotoRequest { candidato_id };
        self.post_json(self.endpoint("votos/votar/")?, &request).await
    }

    /// `GET votos/mis-votos/` (bearer auth). An empty body is an empty list.
    pub async fn mis_votos(&self) -> Result<Vec<Voto>, ApiError> {
        self.get_json_or_default(self.endpoint("votos/mis-votos/")?).await
    }

    /// `GET votos/puede-votar/{cargo_nombre}/` (bearer auth)
    pub async fn puede_votar(&self, cargo_nombre: &str) -> Result<PuedeVotarResponse, ApiError> {
        let mut url = self.endpoint("votos/puede-votar/")?;
        url.path_segments_mut()
            .map_err(|_| ApiError::InvalidUrl(format!("cannot extend {}", self.base_url())))?
            .pop_if_empty()
            .push(cargo_nombre)
            .push("");
        self.get_json(url).await
    }

    /// `GET votos/resultados/?cargo=&region=`
    pub async fn resultados(
        &self,
        cargo: Option<&str>,
        region: Option<i64>,
    ) -> Result<Vec<ResultadoGeneral>, ApiError> {
        let mut url = self.endpoint("votos/resultados/")?;
        let mut pairs = Vec::new();
        if let Some(cargo) = cargo.filter(|c| !c.is_empty()) {
            pairs.push(("cargo", cargo.to_string()));
        }
        if let Some(region) = region {
            pairs.push(("region", region.to_string()));
        }
        append_query(&mut url, pairs);
        self.get_json(url).await
    }

    /// `GET votos/resultados/por-partido/?cargo=`
    pub async fn resultados_por_partido(
        &self,
        cargo: Option<&str>,
    ) -> Result<Vec<ResultadoPorPartido>, ApiError> {
        let mut url = self.endpoint("votos/resultados/por-partido/")?;
        if let Some(cargo) = cargo.filter(|c| !c.is_empty()) {
            append_query(&mut url, vec![("cargo", cargo.to_string())]);
        }
        self.get_json(url).await
    }

    /// `GET votos/estadisticas/`
    pub async fn estadisticas(&self) -> Result<Estadisticas, ApiError> {
        self.get_json(self.endpoint("votos/estadisticas/")?).await
    }
}
