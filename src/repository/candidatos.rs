use crate::api::{ApiClient, CandidatoQuery};
use crate::models::{CandidatoDetail, CandidatoItem, Page, Partido};

use super::normalize::normalize;
use super::pagination::accumulate_pages;
use super::resource::Resource;

const CANDIDATOS_FAILED: &str = "Error al cargar candidatos";
const DETAIL_FAILED: &str = "Error al cargar el detalle del candidato";
const PARTIDOS_FAILED: &str = "Error al cargar partidos";

/// Candidate and party listings.
#[derive(Clone)]
pub struct CandidatosRepository {
    api: ApiClient,
}

impl CandidatosRepository {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// A single page with the given filters.
    pub async fn candidatos(&self, query: &CandidatoQuery) -> Resource<Page<CandidatoItem>> {
        normalize(self.api.candidatos(query).await, CANDIDATOS_FAILED)
    }

    /// Every page for the given filters, concatenated. `filters.page` is ignored.
    pub async fn all_candidatos(&self, filters: &CandidatoQuery) -> Resource<Vec<CandidatoItem>> {
        let result = accumulate_pages(|page| {
            let query = filters.with_page(page);
            let api = self.api.clone();
            async move { api.candidatos(&query).await }
        })
        .await;

        if let Ok(all) = &result {
            tracing::debug!(count = all.len(), "accumulated candidate pages");
        }
        normalize(result, CANDIDATOS_FAILED)
    }

    pub async fn candidato_detail(&self, id: i64) -> Resource<CandidatoDetail> {
        normalize(self.api.candidato_detail(id).await, DETAIL_FAILED)
    }

    pub async fn partidos(&self) -> Resource<Vec<Partido>> {
        normalize(self.api.partidos().await, PARTIDOS_FAILED)
    }
}
