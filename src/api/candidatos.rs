//! `candidatos/` endpoints.

use reqwest::Url;

use super::client::ApiClient;
use super::error::ApiError;
use crate::models::{CandidatoDetail, CandidatoItem, CargoNombre, Page, Partido};

/// Filters for the candidate listing. Unset fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidatoQuery {
    pub page: Option<u32>,
    pub cargo: Option<String>,
    pub region: Option<i64>,
    pub partido: Option<i64>,
    pub search: Option<String>,
}

impl CandidatoQuery {
    pub fn cargo(cargo: CargoNombre) -> Self {
        Self {
            cargo: Some(cargo.as_str().to_string()),
            ..Self::default()
        }
    }

    /// Same filters, different page.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: Some(page),
            ..self.clone()
        }
    }

    fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        if let Some(cargo) = self.cargo.as_deref().filter(|c| !c.is_empty()) {
            pairs.push(("cargo", cargo.to_string()));
        }
        if let Some(region) = self.region {
            pairs.push(("region", region.to_string()));
        }
        if let Some(partido) = self.partido {
            pairs.push(("partido", partido.to_string()));
        }
        if let Some(search) = self.search.as_deref().filter(|s| !s.trim().is_empty()) {
            pairs.push(("search", search.to_string()));
        }
        pairs
    }

    pub(crate) fn apply(&self, url: &mut Url) {
        append_query(url, self.pairs());
    }
}

/// Append query parameters, leaving the URL untouched when there are none.
pub(crate) fn append_query(url: &mut Url, pairs: Vec<(&'static str, String)>) {
    if pairs.is_empty() {
        return;
    }
    url.query_pairs_mut().extend_pairs(pairs);
}

impl ApiClient {
    /// `GET candidatos/?page=N&cargo=&region=&partido=&search=`
    pub async fn candidatos(
        &self,
        query: &CandidatoQuery,
    ) -> Result<Page<CandidatoItem>, ApiError> {
        let mut url = self.endpoint("candidatos/")?;
        query.apply(&mut url);
        self.get_json(url).await
    }

    /// `GET candidatos/{id}/`
    pub async fn candidato_detail(&self, id: i64) -> Result<CandidatoDetail, ApiError> {
        self.get_json(self.endpoint(&format!("candidatos/{}/", id))?).await
    }

    /// `GET candidatos/partidos/`
    pub async fn partidos(&self) -> Result<Vec<Partido>, ApiError> {
        self.get_json(self.endpoint("candidatos/partidos/")?).await
    }
}
