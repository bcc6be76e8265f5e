//! HTTP binding for the backend REST API.
//!
//! [`ApiClient`] owns the `reqwest` client, resolves endpoint paths against
//! the configured base URL and attaches the stored bearer token to every
//! request. Endpoint methods are grouped by backend app.

mod auth;
mod candidatos;
mod client;
mod error;
mod votos;

pub use candidatos::CandidatoQuery;
pub use client::{ApiClient, ApiReply};
pub use error::{parse_error_message, ApiError};
