//! Repositories: one per backend app, each call normalized into a [`Resource`].
//!
//! Transport failures map to a fixed connection message; non-2xx replies to
//! the `error`/`message` of the JSON body or a per-call fallback. Nothing is
//! retried.

mod auth;
mod candidatos;
mod normalize;
mod pagination;
mod resource;
mod votos;

pub use auth::AuthRepository;
pub use candidatos::CandidatosRepository;
pub use normalize::{error_message, normalize, CONNECTION_ERROR, EMPTY_RESPONSE};
pub use pagination::accumulate_pages;
pub use resource::Resource;
pub use votos::VotosRepository;
