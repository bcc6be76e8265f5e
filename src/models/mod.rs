//! Data transfer records mirroring the backend schema.
//!
//! Field names follow the wire names. All records are read-only values.

mod auth;
mod candidatos;
mod reference;
mod region;
mod votos;

pub use auth::{
    AuthResponse, AuthTokens, DniValidationRequest, DniValidationResponse, LoginRequest,
    RegisterRequest, Rol, User,
};
pub use candidatos::{Antecedente, CandidatoDetail, CandidatoItem, Page, TipoAntecedente};
pub use reference::{Cargo, CargoNombre, Partido, Region};
pub use region::{region_to_text, RegionField, REGION_NAME_KEYS, REGION_PLACEHOLDER};
pub use votos::{
    CargoRef, Estadisticas, PartidoResultado, PuedeVotarResponse, ResultadoGeneral,
    ResultadoPorPartido, Voto, VotoRequest, VotoResponse,
};
