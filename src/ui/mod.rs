//! Screen state holders.
//!
//! Each screen owns a [`runtime::Store`] driven by a pure reducer and a
//! [`runtime::TaskScope`] for its backend calls. [`render`] projects the
//! state to text.

pub mod candidato;
pub mod comparar;
pub mod home;
pub mod login;
pub mod mvi;
pub mod perfil;
pub mod register;
pub mod render;
pub mod resultados;
pub mod runtime;
pub mod votar;
