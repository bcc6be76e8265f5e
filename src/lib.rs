//! Client for the Vota Informado election API: candidate browsing,
//! side-by-side comparison, simulated voting and live results.

pub mod api;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod models;
pub mod repository;
pub mod session;
pub mod ui;
