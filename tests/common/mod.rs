//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use mock_backend::MockBackend;
use serde_json::{json, Value};
use std::path::PathBuf;
use std::sync::Arc;
use tempfile::TempDir;
use vota_informado::app::App;
use vota_informado::config::{ApiConfig, Config};
use vota_informado::session::{MemoryTokenStore, TokenStore};

/// Config pointing at `backend` with short timeouts.
pub fn mock_config(backend: &MockBackend) -> Config {
    let mut config = Config::default();
    config.api = ApiConfig {
        base_url: backend.base_url(),
        connect_timeout_seconds: 2,
        timeout_seconds: 5,
    };
    config
}

/// App wired to `backend` with the given token store.
pub fn make_app(backend: &MockBackend, tokens: Arc<dyn TokenStore>) -> App {
    App::from_config(&mock_config(backend), tokens).expect("Failed to build app")
}

/// App wired to `backend` with an in-memory session holding `token`.
pub fn make_signed_in_app(backend: &MockBackend, token: &str) -> App {
    make_app(backend, Arc::new(MemoryTokenStore::with_access_token(token)))
}

/// Write `content` to a config file inside a fresh temp dir.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("config.toml");
    std::fs::write(&config_path, content).expect("Failed to write config");
    (temp_dir, config_path)
}

// -- Fixtures -----------------------------------------------------------------

pub fn partido_json(id: i64, sigla: &str) -> Value {
    json!({
        "id": id,
        "nombre_partido": format!("Partido {sigla}"),
        "sigla": sigla,
        "logo_url": null
    })
}

pub fn candidato_json(id: i64, nombre: &str, cargo: &str, region: Value) -> Value {
    json!({
        "id": id,
        "nombre": nombre,
        "apellido_paterno": "Quispe",
        "apellido_materno": "Rojas",
        "nombre_completo": format!("{nombre} Quispe Rojas"),
        "partido": partido_json(id % 3 + 1, "FP"),
        "cargo": {"id": 1, "nombre_cargo": cargo},
        "region": region,
        "foto_url": null,
        "total_votos": 0
    })
}

pub fn candidato_detail_json(id: i64, nombre: &str, denuncias: usize) -> Value {
    let mut detail = candidato_json(id, nombre, "Presidente", Value::Null);
    let denuncias: Vec<Value> = (0..denuncias)
        .map(|n| {
            json!({
                "id": n,
                "tipo": "denuncia",
                "titulo": format!("Denuncia {n}"),
                "descripcion": "",
                "fecha": "2025-01-01",
                "fuente_url": null
            })
        })
        .collect();
    detail["denuncias"] = Value::Array(denuncias);
    detail["proyectos"] = json!([]);
    detail["propuestas"] = json!([]);
    detail
}

pub fn page_json(results: Vec<Value>, next: Option<String>) -> Value {
    json!({
        "count": results.len(),
        "next": next,
        "previous": null,
        "results": results
    })
}

pub fn user_json(region_id: i64) -> Value {
    json!({
        "id": 7,
        "dni": "12345678",
        "nombre": "Rosa",
        "apellido_paterno": "Flores",
        "apellido_materno": "Vega",
        "nombre_completo": "Rosa Flores Vega",
        "region": {"id": region_id, "nombre_region": "Cusco"},
        "rol": "votante",
        "is_active": true,
        "created_at": "2025-01-01T00:00:00Z"
    })
}

pub fn auth_json(access: &str, refresh: &str) -> Value {
    json!({
        "user": user_json(8),
        "tokens": {"access": access, "refresh": refresh},
        "message": "Login exitoso"
    })
}
