//! Command-line surface: argument parsing and one handler per subcommand.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::api::CandidatoQuery;
use crate::app::App;
use crate::logging::DEFAULT_FILTER;
use crate::models::CargoNombre;
use crate::repository::Resource;
use crate::ui::comparar::Slot;
use crate::ui::render::{Render, SIN_VOTOS};
use crate::ui::runtime::ViewModel;

/// Browse candidates, compare them, vote and follow the results.
#[derive(Parser, Debug)]
#[command(name = "vota-informado", author, version, about, long_about = None)]
pub struct Args {
    /// Config file. Defaults to `<config dir>/vota-informado/config.toml`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL, overriding the config file.
    #[arg(long, env = "VOTA_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Log filter directives, e.g. `debug` or `vota_informado=trace`.
    #[arg(long, env = "RUST_LOG", default_value = DEFAULT_FILTER, global = true)]
    pub log_level: String,

    /// Keep the session in memory only.
    #[arg(long, global = true)]
    pub ephemeral: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in with DNI and password
    Login {
        dni: String,
        #[arg(long, env = "VOTA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Create an account
    Register {
        dni: String,
        /// Region id, see `regiones`
        #[arg(long)]
        region: i64,
        #[arg(long, env = "VOTA_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show whether a session is stored
    Status,
    /// List regions
    Regiones,
    /// Look up the identity behind a DNI
    ValidarDni { dni: String },
    /// Show the signed-in voter and their votes
    Perfil,
    /// List candidates (all pages)
    Candidatos {
        #[arg(long)]
        cargo: Option<String>,
        #[arg(long)]
        region: Option<i64>,
        #[arg(long)]
        partido: Option<i64>,
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one candidate with their history
    Candidato { id: i64 },
    /// List parties
    Partidos,
    /// Compare two candidates side by side
    Comparar { primero: i64, segundo: i64 },
    /// Cast a vote for a candidate
    Votar { candidato_id: i64 },
    /// Check whether a vote for an office is still possible
    PuedeVotar { cargo: String },
    /// List your votes
    MisVotos,
    /// Show results
    Resultados {
        #[arg(long)]
        cargo: Option<String>,
        #[arg(long)]
        region: Option<i64>,
        /// Party totals instead of candidate totals
        #[arg(long)]
        por_partido: bool,
    },
    /// Show global statistics
    Estadisticas,
}

fn cargo_arg(cargo: &str) -> anyhow::Result<CargoNombre> {
    CargoNombre::parse(cargo).ok_or_else(|| {
        anyhow::anyhow!("Cargo desconocido: {cargo} (Presidente, Senador o Diputado)")
    })
}

/// Run one subcommand and return the lines to print.
///
/// Backend failures come back as rendered text; only local failures (bad
/// arguments, session file errors) are returned as `Err`.
pub async fn run(app: &App, command: Command) -> anyhow::Result<Vec<String>> {
    let lines = match command {
        Command::Login { dni, password } => {
            let vm = app.login();
            vm.login(&dni, &password);
            vm.settle().await;
            vm.state().render()
        }
        Command::Register {
            dni,
            region,
            password,
        } => {
            let vm = app.register();
            vm.register(&dni, region, &password);
            vm.settle().await;
            vm.state().render()
        }
        Command::Logout => {
            app.perfil().logout()?;
            vec!["Sesión cerrada".to_string()]
        }
        Command::Status => {
            let session = if app.tokens().has_session() {
                "Sesión activa"
            } else {
                "Sin sesión"
            };
            vec![session.to_string(), format!("API: {}", app.api().base_url())]
        }
        Command::Regiones => {
            let vm = app.register();
            vm.load_regiones();
            vm.settle().await;
            vm.state().regiones.render()
        }
        Command::ValidarDni { dni } => {
            let vm = app.register();
            vm.validate_dni(&dni);
            vm.settle().await;
            vm.state().render()
        }
        Command::Perfil => {
            let vm = app.perfil();
            vm.refrescar();
            vm.settle().await;
            vm.state().render()
        }
        Command::Candidatos {
            cargo,
            region,
            partido,
            search,
        } => {
            let cargo = cargo.as_deref().map(cargo_arg).transpose()?;
            let vm = app.home();
            vm.load_filtered(CandidatoQuery {
                cargo: cargo.map(|c| c.as_str().to_string()),
                region,
                partido,
                search,
                ..CandidatoQuery::default()
            });
            vm.settle().await;
            vm.state().render()
        }
        Command::Candidato { id } => {
            let vm = app.candidato();
            vm.load(id);
            vm.settle().await;
            vm.state().render()
        }
        Command::Partidos => match app.candidatos().partidos().await {
            Resource::Success(partidos) => partidos.render(),
            Resource::Error { message } => vec![format!("Error: {message}")],
            Resource::Loading => Vec::new(),
        },
        Command::Comparar { primero, segundo } => {
            let vm = app.comparar();
            vm.cargar_candidato(Slot::Primero, primero);
            vm.cargar_candidato(Slot::Segundo, segundo);
            vm.settle().await;
            vm.state().render()
        }
        Command::Votar { candidato_id } => votar(app, candidato_id).await,
        Command::PuedeVotar { cargo } => {
            let cargo = cargo_arg(&cargo)?;
            match app.votos().puede_votar(cargo).await {
                Resource::Success(estado) => vec![
                    format!("{cargo}"),
                    format!("Puede votar: {}", si_no(estado.puede_votar)),
                    format!("Ya votó: {}", si_no(estado.ya_voto)),
                ],
                Resource::Error { message } => vec![format!("Error: {message}")],
                Resource::Loading => Vec::new(),
            }
        }
        Command::MisVotos => {
            let vm = app.perfil();
            vm.load_mis_votos();
            vm.settle().await;
            let votos = vm.state().mis_votos;
            if votos.is_empty() {
                vec![SIN_VOTOS.to_string()]
            } else {
                votos.iter().flat_map(Render::render).collect()
            }
        }
        Command::Resultados {
            cargo,
            region,
            por_partido,
        } => {
            let cargo = cargo
                .as_deref()
                .map(cargo_arg)
                .transpose()?
                .map(|c| c.as_str().to_string());
            let vm = app.resultados();
            if por_partido {
                vm.load_resultados_por_partido(cargo);
            } else {
                vm.load_resultados(cargo, region);
            }
            vm.settle().await;
            vm.state().render()
        }
        Command::Estadisticas => {
            let vm = app.resultados();
            vm.load_estadisticas();
            vm.settle().await;
            match vm.state().estadisticas {
                Some(estadisticas) => estadisticas.render(),
                None => vec!["Estadísticas no disponibles".to_string()],
            }
        }
    };

    Ok(lines)
}

/// Load the ballot, select the candidate, confirm.
async fn votar(app: &App, candidato_id: i64) -> Vec<String> {
    let vm = app.votar();
    vm.load_perfil();
    vm.verificar_estado_votos();
    vm.load_candidatos();
    vm.settle().await;

    let state = vm.state();
    if let Some(message) = state.error_message {
        return vec![format!("Error: {message}")];
    }
    if !vm.seleccionar_candidato(candidato_id) {
        return vec![format!("Candidato {candidato_id} no encontrado")];
    }

    vm.confirmar_voto();
    vm.settle().await;

    let state = vm.state();
    match (state.success_message, state.error_message) {
        (Some(message), _) => vec![message],
        (None, Some(message)) => vec![format!("Error: {message}")],
        (None, None) => Vec::new(),
    }
}

fn si_no(value: bool) -> &'static str {
    if value {
        "sí"
    } else {
        "no"
    }
}
