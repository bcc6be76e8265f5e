mod common;

use common::{candidato_json, user_json};
use serde_json::{json, Value};
use vota_informado::models::{CandidatoItem, CargoNombre, PuedeVotarResponse, User};
use vota_informado::repository::Resource;
use vota_informado::ui::home::{HomeIntent, HomeReducer, HomeState};
use vota_informado::ui::login::{LoginIntent, LoginReducer, LoginState, WELCOME_MESSAGE};
use vota_informado::ui::mvi::Reducer;
use vota_informado::ui::perfil::{PerfilIntent, PerfilReducer, PerfilState};
use vota_informado::ui::register::{RegisterIntent, RegisterReducer, RegisterState};
use vota_informado::ui::resultados::{ResultadosIntent, ResultadosReducer, ResultadosState};
use vota_informado::ui::votar::{VotarIntent, VotarReducer, VotarState, VOTO_REGISTRADO};

fn item(id: i64, cargo: &str) -> CandidatoItem {
    serde_json::from_value(candidato_json(id, "Ana", cargo, Value::Null)).unwrap()
}

fn user() -> User {
    serde_json::from_value(user_json(8)).unwrap()
}

// -- login ---------------------------------------------------------------------

#[test]
fn login_submit_clears_previous_messages() {
    let state = LoginState {
        error_message: Some("antes".into()),
        ..LoginState::default()
    };
    let state = LoginReducer::reduce(state, LoginIntent::Submitted);
    assert_eq!(
        state,
        LoginState {
            is_loading: true,
            ..LoginState::default()
        }
    );
}

#[test]
fn login_success_and_failure() {
    let ok = LoginReducer::reduce(
        LoginState::default(),
        LoginIntent::Completed(Resource::Success(())),
    );
    assert_eq!(ok.success_message.as_deref(), Some(WELCOME_MESSAGE));
    assert!(!ok.is_loading);

    let err = LoginReducer::reduce(
        LoginState::default(),
        LoginIntent::Completed(Resource::error("mal")),
    );
    assert_eq!(err.error_message.as_deref(), Some("mal"));
    assert_eq!(err.success_message, None);
}

// -- register ------------------------------------------------------------------

#[test]
fn register_region_failure_keeps_list() {
    let regiones = serde_json::from_value(json!([{"id": 1, "nombre_region": "Lima"}])).unwrap();
    let state = RegisterState {
        regiones,
        ..RegisterState::default()
    };
    let next = RegisterReducer::reduce(
        state.clone(),
        RegisterIntent::RegionesLoaded(Resource::error("x")),
    );
    assert_eq!(next, state);
}

// -- home ----------------------------------------------------------------------

#[test]
fn home_error_clears_list() {
    let state = HomeState {
        candidatos: vec![item(1, "Senador")],
        ..HomeState::default()
    };
    let state = HomeReducer::reduce(state, HomeIntent::Loaded(Resource::error("caído")));
    assert!(state.candidatos.is_empty());
    assert_eq!(state.error_message.as_deref(), Some("caído"));
}

// -- votar ---------------------------------------------------------------------

#[test]
fn votar_select_then_cancel() {
    let state = VotarState {
        error_message: Some("previo".into()),
        ..VotarState::default()
    };
    let state = VotarReducer::reduce(
        state,
        VotarIntent::CandidatoSeleccionado(item(1, "Presidente")),
    );
    assert!(state.mostrar_confirmacion);
    assert_eq!(state.error_message, None);
    assert_eq!(state.candidato_seleccionado.as_ref().map(|c| c.id), Some(1));

    let state = VotarReducer::reduce(state, VotarIntent::ConfirmacionCancelada);
    assert!(!state.mostrar_confirmacion);
    assert_eq!(state.candidato_seleccionado, None);
}

#[test]
fn votar_blank_server_message_uses_default() {
    let state = VotarReducer::reduce(
        VotarState::default(),
        VotarIntent::VotoRegistrado {
            message: " ".into(),
        },
    );
    assert_eq!(state.success_message.as_deref(), Some(VOTO_REGISTRADO));
}

#[test]
fn votar_only_presidente_failure_sets_error() {
    let loading = VotarReducer::reduce(VotarState::default(), VotarIntent::CandidatosStarted);

    let senador = VotarReducer::reduce(
        loading.clone(),
        VotarIntent::CandidatosLoaded {
            cargo: CargoNombre::Senador,
            result: Resource::error("x"),
        },
    );
    assert_eq!(senador, loading);

    let presidente = VotarReducer::reduce(
        loading,
        VotarIntent::CandidatosLoaded {
            cargo: CargoNombre::Presidente,
            result: Resource::error("x"),
        },
    );
    assert!(!presidente.is_loading);
    assert_eq!(presidente.error_message.as_deref(), Some("x"));
}

#[test]
fn votar_estado_defaults_to_open() {
    let state = VotarState::default();
    let estado = state.estado_de(CargoNombre::Diputado);
    assert!(estado.puede_votar);
    assert!(!estado.ya_voto);

    let state = VotarReducer::reduce(
        state,
        VotarIntent::EstadoLoaded {
            cargo: CargoNombre::Diputado,
            estado: PuedeVotarResponse {
                puede_votar: false,
                ya_voto: true,
            },
        },
    );
    assert!(state.estado_de(CargoNombre::Diputado).ya_voto);
    assert!(state.estado_de(CargoNombre::Senador).puede_votar);
}

#[test]
fn votar_diputados_without_profile_are_not_region_filtered() {
    let mut diputado_lima: CandidatoItem = serde_json::from_value(candidato_json(
        9,
        "Dante",
        "Diputado",
        json!({"id": 15, "nombre_region": "Lima"}),
    ))
    .unwrap();
    diputado_lima.nombre_completo = "Dante Lima".into();

    let state = VotarReducer::reduce(
        VotarState::default(),
        VotarIntent::CandidatosLoaded {
            cargo: CargoNombre::Diputado,
            result: Resource::Success(vec![diputado_lima]),
        },
    );
    assert_eq!(state.candidatos_visibles(CargoNombre::Diputado).len(), 1);

    let state = VotarReducer::reduce(state, VotarIntent::PerfilLoaded(user()));
    assert!(state.candidatos_visibles(CargoNombre::Diputado).is_empty());
}

#[test]
fn votar_diputados_with_bare_or_string_region_id_match_profile() {
    let diputados: Vec<CandidatoItem> = [json!(8), json!({"id": "8"}), json!({"id": 3})]
        .into_iter()
        .enumerate()
        .map(|(n, region)| {
            serde_json::from_value(candidato_json(n as i64 + 1, "Dina", "Diputado", region))
                .unwrap()
        })
        .collect();

    let state = VotarReducer::reduce(
        VotarState::default(),
        VotarIntent::CandidatosLoaded {
            cargo: CargoNombre::Diputado,
            result: Resource::Success(diputados),
        },
    );
    let state = VotarReducer::reduce(state, VotarIntent::PerfilLoaded(user()));

    let ids: Vec<i64> = state
        .candidatos_visibles(CargoNombre::Diputado)
        .iter()
        .map(|c| c.id)
        .collect();
    assert_eq!(ids, vec![1, 2]);
}

// -- resultados ----------------------------------------------------------------

#[test]
fn resultados_empty_state_requires_idle_and_no_error() {
    let mut state = ResultadosState::default();
    assert!(state.is_empty());

    state.is_loading = true;
    assert!(!state.is_empty());

    state.is_loading = false;
    state.error_message = Some("x".into());
    assert!(!state.is_empty());
}

#[test]
fn resultados_por_partido_switches_view() {
    let state = ResultadosReducer::reduce(
        ResultadosState::default(),
        ResultadosIntent::PorPartidoStarted {
            cargo: Some("Senador".into()),
        },
    );
    assert!(state.mostrar_por_partido);
    assert!(state.is_loading);
    assert_eq!(state.cargo_filtro.as_deref(), Some("Senador"));
}

// -- perfil --------------------------------------------------------------------

#[test]
fn perfil_votes_error_is_empty_list() {
    let state = PerfilReducer::reduce(PerfilState::default(), PerfilIntent::VotosStarted);
    assert!(state.is_loading_votos);

    let state = PerfilReducer::reduce(state, PerfilIntent::VotosLoaded(Resource::error("x")));
    assert!(!state.is_loading_votos);
    assert!(state.mis_votos.is_empty());
    assert_eq!(state.error_message, None);
}

#[test]
fn perfil_logout_resets() {
    let state = PerfilReducer::reduce(
        PerfilState::default(),
        PerfilIntent::PerfilLoaded(Resource::Success(user())),
    );
    assert!(state.perfil.is_some());

    let state = PerfilReducer::reduce(state, PerfilIntent::SesionCerrada);
    assert_eq!(state, PerfilState::default());
}
