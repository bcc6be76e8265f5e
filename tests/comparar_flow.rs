//! Candidate detail and comparison screens.

mod common;

use common::mock_backend::{MockBackend, MockResponse};
use common::{candidato_detail_json, make_signed_in_app};
use vota_informado::ui::comparar::Slot;
use vota_informado::ui::runtime::ViewModel;

#[tokio::test]
async fn test_detail_load() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "candidatos/5/",
            MockResponse::json(candidato_detail_json(5, "Ana", 2)),
        )
        .await;
    let app = make_signed_in_app(&backend, "tok");

    let vm = app.candidato();
    vm.load(5);
    vm.settle().await;

    let state = vm.state();
    let detail = state.candidato.unwrap();
    assert_eq!(detail.denuncias.len(), 2);
    assert_eq!(detail.region.display(), "-");
}

#[tokio::test]
async fn test_compare_two_candidates() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "candidatos/1/",
            MockResponse::json(candidato_detail_json(1, "Ana", 3)),
        )
        .await;
    backend
        .enqueue(
            "candidatos/2/",
            MockResponse::json(candidato_detail_json(2, "Beto", 0)),
        )
        .await;
    let app = make_signed_in_app(&backend, "tok");

    let vm = app.comparar();
    vm.cargar_candidato(Slot::Primero, 1);
    vm.cargar_candidato(Slot::Segundo, 2);
    vm.settle().await;

    let state = vm.state();
    assert!(!state.is_loading);
    assert_eq!(state.primero_id, Some(1));
    assert_eq!(state.segundo_id, Some(2));
    let diff = state.diferencias().unwrap();
    assert_eq!(diff.primero.denuncias, 3);
    assert_eq!(diff.segundo.denuncias, 0);

    vm.limpiar_slot(Slot::Primero);
    let state = vm.state();
    assert!(state.primero.is_none());
    assert!(state.segundo.is_some());
    assert!(state.diferencias().is_none());

    vm.limpiar();
    assert_eq!(vm.state(), Default::default());
}

#[tokio::test]
async fn test_failed_slot_keeps_other_slot() {
    let backend = MockBackend::start().await;
    backend
        .enqueue(
            "candidatos/1/",
            MockResponse::json(candidato_detail_json(1, "Ana", 0)),
        )
        .await;
    let app = make_signed_in_app(&backend, "tok");

    let vm = app.comparar();
    vm.cargar_candidato(Slot::Primero, 1);
    vm.settle().await;
    vm.cargar_candidato(Slot::Segundo, 404);
    vm.settle().await;

    let state = vm.state();
    assert!(state.primero.is_some());
    assert!(state.segundo.is_none());
    assert_eq!(state.error_message.as_deref(), Some("Not found."));
}
