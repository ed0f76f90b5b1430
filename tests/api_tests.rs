use std::sync::Mutex;

use actix_web::{test, web, App};
use serde_json::{json, Value};

use horarios::server::configurar_rutas;
use horarios::Planificador;

const CATALOGO: &str = include_str!("data/cursos_horarios.json");

fn catalogo() -> Value {
    serde_json::from_str(CATALOGO).expect("el catálogo de prueba es JSON válido")
}

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Mutex::new(Planificador::default())))
                .configure(configurar_rutas),
        )
        .await
    };
}

#[actix_web::test]
async fn test_cargar_catalogo_y_listar() {
    let app = app!();

    let req = test::TestRequest::post().uri("/catalogo").set_json(catalogo()).to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["estadisticas"]["total_cursos"], 3);

    let req = test::TestRequest::get().uri("/cursos?q=computacion").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    let codigos: Vec<&str> = body["cursos"]
        .as_array()
        .expect("lista de cursos")
        .iter()
        .filter_map(|c| c["codigo"].as_str())
        .collect();
    assert_eq!(codigos, vec!["CS4052", "CS5101"]);
}

#[actix_web::test]
async fn test_catalogo_invalido() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/catalogo")
        .set_json(json!({"CS1": {"nombre": "Sin secciones"}}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_seleccion_conflicto_y_grilla() {
    let app = app!();
    let req = test::TestRequest::post().uri("/catalogo").set_json(catalogo()).to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/seleccion")
        .set_json(json!({"codigo": "GI5101", "seccion": "3", "opcion": "teoria_03"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["conflicto"], false);
    assert_eq!(body["seleccion"]["GI5101"]["opcion"], "teoria_03");

    let req = test::TestRequest::get()
        .uri("/conflicto?codigo=CS4052&seccion=1&opcion=laboratorio_01")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["conflicto"], true);
    assert_eq!(body["horarios_efectivos"].as_array().map(Vec::len), Some(3));
    assert_eq!(body["choques"][0]["codigo"], "GI5101");

    let req = test::TestRequest::put()
        .uri("/preview")
        .set_json(json!({"codigo": "CS4052", "seccion": "1", "opcion": "laboratorio_02"}))
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["conflicto"], false);

    let req = test::TestRequest::get().uri("/grilla/celda?dia=4&hora=18").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["clases"][0]["codigo"], "CS4052");
    assert_eq!(body["clases"][0]["es_preview"], true);

    let req = test::TestRequest::get().uri("/grilla").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["filas"].as_array().map(Vec::len), Some(16));
    assert_eq!(body["preview"]["opcion"], "laboratorio_02");
}

#[actix_web::test]
async fn test_seleccion_inexistente_y_celda_fuera_de_rango() {
    let app = app!();
    let req = test::TestRequest::post().uri("/catalogo").set_json(catalogo()).to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::post()
        .uri("/seleccion")
        .set_json(json!({"codigo": "GI5101", "seccion": "99", "opcion": "teoria_03"}))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 404);

    let req = test::TestRequest::get().uri("/cursos/ZZ999").to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 404);

    let req = test::TestRequest::get().uri("/grilla/celda?dia=6&hora=8").to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_curso_bloqueado_en_detalle() {
    let app = app!();
    let req = test::TestRequest::post().uri("/catalogo").set_json(catalogo()).to_request();
    test::call_service(&app, req).await;

    // CS5101 sección 1 ocupa Lun 15-16 y Mie 16-19
    let req = test::TestRequest::post()
        .uri("/seleccion")
        .set_json(json!({"codigo": "CS5101", "seccion": "1", "opcion": "teoria_virtual_02"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/cursos/GI5101").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["seleccionado"], false);
    assert_eq!(body["bloqueado"], false);
    assert_eq!(body["secciones"].as_array().map(Vec::len), Some(2));
    assert_eq!(body["secciones"][0]["teorias"][0]["conflicto"], false);

    let req = test::TestRequest::get().uri("/cursos/CS5101").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["seleccionado"], true);
    assert_eq!(body["secciones"][0]["teorias"][1]["seleccionada"], true);
}

#[actix_web::test]
async fn test_exportar() {
    let app = app!();
    let req = test::TestRequest::post().uri("/catalogo").set_json(catalogo()).to_request();
    test::call_service(&app, req).await;
    let req = test::TestRequest::post()
        .uri("/seleccion")
        .set_json(json!({"codigo": "GI5101", "seccion": "5", "opcion": "teoria_05"}))
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/exportar").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let disposicion = resp
        .headers()
        .get("Content-Disposition")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(disposicion.contains("horario-") && disposicion.ends_with(".json\""));
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).expect("JSON");
    assert_eq!(body[0]["codigo"], "GI5101");
    assert_eq!(body[0]["opciones"][0]["docente"], "Estrada Merino, Alfredo");

    let req = test::TestRequest::get().uri("/exportar?formato=texto").to_request();
    let texto = test::call_and_read_body(&app, req).await;
    let texto = String::from_utf8_lossy(&texto);
    assert!(texto.starts_with("HORARIO ACADÉMICO"));
    assert!(texto.contains("GI5101 - Estrategia y Organizaciones"));

    let req = test::TestRequest::get().uri("/exportar?formato=png").to_request();
    assert_eq!(test::call_service(&app, req).await.status().as_u16(), 400);
}

#[actix_web::test]
async fn test_conflicto_curso_fuera_del_catalogo_trae_motivo() {
    let app = app!();
    let req = test::TestRequest::post().uri("/catalogo").set_json(catalogo()).to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get()
        .uri("/conflicto?codigo=ZZ999&seccion=1&opcion=teoria_01")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["conflicto"], true);
    assert_eq!(body["choques"].as_array().map(Vec::len), Some(0));
    assert!(body["motivo"].as_str().is_some_and(|m| m.contains("ZZ999")));

    let req = test::TestRequest::get()
        .uri("/conflicto?codigo=GI5101&seccion=3&opcion=teoria_03")
        .to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["conflicto"], false);
    assert!(body["motivo"].is_null());
}

#[actix_web::test]
async fn test_grilla_informa_rango_de_horas() {
    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(Mutex::new(Planificador::new(
                horarios::algorithm::DiaDesconocido::Lunes,
                8..=12,
            ))))
            .configure(configurar_rutas),
    )
    .await;

    let req = test::TestRequest::get().uri("/grilla").to_request();
    let body: Value = test::call_and_read_body_json(&app, req).await;
    assert_eq!(body["horas"]["inicio"], 8);
    assert_eq!(body["horas"]["fin"], 12);
    assert_eq!(body["filas"].as_array().map(Vec::len), Some(5));
}
