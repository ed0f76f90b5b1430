use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::{bloquear, EstadoApp};
use crate::algorithm::DIAS;
use crate::api_json::CeldaQuery;

/// GET /grilla
/// Grilla completa (filas por hora, columnas lunes a sábado) incluyendo la previsualización.
pub async fn grilla_handler(estado: EstadoApp) -> impl Responder {
    let p = bloquear(&estado);
    let horas = p.horas();
    HttpResponse::Ok().json(json!({
        "dias": DIAS,
        "horas": {"inicio": horas.start(), "fin": horas.end()},
        "filas": p.grilla(),
        "preview": p.previsualizacion(),
    }))
}

/// GET /grilla/celda?dia=0&hora=8
pub async fn celda_handler(estado: EstadoApp, query: web::Query<CeldaQuery>) -> impl Responder {
    if usize::from(query.dia) >= DIAS.len() {
        return HttpResponse::BadRequest().json(json!({"error": format!("dia {} fuera de rango (0-5)", query.dia)}));
    }
    let p = bloquear(&estado);
    HttpResponse::Ok().json(json!({"clases": p.clases_en_celda(query.dia, query.hora)}))
}
