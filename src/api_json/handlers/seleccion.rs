use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::{bloquear, EstadoApp};
use crate::api_json::OpcionRequest;

/// GET /seleccion
pub async fn seleccion_handler(estado: EstadoApp) -> impl Responder {
    let p = bloquear(&estado);
    HttpResponse::Ok().json(json!({"seleccion": p.seleccion()}))
}

/// POST /seleccion
/// Confirma una opción. No se valida el conflicto (la vista ya lo muestra);
/// sólo se informa en la respuesta.
pub async fn seleccionar_handler(estado: EstadoApp, body: web::Json<OpcionRequest>) -> impl Responder {
    let req = body.into_inner();
    let mut p = bloquear(&estado);
    let conflicto = p.opcion_tiene_conflicto(&req.codigo, &req.seccion, &req.opcion);
    let seleccion = p.seleccionar(&req.codigo, &req.seccion, &req.opcion);

    let aplicada = seleccion
        .get(&req.codigo)
        .is_some_and(|info| info.seccion == req.seccion && info.opcion == req.opcion);
    if !aplicada {
        return HttpResponse::NotFound().json(json!({
            "error": format!("opción {}/{}/{} no existe en el catálogo", req.codigo, req.seccion, req.opcion)
        }));
    }

    log::info!("seleccionado {}/{}/{} (conflicto: {})", req.codigo, req.seccion, req.opcion, conflicto);
    HttpResponse::Ok().json(json!({"status": "ok", "conflicto": conflicto, "seleccion": seleccion}))
}

/// DELETE /seleccion/{codigo}
pub async fn eliminar_handler(estado: EstadoApp, path: web::Path<String>) -> impl Responder {
    let codigo = path.into_inner();
    let mut p = bloquear(&estado);
    let seleccion = p.eliminar(&codigo);
    HttpResponse::Ok().json(json!({"status": "ok", "seleccion": seleccion}))
}

/// DELETE /seleccion
pub async fn limpiar_handler(estado: EstadoApp) -> impl Responder {
    bloquear(&estado).limpiar();
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// PUT /preview
pub async fn previsualizar_handler(estado: EstadoApp, body: web::Json<OpcionRequest>) -> impl Responder {
    let req = body.into_inner();
    let mut p = bloquear(&estado);
    p.previsualizar(&req.codigo, &req.seccion, &req.opcion);
    let conflicto = p.opcion_tiene_conflicto(&req.codigo, &req.seccion, &req.opcion);
    HttpResponse::Ok().json(json!({"status": "ok", "preview": req, "conflicto": conflicto}))
}

/// DELETE /preview
pub async fn quitar_previsualizacion_handler(estado: EstadoApp) -> impl Responder {
    bloquear(&estado).quitar_previsualizacion();
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// GET /conflicto?codigo=..&seccion=..&opcion=..
/// Conflicto de una opción contra la selección actual, con el detalle de cada choque.
/// Un curso que no está en el catálogo se informa como conflicto sin choques,
/// con `motivo` explicando por qué.
pub async fn conflicto_handler(estado: EstadoApp, query: web::Query<OpcionRequest>) -> impl Responder {
    let q = query.into_inner();
    let p = bloquear(&estado);
    let motivo = if p.contiene_curso(&q.codigo) {
        None
    } else {
        Some(format!("curso '{}' no existe en el catálogo", q.codigo))
    };
    HttpResponse::Ok().json(json!({
        "conflicto": p.opcion_tiene_conflicto(&q.codigo, &q.seccion, &q.opcion),
        "choques": p.conflictos_de_opcion(&q.codigo, &q.seccion, &q.opcion),
        "horarios_efectivos": p.horarios_efectivos(&q.codigo, &q.seccion, &q.opcion),
        "motivo": motivo,
    }))
}
