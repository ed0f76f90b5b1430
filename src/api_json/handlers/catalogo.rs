use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::{bloquear, EstadoApp};
use crate::api_json::CursosQuery;
use crate::catalogo::{cargar_catalogo_value, estadisticas};
use crate::models::Opcion;

/// POST /catalogo
/// Reemplaza el catálogo con el JSON recibido. La selección y la previsualización se descartan.
pub async fn cargar_catalogo_handler(estado: EstadoApp, body: web::Json<serde_json::Value>) -> impl Responder {
    let catalogo = match cargar_catalogo_value(body.into_inner()) {
        Ok(c) => c,
        Err(e) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };
    let stats = estadisticas(&catalogo);
    bloquear(&estado).cargar_catalogo(catalogo);
    HttpResponse::Ok().json(json!({"status": "ok", "estadisticas": stats}))
}

/// DELETE /catalogo
pub async fn resetear_handler(estado: EstadoApp) -> impl Responder {
    bloquear(&estado).resetear();
    log::info!("planificador reseteado");
    HttpResponse::Ok().json(json!({"status": "ok"}))
}

/// GET /cursos?q=texto
/// Lista de cursos filtrada, con `bloqueado` cuando ninguna opción cabe en el horario actual.
pub async fn cursos_handler(estado: EstadoApp, query: web::Query<CursosQuery>) -> impl Responder {
    let p = bloquear(&estado);
    HttpResponse::Ok().json(json!({"cursos": p.resumen_cursos(&query.q)}))
}

fn opcion_json(key: &str, opcion: &Opcion, conflicto: bool, elegida: bool) -> serde_json::Value {
    json!({
        "key": key,
        "opcion": opcion,
        "conflicto": conflicto,
        "seleccionada": elegida,
    })
}

/// GET /cursos/{codigo}
/// Secciones del curso con sus opciones agrupadas en teorías y laboratorios,
/// cada una con su marca de conflicto.
pub async fn curso_detalle_handler(estado: EstadoApp, path: web::Path<String>) -> impl Responder {
    let codigo = path.into_inner();
    let p = bloquear(&estado);
    let Some(curso) = p.catalogo().get(&codigo) else {
        return HttpResponse::NotFound().json(json!({"error": format!("curso '{}' no existe", codigo)}));
    };

    let elegido = p.seleccion().get(&codigo);
    let mut secciones: Vec<serde_json::Value> = Vec::new();
    for num in curso.secciones.keys() {
        let Some(grupos) = p.opciones_por_tipo(&codigo, num) else { continue };
        let es_elegida = |key: &str| elegido.is_some_and(|e| e.seccion == *num && e.opcion == key);
        let teorias: Vec<serde_json::Value> = grupos
            .teorias
            .iter()
            .map(|(k, o)| opcion_json(k, o, p.opcion_tiene_conflicto(&codigo, num, k), es_elegida(k.as_str())))
            .collect();
        let laboratorios: Vec<serde_json::Value> = grupos
            .laboratorios
            .iter()
            .map(|(k, o)| opcion_json(k, o, p.opcion_tiene_conflicto(&codigo, num, k), es_elegida(k.as_str())))
            .collect();
        secciones.push(json!({"numero": num, "teorias": teorias, "laboratorios": laboratorios}));
    }

    HttpResponse::Ok().json(json!({
        "codigo": codigo,
        "nombre": curso.nombre,
        "malla": curso.malla,
        "tipo_curso": curso.tipo_curso,
        "seleccionado": elegido.is_some(),
        "bloqueado": elegido.is_none() && p.curso_tiene_conflicto(&codigo),
        "secciones": secciones,
    }))
}
