use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use super::{bloquear, EstadoApp};
use crate::api_json::ExportQuery;
use crate::export::{exportar_json, exportar_texto, nombre_archivo_export, FormatoExport};

/// GET /exportar?formato=json|texto
/// Devuelve el horario confirmado como archivo descargable.
pub async fn exportar_handler(estado: EstadoApp, query: web::Query<ExportQuery>) -> impl Responder {
    let formato = match query.formato.as_deref().map(FormatoExport::desde_str) {
        None => FormatoExport::Json,
        Some(Ok(f)) => f,
        Some(Err(e)) => return HttpResponse::BadRequest().json(json!({"error": format!("{}", e)})),
    };

    let cursos = bloquear(&estado).exportar();
    let hoy = chrono::Local::now().date_naive();
    let body = match formato {
        FormatoExport::Json => match exportar_json(&cursos) {
            Ok(s) => s,
            Err(e) => return HttpResponse::InternalServerError().json(json!({"error": format!("{}", e)})),
        },
        FormatoExport::Texto => exportar_texto(&cursos, hoy),
    };

    HttpResponse::Ok()
        .content_type(formato.content_type())
        .insert_header((
            "Content-Disposition",
            format!("attachment; filename=\"{}\"", nombre_archivo_export(hoy, formato)),
        ))
        .body(body)
}
