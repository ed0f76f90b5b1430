use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpResponse, HttpServer, Responder};
use serde_json::json;
use std::sync::Mutex;

use crate::api_json::handlers::{catalogo, exportar, grilla, seleccion, EstadoApp};
use crate::api_json::OpcionRequest;
use crate::config::Config;
use crate::planificador::Planificador;

/// Tamaño máximo del body JSON (los catálogos completos pesan varios cientos de KB).
const LIMITE_JSON: usize = 8 * 1024 * 1024;

/// Registra todas las rutas de la API. Se usa tanto en `run_server` como en los tests.
pub fn configurar_rutas(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().limit(LIMITE_JSON))
        .route("/catalogo", web::post().to(catalogo::cargar_catalogo_handler))
        .route("/catalogo", web::delete().to(catalogo::resetear_handler))
        .route("/cursos", web::get().to(catalogo::cursos_handler))
        .route("/cursos/{codigo}", web::get().to(catalogo::curso_detalle_handler))
        .route("/seleccion", web::get().to(seleccion::seleccion_handler))
        .route("/seleccion", web::post().to(seleccion::seleccionar_handler))
        .route("/seleccion", web::delete().to(seleccion::limpiar_handler))
        .route("/seleccion/{codigo}", web::delete().to(seleccion::eliminar_handler))
        .route("/preview", web::put().to(seleccion::previsualizar_handler))
        .route("/preview", web::delete().to(seleccion::quitar_previsualizacion_handler))
        .route("/conflicto", web::get().to(seleccion::conflicto_handler))
        .route("/grilla", web::get().to(grilla::grilla_handler))
        .route("/grilla/celda", web::get().to(grilla::celda_handler))
        .route("/exportar", web::get().to(exportar::exportar_handler))
        .route("/help", web::get().to(help_handler));
}

fn cors(origin: Option<&str>) -> Cors {
    match origin {
        Some(o) => Cors::default().allowed_origin(o).allow_any_method().allow_any_header(),
        None => Cors::permissive(),
    }
}

pub async fn run_server(config: Config, planificador: Planificador) -> std::io::Result<()> {
    let estado: EstadoApp = web::Data::new(Mutex::new(planificador));
    let cors_origin = config.cors_origin.clone();
    log::info!("Iniciando servidor en http://{}", config.bind);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Logger::default())
            .wrap(cors(cors_origin.as_deref()))
            .app_data(estado.clone())
            .configure(configurar_rutas)
    })
    .bind(config.bind.as_str())?
    .run()
    .await
}

async fn help_handler() -> impl Responder {
    let example = OpcionRequest {
        codigo: "CS4052".to_string(),
        seccion: "1".to_string(),
        opcion: "laboratorio_01".to_string(),
    };

    let help = json!({
        "description": "API del generador de horarios. Cargar un catálogo con POST /catalogo y luego seleccionar opciones; la grilla y los conflictos se recalculan en cada consulta.",
        "endpoints": {
            "POST /catalogo": "carga un catálogo JSON (reemplaza el anterior y limpia la selección)",
            "DELETE /catalogo": "vuelve al estado inicial",
            "GET /cursos?q=": "lista de cursos con marcas bloqueado/seleccionado",
            "GET /cursos/{codigo}": "secciones con teorías y laboratorios y su conflicto",
            "GET /seleccion": "selección actual",
            "POST /seleccion": "confirma una opción (body: ver 'example')",
            "DELETE /seleccion": "limpia la selección",
            "DELETE /seleccion/{codigo}": "quita un curso",
            "PUT /preview": "previsualiza una opción (body: ver 'example')",
            "DELETE /preview": "quita la previsualización",
            "GET /conflicto?codigo=&seccion=&opcion=": "conflicto y detalle de choques",
            "GET /grilla": "grilla completa",
            "GET /grilla/celda?dia=&hora=": "bloques de una celda",
            "GET /exportar?formato=json|texto": "descarga del horario"
        },
        "example": example,
    });

    HttpResponse::Ok().json(help)
}
