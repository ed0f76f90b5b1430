//! Carga y validación del catálogo de cursos (JSON generado desde la oferta).
//!
//! Submódulos:
//! - `busqueda`: filtro de cursos por código/nombre

use serde::Serialize;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

use crate::models::Catalogo;

/// Búsqueda de cursos: `buscar_cursos`
pub mod busqueda;

pub use busqueda::{buscar_cursos, normalize_name};

#[derive(Error, Debug)]
pub enum CatalogoError {
    #[error("no se pudo leer el archivo de catálogo: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    #[error("formato de catálogo inválido: {0}")]
    Formato(String),
}

pub type Result<T, E = CatalogoError> = std::result::Result<T, E>;

/// Totales del catálogo, útiles para mostrar tras una carga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EstadisticasCatalogo {
    pub total_cursos: usize,
    pub total_secciones: usize,
    pub total_opciones: usize,
}

/// Revisa la forma mínima del catálogo: objeto de cursos, cada curso con
/// `nombre` no vacío y `secciones` objeto, cada sección con `opciones` objeto.
pub fn validar_formato(data: &Value) -> Result<()> {
    let cursos = data
        .as_object()
        .ok_or_else(|| CatalogoError::Formato("el catálogo debe ser un objeto".to_string()))?;

    for (codigo, curso) in cursos.iter() {
        let curso = curso
            .as_object()
            .ok_or_else(|| CatalogoError::Formato(format!("curso '{}' no es un objeto", codigo)))?;

        let nombre_ok = curso.get("nombre").and_then(Value::as_str).is_some_and(|n| !n.is_empty());
        if !nombre_ok {
            return Err(CatalogoError::Formato(format!("curso '{}' sin nombre", codigo)));
        }

        let secciones = curso
            .get("secciones")
            .and_then(Value::as_object)
            .ok_or_else(|| CatalogoError::Formato(format!("curso '{}' sin secciones", codigo)))?;

        for (num, seccion) in secciones.iter() {
            let tiene_opciones = seccion
                .as_object()
                .and_then(|s| s.get("opciones"))
                .is_some_and(Value::is_object);
            if !tiene_opciones {
                return Err(CatalogoError::Formato(format!(
                    "sección '{}' del curso '{}' sin opciones",
                    num, codigo
                )));
            }
        }
    }
    Ok(())
}

/// Parsea y valida un catálogo desde texto JSON.
pub fn cargar_catalogo_json(json_str: &str) -> Result<Catalogo> {
    let value: Value = serde_json::from_str(json_str)?;
    cargar_catalogo_value(value)
}

/// Valida un `Value` ya parseado (p. ej. el body de una petición) y lo convierte.
pub fn cargar_catalogo_value(value: Value) -> Result<Catalogo> {
    validar_formato(&value)?;
    let catalogo: Catalogo = serde_json::from_value(value)?;
    let stats = estadisticas(&catalogo);
    log::info!(
        "catálogo cargado: {} cursos, {} secciones, {} opciones",
        stats.total_cursos,
        stats.total_secciones,
        stats.total_opciones
    );
    Ok(catalogo)
}

/// Lee el catálogo desde un archivo `.json`.
pub fn cargar_catalogo_archivo<P: AsRef<Path>>(path: P) -> Result<Catalogo> {
    let path = path.as_ref();
    let es_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    if !es_json {
        return Err(CatalogoError::Formato(format!("'{}' no es un archivo JSON", path.display())));
    }
    log::debug!("leyendo catálogo desde {}", path.display());
    let s = std::fs::read_to_string(path)?;
    cargar_catalogo_json(&s)
}

pub fn estadisticas(catalogo: &Catalogo) -> EstadisticasCatalogo {
    let total_secciones = catalogo.values().map(|c| c.secciones.len()).sum();
    let total_opciones = catalogo
        .values()
        .flat_map(|c| c.secciones.values())
        .map(|s| s.opciones.len())
        .sum();
    EstadisticasCatalogo { total_cursos: catalogo.len(), total_secciones, total_opciones }
}
