//! Exportación del horario seleccionado a datos planos, JSON o texto.
//!
//! La previsualización nunca se exporta: sólo lo confirmado en la selección.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::models::Catalogo;
use crate::seleccion::HorarioSeleccionado;

#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no se pudo serializar el horario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("formato de exportación desconocido: {0}")]
    FormatoDesconocido(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OpcionExportada {
    pub tipo: String,
    pub horarios: Vec<String>,
    pub docente: String,
    pub ubicacion: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CursoExportado {
    pub codigo: String,
    pub nombre: String,
    pub seccion: String,
    pub opcion: String,
    pub opciones: Vec<OpcionExportada>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatoExport {
    Json,
    Texto,
}

impl FormatoExport {
    pub fn desde_str(s: &str) -> Result<Self, ExportError> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(FormatoExport::Json),
            "texto" | "txt" | "text" => Ok(FormatoExport::Texto),
            other => Err(ExportError::FormatoDesconocido(other.to_string())),
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            FormatoExport::Json => "json",
            FormatoExport::Texto => "txt",
        }
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            FormatoExport::Json => "application/json",
            FormatoExport::Texto => "text/plain; charset=utf-8",
        }
    }
}

/// Datos planos del horario: por curso, su sección y todas las opciones guardadas.
pub fn exportar_horario(catalogo: &Catalogo, seleccion: &HorarioSeleccionado) -> Vec<CursoExportado> {
    seleccion
        .iter()
        .map(|(codigo, info)| CursoExportado {
            codigo: codigo.clone(),
            nombre: catalogo.get(codigo).map(|c| c.nombre.clone()).unwrap_or_default(),
            seccion: info.seccion.clone(),
            opcion: info.opcion.clone(),
            opciones: info
                .opciones
                .values()
                .map(|op| OpcionExportada {
                    tipo: op.tipo.clone(),
                    horarios: op.horarios.clone(),
                    docente: op.docente.clone(),
                    ubicacion: op.ubicacion.clone(),
                })
                .collect(),
        })
        .collect()
}

pub fn exportar_json(cursos: &[CursoExportado]) -> Result<String, ExportError> {
    Ok(serde_json::to_string_pretty(cursos)?)
}

/// Versión en texto plano, pensada para imprimir o pegar en un correo.
pub fn exportar_texto(cursos: &[CursoExportado], fecha: NaiveDate) -> String {
    let mut out = String::new();
    out.push_str("HORARIO ACADÉMICO\n");
    out.push_str("=================\n\n");

    let bloques: Vec<String> = cursos
        .iter()
        .map(|c| {
            let mut b = format!("{} - {}\nSección: {}\n", c.codigo, c.nombre, c.seccion);
            for op in c.opciones.iter() {
                b.push_str(&format!(
                    "\n  {}\n  Docente: {}\n  Horarios: {}\n  Ubicación: {}\n",
                    op.tipo,
                    op.docente,
                    op.horarios.join(", "),
                    op.ubicacion
                ));
            }
            b.push_str(&"=".repeat(50));
            b
        })
        .collect();
    out.push_str(&bloques.join("\n\n"));

    out.push_str(&format!("\n\nGenerado el: {}\n", fecha.format("%d/%m/%Y")));
    out
}

pub fn nombre_archivo_export(fecha: NaiveDate, formato: FormatoExport) -> String {
    format!("horario-{}.{}", fecha.format("%Y-%m-%d"), formato.extension())
}
