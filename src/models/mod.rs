// Estructuras de datos principales del generador de horarios.
//
// Los nombres de campo siguen el JSON que produce el extractor de la oferta
// (`nombre`, `secciones`, `opciones`, `horarios`, ...), así que un catálogo se
// deserializa directamente sobre estos tipos.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Campo de texto informativo: `null` o un tipo inesperado quedan en "".
/// Los números se guardan como texto (p. ej. `"codigo_subseccion": 1`).
fn texto_tolerante<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    })
}

/// Contadores informativos (`vacantes`, `matriculados`): acepta número o texto
/// numérico; cualquier otra cosa cuenta como 0.
fn contador_tolerante<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse::<u32>().ok(),
        _ => None,
    };
    Ok(n.unwrap_or_default())
}

/// Lista de horarios: se conservan sólo las entradas de texto.
fn horarios_tolerantes<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|v| match v {
                Value::String(s) => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

/// Catálogo completo: código de curso -> curso.
pub type Catalogo = BTreeMap<String, Curso>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curso {
    pub nombre: String,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub malla: String,
    /// Obligatorio / electivo, tal como viene en la oferta.
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub tipo_curso: String,
    pub secciones: BTreeMap<String, Seccion>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Seccion {
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub numero_seccion: String,
    pub opciones: BTreeMap<String, Opcion>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Opcion {
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub tipo: String,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub codigo_subseccion: String,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub docente: String,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub modalidad: String,
    #[serde(default, deserialize_with = "horarios_tolerantes")]
    pub horarios: Vec<String>,
    #[serde(default, deserialize_with = "texto_tolerante")]
    pub ubicacion: String,
    #[serde(default, deserialize_with = "contador_tolerante")]
    pub vacantes: u32,
    #[serde(default, deserialize_with = "contador_tolerante")]
    pub matriculados: u32,
}

/// Tipo de sesión derivado del campo libre `tipo` de una opción.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TipoSesion {
    Teoria,
    Laboratorio,
    Otro,
}

impl TipoSesion {
    pub fn desde_tipo(tipo: &str) -> Self {
        let t = tipo.to_lowercase();
        let es_palabra_lab = t
            .split(|c: char| !c.is_alphanumeric())
            .any(|w| w == "lab");
        if t.contains("laboratorio") || t.contains("laboratory") || es_palabra_lab {
            TipoSesion::Laboratorio
        } else if t.contains("teoría") || t.contains("teoria") || t.contains("lecture") || t.contains("theory") {
            TipoSesion::Teoria
        } else {
            TipoSesion::Otro
        }
    }
}

impl Opcion {
    pub fn tipo_sesion(&self) -> TipoSesion {
        TipoSesion::desde_tipo(&self.tipo)
    }

    /// Modalidad virtual: se marca tanto en `tipo` ("Teoría Virtual") como en `modalidad`.
    pub fn es_virtual(&self) -> bool {
        self.tipo.to_lowercase().contains("virtual") || self.modalidad.to_lowercase().contains("virtual")
    }
}

/// Franja horaria ya parseada. `fin` es exclusivo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Franja {
    /// 0 = lunes ... 5 = sábado
    pub dia: u8,
    pub inicio: u32,
    pub fin: u32,
}

impl Franja {
    pub fn hora_inicio(&self) -> u32 {
        self.inicio / 60
    }

    pub fn hora_fin(&self) -> u32 {
        self.fin / 60
    }
}

/// Elección confirmada de un curso: sección, opción y copia de las opciones de la sección.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CursoSeleccionado {
    pub seccion: String,
    pub opcion: String,
    pub opciones: BTreeMap<String, Opcion>,
}

/// Opción bajo hover/foco, todavía no confirmada.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Previsualizacion {
    pub codigo: String,
    pub seccion: String,
    pub opcion: String,
}

/// Bloque a pintar en una celda (día, hora) de la grilla.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClaseHorario {
    pub codigo: String,
    pub nombre: String,
    pub tipo: String,
    pub ubicacion: String,
    pub docente: String,
    pub seccion: String,
    pub es_inicio: bool,
    pub duracion: u32,
    pub es_preview: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tiene_conflicto: Option<bool>,
}

/// Fila de la grilla completa: una hora con las celdas de lunes a sábado.
#[derive(Debug, Clone, Serialize)]
pub struct FilaGrilla {
    pub hora: u32,
    pub celdas: Vec<Vec<ClaseHorario>>,
}

/// Vista resumida de un curso para la lista lateral.
#[derive(Debug, Clone, Serialize)]
pub struct ResumenCurso {
    pub codigo: String,
    pub nombre: String,
    pub malla: String,
    pub tipo_curso: String,
    pub secciones: usize,
    pub seleccionado: bool,
    /// Todas las opciones chocan con lo ya seleccionado.
    pub bloqueado: bool,
}
