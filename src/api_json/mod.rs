use serde::{Deserialize, Serialize};

pub mod handlers;

/// Identifica una opción concreta del catálogo.
///
/// # Estructura del JSON esperado:
/// ```json
/// { "codigo": "CS4052", "seccion": "1", "opcion": "laboratorio_01" }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpcionRequest {
	pub codigo: String,
	pub seccion: String,
	pub opcion: String,
}

/// Query de `GET /cursos?q=...`
#[derive(Debug, Default, Deserialize)]
pub struct CursosQuery {
	#[serde(default)]
	pub q: String,
}

/// Query de `GET /grilla/celda?dia=0&hora=8`
#[derive(Debug, Deserialize)]
pub struct CeldaQuery {
	pub dia: u8,
	pub hora: u32,
}

/// Query de `GET /exportar?formato=json|texto` (por defecto json)
#[derive(Debug, Deserialize)]
pub struct ExportQuery {
	pub formato: Option<String>,
}
