// Biblioteca raíz del crate `horarios`.
// Reexporta los módulos principales: el núcleo de horarios (`algorithm`,
// `seleccion`, `planificador`) y las capas de entrada/salida (`catalogo`,
// `export`, `server`).
pub mod models;
pub mod algorithm;
pub mod seleccion;
pub mod catalogo;
pub mod export;
pub mod config;
pub mod planificador;
pub mod api_json;
pub mod server;

/// Ejecuta el servidor HTTP (reexport para facilitar uso desde `main`)
pub use server::run_server;

pub use config::Config;
pub use models::{Catalogo, ClaseHorario, Curso, CursoSeleccionado, Franja, Opcion, Previsualizacion, Seccion};
pub use planificador::Planificador;
pub use seleccion::HorarioSeleccionado;
