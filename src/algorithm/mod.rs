// Lógica de horarios: parseo de franjas, vínculo laboratorio-teoría,
// detección de conflictos y materialización de la grilla.
pub mod franja;
pub mod vinculo;
pub mod conflict;
pub mod grilla;

// Reexportar la API que usan el planificador y el servidor
pub use franja::{parse_franja, parse_franja_con, DiaDesconocido};
pub use vinculo::horarios_efectivos;
pub use conflict::{conflictos_de_opcion, curso_tiene_conflicto, franjas_se_solapan, opcion_tiene_conflicto, Choque};
pub use grilla::{clases_en_celda, grilla_completa, DIAS, HORAS_DEFECTO};
