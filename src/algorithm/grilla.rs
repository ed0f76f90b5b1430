// Materialización de la grilla semanal: qué bloques van en cada celda (día, hora).
use std::ops::RangeInclusive;

use crate::algorithm::conflict::opcion_tiene_conflicto;
use crate::algorithm::franja::{parse_franja_con, DiaDesconocido};
use crate::algorithm::vinculo::horarios_efectivos;
use crate::models::{Catalogo, ClaseHorario, FilaGrilla, Franja, Previsualizacion};
use crate::seleccion::HorarioSeleccionado;

/// Días que muestra la grilla (lunes a sábado).
pub const DIAS: [&str; 6] = ["Lunes", "Martes", "Miércoles", "Jueves", "Viernes", "Sábado"];

/// Horas por defecto de la grilla: 7:00 a 22:00.
pub const HORAS_DEFECTO: RangeInclusive<u32> = 7..=22;

/// Si la franja cubre la `hora` devuelve (es_inicio, duracion) en horas enteras.
/// Los minutos se truncan a la hora: una franja 8:30-9:50 ocupa sólo la fila de las 8.
fn cubre_hora(franja: &Franja, dia: u8, hora: u32) -> Option<(bool, u32)> {
    if franja.dia != dia { return None; }
    let h_ini = franja.hora_inicio();
    let h_fin = franja.hora_fin();
    if hora >= h_ini && hora < h_fin {
        Some((hora == h_ini, h_fin - h_ini))
    } else {
        None
    }
}

/// Bloques que ocupan la celda (`dia`, `hora`).
///
/// Primero van los bloques confirmados (todas las opciones guardadas en cada
/// selección) y al final los de la previsualización, que llevan además el
/// resultado de `opcion_tiene_conflicto` contra la selección actual.
pub fn clases_en_celda(
    catalogo: &Catalogo,
    seleccion: &HorarioSeleccionado,
    preview: Option<&Previsualizacion>,
    dia: u8,
    hora: u32,
    politica: DiaDesconocido,
) -> Vec<ClaseHorario> {
    let mut clases: Vec<ClaseHorario> = Vec::new();

    for (codigo, info) in seleccion.iter() {
        let nombre = catalogo.get(codigo).map(|c| c.nombre.clone()).unwrap_or_default();
        for opcion in info.opciones.values() {
            for horario in opcion.horarios.iter() {
                let Some(franja) = parse_franja_con(horario, politica) else { continue };
                if let Some((es_inicio, duracion)) = cubre_hora(&franja, dia, hora) {
                    clases.push(ClaseHorario {
                        codigo: codigo.clone(),
                        nombre: nombre.clone(),
                        tipo: opcion.tipo.clone(),
                        ubicacion: opcion.ubicacion.clone(),
                        docente: opcion.docente.clone(),
                        seccion: info.seccion.clone(),
                        es_inicio,
                        duracion,
                        es_preview: false,
                        tiene_conflicto: None,
                    });
                }
            }
        }
    }

    if let Some(p) = preview {
        let curso = catalogo.get(&p.codigo);
        let opcion = curso
            .and_then(|c| c.secciones.get(&p.seccion))
            .and_then(|s| s.opciones.get(&p.opcion));

        if let (Some(curso), Some(opcion)) = (curso, opcion) {
            let horarios = horarios_efectivos(curso, &p.seccion, &p.opcion);
            let tiene_conflicto =
                opcion_tiene_conflicto(catalogo, seleccion, &p.codigo, &p.seccion, &p.opcion, politica);

            for horario in horarios.iter() {
                let Some(franja) = parse_franja_con(horario, politica) else { continue };
                if let Some((es_inicio, duracion)) = cubre_hora(&franja, dia, hora) {
                    clases.push(ClaseHorario {
                        codigo: p.codigo.clone(),
                        nombre: curso.nombre.clone(),
                        tipo: opcion.tipo.clone(),
                        ubicacion: opcion.ubicacion.clone(),
                        docente: opcion.docente.clone(),
                        seccion: p.seccion.clone(),
                        es_inicio,
                        duracion,
                        es_preview: true,
                        tiene_conflicto: Some(tiene_conflicto),
                    });
                }
            }
        }
    }

    clases
}

/// Grilla completa: una fila por hora y, en cada fila, una celda por día.
pub fn grilla_completa(
    catalogo: &Catalogo,
    seleccion: &HorarioSeleccionado,
    preview: Option<&Previsualizacion>,
    horas: RangeInclusive<u32>,
    politica: DiaDesconocido,
) -> Vec<FilaGrilla> {
    horas
        .map(|hora| FilaGrilla {
            hora,
            celdas: (0..DIAS.len() as u8)
                .map(|dia| clases_en_celda(catalogo, seleccion, preview, dia, hora, politica))
                .collect(),
        })
        .collect()
}
