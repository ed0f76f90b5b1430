// Funciones para detectar conflictos entre una opción candidata y lo ya seleccionado.
use serde::Serialize;

use crate::algorithm::franja::{parse_franjas, DiaDesconocido};
use crate::algorithm::vinculo::horarios_efectivos;
use crate::models::{Catalogo, Franja};
use crate::seleccion::HorarioSeleccionado;

/// Detalle de un choque: qué curso seleccionado pisa a la opción candidata y dónde.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Choque {
    pub codigo: String,
    pub seccion: String,
    pub propia: Franja,
    pub ajena: Franja,
}

/// Mismo día y rangos semiabiertos que se intersectan: terminar a las 10:00 y
/// empezar a las 10:00 no es conflicto.
pub fn franjas_se_solapan(a: &Franja, b: &Franja) -> bool {
    a.dia == b.dia && !(a.fin <= b.inicio || b.fin <= a.inicio)
}

/// Franjas ocupadas por las selecciones de todos los cursos excepto `excluir`.
/// Se consideran todas las opciones guardadas en cada selección.
fn franjas_comprometidas<'a>(
    seleccion: &'a HorarioSeleccionado,
    excluir: &'a str,
    politica: DiaDesconocido,
) -> impl Iterator<Item = (&'a str, &'a str, Franja)> + 'a {
    seleccion
        .iter()
        .filter(move |(codigo, _)| codigo.as_str() != excluir)
        .flat_map(move |(codigo, info)| {
            info.opciones.values().flat_map(move |op| {
                parse_franjas(&op.horarios, politica)
                    .into_iter()
                    .map(move |f| (codigo.as_str(), info.seccion.as_str(), f))
            })
        })
}

/// ¿La opción (curso, sección, opción) choca con algo ya seleccionado en otro curso?
///
/// Un curso que no está en el catálogo se considera en conflicto: ante la duda
/// se bloquea la selección.
pub fn opcion_tiene_conflicto(
    catalogo: &Catalogo,
    seleccion: &HorarioSeleccionado,
    codigo: &str,
    num_seccion: &str,
    opcion_key: &str,
    politica: DiaDesconocido,
) -> bool {
    let Some(curso) = catalogo.get(codigo) else { return true };
    let propias = parse_franjas(&horarios_efectivos(curso, num_seccion, opcion_key), politica);
    if propias.is_empty() { return false; }

    franjas_comprometidas(seleccion, codigo, politica)
        .any(|(_, _, ajena)| propias.iter().any(|p| franjas_se_solapan(p, &ajena)))
}

/// Igual que `opcion_tiene_conflicto` pero devuelve todos los choques encontrados.
/// Un curso fuera del catálogo devuelve una lista vacía aunque
/// `opcion_tiene_conflicto` lo dé por conflictivo: no hay franjas que comparar.
pub fn conflictos_de_opcion(
    catalogo: &Catalogo,
    seleccion: &HorarioSeleccionado,
    codigo: &str,
    num_seccion: &str,
    opcion_key: &str,
    politica: DiaDesconocido,
) -> Vec<Choque> {
    let Some(curso) = catalogo.get(codigo) else { return vec![] };
    let propias = parse_franjas(&horarios_efectivos(curso, num_seccion, opcion_key), politica);

    let mut out = Vec::new();
    for (otro, seccion, ajena) in franjas_comprometidas(seleccion, codigo, politica) {
        for p in propias.iter().filter(|p| franjas_se_solapan(p, &ajena)) {
            out.push(Choque {
                codigo: otro.to_string(),
                seccion: seccion.to_string(),
                propia: *p,
                ajena,
            });
        }
    }
    out
}

/// Un curso está bloqueado sólo si todas las opciones de todas sus secciones
/// tienen conflicto. Basta una opción libre para que el curso siga disponible.
pub fn curso_tiene_conflicto(
    catalogo: &Catalogo,
    seleccion: &HorarioSeleccionado,
    codigo: &str,
    politica: DiaDesconocido,
) -> bool {
    let Some(curso) = catalogo.get(codigo) else { return true };
    curso.secciones.iter().all(|(num, sec)| {
        sec.opciones
            .keys()
            .all(|key| opcion_tiene_conflicto(catalogo, seleccion, codigo, num, key, politica))
    })
}
