use crate::models::{Curso, TipoSesion};

/// Horarios que ocupa realmente una opción.
///
/// Un laboratorio no se puede tomar sin su teoría: si la opción es de tipo
/// laboratorio se busca en la misma sección la primera teoría con la misma
/// modalidad (ambas virtuales o ambas presenciales) y sus horarios se agregan
/// a continuación de los del laboratorio. Sección u opción inexistente -> vacío.
pub fn horarios_efectivos(curso: &Curso, num_seccion: &str, opcion_key: &str) -> Vec<String> {
    let Some(seccion) = curso.secciones.get(num_seccion) else { return vec![] };
    let Some(opcion) = seccion.opciones.get(opcion_key) else { return vec![] };

    let mut horarios = opcion.horarios.clone();

    if opcion.tipo_sesion() == TipoSesion::Laboratorio {
        let teoria = seccion
            .opciones
            .values()
            .find(|o| o.tipo_sesion() == TipoSesion::Teoria && o.es_virtual() == opcion.es_virtual());
        if let Some(teoria) = teoria {
            horarios.extend(teoria.horarios.iter().cloned());
        }
    }

    horarios
}
