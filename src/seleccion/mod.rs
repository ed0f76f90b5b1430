//! Estado de la selección: a lo sumo una sección/opción por curso.
//!
//! `HorarioSeleccionado` es inmutable desde fuera. Cada mutación devuelve una
//! instantánea nueva y deja intacta la anterior, de modo que quien la tenga
//! guardada puede compararla con la siguiente.

use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::models::{Catalogo, CursoSeleccionado};

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct HorarioSeleccionado {
    cursos: Arc<BTreeMap<String, CursoSeleccionado>>,
}

impl HorarioSeleccionado {
    /// Elige `opcion` de la sección `num_seccion` para el curso `codigo`,
    /// reemplazando lo que hubiera para ese curso. Guarda una copia de todas
    /// las opciones de la sección. No revisa conflictos.
    ///
    /// Si el curso, la sección o la opción no existen devuelve la misma selección.
    pub fn seleccionar(&self, catalogo: &Catalogo, codigo: &str, num_seccion: &str, opcion: &str) -> Self {
        let Some(seccion) = catalogo.get(codigo).and_then(|c| c.secciones.get(num_seccion)) else {
            log::debug!("seleccionar: sección {}/{} no existe en el catálogo", codigo, num_seccion);
            return self.clone();
        };
        if !seccion.opciones.contains_key(opcion) {
            log::debug!("seleccionar: opción {}/{}/{} no existe en el catálogo", codigo, num_seccion, opcion);
            return self.clone();
        }

        let mut cursos = (*self.cursos).clone();
        cursos.insert(
            codigo.to_string(),
            CursoSeleccionado {
                seccion: num_seccion.to_string(),
                opcion: opcion.to_string(),
                opciones: seccion.opciones.clone(),
            },
        );
        HorarioSeleccionado { cursos: Arc::new(cursos) }
    }

    pub fn eliminar(&self, codigo: &str) -> Self {
        if !self.cursos.contains_key(codigo) {
            return self.clone();
        }
        let mut cursos = (*self.cursos).clone();
        cursos.remove(codigo);
        HorarioSeleccionado { cursos: Arc::new(cursos) }
    }

    pub fn limpiar(&self) -> Self {
        HorarioSeleccionado::default()
    }

    pub fn get(&self, codigo: &str) -> Option<&CursoSeleccionado> {
        self.cursos.get(codigo)
    }

    pub fn contiene(&self, codigo: &str) -> bool {
        self.cursos.contains_key(codigo)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &CursoSeleccionado)> {
        self.cursos.iter()
    }

    pub fn len(&self) -> usize {
        self.cursos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cursos.is_empty()
    }
}
