//! `Planificador`: reúne el catálogo, la selección y la previsualización, y
//! expone las consultas que necesita la vista (lista de cursos, grilla, export).
//!
//! Todas las operaciones son síncronas. Cada mutación reemplaza la instantánea
//! de selección por una nueva, de modo que `seleccion()` puede guardarse y
//! compararse con la siguiente.

use std::collections::BTreeMap;
use std::ops::RangeInclusive;
use std::sync::Arc;

use crate::algorithm::{self, Choque, DiaDesconocido, HORAS_DEFECTO};
use crate::catalogo::buscar_cursos;
use crate::export::{exportar_horario, CursoExportado};
use crate::models::{Catalogo, ClaseHorario, FilaGrilla, Opcion, Previsualizacion, ResumenCurso, TipoSesion};
use crate::seleccion::HorarioSeleccionado;

/// Opciones de una sección separadas en teorías y laboratorios.
/// Las opciones de otro tipo no aparecen en ninguno de los dos grupos.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct OpcionesPorTipo {
    pub teorias: Vec<(String, Opcion)>,
    pub laboratorios: Vec<(String, Opcion)>,
}

pub fn agrupar_opciones_por_tipo(opciones: &BTreeMap<String, Opcion>) -> OpcionesPorTipo {
    let mut out = OpcionesPorTipo::default();
    for (key, opcion) in opciones.iter() {
        match opcion.tipo_sesion() {
            TipoSesion::Laboratorio => out.laboratorios.push((key.clone(), opcion.clone())),
            TipoSesion::Teoria => out.teorias.push((key.clone(), opcion.clone())),
            TipoSesion::Otro => {}
        }
    }
    out
}

#[derive(Debug, Clone)]
pub struct Planificador {
    catalogo: Arc<Catalogo>,
    seleccion: HorarioSeleccionado,
    preview: Option<Previsualizacion>,
    politica: DiaDesconocido,
    horas: RangeInclusive<u32>,
}

impl Default for Planificador {
    fn default() -> Self {
        Planificador::new(DiaDesconocido::Lunes, HORAS_DEFECTO)
    }
}

impl Planificador {
    pub fn new(politica: DiaDesconocido, horas: RangeInclusive<u32>) -> Self {
        Planificador {
            catalogo: Arc::new(Catalogo::new()),
            seleccion: HorarioSeleccionado::default(),
            preview: None,
            politica,
            horas,
        }
    }

    pub fn con_catalogo(catalogo: Catalogo) -> Self {
        let mut p = Planificador::default();
        p.cargar_catalogo(catalogo);
        p
    }

    /// Reemplaza el catálogo completo; la selección y la previsualización se descartan.
    pub fn cargar_catalogo(&mut self, catalogo: Catalogo) {
        log::debug!("reemplazando catálogo ({} cursos)", catalogo.len());
        self.catalogo = Arc::new(catalogo);
        self.seleccion = HorarioSeleccionado::default();
        self.preview = None;
    }

    /// Vuelve al estado inicial: sin catálogo, sin selección, sin previsualización.
    pub fn resetear(&mut self) {
        self.cargar_catalogo(Catalogo::new());
    }

    pub fn catalogo(&self) -> &Arc<Catalogo> {
        &self.catalogo
    }

    pub fn tiene_catalogo(&self) -> bool {
        !self.catalogo.is_empty()
    }

    pub fn seleccion(&self) -> &HorarioSeleccionado {
        &self.seleccion
    }

    pub fn previsualizacion(&self) -> Option<&Previsualizacion> {
        self.preview.as_ref()
    }

    pub fn horas(&self) -> RangeInclusive<u32> {
        self.horas.clone()
    }

    /// Confirma una opción. Confirmar también cierra la previsualización.
    pub fn seleccionar(&mut self, codigo: &str, num_seccion: &str, opcion: &str) -> &HorarioSeleccionado {
        self.seleccion = self.seleccion.seleccionar(&self.catalogo, codigo, num_seccion, opcion);
        self.preview = None;
        &self.seleccion
    }

    pub fn eliminar(&mut self, codigo: &str) -> &HorarioSeleccionado {
        self.seleccion = self.seleccion.eliminar(codigo);
        &self.seleccion
    }

    pub fn limpiar(&mut self) -> &HorarioSeleccionado {
        self.seleccion = self.seleccion.limpiar();
        self.preview = None;
        &self.seleccion
    }

    pub fn previsualizar(&mut self, codigo: &str, num_seccion: &str, opcion: &str) {
        self.preview = Some(Previsualizacion {
            codigo: codigo.to_string(),
            seccion: num_seccion.to_string(),
            opcion: opcion.to_string(),
        });
    }

    pub fn quitar_previsualizacion(&mut self) {
        self.preview = None;
    }

    pub fn opcion_tiene_conflicto(&self, codigo: &str, num_seccion: &str, opcion: &str) -> bool {
        algorithm::opcion_tiene_conflicto(&self.catalogo, &self.seleccion, codigo, num_seccion, opcion, self.politica)
    }

    pub fn conflictos_de_opcion(&self, codigo: &str, num_seccion: &str, opcion: &str) -> Vec<Choque> {
        algorithm::conflictos_de_opcion(&self.catalogo, &self.seleccion, codigo, num_seccion, opcion, self.politica)
    }

    pub fn contiene_curso(&self, codigo: &str) -> bool {
        self.catalogo.contains_key(codigo)
    }

    pub fn curso_tiene_conflicto(&self, codigo: &str) -> bool {
        algorithm::curso_tiene_conflicto(&self.catalogo, &self.seleccion, codigo, self.politica)
    }

    pub fn horarios_efectivos(&self, codigo: &str, num_seccion: &str, opcion: &str) -> Vec<String> {
        match self.catalogo.get(codigo) {
            Some(curso) => algorithm::horarios_efectivos(curso, num_seccion, opcion),
            None => vec![],
        }
    }

    pub fn clases_en_celda(&self, dia: u8, hora: u32) -> Vec<ClaseHorario> {
        algorithm::clases_en_celda(&self.catalogo, &self.seleccion, self.preview.as_ref(), dia, hora, self.politica)
    }

    pub fn grilla(&self) -> Vec<FilaGrilla> {
        algorithm::grilla_completa(&self.catalogo, &self.seleccion, self.preview.as_ref(), self.horas.clone(), self.politica)
    }

    pub fn buscar_cursos(&self, texto: &str) -> Vec<&str> {
        buscar_cursos(&self.catalogo, texto)
    }

    /// Lista de cursos para la vista. Un curso ya seleccionado nunca aparece bloqueado.
    pub fn resumen_cursos(&self, texto: &str) -> Vec<ResumenCurso> {
        self.buscar_cursos(texto)
            .into_iter()
            .filter_map(|codigo| {
                let curso = self.catalogo.get(codigo)?;
                let seleccionado = self.seleccion.contiene(codigo);
                Some(ResumenCurso {
                    codigo: codigo.to_string(),
                    nombre: curso.nombre.clone(),
                    malla: curso.malla.clone(),
                    tipo_curso: curso.tipo_curso.clone(),
                    secciones: curso.secciones.len(),
                    seleccionado,
                    bloqueado: !seleccionado && self.curso_tiene_conflicto(codigo),
                })
            })
            .collect()
    }

    pub fn opciones_por_tipo(&self, codigo: &str, num_seccion: &str) -> Option<OpcionesPorTipo> {
        let seccion = self.catalogo.get(codigo)?.secciones.get(num_seccion)?;
        Some(agrupar_opciones_por_tipo(&seccion.opciones))
    }

    pub fn exportar(&self) -> Vec<CursoExportado> {
        exportar_horario(&self.catalogo, &self.seleccion)
    }
}
