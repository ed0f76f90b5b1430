use std::sync::{Mutex, MutexGuard};

use actix_web::web;

use crate::planificador::Planificador;

pub mod catalogo;
pub mod seleccion;
pub mod grilla;
pub mod exportar;

/// Estado compartido del servidor: un único planificador. El Mutex serializa
/// las peticiones igual que los eventos de la interfaz.
pub type EstadoApp = web::Data<Mutex<Planificador>>;

/// Toma el planificador; si un handler anterior hizo panic se sigue con el estado que quedó.
pub(crate) fn bloquear(estado: &EstadoApp) -> MutexGuard<'_, Planificador> {
    match estado.lock() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    }
}
