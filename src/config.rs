// Configuración leída de variables de entorno (y de `.env` si existe).
use std::env;
use std::ops::RangeInclusive;
use std::path::PathBuf;

use crate::algorithm::franja::DiaDesconocido;
use crate::algorithm::grilla::HORAS_DEFECTO;

pub const BIND_DEFECTO: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Dirección del servidor HTTP (`HORARIOS_BIND`).
    pub bind: String,
    /// Catálogo a precargar al arrancar (`HORARIOS_CATALOGO`).
    pub catalogo: Option<PathBuf>,
    /// `HORARIOS_DIA_DESCONOCIDO`: `lunes` o `rechazar`.
    pub dia_desconocido: DiaDesconocido,
    /// Filas de la grilla (`HORARIOS_HORA_INICIO` / `HORARIOS_HORA_FIN`).
    pub horas: RangeInclusive<u32>,
    /// Origen permitido para CORS (`HORARIOS_CORS_ORIGIN`); sin valor = permisivo.
    pub cors_origin: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: BIND_DEFECTO.to_string(),
            catalogo: None,
            dia_desconocido: DiaDesconocido::Lunes,
            horas: HORAS_DEFECTO,
            cors_origin: None,
        }
    }
}

/// Carga `.env` si existe. Se llama una sola vez al arrancar, antes del logger,
/// para que `RUST_LOG` también pueda venir de ahí.
pub fn load_dotenv() {
    if let Err(e) = dotenv::dotenv() {
        log::trace!(".env no cargado: {}", e);
    }
}

impl Config {
    /// Lee la configuración del entorno del proceso. No carga `.env`: eso lo
    /// hace `load_dotenv` al arrancar.
    pub fn from_env() -> Self {
        Self::from_lookup(|k| env::var(k).ok())
    }

    /// Construye la configuración con una función de búsqueda inyectable
    /// (permite probar sin tocar el entorno del proceso).
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Config::default();
        let get = |k: &str| lookup(k).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        if let Some(bind) = get("HORARIOS_BIND") {
            cfg.bind = bind;
        }
        cfg.catalogo = get("HORARIOS_CATALOGO").map(PathBuf::from);
        cfg.cors_origin = get("HORARIOS_CORS_ORIGIN");

        if let Some(v) = get("HORARIOS_DIA_DESCONOCIDO") {
            match DiaDesconocido::desde_str(&v) {
                Some(p) => cfg.dia_desconocido = p,
                None => log::warn!("HORARIOS_DIA_DESCONOCIDO='{}' no reconocido, se usa 'lunes'", v),
            }
        }

        let inicio = get("HORARIOS_HORA_INICIO").map(|v| (v.parse::<u32>(), v));
        let fin = get("HORARIOS_HORA_FIN").map(|v| (v.parse::<u32>(), v));
        let mut h_ini = *HORAS_DEFECTO.start();
        let mut h_fin = *HORAS_DEFECTO.end();
        match inicio {
            Some((Ok(h), _)) => h_ini = h,
            Some((Err(_), v)) => log::warn!("HORARIOS_HORA_INICIO='{}' inválido", v),
            None => {}
        }
        match fin {
            Some((Ok(h), _)) => h_fin = h,
            Some((Err(_), v)) => log::warn!("HORARIOS_HORA_FIN='{}' inválido", v),
            None => {}
        }
        if h_ini <= h_fin && h_fin < 24 {
            cfg.horas = h_ini..=h_fin;
        } else {
            log::warn!("rango de horas {}..={} inválido, se usa {:?}", h_ini, h_fin, HORAS_DEFECTO);
        }

        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn cfg_con(pares: &[(&str, &str)]) -> Config {
        let m: HashMap<String, String> = pares.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        Config::from_lookup(|k| m.get(k).cloned())
    }

    #[test]
    fn test_config_por_defecto() {
        let cfg = cfg_con(&[]);
        assert_eq!(cfg, Config::default());
        assert_eq!(cfg.horas, 7..=22);
    }

    #[test]
    fn test_config_valores() {
        let cfg = cfg_con(&[
            ("HORARIOS_BIND", "0.0.0.0:9000"),
            ("HORARIOS_CATALOGO", "data/cursos_horarios.json"),
            ("HORARIOS_DIA_DESCONOCIDO", "rechazar"),
            ("HORARIOS_HORA_INICIO", "8"),
            ("HORARIOS_HORA_FIN", "20"),
            ("HORARIOS_CORS_ORIGIN", "http://localhost:3000"),
        ]);
        assert_eq!(cfg.bind, "0.0.0.0:9000");
        assert_eq!(cfg.catalogo, Some(PathBuf::from("data/cursos_horarios.json")));
        assert_eq!(cfg.dia_desconocido, DiaDesconocido::Rechazar);
        assert_eq!(cfg.horas, 8..=20);
        assert_eq!(cfg.cors_origin.as_deref(), Some("http://localhost:3000"));
    }

    #[test]
    fn test_from_lookup_no_depende_de_dotenv() {
        // sin variables no aparece nada que venga de un `.env`
        let cfg = Config::from_lookup(|_| None);
        assert_eq!(cfg.catalogo, None);
        assert_eq!(cfg.cors_origin, None);
        // cargar `.env` sin archivo no falla
        load_dotenv();
    }

    #[test]
    fn test_config_valores_invalidos_usan_defecto() {
        let cfg = cfg_con(&[
            ("HORARIOS_DIA_DESCONOCIDO", "quizas"),
            ("HORARIOS_HORA_INICIO", "20"),
            ("HORARIOS_HORA_FIN", "8"),
            ("HORARIOS_BIND", "  "),
        ]);
        assert_eq!(cfg.dia_desconocido, DiaDesconocido::Lunes);
        assert_eq!(cfg.horas, HORAS_DEFECTO);
        assert_eq!(cfg.bind, BIND_DEFECTO);
    }
}
