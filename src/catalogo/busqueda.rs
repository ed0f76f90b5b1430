use strsim::jaro_winkler;

use crate::models::Catalogo;

/// Similitud mínima para sugerir un curso cuando no hay coincidencia directa.
const UMBRAL_SIMILITUD: f64 = 0.85;

/// Normaliza un nombre human-readable: minúsculas, sin acentos, puntuación a
/// espacios y espacios colapsados.
pub fn normalize_name(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        let c = match ch {
            'Á' | 'À' | 'Ä' | 'Â' | 'á' | 'à' | 'ä' | 'â' => 'a',
            'É' | 'È' | 'Ë' | 'Ê' | 'é' | 'è' | 'ë' | 'ê' => 'e',
            'Í' | 'Ì' | 'Ï' | 'Î' | 'í' | 'ì' | 'ï' | 'î' => 'i',
            'Ó' | 'Ò' | 'Ö' | 'Ô' | 'ó' | 'ò' | 'ö' | 'ô' => 'o',
            'Ú' | 'Ù' | 'Ü' | 'Û' | 'ú' | 'ù' | 'ü' | 'û' => 'u',
            'Ñ' | 'ñ' => 'n',
            other => other,
        };
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else {
            out.push(' ');
        }
    }
    out.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Códigos de los cursos cuyo código o nombre contiene `texto`.
///
/// Texto vacío devuelve todo el catálogo. Si no hay ninguna coincidencia por
/// subcadena se prueba por similitud de nombre (jaro-winkler), ordenando de
/// más a menos parecido.
pub fn buscar_cursos<'a>(catalogo: &'a Catalogo, texto: &str) -> Vec<&'a str> {
    let q = normalize_name(texto);
    if q.is_empty() {
        return catalogo.keys().map(String::as_str).collect();
    }

    let directos: Vec<&str> = catalogo
        .iter()
        .filter(|(codigo, curso)| normalize_name(codigo).contains(&q) || normalize_name(&curso.nombre).contains(&q))
        .map(|(codigo, _)| codigo.as_str())
        .collect();
    if !directos.is_empty() {
        return directos;
    }

    let mut parecidos: Vec<(&str, f64)> = catalogo
        .iter()
        .map(|(codigo, curso)| (codigo.as_str(), jaro_winkler(&q, &normalize_name(&curso.nombre))))
        .filter(|(_, sim)| *sim >= UMBRAL_SIMILITUD)
        .collect();
    parecidos.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then(a.0.cmp(b.0)));
    log::debug!("búsqueda '{}' sin coincidencias directas, {} sugerencias", texto, parecidos.len());
    parecidos.into_iter().map(|(codigo, _)| codigo).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Curso;
    use std::collections::BTreeMap;

    fn catalogo() -> Catalogo {
        let mut cat = Catalogo::new();
        for (codigo, nombre) in [
            ("CS4052", "Computación Paralela y Distribuida"),
            ("GI5101", "Estrategia y Organizaciones"),
            ("CS5101", "Proyecto Final de Ciencia de la Computación I"),
        ] {
            cat.insert(
                codigo.to_string(),
                Curso { nombre: nombre.to_string(), malla: String::new(), tipo_curso: String::new(), secciones: BTreeMap::new() },
            );
        }
        cat
    }

    #[test]
    fn test_normalize_name() {
        assert_eq!(normalize_name("  Computación   Paralela, y Distribuida "), "computacion paralela y distribuida");
        assert_eq!(normalize_name("Año"), "ano");
    }

    #[test]
    fn test_buscar_por_codigo_y_nombre() {
        let cat = catalogo();
        assert_eq!(buscar_cursos(&cat, "cs"), vec!["CS4052", "CS5101"]);
        assert_eq!(buscar_cursos(&cat, "computacion"), vec!["CS4052", "CS5101"]);
        assert_eq!(buscar_cursos(&cat, "ESTRATEGIA"), vec!["GI5101"]);
        assert_eq!(buscar_cursos(&cat, "").len(), 3);
    }

    #[test]
    fn test_buscar_por_similitud() {
        let cat = catalogo();
        assert_eq!(buscar_cursos(&cat, "Estrategia y Organizacion"), vec!["GI5101"]);
        assert_eq!(buscar_cursos(&cat, "Estrategia y Organisaciones"), vec!["GI5101"]);
        assert!(buscar_cursos(&cat, "zzzz").is_empty());
    }
}
