// Parseo de franjas horarias del tipo "Lun. 8:00 - 10:00".
use crate::models::Franja;

/// Minutos de un día completo; los valores parseados se recortan a este rango.
pub const MINUTOS_DIA: u32 = 24 * 60;

/// Qué hacer cuando la abreviatura del día no se reconoce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiaDesconocido {
    /// Se asume lunes (comportamiento histórico de la grilla).
    #[default]
    Lunes,
    /// La franja se descarta.
    Rechazar,
}

impl DiaDesconocido {
    pub fn desde_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "lunes" | "monday" | "default" => Some(DiaDesconocido::Lunes),
            "rechazar" | "reject" | "strict" => Some(DiaDesconocido::Rechazar),
            _ => None,
        }
    }
}

/// Abreviatura -> índice de día (0 = lunes). Acepta español y inglés.
pub fn indice_dia(abrev: &str) -> Option<u8> {
    let a: String = abrev
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect();
    match a.as_str() {
        "lun" | "mon" => Some(0),
        "mar" | "tue" => Some(1),
        "mie" | "wed" => Some(2),
        "jue" | "thu" => Some(3),
        "vie" | "fri" => Some(4),
        "sab" | "sat" => Some(5),
        _ => None,
    }
}

/// Parsea una franja con la política por defecto (día desconocido = lunes).
pub fn parse_franja(token: &str) -> Option<Franja> {
    parse_franja_con(token, DiaDesconocido::Lunes)
}

/// Busca dentro de `token` el patrón `<Dia>. H:MM - H:MM` y lo convierte a `Franja`.
/// El texto antes o después del patrón se ignora.
pub fn parse_franja_con(token: &str, politica: DiaDesconocido) -> Option<Franja> {
    let chars: Vec<char> = token.chars().collect();
    for (i, &c) in chars.iter().enumerate() {
        if c != '.' { continue; }
        // la palabra pegada al punto es la abreviatura del día
        let mut ini = i;
        while ini > 0 && es_letra_palabra(chars[ini - 1]) { ini -= 1; }
        if ini == i { continue; }
        let Some((h_ini, h_fin)) = parse_rango(&chars[i + 1..]) else { continue };

        let abrev: String = chars[ini..i].iter().collect();
        let dia = match (indice_dia(&abrev), politica) {
            (Some(d), _) => d,
            (None, DiaDesconocido::Lunes) => 0,
            (None, DiaDesconocido::Rechazar) => {
                log::trace!("franja descartada, día desconocido '{}' en '{}'", abrev, token);
                return None;
            }
        };
        let inicio = h_ini.min(MINUTOS_DIA);
        let fin = h_fin.min(MINUTOS_DIA);
        if inicio >= fin {
            log::trace!("franja descartada, inicio >= fin en '{}'", token);
            return None;
        }
        return Some(Franja { dia, inicio, fin });
    }
    log::trace!("franja no reconocida: '{}'", token);
    None
}

fn es_letra_palabra(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// `\s*H:MM\s*-\s*H:MM` al comienzo de `s`; devuelve (inicio, fin) en minutos.
fn parse_rango(s: &[char]) -> Option<(u32, u32)> {
    let mut pos = saltar_espacios(s, 0);
    let (inicio, p) = parse_hora(s, pos)?;
    pos = saltar_espacios(s, p);
    if s.get(pos) != Some(&'-') { return None; }
    pos = saltar_espacios(s, pos + 1);
    let (fin, _) = parse_hora(s, pos)?;
    Some((inicio, fin))
}

fn saltar_espacios(s: &[char], mut pos: usize) -> usize {
    while pos < s.len() && s[pos].is_whitespace() { pos += 1; }
    pos
}

/// `H:MM` o `HH:MM` (minutos siempre con dos dígitos).
fn parse_hora(s: &[char], pos: usize) -> Option<(u32, usize)> {
    let mut p = pos;
    let mut hh: u32 = 0;
    while p < s.len() && p - pos < 2 && s[p].is_ascii_digit() {
        hh = hh * 10 + s[p].to_digit(10)?;
        p += 1;
    }
    if p == pos || s.get(p) != Some(&':') { return None; }
    p += 1;
    let d1 = s.get(p).and_then(|c| c.to_digit(10))?;
    let d2 = s.get(p + 1).and_then(|c| c.to_digit(10))?;
    let mm = d1 * 10 + d2;
    Some((hh * 60 + mm, p + 2))
}

/// Parsea todos los tokens, descartando los que no se reconocen.
pub fn parse_franjas<'a, I>(tokens: I, politica: DiaDesconocido) -> Vec<Franja>
where
    I: IntoIterator<Item = &'a String>,
{
    tokens.into_iter().filter_map(|t| parse_franja_con(t, politica)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_franja_basico() {
        assert_eq!(parse_franja("Lun. 8:00 - 10:00"), Some(Franja { dia: 0, inicio: 480, fin: 600 }));
        assert_eq!(parse_franja("Mar. 14:00 - 16:00"), Some(Franja { dia: 1, inicio: 840, fin: 960 }));
        assert_eq!(parse_franja("Sab.07:30-09:10"), Some(Franja { dia: 5, inicio: 450, fin: 550 }));
    }

    #[test]
    fn test_parse_franja_ingles_y_acentos() {
        assert_eq!(parse_franja("Thu. 9:00 - 11:00").map(|f| f.dia), Some(3));
        assert_eq!(parse_franja("Mié. 9:00 - 11:00").map(|f| f.dia), Some(2));
        assert_eq!(parse_franja("Sáb. 9:00 - 11:00").map(|f| f.dia), Some(5));
    }

    #[test]
    fn test_parse_franja_con_texto_alrededor() {
        let f = parse_franja("Sesión Vie. 10:00 - 12:00 (A-204)").expect("debe parsear");
        assert_eq!(f, Franja { dia: 4, inicio: 600, fin: 720 });
    }

    #[test]
    fn test_parse_franja_malformada() {
        assert_eq!(parse_franja(""), None);
        assert_eq!(parse_franja("Sin horario"), None);
        assert_eq!(parse_franja("Lun 8:00 - 10:00"), None);
        assert_eq!(parse_franja("Lun. 8:0 - 10:00"), None);
        assert_eq!(parse_franja("Lun. 108:00 - 110:00"), None);
        // inicio >= fin
        assert_eq!(parse_franja("Lun. 10:00 - 8:00"), None);
        assert_eq!(parse_franja("Lun. 10:00 - 10:00"), None);
    }

    #[test]
    fn test_dia_desconocido() {
        assert_eq!(parse_franja("Dom. 8:00 - 10:00").map(|f| f.dia), Some(0));
        assert_eq!(parse_franja_con("Dom. 8:00 - 10:00", DiaDesconocido::Rechazar), None);
        assert_eq!(DiaDesconocido::desde_str("Rechazar"), Some(DiaDesconocido::Rechazar));
        assert_eq!(DiaDesconocido::desde_str("???"), None);
    }

    #[test]
    fn test_recorte_24h() {
        let f = parse_franja("Vie. 23:00 - 99:59").expect("debe parsear");
        assert_eq!(f.fin, MINUTOS_DIA);
        assert_eq!(parse_franja("Vie. 25:00 - 26:00"), None);
    }
}
