// src/noyau/jetons.rs

use super::erreur::ErreurCalc;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Tok {
    Num(f64),

    Plus,
    Minus,
    Star,
    Slash,

    LPar,
    RPar,
}

/// Tokenize une chaîne en jetons.
/// Supporte:
/// - nombres décimaux (ex: 12, 0.5, 12.25) — au plus un '.' par nombre
/// - opérateurs + - * /
/// - parenthèses ( )
///
/// Les espaces sont ignorés. Entrée vide => liste vide (l'appelant traite
/// ce cas comme un no-op, pas comme une erreur).
pub fn tokenize(s: &str) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Parenthèses + opérateurs (un caractère = un jeton)
        match c {
            '(' => {
                out.push(Tok::LPar);
                i += 1;
                continue;
            }
            ')' => {
                out.push(Tok::RPar);
                i += 1;
                continue;
            }
            '+' => {
                out.push(Tok::Plus);
                i += 1;
                continue;
            }
            '-' => {
                out.push(Tok::Minus);
                i += 1;
                continue;
            }
            '*' => {
                out.push(Tok::Star);
                i += 1;
                continue;
            }
            '/' => {
                out.push(Tok::Slash);
                i += 1;
                continue;
            }
            _ => {}
        }

        // Nombre : consommation gloutonne de [0-9.]
        if c.is_ascii_digit() || c == '.' {
            let start = i;
            while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                i += 1;
            }
            let lexeme: String = chars[start..i].iter().collect();

            let points = lexeme.chars().filter(|&d| d == '.').count();
            if points > 1 || lexeme == "." {
                return Err(ErreurCalc::NombreInvalide(lexeme));
            }

            // "5." et ".5" sont des f64 valides pour le parse Rust.
            let v: f64 = lexeme
                .parse()
                .map_err(|_| ErreurCalc::NombreInvalide(lexeme.clone()))?;
            out.push(Tok::Num(v));
            continue;
        }

        return Err(ErreurCalc::CaractereInvalide(c));
    }

    Ok(out)
}

/// Format utilitaire (panneau “démarche”) : liste de jetons en texte.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(v) => v.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
