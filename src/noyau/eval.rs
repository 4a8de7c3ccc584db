//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN -> pile d'opérandes -> résultat f64
//!
//! Le texte des jetons et de la RPN est retourné avec le résultat
//! (panneau “démarche” de la vue). Traces `debug!` à chaque étape
//! (RUST_LOG=debug en natif).

use log::debug;

use super::erreur::ErreurCalc;
use super::jetons::{format_tokens, tokenize, Tok};
use super::rpn::to_rpn;

#[derive(Default, Clone, Debug)]
pub struct DemarcheNoyau {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression complète.
///
/// - `Ok(None)` : entrée vide (no-op pour l'appelant, pas une erreur)
/// - `Ok(Some((v, d)))` : résultat + démarche (jetons / RPN en texte)
/// - `Err(e)` : une des cinq erreurs du noyau
pub fn eval_expression(expr_str: &str) -> Result<Option<(f64, DemarcheNoyau)>, ErreurCalc> {
    // 1) Jetons
    let jetons = tokenize(expr_str)?;
    if jetons.is_empty() {
        return Ok(None);
    }
    let jetons_txt = format_tokens(&jetons);
    debug!("jetons: {jetons_txt}");

    // 2) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_tokens(&rpn);
    debug!("rpn: {rpn_txt}");

    // 3) Évaluation par pile
    let v = eval_rpn(&rpn)?;
    debug!("résultat: {v}");

    Ok(Some((
        v,
        DemarcheNoyau {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    )))
}

/// Évalue une RPN avec une pile d'opérandes.
///
/// Chaque opérateur dépile b puis a (dans cet ordre) et empile `a op b`.
/// Pile finale != 1 valeur => Syntaxe.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, ErreurCalc> {
    let mut pile: Vec<f64> = Vec::new();

    for tok in rpn.iter().copied() {
        match tok {
            Tok::Num(v) => pile.push(v),

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                let b = pile.pop().ok_or(ErreurCalc::Syntaxe)?;
                let a = pile.pop().ok_or(ErreurCalc::Syntaxe)?;

                let v = match tok {
                    Tok::Plus => a + b,
                    Tok::Minus => a - b,
                    Tok::Star => a * b,
                    Tok::Slash => {
                        if b == 0.0 {
                            return Err(ErreurCalc::DivisionParZero);
                        }
                        a / b
                    }
                    _ => unreachable!(),
                };

                pile.push(v);
            }

            // une parenthèse ne doit jamais atteindre la RPN
            Tok::LPar | Tok::RPar => return Err(ErreurCalc::Syntaxe),
        }
    }

    if pile.len() != 1 {
        return Err(ErreurCalc::Syntaxe);
    }
    Ok(pile[0])
}
