// src/noyau/rpn.rs
//
// Shunting-yard : infixe -> RPN (postfix)
//
// Règles:
// - précédence : + - = 1 ; * / = 2 ; tout est associatif à gauche
// - Moins unaire:
//    si '-' arrive quand on n'attend PAS une valeur (début, après '('
//    ou après un autre opérateur), on injecte 0 : "-x" => "0 x -"
//    et le '-' est empilé SANS dépiler, pour rester collé à son
//    opérande ("2*-3" doit donner 2*(0-3), pas (2*0)-3).
//
// Le gestionnaire de saisie bloque déjà la plupart des séquences
// malformées en amont, mais le parseur reste tolérant au moins unaire
// par lui-même (une chaîne arrivée par un autre chemin reste correcte).

use super::erreur::ErreurCalc;
use super::jetons::Tok;

fn precedence(t: &Tok) -> i32 {
    match t {
        Tok::Plus | Tok::Minus => 1,
        Tok::Star | Tok::Slash => 2,
        _ => 0,
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [Num(2), Plus, Num(3), Star, Num(4)]
///   rpn:    [Num(2), Num(3), Num(4), Star, Plus]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, ErreurCalc> {
    let mut out: Vec<Tok> = Vec::new();
    let mut ops: Vec<Tok> = Vec::new();

    // “valeur” = un nombre ou une expression fermée.
    // Sert à détecter le moins unaire.
    let mut prev_was_value = false;

    for tok in tokens.iter().copied() {
        match tok {
            Tok::Num(_) => {
                out.push(tok);
                prev_was_value = true;
            }

            Tok::LPar => {
                ops.push(tok);
                prev_was_value = false;
            }

            Tok::RPar => {
                // dépile jusqu'à '('
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(ErreurCalc::ParenthesesNonAppariees),
                    }
                }
                prev_was_value = true;
            }

            // moins unaire : opérande gauche implicite 0, pas de dépilage
            Tok::Minus if !prev_was_value => {
                out.push(Tok::Num(0.0));
                ops.push(Tok::Minus);
            }

            Tok::Plus | Tok::Minus | Tok::Star | Tok::Slash => {
                // dépile tant que le sommet (hors '(') a une précédence >=
                // (les deux niveaux sont associatifs à gauche)
                while let Some(top) = ops.last() {
                    if matches!(top, Tok::LPar) {
                        break;
                    }
                    if precedence(top) >= precedence(&tok) {
                        out.push(ops.pop().unwrap());
                    } else {
                        break;
                    }
                }

                ops.push(tok);
                prev_was_value = false;
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(ErreurCalc::ParenthesesNonAppariees);
        }
        out.push(op);
    }

    Ok(out)
}
