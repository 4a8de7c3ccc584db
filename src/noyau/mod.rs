//! Noyau d'évaluation arithmétique
//!
//! Organisation interne :
//! - erreur.rs  : taxonomie d'erreurs (thiserror)
//! - jetons.rs  : tokenisation
//! - rpn.rs     : shunting-yard (infixe -> RPN)
//! - eval.rs    : évaluation par pile + pipeline complet
//! - format.rs  : forme décimale canonique du résultat
//! - saisie.rs  : tampon d'expression (règles d'édition + orchestration)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod saisie;


#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::eval_expression;
pub use saisie::{Evenement, Saisie};
