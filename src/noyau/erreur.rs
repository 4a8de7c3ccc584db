// src/noyau/erreur.rs

use thiserror::Error;

/// Taxonomie d'erreurs du noyau.
///
/// Toutes non fatales : l'utilisateur corrige l'entrée et relance.
/// Chaque variante porte son message d'affichage (via `Display`) ;
/// rien d'autre ne traverse la frontière noyau/UI.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurCalc {
    /// Caractère hors alphabet `[0-9+-*/().]` vu par le tokenizer.
    #[error("caractère inattendu: '{0}'")]
    CaractereInvalide(char),

    /// Suite de chiffres avec plus d'un point, ou '.' seul.
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    /// '(' ou ')' sans correspondant.
    #[error("parenthèses non appariées")]
    ParenthesesNonAppariees,

    /// Décompte opérandes/opérateurs incohérent à l'évaluation
    /// (sous-expression vide, opérateur orphelin, ...).
    #[error("expression invalide")]
    Syntaxe,

    /// Opérande droit d'une division égal à zéro.
    #[error("division par zéro")]
    DivisionParZero,
}
