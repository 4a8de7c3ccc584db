//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : porter la `Saisie` du noyau. Toute la logique d'édition
//! (alphabet, remplacement d'opérateur, point unique, évaluation) vit
//! dans le noyau ; ici on ne fait que relayer des événements.

use crate::noyau::{Evenement, Saisie};

#[derive(Default)]
pub struct AppCalc {
    pub saisie: Saisie,
}

impl AppCalc {
    /// Relaye un événement d'édition au noyau.
    pub fn envoie(&mut self, ev: Evenement) {
        self.saisie.applique(ev);
    }
}
