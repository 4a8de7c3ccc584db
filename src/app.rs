// src/app.rs
//
// Calculatrice à pavé — module App (racine)
// ------------------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + vue.rs)
// - Ré-exporter AppCalc (pour main.rs: use crate::app::AppCalc;)
// - Fournir l'impl eframe::App (compatible NATIF + WEB)
//
// Important:
// - Pas de champ texte éditable : le pavé est contraint, donc le clavier
//   physique est traduit ici en Evenement (le noyau rejette de toute
//   façon les caractères hors alphabet).

pub mod etat;
pub mod vue;

// Ré-export pratique : `use crate::app::AppCalc;`
pub use etat::AppCalc;

use eframe::egui;

use crate::noyau::Evenement;

impl eframe::App for AppCalc {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Clavier physique -> événements d'édition :
        // - texte tapé   => Ajout (caractère par caractère)
        // - Enter        => Evalue
        // - Backspace    => Retour
        // - Escape       => Efface (comme le bouton AC)
        let evs: Vec<Evenement> = ctx.input(|i| {
            let mut evs = Vec::new();
            for e in &i.events {
                match e {
                    egui::Event::Text(t) => {
                        evs.extend(t.chars().map(Evenement::Ajout));
                    }
                    egui::Event::Key {
                        key: egui::Key::Enter,
                        pressed: true,
                        ..
                    } => evs.push(Evenement::Evalue),
                    egui::Event::Key {
                        key: egui::Key::Backspace,
                        pressed: true,
                        ..
                    } => evs.push(Evenement::Retour),
                    egui::Event::Key {
                        key: egui::Key::Escape,
                        pressed: true,
                        ..
                    } => evs.push(Evenement::Efface),
                    _ => {}
                }
            }
            evs
        });

        for ev in evs {
            self.envoie(ev);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.ui(ui); // méthode publique (dans vue.rs)
        });
    }
}
