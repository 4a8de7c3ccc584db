// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Affichage unique : expression en cours OU dernière erreur (jamais les deux)
// - Pavé contraint : chiffres, + - * / . ( ), DEL, AC, =
// - Tactile : gros boutons ; le clavier physique est géré dans app.rs
//
// Note :
// - Aucune logique d'édition ici : chaque bouton émet un Evenement,
//   le noyau décide (rejet hors alphabet, remplacement d'opérateur, ...).

use eframe::egui;

use super::etat::AppCalc;
use crate::noyau::Evenement;

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_affichage(ui);

        ui.add_space(8.0);

        self.ui_pave(ui);

        ui.add_space(8.0);

        self.ui_demarche(ui);
    }

    fn ui_affichage(&mut self, ui: &mut egui::Ui) {
        let texte = self.saisie.affichage();
        let en_erreur = self.saisie.erreur().is_some();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.set_min_height(1.5 * ui.text_style_height(&egui::TextStyle::Monospace));
                if en_erreur {
                    ui.colored_label(ui.visuals().error_fg_color, &texte);
                } else {
                    ui.monospace(&texte);
                }
            });
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                self.bouton_touche(ui, "7", Evenement::Ajout('7'));
                self.bouton_touche(ui, "8", Evenement::Ajout('8'));
                self.bouton_touche(ui, "9", Evenement::Ajout('9'));
                self.bouton_action(ui, "DEL", "Efface le dernier caractère", Evenement::Retour);
                ui.end_row();

                self.bouton_touche(ui, "4", Evenement::Ajout('4'));
                self.bouton_touche(ui, "5", Evenement::Ajout('5'));
                self.bouton_touche(ui, "6", Evenement::Ajout('6'));
                self.bouton_touche(ui, "/", Evenement::Ajout('/'));
                ui.end_row();

                self.bouton_touche(ui, "1", Evenement::Ajout('1'));
                self.bouton_touche(ui, "2", Evenement::Ajout('2'));
                self.bouton_touche(ui, "3", Evenement::Ajout('3'));
                self.bouton_touche(ui, "*", Evenement::Ajout('*'));
                ui.end_row();

                self.bouton_touche(ui, "0", Evenement::Ajout('0'));
                self.bouton_touche(ui, ".", Evenement::Ajout('.'));
                self.bouton_touche(ui, "+", Evenement::Ajout('+'));
                self.bouton_touche(ui, "-", Evenement::Ajout('-'));
                ui.end_row();

                self.bouton_touche(ui, "(", Evenement::Ajout('('));
                self.bouton_touche(ui, ")", Evenement::Ajout(')'));
                self.bouton_action(ui, "AC", "Remise à zéro totale", Evenement::Efface);
                self.bouton_action(ui, "=", "Évalue l'expression", Evenement::Evalue);
                ui.end_row();
            });
    }

    fn bouton_touche(&mut self, ui: &mut egui::Ui, label: &str, ev: Evenement) {
        let resp = ui.add_sized([46.0, 32.0], egui::Button::new(label));
        if resp.clicked() {
            self.envoie(ev);
        }
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, ev: Evenement) {
        let resp = ui
            .add_sized([46.0, 32.0], egui::Button::new(label))
            .on_hover_text(tip);
        if resp.clicked() {
            self.envoie(ev);
        }
    }

    /// Démarche (jetons + RPN) de la dernière évaluation réussie.
    fn ui_demarche(&mut self, ui: &mut egui::Ui) {
        let Some(d) = self.saisie.demarche() else {
            return;
        };
        let (jetons, rpn) = (d.jetons.clone(), d.rpn.clone());

        egui::CollapsingHeader::new("Démarche")
            .default_open(false)
            .show(ui, |ui| {
                Self::champ_demarche(ui, "Jetons", "demarche_jetons", &jetons);
                Self::champ_demarche(ui, "RPN", "demarche_rpn", &rpn);
            });
    }

    fn champ_demarche(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.monospace(contenu);
                });
            });
    }
}
