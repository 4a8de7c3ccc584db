//! src/noyau/saisie.rs
//!
//! Gestionnaire du tampon d'expression : l'unique état mutable du moteur.
//!
//! Rôle : posséder la chaîne en cours de saisie, garantir les invariants
//! d'édition caractère par caractère, et orchestrer
//! tokenize -> RPN -> évaluation sur “=”.
//!
//! Invariant du tampon : à tout instant, la chaîne est le préfixe d'une
//! expression bien formée —
//! - aucun caractère hors `[0-9+-*/().]`
//! - jamais deux opérateurs binaires adjacents, sauf un '-' de signe
//!   (en tête, après '(' ou après un autre opérateur)
//! - au plus un '.' par suite de chiffres
//!
//! Le parseur tolère de toute façon le moins unaire (rpn.rs) ; c'est ici
//! que les autres séquences malformées sont arrêtées en amont.

use super::erreur::ErreurCalc;
use super::eval::{eval_expression, DemarcheNoyau};
use super::format::format_resultat;

/// Événement d'édition émis par la surface de saisie (pavé ou clavier).
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Evenement {
    Ajout(char),
    Efface,
    Retour,
    Evalue,
}

/// Tampon d'expression + dernière erreur affichable + démarche.
#[derive(Clone, Debug, Default)]
pub struct Saisie {
    texte: String,
    erreur: Option<ErreurCalc>,
    demarche: Option<DemarcheNoyau>,
}

fn est_operateur(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

fn dans_alphabet(c: char) -> bool {
    c.is_ascii_digit() || est_operateur(c) || matches!(c, '.' | '(' | ')')
}

impl Saisie {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texte brut du tampon (sans passer par l'affichage).
    pub fn texte(&self) -> &str {
        &self.texte
    }

    /// Dernière erreur d'évaluation, tant qu'elle n'est pas congédiée.
    pub fn erreur(&self) -> Option<&ErreurCalc> {
        self.erreur.as_ref()
    }

    /// Démarche (jetons + RPN) de la dernière évaluation réussie.
    pub fn demarche(&self) -> Option<&DemarcheNoyau> {
        self.demarche.as_ref()
    }

    /// Chaîne d'affichage unique : l'erreur si présente, sinon
    /// l'expression en cours ("0" pour un tampon vide).
    pub fn affichage(&self) -> String {
        if let Some(e) = &self.erreur {
            return e.to_string();
        }
        if self.texte.is_empty() {
            return "0".to_string();
        }
        self.texte.clone()
    }

    /// Point d'entrée événementiel : applique l'édition puis retourne
    /// la chaîne d'affichage résultante.
    pub fn applique(&mut self, ev: Evenement) -> String {
        match ev {
            Evenement::Ajout(c) => self.ajoute(c),
            Evenement::Efface => self.efface(),
            Evenement::Retour => self.retour(),
            Evenement::Evalue => self.evalue(),
        }
        self.affichage()
    }

    /// Ajoute un caractère du pavé. Hors alphabet : rejet silencieux
    /// (no-op complet : l'erreur affichée reste).
    ///
    /// Règle de remplacement d'opérateur :
    /// - '-' s'ajoute toujours (signe en tête, après '(' ou après un
    ///   autre opérateur ; opérateur binaire sinon)
    /// - un autre opérateur retire d'abord toute la queue d'opérateurs,
    ///   signe compris ("2*-" + '+' => "2+", pas "2*+"), puis se décide
    ///   sur le nouveau contexte : sans opérande gauche, rejet
    ///   ("-" + '+' => tampon vide)
    /// - '.' qui donnerait un second point à la suite de chiffres en
    ///   cours : rejet
    ///
    /// Une touche acceptée de l'alphabet congédie l'erreur affichée.
    pub fn ajoute(&mut self, c: char) {
        if !dans_alphabet(c) {
            return;
        }

        self.erreur = None;

        if est_operateur(c) {
            if c == '-' {
                // signe : "2*" + '-' => "2*-"
                self.texte.push(c);
                return;
            }

            // remplacement : la queue d'opérateurs part en entier, le
            // remplacement seul pourrait recréer une paire adjacente
            while matches!(self.texte.chars().last(), Some(d) if est_operateur(d)) {
                self.texte.pop();
            }

            // opérateur binaire sans opérande gauche : rejet
            if !self.texte.is_empty() {
                self.texte.push(c);
            }
            return;
        }

        if c == '.' && self.point_deja_dans_nombre_courant() {
            return;
        }

        self.texte.push(c);
    }

    /// Vrai si la suite de chiffres en fin de tampon contient déjà un '.'.
    fn point_deja_dans_nombre_courant(&self) -> bool {
        for d in self.texte.chars().rev() {
            match d {
                '.' => return true,
                _ if d.is_ascii_digit() => {}
                _ => return false,
            }
        }
        false
    }

    /// Remise à zéro : tampon, erreur et démarche. Idempotent.
    pub fn efface(&mut self) {
        self.texte.clear();
        self.erreur = None;
        self.demarche = None;
    }

    /// Retire le dernier caractère (no-op sur tampon vide).
    pub fn retour(&mut self) {
        self.erreur = None;
        self.texte.pop();
    }

    /// Évalue le tampon via le pipeline du noyau.
    ///
    /// - tampon vide : no-op
    /// - succès : le tampon est REMPLACÉ par la forme canonique du
    ///   résultat (enchaînement : taper ensuite prolonge le calcul)
    /// - échec : le tampon est laissé intact, l'erreur est mémorisée
    ///   pour l'affichage (congédiée par la prochaine édition)
    pub fn evalue(&mut self) {
        self.erreur = None;

        match eval_expression(&self.texte) {
            Ok(None) => {}
            Ok(Some((v, d))) => {
                self.texte = format_resultat(v);
                self.demarche = Some(d);
            }
            Err(e) => {
                self.erreur = Some(e);
            }
        }
    }
}
