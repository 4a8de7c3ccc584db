// src/noyau/format.rs
//
// Forme décimale canonique d'un résultat f64.
//
// Contrat:
// - fini    => la forme la plus courte qui re-parse à l'identique
//              (Display de f64 : "4" et non "4.0" ; "0.5" ; "-3.25")
// - non fini (débordement, inf, NaN) => "0" — politique de tolérance
//   héritée, voir DESIGN.md
//
// La chaîne retournée est toujours re-tokenizable : chiffres, au plus
// un '.', signe '-' en tête éventuel. C'est ce qui permet l'enchaînement
// (le résultat redevient le début de l'expression suivante).

/// Forme décimale canonique d'un résultat.
pub fn format_resultat(v: f64) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    if v == 0.0 {
        // évite "-0"
        return "0".to_string();
    }
    v.to_string()
}
