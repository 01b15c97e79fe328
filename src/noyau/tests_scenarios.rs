//! Scénarios de bout en bout sur une session `Cerveau`, dans l’ordre où un
//! utilisateur appuie sur les touches.

use std::collections::HashMap;

use pretty_assertions::assert_eq;

use super::cerveau::Cerveau;
use super::eval::{Evaluation, DESCRIPTION_VIDE};

fn vars(liaisons: &[(&str, f64)]) -> HashMap<String, f64> {
    liaisons.iter().map(|(k, v)| (k.to_string(), *v)).collect()
}

fn assert_proche(v: Option<f64>, attendu: f64) {
    let v = v.unwrap_or_else(|| panic!("résultat absent, attendu {attendu}"));
    assert!((v - attendu).abs() < 1e-9, "{v} != {attendu}");
}

#[test]
fn scenario_chainage_sans_priorite() {
    let mut c = Cerveau::default();
    c.set_operand(2.0);
    c.perform_operation("+");
    c.set_operand(3.0);
    c.perform_operation("×");
    c.set_operand(4.0);
    c.perform_operation("=");

    // 20 et non 14 : pas de priorité des opérateurs
    assert_eq!(c.evaluate_sans_variables().resultat, Some(20.0));
}

#[test]
fn scenario_attente_apres_operateur() {
    let mut c = Cerveau::default();
    c.set_operand(5.0);
    c.perform_operation("+");

    assert_eq!(
        c.evaluate_sans_variables(),
        Evaluation {
            resultat: None,
            en_attente: true,
            description: "5 + ".into(),
        }
    );
}

#[test]
fn scenario_memoire_m() {
    // 7 + M = ; puis →M = 3 ; puis →M = 10
    let mut c = Cerveau::default();
    c.set_operand(7.0);
    c.perform_operation("+");
    c.set_variable("M");
    c.perform_operation("=");

    let e = c.evaluate(&vars(&[]));
    assert_eq!(e.resultat, Some(7.0));
    assert_eq!(e.description, "7 + M");

    assert_eq!(c.evaluate(&vars(&[("M", 3.0)])).resultat, Some(10.0));
    assert_eq!(c.evaluate(&vars(&[("M", 10.0)])).resultat, Some(17.0));

    // clear ne touche pas aux liaisons (elles appartiennent à l’appelant)
    c.clear();
    let liaisons = vars(&[("M", 10.0)]);
    assert_eq!(c.evaluate(&liaisons), Evaluation::vide());
    assert_eq!(liaisons.get("M"), Some(&10.0));
}

#[test]
fn scenario_trigo() {
    let mut c = Cerveau::default();
    c.perform_operation("π");
    c.perform_operation("÷");
    c.set_operand(2.0);
    c.perform_operation("=");
    c.perform_operation("sin");

    let e = c.evaluate_sans_variables();
    assert_proche(e.resultat, 1.0);
    assert_eq!(e.description, "sin(π ÷ 2)");

    c.perform_operation("sin⁻¹");
    let e = c.evaluate_sans_variables();
    assert_proche(e.resultat, std::f64::consts::FRAC_PI_2);
    assert_eq!(e.description, "sin⁻¹(sin(π ÷ 2))");
}

#[test]
fn scenario_ln_e() {
    let mut c = Cerveau::default();
    c.perform_operation("e");
    c.perform_operation("ln");
    assert_proche(c.resultat(), 1.0);
    assert_eq!(c.description(), "ln(e)");
}

#[test]
fn scenario_undo_en_cascade() {
    let mut c = Cerveau::default();
    c.set_operand(6.0);
    c.perform_operation("÷");
    c.set_operand(4.0);
    c.perform_operation("=");
    assert_eq!(c.resultat(), Some(1.5));
    assert_eq!(c.description(), "6 ÷ 4");

    c.undo(); // "="
    assert_eq!(c.resultat(), Some(4.0));
    assert!(c.en_attente());
    assert_eq!(c.description(), "6 ÷ 4");

    c.undo(); // 4
    assert_eq!(c.resultat(), None);
    assert_eq!(c.description(), "6 ÷ ");

    c.undo(); // ÷
    assert_eq!(c.resultat(), Some(6.0));
    assert!(!c.en_attente());

    c.undo(); // 6
    assert_eq!(c.evaluate_sans_variables(), Evaluation::vide());

    c.undo(); // vide : sans effet
    assert_eq!(c.description(), DESCRIPTION_VIDE);
}

#[test]
fn scenario_erreur_rendue_par_le_formateur() {
    // 0 x⁻¹ => ∞ ; puis réutilisé comme opérande littéral => jeton d’erreur
    let mut c = Cerveau::default();
    c.set_operand(0.0);
    c.perform_operation("x⁻¹");
    assert_eq!(c.resultat(), Some(f64::INFINITY));
    assert_eq!(c.description(), "(0)⁻¹");

    c.clear();
    c.set_operand(f64::NAN);
    assert_eq!(c.description(), "Error");
}

#[test]
fn scenario_symboles_inconnus_et_variables_inconnues() {
    let mut c = Cerveau::default();
    c.set_operand(3.0);
    c.perform_operation("mod"); // ignoré
    c.perform_operation("x²");
    assert_eq!(c.resultat(), Some(9.0));

    c.clear();
    c.set_variable("z"); // 0.0, pas ignoré
    c.perform_operation("cos");
    assert_eq!(c.resultat(), Some(1.0));
    assert_eq!(c.description(), "cos(z)");
}

/// Non-déterminisme VOULU : `Ran` est rappelé à chaque évaluation, sa valeur
/// n’est pas mémorisée dans le programme.
#[test]
fn ran_retire_a_chaque_evaluation() {
    let mut c = Cerveau::default();
    c.perform_operation("Ran");

    let tirages: Vec<f64> = (0..16)
        .map(|_| c.resultat().expect("Ran produit une valeur"))
        .collect();

    assert!(tirages.iter().all(|v| (0.0..1.0).contains(v)));
    assert!(
        tirages.windows(2).any(|w| w[0] != w[1]),
        "16 tirages identiques: {tirages:?}"
    );
    assert_eq!(c.description(), "rand()");
}

#[test]
fn ran_ecrase_l_accumulateur_mais_garde_l_attente() {
    let mut c = Cerveau::default();
    c.set_operand(1.0);
    c.perform_operation("+");
    c.perform_operation("Ran");
    c.perform_operation("=");

    let e = c.evaluate_sans_variables();
    assert!(!e.en_attente);
    let v = e.resultat.unwrap();
    assert!((1.0..2.0).contains(&v));
    assert_eq!(e.description, "1 + rand()");
}
