// src/noyau/operation.rs
//
// Table des opérations (symbole -> Operation)
// -------------------------------------------
// - Données pures : pointeurs de fonctions + description optionnelle
// - Description par défaut :
//    - unaire  : "sym(x)"
//    - binaire : "a sym b"
// - Table standard construite une seule fois (OnceLock), lecture seule ensuite

use std::collections::HashMap;
use std::f64::consts::{E, PI};
use std::sync::OnceLock;

pub type Calcul0 = fn() -> f64;
pub type Calcul1 = fn(f64) -> f64;
pub type Calcul2 = fn(f64, f64) -> f64;
pub type Description1 = fn(&str) -> String;
pub type Description2 = fn(&str, &str) -> String;

#[derive(Clone, Copy, Debug)]
pub enum Operation {
    /// Ignore l’accumulateur (ex: nombre aléatoire).
    Nullaire { calcul: Calcul0, libelle: &'static str },
    /// Valeur fixe ; libellé = le symbole lui-même.
    Constante(f64),
    Unaire {
        calcul: Calcul1,
        description: Option<Description1>,
    },
    Binaire {
        calcul: Calcul2,
        description: Option<Description2>,
    },
    /// Force le calcul de l’opération binaire en attente.
    Egal,
}

/// "sym(x)"
pub fn description_unaire_standard(symbole: &str, x: &str) -> String {
    format!("{symbole}({x})")
}

/// "a sym b"
pub fn description_binaire_standard(symbole: &str, a: &str, b: &str) -> String {
    format!("{a} {symbole} {b}")
}

/* ------------------------ Calculs non triviaux ------------------------ */

fn aleatoire() -> f64 {
    // [0, 1)
    rand::random::<f64>()
}

fn oppose(x: f64) -> f64 {
    -x
}

fn inverse(x: f64) -> f64 {
    1.0 / x
}

fn carre(x: f64) -> f64 {
    x * x
}

fn description_inverse(x: &str) -> String {
    format!("({x})⁻¹")
}

fn description_carre(x: &str) -> String {
    format!("({x})²")
}

fn description_puissance(a: &str, b: &str) -> String {
    format!("{a} ^ {b}")
}

/* ------------------------ Table ------------------------ */

#[derive(Clone, Debug, Default)]
pub struct TableOperations {
    entrees: HashMap<String, Operation>,
}

impl TableOperations {
    /// Table vide (utile pour composer une table sur mesure).
    pub fn vide() -> Self {
        Self::default()
    }

    /// Table standard de la calculatrice (partagée, construite une fois).
    pub fn standard() -> &'static TableOperations {
        static TABLE: OnceLock<TableOperations> = OnceLock::new();
        TABLE.get_or_init(Self::construire_standard)
    }

    fn construire_standard() -> Self {
        use Operation::*;

        fn unaire(calcul: Calcul1) -> Operation {
            Operation::Unaire {
                calcul,
                description: None,
            }
        }
        fn binaire(calcul: Calcul2) -> Operation {
            Operation::Binaire {
                calcul,
                description: None,
            }
        }

        let mut t = Self::vide();

        t.inserer(
            "Ran",
            Nullaire {
                calcul: aleatoire,
                libelle: "rand()",
            },
        );
        t.inserer("π", Constante(PI));
        t.inserer("e", Constante(E));

        // description standard "sym(x)"
        t.inserer("±", unaire(oppose));
        t.inserer("√", unaire(f64::sqrt));
        t.inserer("cos", unaire(f64::cos));
        t.inserer("sin", unaire(f64::sin));
        t.inserer("tan", unaire(f64::tan));
        t.inserer("sin⁻¹", unaire(f64::asin));
        t.inserer("cos⁻¹", unaire(f64::acos));
        t.inserer("tan⁻¹", unaire(f64::atan));
        t.inserer("ln", unaire(f64::ln));

        // descriptions dédiées
        t.inserer(
            "x⁻¹",
            Unaire {
                calcul: inverse,
                description: Some(description_inverse),
            },
        );
        t.inserer(
            "x²",
            Unaire {
                calcul: carre,
                description: Some(description_carre),
            },
        );

        // description standard "a sym b"
        t.inserer("×", binaire(|a, b| a * b));
        t.inserer("÷", binaire(|a, b| a / b));
        t.inserer("+", binaire(|a, b| a + b));
        t.inserer("−", binaire(|a, b| a - b));

        t.inserer(
            "xʸ",
            Binaire {
                calcul: f64::powf,
                description: Some(description_puissance),
            },
        );

        t.inserer("=", Egal);

        t
    }

    pub fn get(&self, symbole: &str) -> Option<&Operation> {
        self.entrees.get(symbole)
    }

    pub fn contient(&self, symbole: &str) -> bool {
        self.entrees.contains_key(symbole)
    }

    /// Ajoute ou remplace une entrée. Retourne l’ancienne si elle existait.
    pub fn inserer(&mut self, symbole: impl Into<String>, op: Operation) -> Option<Operation> {
        self.entrees.insert(symbole.into(), op)
    }

    pub fn retirer(&mut self, symbole: &str) -> Option<Operation> {
        self.entrees.remove(symbole)
    }

    /// Symboles connus, triés (affichage stable).
    pub fn symboles(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.entrees.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}
