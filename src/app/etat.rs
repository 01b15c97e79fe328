//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : tenir l’écran de la calculatrice (affichage, historique, mémoire M)
//! et traduire les touches en appels au noyau (`Cerveau`).
//!
//! Contrats :
//! - Aucun rendu ici (pas d’egui).
//! - Chaque action qui touche au programme ré-évalue puis rafraîchit l’écran.
//! - Les liaisons de variables (M) vivent ici, pas dans le noyau.

use std::collections::HashMap;

use crate::noyau::{Cerveau, Evaluation, FormatNombre, FormateurNombre, TableOperations};

/// Nom de la variable mémoire (touches "→M" / "M").
pub const MEMOIRE: &str = "M";

#[derive(Clone, Debug)]
pub struct AppCalc {
    // --- noyau ---
    cerveau: Cerveau,
    variables: HashMap<String, f64>,

    // --- écran ---
    pub affichage: String,  // valeur courante / saisie en cours
    pub historique: String, // description + " …" ou " ="
    pub affichage_m: String,

    // --- saisie ---
    pub saisie_en_cours: bool,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(FormatNombre::default(), TableOperations::standard().clone())
    }
}

impl AppCalc {
    pub fn new(format: FormatNombre, table: TableOperations) -> Self {
        let mut app = Self {
            cerveau: Cerveau::avec_table(table, format),
            variables: HashMap::new(),
            affichage: String::new(),
            historique: String::new(),
            affichage_m: String::new(),
            saisie_en_cours: false,
        };
        app.rafraichir();
        app
    }

    pub fn format(&self) -> &FormatNombre {
        self.cerveau.formateur()
    }

    /// Séparateur décimal affiché sur la touche "." (dépend de la locale).
    pub fn separateur_decimal(&self) -> char {
        self.format().separateur_decimal()
    }

    /// Faux pour une opération désactivée (touche grisée).
    pub fn operation_disponible(&self, symbole: &str) -> bool {
        self.cerveau.table().contient(symbole)
    }

    /* ------------------------ Touches ------------------------ */

    /// Chiffre ou séparateur décimal. Un second séparateur est refusé.
    pub fn touche_chiffre(&mut self, chiffre: &str) {
        if !self.saisie_en_cours {
            self.affichage = chiffre.to_string();
            self.saisie_en_cours = true;
            return;
        }

        let sep = self.separateur_decimal();
        let est_sep = chiffre.chars().eq(std::iter::once(sep));
        if !est_sep || !self.affichage.contains(sep) {
            self.affichage.push_str(chiffre);
        }
    }

    /// Opération : valide d’abord la saisie en cours comme opérande.
    pub fn touche_operation(&mut self, symbole: &str) {
        if !self.operation_disponible(symbole) {
            return;
        }
        if self.saisie_en_cours {
            if let Some(v) = self.valeur_affichee() {
                self.cerveau.set_operand(v);
            }
            self.saisie_en_cours = false;
        }
        self.cerveau.perform_operation(symbole);
        self.rafraichir();
    }

    /// "→M" : mémorise la valeur affichée dans M, puis ré-évalue.
    pub fn touche_memoriser(&mut self) {
        self.saisie_en_cours = false;
        match self.valeur_affichee() {
            Some(v) => {
                self.variables.insert(MEMOIRE.to_string(), v);
            }
            None => {
                self.variables.remove(MEMOIRE);
            }
        }
        self.rafraichir();
    }

    /// "M" : ajoute la variable mémoire au programme.
    pub fn touche_rappel(&mut self) {
        self.cerveau.set_variable(MEMOIRE);
        self.saisie_en_cours = false;
        self.rafraichir();
    }

    /// "C" : programme + variables.
    pub fn touche_effacer(&mut self) {
        self.cerveau.clear();
        self.variables.clear();
        self.saisie_en_cours = false;
        self.rafraichir();
    }

    /// "⌫" : pendant la saisie, efface un caractère ; sinon undo.
    pub fn touche_retour(&mut self) {
        if self.saisie_en_cours {
            if self.affichage.is_empty() {
                return;
            }
            self.affichage.pop();
            if self.affichage.is_empty() {
                self.affichage = self.format().formater(0.0);
                self.saisie_en_cours = false;
                self.rafraichir();
            }
        } else {
            self.cerveau.undo();
            self.rafraichir();
        }
    }

    /* ------------------------ Écran ------------------------ */

    fn valeur_affichee(&self) -> Option<f64> {
        self.format().lire(&self.affichage)
    }

    fn rafraichir(&mut self) {
        let e = self.cerveau.evaluate(&self.variables);
        self.appliquer(&e);
    }

    /// Dépose une évaluation à l’écran.
    fn appliquer(&mut self, e: &Evaluation) {
        let fmt = self.cerveau.formateur();

        if let Some(v) = e.resultat {
            self.affichage = fmt.formater(v);
        } else if e.est_vide() {
            self.affichage = fmt.formater(0.0);
        }

        // une description en attente finit déjà par une espace ("12 + ")
        self.historique = if e.est_vide() {
            e.description.clone()
        } else if e.en_attente {
            format!("{} …", e.description)
        } else {
            format!("{} =", e.description)
        };

        let m = self.variables.get(MEMOIRE).copied().unwrap_or(0.0);
        self.affichage_m = fmt.formater(m);
    }
}
