// src/noyau/cerveau.rs
//
// Cerveau = session de calcul
// ---------------------------
// Possède le programme (journal), la table des opérations et le formateur.
// Les liaisons de variables restent à l’appelant : elles sont fournies à chaque
// évaluation (clear() ne les touche pas).

use std::collections::HashMap;

use log::debug;

use super::eval::{evaluate, Evaluation};
use super::format::FormatNombre;
use super::operation::TableOperations;
use super::programme::Programme;

#[derive(Clone, Debug)]
pub struct Cerveau {
    programme: Programme,
    table: TableOperations,
    formateur: FormatNombre,
}

impl Default for Cerveau {
    fn default() -> Self {
        Self::new(FormatNombre::default())
    }
}

impl Cerveau {
    /// Session sur la table standard.
    pub fn new(formateur: FormatNombre) -> Self {
        Self::avec_table(TableOperations::standard().clone(), formateur)
    }

    pub fn avec_table(table: TableOperations, formateur: FormatNombre) -> Self {
        Self {
            programme: Programme::new(),
            table,
            formateur,
        }
    }

    /* ------------------------ Saisie ------------------------ */

    pub fn set_operand(&mut self, valeur: f64) {
        self.programme.ajouter_operande(valeur);
    }

    pub fn set_variable(&mut self, nom: impl Into<String>) {
        self.programme.ajouter_variable(nom);
    }

    pub fn perform_operation(&mut self, symbole: impl Into<String>) {
        self.programme.ajouter_symbole(symbole);
    }

    pub fn clear(&mut self) {
        self.programme.vider();
    }

    pub fn undo(&mut self) {
        if let Some(ins) = self.programme.annuler() {
            debug!("undo: {ins}");
        }
    }

    /* ------------------------ Évaluation ------------------------ */

    pub fn evaluate(&self, variables: &HashMap<String, f64>) -> Evaluation {
        evaluate(&self.programme, variables, &self.table, &self.formateur)
    }

    /* ------------------------ Accès ------------------------ */

    pub fn table(&self) -> &TableOperations {
        &self.table
    }

    pub fn formateur(&self) -> &FormatNombre {
        &self.formateur
    }
}

/// Raccourcis de test (évaluation sans variables).
#[cfg(test)]
impl Cerveau {
    pub fn evaluate_sans_variables(&self) -> Evaluation {
        self.evaluate(&HashMap::new())
    }

    pub fn resultat(&self) -> Option<f64> {
        self.evaluate_sans_variables().resultat
    }

    pub fn en_attente(&self) -> bool {
        self.evaluate_sans_variables().en_attente
    }

    pub fn description(&self) -> String {
        self.evaluate_sans_variables().description
    }

    pub fn programme(&self) -> &Programme {
        &self.programme
    }
}
