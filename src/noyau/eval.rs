//! Noyau — évaluation d’un programme
//!
//! Une seule passe gauche -> droite sur le journal, avec deux accumulateurs
//! tenus en parallèle :
//! - `acc`  : valeur numérique courante
//! - `desc` : description textuelle courante
//!
//! et au plus une opération binaire en attente (premier opérande + opérateur vus,
//! second opérande pas encore fourni).
//!
//! Remarque : l’opération en attente n’est JAMAIS résolue automatiquement en fin
//! de programme ; c’est précisément le signal `en_attente` rendu à l’appelant.

use std::collections::HashMap;

use log::{debug, trace};

use super::format::FormateurNombre;
use super::operation::{
    description_binaire_standard, description_unaire_standard, Calcul2, Operation,
    TableOperations,
};
use super::programme::{Instruction, Programme};

/// Description rendue pour un programme vide : « rien à afficher ».
pub const DESCRIPTION_VIDE: &str = " ";

/// Résultat d’une évaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    pub resultat: Option<f64>,
    pub en_attente: bool,
    pub description: String,
}

impl Evaluation {
    pub fn vide() -> Self {
        Self {
            resultat: None,
            en_attente: false,
            description: DESCRIPTION_VIDE.to_string(),
        }
    }

    /// true si la description est le marqueur « programme vide ».
    pub fn est_vide(&self) -> bool {
        self.description == DESCRIPTION_VIDE
    }
}

/// Fonction de description d’un binaire, déjà spécialisée sur son symbole.
#[derive(Clone, Copy, Debug)]
enum DescriptionBinaire<'a> {
    Dediee(fn(&str, &str) -> String),
    Standard(&'a str),
}

impl DescriptionBinaire<'_> {
    fn appliquer(&self, a: &str, b: &str) -> String {
        match self {
            DescriptionBinaire::Dediee(f) => f(a, b),
            DescriptionBinaire::Standard(symbole) => description_binaire_standard(symbole, a, b),
        }
    }
}

/// Opération binaire en attente de son second opérande.
#[derive(Clone, Debug)]
struct OperationEnAttente<'a> {
    calcul: Calcul2,
    premier: f64,
    description: DescriptionBinaire<'a>,
    description_premier: String,
}

impl OperationEnAttente<'_> {
    fn calculer(&self, second: f64) -> f64 {
        (self.calcul)(self.premier, second)
    }

    fn decrire(&self, second: &str) -> String {
        self.description.appliquer(&self.description_premier, second)
    }
}

/// État threadé à travers la passe d’évaluation.
#[derive(Debug, Default)]
struct EtatEvaluation<'a> {
    acc: Option<f64>,
    desc: Option<String>,
    en_attente: Option<OperationEnAttente<'a>>,
}

impl<'a> EtatEvaluation<'a> {
    fn set_operande<F: FormateurNombre + ?Sized>(&mut self, valeur: f64, formateur: &F) {
        self.acc = Some(valeur);
        self.desc = Some(formateur.formater(valeur));
    }

    fn set_variable(&mut self, nom: &str, variables: &HashMap<String, f64>) {
        self.acc = Some(variables.get(nom).copied().unwrap_or(0.0));
        self.desc = Some(nom.to_string());
    }

    fn executer(&mut self, symbole: &'a str, op: &Operation) {
        match *op {
            Operation::Nullaire { calcul, libelle } => {
                self.acc = Some(calcul());
                self.desc = Some(libelle.to_string());
            }

            Operation::Constante(v) => {
                self.acc = Some(v);
                self.desc = Some(symbole.to_string());
            }

            Operation::Unaire {
                calcul,
                description,
            } => {
                // pas d’accumulateur => inerte
                let Some(x) = self.acc else {
                    return;
                };
                self.acc = Some(calcul(x));

                let d = self.desc.take().unwrap_or_default();
                self.desc = Some(match description {
                    Some(f) => f(&d),
                    None => description_unaire_standard(symbole, &d),
                });
            }

            Operation::Binaire {
                calcul,
                description,
            } => {
                // chaînage gauche -> droite : a + b × => (a+b) × …
                self.resoudre_en_attente();

                let Some(premier) = self.acc.take() else {
                    return;
                };
                let description = match description {
                    Some(f) => DescriptionBinaire::Dediee(f),
                    None => DescriptionBinaire::Standard(symbole),
                };
                self.en_attente = Some(OperationEnAttente {
                    calcul,
                    premier,
                    description,
                    description_premier: self.desc.take().unwrap_or_default(),
                });
            }

            Operation::Egal => self.resoudre_en_attente(),
        }
    }

    /// Ne fait rien s’il manque l’opération en attente OU le second opérande.
    fn resoudre_en_attente(&mut self) {
        let Some(second) = self.acc else {
            return;
        };
        let Some(attente) = self.en_attente.take() else {
            return;
        };

        self.acc = Some(attente.calculer(second));
        let d = self.desc.take().unwrap_or_default();
        self.desc = Some(attente.decrire(&d));
    }

    fn terminer(self) -> Evaluation {
        let description = match &self.en_attente {
            None => self.desc.unwrap_or_else(|| DESCRIPTION_VIDE.to_string()),
            Some(attente) => attente.decrire(self.desc.as_deref().unwrap_or("")),
        };

        Evaluation {
            resultat: self.acc,
            en_attente: self.en_attente.is_some(),
            description,
        }
    }
}

/// Évalue `programme` avec les liaisons `variables`, la `table` et le `formateur`.
///
/// Pure, sauf les opérations nullaires (ex: `Ran`), rappelées à chaque passe.
pub fn evaluate<F: FormateurNombre + ?Sized>(
    programme: &Programme,
    variables: &HashMap<String, f64>,
    table: &TableOperations,
    formateur: &F,
) -> Evaluation {
    if programme.is_empty() {
        return Evaluation::vide();
    }

    let mut etat = EtatEvaluation::default();

    for ins in programme.instructions() {
        match ins {
            Instruction::Operande(v) => etat.set_operande(*v, formateur),
            Instruction::Variable(nom) => etat.set_variable(nom, variables),
            Instruction::Symbole(s) => match table.get(s) {
                Some(op) => etat.executer(s, op),
                None => debug!("symbole inconnu ignoré: {s:?}"),
            },
        }
        trace!(
            "{ins} -> acc={:?} desc={:?} attente={}",
            etat.acc,
            etat.desc,
            etat.en_attente.is_some()
        );
    }

    etat.terminer()
}
