// src/noyau/programme.rs
//
// Programme = journal ordonné des saisies
// ---------------------------------------
// - ajout en fin seulement (opérande / variable / symbole)
// - retrait du dernier (undo) ou de tout (clear)
// - aucune validation des symboles ici : la table est consultée à l’évaluation

use std::fmt;

#[derive(Clone, Debug, PartialEq)]
pub enum Instruction {
    /// Nombre littéral.
    Operande(f64),
    /// Référence résolue à l’évaluation (absente => 0.0).
    Variable(String),
    /// Clé dans la table des opérations (inconnue => ignorée).
    Symbole(String),
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Instruction::Operande(v) => write!(f, "{v}"),
            Instruction::Variable(nom) => write!(f, "{nom}"),
            Instruction::Symbole(s) => write!(f, "{s}"),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Programme {
    instructions: Vec<Instruction>,
}

impl Programme {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ajouter_operande(&mut self, valeur: f64) {
        self.instructions.push(Instruction::Operande(valeur));
    }

    pub fn ajouter_variable(&mut self, nom: impl Into<String>) {
        self.instructions.push(Instruction::Variable(nom.into()));
    }

    pub fn ajouter_symbole(&mut self, symbole: impl Into<String>) {
        self.instructions.push(Instruction::Symbole(symbole.into()));
    }

    /// Retire la dernière instruction. Journal vide => rien.
    pub fn annuler(&mut self) -> Option<Instruction> {
        self.instructions.pop()
    }

    pub fn vider(&mut self) {
        self.instructions.clear();
    }

    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    pub fn is_empty(&self) -> bool {
        self.instructions.is_empty()
    }
}

/// Format utilitaire (journalisation) : instructions séparées par un espace.
impl fmt::Display for Programme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, ins) in self.instructions.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{ins}")?;
        }
        Ok(())
    }
}
