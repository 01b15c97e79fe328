//! Noyau de la calculatrice (programme + évaluation différée)
//!
//! Organisation interne :
//! - programme.rs : journal ordonné des saisies (opérande / variable / symbole)
//! - operation.rs : table symbole -> opération (nullaire, constante, unaire, binaire, =)
//! - format.rs    : rendu texte des opérandes (fraction, milliers, locale, jeton d’erreur)
//! - eval.rs      : passe d’évaluation (accumulateurs + binaire en attente)
//! - cerveau.rs   : session (saisie, undo/clear, évaluation)
//! - config.rs    : calculatrice.toml

pub mod cerveau;
pub mod config;
pub mod eval;
pub mod format;
pub mod operation;
pub mod programme;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_scenarios;

// API publique minimale
pub use cerveau::Cerveau;
pub use config::ConfigCalc;
pub use eval::Evaluation;
pub use format::{FormatNombre, FormateurNombre};
pub use operation::TableOperations;
