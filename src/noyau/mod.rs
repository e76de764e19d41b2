//! Noyau de la calculatrice (aucune dépendance UI)
//!
//! Organisation interne :
//! - jetons.rs     : jetons (nombre en texte, opérateurs, parenthèses)
//! - rpn.rs        : shunting-yard + évaluation RPN
//! - precedence.rs : réduction directe par montée de précédence
//! - format.rs     : affichage canonique d’un résultat (10 décimales)
//! - erreur.rs     : DivisionByZero / InvalidExpression
//! - eval.rs       : l’évaluateur incrémental (machine à états)

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod precedence;
pub mod rpn;

#[cfg(test)]
mod tests_proprietes;


// API publique minimale
pub use erreur::EvalError;
pub use eval::{CalcConfig, Etat, Evaluateur, MARQUEUR_ERREUR};
pub use jetons::Operateur;
