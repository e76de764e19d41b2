//! Erreurs d’évaluation.
//!
//! Deux genres seulement. Les deux sont traités pareil par `Evaluateur::evaluate`
//! (affichage "Error" + remise à zéro) ; le genre reste utile au journal et aux tests.

use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// Diviseur exactement nul pour ÷ (ou % binaire).
    #[error("division par zéro")]
    DivisionByZero,

    /// Suite de jetons mal formée : parenthèses non appariées, opérande manquant,
    /// pile finale ≠ une valeur, ou résultat non fini.
    #[error("expression invalide")]
    InvalidExpression,
}
