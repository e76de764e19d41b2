// src/noyau/precedence.rs
//
// Réduction directe par montée de précédence (sans passe RPN).
// Utilisée quand les parenthèses sont désactivées : l’historique alterne
// alors strictement Num, Op, Num, ...
//
// Doit donner EXACTEMENT le même résultat que to_rpn + eval_rpn sur ces suites
// (même arbre, mêmes opérations dans le même ordre).

use super::erreur::EvalError;
use super::jetons::Tok;

struct Curseur<'a> {
    tokens: &'a [Tok],
    pos: usize,
}

impl Curseur<'_> {
    fn operande(&mut self) -> Result<f64, EvalError> {
        let v = self
            .tokens
            .get(self.pos)
            .and_then(Tok::valeur)
            .ok_or(EvalError::InvalidExpression)?;
        self.pos += 1;
        Ok(v)
    }

    fn expression(&mut self, prec_min: u8) -> Result<f64, EvalError> {
        let mut gauche = self.operande()?;

        while let Some(Tok::Op(op)) = self.tokens.get(self.pos) {
            let op = *op;
            if op.precedence() < prec_min {
                break;
            }
            self.pos += 1;

            // associatif à gauche : le membre droit ne prend que les opérateurs plus forts
            let droite = self.expression(op.precedence() + 1)?;
            gauche = op.appliquer(gauche, droite)?;
        }

        Ok(gauche)
    }
}

/// Réduit une suite alternée Num/Op en une valeur.
/// Parenthèse, opérande manquant ou jeton en trop => InvalidExpression.
pub fn reduire(tokens: &[Tok]) -> Result<f64, EvalError> {
    let mut c = Curseur { tokens, pos: 0 };
    let v = c.expression(1)?;
    if c.pos != tokens.len() {
        return Err(EvalError::InvalidExpression);
    }
    Ok(v)
}
