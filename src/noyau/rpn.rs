// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir la suite de Tok de l’historique en RPN (postfix)
// - Puis l’évaluer en un seul passage gauche -> droite sur une pile
//
// Règles:
// - tous les opérateurs sont associatifs à gauche (on dépile à précédence >=)
// - ')' sans '(' correspondante, ou '(' restée sur la pile => expression invalide
// - les parenthèses encore ouvertes sont fermées AVANT d’arriver ici (evaluate)

use super::erreur::EvalError;
use super::jetons::Tok;

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   tokens: [LPar, Num(2), Op(+), Num(3), RPar, Op(×), Num(4)]
///   rpn:    [Num(2), Num(3), Op(+), Num(4), Op(×)]
pub fn to_rpn(tokens: &[Tok]) -> Result<Vec<Tok>, EvalError> {
    let mut out: Vec<Tok> = Vec::with_capacity(tokens.len());
    let mut ops: Vec<Tok> = Vec::new();

    for tok in tokens.iter().cloned() {
        match tok {
            Tok::Num(_) => out.push(tok),

            Tok::LPar => ops.push(tok),

            Tok::RPar => {
                // dépile jusqu’à '(' ; pile vidée sans la trouver => non appariée
                loop {
                    match ops.pop() {
                        Some(Tok::LPar) => break,
                        Some(top) => out.push(top),
                        None => return Err(EvalError::InvalidExpression),
                    }
                }
            }

            Tok::Op(op) => {
                while let Some(Tok::Op(top)) = ops.last() {
                    if top.precedence() >= op.precedence() {
                        out.push(Tok::Op(*top));
                        ops.pop();
                    } else {
                        break;
                    }
                }
                ops.push(tok);
            }
        }
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Tok::LPar) {
            return Err(EvalError::InvalidExpression);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN. La pile doit finir avec exactement une valeur.
pub fn eval_rpn(rpn: &[Tok]) -> Result<f64, EvalError> {
    let mut st: Vec<f64> = Vec::new();

    for tok in rpn {
        match tok {
            Tok::Num(_) => {
                let v = tok.valeur().ok_or(EvalError::InvalidExpression)?;
                st.push(v);
            }

            Tok::Op(op) => {
                let b = st.pop().ok_or(EvalError::InvalidExpression)?;
                let a = st.pop().ok_or(EvalError::InvalidExpression)?;
                st.push(op.appliquer(a, b)?);
            }

            Tok::LPar | Tok::RPar => return Err(EvalError::InvalidExpression),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(EvalError::InvalidExpression),
    }
}
