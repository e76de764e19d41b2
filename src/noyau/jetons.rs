// src/noyau/jetons.rs

use super::erreur::EvalError;

/// Opérateurs binaires de la calculatrice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Pourcent,
}

impl Operateur {
    /// Symbole affiché (celui des touches).
    pub fn symbole(self) -> char {
        match self {
            Operateur::Plus => '+',
            Operateur::Moins => '-',
            Operateur::Fois => '×',
            Operateur::Divise => '÷',
            Operateur::Pourcent => '%',
        }
    }

    /// Accepte les symboles des touches ET ceux du clavier PC (* et /).
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Operateur::Plus),
            '-' => Some(Operateur::Moins),
            '×' | '*' => Some(Operateur::Fois),
            '÷' | '/' => Some(Operateur::Divise),
            '%' => Some(Operateur::Pourcent),
            _ => None,
        }
    }

    /// × ÷ % lient plus fort que + -.
    pub fn precedence(self) -> u8 {
        match self {
            Operateur::Plus | Operateur::Moins => 1,
            Operateur::Fois | Operateur::Divise | Operateur::Pourcent => 2,
        }
    }

    /// Applique l’opérateur. Diviseur nul (÷ ou %) => DivisionByZero.
    pub fn appliquer(self, a: f64, b: f64) -> Result<f64, EvalError> {
        match self {
            Operateur::Plus => Ok(a + b),
            Operateur::Moins => Ok(a - b),
            Operateur::Fois => Ok(a * b),
            Operateur::Divise | Operateur::Pourcent if b == 0.0 => Err(EvalError::DivisionByZero),
            Operateur::Divise => Ok(a / b),
            // % binaire : reste flottant (même signe que a)
            Operateur::Pourcent => Ok(a % b),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Tok {
    // Texte tel que tapé ; converti en f64 seulement à la réduction.
    Num(String),
    Op(Operateur),

    LPar,
    RPar,
}

impl Tok {
    /// Valeur d’un nombre (None si pas un nombre, ou texte non fini).
    pub fn valeur(&self) -> Option<f64> {
        match self {
            Tok::Num(texte) => parse_nombre(texte),
            _ => None,
        }
    }
}

/// Texte -> f64 fini. "3." et "0.5" passent ; "" et "-" non.
pub fn parse_nombre(texte: &str) -> Option<f64> {
    texte.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Format utilitaire (affichage) : liste de jetons séparés par des espaces.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::with_capacity(tokens.len());
    for t in tokens {
        let s = match t {
            Tok::Num(texte) => texte.clone(),
            Tok::Op(op) => op.symbole().to_string(),
            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}
