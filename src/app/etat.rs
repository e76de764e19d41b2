//! src/app/etat.rs
//!
//! État UI (sans vue).
//!
//! Rôle : posséder l’évaluateur et traduire chaque touche (bouton ou clavier)
//! en UN appel au noyau. Aucune logique de calcul ici.
//!
//! Contrats :
//! - Une touche = une opération du noyau, exécutée jusqu’au bout.
//! - L’affichage est relu du noyau après chaque touche (jamais stocké à part),
//!   sauf le dernier message d’erreur, gardé pour la ligne d’état.

use crate::noyau::{CalcConfig, EvalError, Evaluateur, Operateur};

/// Touches de la calculatrice (boutons + raccourcis clavier).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Touche {
    Chiffre(char),
    Operateur(Operateur),
    Egal,
    Effacer,
    Signe,
    Pourcent,
    ParOuvrante,
    ParFermante,
}

impl Touche {
    /// Caractère tapé au clavier -> touche (None si sans effet).
    pub fn depuis_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' | '.' => Some(Touche::Chiffre(c)),
            ',' => Some(Touche::Chiffre('.')),
            '%' => Some(Touche::Pourcent),
            '(' => Some(Touche::ParOuvrante),
            ')' => Some(Touche::ParFermante),
            '=' => Some(Touche::Egal),
            _ => Operateur::depuis_char(c).map(Touche::Operateur),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppCalc {
    pub evaluateur: Evaluateur,

    // Message de la dernière évaluation ratée (effacé à la touche suivante).
    pub erreur: Option<EvalError>,
}

impl Default for AppCalc {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}

impl AppCalc {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            evaluateur: Evaluateur::new(config),
            erreur: None,
        }
    }

    pub fn config(&self) -> CalcConfig {
        self.evaluateur.config()
    }

    pub fn affichage(&self) -> String {
        self.evaluateur.display()
    }

    /// Touche active dans la configuration courante ?
    pub fn touche_active(&self, touche: Touche) -> bool {
        let cfg = self.config();
        match touche {
            Touche::Signe => cfg.sign_toggle_enabled,
            Touche::ParOuvrante => cfg.supports_parentheses,
            Touche::ParFermante => {
                cfg.supports_parentheses && self.evaluateur.parentheses_ouvertes() > 0
            }
            _ => true,
        }
    }

    pub fn appuyer(&mut self, touche: Touche) {
        self.erreur = None;

        let ev = &mut self.evaluateur;
        match touche {
            Touche::Chiffre(c) => ev.input_digit(c),
            Touche::Operateur(op) => ev.input_operator(op),
            Touche::Egal => self.erreur = ev.evaluate().err(),
            Touche::Effacer => ev.clear(),
            Touche::Signe => ev.toggle_sign(),
            // % binaire ou immédiat : le noyau tranche selon sa config
            Touche::Pourcent => ev.input_operator(Operateur::Pourcent),
            Touche::ParOuvrante => {
                if !ev.open_paren() {
                    tracing::debug!("parenthèse ouvrante refusée");
                }
            }
            Touche::ParFermante => {
                if !ev.close_paren() {
                    tracing::debug!("parenthèse fermante refusée");
                }
            }
        }

        tracing::trace!(etat = ?self.evaluateur.etat(), touche = ?touche, "touche");
    }
}
