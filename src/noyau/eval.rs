//! Noyau — évaluateur à saisie incrémentale
//!
//! touches -> (entree, historique) -> "=" -> RPN ou montée de précédence -> résultat
//!
//! L’évaluateur ne lève jamais : chaque opération laisse un état affichable,
//! `evaluate` rend l’erreur comme une valeur après avoir tout remis à zéro.
//!
//! En erreur, seuls un chiffre ou C font repartir ; les autres touches sont
//! sans effet et "=" redonne la même erreur.

use serde::Deserialize;

use super::erreur::EvalError;
use super::format::{arrondir, format_court, format_resultat};
use super::jetons::{format_tokens, parse_nombre, Operateur, Tok};
use super::precedence;
use super::rpn::{eval_rpn, to_rpn};

/// Marqueur affiché après une évaluation ratée.
pub const MARQUEUR_ERREUR: &str = "Error";

/// Fonctions activées (une seule machine, paramétrée).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    /// ( ) acceptées ; réduction par shunting-yard + RPN.
    #[serde(rename = "parentheses")]
    pub supports_parentheses: bool,

    /// % = opérateur binaire (reste) au lieu de “÷100 immédiat”.
    #[serde(rename = "pourcentage_binaire")]
    pub percent_as_binary_operator: bool,

    /// Touche ± active.
    #[serde(rename = "changement_signe")]
    pub sign_toggle_enabled: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            supports_parentheses: true,
            percent_as_binary_operator: false,
            sign_toggle_enabled: true,
        }
    }
}

/// État observable (dérivé, jamais stocké).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Etat {
    Vide,
    SaisieNombre,
    OperateurEnAttente,
    ParentheseOuverte,
    /// `( … )` refermée, aucun nombre en cours : attend un opérateur ou "=".
    GroupeFerme,
    Erreur,
}

#[derive(Clone, Debug)]
pub struct Evaluateur {
    config: CalcConfig,

    // Nombre en cours, en texte ("" = aucun nombre en cours).
    entree: String,
    // Jetons validés : Num, Op, Num, ... (+ parenthèses).
    historique: Vec<Tok>,

    vider_au_prochain_chiffre: bool,
    parentheses_ouvertes: usize,
    // Dernière évaluation ratée, tant qu’aucun chiffre ni C n’est venu.
    erreur: Option<EvalError>,
}

impl Default for Evaluateur {
    fn default() -> Self {
        Self::new(CalcConfig::default())
    }
}

impl Evaluateur {
    pub fn new(config: CalcConfig) -> Self {
        Self {
            config,
            entree: "0".to_string(),
            historique: Vec::new(),
            vider_au_prochain_chiffre: true,
            parentheses_ouvertes: 0,
            erreur: None,
        }
    }

    pub fn config(&self) -> CalcConfig {
        self.config
    }

    pub fn entree(&self) -> &str {
        &self.entree
    }

    pub fn historique(&self) -> &[Tok] {
        &self.historique
    }

    pub fn parentheses_ouvertes(&self) -> usize {
        self.parentheses_ouvertes
    }

    pub fn etat(&self) -> Etat {
        if self.erreur.is_some() {
            Etat::Erreur
        } else if self.vider_au_prochain_chiffre && self.historique.is_empty() {
            Etat::Vide
        } else if self.parentheses_ouvertes > 0 {
            Etat::ParentheseOuverte
        } else if self.entree.is_empty() && matches!(self.historique.last(), Some(Tok::Op(_))) {
            Etat::OperateurEnAttente
        } else if self.entree.is_empty() && matches!(self.historique.last(), Some(Tok::RPar)) {
            Etat::GroupeFerme
        } else {
            Etat::SaisieNombre
        }
    }

    /// Texte à afficher tel quel.
    pub fn display(&self) -> String {
        if self.erreur.is_some() {
            return MARQUEUR_ERREUR.to_string();
        }
        if self.vider_au_prochain_chiffre && self.historique.is_empty() {
            return self.entree.clone();
        }

        let mut affichage = format_tokens(&self.historique);
        if !self.entree.is_empty() {
            if !affichage.is_empty() {
                affichage.push(' ');
            }
            affichage.push_str(&self.entree);
        }
        if self.parentheses_ouvertes > 0 {
            affichage.push_str(&format!(" ({} open)", self.parentheses_ouvertes));
        }
        affichage
    }

    /* ------------------------ Saisie ------------------------ */

    /// Chiffre 0-9 ou '.'. Tout autre caractère est ignoré.
    pub fn input_digit(&mut self, c: char) {
        if !(c.is_ascii_digit() || c == '.') {
            return;
        }

        if self.vider_au_prochain_chiffre {
            // nouveau calcul : l’ancien historique (et l’éventuelle erreur) disparaissent
            self.entree = if c == '.' { "0.".to_string() } else { c.to_string() };
            self.historique.clear();
            self.parentheses_ouvertes = 0;
            self.vider_au_prochain_chiffre = false;
            self.erreur = None;
        } else if self.entree.is_empty() && matches!(self.historique.last(), Some(Tok::RPar)) {
            // "(2) 5" : un nombre ne suit pas directement une parenthèse fermante
            return;
        } else if c == '.' {
            if self.entree.contains('.') {
                return;
            }
            if self.entree.is_empty() {
                self.entree.push('0');
            }
            self.entree.push('.');
        } else if self.entree == "0" {
            self.entree = c.to_string();
        } else {
            // un chiffre de plus qui ferait déborder le f64 est refusé
            let mut suite = self.entree.clone();
            suite.push(c);
            if parse_nombre(&suite).is_none() {
                tracing::debug!(entree = %self.entree, "chiffre refusé (débordement)");
                return;
            }
            self.entree = suite;
        }

        tracing::debug!(chiffre = %c, entree = %self.entree, "chiffre");
    }

    pub fn input_operator(&mut self, op: Operateur) {
        if self.erreur.is_some() {
            return;
        }
        if op == Operateur::Pourcent && !self.config.percent_as_binary_operator {
            self.percent_quick_divide();
            return;
        }

        // pas d’opérateur en tête d’expression ni juste après '('
        if self.entree.is_empty()
            && (self.historique.is_empty() || matches!(self.historique.last(), Some(Tok::LPar)))
        {
            return;
        }

        self.valider_entree();

        // deux opérateurs de suite : le second remplace le premier
        if let Some(Tok::Op(dernier)) = self.historique.last_mut() {
            *dernier = op;
        } else {
            self.historique.push(Tok::Op(op));
        }

        self.vider_au_prochain_chiffre = false;

        tracing::debug!(operateur = %op.symbole(), "opérateur");
    }

    /// ± : sans effet sur "0" ou sur une entrée vide.
    pub fn toggle_sign(&mut self) {
        if !self.config.sign_toggle_enabled
            || self.erreur.is_some()
            || self.entree.is_empty()
            || self.entree == "0"
        {
            return;
        }

        if self.entree.starts_with('-') {
            self.entree.remove(0);
        } else {
            self.entree.insert(0, '-');
        }
    }

    /// % immédiat : entree ÷ 100, sur place (seulement si % n’est pas binaire).
    pub fn percent_quick_divide(&mut self) {
        if self.config.percent_as_binary_operator
            || self.erreur.is_some()
            || self.entree.is_empty()
            || self.entree == "0"
        {
            return;
        }

        if let Some(v) = parse_nombre(&self.entree) {
            self.entree = format_court(v / 100.0);
            tracing::debug!(entree = %self.entree, "pourcentage");
        }
    }

    /// Refusée juste après un nombre tapé ou une ')' (évite "3("), et en erreur.
    pub fn open_paren(&mut self) -> bool {
        if !self.config.supports_parentheses || self.erreur.is_some() {
            return false;
        }

        if self.vider_au_prochain_chiffre {
            self.historique.clear();
            self.parentheses_ouvertes = 0;
        } else if !self.entree.is_empty() || matches!(self.historique.last(), Some(Tok::RPar)) {
            return false;
        }

        self.historique.push(Tok::LPar);
        self.parentheses_ouvertes += 1;
        self.entree.clear();
        self.vider_au_prochain_chiffre = false;
        true
    }

    /// Refusée si aucune parenthèse n’est ouverte.
    pub fn close_paren(&mut self) -> bool {
        if !self.config.supports_parentheses
            || self.erreur.is_some()
            || self.parentheses_ouvertes == 0
        {
            return false;
        }

        self.valider_entree();
        self.historique.push(Tok::RPar);
        self.parentheses_ouvertes -= 1;
        self.vider_au_prochain_chiffre = false;
        true
    }

    /* ------------------------ Évaluation ------------------------ */

    /// "=" : réduit l’historique. Succès ou échec, l’état repart à vide
    /// (succès : entree = résultat, pour enchaîner). En erreur : même erreur, rien ne bouge.
    pub fn evaluate(&mut self) -> Result<f64, EvalError> {
        if let Some(e) = self.erreur {
            return Err(e);
        }

        self.valider_entree();

        if self.config.supports_parentheses {
            for _ in 0..self.parentheses_ouvertes {
                self.historique.push(Tok::RPar);
            }
        }

        let expression = format_tokens(&self.historique);
        let resultat = self.reduire().and_then(|v| {
            if v.is_finite() {
                Ok(arrondir(v))
            } else {
                Err(EvalError::InvalidExpression)
            }
        });

        self.historique.clear();
        self.parentheses_ouvertes = 0;
        self.vider_au_prochain_chiffre = true;

        match resultat {
            Ok(v) => {
                self.entree = format_resultat(v);
                tracing::info!(%expression, resultat = %self.entree, "évaluation");
            }
            Err(e) => {
                self.entree = "0".to_string();
                self.erreur = Some(e);
                tracing::warn!(%expression, erreur = %e, "évaluation ratée");
            }
        }

        resultat
    }

    /// C : remise à zéro totale. Ne peut pas échouer.
    pub fn clear(&mut self) {
        self.entree = "0".to_string();
        self.historique.clear();
        self.parentheses_ouvertes = 0;
        self.vider_au_prochain_chiffre = true;
        self.erreur = None;
    }

    /* ------------------------ Interne ------------------------ */

    /// Pousse l’entrée courante dans l’historique (toujours finie : `input_digit`
    /// refuse le débordement). Un point final est retiré ("3." -> "3").
    fn valider_entree(&mut self) {
        let texte = std::mem::take(&mut self.entree);
        if parse_nombre(&texte).is_some() {
            let texte = texte.strip_suffix('.').unwrap_or(&texte).to_string();
            self.historique.push(Tok::Num(texte));
        }
    }

    fn reduire(&self) -> Result<f64, EvalError> {
        if self.config.supports_parentheses {
            let rpn = to_rpn(&self.historique)?;
            eval_rpn(&rpn)
        } else {
            precedence::reduire(&self.historique)
        }
    }
}
