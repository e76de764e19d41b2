//! Configuration (fichier TOML optionnel).
//!
//! ```toml
//! [calculatrice]
//! parentheses = true
//! pourcentage_binaire = false
//! changement_signe = true
//!
//! [journal]
//! niveau = "info"
//! ```
//!
//! Toute clé absente prend sa valeur par défaut.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::noyau::CalcConfig;

/// Fichier lu quand aucun chemin n’est donné (répertoire courant).
pub const FICHIER_DEFAUT: &str = "calculatrice.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("lecture de {}: {source}", chemin.display())]
    Lecture {
        chemin: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("configuration invalide: {0}")]
    Syntaxe(#[from] toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Filtre tracing utilisé quand RUST_LOG n’est pas défini.
    pub niveau: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            niveau: "info".to_string(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FichierConfig {
    pub calculatrice: CalcConfig,
    pub journal: JournalConfig,
}

impl FichierConfig {
    pub fn depuis_toml(texte: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(texte)?)
    }

    pub fn charger(chemin: &Path) -> Result<Self, ConfigError> {
        let texte = std::fs::read_to_string(chemin).map_err(|source| ConfigError::Lecture {
            chemin: chemin.to_path_buf(),
            source,
        })?;
        Self::depuis_toml(&texte)
    }

    /// Chemin explicite => il doit exister.
    /// Sinon FICHIER_DEFAUT s’il existe, sinon valeurs par défaut.
    pub fn resoudre(chemin: Option<&Path>) -> Result<Self, ConfigError> {
        match chemin {
            Some(c) => Self::charger(c),
            None => {
                let defaut = Path::new(FICHIER_DEFAUT);
                if defaut.is_file() {
                    Self::charger(defaut)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
