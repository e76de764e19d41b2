// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// ------------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : CLI (clap) + config TOML + journal + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner + WebOptions + <canvas>, config par défaut
//
// Côté WEB (WASM) : index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports, dead_code))]

use eframe::egui;

mod app;
mod config;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
mod natif {
    use std::path::PathBuf;

    use clap::Parser;
    use tracing_subscriber::EnvFilter;

    use crate::config::{FichierConfig, JournalConfig};
    use crate::noyau::CalcConfig;

    #[derive(Parser, Debug)]
    #[command(name = "calculatrice", about = "Calculatrice à saisie incrémentale")]
    pub struct Args {
        /// Fichier TOML (défaut: ./calculatrice.toml s’il existe)
        #[arg(long, value_name = "CHEMIN")]
        pub config: Option<PathBuf>,

        /// Désactive ( et )
        #[arg(long)]
        pub sans_parentheses: bool,

        /// % devient un opérateur binaire (reste) au lieu de ÷100
        #[arg(long)]
        pub pourcentage_binaire: bool,

        /// Désactive la touche ±
        #[arg(long)]
        pub sans_signe: bool,
    }

    impl Args {
        /// Les drapeaux ne font que restreindre / basculer ce que dit le fichier.
        pub fn appliquer(&self, mut cfg: CalcConfig) -> CalcConfig {
            if self.sans_parentheses {
                cfg.supports_parentheses = false;
            }
            if self.pourcentage_binaire {
                cfg.percent_as_binary_operator = true;
            }
            if self.sans_signe {
                cfg.sign_toggle_enabled = false;
            }
            cfg
        }
    }

    /// RUST_LOG prime ; sinon le niveau du fichier.
    pub fn installer_journal(niveau: &str) {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(niveau)),
            )
            .with_writer(std::io::stderr)
            .init();
    }

    /// Args + fichier -> config finale. Config rejetée => warn! (journal par défaut) + code 2.
    pub fn preparer() -> CalcConfig {
        let args = Args::parse();

        let fichier = match FichierConfig::resoudre(args.config.as_deref()) {
            Ok(f) => f,
            Err(e) => {
                installer_journal(&JournalConfig::default().niveau);
                tracing::warn!(erreur = %e, "configuration rejetée");
                std::process::exit(2);
            }
        };

        installer_journal(&fichier.journal.niveau);

        let cfg = args.appliquer(fichier.calculatrice);
        tracing::info!(?cfg, "configuration");
        cfg
    }

}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    let cfg = natif::preparer();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 520.0])
            .with_min_inner_size([300.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(cfg)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // En wasm32, le démarrage réel passe par `start()` (wasm_bindgen).
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::JsCast;
    use web_sys::{window, HtmlCanvasElement};

    /// ID du canvas attendu dans index.html.
    const CANVAS_ID: &str = "the_canvas_id";

    /// Point d’entrée automatique au chargement de la page.
    /// - Fixe le titre de l’onglet (document.title)
    /// - Récupère le <canvas id="the_canvas_id">
    /// - Démarre eframe WebRunner dessus (pas de journal installé côté web)
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
        let w = window().ok_or_else(|| js_err("window() indisponible"))?;
        let d = w
            .document()
            .ok_or_else(|| js_err("document() indisponible"))?;

        d.set_title(TITRE_APP);

        let el = d
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| js_err("canvas introuvable (id incorrect dans index.html)"))?;

        let canvas: HtmlCanvasElement = el
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| js_err("l’élément trouvé n’est pas un <canvas>"))?;

        let web_options = eframe::WebOptions::default();

        eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }

    fn js_err(msg: &str) -> wasm_bindgen::JsValue {
        wasm_bindgen::JsValue::from_str(msg)
    }
}
