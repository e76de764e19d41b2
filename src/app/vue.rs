// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Afficheur en haut (texte rendu tel quel par le noyau), pavé en dessous
// - Tactile : gros boutons ; touches désactivées grisées selon la config
//
// Le clavier est lu dans app.rs (global, pas de champ texte à focaliser ici).

use eframe::egui;

use super::etat::{AppCalc, Touche};
use crate::noyau::Operateur;

const TAILLE_BOUTON: [f32; 2] = [64.0, 48.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        ui.heading("Calculatrice");
        ui.add_space(6.0);

        self.ui_afficheur(ui);

        ui.add_space(8.0);
        ui.separator();
        ui.add_space(8.0);

        self.ui_pave(ui);
    }

    fn ui_afficheur(&mut self, ui: &mut egui::Ui) {
        let texte = self.affichage();

        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(egui::RichText::new(texte).monospace().size(28.0));
                });
            });

        // ligne d’état : le genre d’erreur (l’afficheur, lui, montre seulement "Error")
        if let Some(e) = self.erreur {
            ui.colored_label(ui.visuals().error_fg_color, e.to_string());
        }
    }

    fn ui_pave(&mut self, ui: &mut egui::Ui) {
        let lignes: [[(&str, Touche); 4]; 5] = [
            [
                ("C", Touche::Effacer),
                ("(", Touche::ParOuvrante),
                (")", Touche::ParFermante),
                ("÷", Touche::Operateur(Operateur::Divise)),
            ],
            [
                ("7", Touche::Chiffre('7')),
                ("8", Touche::Chiffre('8')),
                ("9", Touche::Chiffre('9')),
                ("×", Touche::Operateur(Operateur::Fois)),
            ],
            [
                ("4", Touche::Chiffre('4')),
                ("5", Touche::Chiffre('5')),
                ("6", Touche::Chiffre('6')),
                ("-", Touche::Operateur(Operateur::Moins)),
            ],
            [
                ("1", Touche::Chiffre('1')),
                ("2", Touche::Chiffre('2')),
                ("3", Touche::Chiffre('3')),
                ("+", Touche::Operateur(Operateur::Plus)),
            ],
            [
                ("±", Touche::Signe),
                ("0", Touche::Chiffre('0')),
                (".", Touche::Chiffre('.')),
                ("%", Touche::Pourcent),
            ],
        ];

        egui::Grid::new("pave_calculatrice")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in lignes {
                    for (label, touche) in ligne {
                        self.bouton(ui, label, touche);
                    }
                    ui.end_row();
                }
            });

        ui.add_space(6.0);

        let largeur = TAILLE_BOUTON[0] * 4.0 + 6.0 * 3.0;
        if ui
            .add_sized([largeur, TAILLE_BOUTON[1]], egui::Button::new("="))
            .clicked()
        {
            self.appuyer(Touche::Egal);
        }
    }

    fn bouton(&mut self, ui: &mut egui::Ui, label: &str, touche: Touche) {
        let actif = self.touche_active(touche);
        let resp = ui.add_enabled_ui(actif, |ui| {
            ui.add_sized(TAILLE_BOUTON, egui::Button::new(label))
        });
        if resp.inner.clicked() {
            self.appuyer(touche);
        }
    }
}
