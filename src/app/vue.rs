// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppCalc (etat.rs) pour natif + wasm
// - Écran : historique (… / =), valeur, mémoire M
// - Pavé : chiffres + séparateur de la locale, fonctions, opérateurs, M / →M, C, ⌫
// - Opérations désactivées (calculatrice.toml) : touches grisées
//
// Note :
// - Aucune logique ici : chaque bouton appelle une touche de etat.rs

use eframe::egui;

use super::etat::AppCalc;

/// Fonctions scientifiques (4 par ligne).
const FONCTIONS: [[&str; 4]; 4] = [
    ["sin", "cos", "tan", "π"],
    ["sin⁻¹", "cos⁻¹", "tan⁻¹", "e"],
    ["√", "x²", "x⁻¹", "xʸ"],
    ["ln", "±", "Ran", "÷"],
];

const TAILLE_BOUTON: [f32; 2] = [64.0, 40.0];

impl AppCalc {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        // Densité “calc”
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                self.ui_ecran(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_fonctions(ui);

                ui.add_space(6.0);

                self.ui_pave_numerique(ui);
            });
    }

    fn ui_ecran(&mut self, ui: &mut egui::Ui) {
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.set_min_width(ui.available_width());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.monospace(self.historique.as_str());
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(egui::RichText::new(&self.affichage).monospace().size(32.0));
                });

                ui.horizontal(|ui| {
                    ui.monospace(format!("M = {}", self.affichage_m));
                });
            });
    }

    fn ui_fonctions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("fonctions_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in FONCTIONS {
                    for symbole in ligne {
                        self.bouton_operation(ui, symbole);
                    }
                    ui.end_row();
                }
            });
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        let sep = self.separateur_decimal().to_string();

        egui::Grid::new("pave_numerique_calc")
            .num_columns(4)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                if Self::bouton(ui, "C") {
                    self.touche_effacer();
                }
                if Self::bouton(ui, "⌫") {
                    self.touche_retour();
                }
                if Self::bouton(ui, "→M") {
                    self.touche_memoriser();
                }
                if Self::bouton(ui, "M") {
                    self.touche_rappel();
                }
                ui.end_row();

                self.ligne_chiffres(ui, ["7", "8", "9"], "×");
                self.ligne_chiffres(ui, ["4", "5", "6"], "−");
                self.ligne_chiffres(ui, ["1", "2", "3"], "+");

                if Self::bouton(ui, "0") {
                    self.touche_chiffre("0");
                }
                if Self::bouton(ui, &sep) {
                    self.touche_chiffre(&sep);
                }
                ui.label("");
                self.bouton_operation(ui, "=");
                ui.end_row();
            });
    }

    fn ligne_chiffres(&mut self, ui: &mut egui::Ui, chiffres: [&str; 3], operation: &str) {
        for c in chiffres {
            if Self::bouton(ui, c) {
                self.touche_chiffre(c);
            }
        }
        self.bouton_operation(ui, operation);
        ui.end_row();
    }

    fn bouton_operation(&mut self, ui: &mut egui::Ui, symbole: &str) {
        let actif = self.operation_disponible(symbole);
        let clic = ui.add_enabled_ui(actif, |ui| Self::bouton(ui, symbole)).inner;
        if clic {
            self.touche_operation(symbole);
        }
    }

    fn bouton(ui: &mut egui::Ui, label: &str) -> bool {
        ui.add_sized(TAILLE_BOUTON, egui::Button::new(label)).clicked()
    }
}
