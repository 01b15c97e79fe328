// src/main.rs
//
// Calculatrice — point d’entrée NATIF + WEB (WASM)
// -----------------------------------------------
// But:
// - NATIF (Linux/Windows/macOS) : env_logger + calculatrice.toml + eframe::run_native
// - WEB  (wasm32)              : eframe::WebRunner sur <canvas>, sans fichier de configuration
//
// Côté WEB (WASM) : l’index.html doit contenir un canvas :
//   <canvas id="the_canvas_id"></canvas>

#![cfg_attr(target_arch = "wasm32", allow(unused_imports))]

use eframe::egui;

mod app;
mod noyau;

use app::AppCalc;

/// Titre unique (natif + web).
const TITRE_APP: &str = "Calculatrice";

/* ------------------------ Entrée NATIF (PC) ------------------------ */

#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    use noyau::ConfigCalc;

    env_logger::init();
    log::info!("démarrage {TITRE_APP}");

    let config = match ConfigCalc::charger_par_defaut() {
        Ok(c) => {
            log::info!("format: {:?}", c.format);
            log::info!("opérations désactivées: {:?}", c.operations.desactivees);
            c
        }
        Err(e) => {
            log::error!("configuration ignorée: {e}");
            ConfigCalc::default()
        }
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(TITRE_APP)
            .with_inner_size([320.0, 620.0])
            .with_min_inner_size([300.0, 560.0]),
        ..Default::default()
    };

    let table = config.table();

    eframe::run_native(
        TITRE_APP,
        options,
        Box::new(move |_cc| Ok(Box::new(AppCalc::new(config.format, table)))),
    )
}

/* ------------------------ Entrée WEB (WASM) ------------------------ */

#[cfg(target_arch = "wasm32")]
fn main() {
    // rien : le navigateur appelle `web::demarrer`
}

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{AppCalc, TITRE_APP};

    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::HtmlCanvasElement;

    const CANVAS_ID: &str = "the_canvas_id";

    /// Pas de fichier de configuration côté navigateur : format et table par défaut.
    #[wasm_bindgen::prelude::wasm_bindgen(start)]
    pub async fn demarrer() -> Result<(), JsValue> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| JsValue::from_str("pas de document"))?;
        document.set_title(TITRE_APP);

        let canvas = document
            .get_element_by_id(CANVAS_ID)
            .ok_or_else(|| JsValue::from_str(&format!("#{CANVAS_ID} absent de la page")))?
            .dyn_into::<HtmlCanvasElement>()
            .map_err(|_| JsValue::from_str(&format!("#{CANVAS_ID} n’est pas un <canvas>")))?;

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|_cc| Ok(Box::<AppCalc>::default())),
            )
            .await
    }
}
