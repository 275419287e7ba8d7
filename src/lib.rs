// ============================================================================
// SMARTWASTE DASHBOARD - FRONTEND MVVM (RUST PURO)
// ============================================================================
// Arquitectura MVVM:
// - Views: Funciones que renderizan DOM (sin lógica)
// - ViewModels: Estado de la sesión + flujos (poll, detección, alertas, ruta)
// - Services: SOLO comunicación API
// - State: Snapshot y contadores con Rc<RefCell>
// - Models: Estructuras compartidas con backend
// - Maps: Superficie de mapa (Leaflet en web)
// ============================================================================

pub mod config;
pub mod models;
pub mod utils;
pub mod maps;
pub mod services;
pub mod state;
pub mod viewmodels;

#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod views;
#[cfg(target_arch = "wasm32")]
mod app;

#[cfg(test)]
mod testing;

#[cfg(target_arch = "wasm32")]
mod web_entry {
    use std::cell::RefCell;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen::JsCast;
    use web_sys::PageTransitionEvent;
    use crate::app::App;
    use crate::config::CONFIG;
    use crate::dom::on_window_event;

    // Instancia viva de la App mientras la página esté abierta
    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        let level = if CONFIG.is_logging_enabled() {
            log::Level::Debug
        } else {
            log::Level::Warn
        };
        wasm_logger::init(wasm_logger::Config::new(level));
        log::info!("🚀 SmartWaste Dashboard ({}) → {}", CONFIG.environment, CONFIG.backend_url);

        let mut app = App::new()?;
        app.start()?;

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });

        on_window_event("pagehide", |event| {
            let persisted = event
                .dyn_ref::<PageTransitionEvent>()
                .map(|e| e.persisted())
                .unwrap_or(false);
            APP.with(|cell| {
                let mut slot = cell.borrow_mut();
                let closed = slot.as_mut().map_or(false, |app| app.page_hidden(persisted));
                if closed {
                    slot.take();
                }
            });
        })?;

        Ok(())
    }
}
