// Módulo de mapas: trait de superficie + implementación Leaflet para web

#[cfg(target_arch = "wasm32")]
pub mod web;

pub mod traits;

pub use traits::*;
