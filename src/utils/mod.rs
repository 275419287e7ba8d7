// Utils compartidos

pub mod format;
#[cfg(target_arch = "wasm32")]
pub mod leaflet_ffi;

pub use format::*;
