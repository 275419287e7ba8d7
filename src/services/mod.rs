pub mod dashboard_api;
#[cfg(target_arch = "wasm32")]
pub mod api_client;
#[cfg(target_arch = "wasm32")]
pub mod image_preview;

pub use dashboard_api::*;
#[cfg(target_arch = "wasm32")]
pub use api_client::ApiClient;
