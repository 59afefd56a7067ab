// Re-export all public modules so they can be used from main.rs
pub mod config;
pub mod logging;

// Model / controller split
pub mod model;
pub mod controller;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use config::SimConfig;
pub use controller::{CameraMode, FrameSnapshot, InputEvent, Simulation};
pub use model::{Aabb, GeometryIndex, RayQuery};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::wasm_bindgen;

/// Entry point when loaded as a wasm module. The JS host then creates a
/// [`web::WebSimulation`] and drives it from its own render loop.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    logging::init();
    tracing::info!("courtside simulation module ready");
}
