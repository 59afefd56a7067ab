use js_sys::Float32Array;
use wasm_bindgen::prelude::*;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::config::SimConfig;
use crate::controller::input::{wasm, InputEvent};
use crate::controller::Simulation;
use crate::model::court::demo_court;
use crate::model::{Aabb, GeometryIndex};

/// `Simulation` handle for a JavaScript renderer. The host forwards DOM
/// events, calls `tick` from `requestAnimationFrame` and draws the snapshot.
#[wasm_bindgen]
pub struct WebSimulation {
    sim: Simulation,
}

#[wasm_bindgen]
impl WebSimulation {
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> WebSimulation {
        WebSimulation {
            sim: Simulation::new(SimConfig::default(), width, height),
        }
    }

    pub fn key_down(&mut self, e: &KeyboardEvent) {
        self.sim.handle_event(&wasm::keyboard_event_to_input(e, true));
    }

    pub fn key_up(&mut self, e: &KeyboardEvent) {
        self.sim.handle_event(&wasm::keyboard_event_to_input(e, false));
    }

    pub fn click(&mut self, e: &MouseEvent) {
        self.sim.handle_event(&wasm::mouse_click_to_input(e));
    }

    /// Window blur or tab hidden: release every held key.
    pub fn blur(&mut self) {
        self.sim.handle_event(&InputEvent::FocusLost);
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.sim.resize(width, height);
    }

    /// Obstacles as flat `[min xyz, max xyz]` runs. Without `bounds` the
    /// playable area is the union of the obstacles.
    pub fn load_geometry(&mut self, obstacles: &Float32Array, bounds: Option<Float32Array>) -> Result<(), JsValue> {
        let boxes = Aabb::from_flat(&obstacles.to_vec())
            .ok_or_else(|| js_error("obstacle buffer length must be a multiple of 6"))?;

        let geometry = match bounds {
            Some(bounds) => {
                let bounds = Aabb::from_flat(&bounds.to_vec())
                    .filter(|b| b.len() == 1)
                    .ok_or_else(|| js_error("bounds buffer must hold exactly 6 floats"))?;
                GeometryIndex::new(boxes, bounds.first().copied())
            }
            None => GeometryIndex::from_obstacles(boxes),
        };
        self.sim.load_geometry(geometry);
        Ok(())
    }

    pub fn load_demo_court(&mut self) {
        self.sim.load_geometry(demo_court());
    }

    /// Advance one frame and return the flat snapshot (see `FrameSnapshot::to_array`).
    pub fn tick(&mut self, now: f64) -> Float32Array {
        let snapshot = self.sim.tick(now);
        Float32Array::from(&snapshot.to_array()[..])
    }

    /// Column-major view-projection matrix of the current camera.
    pub fn view_proj(&self) -> Float32Array {
        Float32Array::from(&self.sim.camera.view_proj().to_cols_array()[..])
    }
}

fn js_error<E: Into<String>>(msg: E) -> JsValue {
    JsValue::from_str(&msg.into())
}
