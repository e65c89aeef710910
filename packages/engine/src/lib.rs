//! Sandfall Engine - falling-sand cave simulation
//!
//! Rock paths are rasterized into a grid, then grains are poured from a
//! source until one falls out of the cave or the source is buried.
//!
//! Architecture:
//! - core/        - Macros and sequence helpers
//! - domain/      - Materials, geometry, input parsing, errors
//! - spatial/     - Grid storage and rock rasterization
//! - systems/     - Movement rules
//! - simulation/  - Cave construction, grain state machine, pours
//! - api/         - Public WASM surface

// Macros (fast!) must be declared first
#[macro_use]
pub mod core;
pub mod domain;
pub mod spatial;
pub mod systems;
pub mod simulation;
pub mod api;

pub use spatial::grid;
pub use spatial::raster;
pub use domain::materials;
pub use systems::behaviors;

use wasm_bindgen::prelude::*;

#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine (JS only)
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"Sandfall engine initialized".into());
}

#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Run both pours and return `{"part1":..,"part2":..}`
#[wasm_bindgen]
pub fn solve_json(input: &str) -> Result<String, JsValue> {
    let answer = simulation::solve(input, CaveSettings::default())
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    serde_json::to_string(&answer).map_err(|e| JsValue::from_str(&e.to_string()))
}

pub use api::wasm::SandCave;
pub use domain::errors::{CaveError, ParseError, ParseErrorKind};
pub use domain::geometry::{Point, RockPath, Stamp};
pub use domain::materials::Material;
pub use simulation::{
    solve, Answer, Cave, CaveBounds, CaveSettings, GrainOutcome, PourPolicy, PourReport,
};

// Material ids for JS
#[wasm_bindgen]
pub fn mat_air() -> u8 { materials::MAT_AIR }
#[wasm_bindgen]
pub fn mat_rock() -> u8 { materials::MAT_ROCK }
#[wasm_bindgen]
pub fn mat_sand() -> u8 { materials::MAT_SAND }
