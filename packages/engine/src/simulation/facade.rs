use wasm_bindgen::prelude::*;

use crate::domain::input::parse_paths;
use crate::domain::materials::{Material, MAT_AIR};

use super::{Cave, CaveSettings, GrainOutcome, PourPolicy, PourReport};

#[wasm_bindgen]
pub struct SandCave {
    core: Cave,
    last_report: Option<PourReport>,
}

#[wasm_bindgen]
impl SandCave {
    /// Cave for the bounded pour (no floor)
    #[wasm_bindgen(js_name = fromInput)]
    pub fn from_input(input: &str) -> Result<SandCave, JsValue> {
        Self::build(input, CaveSettings::default(), false).map_err(|e| JsValue::from_str(&e))
    }

    /// Cave with the synthetic floor, for the source-blocked pour
    #[wasm_bindgen(js_name = fromInputFloored)]
    pub fn from_input_floored(input: &str) -> Result<SandCave, JsValue> {
        Self::build(input, CaveSettings::default(), true).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(js_name = withSettingsJson)]
    pub fn with_settings_json(input: &str, settings_json: &str, floored: bool) -> Result<SandCave, JsValue> {
        let settings = CaveSettings::from_json(settings_json).map_err(|e| JsValue::from_str(&e))?;
        Self::build(input, settings, floored).map_err(|e| JsValue::from_str(&e))
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.grid().width() }

    /// World x of column 0 in the cell buffer
    #[wasm_bindgen(getter)]
    pub fn origin_x(&self) -> i32 { self.core.grid().origin_x() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.grid().height() }

    #[wasm_bindgen(getter)]
    pub fn sand_count(&self) -> u32 { self.core.sand_count() }

    #[wasm_bindgen(getter)]
    pub fn source_x(&self) -> i32 { self.core.source().x }

    #[wasm_bindgen(getter)]
    pub fn source_y(&self) -> i32 { self.core.source().y }

    /// Material id at (x, y); air outside the grid
    pub fn get_cell(&self, x: i32, y: i32) -> u8 {
        self.core.grid().get(x, y).map_or(MAT_AIR, Material::id)
    }

    /// Drop a single grain. Returns true when it settled.
    pub fn drop_grain(&mut self) -> bool {
        !self.core.drop_grain().is_lost()
    }

    pub fn pour_bounded(&mut self) -> u32 {
        self.run(PourPolicy::Bounded)
    }

    pub fn pour_until_source_blocked(&mut self) -> u32 {
        self.run(PourPolicy::SourceBlocked)
    }

    /// JSON of the most recent pour, if any
    pub fn last_report_json(&self) -> Option<String> {
        self.last_report.as_ref().map(PourReport::to_json)
    }

    // === Raw cell buffer for JS views ===
    pub fn cells_ptr(&self) -> *const u8 {
        self.core.grid().cells_ptr()
    }

    pub fn cells_len(&self) -> usize {
        self.core.grid().size()
    }

    /// Text rendering of world columns `x_start..x_end`
    pub fn render(&self, x_start: i32, x_end: i32) -> String {
        self.core.grid().view(x_start..x_end).to_string()
    }
}

impl SandCave {
    fn build(input: &str, settings: CaveSettings, floored: bool) -> Result<SandCave, String> {
        let paths = parse_paths(input).map_err(|e| e.to_string())?;
        let core = if floored {
            Cave::floored(&paths, settings)
        } else {
            Cave::bounded(&paths, settings)
        }
        .map_err(|e| e.to_string())?;

        Ok(SandCave { core, last_report: None })
    }

    fn run(&mut self, policy: PourPolicy) -> u32 {
        let report = self.core.pour(policy);
        let grains = report.grains;
        self.last_report = Some(report);
        grains
    }

    pub fn cave(&self) -> &Cave {
        &self.core
    }

    /// Outcome of the next grain without committing it
    pub fn peek_grain(&self) -> GrainOutcome {
        self.core.next_grain()
    }
}
