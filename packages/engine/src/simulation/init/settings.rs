use serde::{Deserialize, Serialize};

use crate::domain::geometry::Point;

pub const DEFAULT_SOURCE: Point = Point::new(500, 0);

/// Cave geometry knobs. Missing JSON fields fall back to the defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CaveSettings {
    /// Where grains enter
    pub source: Point,
    /// Rows between the lowest rock and the synthetic floor
    pub floor_gap: i32,
    /// Floored caves are at least `max_x * width_factor` wide
    pub width_factor: i32,
}

impl Default for CaveSettings {
    fn default() -> Self {
        Self {
            source: DEFAULT_SOURCE,
            floor_gap: 2,
            width_factor: 2,
        }
    }
}

impl CaveSettings {
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: CaveSettings = serde_json::from_str(json).map_err(|e| e.to_string())?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.source.x < 0 || self.source.y < 0 {
            return Err(format!("source {} must not be negative", self.source));
        }
        if self.floor_gap < 1 {
            return Err(format!("floor_gap must be at least 1, got {}", self.floor_gap));
        }
        if self.width_factor < 1 {
            return Err(format!("width_factor must be at least 1, got {}", self.width_factor));
        }
        Ok(())
    }
}
