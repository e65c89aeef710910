//! Cave materials
//!
//! A cell is always exactly one of three materials. The numeric ids are
//! stable because JS reads the raw cell buffer through `cells_ptr`.

use serde::{Deserialize, Serialize};

pub type MaterialId = u8;

pub const MAT_AIR: MaterialId = 0;
pub const MAT_ROCK: MaterialId = 1;
pub const MAT_SAND: MaterialId = 2;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    #[default]
    Air = MAT_AIR,
    Rock = MAT_ROCK,
    Sand = MAT_SAND,
}

impl Material {
    #[inline]
    pub fn id(self) -> MaterialId {
        self as MaterialId
    }

    pub fn from_id(id: MaterialId) -> Option<Self> {
        match id {
            MAT_AIR => Some(Material::Air),
            MAT_ROCK => Some(Material::Rock),
            MAT_SAND => Some(Material::Sand),
            _ => None,
        }
    }

    #[inline]
    pub fn is_air(self) -> bool {
        self == Material::Air
    }

    /// Glyph used by the text renderer
    pub fn glyph(self) -> char {
        match self {
            Material::Air => '.',
            Material::Rock => '#',
            Material::Sand => 'o',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_stable() {
        assert_eq!(Material::Air.id(), 0);
        assert_eq!(Material::Rock.id(), 1);
        assert_eq!(Material::Sand.id(), 2);
        assert_eq!(Material::from_id(2), Some(Material::Sand));
        assert_eq!(Material::from_id(3), None);
    }

    #[test]
    fn serializes_lowercase() {
        let json = serde_json::to_string(&Material::Rock).unwrap();
        assert_eq!(json, "\"rock\"");
    }
}
