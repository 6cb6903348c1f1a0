//! Terrain roughness classes and their wind-shear parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{InputError, WindLoadError};

/// Wind-shear parameters for one terrain class.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TerrainProfile {
    /// Power-law exponent of the wind profile.
    pub alpha: f64,
    /// Roughness length in metres. Not used by the load formula.
    pub z0: f64,
}

/// Terrain roughness class.
///
/// Deserializes through [`FromStr`], so configuration files get the same
/// [`InputError::UnknownTerrain`] as command-line input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum TerrainClass {
    /// Open, flat ground.
    A,
    /// Farmland and villages.
    B,
    /// Urban districts with dense buildings.
    C,
    /// Urban districts with dense, tall buildings.
    D,
}

/// Immutable terrain table, ordered from smoothest to roughest.
pub const TERRAIN_PROFILES: [(TerrainClass, TerrainProfile); 4] = [
    (TerrainClass::A, TerrainProfile { alpha: 0.12, z0: 0.01 }),
    (TerrainClass::B, TerrainProfile { alpha: 0.16, z0: 0.05 }),
    (TerrainClass::C, TerrainProfile { alpha: 0.22, z0: 0.20 }),
    (TerrainClass::D, TerrainProfile { alpha: 0.30, z0: 1.00 }),
];

impl TerrainClass {
    /// All classes in table order.
    pub const ALL: [TerrainClass; 4] = [
        TerrainClass::A,
        TerrainClass::B,
        TerrainClass::C,
        TerrainClass::D,
    ];

    /// Look up the wind-shear parameters for this class.
    pub const fn profile(self) -> TerrainProfile {
        TERRAIN_PROFILES[self.index()].1
    }

    /// Single-letter code used in reports and configuration files.
    pub const fn code(self) -> &'static str {
        match self {
            TerrainClass::A => "A",
            TerrainClass::B => "B",
            TerrainClass::C => "C",
            TerrainClass::D => "D",
        }
    }

    const fn index(self) -> usize {
        match self {
            TerrainClass::A => 0,
            TerrainClass::B => 1,
            TerrainClass::C => 2,
            TerrainClass::D => 3,
        }
    }
}

impl fmt::Display for TerrainClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for TerrainClass {
    type Err = WindLoadError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TerrainClass::ALL
            .into_iter()
            .find(|class| class.code() == s)
            .ok_or_else(|| InputError::UnknownTerrain(s.to_string()).into())
    }
}

impl TryFrom<String> for TerrainClass {
    type Error = WindLoadError;

    fn try_from(code: String) -> Result<Self, Self::Error> {
        code.parse()
    }
}
