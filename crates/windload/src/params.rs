//! Caller-supplied tower geometry and environment.

use serde::{Deserialize, Serialize};
use tower_core::constants::BAROMETRIC_SCALE_ALTITUDE_M;

use crate::error::{InputError, WindLoadError};
use crate::terrain::TerrainClass;

/// Upper bound on the number of segments in one calculation.
pub const MAX_SEGMENTS: usize = 100_000;

/// Inputs for one wind load calculation.
///
/// Field names follow snake_case; the camelCase names used by older parameter files
/// (`towerHeight`, `dragCoefficient`, ...) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationParams {
    /// Total tower height in metres.
    #[serde(alias = "towerHeight")]
    pub tower_height: f64,
    /// Number of equal-height segments.
    pub segments: usize,
    /// Side width at the base in metres.
    #[serde(alias = "baseWidth")]
    pub base_width: f64,
    /// Side width at the top in metres.
    #[serde(alias = "topWidth")]
    pub top_width: f64,
    /// Dimensionless drag coefficient.
    #[serde(alias = "dragCoefficient")]
    pub drag_coefficient: f64,
    /// Wind speed at the 10 m reference height (m/s).
    #[serde(alias = "baseWindSpeed")]
    pub base_wind_speed: f64,
    /// Terrain roughness class.
    #[serde(alias = "terrainType")]
    pub terrain_type: TerrainClass,
    /// Site altitude above sea level in metres.
    pub altitude: f64,
    /// Turbulence intensity factor.
    pub turbulence: f64,
}

impl Default for CalculationParams {
    fn default() -> Self {
        Self {
            tower_height: 60.0,
            segments: 12,
            base_width: 8.0,
            top_width: 2.0,
            drag_coefficient: 1.2,
            base_wind_speed: 25.0,
            terrain_type: TerrainClass::B,
            altitude: 100.0,
            turbulence: 0.15,
        }
    }
}

impl CalculationParams {
    /// Check every precondition of the engine.
    pub fn validate(&self) -> Result<(), WindLoadError> {
        let finite = [
            ("tower_height", self.tower_height),
            ("base_width", self.base_width),
            ("top_width", self.top_width),
            ("drag_coefficient", self.drag_coefficient),
            ("base_wind_speed", self.base_wind_speed),
            ("altitude", self.altitude),
            ("turbulence", self.turbulence),
        ];
        if let Some(&(name, _)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(InputError::NonFinite(name).into());
        }
        if self.tower_height <= 0.0 {
            return Err(InputError::NonPositiveHeight(self.tower_height).into());
        }
        if self.segments == 0 {
            return Err(InputError::NoSegments.into());
        }
        if self.segments > MAX_SEGMENTS {
            return Err(InputError::TooManySegments(self.segments).into());
        }
        if self.altitude >= BAROMETRIC_SCALE_ALTITUDE_M {
            return Err(InputError::AltitudeOutOfRange(self.altitude).into());
        }
        Ok(())
    }

    /// Height of each segment band in metres.
    pub fn segment_height(&self) -> f64 {
        self.tower_height / self.segments as f64
    }
}
