//! Per-segment wind profile, pressure, area, and load evaluation.

use log::{debug, trace};
use rand::Rng;
use serde::Serialize;
use tower_core::atmosphere::corrected_air_density;
use tower_core::constants::{REFERENCE_HEIGHT_M, SOLIDITY_RATIO};
use tower_core::rounding::{round2, round3};

use crate::error::WindLoadError;
use crate::params::CalculationParams;
use crate::terrain::TerrainClass;

/// Rounded physical results for one segment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentResult {
    /// Midpoint height of the segment (m).
    pub height: f64,
    /// Wind speed at the midpoint after turbulence (m/s).
    pub wind_speed: f64,
    /// Dynamic pressure (Pa).
    pub wind_pressure: f64,
    /// Effective solid area (m²).
    pub cross_section: f64,
    /// Resulting wind load (N).
    pub wind_load: f64,
}

/// Aggregate statistics over all segments, rounded once from full-precision sums.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSummary {
    /// Sum of segment loads (N).
    pub total_load: f64,
    /// Largest segment load (N).
    pub max_load: f64,
    /// Mean segment wind speed (m/s).
    pub avg_wind_speed: f64,
}

/// Segments in ascending height order plus their summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub results: Vec<SegmentResult>,
    pub summary: LoadSummary,
}

impl CalculationResult {
    /// The highest segment, if any.
    pub fn top_segment(&self) -> Option<&SegmentResult> {
        self.results.last()
    }
}

/// Power-law wind speed at `height`, clamped at zero.
///
/// `reference_height` is where `base_wind_speed` was measured, normally
/// [`REFERENCE_HEIGHT_M`].
pub fn compute_wind_profile(
    base_wind_speed: f64,
    height: f64,
    terrain: TerrainClass,
    reference_height: f64,
) -> f64 {
    let alpha = terrain.profile().alpha;
    (base_wind_speed * (height / reference_height).powf(alpha)).max(0.0)
}

/// Same as [`compute_wind_profile`] at the standard reference height, taking a raw terrain code.
pub fn compute_wind_profile_for_code(
    base_wind_speed: f64,
    height: f64,
    terrain_code: &str,
) -> Result<f64, WindLoadError> {
    let terrain: TerrainClass = terrain_code.parse()?;
    Ok(compute_wind_profile(
        base_wind_speed,
        height,
        terrain,
        REFERENCE_HEIGHT_M,
    ))
}

/// Dynamic pressure `0.5 * rho * v²` in pascals.
#[inline]
pub fn compute_wind_pressure(wind_speed: f64, air_density: f64) -> f64 {
    0.5 * air_density * wind_speed * wind_speed
}

/// Solid area of the square lattice section at `height`.
///
/// The side width tapers linearly from `base_width` at the ground to `top_width` at
/// `total_height`; only [`SOLIDITY_RATIO`] of the envelope is steel.
pub fn compute_cross_section(
    height: f64,
    total_height: f64,
    base_width: f64,
    top_width: f64,
) -> f64 {
    let ratio = height / total_height;
    let width = base_width - (base_width - top_width) * ratio;
    width * width * SOLIDITY_RATIO
}

/// Run the segment calculation with the thread-local random source for turbulence.
pub fn compute_wind_load(params: &CalculationParams) -> Result<CalculationResult, WindLoadError> {
    compute_wind_load_with_rng(params, &mut rand::rng())
}

/// Run the segment calculation drawing turbulence jitter from `rng`.
///
/// Each segment draws one uniform sample `r` in `[0, 1)` and scales its wind speed by
/// `1 + turbulence * r`. A seeded generator makes the output reproducible.
pub fn compute_wind_load_with_rng<R: Rng + ?Sized>(
    params: &CalculationParams,
    rng: &mut R,
) -> Result<CalculationResult, WindLoadError> {
    params.validate()?;

    let segment_height = params.segment_height();
    let air_density = corrected_air_density(params.altitude);
    debug!(
        "computing {} segments of {:.3} m, terrain {}, air density {:.5} kg/m³",
        params.segments, segment_height, params.terrain_type, air_density
    );

    let mut results = Vec::with_capacity(params.segments);
    let mut total_load = 0.0;
    let mut max_load = f64::NEG_INFINITY;
    let mut total_wind_speed = 0.0;

    for index in 0..params.segments {
        let height = (index as f64 + 0.5) * segment_height;

        let mut wind_speed = compute_wind_profile(
            params.base_wind_speed,
            height,
            params.terrain_type,
            REFERENCE_HEIGHT_M,
        );
        wind_speed *= 1.0 + params.turbulence * rng.random::<f64>();

        let wind_pressure = compute_wind_pressure(wind_speed, air_density);
        let cross_section = compute_cross_section(
            height,
            params.tower_height,
            params.base_width,
            params.top_width,
        );
        let wind_load = wind_pressure * cross_section * params.drag_coefficient;
        trace!(
            "segment {index}: h={height:.3} v={wind_speed:.4} q={wind_pressure:.4} a={cross_section:.5} f={wind_load:.4}"
        );

        results.push(SegmentResult {
            height: round2(height),
            wind_speed: round2(wind_speed),
            wind_pressure: round2(wind_pressure),
            cross_section: round3(cross_section),
            wind_load: round2(wind_load),
        });

        total_load += wind_load;
        max_load = max_load.max(wind_load);
        total_wind_speed += wind_speed;
    }

    let summary = LoadSummary {
        total_load: round2(total_load),
        max_load: round2(max_load),
        avg_wind_speed: round2(total_wind_speed / params.segments as f64),
    };
    debug!(
        "total load {} N, max load {} N, mean wind {} m/s",
        summary.total_load, summary.max_load, summary.avg_wind_speed
    );

    Ok(CalculationResult { results, summary })
}
