//! Wind load engine for tapered lattice towers.
//!
//! The tower is cut into equal-height segments. For each segment the engine evaluates a
//! power-law wind profile at the segment midpoint, applies a turbulence jitter, converts the
//! speed to dynamic pressure using an altitude-corrected air density, and multiplies by the
//! tapered solid area and the drag coefficient. Values are carried at full precision and only
//! rounded when they are written into [`SegmentResult`] and [`LoadSummary`].

pub mod engine;
pub mod error;
pub mod params;
pub mod recommend;
pub mod report;
pub mod terrain;

pub use engine::{
    CalculationResult, LoadSummary, SegmentResult, compute_cross_section, compute_wind_load,
    compute_wind_load_with_rng, compute_wind_pressure, compute_wind_profile,
    compute_wind_profile_for_code,
};
pub use error::{InputError, WindLoadError};
pub use params::{CalculationParams, MAX_SEGMENTS};
pub use recommend::generate_recommendations;
pub use report::{Report, build_report, build_report_at};
pub use terrain::{TerrainClass, TerrainProfile};
