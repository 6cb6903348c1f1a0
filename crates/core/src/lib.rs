//! Physical constants, rounding helpers, and atmosphere primitives shared across the workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Sea-level air density (kg/m³).
    pub const STANDARD_AIR_DENSITY: f64 = 1.225;
    /// Height at which the base wind speed is measured (m).
    pub const REFERENCE_HEIGHT_M: f64 = 10.0;
    /// Fraction of the square lattice envelope that is solid steel.
    pub const SOLIDITY_RATIO: f64 = 0.3;
    /// Altitude at which the barometric approximation reaches zero density (m).
    pub const BAROMETRIC_SCALE_ALTITUDE_M: f64 = 44_300.0;
    /// Exponent of the barometric density approximation.
    pub const BAROMETRIC_EXPONENT: f64 = 5.256;
    /// Days per (non-leap) year used by seasonal terms.
    pub const DAYS_PER_YEAR: f64 = 365.0;
}

/// Decimal rounding applied only when values leave the engine.
pub mod rounding {
    /// Round `value` half away from zero to `decimals` places.
    #[inline]
    pub fn round_to(value: f64, decimals: i32) -> f64 {
        let factor = 10f64.powi(decimals);
        (value * factor).round() / factor
    }

    /// Two-decimal rounding used for heights, speeds, pressures and loads.
    #[inline]
    pub fn round2(value: f64) -> f64 {
        round_to(value, 2)
    }

    /// Three-decimal rounding used for cross-section areas.
    #[inline]
    pub fn round3(value: f64) -> f64 {
        round_to(value, 3)
    }

    /// One-decimal rounding used for forecast temperatures and wind speeds.
    #[inline]
    pub fn round1(value: f64) -> f64 {
        round_to(value, 1)
    }
}

/// Standard-atmosphere helpers.
pub mod atmosphere {
    use super::constants::{BAROMETRIC_EXPONENT, BAROMETRIC_SCALE_ALTITUDE_M, STANDARD_AIR_DENSITY};

    /// Air density corrected for altitude with the barometric approximation
    /// `rho0 * (1 - h / 44300)^5.256`.
    ///
    /// Callers must keep `altitude_m` below [`BAROMETRIC_SCALE_ALTITUDE_M`]; beyond it
    /// the base turns negative and the result is NaN.
    #[inline]
    pub fn corrected_air_density(altitude_m: f64) -> f64 {
        STANDARD_AIR_DENSITY * altitude_factor(altitude_m)
    }

    /// Ratio of corrected density to sea-level density.
    #[inline]
    pub fn altitude_factor(altitude_m: f64) -> f64 {
        (1.0 - altitude_m / BAROMETRIC_SCALE_ALTITUDE_M).powf(BAROMETRIC_EXPONENT)
    }
}

#[cfg(test)]
mod tests {
    use super::atmosphere::corrected_air_density;
    use super::rounding::{round1, round2, round3};

    #[test]
    fn rounding_matches_fixed_precision() {
        assert_eq!(round2(1080.4537), 1080.45);
        assert_eq!(round3(3.67549), 3.675);
        assert_eq!(round1(21.26), 21.3);
        assert_eq!(round2(-0.005), -0.01);
    }

    #[test]
    fn sea_level_density_is_standard() {
        assert_eq!(corrected_air_density(0.0), 1.225);
    }

    #[test]
    fn density_drops_with_altitude() {
        let rho = corrected_air_density(2_000.0);
        assert!(rho < 1.225 && rho > 0.9, "rho = {rho}");
        assert!(corrected_air_density(44_300.0).abs() < 1e-12);
    }
}
