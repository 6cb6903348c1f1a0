//! Qualitative design advice derived from a calculation summary.

use crate::engine::CalculationResult;

/// Maximum segment load above which reinforcement is advised (N).
pub const REINFORCEMENT_LOAD_THRESHOLD_N: f64 = 5_000.0;
/// Mean wind speed above which wind-resistance measures are advised (m/s).
pub const HIGH_WIND_THRESHOLD_M_S: f64 = 25.0;
/// Share of the maximum load above which the top segment is flagged.
pub const TOP_LOAD_RATIO: f64 = 0.8;

/// Advice emitted when the maximum load exceeds [`REINFORCEMENT_LOAD_THRESHOLD_N`].
pub const REINFORCEMENT_ADVICE: &str = "建议加强铁塔结构设计，最大风荷载较大";
/// Advice emitted when the mean wind speed exceeds [`HIGH_WIND_THRESHOLD_M_S`].
pub const WIND_RESISTANCE_ADVICE: &str = "平均风速较高，建议考虑抗风措施";
/// Advice emitted when the top segment carries most of the peak load.
pub const TOP_STRUCTURE_ADVICE: &str = "塔顶风荷载较大，建议重点关注顶部结构";

/// Derive recommendations from the rounded summary and the top segment.
///
/// Relies on `results` being in ascending height order.
pub fn generate_recommendations(result: &CalculationResult) -> Vec<String> {
    let mut recommendations = Vec::new();
    let max_load = result.summary.max_load;

    if max_load > REINFORCEMENT_LOAD_THRESHOLD_N {
        recommendations.push(REINFORCEMENT_ADVICE.to_string());
    }
    if result.summary.avg_wind_speed > HIGH_WIND_THRESHOLD_M_S {
        recommendations.push(WIND_RESISTANCE_ADVICE.to_string());
    }
    if let Some(top) = result.top_segment() {
        if top.wind_load > max_load * TOP_LOAD_RATIO {
            recommendations.push(TOP_STRUCTURE_ADVICE.to_string());
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{LoadSummary, SegmentResult};

    fn segment(height: f64, wind_load: f64) -> SegmentResult {
        SegmentResult {
            height,
            wind_speed: 20.0,
            wind_pressure: 245.0,
            cross_section: 1.0,
            wind_load,
        }
    }

    fn result(max_load: f64, avg_wind_speed: f64, loads: &[f64]) -> CalculationResult {
        CalculationResult {
            results: loads
                .iter()
                .enumerate()
                .map(|(i, &load)| segment(i as f64 * 10.0 + 5.0, load))
                .collect(),
            summary: LoadSummary {
                total_load: loads.iter().sum(),
                max_load,
                avg_wind_speed,
            },
        }
    }

    #[test]
    fn reinforcement_depends_only_on_max_load() {
        let heavy = result(5_000.01, 10.0, &[5_000.01, 100.0]);
        assert_eq!(generate_recommendations(&heavy), vec![REINFORCEMENT_ADVICE]);

        let borderline = result(5_000.0, 10.0, &[5_000.0, 100.0]);
        assert!(generate_recommendations(&borderline).is_empty());
    }

    #[test]
    fn high_wind_advice_above_threshold() {
        let windy = result(1_000.0, 25.5, &[1_000.0, 10.0]);
        assert_eq!(generate_recommendations(&windy), vec![WIND_RESISTANCE_ADVICE]);
    }

    #[test]
    fn top_segment_advice_when_top_dominates() {
        let top_heavy = result(6_000.0, 30.0, &[1_000.0, 5_000.0, 6_000.0]);
        assert_eq!(
            generate_recommendations(&top_heavy),
            vec![REINFORCEMENT_ADVICE, WIND_RESISTANCE_ADVICE, TOP_STRUCTURE_ADVICE]
        );

        let exactly_ratio = result(1_000.0, 10.0, &[1_000.0, 800.0]);
        assert!(generate_recommendations(&exactly_ratio).is_empty());
    }

    #[test]
    fn empty_results_skip_top_rule() {
        let empty = result(0.0, 0.0, &[]);
        assert!(generate_recommendations(&empty).is_empty());
    }
}
