//! Export-ready report assembly.

use chrono::{Local, NaiveDateTime};
use serde::Serialize;

use crate::engine::CalculationResult;
use crate::params::CalculationParams;
use crate::recommend::generate_recommendations;

/// Title printed at the top of every exported report.
pub const REPORT_TITLE: &str = "铁塔风荷载计算报告";
/// `strftime` layout of the report timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y/%-m/%-d %H:%M:%S";

/// Calculation inputs and outputs packaged for export.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub title: String,
    pub timestamp: String,
    pub parameters: CalculationParams,
    pub results: CalculationResult,
    pub recommendations: Vec<String>,
}

/// Build a report stamped with the current local time.
pub fn build_report(params: &CalculationParams, result: &CalculationResult) -> Report {
    build_report_at(params, result, Local::now().naive_local())
}

/// Build a report stamped with `generated_at`.
pub fn build_report_at(
    params: &CalculationParams,
    result: &CalculationResult,
    generated_at: NaiveDateTime,
) -> Report {
    Report {
        title: REPORT_TITLE.to_string(),
        timestamp: generated_at.format(TIMESTAMP_FORMAT).to_string(),
        parameters: params.clone(),
        results: result.clone(),
        recommendations: generate_recommendations(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::compute_wind_load;
    use chrono::NaiveDate;

    #[test]
    fn report_echoes_inputs_and_formats_timestamp() {
        let params = CalculationParams {
            turbulence: 0.0,
            ..CalculationParams::default()
        };
        let result = compute_wind_load(&params).unwrap();
        let stamp = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(9, 7, 2)
            .unwrap();
        let report = build_report_at(&params, &result, stamp);

        assert_eq!(report.title, REPORT_TITLE);
        assert_eq!(report.timestamp, "2024/3/5 09:07:02");
        assert_eq!(report.parameters, params);
        assert_eq!(report.results, result);
        assert_eq!(report.recommendations, generate_recommendations(&result));
    }
}
