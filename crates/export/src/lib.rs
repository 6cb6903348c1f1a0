//! Export helpers for text reports, CSV segment tables, and JSON sidecars.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Create a writer for the target path, handling stdout (`-`) by convention.
pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
    if path == Path::new("-") {
        return Ok(Box::new(BufWriter::new(io::stdout())));
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = File::create(path)?;
    Ok(Box::new(BufWriter::new(file)))
}

pub mod report {
    use std::fmt::Write as _;

    use chrono::NaiveDate;
    use tower_windload::Report;

    /// Column header of the detailed segment table.
    pub const TABLE_HEADER: &str = "高度(m)\t风速(m/s)\t风压(Pa)\t截面积(m²)\t风荷载(N)";

    /// Render the plain-text report in the fixed legacy layout.
    ///
    /// Recommendations are not part of the legacy layout; when present they are appended
    /// after the table under a `建议:` heading.
    pub fn render(report: &Report) -> String {
        let p = &report.parameters;
        let s = &report.results.summary;
        let mut out = String::new();

        out.push_str(&report.title);
        out.push('\n');
        let _ = writeln!(out, "生成时间: {}", report.timestamp);
        out.push('\n');

        out.push_str("计算参数:\n");
        let _ = writeln!(out, "铁塔总高度: {} m", p.tower_height);
        let _ = writeln!(out, "分段数量: {}", p.segments);
        let _ = writeln!(out, "塔底宽度: {} m", p.base_width);
        let _ = writeln!(out, "塔顶宽度: {} m", p.top_width);
        let _ = writeln!(out, "阻力系数: {}", p.drag_coefficient);
        let _ = writeln!(out, "基准风速: {} m/s", p.base_wind_speed);
        let _ = writeln!(out, "地形类别: {}", p.terrain_type);
        let _ = writeln!(out, "海拔高度: {} m", p.altitude);
        let _ = writeln!(out, "湍流强度: {}", p.turbulence);
        out.push('\n');

        out.push_str("计算结果:\n");
        let _ = writeln!(out, "总风荷载: {} N", s.total_load);
        let _ = writeln!(out, "最大单点荷载: {} N", s.max_load);
        let _ = writeln!(out, "平均风速: {} m/s", s.avg_wind_speed);
        out.push('\n');

        out.push_str("详细数据:\n");
        out.push_str(TABLE_HEADER);
        out.push('\n');
        for row in &report.results.results {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}",
                row.height, row.wind_speed, row.wind_pressure, row.cross_section, row.wind_load
            );
        }

        if !report.recommendations.is_empty() {
            out.push_str("\n建议:\n");
            for (i, advice) in report.recommendations.iter().enumerate() {
                let _ = writeln!(out, "{}. {}", i + 1, advice);
            }
        }

        out
    }

    /// Conventional download name, e.g. `铁塔风荷载计算报告_2024-03-05.txt`.
    pub fn default_file_name(date: NaiveDate) -> String {
        format!("{}_{}.txt", tower_windload::report::REPORT_TITLE, date.format("%Y-%m-%d"))
    }
}

pub mod table {
    use std::io::Write;

    use serde::Serialize;
    use tower_windload::SegmentResult;

    #[derive(Serialize)]
    struct Row {
        height_m: f64,
        wind_speed_m_s: f64,
        wind_pressure_pa: f64,
        cross_section_m2: f64,
        wind_load_n: f64,
    }

    impl From<&SegmentResult> for Row {
        fn from(s: &SegmentResult) -> Self {
            Self {
                height_m: s.height,
                wind_speed_m_s: s.wind_speed,
                wind_pressure_pa: s.wind_pressure,
                cross_section_m2: s.cross_section,
                wind_load_n: s.wind_load,
            }
        }
    }

    /// Write the segment table as CSV with a header row.
    pub fn write_csv<W: Write>(writer: W, segments: &[SegmentResult]) -> csv::Result<()> {
        let mut wtr = csv::Writer::from_writer(writer);
        for segment in segments {
            wtr.serialize(Row::from(segment))?;
        }
        wtr.flush()?;
        Ok(())
    }
}

pub mod json {
    use serde_json::to_writer_pretty;
    use std::io::Write;
    use tower_windload::Report;

    /// Write the report as pretty-printed JSON.
    pub fn write_report<W: Write>(writer: W, report: &Report) -> serde_json::Result<()> {
        to_writer_pretty(writer, report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tower_windload::{
        CalculationParams, TerrainClass, build_report_at, compute_wind_load,
    };

    fn worked_example() -> tower_windload::Report {
        let params = CalculationParams {
            tower_height: 60.0,
            segments: 3,
            base_width: 4.0,
            top_width: 1.0,
            drag_coefficient: 1.2,
            base_wind_speed: 20.0,
            terrain_type: TerrainClass::B,
            altitude: 0.0,
            turbulence: 0.0,
        };
        let result = compute_wind_load(&params).unwrap();
        let stamp = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        build_report_at(&params, &result, stamp)
    }

    #[test]
    fn report_layout_is_stable() {
        let report = worked_example();
        let text = report::render(&report);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "铁塔风荷载计算报告");
        assert_eq!(lines[1], "生成时间: 2024/3/5 14:30:00");
        assert_eq!(lines[2], "");
        assert_eq!(
            &lines[3..13],
            &[
                "计算参数:",
                "铁塔总高度: 60 m",
                "分段数量: 3",
                "塔底宽度: 4 m",
                "塔顶宽度: 1 m",
                "阻力系数: 1.2",
                "基准风速: 20 m/s",
                "地形类别: B",
                "海拔高度: 0 m",
                "湍流强度: 0",
            ]
        );
        assert_eq!(lines[14], "计算结果:");
        assert!(lines[15].starts_with("总风荷载: ") && lines[15].ends_with(" N"));
        assert_eq!(lines[19], "详细数据:");
        assert_eq!(lines[20], report::TABLE_HEADER);
        assert_eq!(lines[21], "10\t20\t245\t3.675\t1080.45");
        assert_eq!(lines.len(), 24 + report_advice_lines(&report));
    }

    fn report_advice_lines(report: &tower_windload::Report) -> usize {
        if report.recommendations.is_empty() {
            0
        } else {
            report.recommendations.len() + 2
        }
    }

    #[test]
    fn default_file_name_uses_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(
            report::default_file_name(date),
            "铁塔风荷载计算报告_2024-03-05.txt"
        );
    }

    #[test]
    fn csv_has_header_and_one_row_per_segment() {
        let report = worked_example();
        let mut buf = Vec::new();
        table::write_csv(&mut buf, &report.results.results).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("height_m,wind_speed_m_s,wind_pressure_pa,cross_section_m2,wind_load_n")
        );
        assert_eq!(lines.next(), Some("10.0,20.0,245.0,3.675,1080.45"));
        assert_eq!(lines.count(), 2);
    }

    #[test]
    fn json_sidecar_round_trips_summary() {
        let report = worked_example();
        let mut buf = Vec::new();
        json::write_report(&mut buf, &report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["title"], "铁塔风荷载计算报告");
        assert_eq!(value["parameters"]["terrain_type"], "B");
        assert_eq!(
            value["results"]["summary"]["max_load"].as_f64(),
            Some(report.results.summary.max_load)
        );
    }

    #[test]
    fn writer_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        {
            let mut writer = writer_for_path(&path).unwrap();
            writer.write_all(b"ok").unwrap();
        }
        assert_eq!(fs::read_to_string(&path).unwrap(), "ok");
    }
}
