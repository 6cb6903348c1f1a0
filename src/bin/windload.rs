use std::io::Write;
use std::path::PathBuf;

use chrono::Utc;
use clap::Parser;
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tower_load_calculator::charts::{render_load_chart, render_wind_profile_chart};
use tower_load_calculator::config::load_first_params;
use tower_load_calculator::export::{json, report, table, writer_for_path};
use tower_load_calculator::windload::{
    CalculationParams, CalculationResult, TerrainClass, build_report, compute_wind_load,
    compute_wind_load_with_rng,
};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Segment-by-segment wind load on a tapered lattice tower"
)]
struct Cli {
    /// Parameter file (TOML, YAML, or a directory of TOML files; first record is used)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Total tower height in metres
    #[arg(long)]
    tower_height: Option<f64>,

    /// Number of equal-height segments
    #[arg(long)]
    segments: Option<usize>,

    /// Side width at the base in metres
    #[arg(long)]
    base_width: Option<f64>,

    /// Side width at the top in metres
    #[arg(long)]
    top_width: Option<f64>,

    /// Drag coefficient
    #[arg(long)]
    drag_coefficient: Option<f64>,

    /// Wind speed at 10 m in m/s
    #[arg(long)]
    base_wind_speed: Option<f64>,

    /// Terrain class (A, B, C or D)
    #[arg(long)]
    terrain: Option<TerrainClass>,

    /// Site altitude in metres
    #[arg(long)]
    altitude: Option<f64>,

    /// Turbulence intensity factor
    #[arg(long)]
    turbulence: Option<f64>,

    /// Seed for reproducible turbulence jitter
    #[arg(long)]
    seed: Option<u64>,

    /// Write the text report to this path (`-` for stdout)
    #[arg(long)]
    report: Option<PathBuf>,

    /// Write the report to the working directory under its dated default name
    #[arg(long, default_value_t = false, conflicts_with = "report")]
    export: bool,

    /// Write the segment table as CSV
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Write the full report as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Directory for wind_load.png and wind_profile.png
    #[arg(long)]
    charts: Option<PathBuf>,

    #[arg(long, default_value_t = 900)]
    chart_width: u32,

    #[arg(long, default_value_t = 600)]
    chart_height: u32,
}

impl Cli {
    fn params(&self) -> anyhow::Result<CalculationParams> {
        let mut params = match &self.config {
            Some(path) => load_first_params(path)?,
            None => CalculationParams::default(),
        };
        if let Some(v) = self.tower_height {
            params.tower_height = v;
        }
        if let Some(v) = self.segments {
            params.segments = v;
        }
        if let Some(v) = self.base_width {
            params.base_width = v;
        }
        if let Some(v) = self.top_width {
            params.top_width = v;
        }
        if let Some(v) = self.drag_coefficient {
            params.drag_coefficient = v;
        }
        if let Some(v) = self.base_wind_speed {
            params.base_wind_speed = v;
        }
        if let Some(v) = self.terrain {
            params.terrain_type = v;
        }
        if let Some(v) = self.altitude {
            params.altitude = v;
        }
        if let Some(v) = self.turbulence {
            params.turbulence = v;
        }
        Ok(params)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    let params = cli.params()?;

    let result = match cli.seed {
        Some(seed) => compute_wind_load_with_rng(&params, &mut ChaCha8Rng::seed_from_u64(seed))?,
        None => compute_wind_load(&params)?,
    };
    let tower_report = build_report(&params, &result);

    print_result(&result);
    if !tower_report.recommendations.is_empty() {
        println!();
        println!("Recommendations:");
        for advice in &tower_report.recommendations {
            println!("  - {advice}");
        }
    }

    let report_path = if cli.export {
        Some(PathBuf::from(report::default_file_name(Utc::now().date_naive())))
    } else {
        cli.report.clone()
    };
    if let Some(path) = report_path {
        let mut writer = writer_for_path(&path)?;
        writer.write_all(report::render(&tower_report).as_bytes())?;
        writer.flush()?;
        info!("report written to {}", path.display());
    }

    if let Some(path) = &cli.csv {
        let mut writer = writer_for_path(path)?;
        table::write_csv(&mut writer, &result.results)?;
        writer.flush()?;
        info!("segment table written to {}", path.display());
    }

    if let Some(path) = &cli.json {
        let mut writer = writer_for_path(path)?;
        json::write_report(&mut writer, &tower_report)?;
        writer.flush()?;
        info!("json report written to {}", path.display());
    }

    if let Some(dir) = &cli.charts {
        let size = (cli.chart_width, cli.chart_height);
        render_load_chart(&result, &dir.join("wind_load.png"), size)?;
        render_wind_profile_chart(&result, &dir.join("wind_profile.png"), size)?;
        info!("charts written to {}", dir.display());
    }

    Ok(())
}

fn print_result(result: &CalculationResult) {
    println!("=== Tower Wind Load ===");
    println!(
        "{:>10} {:>12} {:>12} {:>12} {:>12}",
        "height_m", "wind_m_s", "pressure_pa", "area_m2", "load_n"
    );
    for s in &result.results {
        println!(
            "{:>10.2} {:>12.2} {:>12.2} {:>12.3} {:>12.2}",
            s.height, s.wind_speed, s.wind_pressure, s.cross_section, s.wind_load
        );
    }
    println!();
    println!("Total load: {:.2} N", result.summary.total_load);
    println!("Max load: {:.2} N", result.summary.max_load);
    println!("Average wind speed: {:.2} m/s", result.summary.avg_wind_speed);
}
