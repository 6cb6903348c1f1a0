//! Loaders for tower calculation parameter files.
//!
//! A path may name a single TOML file, a YAML file holding one record or a list of
//! records, or a directory whose `*.toml` files are read in name order.

use std::fs::File;
use std::path::{Path, PathBuf};

use log::debug;
use serde::Deserialize;
use thiserror::Error;
use tower_windload::{CalculationParams, WindLoadError};

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("no parameter records found in {0}")]
    Empty(PathBuf),
    #[error("{path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: WindLoadError,
    },
}

/// YAML documents may hold a single record or a list.
#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

/// Load every parameter record at `path`, validating each one.
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<Vec<CalculationParams>, ConfigError> {
    let path = path.as_ref();
    let records: Vec<CalculationParams> = load_records(path)?;
    if records.is_empty() {
        return Err(ConfigError::Empty(path.to_path_buf()));
    }
    for record in &records {
        record.validate().map_err(|source| ConfigError::Invalid {
            path: path.to_path_buf(),
            source,
        })?;
    }
    debug!("loaded {} parameter record(s) from {}", records.len(), path.display());
    Ok(records)
}

/// Load the first parameter record at `path`.
pub fn load_first_params<P: AsRef<Path>>(path: P) -> Result<CalculationParams, ConfigError> {
    let path = path.as_ref();
    load_params(path)?
        .into_iter()
        .next()
        .ok_or_else(|| ConfigError::Empty(path.to_path_buf()))
}

fn load_records<T>(path: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(match serde_yaml::from_reader(reader)? {
            OneOrMany::One(record) => vec![record],
            OneOrMany::Many(records) => records,
        })
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tower_windload::TerrainClass;

    const TOML_RECORD: &str = r#"
tower_height = 45.0
segments = 9
base_width = 6.0
top_width = 1.5
drag_coefficient = 1.3
base_wind_speed = 22.0
terrain_type = "C"
altitude = 850.0
turbulence = 0.2
"#;

    #[test]
    fn loads_single_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tower.toml");
        fs::write(&path, TOML_RECORD).unwrap();

        let params = load_first_params(&path).expect("toml parses");
        assert_eq!(params.segments, 9);
        assert_eq!(params.terrain_type, TerrainClass::C);
        assert_eq!(params.altitude, 850.0);
    }

    #[test]
    fn loads_yaml_list_with_legacy_field_names() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("towers.yaml");
        fs::write(
            &path,
            r#"
- towerHeight: 60
  segments: 3
  baseWidth: 4
  topWidth: 1
  dragCoefficient: 1.2
  baseWindSpeed: 20
  terrainType: B
  altitude: 0
  turbulence: 0
- tower_height: 30
  segments: 6
  base_width: 3
  top_width: 1
  drag_coefficient: 1.1
  base_wind_speed: 18
  terrain_type: A
  altitude: 10
  turbulence: 0.1
"#,
        )
        .unwrap();

        let records = load_params(&path).expect("yaml parses");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].tower_height, 60.0);
        assert_eq!(records[0].terrain_type, TerrainClass::B);
        assert_eq!(records[1].terrain_type, TerrainClass::A);
    }

    #[test]
    fn reads_directory_in_name_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.toml"), TOML_RECORD).unwrap();
        fs::write(
            dir.path().join("a.toml"),
            TOML_RECORD.replace("segments = 9", "segments = 4"),
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let records = load_params(dir.path()).unwrap();
        let segments: Vec<usize> = records.iter().map(|r| r.segments).collect();
        assert_eq!(segments, vec![4, 9]);
    }

    #[test]
    fn rejects_unknown_terrain_and_invalid_values() {
        let dir = tempfile::tempdir().unwrap();
        let bad_terrain = dir.path().join("bad.toml");
        fs::write(&bad_terrain, TOML_RECORD.replace("\"C\"", "\"Z\"")).unwrap();
        match load_params(&bad_terrain) {
            Err(ConfigError::Toml(err)) => {
                assert!(err.to_string().contains("unknown terrain class 'Z'"), "{err}");
            }
            other => panic!("expected a terrain parse error, got {other:?}"),
        }

        let zero_segments = dir.path().join("zero.toml");
        fs::write(&zero_segments, TOML_RECORD.replace("segments = 9", "segments = 0")).unwrap();
        assert!(matches!(
            load_params(&zero_segments),
            Err(ConfigError::Invalid { .. })
        ));

        let empty_dir = tempfile::tempdir().unwrap();
        assert!(matches!(load_params(empty_dir.path()), Err(ConfigError::Empty(_))));
    }
}
