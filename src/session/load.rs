use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::config::DataSettings;

use super::error::{LoadError, SeriesError};
use super::model::{Sample, Series, Sessions};
use super::timestamp::Timestamp;

/// Latest reading a recording may carry (24 hours). Traces hold one value
/// per second of recording.
pub const MAX_RECORDING_SECS: u32 = 24 * 60 * 60;

/// Wire shape of a sample. Both keys are required; `bpm` may be `null`.
#[derive(Debug, Deserialize)]
struct RawSample {
    time: String,
    #[serde(deserialize_with = "nullable")]
    bpm: Option<f64>,
}

// Using `deserialize_with` keeps serde from defaulting a missing `bpm` to `None`.
fn nullable<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<f64>::deserialize(d)
}

/// Parse a series document.
///
/// Objects are read in insertion order (values only, keys are labels for
/// error messages). Arrays are read in array order.
pub fn parse_series(name: &str, json: &str) -> Result<Series, SeriesError> {
    let doc: Value = serde_json::from_str(json)?;

    let entries: Vec<(String, Value)> = match doc {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v))
            .collect(),
        Value::Null => return Err(SeriesError::NotACollection("null")),
        Value::Bool(_) => return Err(SeriesError::NotACollection("a boolean")),
        Value::Number(_) => return Err(SeriesError::NotACollection("a number")),
        Value::String(_) => return Err(SeriesError::NotACollection("a string")),
    };

    let mut samples = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let raw: RawSample = serde_json::from_value(value).map_err(|source| SeriesError::Sample {
            key: key.clone(),
            source,
        })?;
        let time = Timestamp::parse(&raw.time).map_err(|source| SeriesError::Timestamp {
            key: key.clone(),
            source,
        })?;
        // Dropouts never extend the recording, so only readings are capped.
        if raw.bpm.is_some() && time.as_secs() > MAX_RECORDING_SECS {
            return Err(SeriesError::TooLong {
                key,
                secs: time.as_secs(),
                max: MAX_RECORDING_SECS,
            });
        }
        samples.push(Sample::new(time, raw.bpm));
    }

    Ok(Series::new(name, samples))
}

/// Read and parse one series file.
pub fn load_series(name: &str, path: &Path) -> Result<Series, LoadError> {
    let json = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let series = parse_series(name, &json).map_err(|source| LoadError::Series {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        series = name,
        path = %path.display(),
        samples = series.len(),
        dropouts = series.dropouts(),
        "loaded series"
    );
    Ok(series)
}

impl Sessions {
    /// Load both series from `dir` using the configured file names.
    pub fn load(dir: &Path, data: &DataSettings) -> Result<Self, LoadError> {
        let solo = load_series("solo", &resolve(dir, &data.solo_file))?;
        let group = load_series("group", &resolve(dir, &data.group_file))?;
        Ok(Self { solo, group })
    }
}

// Absolute file names in settings win over the data directory.
fn resolve(dir: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() {
        file.to_path_buf()
    } else {
        dir.join(file)
    }
}
