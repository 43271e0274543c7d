use fret_core::cost::{CostModel, CostWeights, WeightsError};
use fret_core::map::PositionMapper;
use fret_core::model::pitch::Pitch;
use fret_core::model::tuning::Tuning;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Root run configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
#[serde(deny_unknown_fields)]
pub struct RunConfig {
    #[serde(default)]
    pub instrument: InstrumentConfig,
    #[serde(default)]
    pub weights: CostWeights,
}

impl RunConfig {
    /// Load configuration from a YAML file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let path_buf = path.to_path_buf();
        let file = File::open(path).map_err(|source| ConfigError::Read {
            source,
            path: path_buf.clone(),
        })?;
        let reader = BufReader::new(file);
        let cfg: RunConfig =
            serde_yaml::from_reader(reader).map_err(|source| ConfigError::Parse {
                source,
                path: path_buf.clone(),
            })?;
        cfg.validate().map_err(|source| ConfigError::Invalid {
            path: path_buf,
            source,
        })?;
        Ok(cfg)
    }

    /// Validate the configuration without performing I/O.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.instrument.validate()?;
        self.weights.validate()?;
        Ok(())
    }

    /// Build the mapper and cost model the solver consumes.
    pub fn build(&self) -> Result<(PositionMapper, CostModel), ValidationError> {
        self.validate()?;
        let mut open_pitches = Vec::with_capacity(self.instrument.tuning.len());
        for name in &self.instrument.tuning {
            let pitch =
                Pitch::parse(name).ok_or_else(|| ValidationError::BadOpenNote(name.clone()))?;
            open_pitches.push(pitch);
        }
        let mapper = PositionMapper::new(Tuning::new(open_pitches), self.instrument.frets);
        let model = CostModel::new(self.weights)?;
        Ok((mapper, model))
    }
}

/// Instrument block: open-string note names (highest string first) plus
/// fret count.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InstrumentConfig {
    #[serde(default = "default_tuning")]
    pub tuning: Vec<String>,
    #[serde(default = "default_frets")]
    pub frets: u8,
}

impl Default for InstrumentConfig {
    fn default() -> Self {
        Self {
            tuning: default_tuning(),
            frets: default_frets(),
        }
    }
}

impl InstrumentConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.tuning.is_empty() {
            return Err(ValidationError::EmptyTuning);
        }
        for name in &self.tuning {
            if Pitch::parse(name).is_none() {
                return Err(ValidationError::BadOpenNote(name.clone()));
            }
        }
        if self.frets == 0 {
            return Err(ValidationError::NoFrets);
        }
        Ok(())
    }
}

fn default_tuning() -> Vec<String> {
    ["E4", "B3", "G3", "D3", "A2", "E2"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_frets() -> u8 {
    22
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    #[error("invalid config at {path}: {source}")]
    Invalid {
        path: PathBuf,
        #[source]
        source: ValidationError,
    },
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("instrument tuning must name at least one string")]
    EmptyTuning,
    #[error("open-string note '{0}' does not parse")]
    BadOpenNote(String),
    #[error("instrument must have at least one fret")]
    NoFrets,
    #[error(transparent)]
    Weights(#[from] WeightsError),
}
