use crate::model::coordinate::Coordinate;
use core::fmt;
use serde::{Deserialize, Serialize};

/// Weights of the ergonomic cost model. Fixed for the lifetime of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostWeights {
    /// Cost per fret of lateral hand movement.
    pub fret_stretch: f64,
    /// Cost per string crossed.
    pub string_change: f64,
    /// Subtracted when landing on an open string.
    pub open_string_bonus: f64,
    /// Added when a transition exceeds the reachable span.
    pub anatomical_penalty: f64,
    /// Largest fret distance a single hand position covers.
    pub max_fret_span: u8,
    /// Lower bound every step cost is clamped to. Strictly positive so the
    /// search heuristic stays admissible and expansion terminates.
    pub step_floor: f64,
}

impl Default for CostWeights {
    fn default() -> Self {
        Self {
            fret_stretch: 1.0,
            string_change: 2.0,
            open_string_bonus: 0.5,
            anatomical_penalty: 15.0,
            max_fret_span: 4,
            step_floor: 1.0,
        }
    }
}

impl CostWeights {
    pub fn validate(&self) -> Result<(), WeightsError> {
        for (name, value) in [
            ("fret_stretch", self.fret_stretch),
            ("string_change", self.string_change),
            ("open_string_bonus", self.open_string_bonus),
            ("anatomical_penalty", self.anatomical_penalty),
            ("step_floor", self.step_floor),
        ] {
            if !value.is_finite() {
                return Err(WeightsError::NotFinite(name));
            }
        }
        if self.fret_stretch < 0.0 {
            return Err(WeightsError::Negative("fret_stretch"));
        }
        if self.string_change < 0.0 {
            return Err(WeightsError::Negative("string_change"));
        }
        if self.open_string_bonus < 0.0 {
            return Err(WeightsError::Negative("open_string_bonus"));
        }
        if self.anatomical_penalty <= 0.0 {
            return Err(WeightsError::NotPositive("anatomical_penalty"));
        }
        if self.step_floor <= 0.0 {
            return Err(WeightsError::NotPositive("step_floor"));
        }
        if self.max_fret_span == 0 {
            return Err(WeightsError::ZeroSpan);
        }
        Ok(())
    }
}

/// Malformed weights are the one fatal configuration error in the system;
/// everything downstream assumes a validated model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightsError {
    NotFinite(&'static str),
    NotPositive(&'static str),
    Negative(&'static str),
    ZeroSpan,
}

impl fmt::Display for WeightsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeightsError::NotFinite(field) => write!(f, "cost weight '{field}' is not finite"),
            WeightsError::NotPositive(field) => {
                write!(f, "cost weight '{field}' must be strictly positive")
            }
            WeightsError::Negative(field) => {
                write!(f, "cost weight '{field}' must not be negative")
            }
            WeightsError::ZeroSpan => f.write_str("max_fret_span must be at least 1"),
        }
    }
}

impl std::error::Error for WeightsError {}

/// Ergonomic effort of moving the fretting hand between two coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CostModel {
    weights: CostWeights,
}

impl CostModel {
    pub fn new(weights: CostWeights) -> Result<Self, WeightsError> {
        weights.validate()?;
        Ok(Self { weights })
    }

    pub fn standard() -> Self {
        Self {
            weights: CostWeights::default(),
        }
    }

    pub const fn weights(&self) -> CostWeights {
        self.weights
    }

    /// Minimum value `step_cost` can return.
    pub const fn step_floor(&self) -> f64 {
        self.weights.step_floor
    }

    /// Whether the fretting hand can span the transition without
    /// repositioning. An open-string endpoint always qualifies: the hand is
    /// free to reorient while no fret is held.
    pub fn is_feasible(&self, from: Coordinate, to: Coordinate) -> bool {
        if from.is_open() || to.is_open() {
            return true;
        }
        from.fret_distance(to) <= self.weights.max_fret_span
    }

    /// Weighted movement cost of one transition, clamped to the floor.
    ///
    /// Infeasible transitions take the anatomical penalty instead of the
    /// open-string bonus: strained but never forbidden, so a riff with no
    /// comfortable fingering still solves.
    pub fn step_cost(&self, from: Coordinate, to: Coordinate) -> f64 {
        let w = self.weights;
        let mut cost = f64::from(from.fret_distance(to)) * w.fret_stretch
            + f64::from(from.string_distance(to)) * w.string_change;

        if !self.is_feasible(from, to) {
            cost += w.anatomical_penalty;
        } else if to.is_open() {
            cost -= w.open_string_bonus;
        }

        cost.max(w.step_floor)
    }
}
