use crate::astar::{SearchLimits, best_first_search};
use crate::dp::ExactSequenceOptimizer;
use crate::problem::{FingerState, FingeringProblem};
use crate::summary::{Analysis, summarize};
use core::fmt;
use fret_core::cost::CostModel;
use fret_core::map::PositionMapper;
use fret_core::model::coordinate::Coordinate;
use tracing::warn;

/// Why a riff note contributed no candidate layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The note name did not parse.
    Unparseable,
    /// The pitch fits no string within the fret range.
    OutOfRange,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unparseable => f.write_str("unparseable note name"),
            SkipReason::OutOfRange => f.write_str("not reachable on this instrument"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedNote {
    pub index: usize,
    pub name: String,
    pub reason: SkipReason,
}

/// Result of one solve call. Read-only snapshot for presentation layers.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    pub path: Vec<Coordinate>,
    pub analysis: Analysis,
    pub skipped: Vec<SkippedNote>,
    /// Length of the input riff; compare with `path.len()` for gaps.
    pub note_count: usize,
}

impl Solution {
    /// True when the path covers fewer positions than the riff had notes,
    /// either through skipped notes or an unsolvable search.
    pub fn has_gaps(&self) -> bool {
        self.path.len() != self.note_count
    }

    fn empty(note_count: usize, skipped: Vec<SkippedNote>) -> Self {
        Self {
            path: Vec::new(),
            analysis: Analysis::default(),
            skipped,
            note_count,
        }
    }
}

/// The solving pipeline: note names → candidate layers → optimal path →
/// effort metrics. Never fails for musical input; bad notes are dropped
/// and recorded, and an unsolvable riff yields an empty path.
#[derive(Debug, Clone)]
pub struct FingeringSolver {
    mapper: PositionMapper,
    model: CostModel,
    limits: SearchLimits,
}

impl FingeringSolver {
    pub fn new(mapper: PositionMapper, model: CostModel) -> Self {
        Self {
            mapper,
            model,
            limits: SearchLimits::default(),
        }
    }

    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn standard() -> Self {
        Self::new(PositionMapper::standard(), CostModel::standard())
    }

    pub fn mapper(&self) -> &PositionMapper {
        &self.mapper
    }

    pub fn model(&self) -> &CostModel {
        &self.model
    }

    /// Solves with the A* engine.
    pub fn solve<S: AsRef<str>>(&self, riff: &[S]) -> Solution {
        let (layers, skipped) = self.layers(riff);
        if layers.is_empty() {
            return Solution::empty(riff.len(), skipped);
        }

        let problem = FingeringProblem::new(&layers, &self.model);
        let Some(outcome) = best_first_search(&problem, self.limits) else {
            warn!(notes = riff.len(), "no fingering path found");
            return Solution::empty(riff.len(), skipped);
        };

        let path: Vec<Coordinate> = outcome
            .states
            .into_iter()
            .filter_map(FingerState::position)
            .collect();
        let analysis = summarize(&path, &self.model);
        Solution {
            path,
            analysis,
            skipped,
            note_count: riff.len(),
        }
    }

    /// Solves with the exact dynamic program. Same cost model, same skip
    /// policy; agrees with [`Self::solve`] on total cost by construction.
    pub fn solve_exact<S: AsRef<str>>(&self, riff: &[S]) -> Solution {
        let (layers, skipped) = self.layers(riff);
        if layers.is_empty() {
            return Solution::empty(riff.len(), skipped);
        }

        let Some(dp) = ExactSequenceOptimizer::new(&self.model).solve(&layers) else {
            warn!(notes = riff.len(), "no fingering path found");
            return Solution::empty(riff.len(), skipped);
        };

        let analysis = summarize(&dp.path, &self.model);
        Solution {
            path: dp.path,
            analysis,
            skipped,
            note_count: riff.len(),
        }
    }

    /// One candidate layer per playable note. Unparseable or unreachable
    /// notes are dropped here so every remaining layer is non-empty.
    fn layers<S: AsRef<str>>(&self, riff: &[S]) -> (Vec<Vec<Coordinate>>, Vec<SkippedNote>) {
        let mut layers = Vec::with_capacity(riff.len());
        let mut skipped = Vec::new();
        for (index, name) in riff.iter().enumerate() {
            let name = name.as_ref();
            match self.mapper.candidates_for_name(name) {
                None => {
                    warn!(index, name, "dropping unparseable note");
                    skipped.push(SkippedNote {
                        index,
                        name: name.to_string(),
                        reason: SkipReason::Unparseable,
                    });
                }
                Some(candidates) if candidates.is_empty() => {
                    warn!(index, name, "dropping out-of-range note");
                    skipped.push(SkippedNote {
                        index,
                        name: name.to_string(),
                        reason: SkipReason::OutOfRange,
                    });
                }
                Some(candidates) => layers.push(candidates),
            }
        }
        (layers, skipped)
    }
}

#[cfg(test)]
mod tests {
    use super::{FingeringSolver, SkipReason};
    use fret_core::model::coordinate::Coordinate;

    #[test]
    fn empty_riff_is_empty_solution() {
        let solver = FingeringSolver::standard();
        let solution = solver.solve::<&str>(&[]);
        assert!(solution.path.is_empty());
        assert_eq!(solution.analysis.total, 0.0);
        assert!(!solution.has_gaps());
    }

    #[test]
    fn unparseable_note_is_skipped_not_fatal() {
        let solver = FingeringSolver::standard();
        let solution = solver.solve(&["E2", "nonsense", "G2"]);
        assert_eq!(solution.path.len(), 2);
        assert!(solution.has_gaps());
        assert_eq!(solution.skipped.len(), 1);
        assert_eq!(solution.skipped[0].index, 1);
        assert_eq!(solution.skipped[0].reason, SkipReason::Unparseable);
    }

    #[test]
    fn out_of_range_note_is_skipped() {
        let solver = FingeringSolver::standard();
        let solution = solver.solve(&["C1"]);
        assert!(solution.path.is_empty());
        assert!(solution.has_gaps());
        assert_eq!(solution.skipped[0].reason, SkipReason::OutOfRange);
    }

    #[test]
    fn single_note_riff_costs_nothing() {
        let solver = FingeringSolver::standard();
        let solution = solver.solve(&["E2"]);
        assert_eq!(solution.path, vec![Coordinate::new(6, 0)]);
        assert_eq!(solution.analysis.total, 0.0);
        assert!(!solution.has_gaps());
    }

    #[test]
    fn solve_is_idempotent() {
        let solver = FingeringSolver::standard();
        let riff = ["E2", "G2", "B2", "E3", "G3"];
        let first = solver.solve(&riff);
        let second = solver.solve(&riff);
        assert_eq!(first, second);
    }
}
