use crate::astar::SearchProblem;
use fret_core::cost::CostModel;
use fret_core::model::coordinate::Coordinate;

/// Progress marker of the sequencing problem: either the pre-riff sentinel
/// or a placed note. `note` indexes the candidate layer the hand sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FingerState {
    Start,
    At { position: Coordinate, note: u16 },
}

impl FingerState {
    pub const fn position(self) -> Option<Coordinate> {
        match self {
            FingerState::Start => None,
            FingerState::At { position, .. } => Some(position),
        }
    }
}

/// The ordered-note placement task over precomputed candidate layers.
///
/// Candidate generation is not filtered by feasibility: awkward transitions
/// are penalized by the cost model, never pruned, so the same policy drives
/// both this searcher and the exact optimizer it is checked against.
#[derive(Debug, Clone, Copy)]
pub struct FingeringProblem<'a> {
    layers: &'a [Vec<Coordinate>],
    model: &'a CostModel,
}

impl<'a> FingeringProblem<'a> {
    pub fn new(layers: &'a [Vec<Coordinate>], model: &'a CostModel) -> Self {
        Self { layers, model }
    }

    fn next_layer(&self, state: FingerState) -> Option<usize> {
        let next = match state {
            FingerState::Start => 0,
            FingerState::At { note, .. } => usize::from(note) + 1,
        };
        (next < self.layers.len()).then_some(next)
    }
}

impl SearchProblem for FingeringProblem<'_> {
    type State = FingerState;

    fn start(&self) -> FingerState {
        FingerState::Start
    }

    fn is_goal(&self, state: FingerState) -> bool {
        match state {
            FingerState::Start => self.layers.is_empty(),
            FingerState::At { note, .. } => usize::from(note) + 1 == self.layers.len(),
        }
    }

    fn expand(&self, state: FingerState, out: &mut Vec<FingerState>) {
        let Some(next) = self.next_layer(state) else {
            return;
        };
        for &position in &self.layers[next] {
            out.push(FingerState::At {
                position,
                note: next as u16,
            });
        }
    }

    fn step_cost(&self, from: FingerState, to: FingerState) -> f64 {
        match (from.position(), to.position()) {
            // Entering the first note costs nothing; the hand starts
            // wherever that note is.
            (None, _) => 0.0,
            (Some(a), Some(b)) => self.model.step_cost(a, b),
            (Some(_), None) => 0.0,
        }
    }

    fn heuristic(&self, state: FingerState) -> f64 {
        // Every remaining transition costs at least the floor, except the
        // free entry edge out of the sentinel. Charging that edge too would
        // overestimate and break admissibility.
        let charged = match state {
            FingerState::Start => self.layers.len().saturating_sub(1),
            FingerState::At { note, .. } => self.layers.len() - 1 - usize::from(note),
        };
        charged as f64 * self.model.step_floor()
    }
}
