use fret_core::cost::CostModel;
use fret_core::map::PositionMapper;
use fret_core::model::coordinate::Coordinate;
use fret_core::model::pitch::Pitch;
use fret_core::model::tuning::Tuning;
use fret_solver::{FingerState, FingeringProblem, SearchProblem};

/// Tiny two-string instrument: small enough to enumerate every state and
/// compute the true minimal remaining cost by a backward sweep.
fn tiny_mapper() -> PositionMapper {
    let tuning = Tuning::new(vec![Pitch::from_midi(52), Pitch::from_midi(47)]);
    PositionMapper::new(tuning, 5)
}

/// Exact cost-to-goal for every candidate of every layer, computed
/// backwards from the final layer.
fn true_remaining(layers: &[Vec<Coordinate>], model: &CostModel) -> Vec<Vec<f64>> {
    let mut remaining: Vec<Vec<f64>> = vec![Vec::new(); layers.len()];
    if let Some(last) = layers.len().checked_sub(1) {
        remaining[last] = vec![0.0; layers[last].len()];
        for i in (0..last).rev() {
            remaining[i] = layers[i]
                .iter()
                .map(|&from| {
                    layers[i + 1]
                        .iter()
                        .zip(&remaining[i + 1])
                        .map(|(&to, &rest)| model.step_cost(from, to) + rest)
                        .fold(f64::INFINITY, f64::min)
                })
                .collect();
        }
    }
    remaining
}

#[test]
fn heuristic_never_overestimates_any_state() {
    let mapper = tiny_mapper();
    let model = CostModel::standard();
    // Pitches 47..=57 are all reachable on the tiny instrument.
    let riffs: Vec<Vec<Pitch>> = vec![
        (47..=51).map(Pitch::from_midi).collect(),
        vec![52, 47, 57, 48].into_iter().map(Pitch::from_midi).collect(),
        vec![50].into_iter().map(Pitch::from_midi).collect(),
        vec![47, 57, 47, 57, 47].into_iter().map(Pitch::from_midi).collect(),
    ];

    for riff in riffs {
        let layers: Vec<Vec<Coordinate>> =
            riff.iter().map(|&p| mapper.candidates(p)).collect();
        assert!(layers.iter().all(|layer| !layer.is_empty()));

        let problem = FingeringProblem::new(&layers, &model);
        let remaining = true_remaining(&layers, &model);

        // Sentinel: entry into the first layer is free.
        let start_truth = layers
            .first()
            .map(|layer| {
                layer
                    .iter()
                    .enumerate()
                    .map(|(idx, _)| remaining[0][idx])
                    .fold(f64::INFINITY, f64::min)
            })
            .unwrap_or(0.0);
        assert!(
            problem.heuristic(FingerState::Start) <= start_truth + 1e-9,
            "start heuristic overestimates: h={} truth={start_truth}",
            problem.heuristic(FingerState::Start)
        );

        for (note, layer) in layers.iter().enumerate() {
            for (idx, &position) in layer.iter().enumerate() {
                let state = FingerState::At {
                    position,
                    note: note as u16,
                };
                let h = problem.heuristic(state);
                let truth = remaining[note][idx];
                assert!(
                    h <= truth + 1e-9,
                    "h({state:?})={h} exceeds true remaining {truth}"
                );
            }
        }
    }
}

#[test]
fn every_step_cost_respects_the_floor() {
    let mapper = tiny_mapper();
    let model = CostModel::standard();
    let board = mapper.board();
    for s1 in 1..=board.num_strings() {
        for f1 in 0..=board.num_frets() {
            for s2 in 1..=board.num_strings() {
                for f2 in 0..=board.num_frets() {
                    let cost =
                        model.step_cost(Coordinate::new(s1, f1), Coordinate::new(s2, f2));
                    assert!(cost >= model.step_floor());
                }
            }
        }
    }
}
