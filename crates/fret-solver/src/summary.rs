use fret_core::cost::CostModel;
use fret_core::model::coordinate::Coordinate;

/// Human-facing effort metrics for a solved path. Values are rounded to
/// two decimals for display; the solver's own totals stay raw.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Analysis {
    /// Cumulative weighted fret movement.
    pub stretch: f64,
    /// Cumulative weighted string movement.
    pub string: f64,
    /// Transitions taken beyond the reachable span.
    pub penalty_count: usize,
    /// Total cost exactly as the solver accumulated it.
    pub total: f64,
}

/// Recomputes per-transition metrics from the solved path.
///
/// Must use the same cost model the solver ran with; summarizing with
/// different weights would report effort the solver never optimized.
pub fn summarize(path: &[Coordinate], model: &CostModel) -> Analysis {
    let weights = model.weights();
    let mut analysis = Analysis::default();

    for pair in path.windows(2) {
        let (from, to) = (pair[0], pair[1]);
        analysis.stretch += f64::from(from.fret_distance(to)) * weights.fret_stretch;
        analysis.string += f64::from(from.string_distance(to)) * weights.string_change;
        if !model.is_feasible(from, to) {
            analysis.penalty_count += 1;
        }
        analysis.total += model.step_cost(from, to);
    }

    analysis.stretch = round2(analysis.stretch);
    analysis.string = round2(analysis.string);
    analysis.total = round2(analysis.total);
    analysis
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::{Analysis, summarize};
    use fret_core::cost::CostModel;
    use fret_core::model::coordinate::Coordinate;

    #[test]
    fn empty_and_single_paths_are_zeroed() {
        let model = CostModel::standard();
        assert_eq!(summarize(&[], &model), Analysis::default());
        assert_eq!(
            summarize(&[Coordinate::new(6, 0)], &model),
            Analysis::default()
        );
    }

    #[test]
    fn accumulates_components_separately() {
        let model = CostModel::standard();
        let path = [
            Coordinate::new(6, 0),
            Coordinate::new(6, 3),
            Coordinate::new(5, 2),
        ];
        let analysis = summarize(&path, &model);
        assert!((analysis.stretch - 4.0).abs() < 1e-12); // 3 + 1 frets
        assert!((analysis.string - 2.0).abs() < 1e-12); // one string crossed
        assert_eq!(analysis.penalty_count, 0);
        assert!((analysis.total - 6.0).abs() < 1e-12);
    }

    #[test]
    fn counts_anatomical_violations() {
        let model = CostModel::standard();
        let path = [Coordinate::new(1, 2), Coordinate::new(1, 12)];
        let analysis = summarize(&path, &model);
        assert_eq!(analysis.penalty_count, 1);
        assert!((analysis.total - 25.0).abs() < 1e-12); // 10 frets + 15 penalty
    }

    #[test]
    fn rounds_to_two_decimals() {
        let model = CostModel::standard();
        // Landing open: 1 fret minus the 0.5 bonus, clamped to the floor.
        let path = [Coordinate::new(3, 1), Coordinate::new(3, 0)];
        let analysis = summarize(&path, &model);
        assert_eq!(analysis.total, 1.0);
        assert_eq!(analysis.stretch, 1.0);
        assert_eq!(analysis.string, 0.0);
    }
}
