use fret_core::cost::CostModel;
use fret_core::model::coordinate::Coordinate;

/// Globally optimal path over the candidate layers plus its total cost as
/// accumulated by the recurrence (entry into the first layer is free).
#[derive(Debug, Clone, PartialEq)]
pub struct DpSolution {
    pub path: Vec<Coordinate>,
    pub total: f64,
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    cost: f64,
    prev: Option<usize>,
}

/// Layered dynamic program over per-note candidate sets.
///
/// Equivalent to the A* engine restricted to this DAG; the two are held to
/// the same total cost by the equivalence tests.
#[derive(Debug, Clone, Copy)]
pub struct ExactSequenceOptimizer<'a> {
    model: &'a CostModel,
}

impl<'a> ExactSequenceOptimizer<'a> {
    pub fn new(model: &'a CostModel) -> Self {
        Self { model }
    }

    /// `None` when some layer is empty (the chain of notes dead-ends).
    pub fn solve(&self, layers: &[Vec<Coordinate>]) -> Option<DpSolution> {
        if layers.is_empty() {
            return Some(DpSolution {
                path: Vec::new(),
                total: 0.0,
            });
        }
        if layers.iter().any(Vec::is_empty) {
            return None;
        }

        let mut table: Vec<Vec<Cell>> = Vec::with_capacity(layers.len());
        table.push(
            layers[0]
                .iter()
                .map(|_| Cell {
                    cost: 0.0,
                    prev: None,
                })
                .collect(),
        );

        for i in 1..layers.len() {
            let mut row = Vec::with_capacity(layers[i].len());
            for &current in &layers[i] {
                let mut best = Cell {
                    cost: f64::INFINITY,
                    prev: None,
                };
                for (j, &previous) in layers[i - 1].iter().enumerate() {
                    let cost = table[i - 1][j].cost + self.model.step_cost(previous, current);
                    if cost < best.cost {
                        best = Cell {
                            cost,
                            prev: Some(j),
                        };
                    }
                }
                row.push(best);
            }
            table.push(row);
        }

        let last = table.last()?;
        let (mut index, goal) = last
            .iter()
            .enumerate()
            .min_by(|(_, a), (_, b)| a.cost.total_cmp(&b.cost))?;
        let total = goal.cost;

        let mut path = Vec::with_capacity(layers.len());
        for i in (0..layers.len()).rev() {
            path.push(layers[i][index]);
            if let Some(prev) = table[i][index].prev {
                index = prev;
            }
        }
        path.reverse();

        Some(DpSolution { path, total })
    }
}
