use fret_core::model::coordinate::Coordinate;
use fret_solver::Solution;
use serde::Serialize;
use std::fmt::Write;

/// Serializable view of one solve, consumed as-is by `--json` or rendered
/// as text. Never feeds back into the solver.
#[derive(Debug, Clone, Serialize)]
pub struct SolveReport {
    pub engine: String,
    pub riff: Vec<String>,
    pub path: Vec<Coordinate>,
    pub analysis: AnalysisReport,
    pub skipped: Vec<SkipReport>,
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct AnalysisReport {
    pub stretch: f64,
    pub string: f64,
    pub penalty_count: usize,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkipReport {
    pub index: usize,
    pub name: String,
    pub reason: String,
}

impl SolveReport {
    pub fn new(engine: &str, riff: &[String], solution: &Solution) -> Self {
        Self {
            engine: engine.to_string(),
            riff: riff.to_vec(),
            path: solution.path.clone(),
            analysis: AnalysisReport {
                stretch: solution.analysis.stretch,
                string: solution.analysis.string,
                penalty_count: solution.analysis.penalty_count,
                total: solution.analysis.total,
            },
            skipped: solution
                .skipped
                .iter()
                .map(|skip| SkipReport {
                    index: skip.index,
                    name: skip.name.clone(),
                    reason: skip.reason.to_string(),
                })
                .collect(),
            complete: !solution.has_gaps(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "engine: {}", self.engine);

        let mut positions = self.path.iter();
        for (index, name) in self.riff.iter().enumerate() {
            if let Some(skip) = self.skipped.iter().find(|s| s.index == index) {
                let _ = writeln!(out, "  {index:>3}. {name:<4} skipped ({})", skip.reason);
            } else if let Some(position) = positions.next() {
                let _ = writeln!(
                    out,
                    "  {index:>3}. {name:<4} string {} fret {}",
                    position.string, position.fret
                );
            }
        }

        if self.path.is_empty() && !self.riff.is_empty() {
            let _ = writeln!(out, "  (no playable path)");
        }
        let _ = writeln!(
            out,
            "stretch {:.2}  string {:.2}  penalties {}  total {:.2}",
            self.analysis.stretch,
            self.analysis.string,
            self.analysis.penalty_count,
            self.analysis.total
        );
        if !self.complete {
            let _ = writeln!(
                out,
                "warning: path covers {} of {} notes",
                self.path.len(),
                self.riff.len()
            );
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::SolveReport;
    use fret_solver::FingeringSolver;

    fn riff(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn text_report_lists_positions_and_totals() {
        let solver = FingeringSolver::standard();
        let riff = riff(&["E2", "G2", "B2"]);
        let report = SolveReport::new("astar", &riff, &solver.solve(&riff));
        let text = report.render_text();
        assert!(text.contains("string 6 fret 0"));
        assert!(text.contains("total 6.00"));
        assert!(!text.contains("warning"));
    }

    #[test]
    fn skipped_notes_are_called_out() {
        let solver = FingeringSolver::standard();
        let riff = riff(&["E2", "junk", "G2"]);
        let report = SolveReport::new("astar", &riff, &solver.solve(&riff));
        assert!(!report.complete);
        let text = report.render_text();
        assert!(text.contains("skipped"));
        assert!(text.contains("warning: path covers 2 of 3 notes"));
    }

    #[test]
    fn json_round_trips_through_serde() {
        let solver = FingeringSolver::standard();
        let riff = riff(&["E2"]);
        let report = SolveReport::new("dp", &riff, &solver.solve_exact(&riff));
        let json = report.to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["engine"], "dp");
        assert_eq!(value["path"][0]["string"], 6);
        assert_eq!(value["complete"], true);
    }
}
