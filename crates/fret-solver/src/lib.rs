#![deny(warnings)]
pub mod astar;
pub mod dp;
pub mod pipeline;
pub mod problem;
pub mod summary;

pub use astar::{SearchLimits, SearchOutcome, SearchProblem, best_first_search};
pub use dp::ExactSequenceOptimizer;
pub use pipeline::{FingeringSolver, SkipReason, SkippedNote, Solution};
pub use problem::{FingerState, FingeringProblem};
pub use summary::{Analysis, summarize};
