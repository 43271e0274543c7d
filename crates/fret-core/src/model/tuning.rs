use crate::model::pitch::Pitch;
use serde::{Deserialize, Serialize};

/// Open-string pitches, indexed by string number (string 1 first).
///
/// Built once per run and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    open_pitches: Vec<Pitch>,
}

impl Tuning {
    pub fn new(open_pitches: Vec<Pitch>) -> Self {
        Self { open_pitches }
    }

    /// Standard guitar tuning E4 B3 G3 D3 A2 E2, high string first.
    pub fn standard_guitar() -> Self {
        Self::new(
            [64, 59, 55, 50, 45, 40]
                .into_iter()
                .map(Pitch::from_midi)
                .collect(),
        )
    }

    pub fn num_strings(&self) -> u8 {
        self.open_pitches.len() as u8
    }

    /// Open pitch of a 1-based string number.
    pub fn open_pitch(&self, string: u8) -> Option<Pitch> {
        if string == 0 {
            return None;
        }
        self.open_pitches.get(usize::from(string) - 1).copied()
    }

    /// Iterates `(string_number, open_pitch)` pairs from string 1 down.
    pub fn strings(&self) -> impl Iterator<Item = (u8, Pitch)> + '_ {
        self.open_pitches
            .iter()
            .enumerate()
            .map(|(idx, &pitch)| (idx as u8 + 1, pitch))
    }
}
