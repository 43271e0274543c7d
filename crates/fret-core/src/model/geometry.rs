use crate::model::coordinate::Coordinate;
use serde::{Deserialize, Serialize};

/// Physical dimensions of the instrument: the bounds every solution
/// coordinate must satisfy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fretboard {
    strings: u8,
    frets: u8,
}

impl Fretboard {
    pub const STANDARD_STRINGS: u8 = 6;
    pub const STANDARD_FRETS: u8 = 22;

    pub const fn new(strings: u8, frets: u8) -> Self {
        Self { strings, frets }
    }

    pub const fn standard() -> Self {
        Self::new(Self::STANDARD_STRINGS, Self::STANDARD_FRETS)
    }

    pub const fn num_strings(self) -> u8 {
        self.strings
    }

    pub const fn num_frets(self) -> u8 {
        self.frets
    }

    pub const fn contains(self, position: Coordinate) -> bool {
        position.string >= 1 && position.string <= self.strings && position.fret <= self.frets
    }
}
