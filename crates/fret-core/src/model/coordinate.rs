use core::fmt;
use serde::{Deserialize, Serialize};

/// A playing position on the fretboard: string 1 is the highest-pitched
/// string, fret 0 is the open string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coordinate {
    pub string: u8,
    pub fret: u8,
}

impl Coordinate {
    pub const fn new(string: u8, fret: u8) -> Self {
        Self { string, fret }
    }

    pub const fn is_open(self) -> bool {
        self.fret == 0
    }

    pub const fn fret_distance(self, other: Self) -> u8 {
        self.fret.abs_diff(other.fret)
    }

    pub const fn string_distance(self, other: Self) -> u8 {
        self.string.abs_diff(other.string)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.string, self.fret)
    }
}

#[cfg(test)]
mod tests {
    use super::Coordinate;

    #[test]
    fn open_string_detected() {
        assert!(Coordinate::new(6, 0).is_open());
        assert!(!Coordinate::new(6, 3).is_open());
    }

    #[test]
    fn distances_are_absolute() {
        let a = Coordinate::new(2, 7);
        let b = Coordinate::new(5, 3);
        assert_eq!(a.fret_distance(b), 4);
        assert_eq!(b.fret_distance(a), 4);
        assert_eq!(a.string_distance(b), 3);
    }

    #[test]
    fn equality_is_fieldwise() {
        assert_eq!(Coordinate::new(3, 5), Coordinate::new(3, 5));
        assert_ne!(Coordinate::new(3, 5), Coordinate::new(5, 3));
    }

    #[test]
    fn displays_string_slash_fret() {
        assert_eq!(Coordinate::new(6, 0).to_string(), "6/0");
    }
}
