use core::fmt;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Semitone identity of a note in MIDI numbering (A4 = 69, C4 = 60).
///
/// Signed because candidate mapping subtracts open-string pitches and the
/// intermediate difference may go below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pitch(i16);

impl Pitch {
    pub const A4: Pitch = Pitch(69);

    pub const fn from_midi(value: i16) -> Self {
        Pitch(value)
    }

    pub const fn midi(self) -> i16 {
        self.0
    }

    /// Equal-tempered frequency with the 440 Hz reference.
    pub fn frequency_hz(self) -> f64 {
        440.0 * 2f64.powf(f64::from(self.0 - Self::A4.0) / 12.0)
    }

    /// Parses a scientific pitch name such as `E2`, `G#3` or `Bb4`.
    ///
    /// Returns `None` on malformed input; callers in the fingering pipeline
    /// skip the note rather than abort the riff.
    pub fn parse(name: &str) -> Option<Self> {
        name.parse().ok()
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const NAMES: [&str; 12] = [
            "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
        ];
        let midi = i32::from(self.0);
        let octave = midi.div_euclid(12) - 1;
        let name = NAMES[midi.rem_euclid(12) as usize];
        write!(f, "{name}{octave}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PitchParseError {
    input: String,
}

impl fmt::Display for PitchParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid pitch name '{}'", self.input)
    }
}

impl std::error::Error for PitchParseError {}

impl FromStr for Pitch {
    type Err = PitchParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_name(s.trim()).ok_or_else(|| PitchParseError {
            input: s.to_string(),
        })
    }
}

fn parse_name(name: &str) -> Option<Pitch> {
    let mut chars = name.chars();
    let letter = chars.next()?;
    let base = match letter.to_ascii_uppercase() {
        'C' => 0i16,
        'D' => 2,
        'E' => 4,
        'F' => 5,
        'G' => 7,
        'A' => 9,
        'B' => 11,
        _ => return None,
    };

    let rest = chars.as_str();
    let accidental_len = rest
        .chars()
        .take_while(|&c| c == '#' || c == 'b')
        .count();
    let mut offset = 0i16;
    for c in rest[..accidental_len].chars() {
        offset += if c == '#' { 1 } else { -1 };
    }

    let octave: i16 = rest[accidental_len..].parse().ok()?;
    // Scientific pitch notation: C4 = 60, so C of octave n sits at (n + 1) * 12.
    Some(Pitch::from_midi((octave + 1) * 12 + base + offset))
}

#[cfg(test)]
mod tests {
    use super::Pitch;

    #[test]
    fn parses_naturals() {
        assert_eq!(Pitch::parse("A4"), Some(Pitch::from_midi(69)));
        assert_eq!(Pitch::parse("C4"), Some(Pitch::from_midi(60)));
        assert_eq!(Pitch::parse("E2"), Some(Pitch::from_midi(40)));
        assert_eq!(Pitch::parse("B3"), Some(Pitch::from_midi(59)));
    }

    #[test]
    fn parses_accidentals() {
        assert_eq!(Pitch::parse("G#3"), Some(Pitch::from_midi(56)));
        assert_eq!(Pitch::parse("Bb2"), Some(Pitch::from_midi(46)));
        assert_eq!(Pitch::parse("F##2"), Some(Pitch::from_midi(43)));
    }

    #[test]
    fn parses_low_octaves_and_whitespace() {
        assert_eq!(Pitch::parse("C-1"), Some(Pitch::from_midi(0)));
        assert_eq!(Pitch::parse(" e2 "), Some(Pitch::from_midi(40)));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Pitch::parse(""), None);
        assert_eq!(Pitch::parse("H2"), None);
        assert_eq!(Pitch::parse("C"), None);
        assert_eq!(Pitch::parse("C#x"), None);
        assert!("nope".parse::<Pitch>().is_err());
    }

    #[test]
    fn reference_frequency() {
        assert!((Pitch::A4.frequency_hz() - 440.0).abs() < 1e-9);
        let e2 = Pitch::parse("E2").unwrap();
        assert!((e2.frequency_hz() - 82.4069).abs() < 1e-3);
    }

    #[test]
    fn displays_with_sharps() {
        assert_eq!(Pitch::from_midi(69).to_string(), "A4");
        assert_eq!(Pitch::from_midi(46).to_string(), "A#2");
        assert_eq!(Pitch::from_midi(40).to_string(), "E2");
    }
}
