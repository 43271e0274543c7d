use crate::model::coordinate::Coordinate;
use crate::model::geometry::Fretboard;
use crate::model::pitch::Pitch;
use crate::model::tuning::Tuning;

/// Maps pitches to the set of fretboard coordinates that produce them.
///
/// Pure function of the tuning and the fret count; carries no per-riff
/// state, so one mapper serves any number of solve calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionMapper {
    tuning: Tuning,
    board: Fretboard,
}

impl PositionMapper {
    pub fn new(tuning: Tuning, num_frets: u8) -> Self {
        let board = Fretboard::new(tuning.num_strings(), num_frets);
        Self { tuning, board }
    }

    pub fn standard() -> Self {
        Self::new(Tuning::standard_guitar(), Fretboard::STANDARD_FRETS)
    }

    pub fn board(&self) -> Fretboard {
        self.board
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Every coordinate on which `pitch` can be played. Empty when the
    /// pitch falls outside the instrument's range on every string.
    pub fn candidates(&self, pitch: Pitch) -> Vec<Coordinate> {
        let mut positions = Vec::new();
        for (string, open) in self.tuning.strings() {
            let fret = pitch.midi() - open.midi();
            if fret >= 0 && fret <= i16::from(self.board.num_frets()) {
                positions.push(Coordinate::new(string, fret as u8));
            }
        }
        positions
    }

    /// Name-based entry point. `None` means the name did not parse; the
    /// pipeline skips such notes instead of failing the riff.
    pub fn candidates_for_name(&self, name: &str) -> Option<Vec<Coordinate>> {
        Pitch::parse(name).map(|pitch| self.candidates(pitch))
    }

    /// The pitch sounded at a coordinate, or `None` off the board.
    pub fn pitch_at(&self, position: Coordinate) -> Option<Pitch> {
        if !self.board.contains(position) {
            return None;
        }
        let open = self.tuning.open_pitch(position.string)?;
        Some(Pitch::from_midi(open.midi() + i16::from(position.fret)))
    }
}
