use crate::map::PositionMapper;
use crate::model::pitch::Pitch;
use crate::model::tuning::Tuning;
use serde::{Deserialize, Serialize};

/// Persistable instrument setup: open pitches as MIDI values plus the fret
/// count. Enough to rebuild the mapper for a later run.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstrumentSnapshot {
    pub open_midi: Vec<i16>,
    pub frets: u8,
}

impl InstrumentSnapshot {
    pub fn capture(mapper: &PositionMapper) -> Self {
        InstrumentSnapshot {
            open_midi: mapper
                .tuning()
                .strings()
                .map(|(_, pitch)| pitch.midi())
                .collect(),
            frets: mapper.board().num_frets(),
        }
    }

    pub fn restore(self) -> PositionMapper {
        let tuning = Tuning::new(self.open_midi.into_iter().map(Pitch::from_midi).collect());
        PositionMapper::new(tuning, self.frets)
    }

    pub fn to_json(mapper: &PositionMapper) -> serde_json::Result<String> {
        let snapshot = Self::capture(mapper);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::InstrumentSnapshot;
    use crate::map::PositionMapper;
    use crate::model::pitch::Pitch;

    #[test]
    fn snapshot_round_trips_the_standard_guitar() {
        let mapper = PositionMapper::standard();
        let json = InstrumentSnapshot::to_json(&mapper).unwrap();
        let restored = InstrumentSnapshot::from_json(&json).unwrap().restore();
        assert_eq!(restored, mapper);
    }

    #[test]
    fn restored_mapper_maps_identically() {
        let mapper = PositionMapper::standard();
        let snapshot = InstrumentSnapshot::capture(&mapper);
        let restored = snapshot.restore();
        let pitch = Pitch::parse("A3").unwrap();
        assert_eq!(restored.candidates(pitch), mapper.candidates(pitch));
    }
}
