use std::collections::BTreeMap;

use crate::error::Result;
use crate::instrument::Instrument;

/// Frets held down at one instant, keyed by string position on the
/// instrument. Strings without an entry are not played.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Chord {
    positions: BTreeMap<usize, u32>,
}

impl Chord {
    /// Builds a chord from string names, e.g. `[("B", 1), ("D", 2)]`.
    pub fn new(instrument: &Instrument, frets: &[(&str, u32)]) -> Result<Self> {
        let mut positions = BTreeMap::new();

        for &(name, fret) in frets {
            positions.insert(instrument.position(name)?, fret);
        }

        Ok(Chord { positions })
    }

    /// A rest: nothing played on any string.
    pub fn blank() -> Self {
        Chord::default()
    }

    /// A single note on the string at `string`.
    pub fn single(string: usize, fret: u32) -> Self {
        let mut positions = BTreeMap::new();
        positions.insert(string, fret);
        Chord { positions }
    }

    pub(crate) fn from_positions(positions: BTreeMap<usize, u32>) -> Self {
        Chord { positions }
    }

    pub fn fret(&self, string: usize) -> Option<u32> {
        self.positions.get(&string).copied()
    }

    pub fn is_blank(&self) -> bool {
        self.positions.is_empty()
    }

    /// Played strings with their frets, lowest string first.
    pub fn positions(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.positions.iter().map(|(&string, &fret)| (string, fret))
    }
}
