use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{Error, Result};
use crate::pitch::PitchProgression;
use crate::scale::Scale;

/// A physical string, named after the pitch it sounds when played open.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InstrumentString {
    name: String,
}

impl InstrumentString {
    pub fn new(name: &str) -> Self {
        InstrumentString {
            name: name.to_owned(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn open_pitch(&self) -> &str {
        &self.name
    }

    /// Pitch sounded at `fret`.
    pub fn pitch_at(&self, fret: u32) -> &str {
        PitchProgression::standard().advance_by(self.open_pitch(), fret)
    }

    /// Frets `0..max_fret` whose pitch belongs to `scale`, lowest first.
    pub fn frets_in_scale(&self, scale: &Scale, max_fret: u32) -> Vec<u32> {
        let table = PitchProgression::standard();
        let mut frets = Vec::new();
        let mut pitch = self.open_pitch();

        for fret in 0..max_fret {
            if table.matches(pitch, scale.pitches()) {
                frets.push(fret);
            }
            pitch = table.advance(pitch);
        }

        frets
    }

    /// First fret below `search_limit` that sounds `target`.
    pub fn index_of_pitch(&self, target: &str, search_limit: u32) -> Option<u32> {
        let table = PitchProgression::standard();
        let mut pitch = self.open_pitch();

        for fret in 0..search_limit {
            if table.equivalent(pitch, target) {
                return Some(fret);
            }
            pitch = table.advance(pitch);
        }

        None
    }
}

/// An ordered set of strings, lowest pitch first.
///
/// String names are expected to be unique. Duplicates are accepted, but
/// name lookups only ever find the first of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instrument {
    strings: Vec<InstrumentString>,
}

impl Instrument {
    pub fn new<S: AsRef<str>>(names: &[S]) -> Self {
        Instrument {
            strings: names
                .iter()
                .map(|name| InstrumentString::new(name.as_ref()))
                .collect(),
        }
    }

    /// Standard six-string tuning.
    pub fn guitar() -> Self {
        Instrument::new(&["E", "A", "D", "G", "B", "e"])
    }

    /// Standard re-entrant gCEA tuning.
    pub fn ukulele() -> Self {
        Instrument::new(&["G", "C", "E", "A"])
    }

    pub fn strings(&self) -> &[InstrumentString] {
        &self.strings
    }

    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Position of the string called `name`.
    pub fn position(&self, name: &str) -> Result<usize> {
        self.strings
            .iter()
            .position(|string| string.name == name)
            .ok_or_else(|| Error::StringNotFound {
                name: name.to_owned(),
                instrument: self.to_string(),
            })
    }

    pub fn get_string(&self, name: &str) -> Result<&InstrumentString> {
        self.position(name).map(|index| &self.strings[index])
    }
}

impl Display for Instrument {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let names = self
            .strings
            .iter()
            .map(InstrumentString::name)
            .collect::<Vec<_>>();

        write!(f, "{}", names.join(" "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstrumentKind {
    Guitar,
    Ukulele,
}

impl InstrumentKind {
    pub fn build(self) -> Instrument {
        match self {
            InstrumentKind::Guitar => Instrument::guitar(),
            InstrumentKind::Ukulele => Instrument::ukulele(),
        }
    }
}

impl Default for InstrumentKind {
    fn default() -> Self {
        InstrumentKind::Guitar
    }
}

impl FromStr for InstrumentKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name.to_ascii_lowercase().as_str() {
            "guitar" => Ok(InstrumentKind::Guitar),
            "ukulele" | "uke" => Ok(InstrumentKind::Ukulele),
            _ => Err(Error::UnknownInstrument {
                name: name.to_owned(),
            }),
        }
    }
}
