//! Chromatic pitch names and semitone arithmetic.

use std::collections::HashMap;

/// Each pitch spelling paired with the pitch one semitone above it.
///
/// Flat spellings are aliases: `A#` and `Bb` both step up to `B`. Successors
/// are always spelled natural or sharp.
static PROGRESSION: [(&str, &str); 17] = [
    ("Ab", "A"),
    ("A", "A#"),
    ("A#", "B"),
    ("Bb", "B"),
    ("B", "C"),
    ("C", "C#"),
    ("C#", "D"),
    ("Db", "D"),
    ("D", "D#"),
    ("D#", "E"),
    ("Eb", "E"),
    ("E", "F"),
    ("F", "F#"),
    ("F#", "G"),
    ("Gb", "G"),
    ("G", "G#"),
    ("G#", "A"),
];

lazy_static! {
    static ref STANDARD: PitchProgression = PitchProgression::new(&PROGRESSION);
}

/// Read-only "one semitone up" table, keyed case-insensitively.
#[derive(Debug)]
pub struct PitchProgression {
    spellings: &'static [(&'static str, &'static str)],
    lookup: HashMap<String, usize>,
}

impl PitchProgression {
    pub fn new(spellings: &'static [(&'static str, &'static str)]) -> Self {
        let lookup = spellings
            .iter()
            .enumerate()
            .map(|(index, (pitch, _))| (pitch.to_ascii_lowercase(), index))
            .collect();

        PitchProgression { spellings, lookup }
    }

    /// The twelve-tone table shared by every scale and instrument.
    pub fn standard() -> &'static PitchProgression {
        &STANDARD
    }

    fn entry(&self, pitch: &str) -> Option<&(&'static str, &'static str)> {
        self.lookup
            .get(&pitch.to_ascii_lowercase())
            .map(|&index| &self.spellings[index])
    }

    /// The table's own spelling of `pitch`, e.g. `"bb"` gives `"Bb"`.
    pub fn spelling(&self, pitch: &str) -> Option<&'static str> {
        self.entry(pitch).map(|&(spelling, _)| spelling)
    }

    pub fn contains(&self, pitch: &str) -> bool {
        self.entry(pitch).is_some()
    }

    /// One semitone up from `pitch`.
    ///
    /// A pitch missing from the table is returned unchanged. Callers that need
    /// to reject bad input should check `contains` first.
    pub fn advance<'a>(&self, pitch: &'a str) -> &'a str {
        match self.entry(pitch) {
            Some(&(_, next)) => next,
            None => pitch,
        }
    }

    /// Steps up `semitones` times.
    pub fn advance_by<'a>(&self, pitch: &'a str, semitones: u32) -> &'a str {
        (0..semitones).fold(pitch, |pitch, _| self.advance(pitch))
    }

    /// Same name ignoring case, or two spellings of one semitone (`A#`/`Bb`).
    pub fn equivalent(&self, a: &str, b: &str) -> bool {
        if a.eq_ignore_ascii_case(b) {
            return true;
        }

        match (self.entry(a), self.entry(b)) {
            (Some(&(_, next_a)), Some(&(_, next_b))) => next_a == next_b,
            _ => false,
        }
    }

    pub fn matches<S: AsRef<str>>(&self, candidate: &str, pitches: &[S]) -> bool {
        pitches
            .iter()
            .any(|pitch| self.equivalent(pitch.as_ref(), candidate))
    }

    /// Every spelling the table knows, in a fixed order.
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.spellings.iter().map(|&(pitch, _)| pitch)
    }
}

/// Membership test against the standard table, ignoring case and spelling.
pub fn matches<S: AsRef<str>>(candidate: &str, pitches: &[S]) -> bool {
    PitchProgression::standard().matches(candidate, pitches)
}
