//! Column-by-column construction of tablature text.

use crate::chord::Chord;
use crate::instrument::InstrumentString;

pub const REST: &str = "-";
pub const BAR_LINE: &str = "|";

/// One display-token sequence per string, built left to right and consumed
/// once by `into_lines`.
#[derive(Debug)]
pub struct TabSection<'a> {
    strings: &'a [InstrumentString],
    sequences: Vec<Vec<String>>,
}

impl<'a> TabSection<'a> {
    pub fn new(strings: &'a [InstrumentString]) -> Self {
        TabSection {
            strings,
            sequences: vec![Vec::new(); strings.len()],
        }
    }

    /// String names, padded to a common width.
    pub fn add_labels(&mut self) {
        let width = self
            .strings
            .iter()
            .map(|string| string.name().chars().count())
            .max()
            .unwrap_or(0);

        for (string, sequence) in self.strings.iter().zip(&mut self.sequences) {
            sequence.push(format!("{:<width$}", string.name(), width = width));
        }
    }

    pub fn add_bar_line(&mut self) {
        for sequence in &mut self.sequences {
            sequence.push(BAR_LINE.to_owned());
        }
    }

    /// One column: the fret on every played string, a rest on the others.
    pub fn add_column(&mut self, chord: &Chord) {
        for (index, sequence) in self.sequences.iter_mut().enumerate() {
            let token = match chord.fret(index) {
                Some(fret) => fret.to_string(),
                None => REST.to_owned(),
            };
            sequence.push(token);
        }
    }

    /// Each chord gets a blank column on either side.
    pub fn add_chords(&mut self, chords: &[Chord]) {
        let blank = Chord::blank();

        for chord in chords {
            self.add_column(&blank);
            self.add_column(chord);
            self.add_column(&blank);
        }
    }

    /// Raw tokens for the string at `index`, in the order they were added.
    pub fn tokens(&self, index: usize) -> &[String] {
        &self.sequences[index]
    }

    /// One line per string, highest string first so the lowest string ends
    /// up at the bottom.
    pub fn into_lines(self) -> Vec<String> {
        self.sequences
            .into_iter()
            .rev()
            .map(|sequence| sequence.concat())
            .collect()
    }
}
