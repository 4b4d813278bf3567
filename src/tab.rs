use crate::chord::Chord;
use crate::error::{Error, Result};
use crate::instrument::Instrument;
use crate::layout::TabSection;

/// Chords displayed together between two bar lines.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Measure {
    chords: Vec<Chord>,
}

impl Measure {
    pub fn new() -> Self {
        Measure::default()
    }

    pub fn add_chord(&mut self, chord: Chord) {
        self.chords.push(chord);
    }

    pub fn chords(&self) -> &[Chord] {
        &self.chords
    }

    pub fn len(&self) -> usize {
        self.chords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chords.is_empty()
    }
}

impl From<Vec<Chord>> for Measure {
    fn from(chords: Vec<Chord>) -> Self {
        Measure { chords }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Start every line with the string's name.
    pub labels: bool,
}

/// Measures for a single instrument.
///
/// Chords address strings by position, so they should be built against the
/// same instrument the tab holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    instrument: Instrument,
    measures: Vec<Measure>,
}

impl Tab {
    pub fn new(instrument: Instrument) -> Self {
        Tab {
            instrument,
            measures: Vec::new(),
        }
    }

    pub fn add_measure(&mut self, measure: Measure) {
        self.measures.push(measure);
    }

    pub fn instrument(&self) -> &Instrument {
        &self.instrument
    }

    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// Lays the tab out as one line per string, highest string on top.
    ///
    /// Fails with `EmptyTab` when there are no measures or the first measure
    /// has no chords. Later empty measures are skipped.
    pub fn render(&self, options: &RenderOptions) -> Result<Vec<String>> {
        match self.measures.first() {
            Some(first) if !first.is_empty() => {}
            _ => return Err(Error::EmptyTab),
        }

        let mut section = TabSection::new(self.instrument.strings());

        if options.labels {
            section.add_labels();
        }
        section.add_bar_line();

        for measure in self.measures.iter().filter(|measure| !measure.is_empty()) {
            section.add_chords(measure.chords());
            section.add_bar_line();
        }

        Ok(section.into_lines())
    }

    /// Rendered lines joined with newlines, ending in a newline.
    pub fn to_text(&self, options: &RenderOptions) -> Result<String> {
        let mut text = self.render(options)?.join("\n");
        text.push('\n');
        Ok(text)
    }
}
