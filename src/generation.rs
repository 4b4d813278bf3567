//! Chord and tab generators.
//!
//! Randomized generators draw from whatever `Rng` they are handed, so a
//! seeded generator reproduces the same tab.

use std::collections::BTreeMap;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::chord::Chord;
use crate::instrument::Instrument;
use crate::scale::Scale;
use crate::tab::{Measure, Tab};

/// Frets a random chord may use: `0..RANDOM_FRETS`.
pub const RANDOM_FRETS: u32 = 4;

/// Highest fret considered when picking notes in a scale.
pub const SCALE_WINDOW: u32 = 4;

/// Chance a string sits out of a random chord.
pub const REST_CHANCE: f64 = 0.5;

/// Chance a string sits out of a random chord in a scale.
pub const SCALE_REST_CHANCE: f64 = 0.7;

/// Frets above the root covered by `scale_traversal`.
pub const DEFAULT_SPAN: u32 = 4;

/// Highest fret `scale_traversal` will reach, whatever the span.
pub const MAX_FRET: u32 = 24;

/// How far up the lowest string to look for the root before skipping it.
const LOWEST_ROOT_SEARCH: u32 = 6;

/// How far up every other string to look for the root.
const ROOT_SEARCH: u32 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomTabOptions {
    pub measures: usize,
    pub chords_per_measure: usize,
}

impl Default for RandomTabOptions {
    fn default() -> Self {
        RandomTabOptions {
            measures: 4,
            chords_per_measure: 4,
        }
    }
}

/// Any of the first few frets on about half the strings.
pub fn random_chord<R: Rng + ?Sized>(instrument: &Instrument, rng: &mut R) -> Chord {
    let mut positions = BTreeMap::new();

    for index in 0..instrument.len() {
        if rng.gen::<f64>() < REST_CHANCE {
            continue;
        }
        positions.insert(index, rng.gen_range(0..RANDOM_FRETS));
    }

    Chord::from_positions(positions)
}

/// A sparse chord whose notes all belong to `scale`.
///
/// Each string plays with probability `1 - SCALE_REST_CHANCE`, on a fret
/// chosen uniformly from the in-scale frets `0..=SCALE_WINDOW`. A string with
/// no such fret stays silent.
pub fn random_chord_in_scale<R: Rng + ?Sized>(
    instrument: &Instrument,
    scale: &Scale,
    rng: &mut R,
) -> Chord {
    let mut positions = BTreeMap::new();

    for (index, string) in instrument.strings().iter().enumerate() {
        let candidates = string.frets_in_scale(scale, SCALE_WINDOW + 1);

        if rng.gen::<f64>() <= SCALE_REST_CHANCE {
            continue;
        }
        if let Some(&fret) = candidates.choose(rng) {
            positions.insert(index, fret);
        }
    }

    Chord::from_positions(positions)
}

/// One measure per string, walking the scale upward from the root.
///
/// Each measure holds single notes on every in-scale fret from the string's
/// root fret to `span` frets above it, stopping at `MAX_FRET`. The lowest
/// string is left out when the root isn't within its first few frets.
pub fn scale_traversal(instrument: &Instrument, scale: &Scale, span: u32) -> Vec<Measure> {
    let mut measures = Vec::new();

    for (index, string) in instrument.strings().iter().enumerate() {
        let limit = if index == 0 {
            LOWEST_ROOT_SEARCH
        } else {
            ROOT_SEARCH
        };

        let root_fret = match string.index_of_pitch(scale.root(), limit) {
            Some(fret) => fret,
            None => continue,
        };

        let top_fret = root_fret.saturating_add(span).min(MAX_FRET);

        let chords = string
            .frets_in_scale(scale, top_fret + 1)
            .into_iter()
            .filter(|&fret| fret >= root_fret)
            .map(|fret| Chord::single(index, fret))
            .collect::<Vec<_>>();

        measures.push(Measure::from(chords));
    }

    measures
}

/// Measures of random chords in `scale`.
pub fn random_tab<R: Rng + ?Sized>(
    instrument: &Instrument,
    scale: &Scale,
    options: &RandomTabOptions,
    rng: &mut R,
) -> Tab {
    let mut tab = Tab::new(instrument.clone());

    for _ in 0..options.measures {
        let mut measure = Measure::new();
        for _ in 0..options.chords_per_measure {
            measure.add_chord(random_chord_in_scale(instrument, scale, rng));
        }
        tab.add_measure(measure);
    }

    tab
}

/// `scale_traversal` laid out as a tab.
pub fn scale_tab(instrument: &Instrument, scale: &Scale, span: u32) -> Tab {
    let mut tab = Tab::new(instrument.clone());

    for measure in scale_traversal(instrument, scale, span) {
        tab.add_measure(measure);
    }

    tab
}
