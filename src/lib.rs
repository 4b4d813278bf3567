//! ASCII tablature from scales and chords.
//!
//! Pitches feed scales, scales feed the generators, and the generators fill a
//! `Tab` that renders to one line of text per instrument string.

#[macro_use]
extern crate lazy_static;

pub mod chord;
pub mod colors;
pub mod error;
pub mod generation;
pub mod instrument;
pub mod layout;
pub mod pitch;
pub mod scale;
pub mod tab;

use rand::Rng;

pub use crate::chord::Chord;
pub use crate::error::{Error, Result};
pub use crate::generation::{RandomTabOptions, DEFAULT_SPAN};
pub use crate::instrument::{Instrument, InstrumentKind, InstrumentString};
pub use crate::scale::Scale;
pub use crate::tab::{Measure, RenderOptions, Tab};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Random chords drawn from the scale.
    Random(RandomTabOptions),
    /// Every string walked upward from the root.
    Scale { span: u32 },
}

/// What to generate. Missing root or pattern names are picked at random.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabRequest {
    pub root: Option<String>,
    pub pattern: Option<String>,
    pub instrument: InstrumentKind,
    pub mode: Mode,
}

impl TabRequest {
    pub fn scale<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Scale> {
        let pattern = match self.pattern {
            Some(ref pattern) => pattern.as_str(),
            None => scale::random_pattern_name(rng),
        };
        let root = match self.root {
            Some(ref root) => root.as_str(),
            None => scale::random_root(rng),
        };

        Scale::new(pattern, root)
    }
}

/// Builds the scale for `request`, then the tab in it.
pub fn generate<R: Rng + ?Sized>(request: &TabRequest, rng: &mut R) -> Result<(Scale, Tab)> {
    let scale = request.scale(rng)?;
    let instrument = request.instrument.build();

    let tab = match request.mode {
        Mode::Random(ref options) => generation::random_tab(&instrument, &scale, options, rng),
        Mode::Scale { span } => generation::scale_tab(&instrument, &scale, span),
    };

    Ok((scale, tab))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn request(root: Option<&str>, pattern: Option<&str>, mode: Mode) -> TabRequest {
        TabRequest {
            root: root.map(str::to_owned),
            pattern: pattern.map(str::to_owned),
            instrument: InstrumentKind::Guitar,
            mode,
        }
    }

    #[test]
    fn explicit_scale_is_used() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let request = request(Some("a"), Some("minor"), Mode::Scale { span: DEFAULT_SPAN });

        let (scale, tab) = generate(&request, &mut rng).unwrap();

        assert_eq!(scale, Scale::new("minor", "A").unwrap());
        assert_eq!(tab.measures().len(), 6);
    }

    #[test]
    fn missing_names_are_randomized() {
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let request = request(None, None, Mode::Random(RandomTabOptions::default()));

        let (scale, tab) = generate(&request, &mut rng).unwrap();

        assert_eq!(scale.pitches().len(), 7);
        assert_eq!(tab.measures().len(), 4);
    }

    #[test]
    fn bad_names_are_reported() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);

        let bad_root = request(Some("Q"), Some("major"), Mode::Scale { span: 4 });
        assert_eq!(
            generate(&bad_root, &mut rng).unwrap_err(),
            Error::UnknownPitch {
                pitch: "Q".to_owned()
            }
        );

        let bad_pattern = request(Some("C"), Some("lydian"), Mode::Scale { span: 4 });
        assert!(matches!(
            generate(&bad_pattern, &mut rng),
            Err(Error::UnknownScalePattern { .. })
        ));
    }
}
