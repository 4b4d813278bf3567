use std::fmt::{self, Display, Formatter};

use rand::Rng;

use crate::error::{Error, Result};
use crate::pitch::PitchProgression;

/// Semitone steps between consecutive degrees, by pattern name.
static PATTERNS: [(&str, &[u32]); 2] = [
    ("major", &[2, 2, 1, 2, 2, 2, 1]),
    ("minor", &[2, 1, 2, 2, 1, 2, 2]),
];

pub fn pattern_names() -> impl Iterator<Item = &'static str> {
    PATTERNS.iter().map(|&(name, _)| name)
}

/// Canonical name and steps of the pattern called `name`, ignoring case.
pub fn pattern(name: &str) -> Result<(&'static str, &'static [u32])> {
    PATTERNS
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .copied()
        .ok_or_else(|| Error::UnknownScalePattern {
            name: name.to_owned(),
            known: pattern_names().collect::<Vec<_>>().join(", "),
        })
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    name: &'static str,
    root: &'static str,
    pitches: Vec<String>,
}

impl Scale {
    /// Walks the named step pattern up from `root`.
    ///
    /// The scale holds one pitch per step, so the octave is never repeated.
    pub fn new(pattern_name: &str, root: &str) -> Result<Self> {
        let table = PitchProgression::standard();
        let (name, steps) = pattern(pattern_name)?;

        let root = table.spelling(root).ok_or_else(|| Error::UnknownPitch {
            pitch: root.to_owned(),
        })?;

        let mut pitch = root;
        let mut pitches = Vec::with_capacity(steps.len());

        for &step in steps {
            pitches.push(pitch.to_owned());

            for _ in 0..step {
                if !table.contains(pitch) {
                    return Err(Error::UnknownPitch {
                        pitch: pitch.to_owned(),
                    });
                }
                pitch = table.advance(pitch);
            }
        }

        Ok(Scale {
            name,
            root,
            pitches,
        })
    }

    pub fn name(&self) -> &str {
        self.name
    }

    pub fn root(&self) -> &str {
        self.root
    }

    pub fn pitches(&self) -> &[String] {
        &self.pitches
    }

    pub fn contains(&self, pitch: &str) -> bool {
        PitchProgression::standard().matches(pitch, &self.pitches)
    }
}

impl Display for Scale {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(
            f,
            "<{} {} [{}]>",
            self.root,
            self.name,
            self.pitches.join(", ")
        )
    }
}

pub fn random_pattern_name<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    PATTERNS[rng.gen_range(0..PATTERNS.len())].0
}

/// Any spelling from the pitch table.
///
/// Flat aliases are table keys too, so semitones with two spellings come up
/// about twice as often as the naturals.
pub fn random_root<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    let keys = PitchProgression::standard().keys().collect::<Vec<_>>();
    keys[rng.gen_range(0..keys.len())]
}

/// A random pattern on a random root. Both come from the built-in tables, so
/// an error here means the tables disagree with each other.
pub fn random_scale<R: Rng + ?Sized>(rng: &mut R) -> Result<Scale> {
    let name = random_pattern_name(rng);
    let root = random_root(rng);
    Scale::new(name, root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn pitches(pattern: &str, root: &str) -> Vec<String> {
        Scale::new(pattern, root).unwrap().pitches().to_vec()
    }

    #[test]
    fn c_major() {
        assert_eq!(pitches("major", "C"), vec!["C", "D", "E", "F", "G", "A", "B"]);
    }

    #[test]
    fn a_minor() {
        assert_eq!(pitches("minor", "A"), vec!["A", "B", "C", "D", "E", "F", "G"]);
    }

    #[test]
    fn sharps_and_flats() {
        assert_eq!(
            pitches("major", "G"),
            vec!["G", "A", "B", "C", "D", "E", "F#"]
        );
        assert_eq!(
            pitches("major", "bb"),
            vec!["Bb", "C", "D", "D#", "F", "G", "A"]
        );
        assert_eq!(
            pitches("minor", "C#"),
            vec!["C#", "D#", "E", "F#", "G#", "A", "B"]
        );
    }

    #[test]
    fn every_root_and_pattern_gives_seven_pitches() {
        let table = PitchProgression::standard();
        for name in pattern_names() {
            for root in table.keys() {
                let scale = Scale::new(name, root).unwrap();
                assert_eq!(scale.pitches().len(), 7);
                assert_eq!(scale, Scale::new(name, root).unwrap());
            }
        }
    }

    #[test]
    fn unknown_pattern_fails() {
        assert_eq!(
            Scale::new("dorian", "C"),
            Err(Error::UnknownScalePattern {
                name: "dorian".to_owned(),
                known: "major, minor".to_owned(),
            })
        );
    }

    #[test]
    fn unknown_root_fails() {
        assert_eq!(
            Scale::new("major", "H"),
            Err(Error::UnknownPitch {
                pitch: "H".to_owned()
            })
        );
        assert_eq!(
            Scale::new("minor", "Cb"),
            Err(Error::UnknownPitch {
                pitch: "Cb".to_owned()
            })
        );
    }

    #[test]
    fn pattern_name_ignores_case() {
        assert_eq!(Scale::new("MAJOR", "c").unwrap().name(), "major");
        assert_eq!(Scale::new("MAJOR", "c").unwrap().root(), "C");
    }

    #[test]
    fn display() {
        let scale = Scale::new("minor", "E").unwrap();
        assert_eq!(scale.to_string(), "<E minor [E, F#, G, A, B, C, D]>");
    }

    #[test]
    fn contains_accepts_other_spellings() {
        let scale = Scale::new("major", "F").unwrap();
        assert!(scale.contains("bb"));
        assert!(scale.contains("A#"));
        assert!(!scale.contains("B"));
    }

    #[test]
    fn random_scale_is_valid_and_seeded() {
        let mut first = ChaCha8Rng::seed_from_u64(7);
        let mut second = ChaCha8Rng::seed_from_u64(7);

        for _ in 0..32 {
            let scale = random_scale(&mut first).unwrap();
            assert_eq!(scale.pitches().len(), 7);
            assert_eq!(scale, random_scale(&mut second).unwrap());
        }
    }
}
