use asciitab::generation::{scale_tab, DEFAULT_SPAN};
use asciitab::{Chord, Instrument, Measure, RenderOptions, Scale, Tab};

use pretty_assertions::assert_eq;

macro_rules! expected_tab {
    ($test_name: tt) => {
        include_str!(concat!("tab_tests/", $test_name, ".tab"))
    };
}

fn render_scale(instrument: Instrument, pattern: &str, root: &str, labels: bool) -> String {
    let scale = Scale::new(pattern, root).unwrap();
    let tab = scale_tab(&instrument, &scale, DEFAULT_SPAN);
    tab.to_text(&RenderOptions { labels }).unwrap()
}

#[test]
fn test_c_major_guitar() {
    assert_eq!(
        render_scale(Instrument::guitar(), "major", "C", true),
        expected_tab!("c_major_guitar")
    );
}

#[test]
fn test_a_minor_guitar() {
    assert_eq!(
        render_scale(Instrument::guitar(), "minor", "A", false),
        expected_tab!("a_minor_guitar")
    );
}

#[test]
fn test_flat_root_on_ukulele() {
    assert_eq!(
        render_scale(Instrument::ukulele(), "major", "Bb", true),
        expected_tab!("bb_major_ukulele")
    );
}

#[test]
fn test_repeated_chord() {
    let guitar = Instrument::guitar();
    let chord = Chord::new(&guitar, &[("B", 1), ("D", 2), ("A", 3)]).unwrap();
    let measure = Measure::from(vec![chord.clone(), chord.clone(), chord]);

    let mut tab = Tab::new(guitar);
    for _ in 0..3 {
        tab.add_measure(measure.clone());
    }

    assert_eq!(
        tab.to_text(&RenderOptions::default()).unwrap(),
        expected_tab!("repeated_chord_guitar")
    );
}

#[test]
fn test_one_line_per_string() {
    let scale = Scale::new("minor", "E").unwrap();

    for instrument in vec![Instrument::guitar(), Instrument::ukulele()] {
        let tab = scale_tab(&instrument, &scale, DEFAULT_SPAN);
        let lines = tab.render(&RenderOptions::default()).unwrap();

        assert_eq!(lines.len(), instrument.len());
        assert!(lines.iter().all(|line| line.starts_with('|') && line.ends_with('|')));
    }
}
