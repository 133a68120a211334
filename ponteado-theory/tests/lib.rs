use ponteado_theory::{ChordQuality, Note, ScaleKind};

#[test]
fn interval_zero_is_identity() {
    for note in Note::CHROMATIC {
        assert_eq!(note.at_interval(0), note);
    }
}

#[test]
fn interval_arithmetic_is_periodic() {
    for note in Note::CHROMATIC {
        assert_eq!(note.at_interval(12), note);
        for offset in 0..12 {
            assert_eq!(note.at_interval(offset), note.at_interval(offset + 12));
        }
    }
}

#[test]
fn intervals_stay_in_the_chromatic_scale() {
    // Closure is guaranteed by the type, but the indices must also line up:
    // one semitone up from any note is the next chromatic entry.
    for (i, note) in Note::CHROMATIC.into_iter().enumerate() {
        assert_eq!(note.index(), i);
        assert_eq!(note.at_interval(1).index(), (i + 1) % 12);
    }
}

#[test]
fn whole_tone_from_d_is_e() {
    assert_eq!(Note::D.at_interval(2), Note::E);
    assert_eq!(Note::B.at_interval(1), Note::C);
    assert_eq!(Note::A.at_interval(3), Note::C);
}

#[test]
fn ciphers_parse_back() {
    for note in Note::CHROMATIC {
        assert_eq!(note.cipher().parse::<Note>(), Ok(note));
    }
}

#[test]
fn invalid_tokens_fail_to_parse() {
    for token in ["H", "c", "Db", "E#", "", "A##"] {
        assert!(token.parse::<Note>().is_err(), "accepted {token:?}");
    }
}

#[test]
fn degree_patterns_have_seven_degrees() {
    for kind in [ScaleKind::Major, ScaleKind::Minor] {
        let degrees = kind.degrees();
        assert_eq!(degrees.len(), 7);
        assert_eq!(degrees[0].interval, 0);
    }
}

#[test]
fn major_pattern_matches_the_textbook() {
    let intervals: Vec<u32> = ScaleKind::Major.degrees().iter().map(|d| d.interval).collect();
    assert_eq!(intervals, vec![0, 2, 4, 5, 7, 9, 11]);

    let qualities: Vec<ChordQuality> =
        ScaleKind::Major.degrees().iter().map(|d| d.quality).collect();
    assert_eq!(
        qualities,
        vec![
            ChordQuality::Major,
            ChordQuality::Minor,
            ChordQuality::Minor,
            ChordQuality::Major,
            ChordQuality::Major,
            ChordQuality::Minor,
            ChordQuality::Diminished,
        ]
    );
}

#[test]
fn minor_pattern_matches_the_textbook() {
    let intervals: Vec<u32> = ScaleKind::Minor.degrees().iter().map(|d| d.interval).collect();
    assert_eq!(intervals, vec![0, 2, 3, 5, 7, 8, 10]);

    let labels: Vec<&str> = ScaleKind::Minor.degrees().iter().map(|d| d.label).collect();
    assert_eq!(labels, vec!["i", "ii°", "III", "iv", "v", "VI", "VII"]);
}

#[test]
fn degree_roots_of_d_major() {
    let roots: Vec<Note> = (0..7)
        .map(|i| ScaleKind::Major.degree_root(Note::D, i))
        .collect();
    assert_eq!(
        roots,
        vec![Note::D, Note::E, Note::Fs, Note::G, Note::A, Note::B, Note::Cs]
    );
}
