use std::sync::Once;

use ponteado_chords::Tuning;
use ponteado_theory::{ChordQuality, Note, ScaleKind};
use ponteado_ui::{ChordFinder, HarmonicFieldView, IOState, Interface, View, ROOT_CHOICES};

static INIT: Once = Once::new();

fn init_logger() {
    INIT.call_once(|| {
        env_logger::init();
    });
}

#[test]
fn tuning_switch_resets_root_and_quality() {
    init_logger();

    let mut finder = ChordFinder::new();
    assert_eq!(finder.tuning, Tuning::CebolaoEmD);
    assert_eq!(finder.root, Note::D);
    assert_eq!(finder.quality, ChordQuality::Major);

    // Wander off to some arbitrary selection first.
    finder.cycle_root();
    finder.cycle_root();
    finder.cycle_quality();
    assert_ne!(finder.root, Note::D);

    finder.cycle_tuning();
    assert_eq!(finder.tuning, Tuning::CebolaoEmE);
    assert_eq!(finder.root, Note::E);
    assert_eq!(finder.quality, ChordQuality::Major);

    finder.cycle_quality();
    finder.cycle_tuning();
    assert_eq!(finder.tuning, Tuning::CebolaoEmD);
    assert_eq!(finder.root, Note::D);
    assert_eq!(finder.quality, ChordQuality::Major);
}

#[test]
fn root_cycling_walks_the_course_list() {
    let mut finder = ChordFinder::new();

    // D is the 5th entry; a full lap returns to it and never visits A#.
    let mut seen = Vec::new();
    for _ in 0..ROOT_CHOICES.len() {
        seen.push(finder.root);
        finder.cycle_root();
    }
    assert_eq!(finder.root, Note::D);
    assert_eq!(seen.len(), 11);
    assert!(!seen.contains(&Note::As));
}

#[test]
fn quality_cycling_wraps() {
    let mut finder = ChordFinder::new();
    for _ in 0..ChordQuality::ALL.len() {
        finder.cycle_quality();
    }
    assert_eq!(finder.quality, ChordQuality::Major);
}

#[test]
fn uncatalogued_selection_yields_no_shape() {
    init_logger();

    let mut finder = ChordFinder::new();
    assert!(finder.current_shape().is_some());

    // C# major is not catalogued in Cebolão em D.
    while finder.root != Note::Cs {
        finder.cycle_root();
    }
    assert_eq!(finder.quality, ChordQuality::Major);
    assert!(finder.current_shape().is_none());

    // The tuning reset lands back on a combination that is.
    finder.cycle_tuning();
    assert!(finder.current_shape().is_some());
}

#[test]
fn field_view_cycles_independently_of_the_finder() {
    let mut view = HarmonicFieldView::new();
    view.cycle_tonality();
    let tonality = view.tonality;
    view.cycle_tuning();
    // Unlike the finder, switching tuning keeps the tonality.
    assert_eq!(view.tonality, tonality);
    assert_eq!(view.tuning, Tuning::CebolaoEmE);

    view.toggle_kind();
    assert_eq!(view.kind, ScaleKind::Minor);
    view.toggle_kind();
    assert_eq!(view.kind, ScaleKind::Major);
}

fn press(interface: &mut Interface, state: IOState) {
    interface.update_io_state(state);
    interface.update_io_state(IOState::default());
}

#[test]
fn interface_routes_buttons_to_the_active_view() {
    init_logger();

    let mut interface = Interface::new();
    assert_eq!(interface.view(), View::ChordFinder);

    press(
        &mut interface,
        IOState {
            selector_buttons: [false, true, false],
            ..IOState::default()
        },
    );
    assert_eq!(interface.finder().root, Note::Ds);

    press(
        &mut interface,
        IOState {
            view_button: true,
            ..IOState::default()
        },
    );
    assert_eq!(interface.view(), View::HarmonicField);

    press(
        &mut interface,
        IOState {
            selector_buttons: [false, false, true],
            ..IOState::default()
        },
    );
    assert_eq!(interface.field().kind, ScaleKind::Minor);
    // The finder was not touched while the field view was active.
    assert_eq!(interface.finder().root, Note::Ds);
}

#[test]
fn held_buttons_act_only_on_the_rising_edge() {
    let mut interface = Interface::new();

    let held = IOState {
        selector_buttons: [false, true, false],
        ..IOState::default()
    };
    interface.update_io_state(held);
    interface.update_io_state(held);
    interface.update_io_state(held);
    assert_eq!(interface.finder().root, Note::Ds);
}
