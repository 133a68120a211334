pub mod chord_finder;
pub mod field_view;
pub mod interface;

pub use chord_finder::{ChordFinder, ROOT_CHOICES};
pub use field_view::HarmonicFieldView;
pub use interface::{IOState, Interface, View, DISPLAY_SIZE};
