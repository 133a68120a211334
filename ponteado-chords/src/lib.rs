pub mod field;
pub mod macros;
pub mod shapes;

pub use field::{harmonic_field, DegreeChord};
pub use shapes::{lookup_chord, ChordShape, FretPosition, Tuning, STRING_COUNT};
