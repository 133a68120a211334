pub mod pitch;
pub mod scale;

pub use pitch::{Note, ParseNoteError};
pub use scale::{ChordQuality, Degree, ScaleKind};
