pub mod diagram;

pub use diagram::{ChordDiagram, DiagramLayout, DiagramStyle, Marker, PlacedMarker};
