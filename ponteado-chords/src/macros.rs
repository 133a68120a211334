/// Builds a [`ChordShape`](crate::shapes::ChordShape) from chord-chart
/// notation: `x` is a muted string, a number is the fret to press (0 for an
/// open string). Strings are listed from the 5th to the 1st.
///
/// ```
/// use ponteado_chords::shape;
///
/// const EM: ponteado_chords::ChordShape = shape!("Em", [2, 2, 3, 2, 1]);
/// const C: ponteado_chords::ChordShape = shape!("C", [x, 1, 2, 1, 1]);
/// ```
#[macro_export]
macro_rules! shape {
    ($name:literal, [$($pos:tt),* $(,)?]) => {
        $crate::shapes::ChordShape {
            name: $name,
            positions: [$($crate::shape!(@pos $pos)),*],
        }
    };
    (@pos x) => {
        $crate::shapes::FretPosition::Muted
    };
    (@pos $fret:literal) => {
        $crate::shapes::FretPosition::Fret($fret)
    };
}
