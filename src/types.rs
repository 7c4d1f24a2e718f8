/// The key type stored by the tree: a single totally-ordered scalar.
pub type Key = i32;

/// Node color used for rebalancing.
///
/// New nodes start red; the fixup passes recolor and rotate until the
/// red-black properties hold again. Absent children count as black.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Black,
}

/// A child direction. Rebalancing cases come in mirrored pairs; taking the
/// side as a parameter collapses each pair into one code path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    pub(crate) fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}
