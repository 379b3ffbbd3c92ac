/// Can a visitor move through this grid tile?
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Traversable {
    /// Obstructed tiles cannot be moved into.
    Obstructed,
    /// Free tiles can be moved through.
    Free,
}

impl Traversable {
    #[inline]
    pub fn is_free(self) -> bool {
        self == Traversable::Free
    }
}

/// `true` is walkable ground, `false` is solid.
impl From<bool> for Traversable {
    fn from(free: bool) -> Self {
        if free {
            Traversable::Free
        } else {
            Traversable::Obstructed
        }
    }
}
