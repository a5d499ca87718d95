//! Buffer lifecycle states.

use std::fmt;

/// Lifecycle of an [`OwnedBuffer`](crate::OwnedBuffer).
///
/// `Uninitialized -> Live -> Destroyed`. `Destroyed` is terminal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BufferState {
    /// Never created; owns no storage.
    #[default]
    Uninitialized,
    /// Created and owning storage.
    Live,
    /// Storage released; every accessor reports the invalid signal.
    Destroyed,
}

impl BufferState {
    /// Whether the buffer currently owns storage.
    pub fn is_live(self) -> bool {
        self == Self::Live
    }
}

impl fmt::Display for BufferState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized => write!(f, "uninitialized"),
            Self::Live => write!(f, "live"),
            Self::Destroyed => write!(f, "destroyed"),
        }
    }
}
