mod cup;
mod fair;
mod rigged;
mod sides;

pub use cup::*;
pub use fair::*;
pub use rigged::*;
pub use sides::*;

use crate::Face;

/// A source of die outcomes.
///
/// Each call to [`Dice::roll`] produces one face value in `1..=faces`.
/// Stateful sources (seeded generators, replayed sequences) advance on
/// every call, so the trait takes `&mut self`.
pub trait Dice {
    fn roll(&mut self) -> Face;
}

impl<F> Dice for F
where
    F: FnMut() -> Face,
{
    fn roll(&mut self) -> Face {
        self()
    }
}
