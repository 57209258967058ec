use super::*;

/// One die per [`Sides`] variant; the game picks from it every turn.
pub struct Cup {
    four: Box<dyn Dice + Send>,
    six: Box<dyn Dice + Send>,
}

impl Cup {
    pub fn new<F, S>(four: F, six: S) -> Self
    where
        F: Dice + Send + 'static,
        S: Dice + Send + 'static,
    {
        Self {
            four: Box::new(four),
            six: Box::new(six),
        }
    }
    /// Fair dice seeded from the thread-local generator.
    pub fn fair() -> Self {
        Self::new(Fair::from(Sides::Four), Fair::from(Sides::Six))
    }
    /// Fair dice with reproducible streams. The six-sided die never
    /// shares the four-sided die's seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(
            Fair::seeded(Sides::Four.faces(), seed),
            Fair::seeded(Sides::Six.faces(), seed ^ 0x9E37_79B9_7F4A_7C15),
        )
    }
    /// Both variants replay the same sequence, each with its own cursor.
    pub fn rigged(faces: impl Into<Vec<Face>>) -> Self {
        let dice = Rigged::new(faces);
        Self::new(dice.clone(), dice)
    }
    pub fn pick(&mut self, sides: Sides) -> &mut (dyn Dice + Send) {
        match sides {
            Sides::Four => self.four.as_mut(),
            Sides::Six => self.six.as_mut(),
        }
    }
}

impl Default for Cup {
    fn default() -> Self {
        Self::fair()
    }
}

impl std::fmt::Debug for Cup {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Cup").finish_non_exhaustive()
    }
}
