use super::*;

/// Rolls the same number of dice regardless of the scores.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlwaysRoll(Rolls);

impl AlwaysRoll {
    pub fn new(rolls: Rolls) -> Result<Self, InvalidStrategyOutput> {
        checked(Self(rolls))
    }
}

impl Strategy for AlwaysRoll {
    fn rolls(&self, _: Score, _: Score) -> Rolls {
        self.0
    }
}

impl std::fmt::Display for AlwaysRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "always_roll({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ignores_scores() {
        let strategy = AlwaysRoll::new(5).unwrap();
        assert_eq!(strategy.rolls(0, 0), 5);
        assert_eq!(strategy.rolls(99, 99), 5);
    }
    #[test]
    fn zero_is_valid() {
        assert_eq!(AlwaysRoll::new(0).unwrap().rolls(40, 2), 0);
    }
    #[test]
    fn rejects_out_of_range() {
        let err = AlwaysRoll::new(11).unwrap_err();
        assert_eq!((err.score, err.opponent, err.output), (0, 0, 11));
    }
}
