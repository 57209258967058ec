use crate::*;

/// Both players' scores, addressed by [`Player`] rather than by position
/// in a tuple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Scoreboard {
    pub first: Score,
    pub second: Score,
}

impl Scoreboard {
    pub fn new(first: Score, second: Score) -> Self {
        Self { first, second }
    }
    pub fn get(&self, player: Player) -> Score {
        match player {
            Player::P0 => self.first,
            Player::P1 => self.second,
        }
    }
    pub fn set(&mut self, player: Player, score: Score) {
        match player {
            Player::P0 => self.first = score,
            Player::P1 => self.second = score,
        }
    }
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.first, &mut self.second);
    }
    /// Whether either score is exactly double the other.
    pub fn is_swap(&self) -> bool {
        rules::is_swap(self.first, self.second)
    }
    /// Whether either player has reached `goal`.
    pub fn is_over(&self, goal: Score) -> bool {
        self.first >= goal || self.second >= goal
    }
    /// Player 0 wins only with a strictly higher score.
    pub fn winner(&self) -> Player {
        if self.first > self.second {
            Player::P0
        } else {
            Player::P1
        }
    }
}

impl From<(Score, Score)> for Scoreboard {
    fn from((first, second): (Score, Score)) -> Self {
        Self { first, second }
    }
}

impl From<Scoreboard> for (Score, Score) {
    fn from(board: Scoreboard) -> Self {
        (board.first, board.second)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:>3} : {:<3}", self.first, self.second)
    }
}
