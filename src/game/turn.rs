use crate::*;

/// Record of one completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Turn {
    pub player: Player,
    pub rolls: Rolls,
    pub sides: Sides,
    pub gained: Score,
    pub swapped: bool,
    pub board: Scoreboard,
}

impl std::fmt::Display for Turn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} rolls {:>2} {} dice for {:>2} | {}{}",
            self.player,
            self.rolls,
            self.sides,
            self.gained,
            self.board,
            if self.swapped { " (swap)" } else { "" }
        )
    }
}
