/// One of the two seats at the table. Player 0 moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum Player {
    #[default]
    P0,
    P1,
}

impl Player {
    /// The player who moves next.
    pub fn other(&self) -> Self {
        match self {
            Self::P0 => Self::P1,
            Self::P1 => Self::P0,
        }
    }
}

/// Panics for anything but 0 or 1.
impl From<usize> for Player {
    fn from(index: usize) -> Self {
        match index {
            0 => Self::P0,
            1 => Self::P1,
            _ => panic!("hog is a two player game"),
        }
    }
}

impl From<Player> for usize {
    fn from(player: Player) -> Self {
        match player {
            Player::P0 => 0,
            Player::P1 => 1,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}", usize::from(*self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn other_flips() {
        assert_eq!(Player::P0.other(), Player::P1);
        assert_eq!(Player::P1.other(), Player::P0);
        assert_eq!(Player::P0.other().other(), Player::P0);
    }
    #[test]
    fn indices() {
        assert_eq!(Player::from(0), Player::P0);
        assert_eq!(Player::from(1), Player::P1);
        assert_eq!(usize::from(Player::P1), 1);
    }
    #[test]
    #[should_panic]
    fn no_third_player() {
        let _ = Player::from(2);
    }
}
