use crate::*;

/// The alternating turn loop of a single game.
///
/// The only mutable state besides the scores is whose turn it is. Turns
/// alternate starting with [`Player::P0`]; the game ends the instant either
/// score reaches the goal, without a closing turn for the other player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Game {
    board: Scoreboard,
    active: Player,
    goal: Score,
    turns: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new(Scoreboard::default(), GOAL)
    }
}

impl Game {
    /// Starting scores must both sit below the goal, and the goal may not
    /// exceed the scoring domain of Free Bacon.
    pub fn new(board: impl Into<Scoreboard>, goal: Score) -> Self {
        let board = board.into();
        assert!(goal > 0, "goal must be positive");
        assert!(goal <= SCORE_CEILING, "goal {} exceeds {}", goal, SCORE_CEILING);
        assert!(board.first < goal, "the game should be over");
        assert!(board.second < goal, "the game should be over");
        Self {
            board,
            goal,
            turns: 0,
            active: Player::P0,
        }
    }
    pub fn board(&self) -> Scoreboard {
        self.board
    }
    pub fn active(&self) -> Player {
        self.active
    }
    pub fn goal(&self) -> Score {
        self.goal
    }
    pub fn turns(&self) -> usize {
        self.turns
    }
    pub fn is_over(&self) -> bool {
        self.board.is_over(self.goal)
    }

    /// Plays one turn for the active player.
    ///
    /// The strategy's choice is checked against the contract before any dice
    /// are thrown; a violation aborts the game.
    pub fn step<A, B>(
        &mut self,
        first: &A,
        second: &B,
        cup: &mut Cup,
    ) -> Result<Turn, InvalidStrategyOutput>
    where
        A: Strategy + ?Sized,
        B: Strategy + ?Sized,
    {
        assert!(!self.is_over(), "the game should be over");
        let player = self.active;
        let score = self.board.get(player);
        let opponent = self.board.get(player.other());
        let rolls = match player {
            Player::P0 => first.rolls(score, opponent),
            Player::P1 => second.rolls(score, opponent),
        };
        check_output(score, opponent, rolls)?;
        let sides = Sides::select(score, opponent);
        let gained = take_turn(rolls, opponent, cup.pick(sides));
        self.board.set(player, score + gained);
        let swapped = self.board.is_swap();
        if swapped {
            self.board.swap();
        }
        self.active = player.other();
        self.turns += 1;
        let turn = Turn {
            player,
            rolls,
            sides,
            gained,
            swapped,
            board: self.board,
        };
        log::trace!("[game] {}", turn);
        Ok(turn)
    }

    /// Plays turns until either score reaches the goal, returning the
    /// frozen final scores.
    pub fn play<A, B>(
        mut self,
        first: &A,
        second: &B,
        cup: &mut Cup,
    ) -> Result<Scoreboard, InvalidStrategyOutput>
    where
        A: Strategy + ?Sized,
        B: Strategy + ?Sized,
    {
        while !self.is_over() {
            self.step(first, second, cup)?;
        }
        log::trace!("[game] final {} after {} turns", self.board, self.turns);
        Ok(self.board)
    }
}

/// Plays a full game from (0, 0) to the default goal.
pub fn play<A, B>(first: &A, second: &B, cup: &mut Cup) -> Result<Scoreboard, InvalidStrategyOutput>
where
    A: Strategy + ?Sized,
    B: Strategy + ?Sized,
{
    Game::default().play(first, second, cup)
}
