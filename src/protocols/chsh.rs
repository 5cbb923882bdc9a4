//! The CHSH non-communicating game.
//!
//! A referee sends independent random bits `x` and `y` to two cooperating
//! players who cannot communicate during the round. Each replies with a bit,
//! and the pair wins when `x AND y == a XOR b`. Classical strategies cap out
//! at a 75% win rate; the entanglement-based strategy that beats it is out of
//! scope here, so only the classical baselines are implemented.

use rand::Rng;

/// A pre-agreed classical strategy for both players.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Both players always answer 0. Wins every round except `x = y = 1`.
    Fixed,
    /// Both players answer uniformly at random.
    Random,
}

impl Strategy {
    fn respond<R: Rng + ?Sized>(self, _received: bool, rng: &mut R) -> bool {
        match self {
            Strategy::Fixed => false,
            Strategy::Random => rng.random_bool(0.5),
        }
    }
}

/// Win tally over a run of games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChshResult {
    pub wins: usize,
    pub rounds: usize,
}

impl ChshResult {
    /// Fraction of rounds won.
    pub fn win_rate(&self) -> f64 {
        if self.rounds == 0 {
            return 0.0;
        }
        self.wins as f64 / self.rounds as f64
    }
}

/// Plays one round: the referee draws `x` and `y`, both players respond per
/// the strategy, and the round is won when `x AND y == a XOR b`.
pub fn play_round<R: Rng + ?Sized>(strategy: Strategy, rng: &mut R) -> bool {
    let x = rng.random_bool(0.5);
    let y = rng.random_bool(0.5);

    let a = strategy.respond(x, rng);
    let b = strategy.respond(y, rng);

    (x && y) == (a ^ b)
}

/// Plays `rounds` games and tallies the wins.
pub fn run<R: Rng + ?Sized>(strategy: Strategy, rounds: usize, rng: &mut R) -> ChshResult {
    let wins = (0..rounds).filter(|_| play_round(strategy, rng)).count();
    ChshResult { wins, rounds }
}
