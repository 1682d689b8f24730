//! Computer-versus-computer games.

use derive_getters::Getters;
use noughts_engine::{Board, Difficulty, GameError, GameStatus, Mark, Move, OPENING_MARK, evaluate};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Result of one finished duel game.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameRecord {
    /// Final status, always terminal.
    status: GameStatus,
    /// Every move in order.
    moves: Vec<Move>,
}

/// Tally across a series of duel games.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct DuelSummary {
    /// Policy playing X.
    first: Difficulty,
    /// Policy playing O.
    second: Difficulty,
    /// Games played.
    games: u32,
    /// Games won by X.
    first_wins: u32,
    /// Games won by O.
    second_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl DuelSummary {
    fn new(first: Difficulty, second: Difficulty) -> Self {
        Self {
            first,
            second,
            games: 0,
            first_wins: 0,
            second_wins: 0,
            draws: 0,
        }
    }

    fn record(&mut self, status: GameStatus) {
        self.games += 1;
        match status {
            GameStatus::Won(Mark::First) => self.first_wins += 1,
            GameStatus::Won(Mark::Second) => self.second_wins += 1,
            GameStatus::Drawn => self.draws += 1,
            GameStatus::InProgress => {}
        }
    }
}

impl std::fmt::Display for DuelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} (X) vs {} (O), {} games", self.first, self.second, self.games)?;
        writeln!(f, "  X wins: {}", self.first_wins)?;
        writeln!(f, "  O wins: {}", self.second_wins)?;
        write!(f, "  Draws:  {}", self.draws)
    }
}

/// Plays one game from the empty board, `first` opening as X.
#[instrument(skip(rng))]
pub fn play_game<R: Rng + ?Sized>(
    first: Difficulty,
    second: Difficulty,
    rng: &mut R,
) -> Result<GameRecord, GameError> {
    let mut board = Board::new();
    let mut moves = Vec::with_capacity(9);
    let mut to_move = OPENING_MARK;

    let status = loop {
        let status = evaluate(&board);
        if status.is_terminal() {
            break status;
        }

        let policy = if to_move == Mark::First { first } else { second };
        let position = policy.select_move(&board, to_move, to_move.opponent(), rng)?;
        board.apply(position, to_move)?;
        moves.push(Move::new(to_move, position));
        debug!(mark = %to_move, %position, "Duel move");
        to_move = to_move.opponent();
    };

    Ok(GameRecord { status, moves })
}

/// Plays `games` games and tallies the results.
///
/// One random source is shared across the series, seeded from `seed` when
/// given, so a seeded run is reproducible.
#[instrument]
pub fn run_duel(
    first: Difficulty,
    second: Difficulty,
    games: u32,
    seed: Option<u64>,
) -> Result<DuelSummary, GameError> {
    let mut rng = match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_rng(&mut rand::rng()),
    };

    let mut summary = DuelSummary::new(first, second);
    for game in 0..games {
        let record = play_game(first, second, &mut rng)?;
        debug!(game, status = %record.status, "Duel game finished");
        summary.record(record.status);
    }

    info!(
        first_wins = summary.first_wins,
        second_wins = summary.second_wins,
        draws = summary.draws,
        "Duel finished"
    );
    Ok(summary)
}
