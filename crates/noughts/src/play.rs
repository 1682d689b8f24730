//! Interactive play on a line-oriented terminal.
//!
//! The loop reads one command per line, hands it to the [`Session`], and
//! redraws from the returned [`Snapshot`]. Session errors are printed and the
//! loop carries on; only I/O failures end it early.

use derive_more::Display;
use noughts_engine::{Difficulty, GameStatus, Mark, Phase, Session, Snapshot};
use rand::Rng;
use std::io::{BufRead, Write};
use std::str::FromStr;
use tracing::{debug, info, instrument, warn};

const HELP: &str = "\
Commands:
  <row> <col>              place your mark (0-based, e.g. `1 1` for the centre)
  reset                    clear the board and play again
  restart                  clear the board and return to setup
  side <first|second>      choose your mark (setup only)
  difficulty <level>       random, heuristic or search (setup only)
  start                    begin the game (setup only)
  help                     show this message
  quit                     leave";

/// One line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Place the human's mark.
    Move {
        /// Row, 0-based.
        row: usize,
        /// Column, 0-based.
        col: usize,
    },
    /// Clear the board, keep settings.
    Reset,
    /// Back to setup.
    Restart,
    /// Begin play from setup.
    Start,
    /// Choose the human's mark.
    Side(Mark),
    /// Choose the computer's policy.
    Difficulty(Difficulty),
    /// Print the command list.
    Help,
    /// Leave the loop.
    Quit,
}

/// Input that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// Not a command or a coordinate pair.
    #[display("Unrecognised command {:?} (type `help` for commands)", _0)]
    Unrecognised(String),

    /// A command that needs an argument was given none or a bad one.
    #[display("`{}` needs {}", command, expected)]
    BadArgument {
        /// Command word.
        command: &'static str,
        /// What the argument should look like.
        expected: &'static str,
    },
}

impl std::error::Error for InputError {}

impl FromStr for Input {
    type Err = InputError;

    /// Accepts `1 2`, `1,2` and `1, 2` as coordinates; command words are
    /// case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|t| !t.is_empty())
            .collect();

        if let [row, col] = tokens.as_slice()
            && let (Ok(row), Ok(col)) = (row.parse(), col.parse())
        {
            return Ok(Input::Move { row, col });
        }

        let unrecognised = || InputError::Unrecognised(s.trim().to_string());
        let (command, rest) = tokens.split_first().ok_or_else(unrecognised)?;

        match (command.to_ascii_lowercase().as_str(), rest) {
            ("reset", []) => Ok(Input::Reset),
            ("restart", []) => Ok(Input::Restart),
            ("start", []) => Ok(Input::Start),
            ("help" | "?", []) => Ok(Input::Help),
            ("quit" | "exit" | "q", []) => Ok(Input::Quit),
            ("side", [mark]) => mark.parse().map(Input::Side).map_err(|_| {
                InputError::BadArgument {
                    command: "side",
                    expected: "first or second",
                }
            }),
            ("side", _) => Err(InputError::BadArgument {
                command: "side",
                expected: "first or second",
            }),
            ("difficulty", [level]) => level.parse().map(Input::Difficulty).map_err(|_| {
                InputError::BadArgument {
                    command: "difficulty",
                    expected: "random, heuristic or search",
                }
            }),
            ("difficulty", _) => Err(InputError::BadArgument {
                command: "difficulty",
                expected: "random, heuristic or search",
            }),
            _ => Err(unrecognised()),
        }
    }
}

/// Runs the interactive loop until `quit` or end of input.
///
/// Starts the session first if it is still in setup, so the computer's
/// opening move (if any) is on the first board drawn.
#[instrument(skip_all, fields(human = %session.human_mark(), difficulty = %session.difficulty()))]
pub fn run<R, I, W>(session: &mut Session<R>, input: I, out: &mut W) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    let snapshot = if session.phase() == Phase::AwaitingStart {
        session.start()?
    } else {
        session.snapshot()
    };
    writeln!(out, "Type `help` for commands.")?;
    render(&snapshot, session.human_mark(), session.difficulty(), out)?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Input>() {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "Unparsed input");
                writeln!(out, "{}", err)?;
                continue;
            }
        };
        debug!(?command, "Player input");

        let result = match command {
            Input::Quit => {
                info!("Player quit");
                break;
            }
            Input::Help => {
                writeln!(out, "{}", HELP)?;
                continue;
            }
            Input::Move { row, col } => session.submit_human_move(row, col),
            Input::Reset => session.reset(),
            Input::Restart => Ok(session.restart()),
            Input::Start => session.start(),
            Input::Side(mark) => session.configure(mark, session.difficulty()),
            Input::Difficulty(difficulty) => session.set_difficulty(difficulty),
        };

        match result {
            Ok(snapshot) => render(&snapshot, session.human_mark(), session.difficulty(), out)?,
            Err(err) => writeln!(out, "{}", err)?,
        }
    }

    Ok(())
}

/// Draws the board and a one-line prompt for the current phase.
fn render<W: Write>(
    snapshot: &Snapshot,
    human: Mark,
    difficulty: Difficulty,
    out: &mut W,
) -> std::io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", snapshot.board().grid())?;
    if let Some(last) = snapshot.last_move()
        && last.mark != human
    {
        writeln!(out, "Computer played {}", last.position)?;
    }

    match snapshot.phase() {
        Phase::AwaitingStart => writeln!(
            out,
            "Setup: you play {} against {}. Use `side`, `difficulty`, then `start`.",
            human.symbol(),
            difficulty
        ),
        Phase::InProgress => writeln!(out, "Your move ({}):", human.symbol()),
        Phase::Terminal => {
            let verdict = match snapshot.status() {
                GameStatus::Won(mark) if *mark == human => "You win!".to_string(),
                GameStatus::Won(_) => "Computer wins.".to_string(),
                status => status.to_string(),
            };
            writeln!(
                out,
                "{} Type `reset` to play again, `restart` to change settings or `quit`.",
                verdict
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        assert_eq!("1 2".parse(), Ok(Input::Move { row: 1, col: 2 }));
        assert_eq!("0,0".parse(), Ok(Input::Move { row: 0, col: 0 }));
        assert_eq!(" 2, 1 ".parse(), Ok(Input::Move { row: 2, col: 1 }));
        assert_eq!("7 7".parse(), Ok(Input::Move { row: 7, col: 7 }));
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("RESET".parse(), Ok(Input::Reset));
        assert_eq!("restart".parse(), Ok(Input::Restart));
        assert_eq!("q".parse(), Ok(Input::Quit));
        assert_eq!("side o".parse(), Ok(Input::Side(Mark::Second)));
        assert_eq!(
            "difficulty minimax".parse(),
            Ok(Input::Difficulty(Difficulty::Search))
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            "dance".parse::<Input>(),
            Err(InputError::Unrecognised(_))
        ));
        assert!(matches!(
            "side".parse::<Input>(),
            Err(InputError::BadArgument { command: "side", .. })
        ));
        assert!(matches!(
            "difficulty impossible".parse::<Input>(),
            Err(InputError::BadArgument {
                command: "difficulty",
                ..
            })
        ));
        assert!(matches!(
            "1 x".parse::<Input>(),
            Err(InputError::Unrecognised(_))
        ));
    }
}
