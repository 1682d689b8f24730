//! Noughts engine - pure game logic for noughts and crosses
//!
//! The engine knows nothing about windows, terminals or input devices. A
//! front end drives a [`Session`] with the human's moves and redraws from the
//! [`Snapshot`] each call returns.
//!
//! # Architecture
//!
//! - **Board**: cell storage and the single validated `apply` mutation
//! - **Rules**: stateless win/draw evaluation
//! - **Policies**: random, one-ply heuristic and exhaustive minimax opponents
//! - **Session**: turn order, lifecycle, and the computer's replies
//! - **Invariants**: properties checked after every mutation in debug builds
//!
//! # Example
//!
//! ```
//! use noughts_engine::{Difficulty, GameStatus, Mark, Session, SessionConfig};
//!
//! let config = SessionConfig::new(Mark::First, Difficulty::Search).with_seed(7);
//! let mut session = Session::new(config);
//! session.start()?;
//!
//! let snapshot = session.submit_human_move(1, 1)?;
//! assert_eq!(snapshot.board().move_count(), 2);
//! assert_eq!(*snapshot.status(), GameStatus::InProgress);
//! # Ok::<(), noughts_engine::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod error;
pub mod invariants;
mod phases;
pub mod policy;
mod position;
pub mod rules;
mod session;
mod types;

pub use action::Move;
pub use error::{GameError, InvalidMove, Rejection};
pub use phases::Phase;
pub use policy::{Difficulty, HeuristicPolicy, MovePolicy, RandomPolicy, SearchPolicy};
pub use position::Position;
pub use rules::evaluate;
pub use session::{OPENING_MARK, Session, SessionConfig, Snapshot};
pub use types::{Board, Cell, GameStatus, Mark, ParseBoardError};
