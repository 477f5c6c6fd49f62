//! potsettle: poker hand evaluation and pot settlement
//!
//! The crate covers the parts of a Hold'em table that have to be exact:
//! - best-five-of-seven evaluation with a total order over hands
//! - action legality and minimum-raise arithmetic
//! - round completion, side pots, split pots and uncalled-bet refunds
//!
//! Seating, turn order, prompting and persistence belong to the caller, which
//! owns the [`player::Player`] and [`round::BettingRound`] records and lends them
//! to these functions one call at a time. Nothing here locks, blocks or does I/O.
//!
//! ## Quick start: settle a three-way all-in
//! ```
//! use potsettle::board::Board;
//! use potsettle::evaluator::{evaluate_showdown, ExhaustiveEvaluator};
//! use potsettle::player::Player;
//! use potsettle::pot::settle_showdown;
//! use potsettle::round::BettingRound;
//!
//! let mut players = vec![Player::new(0), Player::new(0), Player::new(0)];
//! for (p, (bet, hole)) in players.iter_mut().zip([(50, "Ah Ad"), (150, "Kh Kd"), (150, "7c 6c")]) {
//!     p.current_bet = bet;
//!     p.total_invested = bet;
//!     p.all_in = true;
//!     p.hole = Some(hole.parse().unwrap());
//! }
//! let mut round = BettingRound { pot: 350, ..BettingRound::new() };
//! let board: Board = "2c 3d 4h 8s Js".parse().unwrap();
//!
//! let hands = evaluate_showdown(&ExhaustiveEvaluator, &players, &board).unwrap();
//! let settlement = settle_showdown(&mut players, &mut round, &hands).unwrap();
//! assert_eq!(settlement.won_by(0), 150); // aces take the main pot
//! assert_eq!(settlement.won_by(1), 200); // kings take the side pot
//! assert_eq!(round.pot, 0);
//! ```

pub mod betting;
pub mod board;
pub mod cards;
pub mod config;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod player;
pub mod pot;
pub mod round;
pub mod validator;

/// Chip amounts. Whole chips only.
pub type Chips = i64;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
