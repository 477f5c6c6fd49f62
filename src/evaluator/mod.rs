//! Best-five-of-seven hand evaluation.
//!
//! Every five-card subset of the seven available cards is classified on its own and
//! the strongest one wins. That is 21 classifications per player, cheap enough that
//! no lookup tables are needed.

mod analysis;
mod combinations;
mod rank_groups;

use crate::board::{validate_holdem, Board, BoardError, HoleCards};
use crate::cards::Card;
use crate::hand::Hand;
use crate::player::Player;
use analysis::HandAnalysis;
use combinations::FiveOfSeven;
use core::cmp::Ordering;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvalError {
    #[error("expected exactly 2 hole cards, got {0}")]
    HoleCount(usize),
    #[error("expected exactly 5 community cards, got {0}")]
    BoardCount(usize),
    #[error("invalid hand: {0}")]
    InvalidHand(#[from] BoardError),
}

/// Classify exactly five cards.
pub fn evaluate_five(cards: &[Card; 5]) -> Hand {
    HandAnalysis::new(cards).into_hand()
}

/// Best hand out of seven cards. Ties between subsets keep the first one found.
pub fn evaluate_seven(cards: &[Card; 7]) -> Hand {
    // the first five cards are the first subset in enumeration order
    let first = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
    FiveOfSeven::new()
        .skip(1)
        .map(|idx| evaluate_five(&idx.map(|i| cards[i])))
        .fold(first, |best, hand| if hand > best { hand } else { best })
}

/// Evaluate a Hold'em hand: two hole cards plus a complete five-card board.
///
/// ```
/// use potsettle::board::{Board, HoleCards};
/// use potsettle::evaluator::evaluate_holdem;
/// use potsettle::hand::Category;
///
/// let hole: HoleCards = "Ah Kh".parse().unwrap();
/// let board: Board = "Qh Jh Th 3s 2c".parse().unwrap();
/// let hand = evaluate_holdem(&hole, &board).unwrap();
/// assert_eq!(hand.category(), Category::RoyalFlush);
/// ```
pub fn evaluate_holdem(hole: &HoleCards, board: &Board) -> Result<Hand, EvalError> {
    validate_holdem(hole, board)?;
    let [b0, b1, b2, b3, b4] = board.as_slice() else {
        return Err(EvalError::BoardCount(board.len()));
    };
    let [h0, h1] = hole.as_array();
    Ok(evaluate_seven(&[h0, h1, *b0, *b1, *b2, *b3, *b4]))
}

/// Evaluate loose card slices, checking the 2 + 5 contract first.
pub fn evaluate_cards(hole: &[Card], community: &[Card]) -> Result<Hand, EvalError> {
    if hole.len() != 2 {
        return Err(EvalError::HoleCount(hole.len()));
    }
    if community.len() != 5 {
        return Err(EvalError::BoardCount(community.len()));
    }
    let hole = HoleCards::from_slice(hole)?;
    let board = Board::try_new(community.to_vec())?;
    evaluate_holdem(&hole, &board)
}

/// Compare two Hold'em holdings on a shared board.
pub fn compare_holdem(a: &HoleCards, b: &HoleCards, board: &Board) -> Result<Ordering, EvalError> {
    let ha = evaluate_holdem(a, board)?;
    let hb = evaluate_holdem(b, board)?;
    Ok(ha.cmp(&hb))
}

/// A showdown evaluation strategy. Chosen by the caller when the table is built.
pub trait HandEvaluator {
    fn evaluate(&self, hole: &HoleCards, board: &Board) -> Result<Hand, EvalError>;
}

/// Evaluates all 21 five-card subsets.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExhaustiveEvaluator;

impl HandEvaluator for ExhaustiveEvaluator {
    fn evaluate(&self, hole: &HoleCards, board: &Board) -> Result<Hand, EvalError> {
        evaluate_holdem(hole, board)
    }
}

/// Evaluate every player still in the hand. The result is indexed by seat; folded
/// players and players without hole cards get `None`.
pub fn evaluate_showdown<E: HandEvaluator + ?Sized>(
    evaluator: &E,
    players: &[Player],
    board: &Board,
) -> Result<Vec<Option<Hand>>, EvalError> {
    players
        .iter()
        .map(|p| match p.hole {
            Some(hole) if !p.folded => evaluator.evaluate(&hole, board).map(Some),
            _ => Ok(None),
        })
        .collect()
}
