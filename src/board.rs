use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum BoardError {
    #[error("duplicate cards in hole cards")]
    DuplicateHoleCards,
    #[error("too many community cards: {0}")]
    TooManyCommunityCards(usize),
    #[error("duplicate community cards")]
    DuplicateCommunityCards,
    #[error("hole cards overlap with the board")]
    Overlap,
    #[error("expected exactly two hole cards, got {0}")]
    HoleCount(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's two private hole cards.
///
/// ```
/// use potsettle::board::HoleCards;
///
/// let hole: HoleCards = "As Ks".parse().unwrap();
/// assert_eq!(hole.as_array().len(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HoleCards([Card; 2]);

impl HoleCards {
    pub fn try_new(a: Card, b: Card) -> Result<Self, BoardError> {
        if a == b {
            return Err(BoardError::DuplicateHoleCards);
        }
        Ok(Self([a, b]))
    }

    pub fn from_slice(slice: &[Card]) -> Result<Self, BoardError> {
        match slice {
            [a, b] => Self::try_new(*a, *b),
            _ => Err(BoardError::HoleCount(slice.len())),
        }
    }

    pub fn first(&self) -> Card {
        self.0[0]
    }

    pub fn second(&self) -> Card {
        self.0[1]
    }

    pub fn as_array(&self) -> [Card; 2] {
        self.0
    }
}

impl FromStr for HoleCards {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| BoardError::CardParse(e.to_string()))?;
        Self::from_slice(&cards)
    }
}

/// Community cards (flop, turn, river). Holds 0..=5 distinct cards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn try_new(cards: Vec<Card>) -> Result<Self, BoardError> {
        if cards.len() > 5 {
            return Err(BoardError::TooManyCommunityCards(cards.len()));
        }
        if !all_distinct(&cards) {
            return Err(BoardError::DuplicateCommunityCards);
        }
        Ok(Self { cards })
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// True once the river is out.
    pub fn is_complete(&self) -> bool {
        self.cards.len() == 5
    }

    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }

    /// Add dealt cards (a flop, turn or river) to the board.
    ///
    /// ```
    /// use potsettle::board::Board;
    /// use potsettle::deck::Deck;
    ///
    /// let mut deck = Deck::seeded(3);
    /// let mut board = Board::empty();
    /// board.extend(deck.deal_n(3).unwrap()).unwrap();
    /// board.extend([deck.deal_card().unwrap()]).unwrap();
    /// assert_eq!(board.len(), 4);
    /// ```
    pub fn extend<I>(&mut self, cards: I) -> Result<(), BoardError>
    where
        I: IntoIterator<Item = Card>,
    {
        let mut next = self.cards.clone();
        next.extend(cards);
        *self = Self::try_new(next)?;
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| BoardError::CardParse(e.to_string()))?;
        Board::try_new(cards)
    }
}

fn all_distinct(cards: &[Card]) -> bool {
    let set: HashSet<Card> = cards.iter().copied().collect();
    set.len() == cards.len()
}

/// Check that hole cards and board form a consistent Hold'em state: at most five
/// community cards and no card appearing twice anywhere.
pub fn validate_holdem(hole: &HoleCards, board: &Board) -> Result<(), BoardError> {
    if board.len() > 5 {
        return Err(BoardError::TooManyCommunityCards(board.len()));
    }
    if hole.first() == hole.second() {
        return Err(BoardError::DuplicateHoleCards);
    }
    if !all_distinct(board.as_slice()) {
        return Err(BoardError::DuplicateCommunityCards);
    }
    if board.as_slice().iter().any(|c| hole.as_array().contains(c)) {
        return Err(BoardError::Overlap);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Rank, Suit};

    #[test]
    fn hole_cards_must_be_distinct() {
        let a = Card::new(Rank::Ace, Suit::Spades);
        assert_eq!(HoleCards::try_new(a, a), Err(BoardError::DuplicateHoleCards));
        assert_eq!(HoleCards::from_slice(&[a]), Err(BoardError::HoleCount(1)));
    }

    #[test]
    fn board_rejects_six_cards_and_duplicates() {
        assert_eq!(
            "2c 3c 4c 5c 6c 7c".parse::<Board>(),
            Err(BoardError::TooManyCommunityCards(6))
        );
        assert_eq!("2c 2c".parse::<Board>(), Err(BoardError::DuplicateCommunityCards));
    }

    #[test]
    fn extend_is_all_or_nothing() {
        let mut board: Board = "2c 3c 4c".parse().unwrap();
        let err = board.extend([Card::new(Rank::Two, Suit::Clubs)]).unwrap_err();
        assert_eq!(err, BoardError::DuplicateCommunityCards);
        assert_eq!(board.len(), 3);
        board.extend([Card::new(Rank::Nine, Suit::Hearts)]).unwrap();
        assert_eq!(board.len(), 4);
        assert!(!board.is_complete());
    }

    #[test]
    fn validate_holdem_catches_overlap() {
        let hole: HoleCards = "As Ks".parse().unwrap();
        let board: Board = "As 2c 3c".parse().unwrap();
        assert_eq!(validate_holdem(&hole, &board), Err(BoardError::Overlap));
    }
}
