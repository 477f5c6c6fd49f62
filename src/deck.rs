use crate::cards::{Card, Rank, Suit};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Dealing past the end of the deck. This is a contract violation: a hand never needs
/// more than `2 * players + 5` cards, so the hand must be aborted rather than reshuffled.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("deck exhausted: requested {requested}, remaining {remaining}")]
    Exhausted { requested: usize, remaining: usize },
}

/// A 52-card deck owned by a single table for a single hand.
///
/// Cards are dealt from the top (the end of the internal vector).
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// All 52 cards, unshuffled.
    ///
    /// ```
    /// use potsettle::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A freshly shuffled deck using the thread-local RNG.
    pub fn new() -> Self {
        let mut deck = Self::standard();
        deck.shuffle_with(&mut rand::rng());
        deck
    }

    /// A deck shuffled with a seeded ChaCha RNG, for reproducible hands.
    pub fn seeded(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Cards still in the deck, bottom first.
    pub fn remaining(&self) -> &[Card] {
        &self.cards
    }

    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.shuffle_with(&mut rng);
    }

    /// Uniform full-deck permutation with the given RNG.
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
        log::trace!("shuffled deck of {} cards", self.cards.len());
    }

    /// Remove and return the top card.
    ///
    /// ```
    /// use potsettle::deck::Deck;
    ///
    /// let mut deck = Deck::seeded(7);
    /// let card = deck.deal_card().unwrap();
    /// assert_eq!(deck.len(), 51);
    /// assert!(!deck.remaining().contains(&card));
    /// ```
    pub fn deal_card(&mut self) -> Result<Card, DeckError> {
        self.cards.pop().ok_or(DeckError::Exhausted { requested: 1, remaining: 0 })
    }

    /// Deal `n` cards from the top. Fails without removing anything if fewer remain.
    pub fn deal_n(&mut self, n: usize) -> Result<Vec<Card>, DeckError> {
        let remaining = self.cards.len();
        if n > remaining {
            return Err(DeckError::Exhausted { requested: n, remaining });
        }
        let mut dealt = self.cards.split_off(remaining - n);
        dealt.reverse();
        Ok(dealt)
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}
