use crate::cards::{Card, Rank};
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Number of kicker values that break ties within this category.
    pub const fn kicker_arity(self) -> usize {
        match self {
            Category::HighCard | Category::Flush => 5,
            Category::Pair => 4,
            Category::TwoPair | Category::ThreeOfAKind => 3,
            Category::FullHouse | Category::FourOfAKind => 2,
            Category::Straight | Category::StraightFlush => 1,
            Category::RoyalFlush => 0,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An evaluated five-card hand.
///
/// Ordering compares the category first, then the kickers in order of significance.
/// Suits never participate, so two hands with different cards can be equal (a split).
#[derive(Debug, Clone)]
pub struct Hand {
    category: Category,
    cards: [Card; 5],
    kickers: Vec<Rank>,
}

impl Hand {
    /// Build a hand from its parts. `kickers` must hold exactly
    /// [`Category::kicker_arity`] ranks, most significant first.
    pub(crate) fn new(category: Category, cards: [Card; 5], kickers: Vec<Rank>) -> Self {
        debug_assert_eq!(kickers.len(), category.kicker_arity());
        Self { category, cards, kickers }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    /// The five cards making up the hand, highest rank first.
    pub fn cards(&self) -> &[Card; 5] {
        &self.cards
    }

    pub fn kickers(&self) -> &[Rank] {
        &self.kickers
    }

    /// True when neither hand beats the other.
    pub fn is_equal_to(&self, other: &Hand) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.category.cmp(&other.category).then_with(|| {
            self.kickers
                .iter()
                .zip(other.kickers.iter())
                .map(|(a, b)| a.cmp(b))
                .find(|o| *o != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        })
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.is_equal_to(other)
    }
}

impl Eq for Hand {}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.category)?;
        for (i, c) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{c}")?;
        }
        f.write_str("]")
    }
}
