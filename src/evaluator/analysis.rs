use super::rank_groups::{RankGroups, Shape};
use crate::cards::{Card, Rank};
use crate::hand::{Category, Hand};

/// Facts about a five-card hand, computed once and then classified.
#[derive(Debug, Clone)]
pub(crate) struct HandAnalysis {
    sorted: [Card; 5],
    groups: RankGroups,
    flush: bool,
    /// Highest card of the straight, `Five` for the wheel; `None` without a straight.
    straight_top: Option<Rank>,
}

impl HandAnalysis {
    pub(crate) fn new(cards: &[Card; 5]) -> Self {
        let mut sorted = *cards;
        sorted.sort_by(|a, b| b.rank().cmp(&a.rank()).then(b.suit().cmp(&a.suit())));

        let groups = RankGroups::from_cards(&sorted);
        let flush = sorted.iter().all(|c| c.suit() == sorted[0].suit());
        let straight_top = straight_top(&sorted, &groups);

        Self { sorted, groups, flush, straight_top }
    }

    pub(crate) fn into_hand(self) -> Hand {
        let (category, kickers) = self.classify();
        Hand::new(category, self.presentation_order(), kickers)
    }

    fn classify(&self) -> (Category, Vec<Rank>) {
        match (self.flush, self.straight_top, self.groups.shape()) {
            (true, Some(Rank::Ace), _) if self.sorted[1].rank() == Rank::King => {
                (Category::RoyalFlush, Vec::new())
            }
            (true, Some(top), _) => (Category::StraightFlush, vec![top]),
            (_, _, Shape::Quads { quad, kicker }) => (Category::FourOfAKind, vec![quad, kicker]),
            (_, _, Shape::FullHouse { trips, pair }) => (Category::FullHouse, vec![trips, pair]),
            (true, None, _) => (Category::Flush, self.sorted.iter().map(|c| c.rank()).collect()),
            (false, Some(top), _) => (Category::Straight, vec![top]),
            (_, _, Shape::Trips { trips, kickers: [a, b] }) => {
                (Category::ThreeOfAKind, vec![trips, a, b])
            }
            (_, _, Shape::TwoPair { high, low, kicker }) => {
                (Category::TwoPair, vec![high, low, kicker])
            }
            (_, _, Shape::Pair { pair, kickers: [a, b, c] }) => (Category::Pair, vec![pair, a, b, c]),
            (_, _, Shape::Distinct(ranks)) => (Category::HighCard, ranks.to_vec()),
        }
    }

    /// Cards highest first, except that the wheel shows its ace last.
    fn presentation_order(&self) -> [Card; 5] {
        let mut cards = self.sorted;
        if self.straight_top == Some(Rank::Five) {
            cards.rotate_left(1);
        }
        cards
    }
}

fn straight_top(sorted: &[Card; 5], groups: &RankGroups) -> Option<Rank> {
    if groups.distinct() != 5 {
        return None;
    }
    let high = sorted[0].value();
    let low = sorted[4].value();
    if high - low == 4 {
        return Some(sorted[0].rank());
    }
    // A-5-4-3-2: the ace plays low
    if high == Rank::Ace.value() && sorted[1].rank() == Rank::Five && low == Rank::Two.value() {
        return Some(Rank::Five);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn analyze(s: &str) -> HandAnalysis {
        let v = parse_cards(s).unwrap();
        HandAnalysis::new(&[v[0], v[1], v[2], v[3], v[4]])
    }

    #[test]
    fn wheel_tops_at_five() {
        let a = analyze("Ac 2d 3h 4s 5c");
        assert_eq!(a.straight_top, Some(Rank::Five));
        let hand = a.into_hand();
        assert_eq!(hand.category(), Category::Straight);
        assert_eq!(hand.cards()[4].rank(), Rank::Ace);
    }

    #[test]
    fn paired_board_is_not_a_straight() {
        assert_eq!(analyze("9c 8d 8h 7s 6c").straight_top, None);
    }

    #[test]
    fn broadway_flush_is_royal() {
        let (category, kickers) = analyze("Ts Js Qs Ks As").classify();
        assert_eq!(category, Category::RoyalFlush);
        assert!(kickers.is_empty());
    }

    #[test]
    fn steel_wheel_is_a_five_high_straight_flush() {
        let (category, kickers) = analyze("Ah 2h 3h 4h 5h").classify();
        assert_eq!(category, Category::StraightFlush);
        assert_eq!(kickers, vec![Rank::Five]);
    }

    #[test]
    fn kicker_arity_matches_category() {
        for s in [
            "Ac Td 7h 5s 2c",
            "Ac Ad 7h 5s 2c",
            "Ac Ad 7h 7s 2c",
            "Ac Ad Ah 5s 2c",
            "9c Td Jh Qs Kc",
            "Ac Tc 7c 5c 2c",
            "Ac Ad Ah 5s 5c",
            "Ac Ad Ah As 2c",
            "9c Tc Jc Qc Kc",
            "Tc Jc Qc Kc Ac",
        ] {
            let (category, kickers) = analyze(s).classify();
            assert_eq!(kickers.len(), category.kicker_arity(), "{s}");
        }
    }
}
