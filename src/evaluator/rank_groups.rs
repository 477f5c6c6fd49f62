use crate::cards::{Card, Rank};

/// How the five ranks of a hand group together, ignoring suits and sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Shape {
    Quads { quad: Rank, kicker: Rank },
    FullHouse { trips: Rank, pair: Rank },
    Trips { trips: Rank, kickers: [Rank; 2] },
    TwoPair { high: Rank, low: Rank, kicker: Rank },
    Pair { pair: Rank, kickers: [Rank; 3] },
    Distinct([Rank; 5]),
}

/// Ranks grouped by frequency, sorted by (count desc, rank desc).
///
/// Example: AAAKQ groups as [(Ace, 3), (King, 1), (Queen, 1)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RankGroups {
    groups: Vec<(Rank, u8)>,
}

impl RankGroups {
    pub(crate) fn from_cards(cards: &[Card]) -> Self {
        let mut counts = [0u8; 15];
        for c in cards {
            counts[c.value() as usize] += 1;
        }
        let mut groups: Vec<(Rank, u8)> = Rank::ALL
            .iter()
            .copied()
            .filter(|r| counts[r.value() as usize] > 0)
            .map(|r| (r, counts[r.value() as usize]))
            .collect();
        groups.sort_by(|a, b| b.1.cmp(&a.1).then(b.0.cmp(&a.0)));
        Self { groups }
    }

    /// Number of distinct ranks.
    pub(crate) fn distinct(&self) -> usize {
        self.groups.len()
    }

    pub(crate) fn shape(&self) -> Shape {
        match self.groups.as_slice() {
            [(quad, 4), (kicker, 1)] => Shape::Quads { quad: *quad, kicker: *kicker },
            [(trips, 3), (pair, 2)] => Shape::FullHouse { trips: *trips, pair: *pair },
            [(trips, 3), (a, 1), (b, 1)] => Shape::Trips { trips: *trips, kickers: [*a, *b] },
            [(high, 2), (low, 2), (kicker, 1)] => {
                Shape::TwoPair { high: *high, low: *low, kicker: *kicker }
            }
            [(pair, 2), (a, 1), (b, 1), (c, 1)] => {
                Shape::Pair { pair: *pair, kickers: [*a, *b, *c] }
            }
            [(a, 1), (b, 1), (c, 1), (d, 1), (e, 1)] => Shape::Distinct([*a, *b, *c, *d, *e]),
            // Five of one rank can only come from duplicated input cards.
            [(quad, _), rest @ ..] => Shape::Quads {
                quad: *quad,
                kicker: rest.first().map(|(r, _)| *r).unwrap_or(*quad),
            },
            [] => Shape::Distinct([Rank::Two; 5]),
        }
    }
}
