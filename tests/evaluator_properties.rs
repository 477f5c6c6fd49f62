use potsettle::cards::{Card, Rank, Suit};
use potsettle::deck::Deck;
use potsettle::evaluator::{evaluate_five, evaluate_seven};
use potsettle::hand::Category;
use proptest::prelude::*;
use std::cmp::Ordering;

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    prop::sample::subsequence(Deck::standard().remaining().to_vec(), n).prop_shuffle()
}

fn seven() -> impl Strategy<Value = [Card; 7]> {
    distinct_cards(7).prop_map(|v| [v[0], v[1], v[2], v[3], v[4], v[5], v[6]])
}

fn five() -> impl Strategy<Value = [Card; 5]> {
    distinct_cards(5).prop_map(|v| [v[0], v[1], v[2], v[3], v[4]])
}

fn rank(v: u8) -> Rank {
    Rank::from_value(v).expect("rank in 2..=14")
}

fn straight_cards(top: u8) -> [Card; 5] {
    let values = if top == 5 { [14, 2, 3, 4, 5] } else { [top - 4, top - 3, top - 2, top - 1, top] };
    let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
    let mut out = [Card::new(Rank::Two, Suit::Clubs); 5];
    for (slot, (v, s)) in out.iter_mut().zip(values.into_iter().zip(suits)) {
        *slot = Card::new(rank(v), s);
    }
    out
}

proptest! {
    #[test]
    fn seven_card_result_is_the_best_five(cards in seven()) {
        let best = evaluate_seven(&cards);
        for skip_a in 0..7 {
            for skip_b in (skip_a + 1)..7 {
                let subset: Vec<Card> = cards
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| *i != skip_a && *i != skip_b)
                    .map(|(_, c)| *c)
                    .collect();
                let hand = evaluate_five(&[subset[0], subset[1], subset[2], subset[3], subset[4]]);
                prop_assert!(hand <= best, "{hand} beats {best}");
            }
        }
    }

    #[test]
    fn chosen_cards_come_from_the_input(cards in seven()) {
        let best = evaluate_seven(&cards);
        for c in best.cards() {
            prop_assert!(cards.contains(c));
        }
        prop_assert_eq!(best.kickers().len(), best.category().kicker_arity());
    }

    #[test]
    fn seven_card_result_ignores_input_order(cards in seven(), rot in 0usize..7) {
        let mut rotated = cards;
        rotated.rotate_left(rot);
        let a = evaluate_seven(&cards);
        let b = evaluate_seven(&rotated);
        prop_assert_eq!(a.cmp(&b), Ordering::Equal);
    }

    #[test]
    fn ordering_is_antisymmetric_and_consistent(a in five(), b in five()) {
        let ha = evaluate_five(&a);
        let hb = evaluate_five(&b);
        prop_assert_eq!(ha.cmp(&hb), hb.cmp(&ha).reverse());
        prop_assert_eq!(ha.cmp(&hb) == Ordering::Equal, ha.is_equal_to(&hb));
        if ha.category() != hb.category() {
            prop_assert_eq!(ha.cmp(&hb), ha.category().cmp(&hb.category()));
        }
    }

    #[test]
    fn ordering_is_transitive(a in five(), b in five(), c in five()) {
        let mut hands = [evaluate_five(&a), evaluate_five(&b), evaluate_five(&c)];
        hands.sort();
        prop_assert!(hands[0] <= hands[2]);
        prop_assert!(hands[0] <= hands[1] && hands[1] <= hands[2]);
    }

    #[test]
    fn higher_straights_win(top_a in 5u8..=14, top_b in 5u8..=14) {
        let a = evaluate_five(&straight_cards(top_a));
        let b = evaluate_five(&straight_cards(top_b));
        prop_assert_eq!(a.category(), Category::Straight);
        prop_assert_eq!(a.kickers(), &[rank(top_a)]);
        prop_assert_eq!(a.cmp(&b), top_a.cmp(&top_b));
    }

    #[test]
    fn flush_kickers_compare_high_to_low(ranks in prop::sample::subsequence((2u8..=14).collect::<Vec<_>>(), 5)) {
        let cards: Vec<Card> = ranks.iter().map(|&v| Card::new(rank(v), Suit::Hearts)).collect();
        let hand = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
        prop_assert!(hand.category() >= Category::Flush);
        let kickers = hand.kickers();
        prop_assert!(kickers.windows(2).all(|w| w[0] >= w[1]));
    }
}
