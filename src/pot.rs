//! Side pots, showdown distribution and uncalled-bet refunds.
//!
//! Chips are conserved by every function here: whatever leaves the pot lands in
//! exactly one player's stack.

use crate::hand::Hand;
use crate::player::Player;
use crate::round::BettingRound;
use crate::Chips;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PotError {
    #[error("pot of {pot} has nobody left to award it to")]
    NoContenders { pot: Chips },
    #[error("pot {index} has no eligible player with an evaluated hand")]
    NoEvaluatedHand { index: usize },
    #[error("investments of {invested} exceed the pot of {pot}")]
    PotShortfall { invested: Chips, pot: Chips },
    #[error("seat {0} is not at the table")]
    UnknownSeat(usize),
    #[error("{remaining} players still contest the pot")]
    Contested { remaining: usize },
}

/// A slice of the pot and the seats that can win it. The first pot is the main pot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidePot {
    pub amount: Chips,
    /// Seat indices, ascending.
    pub eligible: Vec<usize>,
}

/// Chips handed to one seat from one pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Award {
    pub pot: usize,
    pub seat: usize,
    pub amount: Chips,
}

/// Uncalled excess given back to the only player who bet it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Refund {
    pub seat: usize,
    pub amount: Chips,
}

/// Everything that happened when a hand's pot was settled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settlement {
    pub refund: Option<Refund>,
    pub pots: Vec<SidePot>,
    pub awards: Vec<Award>,
}

impl Settlement {
    /// Total won by `seat` across all pots.
    pub fn won_by(&self, seat: usize) -> Chips {
        self.awards.iter().filter(|a| a.seat == seat).map(|a| a.amount).sum()
    }
}

fn contenders(players: &[Player]) -> Vec<usize> {
    players.iter().enumerate().filter(|(_, p)| p.is_active()).map(|(i, _)| i).collect()
}

/// Split `total_pot` into a main pot and side pots by all-in level.
///
/// Each distinct investment among players still in the hand closes a tier; a tier
/// is worth its height times the number of contenders who reached it. Chips not
/// covered by any tier, such as the bets of players who folded, go to the main pot.
///
/// ```
/// use potsettle::player::Player;
/// use potsettle::pot::calculate_side_pots;
///
/// let mut players = vec![Player::new(0), Player::new(0), Player::new(0)];
/// for (p, invested) in players.iter_mut().zip([50, 150, 150]) {
///     p.total_invested = invested;
/// }
/// let pots = calculate_side_pots(&players, 350).unwrap();
/// assert_eq!(pots.len(), 2);
/// assert_eq!((pots[0].amount, pots[0].eligible.clone()), (150, vec![0, 1, 2]));
/// assert_eq!((pots[1].amount, pots[1].eligible.clone()), (200, vec![1, 2]));
/// ```
pub fn calculate_side_pots(players: &[Player], total_pot: Chips) -> Result<Vec<SidePot>, PotError> {
    let in_hand = contenders(players);
    if in_hand.is_empty() {
        if total_pot == 0 {
            return Ok(Vec::new());
        }
        return Err(PotError::NoContenders { pot: total_pot });
    }

    let mut tiers: Vec<Chips> = in_hand
        .iter()
        .map(|&i| players[i].total_invested)
        .filter(|&invested| invested > 0)
        .collect();
    tiers.sort_unstable();
    tiers.dedup();

    let mut pots: Vec<SidePot> = Vec::with_capacity(tiers.len());
    let mut prev = 0;
    for tier in tiers {
        let eligible: Vec<usize> =
            in_hand.iter().copied().filter(|&i| players[i].total_invested >= tier).collect();
        pots.push(SidePot { amount: (tier - prev) * eligible.len() as Chips, eligible });
        prev = tier;
    }

    let covered: Chips = pots.iter().map(|p| p.amount).sum();
    if covered > total_pot {
        return Err(PotError::PotShortfall { invested: covered, pot: total_pot });
    }
    let remainder = total_pot - covered;
    if remainder > 0 {
        match pots.first_mut() {
            Some(main) => main.amount += remainder,
            None => pots.push(SidePot { amount: remainder, eligible: in_hand }),
        }
        log::debug!("{remainder} chips outside the all-in tiers added to the main pot");
    }
    log::debug!("side pots: {:?}", pots.iter().map(|p| p.amount).collect::<Vec<_>>());
    Ok(pots)
}

/// Award every pot to the best eligible hand, splitting ties.
///
/// `hands` is indexed by seat. A split gives each winner `amount / winners` and the
/// odd chips to the first winner in seat order. Stacks are credited only after every
/// pot has found a winner.
pub fn distribute_pot(
    players: &mut [Player],
    side_pots: &[SidePot],
    hands: &[Option<Hand>],
) -> Result<Vec<Award>, PotError> {
    let mut awards = Vec::new();
    for (index, pot) in side_pots.iter().enumerate() {
        if let Some(&seat) = pot.eligible.iter().find(|&&s| s >= players.len()) {
            return Err(PotError::UnknownSeat(seat));
        }
        let shown: Vec<(usize, &Hand)> = pot
            .eligible
            .iter()
            .filter_map(|&s| hands.get(s).and_then(Option::as_ref).map(|h| (s, h)))
            .collect();
        let Some(best) = shown.iter().map(|(_, h)| *h).max() else {
            return Err(PotError::NoEvaluatedHand { index });
        };
        let winners: Vec<usize> =
            shown.iter().filter(|(_, h)| h.is_equal_to(best)).map(|(s, _)| *s).collect();

        let count = winners.len() as Chips;
        let share = pot.amount / count;
        let odd = pot.amount % count;
        for (n, &seat) in winners.iter().enumerate() {
            let amount = if n == 0 { share + odd } else { share };
            awards.push(Award { pot: index, seat, amount });
        }
        log::debug!("pot {index} ({}) to seats {winners:?} with {best}", pot.amount);
    }

    for a in &awards {
        players[a.seat].chips += a.amount;
    }
    Ok(awards)
}

/// Return the part of the highest bet that nobody matched.
///
/// Only fires when a single player holds the highest current bet and someone still
/// in the hand bet less; that player gets back the gap to the second-highest bet.
/// A tie for the highest bet refunds nothing. Run this before
/// [`calculate_side_pots`] so the excess never forms a pot of its own.
pub fn return_uncalled_bets(players: &mut [Player]) -> Option<Refund> {
    let in_hand = contenders(players);
    let max_bet = in_hand.iter().map(|&i| players[i].current_bet).max()?;
    let mut leaders = in_hand.iter().copied().filter(|&i| players[i].current_bet == max_bet);
    let seat = leaders.next()?;
    if leaders.next().is_some() {
        return None;
    }
    let second = in_hand
        .iter()
        .map(|&i| players[i].current_bet)
        .filter(|&bet| bet < max_bet)
        .max()?;

    let amount = max_bet - second;
    players[seat].refund(amount);
    log::debug!("returned uncalled {amount} to seat {seat}");
    Some(Refund { seat, amount })
}

/// Settle a showdown: refund the uncalled excess, build side pots from the round's
/// pot and pay them out. On error nothing is modified.
pub fn settle_showdown(
    players: &mut [Player],
    round: &mut BettingRound,
    hands: &[Option<Hand>],
) -> Result<Settlement, PotError> {
    let mut work = players.to_vec();
    let refund = return_uncalled_bets(&mut work);
    let pot = round.pot - refund.map_or(0, |r| r.amount);
    let pots = calculate_side_pots(&work, pot)?;
    let awards = distribute_pot(&mut work, &pots, hands)?;

    players.clone_from_slice(&work);
    round.pot = 0;
    Ok(Settlement { refund, pots, awards })
}

/// Give the whole pot to the last player standing after everyone else folded.
///
/// Any uncalled part of that player's bet is still in the pot and comes back with
/// it, so no separate [`Refund`] is reported.
pub fn award_uncontested(
    players: &mut [Player],
    round: &mut BettingRound,
) -> Result<Settlement, PotError> {
    let in_hand = contenders(players);
    let [seat] = in_hand.as_slice() else {
        return Err(PotError::Contested { remaining: in_hand.len() });
    };
    let seat = *seat;
    let pot = SidePot { amount: round.pot, eligible: vec![seat] };
    let award = Award { pot: 0, seat, amount: round.pot };

    players[seat].chips += round.pot;
    round.pot = 0;
    log::debug!("seat {seat} wins {} uncontested", award.amount);
    Ok(Settlement { refund: None, pots: vec![pot], awards: vec![award] })
}

/// Chips at the table: every stack plus the pot. Bets already sit in the pot.
pub fn chip_total(players: &[Player], round: &BettingRound) -> Chips {
    players.iter().map(|p| p.chips).sum::<Chips>() + round.pot
}
