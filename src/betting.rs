//! Forced bets, raise arithmetic, action application and round completion.

use crate::config::TableConfig;
use crate::player::Player;
use crate::round::BettingRound;
use crate::validator::{Action, ActionError, ActionValidator};
use crate::Chips;

/// What an applied action did to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionOutcome {
    pub seat: usize,
    pub action: Action,
    /// Chips moved from the player's stack into the pot.
    pub committed: Chips,
    /// The bet to match went up.
    pub raised: bool,
    /// The raise was at least a full raise and reopened the action.
    pub reopened: bool,
    /// The round is complete after this action.
    pub round_complete: bool,
}

/// Betting rules of one table. Holds no per-hand state: every call borrows the
/// driver's players and round, mutates them and returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BettingService {
    config: TableConfig,
}

impl BettingService {
    pub fn new(config: TableConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    pub fn big_blind(&self) -> Chips {
        self.config.big_blind()
    }

    /// Post the small blind, or the whole stack if it is shorter. Returns the amount posted.
    pub fn post_small_blind(&self, player: &mut Player, round: &mut BettingRound) -> Chips {
        let posted = self.post_blind(player, round, self.config.small_blind());
        log::debug!("small blind posted: {posted}");
        posted
    }

    /// Post the big blind and set the bet to match.
    pub fn post_big_blind(&self, player: &mut Player, round: &mut BettingRound) -> Chips {
        let posted = self.post_blind(player, round, self.config.big_blind());
        // a short big blind never lowers a larger posted small blind
        round.current_bet = round.current_bet.max(posted);
        log::debug!("big blind posted: {posted}, bet to match {}", round.current_bet);
        posted
    }

    fn post_blind(&self, player: &mut Player, round: &mut BettingRound, blind: Chips) -> Chips {
        let posted = player.commit(blind.min(player.chips));
        round.pot += posted;
        posted
    }

    /// Smallest legal total bet for a raise.
    ///
    /// ```
    /// use potsettle::betting::BettingService;
    /// use potsettle::config::TableConfig;
    ///
    /// let s = BettingService::new(TableConfig::new(10, 20).unwrap());
    /// assert_eq!(s.minimum_raise(20, 0), 40);
    /// assert_eq!(s.minimum_raise(40, 20), 60);
    /// ```
    pub fn minimum_raise(&self, current_bet: Chips, previous_raise: Chips) -> Chips {
        let increment = if previous_raise > 0 { previous_raise } else { self.big_blind() };
        current_bet.saturating_add(increment)
    }

    /// True once nobody still able to bet owes action: every non-folded player
    /// with chips who is not all-in has acted and matched the highest bet.
    /// All-in players never hold the round open; side pots settle their shortfall.
    pub fn is_betting_round_complete(&self, players: &[Player], round: &BettingRound) -> bool {
        let in_hand = players.iter().filter(|p| p.is_active());
        if in_hand.clone().count() <= 1 {
            return true;
        }
        let max_bet = in_hand.clone().map(|p| p.current_bet).max().unwrap_or(0);
        let done = in_hand
            .filter(|p| !p.all_in && p.chips > 0)
            .all(|p| p.has_acted && p.current_bet == max_bet);
        log::trace!("round at bet {} (max {max_bet}): complete={done}", round.current_bet);
        done
    }

    /// Validate `action` for the player in `seat` and, if legal, apply it.
    ///
    /// Nothing is mutated when the action is rejected.
    pub fn apply_action(
        &self,
        players: &mut [Player],
        seat: usize,
        action: Action,
        round: &mut BettingRound,
    ) -> Result<ActionOutcome, ActionError> {
        let player = players.get(seat).ok_or(ActionError::NoSuchSeat(seat))?;
        ActionValidator::validate(player, action, round, self)?;

        let to_call = player.amount_to_call(round.current_bet);
        let target = match action {
            Action::Fold | Action::Check => None,
            Action::Call => Some(player.current_bet + to_call),
            Action::RaiseTo(target) => Some(target),
            Action::AllIn => Some(player.current_bet.saturating_add(player.chips)),
        };

        let player = &mut players[seat];
        player.has_acted = true;
        if action == Action::Fold {
            player.folded = true;
        }
        let committed = match target {
            Some(total) => player.commit(total - player.current_bet),
            None => 0,
        };
        let new_bet = player.current_bet;
        round.pot += committed;
        round.acted += 1;

        let raised = new_bet > round.current_bet;
        let mut reopened = false;
        if raised {
            let increment = new_bet - round.current_bet;
            let full = self.minimum_raise(round.current_bet, round.last_raise) - round.current_bet;
            if increment >= full {
                round.last_raise = increment;
                reopened = true;
            }
            round.current_bet = new_bet;
        }
        if reopened {
            for (i, p) in players.iter_mut().enumerate() {
                if i != seat && p.can_act() {
                    p.has_acted = false;
                }
            }
        }
        round.is_complete = self.is_betting_round_complete(players, round);

        log::debug!(
            "seat {seat}: {action}, committed {committed}, bet to match {}, pot {}",
            round.current_bet,
            round.pot
        );
        Ok(ActionOutcome {
            seat,
            action,
            committed,
            raised,
            reopened,
            round_complete: round.is_complete,
        })
    }

    /// Close the current phase: bets go back to zero, the pot stays.
    pub fn start_next_round(&self, players: &mut [Player], round: &mut BettingRound) {
        for p in players.iter_mut() {
            p.reset_for_new_round();
        }
        round.reset_for_new_round();
    }
}
