//! Legality rules for player actions.
//!
//! Validation never mutates anything; a rejection carries the reason so the table
//! driver can re-prompt the player.

use crate::betting::BettingService;
use crate::player::Player;
use crate::round::BettingRound;
use crate::Chips;
use std::fmt;

/// A requested betting action. Raises name the total bet the player wants to reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Fold,
    Check,
    Call,
    RaiseTo(Chips),
    AllIn,
}

impl Action {
    pub const fn kind(self) -> ActionKind {
        match self {
            Action::Fold => ActionKind::Fold,
            Action::Check => ActionKind::Check,
            Action::Call => ActionKind::Call,
            Action::RaiseTo(_) => ActionKind::Raise,
            Action::AllIn => ActionKind::AllIn,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::RaiseTo(target) => write!(f, "Raise to {target}"),
            other => f.write_str(other.kind().label()),
        }
    }
}

/// Action without its amount, as offered to a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ActionKind {
    Fold,
    Check,
    Call,
    Raise,
    AllIn,
}

impl ActionKind {
    pub const fn label(self) -> &'static str {
        match self {
            ActionKind::Fold => "Fold",
            ActionKind::Check => "Check",
            ActionKind::Call => "Call",
            ActionKind::Raise => "Raise",
            ActionKind::AllIn => "All-in",
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ActionError {
    #[error("player has folded")]
    PlayerFolded,
    #[error("player is already all-in")]
    PlayerAllIn,
    #[error("player has no chips")]
    NoChips,
    #[error("cannot check facing a bet of {to_call}")]
    CannotCheck { to_call: Chips },
    #[error("nothing to call")]
    NothingToCall,
    #[error("insufficient chips: need {needed}, have {available}")]
    InsufficientChips { needed: Chips, available: Chips },
    #[error("raise too small: minimum {min}, got {got}")]
    RaiseTooSmall { min: Chips, got: Chips },
    #[error("raise too large: maximum {max}, got {got}")]
    RaiseTooLarge { max: Chips, got: Chips },
    #[error("no player in seat {0}")]
    NoSuchSeat(usize),
}

/// Inclusive bounds for a raise, as total bets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RaiseRange {
    pub min: Chips,
    pub max: Chips,
}

/// Stateless action checks; raise arithmetic comes from the [`BettingService`].
pub struct ActionValidator;

impl ActionValidator {
    /// Check `action` for `player` against the current round.
    ///
    /// ```
    /// use potsettle::betting::BettingService;
    /// use potsettle::config::TableConfig;
    /// use potsettle::player::Player;
    /// use potsettle::round::BettingRound;
    /// use potsettle::validator::{Action, ActionError, ActionValidator};
    ///
    /// let service = BettingService::new(TableConfig::new(10, 20).unwrap());
    /// let round = BettingRound { current_bet: 20, ..BettingRound::new() };
    /// let player = Player::new(500);
    ///
    /// assert!(ActionValidator::validate(&player, Action::Call, &round, &service).is_ok());
    /// assert_eq!(
    ///     ActionValidator::validate(&player, Action::RaiseTo(30), &round, &service),
    ///     Err(ActionError::RaiseTooSmall { min: 40, got: 30 })
    /// );
    /// ```
    pub fn validate(
        player: &Player,
        action: Action,
        round: &BettingRound,
        service: &BettingService,
    ) -> Result<(), ActionError> {
        Self::ensure_can_act(player)?;
        let to_call = round.current_bet - player.current_bet;
        match action {
            Action::Fold | Action::AllIn => Ok(()),
            Action::Check => {
                if to_call == 0 {
                    Ok(())
                } else {
                    Err(ActionError::CannotCheck { to_call })
                }
            }
            Action::Call => {
                if to_call <= 0 {
                    Err(ActionError::NothingToCall)
                } else if player.chips < to_call {
                    Err(ActionError::InsufficientChips { needed: to_call, available: player.chips })
                } else {
                    Ok(())
                }
            }
            Action::RaiseTo(target) => {
                let min = service.minimum_raise(round.current_bet, round.last_raise);
                // targets come from outside; anything at or below the bet is no raise at all
                if target <= round.current_bet {
                    return Err(ActionError::RaiseTooSmall { min, got: target });
                }
                let needed = target.saturating_sub(player.current_bet);
                if needed > player.chips {
                    return Err(ActionError::InsufficientChips { needed, available: player.chips });
                }
                if target < min {
                    return Err(ActionError::RaiseTooSmall { min, got: target });
                }
                let max = round.current_bet.saturating_add(player.chips);
                if target > max {
                    return Err(ActionError::RaiseTooLarge { max, got: target });
                }
                Ok(())
            }
        }
    }

    /// The actions `player` may legally choose right now. Empty when the player
    /// cannot act at all.
    pub fn available_actions(
        player: &Player,
        round: &BettingRound,
        service: &BettingService,
    ) -> Vec<ActionKind> {
        if Self::ensure_can_act(player).is_err() {
            return Vec::new();
        }
        let to_call = round.current_bet - player.current_bet;
        let mut out = vec![ActionKind::Fold];
        if to_call == 0 {
            out.push(ActionKind::Check);
        }
        if to_call > 0 && player.chips >= to_call {
            out.push(ActionKind::Call);
        }
        if Self::raise_range(player, round, service).is_some() {
            out.push(ActionKind::Raise);
        }
        out.push(ActionKind::AllIn);
        out
    }

    /// Total-bet bounds for a raise, or `None` if the player cannot afford a legal one.
    pub fn raise_range(
        player: &Player,
        round: &BettingRound,
        service: &BettingService,
    ) -> Option<RaiseRange> {
        Self::ensure_can_act(player).ok()?;
        let min = service.minimum_raise(round.current_bet, round.last_raise);
        let max = player
            .current_bet
            .saturating_add(player.chips)
            .min(round.current_bet.saturating_add(player.chips));
        (min <= max).then_some(RaiseRange { min, max })
    }

    fn ensure_can_act(player: &Player) -> Result<(), ActionError> {
        if player.folded {
            return Err(ActionError::PlayerFolded);
        }
        if player.all_in {
            return Err(ActionError::PlayerAllIn);
        }
        if player.chips <= 0 {
            return Err(ActionError::NoChips);
        }
        Ok(())
    }
}
