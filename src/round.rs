use crate::Chips;

/// Betting state of one phase (pre-flop, flop, turn or river).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BettingRound {
    /// The bet every player still acting has to match.
    pub current_bet: Chips,
    /// All chips committed this hand. Carries across phases.
    pub pot: Chips,
    /// Size of the last full bet or raise this round; 0 before anyone has raised.
    pub last_raise: Chips,
    /// Voluntary actions taken this round.
    pub acted: u32,
    pub is_complete: bool,
}

impl BettingRound {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move to the next phase: bets and raise sizes start over, the pot stays.
    pub fn reset_for_new_round(&mut self) {
        *self = Self { pot: self.pot, ..Self::default() };
    }

    /// Start a new hand with an empty pot.
    pub fn reset_for_new_hand(&mut self) {
        *self = Self::default();
    }
}
