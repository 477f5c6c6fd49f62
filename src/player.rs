use crate::board::HoleCards;
use crate::Chips;

/// The settlement-relevant state of one seated player.
///
/// The table driver owns these records and lends them to the betting and pot
/// functions one call at a time. A player's identity inside this crate is its
/// index in the slice the driver passes in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Player {
    /// Chips behind, not yet committed to the pot.
    pub chips: Chips,
    /// Chips committed during the current betting round.
    pub current_bet: Chips,
    /// Chips committed over the whole hand, blinds included.
    pub total_invested: Chips,
    pub folded: bool,
    pub all_in: bool,
    pub has_acted: bool,
    pub hole: Option<HoleCards>,
}

impl Player {
    pub fn new(chips: Chips) -> Self {
        Self { chips, ..Self::default() }
    }

    /// Clear everything that belongs to the previous hand. The stack is kept.
    pub fn reset_for_new_hand(&mut self) {
        self.current_bet = 0;
        self.total_invested = 0;
        self.folded = false;
        self.all_in = false;
        self.has_acted = false;
        self.hole = None;
    }

    /// Start a new betting round (flop, turn or river).
    pub fn reset_for_new_round(&mut self) {
        self.current_bet = 0;
        self.has_acted = false;
    }

    /// Still contesting the pot, all-in or not.
    pub fn is_active(&self) -> bool {
        !self.folded
    }

    /// Can still make betting decisions.
    pub fn can_act(&self) -> bool {
        !self.folded && !self.all_in && self.chips > 0
    }

    /// Amount needed to match `bet_to_match`.
    pub fn amount_to_call(&self, bet_to_match: Chips) -> Chips {
        (bet_to_match - self.current_bet).max(0)
    }

    /// Move up to `amount` chips from the stack into the current bet.
    /// Returns what was actually committed; emptying the stack marks the player all-in.
    pub(crate) fn commit(&mut self, amount: Chips) -> Chips {
        let paid = amount.clamp(0, self.chips);
        self.chips -= paid;
        self.current_bet += paid;
        self.total_invested += paid;
        if self.chips == 0 && paid > 0 {
            self.all_in = true;
        }
        paid
    }

    /// Give back `amount` of the current bet (an uncalled excess).
    pub(crate) fn refund(&mut self, amount: Chips) {
        self.chips += amount;
        self.current_bet -= amount;
        self.total_invested -= amount;
        if self.chips > 0 {
            self.all_in = false;
        }
    }
}
