use crate::Chips;

/// What a betting action does to the pot.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Ord, PartialOrd)]
pub enum Kind {
    PostSmallBlind,
    PostBigBlind,
    Fold,
    Check,
    Call,
    Bet,
    Raise,
    AllIn,
}

impl Kind {
    /// True if this kind moves no chips.
    pub fn is_passive(&self) -> bool {
        matches!(self, Kind::Fold | Kind::Check)
    }
    /// True if this kind caps the player's contribution.
    pub fn is_shove(&self) -> bool {
        matches!(self, Kind::AllIn)
    }
    pub fn label(&self) -> &'static str {
        match self {
            Kind::PostSmallBlind => "SmallBlind",
            Kind::PostBigBlind => "BigBlind",
            Kind::Fold => "Fold",
            Kind::Check => "Check",
            Kind::Call => "Call",
            Kind::Bet => "Bet",
            Kind::Raise => "Raise",
            Kind::AllIn => "AllIn",
        }
    }
}

/// One betting action as reported by the engine.
///
/// `amount` is the number of chips this action adds to the player's
/// contribution for the hand, so a raise to 6 over a posted 2 is
/// `Raise` with amount 4. Passive kinds carry zero.
#[derive(Debug, Clone, Eq, Hash, PartialEq)]
pub struct Action<P> {
    player: P,
    kind: Kind,
    amount: Chips,
}

impl<P> Action<P> {
    pub fn new(player: P, kind: Kind, amount: Chips) -> Self {
        Self {
            player,
            kind,
            amount,
        }
    }
    pub fn small_blind(player: P, amount: Chips) -> Self {
        Self::new(player, Kind::PostSmallBlind, amount)
    }
    pub fn big_blind(player: P, amount: Chips) -> Self {
        Self::new(player, Kind::PostBigBlind, amount)
    }
    pub fn fold(player: P) -> Self {
        Self::new(player, Kind::Fold, 0)
    }
    pub fn check(player: P) -> Self {
        Self::new(player, Kind::Check, 0)
    }
    pub fn call(player: P, amount: Chips) -> Self {
        Self::new(player, Kind::Call, amount)
    }
    pub fn bet(player: P, amount: Chips) -> Self {
        Self::new(player, Kind::Bet, amount)
    }
    pub fn raise(player: P, amount: Chips) -> Self {
        Self::new(player, Kind::Raise, amount)
    }
    pub fn shove(player: P, amount: Chips) -> Self {
        Self::new(player, Kind::AllIn, amount)
    }

    pub fn player(&self) -> &P {
        &self.player
    }
    pub fn kind(&self) -> Kind {
        self.kind
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
}

impl<P: std::fmt::Debug> std::fmt::Display for Action<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.kind.is_passive() {
            true => write!(f, "{} {:?}", self.kind.label(), self.player),
            false => write!(f, "{} {:?}:{}", self.kind.label(), self.player, self.amount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passive_kinds_carry_nothing() {
        assert!(Action::fold("P0").amount() == 0);
        assert!(Action::check("P0").amount() == 0);
        assert!(Kind::Fold.is_passive());
        assert!(!Kind::Call.is_passive());
    }

    #[test]
    fn display() {
        assert!(Action::raise("P0", 4).to_string() == "Raise \"P0\":4");
        assert!(Action::fold(3usize).to_string() == "Fold 3");
    }
}
