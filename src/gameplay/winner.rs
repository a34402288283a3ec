use crate::Chips;

/// A payout from one pot layer to one player.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Winner<P> {
    player: P,
    amount: Chips,
}

impl<P> Winner<P> {
    pub fn new(player: P, amount: Chips) -> Self {
        Self { player, amount }
    }
    pub fn player(&self) -> &P {
        &self.player
    }
    pub fn amount(&self) -> Chips {
        self.amount
    }
}

/// (player, amount) isomorphism
impl<P> From<(P, Chips)> for Winner<P> {
    fn from((player, amount): (P, Chips)) -> Self {
        Self::new(player, amount)
    }
}
impl<P> From<Winner<P>> for (P, Chips) {
    fn from(winner: Winner<P>) -> Self {
        (winner.player, winner.amount)
    }
}

impl<P: std::fmt::Debug> std::fmt::Display for Winner<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:?} +{}", self.player, self.amount)
    }
}
