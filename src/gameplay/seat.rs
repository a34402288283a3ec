use crate::Chips;

/// Whether a seat can still put chips in and still contest the pot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Betting,
    Shoving,
    Folding,
}

impl State {
    /// True if the player is still competing for the pot.
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Betting | Self::Shoving)
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            State::Betting => write!(f, "P"),
            State::Shoving => write!(f, "S"),
            State::Folding => write!(f, "F"),
        }
    }
}

/// One player's standing in the current hand.
#[derive(Debug, Clone)]
pub struct Seat<P> {
    player: P,
    stake: Chips,
    state: State,
}

impl<P> Seat<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            stake: 0,
            state: State::Betting,
        }
    }
    pub fn player(&self) -> &P {
        &self.player
    }
    /// Total chips committed this hand.
    pub fn stake(&self) -> Chips {
        self.stake
    }
    pub fn state(&self) -> State {
        self.state
    }
    pub(crate) fn commit(&mut self, chips: Chips) -> Option<Chips> {
        self.stake = self.stake.checked_add(chips)?;
        Some(self.stake)
    }
    pub(crate) fn reset(&mut self, state: State) {
        self.state = state;
    }
}

impl<P: std::fmt::Debug> std::fmt::Display for Seat<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<12}{:>8} {}", format!("{:?}", self.player), self.stake, self.state)
    }
}
