use super::action::Action;
use super::action::Kind;
use super::pot::Pot;
use super::seat::Seat;
use super::seat::State;
use super::showdown::Showdown;
use super::winner::Winner;
use crate::Chips;
use crate::Error;
use crate::Result;
use std::collections::HashMap;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

/// Side-pot accounting for one hand.
///
/// Ingests betting actions in order and keeps every player's running
/// contribution. After each action the pot is re-layered: the distinct
/// contributions of all-in players cut contribution space into bands
/// `(0, b1], (b1, b2], ..., (bk, inf)`, and each band collects what every
/// player (folded or not) put inside it.
///
/// Two invariants hold after every call to [`Ledger::apply`]:
/// the total equals the sum of contributions, and the pot sizes sum to
/// the total. Chips are never created or lost.
///
/// Not thread-safe; one ledger belongs to one hand in progress.
#[derive(Debug, Clone)]
pub struct Ledger<P> {
    seats: Vec<Seat<P>>,
    index: HashMap<P, usize>,
    pots: Vec<Pot<P>>,
}

impl<P> Ledger<P>
where
    P: Clone + Eq + Hash + Debug,
{
    /// Seat the roster in table order.
    pub fn new(players: impl IntoIterator<Item = P>) -> Result<Self> {
        let seats = players.into_iter().map(Seat::new).collect::<Vec<_>>();
        if seats.is_empty() {
            return Err(Error::InvalidConfiguration("empty roster".into()));
        }
        let mut index = HashMap::with_capacity(seats.len());
        for (i, seat) in seats.iter().enumerate() {
            if index.insert(seat.player().clone(), i).is_some() {
                return Err(Error::InvalidConfiguration(format!(
                    "{:?} seated twice",
                    seat.player()
                )));
            }
        }
        let mut ledger = Self {
            seats,
            index,
            pots: Vec::new(),
        };
        ledger.relayer();
        Ok(ledger)
    }

    /// Record one action and re-layer the pot before returning.
    ///
    /// The ledger is untouched if the action is rejected.
    pub fn apply(&mut self, action: Action<P>) -> Result<()> {
        let i = self.seat(action.player())?;
        let seat = &self.seats[i];
        let illegal = |reason: &str| Error::IllegalAction {
            player: format!("{:?}", action.player()),
            reason: reason.to_string(),
        };
        match (action.kind(), seat.state()) {
            (kind, _) if kind.is_passive() && action.amount() > 0 => {
                return Err(illegal("fold and check move no chips"));
            }
            (Kind::Fold, State::Shoving) => return Err(illegal("all-in players cannot fold")),
            (Kind::Fold, _) => self.seats[i].reset(State::Folding),
            (Kind::Check, _) => {}
            (_, State::Folding) => return Err(illegal("folded players cannot put chips in")),
            (_, State::Shoving) => return Err(illegal("all-in players cannot put chips in")),
            (kind, State::Betting) => {
                self.total()
                    .checked_add(action.amount())
                    .ok_or_else(|| illegal("pot total overflows"))?;
                self.seats[i]
                    .commit(action.amount())
                    .ok_or_else(|| illegal("contribution overflows"))?;
                if kind.is_shove() {
                    self.seats[i].reset(State::Shoving);
                }
            }
        }
        self.relayer();
        log::trace!("{:<32}{:<16}", action.to_string(), self.total());
        Ok(())
    }

    /// Pay out every non-empty layer to its best eligible hands.
    ///
    /// Ties split a layer evenly; leftover chips go one at a time to the
    /// tied players in seat order. Winners come out in ascending layer
    /// order, and within a layer in seat order.
    pub fn winners<S: Ord>(&self, strengths: &HashMap<P, S>) -> Result<Vec<Winner<P>>> {
        Showdown::from((self, strengths)).settle()
    }

    /// Sum of all contributions.
    pub fn total(&self) -> Chips {
        self.seats.iter().map(Seat::stake).sum()
    }
    /// Number of non-empty layers, and at least one.
    pub fn pot_count(&self) -> usize {
        self.pots.len()
    }
    /// The non-empty layers in ascending order, or the single empty
    /// layer when nothing has been put in.
    pub fn pots(&self) -> &[Pot<P>] {
        &self.pots
    }
    pub fn contribution(&self, player: &P) -> Result<Chips> {
        Ok(self.seats[self.seat(player)?].stake())
    }
    pub fn is_folded(&self, player: &P) -> Result<bool> {
        Ok(self.seats[self.seat(player)?].state() == State::Folding)
    }
    pub fn is_capped(&self, player: &P) -> Result<bool> {
        Ok(self.seats[self.seat(player)?].state() == State::Shoving)
    }
    /// Highest contribution among players who can still bet.
    pub fn ceiling(&self) -> Chips {
        self.seats
            .iter()
            .filter(|s| s.state() == State::Betting)
            .map(Seat::stake)
            .max()
            .unwrap_or(0)
    }
    /// Sorted distinct caps of all-in players.
    pub fn boundaries(&self) -> Vec<Chips> {
        let mut caps = self
            .seats
            .iter()
            .filter(|s| s.state() == State::Shoving)
            .map(Seat::stake)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect::<Vec<_>>();
        caps.sort_unstable();
        caps
    }
    pub fn seats(&self) -> &[Seat<P>] {
        &self.seats
    }

    fn seat(&self, player: &P) -> Result<usize> {
        self.index
            .get(player)
            .copied()
            .ok_or_else(|| Error::UnknownPlayer(format!("{:?}", player)))
    }

    /// Rebuild the layers from scratch out of current contributions.
    fn relayer(&mut self) {
        let mut pots = Vec::new();
        let mut lower = 0;
        let uppers = self.boundaries().into_iter().map(Some).chain(std::iter::once(None));
        for upper in uppers {
            let band = Pot::<P>::new(lower, upper, 0, Vec::new());
            let size = self.seats.iter().map(|s| band.share(s.stake())).sum::<Chips>();
            if size > 0 {
                pots.push(Pot::new(lower, upper, size, self.eligible(lower)));
            }
            lower = upper.unwrap_or(lower);
        }
        if pots.is_empty() {
            pots.push(Pot::new(0, None, 0, self.eligible(0)));
        }
        self.pots = pots;
    }

    /// Players past `lower` who have not folded, in seat order.
    fn eligible(&self, lower: Chips) -> Vec<P> {
        self.seats
            .iter()
            .filter(|s| s.state().is_active())
            .filter(|s| s.stake() > lower)
            .map(|s| s.player().clone())
            .collect()
    }
}

impl<P: Debug> std::fmt::Display for Ledger<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "roster")?;
        for seat in self.seats.iter() {
            writeln!(f, "  {}", seat)?;
        }
        writeln!(f, "pots")?;
        for pot in self.pots.iter() {
            writeln!(f, "  {}", pot)?;
        }
        Ok(())
    }
}
