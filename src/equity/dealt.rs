use super::evaluator::Budget;
use super::evaluator::Evaluator;
use super::record::Equity;
use crate::Error;
use crate::Result;
use crate::cards::card::Card;
use crate::cards::deck::Deck;
use crate::cards::hand::Hand;
use crate::cards::hole::Hole;
use crate::cards::street::Street;
use rayon::prelude::*;

/// A fully dealt hand with its equity analysis precomputed.
///
/// Holds every seat's hole cards and the whole runout, plus one
/// [`Equity`] per street, seat and opponent count (1 up to one less than
/// the number of seats). Simulations replay the same deal many times
/// against different strategies, so the evaluator only runs once per deal.
#[derive(Debug, Clone, PartialEq)]
pub struct DealtHand {
    holes: Vec<Hole>,
    flop: Hand,
    turn: Card,
    river: Card,
    analysis: Vec<Equity>,
}

impl DealtHand {
    /// Most seats a single deck can serve with a full board.
    pub const MAX_SEATS: usize = (52 - 5) / 2;

    /// Deal `seats` random holes and a runout, then analyse every
    /// (street, seat, opponents) combination in parallel.
    pub fn deal<E: Evaluator>(seats: usize, evaluator: &E, budget: &Budget) -> Result<Self> {
        if !(2..=Self::MAX_SEATS).contains(&seats) {
            return Err(Error::InvalidConfiguration(format!(
                "cannot deal {} seats, need 2 to {}",
                seats,
                Self::MAX_SEATS
            )));
        }
        let ref mut deck = Deck::new();
        let exhausted = || Error::InvalidConfiguration("deck ran out".into());
        let holes = (0..seats)
            .map(|_| deck.hole().ok_or_else(exhausted))
            .collect::<Result<Vec<_>>>()?;
        let flop = deck.deal(3);
        let turn = deck.draw().ok_or_else(exhausted)?;
        let river = deck.draw().ok_or_else(exhausted)?;
        let mut dealt = Self {
            holes,
            flop,
            turn,
            river,
            analysis: Vec::new(),
        };
        dealt.analysis = dealt
            .grid()
            .into_par_iter()
            .map(|(street, seat, opponents)| {
                let pockets = Hand::from(dealt.holes[seat]);
                let board = dealt.board(street);
                evaluator
                    .evaluate(pockets, board, opponents, budget)
                    .map_err(|e| Error::EvaluationFailed {
                        pockets: pockets.to_string(),
                        board: board.to_string(),
                        reason: format!("{:#}", e),
                    })
            })
            .collect::<Result<Vec<_>>>()?;
        log::debug!("{:<32}{:<16}", "dealt and analysed hand", dealt.analysis.len());
        Ok(dealt)
    }

    pub fn seats(&self) -> usize {
        self.holes.len()
    }
    pub fn hole(&self, seat: usize) -> Option<Hole> {
        self.holes.get(seat).copied()
    }
    /// Community cards visible on `street`.
    pub fn board(&self, street: Street) -> Hand {
        match street {
            Street::Pref => Hand::empty(),
            Street::Flop => self.flop,
            Street::Turn => Hand::add(self.flop, Hand::from(self.turn)),
            Street::Rive => Hand::add(
                Hand::add(self.flop, Hand::from(self.turn)),
                Hand::from(self.river),
            ),
        }
    }
    /// Precomputed equity of `seat` against `opponents` on `street`.
    pub fn analysis(&self, seat: usize, opponents: usize, street: Street) -> Option<&Equity> {
        self.index(seat, opponents, street)
            .and_then(|i| self.analysis.get(i))
    }

    /// Every (street, seat, opponents) triple, in storage order.
    fn grid(&self) -> Vec<(Street, usize, usize)> {
        let seats = self.seats();
        Street::all()
            .iter()
            .flat_map(|street| (0..seats).map(move |seat| (*street, seat)))
            .flat_map(|(street, seat)| (1..seats).map(move |opponents| (street, seat, opponents)))
            .collect()
    }

    fn index(&self, seat: usize, opponents: usize, street: Street) -> Option<usize> {
        let seats = self.seats();
        if seat >= seats || opponents == 0 || opponents >= seats {
            return None;
        }
        Some((street as usize * seats + seat) * (seats - 1) + opponents - 1)
    }
}
