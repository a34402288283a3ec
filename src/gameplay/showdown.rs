use super::ledger::Ledger;
use super::pot::Pot;
use super::winner::Winner;
use crate::Chips;
use crate::Error;
use crate::Result;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// Awards each pot layer of a finished hand.
///
/// Layers are settled independently, lowest first. Within a layer the
/// eligible players with the maximal strength split the chips evenly and
/// any remainder goes one chip at a time to them in seat order. Strength
/// is any total order; only eligible players need an entry.
pub struct Showdown<'a, P, S> {
    ledger: &'a Ledger<P>,
    strengths: &'a HashMap<P, S>,
}

impl<'a, P, S> From<(&'a Ledger<P>, &'a HashMap<P, S>)> for Showdown<'a, P, S> {
    fn from((ledger, strengths): (&'a Ledger<P>, &'a HashMap<P, S>)) -> Self {
        Self { ledger, strengths }
    }
}

impl<'a, P, S> Showdown<'a, P, S>
where
    P: Clone + Eq + Hash + Debug,
    S: Ord,
{
    pub fn settle(self) -> Result<Vec<Winner<P>>> {
        let mut winners = Vec::new();
        for pot in self.ledger.pots().iter().filter(|pot| !pot.is_empty()) {
            winners.extend(self.distribute(pot)?);
        }
        Ok(winners)
    }

    fn distribute(&self, pot: &Pot<P>) -> Result<Vec<Winner<P>>> {
        let best = self.best(pot)?;
        let n = best.len() as Chips;
        let share = pot.size() / n;
        let bonus = pot.size() % n;
        let winners = best
            .into_iter()
            .enumerate()
            .map(|(i, player)| (player, share + Chips::from((i as Chips) < bonus)))
            .filter(|(_, amount)| *amount > 0)
            .map(Winner::from)
            .inspect(|winner| log::debug!("{:<32}{:<16}", pot.to_string(), winner.to_string()))
            .collect();
        Ok(winners)
    }

    /// Eligible players tied for the top strength, in seat order.
    fn best(&self, pot: &Pot<P>) -> Result<Vec<P>> {
        let ranked = pot
            .eligible()
            .iter()
            .map(|player| {
                self.strengths
                    .get(player)
                    .map(|strength| (player, strength))
                    .ok_or_else(|| Error::MissingStrength(format!("{:?}", player)))
            })
            .collect::<Result<Vec<_>>>()?;
        let top = ranked
            .iter()
            .map(|(_, strength)| *strength)
            .max()
            .ok_or_else(|| self.orphaned(pot))?;
        Ok(ranked
            .into_iter()
            .filter(|(_, strength)| *strength == top)
            .map(|(player, _)| player.clone())
            .collect())
    }

    fn orphaned(&self, pot: &Pot<P>) -> Error {
        Error::InconsistentLayer {
            lower: pot.lower(),
            upper: pot.ceiling(),
            size: pot.size(),
            context: self.ledger.to_string(),
        }
    }
}
