use super::card::Card;
use super::deck::Deck;
use super::hand::Hand;
use super::street::Street;
use crate::Arbitrary;

/// A (pockets, board) pair: what one player can see at a decision point.
///
/// Both sides are stored as [`Hand`] masks, so dealing order is not
/// preserved. A valid observation has exactly two pocket cards, a board of
/// 0, 3, 4 or 5 cards, and no card on both sides.
#[derive(Copy, Clone, Hash, Eq, PartialEq, Debug, PartialOrd, Ord)]
pub struct Observation {
    pocket: Hand,
    public: Hand,
}

impl Observation {
    /// Assemble without validation. Only for images of already valid
    /// observations, where the invariants carry over.
    pub(crate) fn new(pocket: Hand, public: Hand) -> Self {
        debug_assert!(!pocket.overlaps(&public));
        Self { pocket, public }
    }
    pub fn pocket(&self) -> &Hand {
        &self.pocket
    }
    pub fn public(&self) -> &Hand {
        &self.public
    }
    pub fn street(&self) -> Option<Street> {
        Street::try_from(self.public.size()).ok()
    }
    /// Pockets and board named by a query, unvalidated.
    ///
    /// Either side of a `~` separator, or else the first two cards are
    /// the pockets and any remaining cards the board.
    pub fn split(s: &str) -> Result<(Hand, Hand), String> {
        match s.split_once('~') {
            Some((pocket, public)) => Ok((Hand::try_from(pocket)?, Hand::try_from(public)?)),
            None => {
                let cards = Card::parse(s)?;
                let n = cards.len().min(2);
                let pocket = Hand::from(cards[..n].to_vec());
                let public = Hand::from(cards[n..].to_vec());
                match pocket.size() + public.size() == cards.len() && !pocket.overlaps(&public) {
                    true => Ok((pocket, public)),
                    false => Err(format!("duplicate card in {:?}", s)),
                }
            }
        }
    }
}

/// assemble Observation from private + public Hands
impl TryFrom<(Hand, Hand)> for Observation {
    type Error = String;
    fn try_from((pocket, public): (Hand, Hand)) -> Result<Self, Self::Error> {
        if pocket.size() != 2 {
            return Err(format!("pockets {} must hold 2 cards", pocket));
        }
        if Street::try_from(public.size()).is_err() {
            return Err(format!("board {} must hold 0, 3, 4 or 5 cards", public));
        }
        if pocket.overlaps(&public) {
            return Err(format!("pockets {} overlap board {}", pocket, public));
        }
        Ok(Self { pocket, public })
    }
}

/// coalesce public + private cards into single Hand
impl From<Observation> for Hand {
    fn from(observation: Observation) -> Self {
        Self::add(observation.pocket, observation.public)
    }
}

/// "AsKs ~ 2c3d4h", "As Ks 2c 3d 4h", or just "AsKs" for preflop
impl TryFrom<&str> for Observation {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Self::split(s)?)
    }
}

/// Generate a random observation for a given street
impl From<Street> for Observation {
    fn from(street: Street) -> Self {
        let mut deck = Deck::new();
        let pocket = deck.deal(2);
        let public = deck.deal(street.n_observed());
        Self { pocket, public }
    }
}

impl Arbitrary for Observation {
    fn random() -> Self {
        Self::from(Street::random())
    }
}

impl std::fmt::Display for Observation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{} ~ {}", self.pocket, self.public)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_is_valid() {
        let obs = Observation::random();
        assert!(Observation::try_from((*obs.pocket(), *obs.public())) == Ok(obs));
    }

    #[test]
    fn parse_display() {
        let obs = Observation::try_from("AsKs ~ 2c 3d 4h").unwrap();
        assert!(obs.street() == Some(Street::Flop));
        assert!(Observation::try_from(obs.to_string().as_str()) == Ok(obs));
    }

    #[test]
    fn preflop_without_separator() {
        let obs = Observation::try_from("AsKs").unwrap();
        assert!(obs.public().size() == 0);
        assert!(obs.street() == Some(Street::Pref));
    }

    #[test]
    fn spaced_cards_without_separator() {
        let spaced = Observation::try_from("As Ks 2c 3d 4h").unwrap();
        let tilde = Observation::try_from("AsKs ~ 2c3d4h").unwrap();
        assert!(spaced == tilde);
        let (pocket, public) = Observation::split("7h 2c").unwrap();
        assert!(pocket.to_string() == "7h2c");
        assert!(public == Hand::empty());
        assert!(Observation::split("As Ks As").is_err());
        assert!(Observation::split("As Ks 2c 3d").is_ok());
    }

    #[test]
    fn rejects_invalid() {
        assert!(Observation::try_from("AsKsQs ~ 2c3d4h").is_err());
        assert!(Observation::try_from("AsKs ~ 2c3d").is_err());
        assert!(Observation::try_from("AsKs ~ As3d4h").is_err());
    }
}
