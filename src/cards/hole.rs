use super::card::Card;
use super::hand::Hand;
use super::rank::Rank;
use super::suit::Suit;

/// Two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    /// The 169 strategically distinct starting hands.
    ///
    /// 13 pairs, 78 suited and 78 offsuit rank pairs, one representative
    /// each: pairs and offsuit hands in spades and hearts, suited hands in
    /// spades. Ordered by high rank, then low rank, then suitedness.
    pub fn classes() -> Vec<Self> {
        let mut classes = Vec::with_capacity(169);
        for hi in Rank::all().into_iter().rev() {
            for lo in Rank::all().into_iter().rev().filter(|lo| *lo <= hi) {
                let a = Card::from((hi, Suit::S));
                if hi == lo {
                    classes.push(Self::from((a, Card::from((lo, Suit::H)))));
                } else {
                    classes.push(Self::from((a, Card::from((lo, Suit::S)))));
                    classes.push(Self::from((a, Card::from((lo, Suit::H)))));
                }
            }
        }
        classes
    }
    pub fn is_pair(&self) -> bool {
        let [a, b] = self.cards();
        a.rank() == b.rank()
    }
    pub fn is_suited(&self) -> bool {
        let [a, b] = self.cards();
        a.suit() == b.suit()
    }
    /// The two cards, high first.
    pub fn cards(&self) -> [Card; 2] {
        let mut cards = self.0.into_iter();
        let lo = cards.next().unwrap_or(Card::from(0u8));
        let hi = cards.next().unwrap_or(lo);
        [hi, lo]
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<Hand> for Hole {
    type Error = String;
    fn try_from(hand: Hand) -> Result<Self, Self::Error> {
        match hand.size() {
            2 => Ok(Self(hand)),
            n => Err(format!("hole needs 2 cards, got {}", n)),
        }
    }
}
impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(Hand::from(u64::from(a) | u64::from(b)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn one_hundred_sixty_nine() {
        let classes = Hole::classes();
        assert!(classes.len() == 169);
        assert!(classes.iter().filter(|h| h.is_pair()).count() == 13);
        assert!(classes.iter().filter(|h| h.is_suited()).count() == 78);
        assert!(classes.iter().filter(|h| !h.is_pair() && !h.is_suited()).count() == 78);
    }

    #[test]
    fn classes_are_distinct() {
        let classes = Hole::classes();
        let unique = classes.iter().map(|h| (h.cards()[0].rank(), h.cards()[1].rank(), h.is_suited())).collect::<HashSet<_>>();
        assert!(unique.len() == 169);
    }

    #[test]
    fn first_class_is_aces() {
        let aces = Hole::classes()[0];
        assert!(aces.to_string() == "AsAh");
    }

    #[test]
    fn rejects_wrong_size() {
        assert!(Hole::try_from(Hand::try_from("AsKsQs").unwrap()).is_err());
        assert!(Hole::try_from(Hand::try_from("AsKs").unwrap()).is_ok());
    }
}
