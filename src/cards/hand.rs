use super::card::Card;
use super::rank::Rank;
use super::suit::Suit;

/// An unordered set of cards as a 52-bit mask.
///
/// Bit `rank + 13 * suit` is set iff that card is in the set. A single word
/// holds any hand regardless of size, so hands are `Copy` and hash cheaply.
/// This is the representation persisted in cache records and filenames.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Hand(u64);

impl Hand {
    pub const fn empty() -> Self {
        Self(0)
    }
    pub const fn mask() -> u64 {
        0x000FFFFFFFFFFFFF
    }
    pub fn size(&self) -> usize {
        self.0.count_ones() as usize
    }
    pub fn contains(&self, card: &Card) -> bool {
        self.0 & u64::from(*card) != 0
    }
    pub fn overlaps(&self, other: &Self) -> bool {
        self.0 & other.0 != 0
    }
    /// Disjoint union. Overlapping operands are a caller bug.
    pub fn add(lhs: Self, rhs: Self) -> Self {
        debug_assert!(!lhs.overlaps(&rhs));
        Self(lhs.0 | rhs.0)
    }
    pub fn complement(&self) -> Self {
        Self(self.0 ^ Self::mask())
    }
    /// The cards of this hand that belong to `suit`.
    pub fn of(&self, suit: &Suit) -> Self {
        Self(self.0 & u64::from(*suit))
    }
    /// Rank bitset of `suit` within this hand, bit `r` for rank `r`.
    pub fn ranks(&self, suit: &Suit) -> u16 {
        ((self.0 >> suit.offset()) as u16) & Rank::mask()
    }
    /// Highest rank of `suit` present, if any.
    pub fn max_rank(&self, suit: &Suit) -> Option<Rank> {
        match self.ranks(suit) {
            0 => None,
            ranks => Some(Rank::from(ranks)),
        }
    }
    pub fn remove(&mut self, card: Card) {
        self.0 &= !u64::from(card);
    }
}

/// we empty a hand from low to high
/// by removing the lowest card until the hand is empty
impl Iterator for Hand {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        if self.0 == 0 {
            None
        } else {
            let card = Card::from(self.0.trailing_zeros() as u8);
            self.remove(card);
            Some(card)
        }
    }
}

/// u64 isomorphism
impl From<u64> for Hand {
    fn from(n: u64) -> Self {
        Self(n & Self::mask())
    }
}
impl From<Hand> for u64 {
    fn from(h: Hand) -> Self {
        h.0
    }
}

impl From<Card> for Hand {
    fn from(card: Card) -> Self {
        Self(u64::from(card))
    }
}

/// Vec<Card> isomorphism (up to Vec permutation, this always comes out ascending)
impl From<Hand> for Vec<Card> {
    fn from(h: Hand) -> Self {
        h.collect()
    }
}
impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Self {
        Self(cards.into_iter().map(u64::from).fold(0u64, |a, b| a | b))
    }
}

/// str isomorphism
/// duplicate cards are rejected rather than silently collapsed
impl TryFrom<&str> for Hand {
    type Error = String;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cards = Card::parse(s)?;
        let hand = Self::from(cards.clone());
        match hand.size() == cards.len() {
            true => Ok(hand),
            false => Err(format!("duplicate card in {:?}", s)),
        }
    }
}

/// cards high to low with no separator, "AsKs"
/// this is the notation used for cache filenames
impl std::fmt::Display for Hand {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for card in Vec::<Card>::from(*self).into_iter().rev() {
            write!(f, "{}", card)?;
        }
        Ok(())
    }
}

impl crate::Arbitrary for Hand {
    fn random() -> Self {
        Self::from(rand::random::<u64>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;

    #[test]
    fn bijective_u64() {
        let hand = Hand::random();
        assert!(hand == Hand::from(u64::from(hand)));
    }

    #[test]
    fn card_iteration() {
        let mut iter = Hand::try_from("Jc Ts 2c Js").unwrap().into_iter();
        assert!(iter.next() == Card::try_from("2c").ok());
        assert!(iter.next() == Card::try_from("Jc").ok());
        assert!(iter.next() == Card::try_from("Ts").ok());
        assert!(iter.next() == Card::try_from("Js").ok());
        assert!(iter.next() == None);
    }

    #[test]
    fn ranks_in_suit() {
        let hand = Hand::try_from("2c 3d 4h 5s 6c 7d 8h 9s Tc Jd Qh Ks Ac").unwrap();
        assert!(hand.ranks(&Suit::C) == 0b_1000100010001); // 2c 6c Tc Ac
        assert!(hand.ranks(&Suit::D) == 0b_0001000100010); // 3d 7d Jd
        assert!(hand.ranks(&Suit::H) == 0b_0010001000100); // 4h 8h Qh
        assert!(hand.ranks(&Suit::S) == 0b_0100010001000); // 5s 9s Ks
        assert!(hand.of(&Suit::S).size() == 3);
    }

    #[test]
    fn max_rank_in_suit() {
        let hand = Hand::try_from("7h Qh 2c").unwrap();
        assert!(hand.max_rank(&Suit::H) == Some(Rank::Queen));
        assert!(hand.max_rank(&Suit::C) == Some(Rank::Two));
        assert!(hand.max_rank(&Suit::S) == None);
    }

    #[test]
    fn notation_high_to_low() {
        let hand = Hand::try_from("Ks As").unwrap();
        assert!(hand.to_string() == "AsKs");
        assert!(Hand::try_from(hand.to_string().as_str()) == Ok(hand));
    }

    #[test]
    fn rejects_duplicates() {
        assert!(Hand::try_from("AsAs").is_err());
        assert!(Hand::try_from("AsQ").is_err());
    }

    #[test]
    fn complement_partitions_deck() {
        let hand = Hand::random();
        assert!(!hand.overlaps(&hand.complement()));
        assert!(hand.size() + hand.complement().size() == 52);
    }
}
